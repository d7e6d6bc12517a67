use crate::{config::AvatarConfig, hash};

const SMALL_SIZE: u32 = 30;
const LARGE_SIZE: u32 = 200;

#[derive(Clone, Debug)]
pub struct AvatarUrls {
    pub small: String,
    pub large: String,
}

pub(crate) fn build(
    config: &AvatarConfig,
    account: Option<&str>,
    network_name: &str,
    nick: &str,
) -> AvatarUrls {
    let base = match account {
        Some(account) => format!("{}gravatar/{account}", config.gateway_url),
        None => format!(
            "{}{}",
            config.gravatar_url,
            hash::identity_hash(network_name, nick)
        ),
    };

    let base = format!("{base}?r={}&d={}", config.rating, config.fallback);

    AvatarUrls {
        small: format!("{base}&s={SMALL_SIZE}"),
        large: format!("{base}&s={LARGE_SIZE}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_urls_go_through_the_gateway() {
        let urls = build(
            &AvatarConfig::default(),
            Some("alice123"),
            "freenode",
            "alice",
        );
        assert_eq!(urls.small, "/gravatar/alice123?r=g&d=robohash&s=30");
        assert_eq!(urls.large, "/gravatar/alice123?r=g&d=robohash&s=200");
    }

    #[test]
    fn hashed_urls_for_default_settings() {
        let urls = build(&AvatarConfig::default(), None, "freenode", "alice");
        insta::assert_snapshot!(urls.small, @"//www.gravatar.com/avatar/1ceec7c8a18828bb3a927666f1f78cd4?r=g&d=robohash&s=30");
        insta::assert_snapshot!(urls.large, @"//www.gravatar.com/avatar/1ceec7c8a18828bb3a927666f1f78cd4?r=g&d=robohash&s=200");
    }

    #[test]
    fn sizes_are_the_only_difference() {
        let config = AvatarConfig {
            rating: "pg".into(),
            fallback: "identicon".into(),
            ..AvatarConfig::default()
        };

        let urls = build(&config, None, "libera", "eve");
        let small = urls.small.strip_suffix("&s=30").unwrap();
        let large = urls.large.strip_suffix("&s=200").unwrap();
        assert_eq!(small, large);
        assert!(small.ends_with("?r=pg&d=identicon"));
    }
}
