use gravatar_config::{load_from_env, LoadFromEnv, SettingsStore};

pub mod keys {
    pub const GATEWAY_URL: &str = "plugin-gravatar.gatewayURL";
    pub const GRAVATAR_URL: &str = "plugin-gravatar.gravatarURL";
    pub const RATING: &str = "plugin-gravatar.gravatarRating";
    pub const FALLBACK: &str = "plugin-gravatar.gravatarFallback";
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AvatarConfig {
    pub gateway_url: String,
    pub gravatar_url: String,
    pub rating: String,
    pub fallback: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            gateway_url: "/".into(),
            gravatar_url: "//www.gravatar.com/avatar/".into(),
            rating: "g".into(),
            fallback: "robohash".into(),
        }
    }
}

impl AvatarConfig {
    pub fn from_store(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            gateway_url: store.get(keys::GATEWAY_URL).unwrap_or(defaults.gateway_url),
            gravatar_url: store
                .get(keys::GRAVATAR_URL)
                .unwrap_or(defaults.gravatar_url),
            rating: store.get(keys::RATING).unwrap_or(defaults.rating),
            fallback: store.get(keys::FALLBACK).unwrap_or(defaults.fallback),
        }
    }
}

impl LoadFromEnv for AvatarConfig {
    fn load_from_env() -> Self {
        load_from_env(&[
            ("GRAVATAR_GATEWAY_URL", |t: &mut Self, v| t.gateway_url = v),
            ("GRAVATAR_BASE_URL", |t, v| t.gravatar_url = v),
            ("GRAVATAR_RATING", |t, v| t.rating = v),
            ("GRAVATAR_FALLBACK", |t, v| t.fallback = v),
        ])
    }
}

// never overwrites a value the user already set
pub fn seed_defaults(store: &mut dyn SettingsStore) {
    let defaults = AvatarConfig::default();
    let seed = [
        (keys::GATEWAY_URL, &defaults.gateway_url),
        (keys::GRAVATAR_URL, &defaults.gravatar_url),
        (keys::RATING, &defaults.rating),
        (keys::FALLBACK, &defaults.fallback),
    ];

    for (key, value) in seed {
        if store.get(key).is_none() {
            store.set(key, value);
        }
    }
}
