use gravatar::{config::AvatarConfig, Bridge, HostEvent};
use gravatar_config::LoadFromEnv;
use gravatar_core::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from([".dev.env"]);
    alto_logger::init_term_logger()?;

    let config = AvatarConfig::load_from_env();
    let mut bridge = Bridge::new(config);

    let network = Network::new(1, "freenode");
    let (tx, rx) = tokio::sync::mpsc::channel(32);

    // a canned presence session: a join, the channel who-list, then alice identifying
    tx.send(HostEvent::Join {
        network: network.clone(),
        event: JoinEvent {
            nick: "alice".into(),
            channel: "#rust".into(),
        },
    })
    .await?;
    tx.send(HostEvent::UserList {
        network: network.clone(),
        event: UserListEvent {
            users: vec![
                ListedUser { nick: "bob".into() },
                ListedUser { nick: "eve".into() },
            ],
        },
    })
    .await?;
    tx.send(HostEvent::Account {
        network: network.clone(),
        event: AccountEvent {
            nick: "alice".into(),
            account: Some("alice123".into()),
        },
    })
    .await?;
    drop(tx);

    bridge.start(rx).await?;

    for nick in ["alice", "bob", "eve"] {
        if let Some(user) = bridge.registry().user(network.id, nick) {
            log::info!(
                "{}: {}",
                user.nick(),
                user.avatar().small().unwrap_or("<unset>")
            );
        }
    }

    Ok(())
}
