use tokio::sync::mpsc::Receiver;

use gravatar_core::prelude::*;

use crate::{config::AvatarConfig, resolver::AvatarResolver};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum HostEvent {
    Join {
        network: Network,
        event: JoinEvent,
    },
    UserList {
        network: Network,
        event: UserListEvent,
    },
    Account {
        network: Network,
        event: AccountEvent,
    },
}

pub struct Bridge {
    registry: MemoryRegistry,
    resolver: AvatarResolver,
}

impl Bridge {
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            registry: MemoryRegistry::new(),
            resolver: AvatarResolver::new(config),
        }
    }

    pub fn registry(&self) -> &MemoryRegistry {
        &self.registry
    }

    pub async fn start(&mut self, mut events: Receiver<HostEvent>) -> anyhow::Result<()> {
        while let Some(event) = events.recv().await {
            self.apply(event);

            // settle the whole ready batch before running deferred updates
            while let Ok(event) = events.try_recv() {
                self.apply(event);
            }
            self.resolver.flush(&mut self.registry);
        }
        Ok(())
    }

    fn apply(&mut self, event: HostEvent) {
        match event {
            HostEvent::Join { network, event } => {
                log::debug!(
                    target: "gravatar::bridge",
                    "[{}] {} joined {}",
                    network.name,
                    event.nick,
                    event.channel
                );
                self.track(&network, &event.nick);
                self.resolver.on_join(&event, &network);
            }
            HostEvent::UserList { network, event } => {
                log::debug!(
                    target: "gravatar::bridge",
                    "[{}] user list with {} entries",
                    network.name,
                    event.users.len()
                );
                for user in &event.users {
                    self.track(&network, &user.nick);
                }
                self.resolver.on_user_list(&event, &network);
            }
            HostEvent::Account { network, event } => {
                log::debug!(
                    target: "gravatar::bridge",
                    "[{}] {} identified as {:?}",
                    network.name,
                    event.nick,
                    event.account
                );
                if let Some(user) = self.registry.user_mut(network.id, &event.nick) {
                    user.set_account(event.account.clone());
                }
                self.resolver.on_account_change(&event, &network);
            }
        }
    }

    // the host side of a presence event: make sure the user is tracked
    fn track(&mut self, network: &Network, nick: &str) {
        if self.registry.user(network.id, nick).is_none() {
            self.registry.insert(network.id, User::new(nick));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network() -> Network {
        Network::new(7, "freenode")
    }

    #[tokio::test]
    async fn resolves_avatars_for_a_presence_session() -> anyhow::Result<()> {
        let (tx, rx) = tokio::sync::mpsc::channel(16);

        tx.send(HostEvent::Join {
            network: network(),
            event: JoinEvent {
                nick: "alice".into(),
                channel: "#rust".into(),
            },
        })
        .await?;
        tx.send(HostEvent::UserList {
            network: network(),
            event: UserListEvent {
                users: vec![
                    ListedUser { nick: "bob".into() },
                    ListedUser { nick: "eve".into() },
                ],
            },
        })
        .await?;
        tx.send(HostEvent::Account {
            network: network(),
            event: AccountEvent {
                nick: "alice".into(),
                account: Some("alice123".into()),
            },
        })
        .await?;
        drop(tx);

        let mut bridge = Bridge::new(AvatarConfig::default());
        bridge.start(rx).await?;

        let registry = bridge.registry();
        assert_eq!(registry.len(), 3);

        let alice = registry.user(network().id, "alice").unwrap();
        assert_eq!(
            alice.avatar().small(),
            Some("/gravatar/alice123?r=g&d=robohash&s=30")
        );

        for nick in ["bob", "eve"] {
            let user = registry.user(network().id, nick).unwrap();
            assert!(user
                .avatar()
                .small()
                .unwrap()
                .starts_with("//www.gravatar.com/avatar/"));
        }
        Ok(())
    }

    #[test]
    fn host_events_deserialize_from_json() {
        let event: HostEvent = serde_json::from_str(
            r##"{"Join":{"network":{"id":7,"name":"freenode"},"event":{"nick":"alice","channel":"#rust"}}}"##,
        )
        .unwrap();

        match event {
            HostEvent::Join { network, event } => {
                assert_eq!(network.id, NetworkId(7));
                assert_eq!(network.name, "freenode");
                assert_eq!(event.nick, "alice");
            }
            other => panic!("expected a join, got {other:?}"),
        }
    }
}
