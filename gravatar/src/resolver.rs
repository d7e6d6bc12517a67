use gravatar_core::prelude::*;

use crate::{config::AvatarConfig, url};

pub struct AvatarResolver {
    config: AvatarConfig,
    queue: DeferQueue<PendingUpdate>,
}

#[derive(Clone, Debug)]
struct PendingUpdate {
    network: Network,
    nick: String,
    force: bool,
}

impl AvatarResolver {
    pub fn new(config: AvatarConfig) -> Self {
        Self {
            config,
            queue: DeferQueue::default(),
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // runs once the batch of host state updates that raised the events has settled
    pub fn flush(&mut self, registry: &mut dyn UserRegistry) {
        if self.queue.is_empty() {
            return;
        }
        log::trace!("flushing {} deferred avatar updates", self.queue.len());

        let Self { config, queue } = self;
        for update in queue.drain() {
            apply(config, registry, update);
        }
    }
}

impl PresenceHooks for AvatarResolver {
    fn on_join(&mut self, event: &JoinEvent, network: &Network) {
        self.queue.defer(PendingUpdate {
            network: network.clone(),
            nick: event.nick.clone(),
            force: false,
        });
    }

    fn on_user_list(&mut self, event: &UserListEvent, network: &Network) {
        for user in &event.users {
            self.queue.defer(PendingUpdate {
                network: network.clone(),
                nick: user.nick.clone(),
                force: false,
            });
        }
    }

    fn on_account_change(&mut self, event: &AccountEvent, network: &Network) {
        // the account decides which source serves the image, so recompute
        self.queue.defer(PendingUpdate {
            network: network.clone(),
            nick: event.nick.clone(),
            force: true,
        });
    }
}

fn apply(config: &AvatarConfig, registry: &mut dyn UserRegistry, update: PendingUpdate) {
    let PendingUpdate {
        network,
        nick,
        force,
    } = update;

    // the user may have left before the deferred update ran
    let user = match registry.user_mut(network.id, &nick) {
        Some(user) => user,
        None => return,
    };

    if !force && user.avatar().is_set() {
        return;
    }

    // hash the canonical nick, not the event's spelling of it
    let urls = url::build(config, user.account(), &network.name, user.nick());
    log::debug!("setting avatar for {}", user.nick());
    user.avatar_mut().assign(urls.small, urls.large);
}
