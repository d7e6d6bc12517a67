pub mod event;
pub mod network;
pub mod queue;
pub mod registry;
pub mod user;

pub mod prelude {
    pub use crate::event::{AccountEvent, JoinEvent, ListedUser, PresenceHooks, UserListEvent};
    pub use crate::network::{Network, NetworkId};
    pub use crate::queue::DeferQueue;
    pub use crate::registry::{MemoryRegistry, UserRegistry};
    pub use crate::user::{Avatar, User};
}
