mod load;
pub use load::{load_from_env, Assign, LoadFromEnv};

mod store;
pub use store::{MemoryStore, SettingsStore};
