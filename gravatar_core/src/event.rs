use crate::network::Network;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct JoinEvent {
    pub nick: String,
    pub channel: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ListedUser {
    pub nick: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct UserListEvent {
    pub users: Vec<ListedUser>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AccountEvent {
    pub nick: String,
    // None when the user signed out of their account
    pub account: Option<String>,
}

pub trait PresenceHooks {
    fn on_join(&mut self, event: &JoinEvent, network: &Network);
    fn on_user_list(&mut self, event: &UserListEvent, network: &Network);
    fn on_account_change(&mut self, event: &AccountEvent, network: &Network);
}
