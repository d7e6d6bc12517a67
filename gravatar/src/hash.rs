use md5::{Digest, Md5};

// gravatar addressing, with `network:nick` standing in for the email
pub(crate) fn identity_hash(network: &str, nick: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(network);
    hasher.update(":");
    hasher.update(nick);
    hex::encode(hasher.finalize())
}
