#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct NetworkId(pub u64);

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Network {
    pub id: NetworkId,
    // hash input for users without an account
    pub name: String,
}

impl Network {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: NetworkId(id),
            name: name.into(),
        }
    }
}
