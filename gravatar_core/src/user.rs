#[derive(Clone, Debug, Default)]
pub struct Avatar {
    small: Option<String>,
    large: Option<String>,
}

impl Avatar {
    pub fn small(&self) -> Option<&str> {
        self.small.as_deref()
    }

    pub fn large(&self) -> Option<&str> {
        self.large.as_deref()
    }

    // the host treats an empty string the same as unset
    pub fn is_set(&self) -> bool {
        self.small.as_deref().map_or(false, |url| !url.is_empty())
    }

    // both urls come from the same base, so they are only ever assigned together
    pub fn assign(&mut self, small: impl Into<String>, large: impl Into<String>) {
        self.small = Some(small.into());
        self.large = Some(large.into());
    }
}

#[derive(Clone, Debug)]
pub struct User {
    nick: String,
    account: Option<String>,
    avatar: Avatar,
}

impl User {
    pub fn new(nick: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            account: None,
            avatar: Avatar::default(),
        }
    }

    pub fn with_account(nick: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
            ..Self::new(nick)
        }
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    pub fn set_account(&mut self, account: Option<String>) {
        self.account = account;
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn avatar_mut(&mut self) -> &mut Avatar {
        &mut self.avatar
    }
}
