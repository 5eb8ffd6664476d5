use parking_lot::RwLock;
use std::sync::Arc;

/// Bearer token shared by every clone of a client.
#[derive(Debug, Clone, Default)]
pub struct SessionToken(Arc<RwLock<Option<String>>>);

impl SessionToken {
    pub fn new(token: Option<String>) -> Self {
        Self(Arc::new(RwLock::new(token)))
    }

    pub fn get(&self) -> Option<String> {
        self.0.read().clone()
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.0.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.0.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_token() {
        let session = SessionToken::new(None);
        let other = session.clone();
        session.set("abc");
        assert_eq!(other.get().as_deref(), Some("abc"));
        other.clear();
        assert!(session.get().is_none());
    }
}
