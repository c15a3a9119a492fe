#[cfg(feature = "url-events")]
use crate::router::RouterError;

/// A hash-change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashChange {
    new_hash: String,
}

impl HashChange {
    pub fn new(hash: impl Into<String>) -> Self {
        Self {
            new_hash: hash.into(),
        }
    }

    /// Builds the event from the full new URL, keeping only its fragment.
    #[cfg(feature = "url-events")]
    pub fn from_url(url: &str) -> Result<Self, RouterError> {
        let parsed = url::Url::parse(url)?;
        match parsed.fragment() {
            Some(fragment) => Ok(Self::new(fragment)),
            None => Err(RouterError::MissingFragment { url: url.into() }),
        }
    }

    pub fn new_hash(&self) -> &str {
        &self.new_hash
    }

    pub fn into_hash(self) -> String {
        self.new_hash
    }
}

impl From<String> for HashChange {
    fn from(hash: String) -> Self {
        Self::new(hash)
    }
}

impl From<&str> for HashChange {
    fn from(hash: &str) -> Self {
        Self::new(hash)
    }
}

#[cfg(feature = "url-events")]
#[test]
fn test_from_url() {
    let ev = HashChange::from_url("http://localhost:8080/index.html#/pages/test/").unwrap();
    assert_eq!(ev.new_hash(), "/pages/test/");

    let ev = HashChange::from_url("http://localhost/#").unwrap();
    assert_eq!(ev.new_hash(), "");

    assert!(HashChange::from_url("http://localhost/").is_err());
    assert!(HashChange::from_url("not a url").is_err());
}
