use crate::router::RouterError;

use serde::Deserialize;

pub const DEFAULT_REDIRECT_LIMIT: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Stripped from every incoming hash, prepended to every redirect target.
    pub root: String,
    /// Consecutive redirects allowed before the chain is cut. `0` never cuts.
    pub redirect_limit: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            root: String::new(),
            redirect_limit: DEFAULT_REDIRECT_LIMIT,
        }
    }
}

impl RouterConfig {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_redirect_limit(mut self, limit: usize) -> Self {
        self.redirect_limit = limit;
        self
    }

    pub fn validate(&self) -> Result<(), RouterError> {
        if self.root.contains(|c: char| c == ':' || c == '*') {
            return Err(RouterError::Config {
                msg: "root can not contain pattern syntax",
            });
        }
        Ok(())
    }
}

#[test]
fn test_validate() {
    assert!(RouterConfig::default().validate().is_ok());
    assert!(RouterConfig::new("/app").validate().is_ok());
    assert!(RouterConfig::new("/app/:id").validate().is_err());
    assert!(RouterConfig::new("/app/*").validate().is_err());
}
