#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("{msg}: pattern = {pattern:?}")]
    Pattern { pattern: Box<str>, msg: &'static str },

    #[error("invalid config: {msg}")]
    Config { msg: &'static str },

    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[cfg(feature = "url-events")]
    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[cfg(feature = "url-events")]
    #[error("url has no fragment: {url:?}")]
    MissingFragment { url: Box<str> },
}

impl RouterError {
    pub(super) fn pattern(pattern: &str, msg: &'static str) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            msg,
        }
    }
}
