use super::params::Params;
use super::{BoxError, StdError};
use crate::host::PageLoader;

/// What a route handler gets to know about the resolution that selected it.
pub struct Request<'a> {
    path: &'a str,
    pattern: &'a str,
    update_history: bool,
    loader: Option<&'a dyn PageLoader>,
}

impl<'a> Request<'a> {
    pub(crate) fn new(
        path: &'a str,
        pattern: &'a str,
        update_history: bool,
        loader: Option<&'a dyn PageLoader>,
    ) -> Self {
        Self {
            path,
            pattern,
            update_history,
            loader,
        }
    }

    /// The resolved path, with the hash delimiter and root already stripped.
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Source text of the pattern that matched.
    pub fn pattern(&self) -> &'a str {
        self.pattern
    }

    pub fn update_history(&self) -> bool {
        self.update_history
    }

    pub fn loader(&self) -> Option<&'a dyn PageLoader> {
        self.loader
    }

    /// Hands `page` to the installed page loader.
    ///
    /// Returns `false` when the router has no loader.
    pub fn load(&self, page: &str) -> bool {
        match self.loader {
            Some(loader) => {
                loader.load(page, self.update_history);
                true
            }
            None => false,
        }
    }
}

/// Return values a handler may produce.
pub trait Outcome {
    fn into_result(self) -> Result<(), BoxError>;
}

impl Outcome for () {
    fn into_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> Outcome for Result<(), E>
where
    E: StdError + Send + Sync + 'static,
{
    fn into_result(self) -> Result<(), BoxError> {
        self.map_err(|e| Box::new(e) as BoxError)
    }
}

pub trait Handler {
    fn call(&self, req: Request<'_>, params: Params) -> Result<(), BoxError>;
}

impl<F, O> Handler for F
where
    F: Fn(Request<'_>, Params) -> O,
    O: Outcome,
{
    fn call(&self, req: Request<'_>, params: Params) -> Result<(), BoxError> {
        (self)(req, params).into_result()
    }
}
