mod captures;
mod core;
mod endpoint;
mod error;
mod imp;
mod pattern;

pub use self::captures::Captures;
pub use self::core::{derive_base, Resolution};
pub use self::error::RouterError;
pub use self::pattern::Pattern;

use self::endpoint::{Redirect, Route};
use crate::config::RouterConfig;
use crate::host::PageLoader;

use std::fmt;

/// Resolves URL hashes to redirects or route handlers.
///
/// Redirects are tried before routes, each list in registration order, and
/// the first match wins. Every resolution that does not redirect pushes the
/// base path of the resolved path to the sink `S`.
///
/// Redirects are issued through the [`Location`](crate::host::Location) `L`
/// and come back as a fresh hash change. A chain of redirects is cut once it
/// exceeds [`RouterConfig::redirect_limit`].
pub struct HashRouter<L, S> {
    config: RouterConfig,
    routes: Vec<Route>,
    redirects: Vec<Redirect>,
    loader: Option<Box<dyn PageLoader>>,
    location: L,
    sink: S,
    started: bool,
    redirect_hops: usize,
}

impl<L: fmt::Debug, S: fmt::Debug> fmt::Debug for HashRouter<L, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRouter")
            .field("config", &self.config)
            .field("routes", &self.routes)
            .field("redirects", &self.redirects)
            .field("loader", &self.loader.is_some())
            .field("location", &self.location)
            .field("sink", &self.sink)
            .field("started", &self.started)
            .finish()
    }
}
