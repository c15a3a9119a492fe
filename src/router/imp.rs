use super::endpoint::{Redirect, Route};
use super::error::RouterError;
use super::pattern::Pattern;
use super::{HashRouter, Resolution};
use crate::config::RouterConfig;
use crate::handler::Handler;
use crate::host::{BaseSink, HashChange, Location, MemoryLocation, PageLoader};

use tracing::debug;

impl<L, S> HashRouter<L, S> {
    pub fn new(location: L, sink: S) -> Self {
        Self::from_parts(RouterConfig::default(), location, sink)
    }

    pub fn with_config(config: RouterConfig, location: L, sink: S) -> Result<Self, RouterError> {
        config.validate()?;
        Ok(Self::from_parts(config, location, sink))
    }

    fn from_parts(config: RouterConfig, location: L, sink: S) -> Self {
        Self {
            config,
            routes: Vec::new(),
            redirects: Vec::new(),
            loader: None,
            location,
            sink,
            started: false,
            redirect_hops: 0,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn route(&mut self, pattern: &str, handler: impl Handler + 'static) -> &mut Self {
        self.route_with(pattern, handler, true)
    }

    pub fn route_with(
        &mut self,
        pattern: &str,
        handler: impl Handler + 'static,
        update_history: bool,
    ) -> &mut Self {
        if let Err(e) = self.try_route(pattern, handler, update_history) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_route(
        &mut self,
        pattern: &str,
        handler: impl Handler + 'static,
        update_history: bool,
    ) -> Result<&mut Self, RouterError> {
        let pattern = Pattern::new(pattern)?;
        self.routes.push(Route {
            pattern,
            handler: Box::new(handler),
            update_history,
        });
        Ok(self)
    }

    pub fn redirect(&mut self, from: &str, to: &str) -> &mut Self {
        if let Err(e) = self.try_redirect(from, to) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_redirect(&mut self, from: &str, to: &str) -> Result<&mut Self, RouterError> {
        let pattern = Pattern::new(from)?;
        self.redirects.push(Redirect {
            pattern,
            to: to.into(),
        });
        Ok(self)
    }

    pub fn set_page_loader(&mut self, loader: impl PageLoader + 'static) -> &mut Self {
        self.loader = Some(Box::new(loader));
        self
    }
}

impl<L, S> HashRouter<L, S>
where
    L: Location,
    S: BaseSink,
{
    /// Resolves the current hash, then starts accepting hash changes.
    pub fn start(&mut self) -> Resolution {
        self.started = true;
        let hash = self.location.hash();
        self.resolve(&hash)
    }

    /// Returns `None` when the router has not been started.
    pub fn on_hash_change(&mut self, event: HashChange) -> Option<Resolution> {
        if !self.started {
            debug!(hash = event.new_hash(), "router not started, ignoring hash change");
            return None;
        }
        Some(self.resolve(event.new_hash()))
    }

    /// Starts the router and resolves every hash change `events` yields.
    #[cfg(feature = "stream")]
    pub async fn listen<E>(&mut self, events: E)
    where
        E: futures::Stream<Item = HashChange>,
    {
        use futures::StreamExt;

        futures::pin_mut!(events);
        self.start();
        while let Some(event) = events.next().await {
            self.on_hash_change(event);
        }
    }
}

impl<S: BaseSink> HashRouter<MemoryLocation, S> {
    /// Feeds the hash changes queued on the location back into the router
    /// until none are left. Returns how many were handled.
    ///
    /// Does not return on a redirect cycle when the redirect limit is `0`.
    pub fn run_pending(&mut self) -> usize {
        let mut n = 0;
        while let Some(event) = self.location.next_event() {
            self.on_hash_change(event);
            n += 1;
        }
        n
    }
}
