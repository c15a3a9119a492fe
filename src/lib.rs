#![deny(unsafe_code)]

mod config;
mod router;
mod router_macro;

pub mod handler;
pub mod host;

pub use crate::config::{RouterConfig, DEFAULT_REDIRECT_LIMIT};
pub use crate::handler::{Handler, Params, Request};
pub use crate::host::{BaseSink, HashChange, Location, MemoryBase, MemoryLocation, PageLoader};
pub use crate::router::{derive_base, Captures, HashRouter, Pattern, Resolution, RouterError};
