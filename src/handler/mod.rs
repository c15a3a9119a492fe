#![forbid(unsafe_code)]

mod params;
mod request;

pub use self::params::{IntoIter, Iter, Params};
pub use self::request::{Handler, Outcome, Request};

use std::error::Error as StdError;

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub(crate) type BoxHandler = Box<dyn Handler>;
