use super::pattern::Pattern;
use crate::handler::BoxHandler;

use std::fmt;

pub(super) struct Route {
    pub(super) pattern: Pattern,
    pub(super) handler: BoxHandler,
    pub(super) update_history: bool,
}

#[derive(Debug)]
pub(super) struct Redirect {
    pub(super) pattern: Pattern,
    pub(super) to: Box<str>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("update_history", &self.update_history)
            .finish()
    }
}
