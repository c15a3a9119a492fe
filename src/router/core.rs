use super::HashRouter;
use crate::handler::{Params, Request};
use crate::host::{BaseSink, Location};

use tracing::{debug, error, trace, warn};

const HASH: char = '#';
const SLASH: char = '/';

/// The outcome of one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A redirect matched; the new hash has been written to the location.
    Redirected(String),
    /// The route registered at `index` was dispatched.
    Dispatched { index: usize },
    /// Neither a redirect nor a route matched.
    Unmatched,
    /// A redirect matched but the chain already hit the redirect limit.
    RedirectLimit,
}

impl<L, S> HashRouter<L, S>
where
    L: Location,
    S: BaseSink,
{
    pub fn resolve(&mut self, raw_hash: &str) -> Resolution {
        let hash = trim_hash(raw_hash);
        let empty_hash = hash.is_empty();
        let hash = if empty_hash { "/" } else { hash };
        let path = strip_root(&self.config.root, hash);

        // an empty hash is also caught by redirects registered on ""
        let target = self
            .redirects
            .iter()
            .find(|r| {
                r.pattern.is_match(path) || (empty_hash && r.pattern.as_str().is_empty())
            })
            .map(|r| format!("{}{}", self.config.root, r.to));

        if let Some(target) = target {
            return self.issue_redirect(path, target);
        }
        self.redirect_hops = 0;

        let base = derive_base(&self.config.root, path);
        trace!(base = %base, "set base");
        self.sink.set_base(&base);

        let loader = self.loader.as_deref();
        for (index, route) in self.routes.iter().enumerate() {
            let captures = match route.pattern.matches(path) {
                Some(c) => c,
                None => continue,
            };
            let pattern = route.pattern.as_str();
            let params = Params::new(path, &captures);
            let req = Request::new(path, pattern, route.update_history, loader);

            debug!(path, pattern, "dispatch");
            if let Err(e) = route.handler.call(req, params) {
                error!(path, pattern, error = %e, "route handler failed");
            }
            return Resolution::Dispatched { index };
        }

        warn!(path, "no route matched");
        Resolution::Unmatched
    }
}

impl<L, S> HashRouter<L, S>
where
    L: Location,
{
    fn issue_redirect(&mut self, path: &str, target: String) -> Resolution {
        // writing the current hash raises no event, so the chain ends here
        if trim_hash(&self.location.hash()) == target {
            debug!(path, to = %target, "redirect to current hash");
            self.redirect_hops = 0;
            self.location.set_hash(&target);
            return Resolution::Redirected(target);
        }

        let limit = self.config.redirect_limit;
        if limit > 0 && self.redirect_hops >= limit {
            error!(path, limit, "redirect limit reached, dropping redirect");
            self.redirect_hops = 0;
            return Resolution::RedirectLimit;
        }
        self.redirect_hops += 1;
        debug!(path, to = %target, "redirect");
        self.location.set_hash(&target);
        Resolution::Redirected(target)
    }
}

/// The directory part of `path`, prefixed with `root`.
///
/// `/pages/test/` and `/pages/test/something` both give `root + "/pages/test/"`.
pub fn derive_base(root: &str, path: &str) -> String {
    let dir = match path.rfind(SLASH) {
        Some(i) => &path[..=i],
        None => "",
    };
    let mut base = String::with_capacity(root.len() + dir.len());
    base.push_str(root);
    base.push_str(dir);
    base
}

#[inline]
fn trim_hash(s: &str) -> &str {
    if s.starts_with(HASH) {
        &s[1..]
    } else {
        s
    }
}

/// Removes exactly `root`, nothing more.
#[inline]
fn strip_root<'p>(root: &str, path: &'p str) -> &'p str {
    if !root.is_empty() && path.starts_with(root) {
        &path[root.len()..]
    } else {
        path
    }
}

#[test]
fn test_derive_base() {
    let cases: &[(&str, &str, &str)] = &[
        ("", "/pages/test/", "/pages/test/"),
        ("", "/pages/test/something", "/pages/test/"),
        ("/app", "/pages/test/", "/app/pages/test/"),
        ("/app", "/home", "/app/"),
        ("", "/", "/"),
        ("/app", "home", "/app"),
        ("", "", ""),
    ];

    for &(root, path, base) in cases {
        assert_eq!(derive_base(root, path), base, "root = {:?}, path = {:?}", root, path);
    }
}

#[test]
fn test_strip() {
    assert_eq!(trim_hash("#/home"), "/home");
    assert_eq!(trim_hash("/home"), "/home");
    assert_eq!(trim_hash("#"), "");
    assert_eq!(trim_hash("##x"), "#x");

    assert_eq!(strip_root("/app", "/app/home"), "/home");
    assert_eq!(strip_root("/app", "/application"), "lication");
    assert_eq!(strip_root("/app", "/home"), "/home");
    assert_eq!(strip_root("", "/home"), "/home");
}
