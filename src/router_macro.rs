/// Registers routes and redirects on an existing [`HashRouter`](crate::HashRouter).
///
/// ```
/// use hash_router::{hash_router, HashRouter, MemoryBase, MemoryLocation, Params, Request};
///
/// fn home(_: Request<'_>, _: Params) {}
///
/// let mut router = HashRouter::new(MemoryLocation::new(""), MemoryBase::new());
/// hash_router! { router;
///     REDIRECT "" => "/home",
///     ROUTE "/home" => home,
/// };
/// ```
#[macro_export]
macro_rules! hash_router {
    {@entry $router:expr, ROUTE, $pattern:expr, $handler:expr} => {
        $router.route($pattern, $handler)
    };
    {@entry $router:expr, REDIRECT, $from:expr, $to:expr} => {
        $router.redirect($from, $to)
    };

    {$router:expr; $($kind:tt $pattern:expr => $target:expr),+ $(,)?} => {{
        let __router = &mut $router;
        $($crate::hash_router!(@entry __router, $kind, $pattern, $target);)+
    }};
}
