use hash_router::{
    hash_router, HashChange, HashRouter, Location, MemoryBase, MemoryLocation, Params, Request,
    Resolution, RouterConfig, DEFAULT_REDIRECT_LIMIT,
};

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

type Calls = Rc<RefCell<Vec<(&'static str, Vec<(String, String)>, String)>>>;

fn recorder(calls: &Calls, name: &'static str) -> impl Fn(Request<'_>, Params) + 'static {
    let calls = calls.clone();
    move |req: Request<'_>, params: Params| {
        let params = params.into_iter().collect();
        calls
            .borrow_mut()
            .push((name, params, req.path().to_owned()));
    }
}

fn names(calls: &Calls) -> Vec<&'static str> {
    calls.borrow().iter().map(|c| c.0).collect()
}

fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
    v.iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
}

fn scenario<L>(location: L) -> (HashRouter<L, MemoryBase>, Calls) {
    let calls = Calls::default();
    let mut router = HashRouter::new(location, MemoryBase::new());
    router
        .route("/home", recorder(&calls, "home"))
        .route("/pages/:key/", recorder(&calls, "pages"))
        .route("/bobby/*glob1/*glob2", recorder(&calls, "bobby"))
        .route("/pages/:key/*rest", recorder(&calls, "rest"))
        .redirect("", "/home");
    (router, calls)
}

fn started(hash: &str) -> (HashRouter<MemoryLocation, MemoryBase>, Calls) {
    let (mut router, calls) = scenario(MemoryLocation::new(hash));
    router.start();
    router.run_pending();
    (router, calls)
}

#[test]
fn router_empty_hash_redirects_home() {
    let (mut router, calls) = scenario(MemoryLocation::new(""));

    assert_eq!(router.start(), Resolution::Redirected("/home".into()));
    assert!(calls.borrow().is_empty());
    assert_eq!(router.sink().href(), None);
    assert_eq!(router.location().hash(), "/home");

    assert_eq!(router.run_pending(), 1);
    assert_eq!(
        *calls.borrow(),
        [("home", vec![], "/home".to_owned())]
    );
    assert_eq!(router.sink().href(), Some("/"));
}

#[test]
fn router_named_capture() {
    let (mut router, calls) = started("");
    calls.borrow_mut().clear();

    let ret = router.on_hash_change(HashChange::new("#/pages/test/"));
    assert_eq!(ret, Some(Resolution::Dispatched { index: 1 }));
    assert_eq!(
        *calls.borrow(),
        [("pages", pairs(&[("key", "test")]), "/pages/test/".to_owned())]
    );
    assert_eq!(router.sink().href(), Some("/pages/test/"));
}

#[test]
fn router_adjacent_wildcards() {
    let (mut router, calls) = started("/home");
    calls.borrow_mut().clear();

    router.on_hash_change(HashChange::new("/bobby/something/deep/and/yet/deeper"));
    assert_eq!(
        *calls.borrow(),
        [(
            "bobby",
            pairs(&[("glob1", "something/deep/and/yet"), ("glob2", "deeper")]),
            "/bobby/something/deep/and/yet/deeper".to_owned()
        )]
    );
    assert_eq!(router.sink().href(), Some("/bobby/something/deep/and/yet/"));
}

#[test]
fn router_trailing_wildcard() {
    let (mut router, calls) = started("#/pages/test/something/deep");

    assert_eq!(
        *calls.borrow(),
        [(
            "rest",
            pairs(&[("key", "test"), ("rest", "something/deep")]),
            "/pages/test/something/deep".to_owned()
        )]
    );
    assert_eq!(router.sink().href(), Some("/pages/test/something/"));
    assert!(router.location().history().is_empty());
}

#[test]
fn router_redirect_priority() {
    let calls = Calls::default();
    let mut router = HashRouter::new(MemoryLocation::new("/old"), MemoryBase::new());
    router
        .route("/old", recorder(&calls, "old"))
        .route("/new", recorder(&calls, "new"))
        .redirect("/old", "/new");

    assert_eq!(router.start(), Resolution::Redirected("/new".into()));
    assert!(calls.borrow().is_empty());

    router.run_pending();
    assert_eq!(names(&calls), ["new"]);
}

#[test]
fn router_first_redirect_wins() {
    let mut router = HashRouter::new(MemoryLocation::new("/x/1"), MemoryBase::new());
    router.redirect("/x/:id", "/first").redirect("/x/*rest", "/second");

    assert_eq!(router.start(), Resolution::Redirected("/first".into()));
}

#[test]
fn router_first_match_wins() {
    let calls = Calls::default();
    let mut router = HashRouter::new(MemoryLocation::new("/a/b"), MemoryBase::new());
    router
        .route("/a/:x", recorder(&calls, "first"))
        .route("/a/:y", recorder(&calls, "second"))
        .route("/a/*z", recorder(&calls, "third"));

    assert_eq!(router.start(), Resolution::Dispatched { index: 0 });
    assert_eq!(names(&calls), ["first"]);
}

#[test]
fn router_root_prefix() {
    let calls = Calls::default();
    let config = RouterConfig::new("/app");
    let mut router =
        HashRouter::with_config(config, MemoryLocation::new("#/app"), MemoryBase::new()).unwrap();
    router
        .route("/home", recorder(&calls, "home"))
        .route("/docs/*page", recorder(&calls, "docs"))
        .redirect("", "/home");

    assert_eq!(router.start(), Resolution::Redirected("/app/home".into()));
    router.run_pending();
    assert_eq!(
        *calls.borrow(),
        [("home", vec![], "/home".to_owned())]
    );
    assert_eq!(router.sink().href(), Some("/app/"));

    router.on_hash_change(HashChange::new("/app/docs/guide/intro"));
    assert_eq!(calls.borrow()[1].2, "/docs/guide/intro");
    assert_eq!(router.sink().href(), Some("/app/docs/guide/"));

    // only the literal prefix is removed
    let ret = router.on_hash_change(HashChange::new("/apphome"));
    assert_eq!(ret, Some(Resolution::Unmatched));
    assert_eq!(router.sink().href(), Some("/app"));
}

#[test]
fn router_unmatched_still_sets_base() {
    let (mut router, calls) = started("/home");
    let writes = router.sink().writes();

    let ret = router.on_hash_change(HashChange::new("/nowhere/at/all"));
    assert_eq!(ret, Some(Resolution::Unmatched));
    assert_eq!(names(&calls), ["home"]);
    assert_eq!(router.sink().href(), Some("/nowhere/at/"));
    assert_eq!(router.sink().writes(), writes + 1);

    let ret = router.on_hash_change(HashChange::new("/home"));
    assert_eq!(ret, Some(Resolution::Dispatched { index: 0 }));
}

#[test]
fn router_idempotent() {
    let (mut router, calls) = started("/home");
    calls.borrow_mut().clear();

    let first = router.resolve("#/pages/test/something/deep");
    let second = router.resolve("#/pages/test/something/deep");
    assert_eq!(first, second);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn router_ignores_events_before_start() {
    let (mut router, calls) = scenario(MemoryLocation::new("/home"));

    assert_eq!(router.on_hash_change(HashChange::new("/home")), None);
    assert!(calls.borrow().is_empty());
    assert!(!router.is_started());

    router.start();
    assert!(router.is_started());
    assert_eq!(names(&calls), ["home"]);
}

#[test]
fn router_redirect_limit() {
    let calls = Calls::default();
    let config = RouterConfig::default().with_redirect_limit(4);
    let mut router =
        HashRouter::with_config(config, MemoryLocation::new("/a"), MemoryBase::new()).unwrap();
    router
        .redirect("/a", "/b")
        .redirect("/b", "/a")
        .route("/home", recorder(&calls, "home"));

    assert_eq!(router.start(), Resolution::Redirected("/b".into()));
    assert_eq!(router.run_pending(), 4);
    assert_eq!(router.location().history(), ["/b", "/a", "/b", "/a"]);
    assert_eq!(router.sink().href(), None);

    // the guard resets once a resolution settles
    router.on_hash_change(HashChange::new("/home"));
    assert_eq!(names(&calls), ["home"]);
    assert_eq!(
        router.on_hash_change(HashChange::new("/a")),
        Some(Resolution::Redirected("/b".into()))
    );
}

#[test]
fn router_redirect_chain_below_limit() {
    let calls = Calls::default();
    let mut router = HashRouter::new(MemoryLocation::new("/v1"), MemoryBase::new());
    router
        .redirect("/v1", "/v2")
        .redirect("/v2", "/v3")
        .route("/v3", recorder(&calls, "v3"));

    assert_eq!(router.config().redirect_limit, DEFAULT_REDIRECT_LIMIT);
    router.start();
    assert_eq!(router.run_pending(), 2);
    assert_eq!(names(&calls), ["v3"]);
}

#[test]
fn router_empty_hash_reads_as_slash() {
    let calls = Calls::default();
    let mut router = HashRouter::new(MemoryLocation::new(""), MemoryBase::new());
    router
        .redirect("/", "/home")
        .route("/", recorder(&calls, "slash"))
        .route("/home", recorder(&calls, "home"));

    assert_eq!(router.start(), Resolution::Redirected("/home".into()));
    router.run_pending();
    assert_eq!(names(&calls), ["home"]);

    let calls = Calls::default();
    let mut router = HashRouter::new(MemoryLocation::new("#"), MemoryBase::new());
    router.route("/", recorder(&calls, "slash"));

    assert_eq!(router.start(), Resolution::Dispatched { index: 0 });
    assert_eq!(*calls.borrow(), [("slash", vec![], "/".to_owned())]);
    assert_eq!(router.sink().href(), Some("/"));
}

#[test]
fn router_root_remainder_kept_as_sliced() {
    let calls = Calls::default();
    let config = RouterConfig::new("/app");
    let mut router =
        HashRouter::with_config(config, MemoryLocation::new("#/app"), MemoryBase::new()).unwrap();
    router
        .route("/", recorder(&calls, "slash"))
        .route("", recorder(&calls, "bare"));

    assert_eq!(router.start(), Resolution::Dispatched { index: 1 });
    assert_eq!(*calls.borrow(), [("bare", vec![], String::new())]);
    assert_eq!(router.sink().href(), Some("/app"));
}

#[test]
fn router_empty_hash_with_root_redirects() {
    let calls = Calls::default();
    let config = RouterConfig::new("/app");
    let mut router =
        HashRouter::with_config(config, MemoryLocation::new(""), MemoryBase::new()).unwrap();
    router
        .redirect("", "/home")
        .route("/home", recorder(&calls, "home"));

    assert_eq!(router.start(), Resolution::Redirected("/app/home".into()));
    router.run_pending();
    assert_eq!(names(&calls), ["home"]);
    assert_eq!(router.sink().href(), Some("/app/"));
}

#[test]
fn router_redirect_to_current_hash_keeps_budget() {
    let config = RouterConfig::default().with_redirect_limit(2);
    let mut router =
        HashRouter::with_config(config, MemoryLocation::new("/x"), MemoryBase::new()).unwrap();
    router
        .redirect("/x", "/x")
        .redirect("/a", "/b")
        .redirect("/b", "/a");

    assert_eq!(router.start(), Resolution::Redirected("/x".into()));
    for _ in 0..3 {
        assert_eq!(
            router.on_hash_change(HashChange::new("/x")),
            Some(Resolution::Redirected("/x".into()))
        );
    }
    assert!(!router.location().has_pending());

    assert_eq!(
        router.on_hash_change(HashChange::new("/a")),
        Some(Resolution::Redirected("/b".into()))
    );
    assert_eq!(router.run_pending(), 2);
    assert_eq!(router.location().history(), ["/b", "/a"]);
}

#[test]
fn router_location_handle() {
    let (mut router, calls) = started("/home");

    router.location_mut().set_hash("/pages/test/");
    assert!(router.location().has_pending());

    let event = router.location_mut().next_event().unwrap();
    assert!(!router.location().has_pending());
    assert_eq!(event.clone().into_hash(), "/pages/test/");

    router.on_hash_change(event);
    assert_eq!(names(&calls), ["home", "pages"]);
}

#[test]
fn router_handler_error_is_contained() {
    let calls = Calls::default();
    let mut router = HashRouter::new(MemoryLocation::new("/fail"), MemoryBase::new());
    router
        .route(
            "/fail",
            |_: Request<'_>, _: Params| -> Result<(), io::Error> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            },
        )
        .route("/ok", recorder(&calls, "ok"));

    assert_eq!(router.start(), Resolution::Dispatched { index: 0 });

    router.on_hash_change(HashChange::new("/ok"));
    assert_eq!(names(&calls), ["ok"]);
}

#[test]
fn router_page_loader() {
    let loaded: Rc<RefCell<Vec<(String, bool)>>> = Rc::default();
    let mut router = HashRouter::new(MemoryLocation::new("/pages/intro/"), MemoryBase::new());

    {
        let loaded = loaded.clone();
        router.set_page_loader(move |page: &str, update_history: bool| {
            loaded.borrow_mut().push((page.to_owned(), update_history));
        });
    }

    router
        .route("/pages/:key/", |req: Request<'_>, params: Params| {
            let key = params.get("key").unwrap_or("index");
            assert!(req.load(&format!("pages/{}.html", key)));
        })
        .route_with(
            "/raw/*file",
            |req: Request<'_>, params: Params| {
                assert_eq!(req.pattern(), "/raw/*file");
                req.load(params.get("file").unwrap());
            },
            false,
        );

    router.start();
    router.on_hash_change(HashChange::new("/raw/a/b.txt"));

    assert_eq!(
        *loaded.borrow(),
        [
            ("pages/intro.html".to_owned(), true),
            ("a/b.txt".to_owned(), false)
        ]
    );
}

#[test]
fn router_without_loader() {
    let hit = Rc::new(RefCell::new(false));
    let mut router = HashRouter::new(MemoryLocation::new("/"), MemoryBase::new());
    {
        let hit = hit.clone();
        router.route("/", move |req: Request<'_>, _: Params| {
            assert!(req.loader().is_none());
            assert!(!req.load("index.html"));
            *hit.borrow_mut() = true;
        });
    }

    router.start();
    assert!(*hit.borrow());
}

#[test]
fn router_invalid_registration() {
    let mut router = HashRouter::new(MemoryLocation::new(""), MemoryBase::new());
    assert!(router
        .try_route("/u/:id/p/:id", |_: Request<'_>, _: Params| {}, true)
        .is_err());
    assert!(router.try_redirect("/u/:", "/home").is_err());
    assert!(router.try_redirect("/u/:id", "/home").is_ok());
}

#[test]
#[should_panic(expected = "capture name must be unique")]
fn router_invalid_route_panics() {
    let mut router = HashRouter::new(MemoryLocation::new(""), MemoryBase::new());
    router.route("/u/:id/*id", |_: Request<'_>, _: Params| {});
}

#[test]
fn router_invalid_root() {
    let config = RouterConfig::new("/app/:id");
    let ret = HashRouter::with_config(config, MemoryLocation::new(""), MemoryBase::new());
    assert!(ret.is_err());
}

#[test]
fn router_config_from_toml() {
    let config: RouterConfig = toml::from_str("root = \"/app\"").unwrap();
    assert_eq!(config, RouterConfig::new("/app"));

    let config: RouterConfig = toml::from_str("redirect_limit = 0").unwrap();
    assert_eq!(config.root, "");
    assert_eq!(config.redirect_limit, 0);
}

#[test]
fn router_macro() {
    let calls = Calls::default();
    let mut router = HashRouter::new(MemoryLocation::new(""), MemoryBase::new());

    hash_router! { router;
        REDIRECT "" => "/home",
        ROUTE "/home" => recorder(&calls, "home"),
        ROUTE "/u/:uid" => recorder(&calls, "user"),
    };

    router.start();
    router.run_pending();
    router.on_hash_change(HashChange::new("/u/asd"));

    assert_eq!(names(&calls), ["home", "user"]);
    assert_eq!(calls.borrow()[1].1, pairs(&[("uid", "asd")]));
}

#[cfg(feature = "url-events")]
#[test]
fn router_url_events() {
    let (mut router, calls) = started("/home");
    calls.borrow_mut().clear();

    let event = HashChange::from_url("https://example.com/index.html#/pages/test/").unwrap();
    router.on_hash_change(event);
    assert_eq!(names(&calls), ["pages"]);
}

#[cfg(feature = "stream")]
mod listen {
    use super::*;

    use futures::channel::mpsc;
    use futures::StreamExt;

    struct ChannelLocation {
        hash: String,
        tx: mpsc::UnboundedSender<HashChange>,
    }

    impl Location for ChannelLocation {
        fn hash(&self) -> String {
            self.hash.clone()
        }

        fn set_hash(&mut self, hash: &str) {
            self.hash = hash.to_owned();
            let _ = self.tx.unbounded_send(HashChange::new(hash));
        }
    }

    #[tokio::test]
    async fn router_listen() {
        let (tx, rx) = mpsc::unbounded();
        tx.unbounded_send(HashChange::new("#/pages/test/")).unwrap();

        let location = ChannelLocation {
            hash: String::new(),
            tx,
        };
        let (mut router, calls) = scenario(location);

        router.listen(rx.take(2)).await;

        assert_eq!(names(&calls), ["pages", "home"]);
        assert_eq!(router.location().hash(), "/home");
        assert_eq!(router.sink().href(), Some("/"));
    }
}
