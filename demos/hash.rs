use hash_router::{
    hash_router, HashChange, HashRouter, MemoryBase, MemoryLocation, Params, Request, RouterConfig,
};

use futures::executor::block_on;
use futures::stream;
use tracing_subscriber::EnvFilter;

fn home(req: Request<'_>, _: Params) {
    req.load("pages/home.html");
}

fn page(req: Request<'_>, params: Params) {
    let key = params.get("key").unwrap_or("index");
    req.load(&format!("pages/{}.html", key));
}

fn rest(req: Request<'_>, params: Params) {
    println!("{} -> {:?}", req.path(), params.iter().collect::<Vec<_>>());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RouterConfig::new("/site");
    let mut router =
        HashRouter::with_config(config, MemoryLocation::new("#/site"), MemoryBase::new())
            .expect("valid config");

    router.set_page_loader(|page: &str, update_history: bool| {
        println!("load {} (update history: {})", page, update_history);
    });

    hash_router! { router;
        REDIRECT "" => "/home",
        ROUTE "/home" => home,
        ROUTE "/pages/:key/" => page,
        ROUTE "/pages/:key/*rest" => rest,
    };

    let urls = [
        "http://localhost:3000/#/site/pages/test/",
        "http://localhost:3000/#/site/pages/test/something/deep",
        "http://localhost:3000/#/site/other",
    ];
    let events: Vec<HashChange> = urls
        .iter()
        .map(|url| HashChange::from_url(url).expect("url with fragment"))
        .collect();

    block_on(router.listen(stream::iter(events)));
    router.run_pending();

    println!("base: {:?}", router.sink().href());
}
