use named_graph::{AdjacencyGraph, builder::GraphBuilder};

pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}

/// Two components: a city network reachable from "Amsterdam" and an island
/// ("Reykjavik" <-> "Akureyri") that nothing on the mainland points to.
pub fn setup() -> AdjacencyGraph<u32> {
    init_logger();

    GraphBuilder::new()
        .vertices([
            ("Amsterdam", 921_000),
            ("Berlin", 3_850_000),
            ("Cologne", 1_084_000),
            ("Dresden", 563_000),
            ("Essen", 584_000),
            ("Reykjavik", 139_000),
            ("Akureyri", 19_000),
        ])
        .edge_list_str(
            "Amsterdam Berlin 650\n\
             Amsterdam Cologne 260\n\
             Cologne Berlin 570\n\
             Cologne Essen 70\n\
             Essen Dresden 530\n\
             Berlin Dresden 190\n\
             Dresden Amsterdam 840\n\
             Reykjavik Akureyri 390\n\
             Akureyri Reykjavik 390",
        )
        .unwrap()
        .build()
        .unwrap()
}
