use std::path::{Path, PathBuf};

use cn_core::AreaCode;

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("demos")
        .join(name)
}

#[test]
fn demo_loads_and_builds() {
    let description = cn_project::load(&demo("network.yaml"))
        .unwrap_or_else(|e| panic!("Failed to load demo: {e}"));
    assert_eq!(description.stations.len(), 8);

    let mut network = cn_project::build_network(&description)
        .unwrap_or_else(|e| panic!("Failed to build demo: {e}"));
    assert_eq!(network.edges_size().unwrap(), 8);
    assert_eq!(network.quick_edges_size().unwrap(), 8);

    let route = network
        .trajectory(AreaCode::from_u32(81), AreaCode::from_u32(998))
        .unwrap();
    let codes: Vec<u32> = route.iter().map(AreaCode::get).collect();
    assert_eq!(codes, vec![81, 444, 442, 55, 222, 998]);
}
