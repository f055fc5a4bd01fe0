use crate::net::{Network, TopoApi};
use crate::topo::{
    BuildSummary, SDNIP_TOPO, Topo, TopoError, TopoParams, TopoRegistry, build_network,
};
use std::fs;

use super::unique_temp_dir;

struct SingleHost;

impl Topo for SingleHost {
    fn build(&self, api: &mut dyn TopoApi) -> crate::topo::Result<BuildSummary> {
        api.add_host("h1");
        Ok(BuildSummary {
            hosts: 1,
            switches: 0,
            links: 0,
            declared_links: None,
        })
    }
}

#[test]
fn default_registry_exposes_sdnip_only() {
    let registry = TopoRegistry::default();
    assert!(registry.contains(SDNIP_TOPO));
    assert_eq!(registry.keys().collect::<Vec<_>>(), [SDNIP_TOPO]);
}

#[test]
fn unknown_key_lists_available_topologies() {
    let registry = TopoRegistry::default();
    match registry.create("mesh", &TopoParams::default()) {
        Err(TopoError::UnknownTopo { key, available }) => {
            assert_eq!(key, "mesh");
            assert_eq!(available, "sdnip");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("mesh should not be registered"),
    }
}

#[test]
fn custom_factory_can_be_registered() {
    let mut registry = TopoRegistry::empty();
    registry.register("single", |_| Box::new(SingleHost));
    let topo = registry
        .create("single", &TopoParams::default())
        .expect("create");
    let net: Network = build_network(topo.as_ref()).expect("build");
    assert_eq!(net.host_count(), 1);
    assert_eq!(net.switch_count(), 0);
}

#[test]
fn sdnip_factory_reads_the_given_file() {
    let dir = unique_temp_dir("registry");
    let path = dir.join("custom.in");
    fs::write(&path, "1 1\nh1,s1\n").expect("write topo file");

    let registry = TopoRegistry::default();
    let topo = registry
        .create(SDNIP_TOPO, &TopoParams { file: path })
        .expect("create");
    let net = build_network(topo.as_ref()).expect("build");
    assert_eq!(net.link_names(), vec![("h1".to_string(), "s1".to_string())]);

    let _ = fs::remove_dir_all(&dir);
}
