use crate::net::{Network, NodeKind, SwitchConfig, TopoApi};

#[test]
fn switch_config_formats_dpid_as_16_hex_digits() {
    assert_eq!(SwitchConfig::from_index(1).dpid, "0000000000000001");
    assert_eq!(SwitchConfig::from_index(255).dpid, "00000000000000ff");
    assert_eq!(SwitchConfig::from_index(u64::MAX).dpid, "ffffffffffffffff");
}

#[test]
fn network_assigns_sequential_ids_and_indexes_names() {
    let mut net = Network::default();
    let api: &mut dyn TopoApi = &mut net;
    let h1 = api.add_host("h1");
    let s1 = api.add_switch("s1", SwitchConfig::from_index(1));
    let l = api.add_link(h1, s1);

    assert_eq!(h1.0, 0);
    assert_eq!(s1.0, 1);
    assert_eq!(l.0, 0);

    assert_eq!(net.node_id("h1"), Some(h1));
    assert_eq!(net.node(s1).map(|n| n.kind()), Some(NodeKind::Switch));
    assert_eq!(net.node(h1).map(|n| n.kind()), Some(NodeKind::Host));
    assert_eq!(
        net.node(s1).and_then(|n| n.switch_config()),
        Some(&SwitchConfig::from_index(1))
    );
    assert!(net.node(h1).and_then(|n| n.switch_config()).is_none());
    assert!(net.node_id("s2").is_none());
}

#[test]
fn links_are_undirected() {
    let mut net = Network::default();
    let h1 = net.add_host("h1");
    let h2 = net.add_host("h2");
    let s1 = net.add_switch("s1", SwitchConfig::from_index(1));
    net.add_link(s1, h1);

    assert!(net.has_link(h1, s1));
    assert!(net.has_link(s1, h1));
    assert!(!net.has_link(h2, s1));
    assert_eq!(net.neighbors(h1), vec![s1]);
    assert!(net.neighbors(h2).is_empty());
    assert_eq!(net.links()[0].other(s1), Some(h1));
    assert_eq!(net.links()[0].other(h2), None);
}
