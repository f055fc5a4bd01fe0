use crate::net::Network;
use crate::run::{NetRunner, SnapshotRunner};
use crate::topo::build_from_reader;
use crate::viz::{VizNodeKind, VizTopology};
use serde_json::Value;
use std::fs;
use std::io::Cursor;

use super::unique_temp_dir;

fn star() -> Network {
    let mut net = Network::default();
    build_from_reader(Cursor::new("2 1\nh1,s1\nh2,s1\n"), &mut net).expect("build");
    net
}

#[test]
fn snapshot_lists_nodes_with_kinds_and_dpids() {
    let snap = star().viz_snapshot();
    assert_eq!(snap.nodes.len(), 3);
    assert_eq!(snap.nodes[0].name, "h1");
    assert_eq!(snap.nodes[0].kind, VizNodeKind::Host);
    assert_eq!(snap.nodes[0].dpid, None);
    assert_eq!(snap.nodes[2].name, "s1");
    assert_eq!(snap.nodes[2].kind, VizNodeKind::Switch);
    assert_eq!(snap.nodes[2].dpid.as_deref(), Some("0000000000000001"));

    let pairs = snap.links.iter().map(|l| (l.a, l.b)).collect::<Vec<_>>();
    assert_eq!(pairs, [(0, 2), (1, 2)]);
}

#[test]
fn snapshot_json_omits_host_dpid_and_parses_back() {
    let snap = star().viz_snapshot();
    let raw = snap.to_json_pretty().expect("encode");

    let v: Value = serde_json::from_str(&raw).expect("parse json");
    let nodes = v["nodes"].as_array().expect("nodes array");
    assert!(nodes[0].get("dpid").is_none());
    assert_eq!(nodes[0]["kind"].as_str(), Some("host"));
    assert_eq!(nodes[2]["kind"].as_str(), Some("switch"));

    let decoded: VizTopology = serde_json::from_str(&raw).expect("decode snapshot");
    assert_eq!(decoded, snap);
}

#[test]
fn snapshot_runner_writes_json_file() {
    let dir = unique_temp_dir("snapshot");
    let out = dir.join("topo.json");

    let net = star();
    let mut runner = SnapshotRunner::new(Some(out.clone()));
    runner.run(&net).expect("run");

    let raw = fs::read_to_string(&out).expect("read snapshot");
    let decoded: VizTopology = serde_json::from_str(&raw).expect("decode snapshot");
    assert_eq!(decoded, net.viz_snapshot());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn snapshot_runner_without_output_only_reports() {
    let mut runner = SnapshotRunner::default();
    runner.run(&Network::default()).expect("run");
}
