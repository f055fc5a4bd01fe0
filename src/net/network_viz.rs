//! Snapshot hooks for the network.

use crate::viz::{VizLinkInfo, VizNodeInfo, VizTopology};

use super::Network;

impl Network {
    pub fn viz_snapshot(&self) -> VizTopology {
        let nodes = self
            .nodes()
            .iter()
            .map(|n| VizNodeInfo {
                id: n.id().0,
                name: n.name().to_string(),
                kind: n.kind().into(),
                dpid: n.switch_config().map(|c| c.dpid.clone()),
            })
            .collect::<Vec<_>>();
        let links = self
            .links()
            .iter()
            .map(|l| VizLinkInfo { a: l.a.0, b: l.b.0 })
            .collect::<Vec<_>>();
        VizTopology { nodes, links }
    }
}
