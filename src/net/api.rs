//! Graph-building API used by topology builders.

use super::{LinkId, NodeId, SwitchConfig};

/// Minimal graph API a topology builder populates.
pub trait TopoApi {
    fn add_host(&mut self, name: &str) -> NodeId;
    fn add_switch(&mut self, name: &str, config: SwitchConfig) -> NodeId;
    fn add_link(&mut self, a: NodeId, b: NodeId) -> LinkId;
}

impl TopoApi for super::Network {
    fn add_host(&mut self, name: &str) -> NodeId {
        super::Network::add_host(self, name)
    }

    fn add_switch(&mut self, name: &str, config: SwitchConfig) -> NodeId {
        super::Network::add_switch(self, name, config)
    }

    fn add_link(&mut self, a: NodeId, b: NodeId) -> LinkId {
        super::Network::add_link(self, a, b)
    }
}
