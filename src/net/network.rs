//! 网络拓扑管理
//!
//! 定义内存中的拓扑图：节点、链路以及名称到句柄的索引。

use std::collections::HashMap;

use super::id::{LinkId, NodeId};
use super::link::Link;
use super::node::{Host, Node, NodeKind, Switch, SwitchConfig};
use tracing::{trace, warn};

/// 网络拓扑
#[derive(Debug, Default, Clone)]
pub struct Network {
    nodes: Vec<Node>,
    links: Vec<Link>,
    by_name: HashMap<String, NodeId>,
}

impl Network {
    /// 添加主机节点
    pub fn add_host(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let host = Host::new(id, name);
        self.push_node(Node::Host(host))
    }

    /// 添加交换机节点
    pub fn add_switch(&mut self, name: impl Into<String>, config: SwitchConfig) -> NodeId {
        let id = NodeId(self.nodes.len());
        let switch = Switch::new(id, name, config);
        self.push_node(Node::Switch(switch))
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = node.id();
        trace!(node_id = ?id, name = node.name(), kind = ?node.kind(), "注册节点");
        if let Some(prev) = self.by_name.insert(node.name().to_string(), id) {
            warn!(name = node.name(), prev = ?prev, now = ?id, "节点名称重复，名称索引指向新节点");
        }
        self.nodes.push(node);
        id
    }

    /// 连接两个节点（创建一条无向链路）
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> LinkId {
        debug_assert!(a.0 < self.nodes.len() && b.0 < self.nodes.len());
        let id = LinkId(self.links.len());
        trace!(link_id = ?id, a = ?a, b = ?b, "注册链路");
        self.links.push(Link::new(a, b));
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// 按名称查找节点句柄
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).and_then(|id| self.node(id))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn hosts(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind() == NodeKind::Host)
    }

    pub fn switches(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind() == NodeKind::Switch)
    }

    pub fn host_count(&self) -> usize {
        self.hosts().count()
    }

    pub fn switch_count(&self) -> usize {
        self.switches().count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    /// 是否存在连接 `a` 与 `b` 的链路
    pub fn has_link(&self, a: NodeId, b: NodeId) -> bool {
        self.links.iter().any(|l| l.connects(a, b))
    }

    /// 与 `id` 直接相连的邻居（按链路注册顺序，可能重复）
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.links.iter().filter_map(|l| l.other(id)).collect()
    }

    /// 以名称对表示的链路集合，端点按名称排序，便于比较两个拓扑
    pub fn link_names(&self) -> Vec<(String, String)> {
        let mut out = self
            .links
            .iter()
            .filter_map(|l| {
                let a = self.node(l.a)?.name().to_string();
                let b = self.node(l.b)?.name().to_string();
                Some(if a <= b { (a, b) } else { (b, a) })
            })
            .collect::<Vec<_>>();
        out.sort();
        out
    }
}
