use serde::{Deserialize, Serialize};

use crate::net::NodeKind;

/// 节点类型（用于可视化区分 host/switch）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VizNodeKind {
    Host,
    Switch,
}

impl From<NodeKind> for VizNodeKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Host => VizNodeKind::Host,
            NodeKind::Switch => VizNodeKind::Switch,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizNodeInfo {
    pub id: usize,
    pub name: String,
    pub kind: VizNodeKind,
    /// 仅交换机有
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpid: Option<String>,
}

/// 无向链路，两端为节点 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizLinkInfo {
    pub a: usize,
    pub b: usize,
}

/// 拓扑快照（JSON），供下游模拟器/前端加载
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizTopology {
    pub nodes: Vec<VizNodeInfo>,
    pub links: Vec<VizLinkInfo>,
}

impl VizTopology {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
