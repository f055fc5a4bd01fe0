//! 节点类型
//!
//! 定义拓扑中的节点：主机和交换机。交换机携带一个 dpid 配置。

use super::id::NodeId;

/// 节点种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Host,
    Switch,
}

/// 交换机配置
///
/// 目前只有一个字段：控制器用来识别交换机的 datapath id。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwitchConfig {
    /// 16 位、补零、小写的十六进制字符串
    pub dpid: String,
}

impl SwitchConfig {
    /// 按交换机序号（从 1 开始）生成配置
    pub fn from_index(index: u64) -> Self {
        Self {
            dpid: format!("{:016x}", index),
        }
    }
}

/// 主机节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    id: NodeId,
    name: String,
}

impl Host {
    /// 创建新主机
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 交换机节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Switch {
    id: NodeId,
    name: String,
    config: SwitchConfig,
}

impl Switch {
    /// 创建新交换机
    pub fn new(id: NodeId, name: impl Into<String>, config: SwitchConfig) -> Self {
        Self {
            id,
            name: name.into(),
            config,
        }
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }
}

/// 拓扑中的一个节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Host(Host),
    Switch(Switch),
}

impl Node {
    /// 获取节点标识符
    pub fn id(&self) -> NodeId {
        match self {
            Node::Host(h) => h.id,
            Node::Switch(s) => s.id,
        }
    }

    /// 获取节点名称
    pub fn name(&self) -> &str {
        match self {
            Node::Host(h) => &h.name,
            Node::Switch(s) => &s.name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Host(_) => NodeKind::Host,
            Node::Switch(_) => NodeKind::Switch,
        }
    }

    /// 交换机配置；主机返回 None
    pub fn switch_config(&self) -> Option<&SwitchConfig> {
        match self {
            Node::Host(_) => None,
            Node::Switch(s) => Some(s.config()),
        }
    }

    /// 交换机的 dpid；主机返回 None
    pub fn dpid(&self) -> Option<&str> {
        self.switch_config().map(|c| c.dpid.as_str())
    }
}
