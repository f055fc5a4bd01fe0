//! 网络拓扑模块
//!
//! 此模块包含拓扑图的核心组件：节点、链路、句柄和图构建 API。

// 子模块声明
mod id;
mod api;
mod node;
mod link;
mod network;
mod network_viz;

// 重新导出公共接口
pub use id::{NodeId, LinkId};
pub use api::TopoApi;
pub use node::{Node, NodeKind, Host, Switch, SwitchConfig};
pub use link::Link;
pub use network::Network;
