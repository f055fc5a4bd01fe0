//! 拓扑快照导出
//!
//! 把构建好的拓扑序列化为 JSON：
//! - **结构化**：节点带种类和 dpid，链路只记录两端
//! - **轻量**：只依赖 serde/serde_json

mod types;

pub use types::{VizLinkInfo, VizNodeInfo, VizNodeKind, VizTopology};
