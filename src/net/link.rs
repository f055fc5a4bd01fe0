//! 链路类型
//!
//! 拓扑中的链路是无向的，没有带宽/时延/丢包等属性。

use super::id::NodeId;

/// 网络链路（无向）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
}

impl Link {
    /// 创建新链路
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }

    /// 链路是否连接 `x` 和 `y`（与方向无关）
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// 给定一端，返回另一端
    pub fn other(&self, end: NodeId) -> Option<NodeId> {
        if self.a == end {
            Some(self.b)
        } else if self.b == end {
            Some(self.a)
        } else {
            None
        }
    }
}
