//! 拓扑构建完成后的运行入口
//!
//! 真正的仿真器/控制器接入由外部实现 [`NetRunner`]；这里自带的
//! [`SnapshotRunner`] 只打印统计并可选地写出 JSON 快照。

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::net::Network;
use crate::topo::{Result, TopoError};

/// 接收构建好的拓扑
pub trait NetRunner {
    fn run(&mut self, net: &Network) -> Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct SnapshotRunner {
    /// JSON 快照输出路径
    pub json_out: Option<PathBuf>,
}

impl SnapshotRunner {
    pub fn new(json_out: Option<PathBuf>) -> Self {
        Self { json_out }
    }
}

impl NetRunner for SnapshotRunner {
    fn run(&mut self, net: &Network) -> Result<()> {
        info!(
            hosts = net.host_count(),
            switches = net.switch_count(),
            links = net.links().len(),
            "🚀 拓扑就绪"
        );

        if let Some(path) = &self.json_out {
            let raw = net.viz_snapshot().to_json_pretty()?;
            fs::write(path, raw).map_err(|source| TopoError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "写出拓扑快照");
        }
        Ok(())
    }
}
