//! 拓扑构建
//!
//! 拓扑通过 [`TopoApi`] 填充一张图；注册表按 key 选择拓扑。

mod error;
pub mod file_topo;
pub mod registry;
pub mod topo_file;

use std::path::PathBuf;

use crate::net::{Network, TopoApi};

pub use error::{Result, TopoError};
pub use file_topo::{FileTopo, build_from_reader};
pub use registry::{SDNIP_TOPO, TopoFactory, TopoRegistry};
pub use topo_file::{DEFAULT_TOPO_FILE, LinkRecord, TopoFile, TopoHeader};

/// 一个可构建的拓扑
pub trait Topo {
    /// 通过图构建 API 注册节点和链路
    fn build(&self, api: &mut dyn TopoApi) -> Result<BuildSummary>;
}

/// 拓扑工厂参数
#[derive(Debug, Clone)]
pub struct TopoParams {
    /// 拓扑文件路径
    pub file: PathBuf,
}

impl Default for TopoParams {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_TOPO_FILE),
        }
    }
}

/// 一次构建的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub hosts: usize,
    pub switches: usize,
    pub links: usize,
    /// 头部声明的链路数（如有）
    pub declared_links: Option<usize>,
}

/// 在一张新的 [`Network`] 上构建拓扑
pub fn build_network(topo: &dyn Topo) -> Result<Network> {
    let mut net = Network::default();
    topo.build(&mut net)?;
    Ok(net)
}
