//! 基于拓扑文件的拓扑构建
//!
//! 主机命名 `h1..hH`，交换机命名 `s1..sS`，交换机 dpid 由序号生成；
//! 之后每一行链路记录连接两个已注册的节点。

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use super::error::{Result, TopoError};
use super::topo_file::{DEFAULT_TOPO_FILE, TopoFile};
use super::{BuildSummary, Topo, TopoParams};
use crate::net::{NodeId, SwitchConfig, TopoApi};

/// 从文件读取的拓扑
#[derive(Debug, Clone)]
pub struct FileTopo {
    path: PathBuf,
}

impl FileTopo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_params(params: &TopoParams) -> Self {
        Self::new(params.file.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileTopo {
    fn default() -> Self {
        Self::new(DEFAULT_TOPO_FILE)
    }
}

impl Topo for FileTopo {
    #[tracing::instrument(skip(self, api), fields(path = %self.path.display()))]
    fn build(&self, api: &mut dyn TopoApi) -> Result<BuildSummary> {
        let file = File::open(&self.path).map_err(|source| TopoError::Open {
            path: self.path.clone(),
            source,
        })?;
        build_from_reader(BufReader::new(file), api)
    }
}

/// 从任意输入构建拓扑
pub fn build_from_reader<R: BufRead>(reader: R, api: &mut dyn TopoApi) -> Result<BuildSummary> {
    let file = TopoFile::from_reader(reader)?;
    let header = file.header();
    debug!(
        num_hosts = header.num_hosts,
        num_switches = header.num_switches,
        num_links = ?header.num_links,
        "📄 解析头部"
    );

    let mut records: HashMap<String, NodeId> = HashMap::new();

    for index in 1..=header.num_hosts {
        let name = format!("h{}", index);
        let id = api.add_host(&name);
        trace!(name = %name, id = ?id, "添加主机");
        records.insert(name, id);
    }

    for index in 1..=header.num_switches {
        let name = format!("s{}", index);
        let config = SwitchConfig::from_index(index as u64);
        trace!(name = %name, dpid = %config.dpid, "添加交换机");
        let id = api.add_switch(&name, config);
        records.insert(name, id);
    }

    let lookup = |name: &str, line_no: usize| -> Result<NodeId> {
        records
            .get(name)
            .copied()
            .ok_or_else(|| TopoError::UndefinedNode {
                line_no,
                name: name.to_string(),
            })
    };

    let mut links = 0;
    for record in file.links() {
        let record = record?;
        let a = lookup(&record.a, record.line_no)?;
        let b = lookup(&record.b, record.line_no)?;
        api.add_link(a, b);
        trace!(a = %record.a, b = %record.b, line_no = record.line_no, "添加链路");
        links += 1;
    }

    if let Some(declared) = header.num_links {
        if declared != links {
            warn!(declared, actual = links, "头部声明的链路数与实际链路行数不一致");
        }
    }

    let summary = BuildSummary {
        hosts: header.num_hosts,
        switches: header.num_switches,
        links,
        declared_links: header.num_links,
    };
    info!(
        hosts = summary.hosts,
        switches = summary.switches,
        links = summary.links,
        "✅ 拓扑构建完成"
    );
    Ok(summary)
}
