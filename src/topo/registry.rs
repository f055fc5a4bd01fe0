//! 拓扑注册表：按字符串 key 选择拓扑

use std::collections::BTreeMap;

use super::error::{Result, TopoError};
use super::file_topo::FileTopo;
use super::{Topo, TopoParams};

/// 内置的文件拓扑 key
pub const SDNIP_TOPO: &str = "sdnip";

pub type TopoFactory = Box<dyn Fn(&TopoParams) -> Box<dyn Topo>>;

pub struct TopoRegistry {
    factories: BTreeMap<String, TopoFactory>,
}

impl TopoRegistry {
    /// 空注册表
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// 注册（或覆盖）一个拓扑工厂
    pub fn register<F>(&mut self, key: impl Into<String>, factory: F)
    where
        F: Fn(&TopoParams) -> Box<dyn Topo> + 'static,
    {
        self.factories.insert(key.into(), Box::new(factory));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// 已注册的 key（有序）
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn create(&self, key: &str, params: &TopoParams) -> Result<Box<dyn Topo>> {
        let factory = self
            .factories
            .get(key)
            .ok_or_else(|| TopoError::UnknownTopo {
                key: key.to_string(),
                available: self.keys().collect::<Vec<_>>().join(", "),
            })?;
        Ok(factory(params))
    }
}

impl Default for TopoRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(SDNIP_TOPO, |params| Box::new(FileTopo::from_params(params)));
        registry
    }
}
