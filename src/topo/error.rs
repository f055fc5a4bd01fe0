//! 拓扑构建错误

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopoError {
    #[error("cannot open topology file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read topology input: {0}")]
    Read(#[from] io::Error),
    #[error("malformed header {line:?}: {reason}")]
    MalformedHeader { line: String, reason: String },
    #[error("line {line_no}: malformed link {line:?}, expected `nodeA,nodeB`")]
    MalformedLink { line_no: usize, line: String },
    #[error("line {line_no}: link references undefined node {name:?}")]
    UndefinedNode { line_no: usize, name: String },
    #[error("unknown topology {key:?} (available: {available})")]
    UnknownTopo { key: String, available: String },
    #[error("cannot write snapshot {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TopoError>;
