//! 拓扑文件解析
//!
//! 文件格式（按行）：
//!
//! ```text
//! numHost numSwitch [numLink]
//! nodeA,nodeB
//! nodeA,nodeB
//! ...
//! ```
//!
//! 读取分两步：先读一行头部，再把剩余行当作链路记录惰性迭代。

use std::io::{BufRead, Lines};

use super::error::{Result, TopoError};

/// 约定的拓扑文件名（相对当前工作目录）
pub const DEFAULT_TOPO_FILE: &str = "star.in";

/// 头部行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopoHeader {
    pub num_hosts: usize,
    pub num_switches: usize,
    /// 声明的链路数；只做参考，不限制后续读取的行数，非整数时为 None
    pub num_links: Option<usize>,
}

/// 一条链路记录 `nodeA,nodeB`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// 在文件中的行号（从 1 开始，头部为第 1 行）
    pub line_no: usize,
    pub a: String,
    pub b: String,
}

/// 解析头部行
///
/// 前两个计数必填，负数按 0 处理；第三个计数只做参考，解析不了就当没有。
pub fn parse_header(line: &str) -> Result<TopoHeader> {
    let mut tokens = line.split_whitespace();
    let mut count = |what: &str| -> Result<usize> {
        let malformed = |reason: String| TopoError::MalformedHeader {
            line: line.to_string(),
            reason,
        };
        let tok = tokens
            .next()
            .ok_or_else(|| malformed(format!("missing {what}")))?;
        let n = tok
            .parse::<i64>()
            .map_err(|e| malformed(format!("{what} {tok:?} is not an integer: {e}")))?;
        usize::try_from(n.max(0)).map_err(|_| malformed(format!("{what} {tok:?} is out of range")))
    };

    let num_hosts = count("numHost")?;
    let num_switches = count("numSwitch")?;
    let num_links = tokens.next().and_then(|tok| tok.parse::<usize>().ok());

    Ok(TopoHeader {
        num_hosts,
        num_switches,
        num_links,
    })
}

/// 解析链路行；`line` 不含行尾换行
pub fn parse_link(line_no: usize, line: &str) -> Result<LinkRecord> {
    let malformed = || TopoError::MalformedLink {
        line_no,
        line: line.to_string(),
    };
    // 只取前两个字段，多余的字段忽略
    let mut fields = line.split(',');
    let a = fields.next().unwrap_or_default().trim();
    let b = fields.next().ok_or_else(malformed)?.trim();
    if a.is_empty() || b.is_empty() {
        return Err(malformed());
    }
    Ok(LinkRecord {
        line_no,
        a: a.to_string(),
        b: b.to_string(),
    })
}

/// 已读取头部的拓扑文件
pub struct TopoFile<R> {
    header: TopoHeader,
    lines: Lines<R>,
}

impl<R: BufRead> TopoFile<R> {
    /// 读取并解析头部；空输入视为头部缺失
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let first = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(TopoError::MalformedHeader {
                    line: String::new(),
                    reason: "missing header line".to_string(),
                });
            }
        };
        let header = parse_header(&first)?;
        Ok(Self { header, lines })
    }

    pub fn header(&self) -> TopoHeader {
        self.header
    }

    /// 剩余行的链路记录迭代器
    pub fn links(self) -> LinkRecords<R> {
        LinkRecords {
            lines: self.lines,
            line_no: 1,
        }
    }
}

/// 链路记录迭代器；遇到第一个错误后调用方应停止
pub struct LinkRecords<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Iterator for LinkRecords<R> {
    type Item = Result<LinkRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;
        let line_no = self.line_no;
        Some(line.map_err(TopoError::from).and_then(|l| parse_link(line_no, &l)))
    }
}
