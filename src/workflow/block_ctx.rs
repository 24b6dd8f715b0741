//! 题块处理上下文
//!
//! 封装"我正在处理哪个文档的第几个题块"这一信息

use std::fmt::Display;

/// 题块处理上下文
#[derive(Debug, Clone)]
pub struct BlockCtx {
    /// 文档名称（仅用于日志显示）
    pub document: String,

    /// 题块在文档中的序号（从1开始）
    pub block_index: usize,
}

impl BlockCtx {
    pub fn new(document: impl Into<String>, block_index: usize) -> Self {
        Self {
            document: document.into(),
            block_index,
        }
    }
}

impl Display for BlockCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文档 {} 题块#{}]", self.document, self.block_index)
    }
}
