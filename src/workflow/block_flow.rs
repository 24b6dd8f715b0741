//! 题块处理流程 - 流程层
//!
//! 核心职责：定义"一个题块"的完整处理流程
//!
//! 流程顺序：
//! 1. 解析 → 草稿题目
//! 2. 有效性判断（补齐选项之前）
//! 3. 规范化 → 最终题目

use tracing::{debug, warn};

use crate::models::{MarkerSet, Record};
use crate::services::{
    Block, BlockParser, LineClassifier, RecordNormalizer, ValidityGate, Verdict,
};
use crate::utils::logging::truncate_text;
use crate::workflow::block_ctx::BlockCtx;

/// 题块处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    /// 得到一道有效题目
    Accepted(Record),
    /// 噪声题块，附带原文
    Skipped { raw_block: String },
}

/// 题块处理流程
///
/// - 不持有任何 I/O 资源
/// - 只依赖业务能力（services）
pub struct BlockFlow {
    parser: BlockParser,
    gate: ValidityGate,
    normalizer: RecordNormalizer,
}

impl BlockFlow {
    pub fn new(markers: &MarkerSet) -> Result<Self, regex::Error> {
        Ok(Self {
            parser: BlockParser::new(LineClassifier::new(markers)?),
            gate: ValidityGate::new(),
            normalizer: RecordNormalizer::new(),
        })
    }

    pub fn run(&self, block: &Block<'_>, ctx: &BlockCtx) -> BlockOutcome {
        let draft = self.parser.parse(block);

        match self.gate.check(&draft, block) {
            Verdict::Valid => {
                let record = self.normalizer.normalize(draft);
                debug!("{} ✓ {}", ctx, record);
                BlockOutcome::Accepted(record)
            }
            Verdict::Invalid { raw_block } => {
                warn!(
                    target: "skipped_blocks",
                    "{} ⚠️ 跳过无效题块: {}",
                    ctx,
                    truncate_text(&raw_block, 80)
                );
                BlockOutcome::Skipped { raw_block }
            }
        }
    }
}
