//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责把一个文档变成一批题目并交给存储，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **文本提取**：通过 `TextExtractor` 得到整篇文本（失败即终止）
//! 2. **题块切分**：`BlockSegmenter` 惰性产出题块
//! 3. **流程调度**：每个题块交给 `BlockFlow`
//! 4. **数量上限**：题目数达到上限后不再解析剩余题块
//! 5. **批量写入**：全部题目作为一批交给 `RecordSink`

use crate::error::{AppResult, ConfigError, ExtractionError, IngestError, SinkError};
use crate::infrastructure::{RecordSink, TextExtractor};
use crate::models::{MarkerSet, Record, SkippedBlock};
use crate::services::BlockSegmenter;
use crate::workflow::{BlockCtx, BlockFlow, BlockOutcome};
use std::path::Path;
use tracing::info;

/// 单个文档的导入结果
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub records: Vec<Record>,
    /// 实际解析过的题块数
    pub blocks_seen: usize,
    pub skipped: Vec<SkippedBlock>,
    /// 是否因达到上限而提前结束
    pub cap_reached: bool,
}

/// 文档导入器
///
/// 构造时传入提取器、存储和上限，不依赖任何全局状态
pub struct Ingestor<E, S> {
    extractor: E,
    sink: S,
    segmenter: BlockSegmenter,
    flow: BlockFlow,
    max_records: usize,
}

impl<E: TextExtractor, S: RecordSink> Ingestor<E, S> {
    pub fn new(
        extractor: E,
        sink: S,
        markers: &MarkerSet,
        max_records: usize,
    ) -> Result<Self, ConfigError> {
        if max_records == 0 {
            return Err(ConfigError::InvalidRecordCap);
        }
        markers.validate()?;

        Ok(Self {
            extractor,
            sink,
            segmenter: BlockSegmenter::new()?,
            flow: BlockFlow::new(markers)?,
            max_records,
        })
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 导入一个文档：提取 → 解析 → 批量写入
    pub async fn ingest(&self, path: &Path) -> AppResult<IngestReport> {
        let text = self.extract(path)?;
        let report = self.collect_records(&document_name(path), &text)?;
        self.store(&report).await?;
        Ok(report)
    }

    /// 提取整篇文本
    pub fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        info!("📄 正在提取文本: {}", path.display());
        let text = self.extractor.extract(path)?;
        info!("✓ 提取完成，共 {} 字符", text.chars().count());
        Ok(text)
    }

    /// 把整批题目交给存储
    pub async fn store(&self, report: &IngestReport) -> Result<(), SinkError> {
        info!("📤 正在写入 {} 道题目...", report.records.len());
        self.sink.insert_batch(&report.records).await?;
        info!("✓ 写入成功");
        Ok(())
    }

    /// 从文档文本中收集题目，不做任何 I/O
    pub fn collect_records(&self, document: &str, text: &str) -> Result<IngestReport, IngestError> {
        let mut report = IngestReport::default();

        for (index, block) in self.segmenter.segment(text).enumerate() {
            report.blocks_seen += 1;
            let ctx = BlockCtx::new(document, index + 1);

            match self.flow.run(&block, &ctx) {
                BlockOutcome::Accepted(record) => report.records.push(record),
                BlockOutcome::Skipped { raw_block } => report.skipped.push(SkippedBlock {
                    block_index: ctx.block_index,
                    raw_block,
                }),
            }

            if report.records.len() >= self.max_records {
                info!("已达到题目上限 {}，停止解析剩余题块", self.max_records);
                report.cap_reached = true;
                break;
            }
        }

        if report.records.is_empty() {
            return Err(IngestError::NoValidRecords {
                blocks_seen: report.blocks_seen,
                skipped: report.skipped,
            });
        }

        Ok(report)
    }
}

/// 日志和诊断文件里使用的文档名
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
