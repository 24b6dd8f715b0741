//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 管理一次导入运行的生命周期：
//!
//! 1. **应用初始化**：加载标记词、创建提取器和存储
//! 2. **文档导入**：委托 `Ingestor` 处理单个文档
//! 3. **诊断输出**：把跳过的题块写入诊断文件（导入失败时同样写入）
//! 4. **全局统计**：输出本次运行的结果

use crate::config::Config;
use crate::infrastructure::{FileTextExtractor, JsonLinesSink};
use crate::models::{load_markers_or_default, SkippedBlock};
use crate::orchestrator::document_processor::{document_name, IngestReport, Ingestor};
use crate::services::SkipWriter;
use crate::utils::logging::{log_report, log_startup};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;

/// 应用主结构
pub struct App {
    config: Config,
    ingestor: Ingestor<FileTextExtractor, JsonLinesSink>,
    skip_writer: SkipWriter,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;
        log_startup(&config);

        let markers = load_markers_or_default(config.markers_file.as_deref())
            .await
            .context("无法加载标记词")?;

        let ingestor = Ingestor::new(
            FileTextExtractor::new(),
            JsonLinesSink::new(&config.output_path),
            &markers,
            config.max_records,
        )?;
        let skip_writer = SkipWriter::with_path(&config.skip_log_file);

        Ok(Self {
            config,
            ingestor,
            skip_writer,
        })
    }

    /// 运行应用主逻辑
    ///
    /// 诊断文件在写入存储之前落盘，导入失败时也保留已跳过的题块
    pub async fn run(&self) -> Result<IngestReport> {
        let input = Path::new(&self.config.input_path);

        // 每次运行都重建诊断文件
        let skip_ready = self.reset_skip_file().await;

        let text = self
            .ingestor
            .extract(input)
            .with_context(|| format!("文本提取失败: {}", self.config.input_path))?;

        let report = match self.ingestor.collect_records(&document_name(input), &text) {
            Ok(report) => report,
            Err(e) => {
                if skip_ready {
                    self.write_skipped(e.skipped()).await;
                }
                return Err(e).with_context(|| format!("导入失败: {}", self.config.input_path));
            }
        };

        if skip_ready {
            self.write_skipped(&report.skipped).await;
        }

        self.ingestor
            .store(&report)
            .await
            .with_context(|| format!("题目写入失败: {}", self.config.output_path))?;

        log_report(&report, &self.config);

        Ok(report)
    }

    /// 写诊断文件失败不影响导入本身
    async fn reset_skip_file(&self) -> bool {
        match self.skip_writer.init(&self.config.input_path).await {
            Ok(()) => true,
            Err(e) => {
                warn!("⚠️ 无法初始化跳过题块文件: {}", e);
                false
            }
        }
    }

    async fn write_skipped(&self, skipped: &[SkippedBlock]) {
        for block in skipped {
            if let Err(e) = self
                .skip_writer
                .write(block.block_index, &block.raw_block)
                .await
            {
                warn!("⚠️ 写入跳过题块失败: {}", e);
                return;
            }
        }
    }
}
