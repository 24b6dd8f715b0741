//! 跳过题块写入服务 - 业务能力层
//!
//! 只负责把无效题块的原文写入诊断文件，不关心流程

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 跳过题块写入服务
pub struct SkipWriter {
    skip_file_path: PathBuf,
}

impl SkipWriter {
    /// 使用默认文件 skipped_blocks.txt
    pub fn new() -> Self {
        Self {
            skip_file_path: PathBuf::from("skipped_blocks.txt"),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            skip_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.skip_file_path
    }

    /// 重建诊断文件并写入表头
    pub async fn init(&self, document: &str) -> Result<()> {
        let header = format!(
            "{}\n跳过题块记录 - {} - {}\n{}\n\n",
            "=".repeat(60),
            document,
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            "=".repeat(60)
        );
        fs::write(&self.skip_file_path, header)
            .await
            .with_context(|| format!("无法写入文件: {}", self.skip_file_path.display()))?;
        Ok(())
    }

    /// 追加一个被跳过的题块
    ///
    /// # 参数
    /// - `block_index`: 题块序号（从1开始）
    /// - `raw_block`: 题块原文
    pub async fn write(&self, block_index: usize, raw_block: &str) -> Result<()> {
        debug!(
            "写入跳过题块: 题块 {} | 长度: {}",
            block_index,
            raw_block.len()
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.skip_file_path)
            .await
            .with_context(|| format!("无法打开文件: {}", self.skip_file_path.display()))?;

        let msg = format!("题块 {} | 原文: {}\n", block_index, raw_block);
        file.write_all(msg.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}

impl Default for SkipWriter {
    fn default() -> Self {
        Self::new()
    }
}
