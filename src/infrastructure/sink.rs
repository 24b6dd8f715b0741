//! 题目存储 - 基础设施层
//!
//! 只暴露"批量写入"能力。一次写入一整批，要么全部成功，要么全部失败。

use crate::error::SinkError;
use crate::models::Record;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;
use tracing::debug;

/// 题目存储能力
pub trait RecordSink {
    /// 批量写入题目
    fn insert_batch(&self, records: &[Record])
        -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// JSON Lines 文件存储
///
/// 每道题一行 JSON。先写临时文件再重命名覆盖目标文件，
/// 写入失败时目标文件保持原样。
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl RecordSink for JsonLinesSink {
    async fn insert_batch(&self, records: &[Record]) -> Result<(), SinkError> {
        let path_str = self.path.display().to_string();

        // 先全部序列化，避免写到一半失败
        let mut body = String::new();
        for record in records {
            body.push_str(&serde_json::to_string(record)?);
            body.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| SinkError::write_failed(&path_str, e))?;
            }
        }

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, body)
            .await
            .map_err(|e| SinkError::write_failed(tmp_path.display().to_string(), e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(SinkError::write_failed(&path_str, e));
        }

        debug!("已写入 {} 道题目到 {}", records.len(), path_str);
        Ok(())
    }
}

/// 内存存储，保存每一次写入的批次
#[derive(Debug, Default)]
pub struct MemorySink {
    batches: Mutex<Vec<Vec<Record>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已写入的所有批次
    pub fn batches(&self) -> Vec<Vec<Record>> {
        self.batches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 已写入的题目总数
    pub fn total_records(&self) -> usize {
        self.batches().iter().map(Vec::len).sum()
    }
}

impl RecordSink for MemorySink {
    async fn insert_batch(&self, records: &[Record]) -> Result<(), SinkError> {
        self.batches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DraftRecord;

    fn sample_record(id: &str, question: &str) -> Record {
        Record::new(
            id.to_string(),
            DraftRecord {
                question_text: question.to_string(),
                options: vec![
                    "(a) 3".to_string(),
                    "(b) 4".to_string(),
                    "(c) N/A".to_string(),
                    "(d) N/A".to_string(),
                ],
                answer: "(b)".to_string(),
                ..DraftRecord::default()
            },
        )
    }

    #[tokio::test]
    async fn test_json_lines_sink_writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("questions.jsonl");
        let sink = JsonLinesSink::new(&path);

        let records = vec![sample_record("1", "প্রশ্ন এক"), sample_record("2", "প্রশ্ন দুই")];
        sink.insert_batch(&records).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "1");
        assert_eq!(first["question"], "প্রশ্ন এক");
        assert_eq!(first["options"].as_array().unwrap().len(), 4);
        assert_eq!(first["answer"], "(b)");
        assert_eq!(first["references"], "");
        assert_eq!(first["concepts"], "");

        let back: Record = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(back, records[1]);

        assert!(!sink.temp_path().exists());
    }

    #[tokio::test]
    async fn test_json_lines_sink_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // 父目录位置上是一个普通文件
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let sink = JsonLinesSink::new(blocker.join("questions.jsonl"));

        let result = sink.insert_batch(&[sample_record("1", "q")]).await;
        assert!(matches!(result, Err(SinkError::WriteFailed { .. })));
    }

    #[tokio::test]
    async fn test_json_lines_sink_rename_failure_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // 目标位置是一个非空目录，重命名必然失败
        let path = dir.path().join("questions.jsonl");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();
        let sink = JsonLinesSink::new(&path);

        let result = sink.insert_batch(&[sample_record("1", "q")]).await;
        assert!(matches!(result, Err(SinkError::WriteFailed { .. })));
        assert!(!sink.temp_path().exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_memory_sink_keeps_batches() {
        let sink = MemorySink::new();
        tokio_test::block_on(sink.insert_batch(&[sample_record("1", "a"), sample_record("2", "b")]))
            .unwrap();

        assert_eq!(sink.batches().len(), 1);
        assert_eq!(sink.total_records(), 2);
    }
}
