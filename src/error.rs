use crate::models::SkippedBlock;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文本提取错误
    #[error("文本提取错误: {0}")]
    Extraction(#[from] ExtractionError),
    /// 导入流程错误
    #[error("导入错误: {0}")]
    Ingest(#[from] IngestError),
    /// 存储写入错误
    #[error("存储错误: {0}")]
    Sink(#[from] SinkError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文本提取错误
///
/// 任何一种都是致命的，不会尝试部分导入
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// 不支持的文件格式
    #[error("不支持的文件格式: {path}")]
    UnsupportedFormat { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 文档解码失败（PDF / DOCX 解析出错）
    #[error("文档解码失败 ({path}): {message}")]
    DecodeFailed { path: String, message: String },
}

/// 导入流程错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    /// 整个文档没有产生任何有效题目，附带途中跳过的题块
    #[error("文档中没有有效题目 (共检查 {blocks_seen} 个题块)")]
    NoValidRecords {
        blocks_seen: usize,
        skipped: Vec<SkippedBlock>,
    },
}

/// 存储写入错误
///
/// 批量写入要么全部成功，要么全部失败，不做自动重试
#[derive(Debug, Error)]
pub enum SinkError {
    /// 序列化失败
    #[error("题目序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 题目上限必须大于 0
    #[error("题目上限必须大于 0")]
    InvalidRecordCap,
    /// 标记词列表为空
    #[error("标记词列表不能为空: {field}")]
    EmptyMarkers { field: String },
    /// 题号或标记词无法构成合法的匹配规则
    #[error("匹配规则构建失败: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// 标记词文件解析失败
    #[error("标记词文件解析失败 ({path}): {message}")]
    MarkersFileFailed { path: String, message: String },
}

impl ExtractionError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        ExtractionError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文档解码错误
    pub fn decode_failed(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ExtractionError::DecodeFailed {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl SinkError {
    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        SinkError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

impl IngestError {
    /// 失败前已经跳过的题块
    pub fn skipped(&self) -> &[SkippedBlock] {
        match self {
            IngestError::NoValidRecords { skipped, .. } => skipped,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
