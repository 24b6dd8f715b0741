//! # Question Ingest
//!
//! 从半结构化文档（PDF / DOCX / 纯文本）中提取编号选择题，整理成统一的题目记录并写入存储
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 外部协作方，只暴露能力
//! - `TextExtractor` - 文档 → 文本
//! - `RecordSink` - 批量写入题目
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个题块
//! - `BlockSegmenter` - 按题号切分题块
//! - `LineClassifier` - 按固定优先级给行分类
//! - `BlockParser` - 题块 → 草稿题目
//! - `ValidityGate` - 过滤噪声题块
//! - `RecordNormalizer` - 补齐选项、分配 ID
//! - `SkipWriter` - 写跳过题块诊断文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个题块"的完整处理流程
//! - `BlockCtx` - 上下文封装（文档名 + 题块序号）
//! - `BlockFlow` - 流程编排（解析 → 判断 → 规范化）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/document_processor` - 单个文档处理器，执行上限并写入存储
//! - `orchestrator/app` - 一次运行的生命周期
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{FileTextExtractor, JsonLinesSink, MemorySink, RecordSink, TextExtractor};
pub use models::{DraftRecord, MarkerSet, Record, SkippedBlock};
pub use orchestrator::{App, IngestReport, Ingestor};
pub use workflow::{BlockCtx, BlockFlow, BlockOutcome};
