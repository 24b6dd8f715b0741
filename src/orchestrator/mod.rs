//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 管理一次运行的生命周期（初始化、运行、统计）
//! - 持有配置、提取器和存储
//!
//! ### `document_processor` - 单个文档处理器
//! - 遍历单个文档的所有题块
//! - 执行题目数量上限
//! - 把整批题目交给存储
//!
//! ## 层次关系
//!
//! ```text
//! app (一次运行)
//!     ↓
//! document_processor (处理 Vec<Block>)
//!     ↓
//! workflow::BlockFlow (处理单个 Block)
//!     ↓
//! services (能力层：切分 / 分类 / 解析 / 判断 / 规范化)
//!     ↓
//! infrastructure (基础设施：提取器 / 存储)
//! ```

pub mod app;
pub mod document_processor;

// 重新导出主要类型
pub use app::App;
pub use document_processor::{document_name, IngestReport, Ingestor};
