/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::config::Config;
use crate::orchestrator::IngestReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化控制台日志
///
/// `RUST_LOG` 优先；未设置时默认 info，`verbose` 为真时为 debug。
/// 跳过的题块使用 target `skipped_blocks`，可单独过滤。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题目导入");
    info!("📄 输入文档: {}", config.input_path);
    info!("📊 题目上限: {}", config.max_records);
    info!("💾 输出文件: {}", config.output_path);
    if let Some(markers_file) = &config.markers_file {
        info!("🏷️ 标记词文件: {}", markers_file);
    }
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn log_report(report: &IngestReport, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 导入完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📦 解析题块: {}", report.blocks_seen);
    info!("✅ 有效题目: {}", report.records.len());
    info!("⏭️ 跳过题块: {}", report.skipped.len());
    if report.cap_reached {
        info!("🛑 已达到题目上限 {}，剩余题块未解析", config.max_records);
    }
    info!("{}", "=".repeat(60));
    info!("\n题目已保存至: {}", config.output_path);
    if !report.skipped.is_empty() {
        info!("跳过题块已记录至: {}", config.skip_log_file);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
