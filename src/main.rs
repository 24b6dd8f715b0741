use anyhow::Result;
use question_ingest::utils::logging;
use question_ingest::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置，第一个命令行参数可覆盖输入路径
    let mut config = Config::from_env()?;
    if let Some(input_path) = std::env::args().nth(1) {
        config = config.with_input_path(input_path);
    }

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
