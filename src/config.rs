use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 待导入的文档路径
    pub input_path: String,
    /// 单个文档最多导入的题目数量
    pub max_records: usize,
    /// JSON Lines 输出文件
    pub output_path: String,
    /// 被跳过题块的诊断文件
    pub skip_log_file: String,
    /// 标记词 TOML 文件（不设置则使用内置标记词）
    pub markers_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "files/a.pdf".to_string(),
            max_records: 100,
            output_path: "output/questions.jsonl".to_string(),
            skip_log_file: "skipped_blocks.txt".to_string(),
            markers_file: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        let config = Self {
            input_path: std::env::var("INPUT_PATH").unwrap_or(default.input_path),
            max_records: parse_env("MAX_RECORDS", "usize")?.unwrap_or(default.max_records),
            output_path: std::env::var("OUTPUT_PATH").unwrap_or(default.output_path),
            skip_log_file: std::env::var("SKIP_LOG_FILE").unwrap_or(default.skip_log_file),
            markers_file: std::env::var("MARKERS_FILE").ok().or(default.markers_file),
            verbose_logging: parse_env("VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        };
        config.validate()?;
        Ok(config)
    }

    /// 用命令行参数覆盖输入路径
    pub fn with_input_path(mut self, input_path: impl Into<String>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// 检查配置是否合法
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_records == 0 {
            return Err(ConfigError::InvalidRecordCap);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
