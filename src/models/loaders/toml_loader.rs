use crate::error::ConfigError;
use crate::models::markers::MarkerSet;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载标记词
pub async fn load_marker_set(toml_file_path: &Path) -> Result<MarkerSet, ConfigError> {
    let path = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| ConfigError::MarkersFileFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;

    let markers: MarkerSet = toml::from_str(&content).map_err(|e| {
        ConfigError::MarkersFileFailed {
            path: path.clone(),
            message: e.to_string(),
        }
    })?;

    markers.validate()?;

    tracing::info!(
        "已加载标记词: 答案 {} 种, 出处 {} 种, 概念 {} 种",
        markers.answer.len(),
        markers.reference.len(),
        markers.concept.len()
    );

    Ok(markers)
}

/// 按配置加载标记词：未指定文件时使用内置标记词
pub async fn load_markers_or_default(markers_file: Option<&str>) -> Result<MarkerSet, ConfigError> {
    match markers_file {
        Some(path) => load_marker_set(Path::new(path)).await,
        None => Ok(MarkerSet::default()),
    }
}
