use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// 可接受的标记词拼写
///
/// 同一个标记在不同文档里可能有多种转写方式，所以每类都是一个列表。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSet {
    pub answer: Vec<String>,
    pub reference: Vec<String>,
    pub concept: Vec<String>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            answer: vec!["উত্তর".to_string(), "Answer".to_string()],
            reference: vec![
                "রেফারেন্স".to_string(),
                "ররফাররন্স".to_string(),
                "Reference".to_string(),
            ],
            concept: vec![
                "কনসেপ্ট".to_string(),
                "কনরেপ্ট".to_string(),
                "Concept".to_string(),
            ],
        }
    }
}

impl MarkerSet {
    /// 检查每类标记至少有一个非空拼写
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, spellings) in [
            ("answer", &self.answer),
            ("reference", &self.reference),
            ("concept", &self.concept),
        ] {
            if spellings.iter().all(|s| s.trim().is_empty()) {
                return Err(ConfigError::EmptyMarkers {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}
