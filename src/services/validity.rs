//! 有效性判断 - 业务能力层
//!
//! 判断草稿题目是真实题目还是噪声。必须在补齐选项之前调用。

use crate::models::DraftRecord;
use crate::services::segmenter::Block;

/// 判断结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// 噪声题块，附带原始文本用于诊断
    Invalid { raw_block: String },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// 有效性判断
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidityGate;

impl ValidityGate {
    pub fn new() -> Self {
        Self
    }

    /// 题干、选项、答案全为空时判为无效；出处和概念不参与判断
    pub fn check(&self, draft: &DraftRecord, block: &Block<'_>) -> Verdict {
        if is_noise(draft) {
            Verdict::Invalid {
                raw_block: block.text().to_string(),
            }
        } else {
            Verdict::Valid
        }
    }
}

fn is_noise(draft: &DraftRecord) -> bool {
    draft.question_text.is_empty() && draft.options.is_empty() && draft.answer.is_empty()
}
