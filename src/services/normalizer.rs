//! 题目规范化 - 业务能力层
//!
//! 把有效的草稿题目变成最终题目：补齐选项、分配 ID

use crate::models::{DraftRecord, Record};
use uuid::Uuid;

/// 每道题至少的选项数量
pub const MIN_OPTIONS: usize = 4;

/// 题目规范化器
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 补齐选项到 4 个并分配新 ID，不再判断有效性
    pub fn normalize(&self, mut draft: DraftRecord) -> Record {
        draft.question_text = draft.question_text.trim().to_string();

        while draft.options.len() < MIN_OPTIONS {
            draft.options.push(placeholder_option(draft.options.len()));
        }

        Record::new(Uuid::new_v4().to_string(), draft)
    }
}

/// 第 index 个选项的占位文本，字母从 'a' 开始顺延
fn placeholder_option(index: usize) -> String {
    let letter = char::from(b'a' + index as u8);
    format!("({}) N/A", letter)
}
