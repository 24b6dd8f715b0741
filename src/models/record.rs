use crate::utils::logging::truncate_text;
use serde::{Deserialize, Serialize};

/// 题块解析中的草稿题目
///
/// 只在解析单个题块期间存在，选项未补齐
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRecord {
    pub question_text: String,
    pub options: Vec<String>,
    pub answer: String,
    pub reference: String,
    pub concept: String,
}

impl DraftRecord {
    /// 追加一行题干（行尾带一个分隔空格）
    pub fn push_question_fragment(&mut self, fragment: &str) {
        self.question_text.push_str(fragment);
        self.question_text.push(' ');
    }
}

/// 被跳过的题块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// 题块序号（从1开始）
    pub block_index: usize,
    pub raw_block: String,
}

/// 最终题目记录
///
/// 由 `RecordNormalizer` 创建后不可修改。序列化字段名是下游约定，不能改动。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: String,
    #[serde(rename = "question")]
    question_text: String,
    options: Vec<String>,
    answer: String,
    #[serde(rename = "references")]
    reference: String,
    #[serde(rename = "concepts")]
    concept: String,
}

impl Record {
    pub(crate) fn new(id: String, draft: DraftRecord) -> Self {
        Self {
            id,
            question_text: draft.question_text,
            options: draft.options,
            answer: draft.answer,
            reference: draft.reference,
            concept: draft.concept,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn concept(&self) -> &str {
        &self.concept
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let preview = truncate_text(&self.question_text, 40);
        write!(
            f,
            "{} [选项: {}, 答案: {}]",
            preview,
            self.options.len(),
            if self.answer.is_empty() { "无" } else { self.answer.as_str() }
        )
    }
}
