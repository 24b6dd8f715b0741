//! 题块解析服务 - 业务能力层
//!
//! 逐行调用分类器，把结果填入草稿题目

use crate::models::DraftRecord;
use crate::services::classifier::{LineClass, LineClassifier};
use crate::services::segmenter::Block;

/// 题块解析器
pub struct BlockParser {
    classifier: LineClassifier,
}

impl BlockParser {
    pub fn new(classifier: LineClassifier) -> Self {
        Self { classifier }
    }

    /// 解析一个题块，得到未补齐选项的草稿题目
    pub fn parse(&self, block: &Block<'_>) -> DraftRecord {
        let mut draft = DraftRecord::default();

        for line in block.lines() {
            match self.classifier.classify(line) {
                LineClass::Answer(answer) => draft.answer = answer.to_string(),
                LineClass::Reference(reference) => draft.reference = reference.to_string(),
                LineClass::Concept(concept) => draft.concept = concept.to_string(),
                LineClass::Option(option) => draft.options.push(option.to_string()),
                LineClass::QuestionFragment(fragment) => draft.push_question_fragment(fragment),
            }
        }

        draft.question_text = draft.question_text.trim().to_string();
        draft
    }
}
