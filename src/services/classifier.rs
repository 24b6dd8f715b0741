//! 行分类服务 - 业务能力层
//!
//! 把题块中的一行归入 答案 / 出处 / 概念 / 选项 / 题干 之一。
//!
//! 规则按固定顺序逐条尝试，第一条匹配的规则生效：
//! 1. 答案行：`<答案标记>: (x)`，x 为 a~d
//! 2. 出处行：`<出处标记>:` 之后的内容
//! 3. 概念行：`<概念标记>:` 之后的内容
//! 4. 选项行：`(词) 文本`，括号内只认 ASCII 字母数字和下划线
//! 5. 以上都不匹配则作为题干片段
//!
//! 标记行和普通文字很像，必须先于选项和题干判断；
//! 选项行本身也是自由文本，必须先于题干判断。

use crate::models::MarkerSet;
use regex::Regex;

/// 一行的分类结果，携带从该行捕获的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// 括号中的答案字母，如 `(b)`
    Answer(&'a str),
    /// 出处标记之后的内容
    Reference(&'a str),
    /// 概念标记之后的内容
    Concept(&'a str),
    /// 整行选项文本
    Option(&'a str),
    /// 题干片段
    QuestionFragment(&'a str),
}

type Capture = for<'l> fn(&Regex, &'l str) -> Option<LineClass<'l>>;

/// 一条分类规则：匹配模式 + 捕获方式
struct Rule {
    name: &'static str,
    pattern: Regex,
    capture: Capture,
}

/// 行分类器
pub struct LineClassifier {
    rules: Vec<Rule>,
}

impl LineClassifier {
    /// 根据标记词构建分类器
    pub fn new(markers: &MarkerSet) -> Result<Self, regex::Error> {
        let rules = vec![
            Rule {
                name: "answer",
                pattern: Regex::new(&format!(
                    r"(?:{}):(?-u:\s)*(\([a-d]\))",
                    alternation(&markers.answer)
                ))?,
                capture: capture_answer,
            },
            Rule {
                name: "reference",
                pattern: Regex::new(&format!("(?:{}):", alternation(&markers.reference)))?,
                capture: capture_reference,
            },
            Rule {
                name: "concept",
                pattern: Regex::new(&format!("(?:{}):", alternation(&markers.concept)))?,
                capture: capture_concept,
            },
            Rule {
                name: "option",
                pattern: Regex::new(r"\((?-u:\w)+\)(?-u:\s)+.+")?,
                capture: capture_option,
            },
        ];
        Ok(Self { rules })
    }

    /// 对一行（已去除首尾空白且非空）分类
    pub fn classify<'l>(&self, line: &'l str) -> LineClass<'l> {
        for rule in &self.rules {
            if let Some(class) = (rule.capture)(&rule.pattern, line) {
                tracing::trace!("行分类: {} <- {}", rule.name, line);
                return class;
            }
        }
        LineClass::QuestionFragment(line)
    }
}

/// 把多种拼写拼成正则的多选分支，空白拼写被忽略
fn alternation(spellings: &[String]) -> String {
    let branches: Vec<String> = spellings
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(regex::escape)
        .collect();

    if branches.is_empty() {
        // 不匹配任何内容
        return r"[^\s\S]".to_string();
    }
    branches.join("|")
}

fn capture_answer<'l>(pattern: &Regex, line: &'l str) -> Option<LineClass<'l>> {
    let caps = pattern.captures(line)?;
    Some(LineClass::Answer(caps.get(1)?.as_str()))
}

/// 标记之后的内容
fn after_marker<'l>(pattern: &Regex, line: &'l str) -> Option<&'l str> {
    let m = pattern.find(line)?;
    Some(line[m.end()..].trim())
}

fn capture_reference<'l>(pattern: &Regex, line: &'l str) -> Option<LineClass<'l>> {
    after_marker(pattern, line).map(LineClass::Reference)
}

fn capture_concept<'l>(pattern: &Regex, line: &'l str) -> Option<LineClass<'l>> {
    after_marker(pattern, line).map(LineClass::Concept)
}

fn capture_option<'l>(pattern: &Regex, line: &'l str) -> Option<LineClass<'l>> {
    pattern.is_match(line).then_some(LineClass::Option(line))
}
