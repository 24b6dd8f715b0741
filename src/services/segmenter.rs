//! 题块切分服务 - 业务能力层
//!
//! 按题号（1~3 位数字加句点）把文档文本切成题块

use regex::Regex;

/// 一个题块：文档中属于同一道题的连续文本，已去除首尾空白且非空
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    text: &'a str,
}

impl<'a> Block<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// 按行迭代（已去除首尾空白，跳过空行）
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.text.lines().map(str::trim).filter(|line| !line.is_empty())
    }
}

/// 题块切分器
pub struct BlockSegmenter {
    delimiter: Regex,
}

impl BlockSegmenter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            delimiter: Regex::new(r"[0-9]{1,3}\.")?,
        })
    }

    /// 惰性切分文档文本
    ///
    /// 题号本身被丢弃。同一段文本每次调用都得到相同的题块序列。
    pub fn segment<'s, 'a>(&'s self, text: &'a str) -> impl Iterator<Item = Block<'a>> + 's
    where
        'a: 's,
    {
        self.delimiter
            .split(text)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|text| Block { text })
    }
}
