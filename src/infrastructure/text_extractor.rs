//! 文本提取器 - 基础设施层
//!
//! 把源文档变成一段按阅读顺序排列的文本，页/段落之间插入换行。
//! 不认识题目，也不做任何切分。

use crate::error::ExtractionError;
use crate::models::DocumentFormat;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 文本提取能力
pub trait TextExtractor {
    /// 提取整个文档的文本
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}

/// 按扩展名选择读取方式的文件提取器
///
/// - PDF: 逐页提取，页之间用换行分隔
/// - DOCX: 逐段落提取，段落之间用换行分隔
/// - 纯文本: 直接按 UTF-8 读取
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTextExtractor;

impl FileTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for FileTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let path_str = path.display().to_string();

        let format =
            DocumentFormat::from_path(path).ok_or_else(|| ExtractionError::UnsupportedFormat {
                path: path_str.clone(),
            })?;

        debug!("提取文本: {} ({})", path_str, format);

        let text = match format {
            DocumentFormat::Pdf => extract_pdf(path)?,
            DocumentFormat::Docx => extract_docx(path)?,
            DocumentFormat::PlainText => {
                fs::read_to_string(path).map_err(|e| ExtractionError::read_failed(&path_str, e))?
            }
        };

        debug!("提取完成: {} 字符", text.chars().count());
        Ok(text)
    }
}

fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    let path_str = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| ExtractionError::read_failed(&path_str, e))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ExtractionError::decode_failed(&path_str, e))?;

    let mut text = String::new();
    for page in pages {
        text.push_str(&page);
        text.push('\n');
    }
    Ok(text)
}

fn extract_docx(path: &Path) -> Result<String, ExtractionError> {
    use docx_rs::DocumentChild;

    let path_str = path.display().to_string();
    let bytes = fs::read(path).map_err(|e| ExtractionError::read_failed(&path_str, e))?;

    let docx = docx_rs::read_docx(&bytes).map_err(|e| ExtractionError::decode_failed(&path_str, e))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            text.push_str(&paragraph_text(para));
            text.push('\n');
        }
    }
    Ok(text)
}

/// 段落内的多个 run 直接拼接，不加分隔符
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    use docx_rs::{ParagraphChild, RunChild};

    let mut parts = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                if let RunChild::Text(t) = rc {
                    parts.push_str(&t.text);
                }
            }
        }
    }
    parts
}
