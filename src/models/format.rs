use phf::phf_map;
use std::path::Path;

/// 支持的文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

static FORMATS_BY_EXTENSION: phf::Map<&'static str, DocumentFormat> = phf_map! {
    "pdf" => DocumentFormat::Pdf,
    "docx" => DocumentFormat::Docx,
    "txt" => DocumentFormat::PlainText,
    "text" => DocumentFormat::PlainText,
    "md" => DocumentFormat::PlainText,
};

impl DocumentFormat {
    /// 根据扩展名判断文档格式（不区分大小写）
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        FORMATS_BY_EXTENSION.get(ext.as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
            DocumentFormat::PlainText => "纯文本",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
