pub mod sink;
pub mod text_extractor;

pub use sink::{JsonLinesSink, MemorySink, RecordSink};
pub use text_extractor::{FileTextExtractor, TextExtractor};
