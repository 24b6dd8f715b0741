pub mod block_parser;
pub mod classifier;
pub mod normalizer;
pub mod segmenter;
pub mod skip_writer;
pub mod validity;

pub use block_parser::BlockParser;
pub use classifier::{LineClass, LineClassifier};
pub use normalizer::{RecordNormalizer, MIN_OPTIONS};
pub use segmenter::{Block, BlockSegmenter};
pub use skip_writer::SkipWriter;
pub use validity::{ValidityGate, Verdict};
