pub mod format;
pub mod loaders;
pub mod markers;
pub mod record;

pub use format::DocumentFormat;
pub use loaders::{load_marker_set, load_markers_or_default};
pub use markers::MarkerSet;
pub use record::{DraftRecord, Record, SkippedBlock};
