pub mod toml_loader;

pub use toml_loader::{load_marker_set, load_markers_or_default};
