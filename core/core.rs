pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod gather;
pub mod pattern;
pub mod render;
pub mod tree;

pub use classify::{FileKind, classify_bytes, classify_file};
pub use config::{Config, IgnoreConfig, OutputConfig};
pub use error::{AppError, Result};
pub use format::{HeaderStyle, add_line_numbers, format_file_section, format_tree_section};
pub use gather::{FileCollection, collect_files};
pub use pattern::{Pattern, PatternSet, build_path_specification};
pub use render::{RenderOptions, render_collection};
pub use tree::generate_tree;
