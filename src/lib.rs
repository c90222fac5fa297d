pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::GeminiGenerator;
pub use app::{build_router, AppState};
pub use config::{CliConfig, Settings};
pub use crate::core::generation::ContentService;
pub use crate::core::markdown::{clean_markdown_tables, extract_and_convert_json_tables, normalize_markdown};
pub use utils::error::{AppError, Result};
