pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HttpSource, LocalStorage};
pub use crate::config::CliConfig;
pub use crate::core::{
    etl::EtlEngine,
    pipeline::{PagePipeline, OUTPUT_FILE_NAME},
    sanitizer::{sanitize, sanitize_strict, Rule, RuleSet},
};
pub use crate::utils::error::{ConvertError, Result};
