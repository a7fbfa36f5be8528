pub mod etl;
pub mod pipeline;
pub mod rules;
pub mod sanitizer;

pub use crate::domain::model::{Document, SanitizeReport};
pub use crate::domain::ports::{ConfigProvider, ContentSource, Pipeline, Storage};
pub use crate::utils::error::Result;
