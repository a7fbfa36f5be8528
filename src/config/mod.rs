use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_document_name, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str =
    "https://github.com/microsoft-d365-ce-pfe-devops/d365-ce-devops-blogs/blob/master/blogs/devops";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "md-to-html")]
#[command(about = "Fetch a GitHub-rendered Markdown post and strip it down to plain HTML")]
pub struct CliConfig {
    /// Name of the Markdown document, without the .md extension
    #[arg(short = 'f', long = "file")]
    pub file: String,

    /// Location the document name is resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Directory output.html is written to
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Fail when the page lacks the expected article container
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn document_name(&self) -> &str {
        &self.file
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_document_name("file", &self.file)?;
        validate_url("base_url", &self.base_url)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}

/// `{base}/{name}.md`, tolerating a trailing slash on the base.
pub fn document_url(base_url: &str, name: &str) -> String {
    format!("{}/{}.md", base_url.trim_end_matches('/'), name)
}
