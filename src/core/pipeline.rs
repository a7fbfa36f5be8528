use crate::config::document_url;
use crate::core::rules::github_rules;
use crate::core::sanitizer::RuleSet;
use crate::core::{ConfigProvider, ContentSource, Document, Pipeline, SanitizeReport, Storage};
use crate::utils::error::Result;

pub const OUTPUT_FILE_NAME: &str = "output.html";

/// Fetch one page, run the rule sequence over it, write `output.html`.
pub struct PagePipeline<Src: ContentSource, S: Storage, C: ConfigProvider> {
    source: Src,
    storage: S,
    config: C,
    rules: RuleSet,
}

impl<Src: ContentSource, S: Storage, C: ConfigProvider> PagePipeline<Src, S, C> {
    /// Builds the pipeline with the GitHub rule sequence.
    pub fn new(source: Src, storage: S, config: C) -> Result<Self> {
        Ok(Self::with_rules(source, storage, config, github_rules()?))
    }

    pub fn with_rules(source: Src, storage: S, config: C, rules: RuleSet) -> Self {
        Self {
            source,
            storage,
            config,
            rules,
        }
    }
}

#[async_trait::async_trait]
impl<Src: ContentSource, S: Storage, C: ConfigProvider> Pipeline for PagePipeline<Src, S, C> {
    async fn extract(&self) -> Result<Document> {
        let url = document_url(self.config.base_url(), self.config.document_name());
        let html = self.source.fetch(&url).await?;
        Ok(Document { url, html })
    }

    async fn transform(&self, document: Document) -> Result<SanitizeReport> {
        let report = if self.config.strict() {
            self.rules.apply_strict(&document.html)?
        } else {
            self.rules.apply(&document.html)
        };

        for (rule, count) in &report.matches {
            tracing::debug!("{:>16}: {} match(es)", rule, count);
        }

        Ok(report)
    }

    async fn load(&self, report: SanitizeReport) -> Result<String> {
        tracing::debug!(
            "Writing {} bytes to {}/{}",
            report.html.len(),
            self.config.output_dir(),
            OUTPUT_FILE_NAME
        );
        self.storage
            .write_file(OUTPUT_FILE_NAME, report.html.as_bytes())
            .await
    }
}
