use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Fetching document...");
        let document = self.pipeline.extract().await?;
        tracing::info!("Fetched {} bytes from {}", document.html.len(), document.url);

        tracing::info!("Sanitizing...");
        let report = self.pipeline.transform(document).await?;
        tracing::info!(
            "Applied {} replacement(s), {} bytes remain",
            report.total_matches(),
            report.html.len()
        );

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Document, SanitizeReport};
    use crate::utils::error::ConvertError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPipeline {
        stages: Mutex<Vec<&'static str>>,
        fail_transform: bool,
    }

    impl RecordingPipeline {
        fn record(&self, stage: &'static str) {
            self.stages.lock().unwrap().push(stage);
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for RecordingPipeline {
        async fn extract(&self) -> Result<Document> {
            self.record("extract");
            Ok(Document {
                url: "https://example.com/a.md".to_string(),
                html: "<p>a</p>".to_string(),
            })
        }

        async fn transform(&self, document: Document) -> Result<SanitizeReport> {
            self.record("transform");
            if self.fail_transform {
                return Err(ConvertError::MissingMarker {
                    rule: "container".to_string(),
                });
            }
            Ok(SanitizeReport {
                html: document.html,
                matches: vec![],
            })
        }

        async fn load(&self, _report: SanitizeReport) -> Result<String> {
            self.record("load");
            Ok("output.html".to_string())
        }
    }

    #[test]
    fn test_stages_run_in_order() {
        let engine = EtlEngine::new(RecordingPipeline::default());

        let path = tokio_test::block_on(engine.run()).unwrap();

        assert_eq!(path, "output.html");
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform", "load"]
        );
    }

    #[test]
    fn test_failure_skips_load() {
        let engine = EtlEngine::new(RecordingPipeline {
            fail_transform: true,
            ..Default::default()
        });

        assert!(tokio_test::block_on(engine.run()).is_err());
        assert_eq!(
            *engine.pipeline.stages.lock().unwrap(),
            vec!["extract", "transform"]
        );
    }
}
