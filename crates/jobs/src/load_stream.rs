//! load_stream job
//!
//! Loads a newline-delimited record file into the configured queue. Owns the
//! keys `stream.name` (compound descriptor) and `stream.source` (file path).

use anyhow::Context;
use async_trait::async_trait;
use sluice_core::domain::StreamDescriptor;
use sluice_core::port::{keys, ConfigProvider, JobHandler};
use sluice_queue_sdk::attach;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tracing::{info, warn};

/// Handler for [`JobKind::QueueLoadStream`](sluice_core::domain::JobKind).
pub struct LoadStreamJob;

#[async_trait]
impl JobHandler for LoadStreamJob {
    async fn run(&self, config: Arc<dyn ConfigProvider>) -> anyhow::Result<()> {
        let descriptor: StreamDescriptor = config.require(keys::STREAM_NAME)?.parse()?;
        let source = config.require(keys::STREAM_SOURCE)?;

        let attachment = attach(config.as_ref(), &descriptor)?;
        let handle = attachment.handle();

        // The create may have lost a benign race with another attacher; a
        // real broker outage will surface on the pushes below.
        if let Err(e) = attachment.provisioned().await {
            warn!(stream = %descriptor, error = %e, "Queue provisioning reported an error");
        }

        let file = tokio::fs::File::open(&source)
            .await
            .with_context(|| format!("opening stream source {}", source))?;
        let mut lines = tokio::io::BufReader::new(file).lines();

        let mut pushed = 0usize;
        while let Some(line) = lines.next_line().await? {
            if line.is_empty() {
                continue;
            }
            handle.push(line).await?;
            pushed += 1;
        }

        info!(stream = %descriptor, records = pushed, "Stream loaded into queue");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::port::MapConfig;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_source(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("sluice_{}_{}", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn job_config(broker_url: &str, source: &std::path::Path) -> Arc<MapConfig> {
        Arc::new(
            [
                (keys::BROKER_URL.to_string(), broker_url.to_string()),
                (keys::STREAM_NAME.to_string(), "ns/records".to_string()),
                (
                    keys::STREAM_SOURCE.to_string(),
                    source.to_string_lossy().into_owned(),
                ),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[tokio::test]
    async fn test_loads_each_record_into_queue() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/queues"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/queues/records"))
            .respond_with(ResponseTemplate::new(200))
            .expect(3)
            .mount(&server)
            .await;

        let source = write_source("records", "one\ntwo\n\nthree\n");
        let config = job_config(&server.uri(), &source);

        LoadStreamJob.run(config).await.unwrap();

        std::fs::remove_file(source).unwrap();
    }

    #[tokio::test]
    async fn test_missing_source_file_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/queues"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let config = job_config(&server.uri(), std::path::Path::new("/nonexistent/records"));

        let err = LoadStreamJob.run(config).await.unwrap_err();
        assert!(err.to_string().contains("stream source"));
    }

    #[tokio::test]
    async fn test_malformed_stream_name_fails_before_io() {
        let config: Arc<MapConfig> = Arc::new(
            [
                (keys::BROKER_URL.to_string(), "http://broker:9000".to_string()),
                (keys::STREAM_NAME.to_string(), "badname".to_string()),
                (keys::STREAM_SOURCE.to_string(), "/tmp/ignored".to_string()),
            ]
            .into_iter()
            .collect(),
        );

        let err = LoadStreamJob.run(config).await.unwrap_err();
        assert!(err.to_string().contains("malformed stream descriptor"));
    }

    #[tokio::test]
    async fn test_push_failure_propagates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/queues"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/queues/records"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = write_source("failing", "one\n");
        let config = job_config(&server.uri(), &source);

        let err = LoadStreamJob.run(config).await.unwrap_err();
        assert!(err.to_string().contains("500"));

        std::fs::remove_file(source).unwrap();
    }
}
