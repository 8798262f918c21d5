use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{NdelEngine, TranslateFormat};

/// HTTP client for the external NDEL engine service.
#[derive(Debug, Clone)]
pub struct NdelServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct DescribeCall<'a> {
    source: &'a str,
    language: &'a str,
}

#[derive(Debug, Serialize)]
struct TranslateCall<'a> {
    input: &'a str,
    to_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct EngineResponse {
    output: String,
}

impl NdelServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn describe(&self, source: &str, language: &str) -> Result<String> {
        let url = format!("{}/describe", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&DescribeCall { source, language })
            .send()
            .await?
            .error_for_status()?;
        let result: EngineResponse = response.json().await?;
        Ok(result.output)
    }

    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl NdelEngine for NdelServiceClient {
    async fn describe_python_source(&self, source: &str) -> Result<String> {
        self.describe(source, "python").await
    }

    async fn describe_sql_source(&self, source: &str) -> Result<String> {
        self.describe(source, "sql").await
    }

    async fn translate(&self, input: &str, to_format: TranslateFormat) -> Result<String> {
        let url = format!("{}/translate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&TranslateCall {
                input,
                to_format: to_format.as_str(),
            })
            .send()
            .await?
            .error_for_status()?;
        let result: EngineResponse = response.json().await?;
        Ok(result.output)
    }
}
