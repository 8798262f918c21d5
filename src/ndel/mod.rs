/// NDEL engine interface - actual implementation lives in the external
/// NDEL service, not in this repo.

mod client;

pub use client::NdelServiceClient;

use async_trait::async_trait;

/// Output format requested from the NDEL translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateFormat {
    /// Natural-language output (notation -> prose).
    Natural,
    /// NDEL notation output (prose -> notation).
    Ndel,
}

impl TranslateFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslateFormat::Natural => "natural",
            TranslateFormat::Ndel => "ndel",
        }
    }
}

#[async_trait]
pub trait NdelEngine: Send + Sync {
    /// Render a description of Python source code.
    async fn describe_python_source(&self, source: &str) -> Result<String, anyhow::Error>;

    /// Render a description of SQL source code.
    async fn describe_sql_source(&self, source: &str) -> Result<String, anyhow::Error>;

    /// Convert between NDEL notation and natural language.
    async fn translate(
        &self,
        input: &str,
        to_format: TranslateFormat,
    ) -> Result<String, anyhow::Error>;
}
