use async_trait::async_trait;
use ccgauge_engine::{RunDescription, Verdict};

use crate::error::ProviderError;

#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn explain(
        &self,
        run: &RunDescription,
        verdict: &Verdict,
    ) -> Result<String, ProviderError>;
}
