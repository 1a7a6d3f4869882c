use std::sync::Arc;

use crate::config::NarrativeProviderConfig;
use crate::error::ProviderError;
use crate::providers::OpenAiChatProvider;
use crate::traits::NarrativeProvider;

pub fn build_narrative_provider(
    cfg: NarrativeProviderConfig,
) -> Result<Arc<dyn NarrativeProvider>, ProviderError> {
    match cfg {
        NarrativeProviderConfig::OpenAiCompatible(c) => Ok(Arc::new(OpenAiChatProvider::new(c)?)),
    }
}
