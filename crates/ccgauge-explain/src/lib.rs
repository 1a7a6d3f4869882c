pub mod config;
pub mod error;
pub mod factory;
pub mod offline;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::ProviderError;
pub use factory::*;
pub use offline::offline_explanation;
pub use traits::*;
pub use types::*;

use ccgauge_engine::{RunDescription, Verdict};

/// Explain a verdict, best effort.
///
/// A missing or failing provider never surfaces as an error: the result
/// falls back to the deterministic offline template and is tagged with the
/// mode it came from.
pub async fn explain(
    provider: Option<&dyn NarrativeProvider>,
    run: &RunDescription,
    verdict: &Verdict,
) -> Narrative {
    let Some(provider) = provider else {
        return Narrative {
            text: offline_explanation(run, verdict),
            mode: NarrativeMode::Offline,
        };
    };

    match provider.explain(run, verdict).await {
        Ok(text) => Narrative {
            text,
            mode: NarrativeMode::Remote,
        },
        Err(err) => {
            tracing::warn!(
                provider = provider.name(),
                error = %err,
                "narrative provider failed, falling back to offline template"
            );
            Narrative {
                text: offline_explanation(run, verdict),
                mode: NarrativeMode::Offline,
            }
        }
    }
}
