/// How a narrative was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeMode {
    /// Text came from a remote language-model provider.
    Remote,
    /// Text came from the deterministic offline template.
    Offline,
}

impl NarrativeMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Offline => "offline",
        }
    }
}

/// Prose explanation of a verdict plus the mode that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub text: String,
    pub mode: NarrativeMode,
}
