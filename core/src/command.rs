use serde::{Deserialize, Serialize};

/// Operator actions from the tool panel.
/// Variants added over time. Never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum OperatorCommand {
    // ── Session recording ─────────────────────────
    ToggleRecording,
    /// `file_name` pre-answers the filename prompt when present.
    Persist {
        #[serde(default)]
        file_name: Option<String>,
    },

    // ── Drop capture ──────────────────────────────
    ToggleDropCapture {
        #[serde(default)]
        file_name: Option<String>,
    },
}
