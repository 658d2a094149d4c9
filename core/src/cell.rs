use serde::{Deserialize, Serialize};

/// Player-visible state of one cell in a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    /// Safe cell shown with its adjacency count.
    Open(u8),
    /// Mine shown, either the one that was hit or one exposed by the loss sweep.
    Mine,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
