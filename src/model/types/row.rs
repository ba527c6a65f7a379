use crate::model::functions::RemovalOutcome;
use crate::model::types::Notice;

/// What the page does once a removal request comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterRemoval {
    Reload,
    Notify(Notice),
}

/// A participant row is either shown normally or greyed out while its removal is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowState {
    deleting: bool,
}

impl RowState {
    pub fn begin(&mut self) {
        self.deleting = true;
    }

    /// A failed removal puts the row back to normal; a successful one leaves it
    /// greyed out until the page reloads.
    pub fn apply(&mut self, outcome: RemovalOutcome) -> AfterRemoval {
        match outcome {
            RemovalOutcome::Removed => AfterRemoval::Reload,
            RemovalOutcome::Failed(text) => {
                self.deleting = false;
                AfterRemoval::Notify(Notice::Error(text))
            }
        }
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}
