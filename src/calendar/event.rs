use chrono::{DateTime, FixedOffset};

/// A single-occurrence event ready to hand to the calendar store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub notes: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl EventDraft {
    pub fn duration_display(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEvent {
    /// Store-assigned identifier. Empty if the store did not report one.
    pub id: String,
    pub draft: EventDraft,
}
