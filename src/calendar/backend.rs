use super::access::AccessStatus;
use super::event::EventDraft;
use crate::error::{Error, Result};

/// The OS calendar service as seen by the reminder flow.
pub trait CalendarBackend {
    fn authorization_status(&self) -> AccessStatus;

    /// Show the consent prompt and block until the user answers.
    fn request_access(&self) -> Result<bool>;

    /// Save a single occurrence to the default calendar and return its
    /// identifier.
    fn save_event(&self, draft: &EventDraft) -> Result<String>;
}

/// Backend for platforms without EventKit. Access is never granted.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedStore;

impl CalendarBackend for UnsupportedStore {
    fn authorization_status(&self) -> AccessStatus {
        AccessStatus::Denied
    }

    fn request_access(&self) -> Result<bool> {
        Ok(false)
    }

    fn save_event(&self, _draft: &EventDraft) -> Result<String> {
        Err(Error::StoreSave(
            "no calendar store on this platform".to_string(),
        ))
    }
}
