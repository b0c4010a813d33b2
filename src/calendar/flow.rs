use super::access::AccessStatus;
use super::backend::CalendarBackend;
use super::event::SavedEvent;
use super::request::ReminderRequest;
use crate::config::ReminderConfig;
use crate::error::{Error, Result};

/// Check access, prompting once if the user has never been asked, then save
/// the reminder as a single event.
///
/// Nothing is written unless access is granted and both times parse.
pub fn create_reminder<B: CalendarBackend>(
    backend: &B,
    request: &ReminderRequest,
    config: &ReminderConfig,
) -> Result<SavedEvent> {
    let status = backend.authorization_status();
    tracing::debug!(?status, "calendar authorization");

    match status {
        AccessStatus::Authorized => {}
        AccessStatus::NotDetermined => {
            let granted = backend.request_access()?;
            tracing::info!(granted, "calendar consent answered");
            if !granted {
                return Err(Error::AuthorizationDenied);
            }
        }
        AccessStatus::Denied => return Err(Error::AuthorizationDenied),
    }

    let draft = request.to_draft(config)?;
    let id = backend.save_event(&draft)?;
    tracing::info!(%id, title = %draft.title, when = %draft.duration_display(), "event saved");

    Ok(SavedEvent { id, draft })
}
