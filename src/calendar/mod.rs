pub mod access;
pub mod backend;
pub mod event;
pub mod flow;
pub mod request;
#[cfg(target_os = "macos")]
pub mod store;

pub use access::AccessStatus;
pub use backend::{CalendarBackend, UnsupportedStore};
pub use event::{EventDraft, SavedEvent};
pub use flow::create_reminder;
pub use request::ReminderRequest;
#[cfg(target_os = "macos")]
pub use store::EventKitStore;

/// The calendar backend for this platform.
#[cfg(target_os = "macos")]
pub fn system_backend() -> crate::error::Result<EventKitStore> {
    Ok(EventKitStore::new())
}

#[cfg(not(target_os = "macos"))]
pub fn system_backend() -> crate::error::Result<UnsupportedStore> {
    Ok(UnsupportedStore)
}
