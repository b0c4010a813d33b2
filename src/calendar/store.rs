use std::sync::Mutex;

use block2::RcBlock;
use chrono::{DateTime, FixedOffset};
use objc2::rc::Retained;
use objc2::runtime::Bool;
use objc2_event_kit::{EKEntityType, EKEvent, EKEventStore, EKSpan};
use objc2_foundation::{NSDate, NSError, NSString};
use tokio::sync::oneshot;

use super::access::AccessStatus;
use super::backend::CalendarBackend;
use super::event::EventDraft;
use crate::error::{Error, Result};

/// Seconds between Unix epoch (1970-01-01) and NSDate reference date (2001-01-01)
const NSDATE_UNIX_OFFSET: f64 = 978307200.0;

/// EventKit-backed calendar store.
pub struct EventKitStore {
    store: Retained<EKEventStore>,
}

impl EventKitStore {
    pub fn new() -> Self {
        let store = unsafe { EKEventStore::new() };
        Self { store }
    }
}

impl Default for EventKitStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarBackend for EventKitStore {
    fn authorization_status(&self) -> AccessStatus {
        let status =
            unsafe { EKEventStore::authorizationStatusForEntityType(EKEntityType::Event) };
        AccessStatus::from_raw(status.0)
    }

    fn request_access(&self) -> Result<bool> {
        // The completion block may be called on any queue, exactly once.
        let (tx, rx) = oneshot::channel::<(bool, Option<String>)>();
        let slot = Mutex::new(Some(tx));
        let block = RcBlock::new(move |granted: Bool, error: *mut NSError| {
            let detail = unsafe { error.as_ref().map(|e| e.localizedDescription().to_string()) };
            if let Some(tx) = slot.lock().ok().and_then(|mut s| s.take()) {
                let _ = tx.send((granted.as_bool(), detail));
            }
        });

        unsafe {
            self.store
                .requestFullAccessToEventsWithCompletion(&*block as *const _ as *mut _);
        }

        let (granted, detail) = rx.blocking_recv().map_err(|_| {
            tracing::error!("calendar consent callback dropped without an answer");
            Error::AuthorizationDenied
        })?;
        if let Some(detail) = detail {
            tracing::warn!(%detail, "calendar consent request reported an error");
        }
        Ok(granted)
    }

    fn save_event(&self, draft: &EventDraft) -> Result<String> {
        let calendar = unsafe { self.store.defaultCalendarForNewEvents() }
            .ok_or_else(|| Error::StoreSave("no default calendar for new events".to_string()))?;

        let event = unsafe { EKEvent::eventWithEventStore(&self.store) };
        unsafe {
            event.setTitle(Some(&NSString::from_str(&draft.title)));
            event.setNotes(Some(&NSString::from_str(&draft.notes)));
            event.setStartDate(Some(&datetime_to_nsdate(&draft.start)));
            event.setEndDate(Some(&datetime_to_nsdate(&draft.end)));
            event.setCalendar(Some(&calendar));
        }

        unsafe { self.store.saveEvent_span_error(&event, EKSpan::ThisEvent) }
            .map_err(|e| Error::StoreSave(unsafe { e.localizedDescription() }.to_string()))?;

        let id = unsafe { event.eventIdentifier() }
            .map(|s| s.to_string())
            .unwrap_or_default();
        Ok(id)
    }
}

fn datetime_to_nsdate(dt: &DateTime<FixedOffset>) -> Retained<NSDate> {
    let unix_ts = dt.timestamp() as f64;
    let nsdate_ts = unix_ts - NSDATE_UNIX_OFFSET;
    NSDate::dateWithTimeIntervalSinceReferenceDate(nsdate_ts)
}
