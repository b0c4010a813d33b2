/// Calendar authorization, collapsed from EventKit's status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Authorized,
    NotDetermined,
    Denied,
}

impl AccessStatus {
    /// Map a raw `EKAuthorizationStatus` value.
    ///
    /// Write-only access is enough to save an event. Restricted and any
    /// value EventKit adds later count as denied.
    pub fn from_raw(code: isize) -> Self {
        match code {
            0 => AccessStatus::NotDetermined,
            3 | 4 => AccessStatus::Authorized,
            _ => AccessStatus::Denied,
        }
    }
}
