use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone};

use super::event::EventDraft;
use crate::config::{ReminderConfig, TimezonePolicy};
use crate::error::{Error, Result};

const USAGE: &str = "Usage: setreminder <title> <date> <start_time> <end_time> <description>";
const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Raw reminder arguments. Nothing is parsed until [`ReminderRequest::to_draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub notes: String,
}

impl ReminderRequest {
    /// Build from the arguments after the program name. Exactly five are
    /// accepted.
    pub fn from_args(args: &[String]) -> Result<Self> {
        match args {
            [title, date, start_time, end_time, notes] => Ok(Self {
                title: title.clone(),
                date: date.clone(),
                start_time: start_time.clone(),
                end_time: end_time.clone(),
                notes: notes.clone(),
            }),
            _ => Err(Error::Usage(USAGE.to_string())),
        }
    }

    pub fn to_draft(&self, config: &ReminderConfig) -> Result<EventDraft> {
        let start = resolve(&self.date, &self.start_time, config.timezone)?;
        let end = resolve(&self.date, &self.end_time, config.timezone)?;

        if config.require_ordered_times && end <= start {
            return Err(Error::InvalidRange {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }

        Ok(EventDraft {
            title: self.title.clone(),
            notes: self.notes.clone(),
            start,
            end,
        })
    }
}

fn resolve(date: &str, time: &str, policy: TimezonePolicy) -> Result<DateTime<FixedOffset>> {
    let input = format!("{date} {time}");
    let naive = NaiveDateTime::parse_from_str(&input, INPUT_FORMAT)
        .map_err(|_| Error::DateParse {
            input: input.clone(),
        })?;

    match policy {
        TimezonePolicy::Local => pin(Local.from_local_datetime(&naive), input, "local"),
        TimezonePolicy::Named(tz) => pin(tz.from_local_datetime(&naive), input, tz.name()),
    }
}

// A repeated wall-clock hour takes the earlier instant.
fn pin<Tz: TimeZone>(
    result: LocalResult<DateTime<Tz>>,
    input: String,
    timezone: &str,
) -> Result<DateTime<FixedOffset>> {
    match result {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.fixed_offset()),
        LocalResult::None => Err(Error::NonexistentTime {
            input,
            timezone: timezone.to_string(),
        }),
    }
}
