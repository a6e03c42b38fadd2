//! Type codes, flags and field encodings of the job document format.

use crate::error::XmlError;
use crate::job::{EntryKind, HopCondition, Schedule};

pub(super) const TYPE_SPECIAL: &str = "SPECIAL";
pub(super) const TYPE_WRITE_TO_LOG: &str = "WRITE_TO_LOG";
pub(super) const TYPE_FTP: &str = "FTP";
pub(super) const TYPE_SUCCESS: &str = "SUCCESS";

pub(super) fn type_code(kind: &EntryKind) -> &'static str {
    match kind {
        EntryKind::Start(_) => TYPE_SPECIAL,
        EntryKind::WriteToLog(_) => TYPE_WRITE_TO_LOG,
        EntryKind::Ftp(_) => TYPE_FTP,
        EntryKind::Success => TYPE_SUCCESS,
    }
}

pub(super) fn yes_no(flag: bool) -> &'static str {
    if flag { "Y" } else { "N" }
}

pub(super) fn parse_yes_no(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("Y") {
        Some(true)
    } else if value.eq_ignore_ascii_case("N") {
        Some(false)
    } else {
        None
    }
}

/// Encodes a condition as the `(evaluation, unconditional)` flag pair of a hop.
pub(super) fn condition_flags(condition: HopCondition) -> (bool, bool) {
    match condition {
        HopCondition::Unconditional => (true, true),
        HopCondition::OnSuccess => (true, false),
        HopCondition::OnFailure => (false, false),
    }
}

pub(super) fn condition_from_flags(evaluation: bool, unconditional: bool) -> HopCondition {
    match (evaluation, unconditional) {
        (_, true) => HopCondition::Unconditional,
        (true, false) => HopCondition::OnSuccess,
        (false, false) => HopCondition::OnFailure,
    }
}

/// The flat scheduling fields of a start entry. Fields that the scheduler type does not
/// use keep the engine's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ScheduleFields {
    pub scheduler_type: u8,
    pub interval_seconds: u32,
    pub interval_minutes: u32,
    pub hour: u8,
    pub minutes: u8,
    pub week_day: u8,
    pub day_of_month: u8,
}

impl Default for ScheduleFields {
    fn default() -> Self {
        Self {
            scheduler_type: 0,
            interval_seconds: 0,
            interval_minutes: 60,
            hour: 12,
            minutes: 0,
            week_day: 1,
            day_of_month: 1,
        }
    }
}

impl From<Schedule> for ScheduleFields {
    fn from(schedule: Schedule) -> Self {
        let defaults = Self::default();
        match schedule {
            Schedule::None => defaults,
            Schedule::Interval { seconds, minutes } => Self {
                scheduler_type: 1,
                interval_seconds: seconds,
                interval_minutes: minutes,
                ..defaults
            },
            Schedule::Daily { hour, minute } => Self {
                scheduler_type: 2,
                hour,
                minutes: minute,
                ..defaults
            },
            Schedule::Weekly {
                weekday,
                hour,
                minute,
            } => Self {
                scheduler_type: 3,
                week_day: weekday,
                hour,
                minutes: minute,
                ..defaults
            },
            Schedule::Monthly { day, hour, minute } => Self {
                scheduler_type: 4,
                day_of_month: day,
                hour,
                minutes: minute,
                ..defaults
            },
        }
    }
}

impl ScheduleFields {
    pub fn into_schedule(self) -> Result<Schedule, XmlError> {
        let schedule = match self.scheduler_type {
            0 => Schedule::None,
            1 => Schedule::Interval {
                seconds: self.interval_seconds,
                minutes: self.interval_minutes,
            },
            2 => Schedule::Daily {
                hour: self.hour,
                minute: self.minutes,
            },
            3 => Schedule::Weekly {
                weekday: self.week_day,
                hour: self.hour,
                minute: self.minutes,
            },
            4 => Schedule::Monthly {
                day: self.day_of_month,
                hour: self.hour,
                minute: self.minutes,
            },
            other => {
                return Err(XmlError::InvalidValue {
                    element: "schedulerType".to_string(),
                    value: other.to_string(),
                });
            }
        };
        Ok(schedule)
    }
}
