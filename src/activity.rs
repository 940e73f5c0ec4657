use crate::validation::ValidationError;
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

/// Sentinel meeting-days value for offerings without a fixed time.
pub const ARRANGED: &str = "A";

const WEEKDAYS: [char; 5] = ['M', 'T', 'W', 'H', 'F'];

/// Meeting days plus start/end time in military `HHMM` encoding.
///
/// The three values are validated together and can only be replaced together,
/// so a `MeetingTime` is always internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MeetingTime {
    days: String,
    start_time: i32,
    end_time: i32,
}

impl MeetingTime {
    pub fn new(days: &str, start_time: i32, end_time: i32) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidMeeting {
            days: days.to_string(),
            start_time,
            end_time,
        };

        if days.is_empty() {
            return Err(invalid());
        }

        if days == ARRANGED {
            if start_time != 0 || end_time != 0 {
                return Err(invalid());
            }
            return Ok(Self::arranged());
        }

        let mut seen = [false; WEEKDAYS.len()];
        for ch in days.chars() {
            let Some(idx) = WEEKDAYS.iter().position(|day| *day == ch) else {
                return Err(invalid());
            };
            if seen[idx] {
                return Err(invalid());
            }
            seen[idx] = true;
        }

        if military_to_time(start_time).is_none() || military_to_time(end_time).is_none() {
            return Err(invalid());
        }
        if end_time < start_time {
            return Err(invalid());
        }

        Ok(Self {
            days: days.to_string(),
            start_time,
            end_time,
        })
    }

    pub fn arranged() -> Self {
        Self {
            days: ARRANGED.to_string(),
            start_time: 0,
            end_time: 0,
        }
    }

    pub fn days(&self) -> &str {
        &self.days
    }

    pub fn start_time(&self) -> i32 {
        self.start_time
    }

    pub fn end_time(&self) -> i32 {
        self.end_time
    }

    pub fn is_arranged(&self) -> bool {
        self.days == ARRANGED
    }
}

/// Renders `"Arranged"` or `"<days> <h>:<mm><AM|PM>-<h>:<mm><AM|PM>"`.
impl fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_arranged() {
            return write!(f, "Arranged");
        }
        match (
            military_to_time(self.start_time),
            military_to_time(self.end_time),
        ) {
            (Some(start), Some(end)) => write!(
                f,
                "{} {}-{}",
                self.days,
                start.format("%-I:%M%p"),
                end.format("%-I:%M%p")
            ),
            _ => write!(f, "{} {}-{}", self.days, self.start_time, self.end_time),
        }
    }
}

fn military_to_time(value: i32) -> Option<NaiveTime> {
    if value < 0 {
        return None;
    }
    let hour = u32::try_from(value / 100).ok()?;
    let minute = u32::try_from(value % 100).ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Capability shared by everything that can sit on a schedule.
pub trait Activity {
    fn title(&self) -> &str;

    fn meeting(&self) -> &MeetingTime;

    /// Replaces days and times as one unit; on error nothing changes.
    fn set_meeting_days_and_time(
        &mut self,
        days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<(), ValidationError>;

    fn meeting_string(&self) -> String {
        self.meeting().to_string()
    }

    /// Row used by the compact schedule view.
    fn short_display_array(&self) -> [String; 4];

    /// Row used by the detailed schedule view.
    fn long_display_array(&self) -> [String; 7];
}
