use crate::activity::{Activity, MeetingTime};
use crate::validation::{self, ValidationError};
use serde::Serialize;
use std::fmt;

/// A non-course activity with free-form details.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    title: String,
    meeting: MeetingTime,
    event_details: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        event_details: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        let meeting = MeetingTime::new(meeting_days, start_time, end_time)?;
        Ok(Self {
            title,
            meeting,
            event_details: event_details.into(),
        })
    }

    pub fn event_details(&self) -> &str {
        &self.event_details
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Details may be empty.
    pub fn set_event_details(&mut self, event_details: impl Into<String>) {
        self.event_details = event_details.into();
    }
}

impl Activity for Event {
    fn title(&self) -> &str {
        &self.title
    }

    fn meeting(&self) -> &MeetingTime {
        &self.meeting
    }

    fn set_meeting_days_and_time(
        &mut self,
        days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<(), ValidationError> {
        self.meeting = MeetingTime::new(days, start_time, end_time)?;
        Ok(())
    }

    fn short_display_array(&self) -> [String; 4] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    fn long_display_array(&self) -> [String; 7] {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            String::new(),
            String::new(),
            self.meeting_string(),
            self.event_details.clone(),
        ]
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.title,
            self.meeting.days(),
            self.meeting.start_time(),
            self.meeting.end_time(),
            self.event_details
        )
    }
}
