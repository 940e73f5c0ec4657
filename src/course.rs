use crate::activity::{Activity, MeetingTime};
use crate::validation::{self, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identity of an offering: course name plus section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseKey {
    pub name: String,
    pub section: String,
}

impl CourseKey {
    pub fn new(name: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section: section.into(),
        }
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.section)
    }
}

/// A validated catalog offering.
///
/// Equality and hashing cover every field, meeting information included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: String,
    meeting: MeetingTime,
}

impl Course {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u8,
        instructor_id: impl Into<String>,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self, ValidationError> {
        Self::build(
            name,
            title,
            section,
            credits,
            instructor_id,
            MeetingTime::new(meeting_days, start_time, end_time),
        )
    }

    /// Builds an offering with no fixed meeting time.
    pub fn arranged(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u8,
        instructor_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::build(
            name,
            title,
            section,
            credits,
            instructor_id,
            Ok(MeetingTime::arranged()),
        )
    }

    pub fn with_meeting(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u8,
        instructor_id: impl Into<String>,
        meeting: MeetingTime,
    ) -> Result<Self, ValidationError> {
        Self::build(name, title, section, credits, instructor_id, Ok(meeting))
    }

    // Field checks run in record order so the first bad column is reported.
    fn build(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: u8,
        instructor_id: impl Into<String>,
        meeting: Result<MeetingTime, ValidationError>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let title = title.into();
        let section = section.into();
        let instructor_id = instructor_id.into();

        validation::validate_name(&name)?;
        validation::validate_title(&title)?;
        validation::validate_section(&section)?;
        validation::validate_credits(credits)?;
        validation::validate_instructor_id(&instructor_id)?;
        let meeting = meeting?;

        Ok(Self {
            name,
            title,
            section,
            credits,
            instructor_id,
            meeting,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn meeting_days(&self) -> &str {
        self.meeting.days()
    }

    pub fn start_time(&self) -> i32 {
        self.meeting.start_time()
    }

    pub fn end_time(&self) -> i32 {
        self.meeting.end_time()
    }

    pub fn key(&self) -> CourseKey {
        CourseKey::new(self.name.clone(), self.section.clone())
    }

    pub fn matches(&self, name: &str, section: &str) -> bool {
        self.name == name && self.section == section
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_section(&mut self, section: impl Into<String>) -> Result<(), ValidationError> {
        let section = section.into();
        validation::validate_section(&section)?;
        self.section = section;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: u8) -> Result<(), ValidationError> {
        validation::validate_credits(credits)?;
        self.credits = credits;
        Ok(())
    }

    pub fn set_instructor_id(
        &mut self,
        instructor_id: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let instructor_id = instructor_id.into();
        validation::validate_instructor_id(&instructor_id)?;
        self.instructor_id = instructor_id;
        Ok(())
    }
}

impl Activity for Course {
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
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.meeting_string(),
        ]
    }

    fn long_display_array(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting_string(),
            String::new(),
        ]
    }
}

/// Record line: `name,title,section,credits,instructor,days[,start,end]`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.title,
            self.section,
            self.credits,
            self.instructor_id,
            self.meeting.days()
        )?;
        if !self.meeting.is_arranged() {
            write!(f, ",{},{}", self.meeting.start_time(), self.meeting.end_time())?;
        }
        Ok(())
    }
}
