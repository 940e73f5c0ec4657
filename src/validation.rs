use std::fmt;

const MIN_NAME_LENGTH: usize = 5;
const MAX_NAME_LENGTH: usize = 8;
const MIN_LETTER_COUNT: usize = 1;
const MAX_LETTER_COUNT: usize = 4;
const NAME_DIGIT_COUNT: usize = 3;
const SECTION_LENGTH: usize = 3;
const MIN_CREDITS: u8 = 1;
const MAX_CREDITS: u8 = 5;

/// Field-level rejection raised by constructors and setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidName(String),
    InvalidTitle,
    InvalidSection(String),
    InvalidCredits(u8),
    InvalidInstructorId,
    InvalidMeeting {
        days: String,
        start_time: i32,
        end_time: i32,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidName(_) => write!(f, "Invalid course name."),
            ValidationError::InvalidTitle => write!(f, "Invalid title."),
            ValidationError::InvalidSection(_) => write!(f, "Invalid section."),
            ValidationError::InvalidCredits(_) => write!(f, "Invalid credits."),
            ValidationError::InvalidInstructorId => write!(f, "Invalid instructor id."),
            ValidationError::InvalidMeeting { .. } => write!(f, "Invalid meeting days and times."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Accepts `L[LLL] NNN`: one to four letters, a single space, three digits.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidName(name.to_string());

    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(invalid());
    }

    let mut letter_count = 0;
    let mut digit_count = 0;
    let mut past_space = false;
    for ch in name.chars() {
        if !past_space {
            if ch.is_ascii_alphabetic() {
                letter_count += 1;
            } else if ch == ' ' {
                past_space = true;
            } else {
                return Err(invalid());
            }
        } else if ch.is_ascii_digit() {
            digit_count += 1;
        } else {
            return Err(invalid());
        }
    }

    if !(MIN_LETTER_COUNT..=MAX_LETTER_COUNT).contains(&letter_count) {
        return Err(invalid());
    }
    if digit_count != NAME_DIGIT_COUNT {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::InvalidTitle);
    }
    Ok(())
}

pub fn validate_section(section: &str) -> Result<(), ValidationError> {
    if section.len() != SECTION_LENGTH || !section.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(ValidationError::InvalidSection(section.to_string()));
    }
    Ok(())
}

pub fn validate_credits(credits: u8) -> Result<(), ValidationError> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(ValidationError::InvalidCredits(credits));
    }
    Ok(())
}

pub fn validate_instructor_id(instructor_id: &str) -> Result<(), ValidationError> {
    if instructor_id.is_empty() {
        return Err(ValidationError::InvalidInstructorId);
    }
    Ok(())
}
