use wolf_scheduler::{Activity, Event, ValidationError};

#[test]
fn event_display_arrays_pad_course_columns() {
    let event = Event::new("Exercise", "MWF", 800, 900, "Gym").unwrap();
    assert_eq!(
        event.short_display_array(),
        [
            String::new(),
            String::new(),
            "Exercise".to_string(),
            "MWF 8:00AM-9:00AM".to_string(),
        ]
    );
    assert_eq!(
        event.long_display_array(),
        [
            String::new(),
            String::new(),
            "Exercise".to_string(),
            String::new(),
            String::new(),
            "MWF 8:00AM-9:00AM".to_string(),
            "Gym".to_string(),
        ]
    );
    assert_eq!(event.to_string(), "Exercise,MWF,800,900,Gym");
}

#[test]
fn event_details_may_be_empty() {
    let mut event = Event::new("Lunch", "H", 1200, 1300, "").unwrap();
    assert_eq!(event.event_details(), "");
    event.set_event_details("Talley");
    assert_eq!(event.event_details(), "Talley");
}

#[test]
fn event_reuses_meeting_rules() {
    assert_eq!(
        Event::new("", "M", 800, 900, "x").unwrap_err(),
        ValidationError::InvalidTitle
    );
    assert!(Event::new("Run", "MM", 800, 900, "x").is_err());
    assert!(Event::new("Run", "M", 900, 800, "x").is_err());

    let mut event = Event::new("Run", "M", 800, 900, "x").unwrap();
    assert!(event.set_meeting_days_and_time("A", 800, 900).is_err());
    assert_eq!(event.meeting_string(), "M 8:00AM-9:00AM");
    assert!(event.set_title("").is_err());
    assert_eq!(event.title(), "Run");
}
