use wolf_scheduler::{ARRANGED, MeetingTime, ValidationError};

#[test]
fn meeting_string_uses_twelve_hour_clock() {
    let meeting = MeetingTime::new("MW", 910, 1100).unwrap();
    assert_eq!(meeting.to_string(), "MW 9:10AM-11:00AM");

    let afternoon = MeetingTime::new("TH", 1330, 1445).unwrap();
    assert_eq!(afternoon.to_string(), "TH 1:30PM-2:45PM");
}

#[test]
fn midnight_and_noon_render_as_twelve() {
    let meeting = MeetingTime::new("F", 5, 1200).unwrap();
    assert_eq!(meeting.to_string(), "F 12:05AM-12:00PM");

    let late = MeetingTime::new("M", 1259, 2359).unwrap();
    assert_eq!(late.to_string(), "M 12:59PM-11:59PM");
}

#[test]
fn arranged_requires_zero_times() {
    let arranged = MeetingTime::new(ARRANGED, 0, 0).unwrap();
    assert!(arranged.is_arranged());
    assert_eq!(arranged.to_string(), "Arranged");
    assert_eq!(arranged, MeetingTime::arranged());

    for (start, end) in [(0, 100), (800, 0), (800, 900)] {
        assert!(matches!(
            MeetingTime::new(ARRANGED, start, end),
            Err(ValidationError::InvalidMeeting { .. })
        ));
    }
}

#[test]
fn every_weekday_subset_is_accepted_in_given_order() {
    let letters = ['M', 'T', 'W', 'H', 'F'];
    for mask in 1u8..32 {
        let days: String = letters
            .iter()
            .enumerate()
            .filter(|(idx, _)| mask & (1 << idx) != 0)
            .map(|(_, ch)| *ch)
            .collect();
        let reversed: String = days.chars().rev().collect();
        for candidate in [days, reversed] {
            let meeting = MeetingTime::new(&candidate, 800, 950).unwrap();
            assert_eq!(meeting.days(), candidate);
            assert!(meeting.to_string().starts_with(&format!("{candidate} ")));
        }
    }
}

#[test]
fn rejects_bad_days() {
    for days in ["", "MM", "MWM", "S", "U", "mw", "M W", "AM"] {
        assert!(
            MeetingTime::new(days, 800, 900).is_err(),
            "{days:?} should be rejected"
        );
    }
}

#[test]
fn rejects_out_of_range_times() {
    let rejected = [
        (-1, 900),
        (800, -30),
        (2400, 2400),
        (860, 900),
        (800, 2360),
        (800, 799),
        (1100, 910),
    ];
    for (start, end) in rejected {
        assert!(
            MeetingTime::new("MW", start, end).is_err(),
            "{start}-{end} should be rejected"
        );
    }
}

#[test]
fn equal_start_and_end_is_allowed() {
    let meeting = MeetingTime::new("H", 1000, 1000).unwrap();
    assert_eq!(meeting.start_time(), 1000);
    assert_eq!(meeting.end_time(), 1000);
}

#[test]
fn meeting_string_is_stable_across_calls() {
    let meeting = MeetingTime::new("MWF", 935, 1025).unwrap();
    assert_eq!(meeting.to_string(), meeting.to_string());
    assert_eq!(meeting.to_string(), "MWF 9:35AM-10:25AM");
}
