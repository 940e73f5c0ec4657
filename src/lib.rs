pub mod activity;
pub mod config;
pub mod course;
pub mod event;
pub mod persistence;
pub mod scheduler;
pub mod table;
pub mod validation;

pub use activity::{ARRANGED, Activity, MeetingTime};
pub use config::SchedulerConfig;
pub use course::{Course, CourseKey};
pub use event::Event;
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteScheduleStore;
pub use persistence::{
    JsonScheduleStore, PersistenceError, PersistenceResult, ScheduleStore, parse_course_record,
    read_course_records, write_course_records,
};
pub use scheduler::{DEFAULT_SCHEDULE_TITLE, ScheduleSnapshot, SchedulerError, WolfScheduler};
pub use validation::ValidationError;
