use crate::activity::Activity;
use crate::config::SchedulerConfig;
use crate::course::{Course, CourseKey};
use crate::persistence::{self, PersistenceError, ScheduleStore};
use crate::table::{self, FULL_HEADERS, SHORT_HEADERS};
use polars::prelude::{DataFrame, PolarsResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

#[derive(Debug)]
pub enum SchedulerError {
    AlreadyEnrolled { name: String },
    CatalogUnavailable(PersistenceError),
    ExportFailed(PersistenceError),
    Store(PersistenceError),
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::AlreadyEnrolled { name } => {
                write!(f, "You are already enrolled in {name}")
            }
            SchedulerError::CatalogUnavailable(_) => write!(f, "Cannot find file."),
            SchedulerError::ExportFailed(_) => write!(f, "The file cannot be saved."),
            SchedulerError::Store(err) => write!(f, "schedule store error: {err}"),
        }
    }
}

impl std::error::Error for SchedulerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SchedulerError::AlreadyEnrolled { .. } => None,
            SchedulerError::CatalogUnavailable(err)
            | SchedulerError::ExportFailed(err)
            | SchedulerError::Store(err) => Some(err),
        }
    }
}

/// Title plus enrolled offerings, in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub title: String,
    pub courses: Vec<CourseKey>,
}

/// Course catalog plus the user's schedule drawn from it.
///
/// The catalog is fixed once built. The schedule holds positions into the
/// catalog and never contains two courses with the same name.
#[derive(Debug, Clone)]
pub struct WolfScheduler {
    catalog: Vec<Course>,
    catalog_index: HashMap<CourseKey, usize>,
    schedule: Vec<usize>,
    title: String,
}

impl WolfScheduler {
    /// Loads the catalog from a course record file.
    pub fn new<P: AsRef<Path>>(catalog_path: P) -> Result<Self, SchedulerError> {
        let catalog = persistence::read_course_records(catalog_path.as_ref())
            .map_err(SchedulerError::CatalogUnavailable)?;
        Ok(Self::from_catalog(catalog))
    }

    pub fn from_catalog(catalog: Vec<Course>) -> Self {
        let mut catalog_index = HashMap::with_capacity(catalog.len());
        for (idx, course) in catalog.iter().enumerate() {
            catalog_index.entry(course.key()).or_insert(idx);
        }
        info!(courses = catalog.len(), "catalog loaded");
        Self {
            catalog,
            catalog_index,
            schedule: Vec::new(),
            title: DEFAULT_SCHEDULE_TITLE.to_string(),
        }
    }

    pub fn from_config(config: &SchedulerConfig) -> Result<Self, SchedulerError> {
        let mut scheduler = Self::new(&config.catalog_path)?;
        scheduler.set_schedule_title(config.schedule_title.clone());
        Ok(scheduler)
    }

    pub fn schedule_title(&self) -> &str {
        &self.title
    }

    pub fn set_schedule_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    /// Scheduled courses in enrollment order.
    pub fn scheduled(&self) -> impl Iterator<Item = &Course> + '_ {
        self.schedule.iter().map(|&idx| &self.catalog[idx])
    }

    pub fn scheduled_len(&self) -> usize {
        self.schedule.len()
    }

    fn catalog_position(&self, name: &str, section: &str) -> Option<usize> {
        self.catalog_index.get(&CourseKey::new(name, section)).copied()
    }

    pub fn course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog_position(name, section).map(|idx| &self.catalog[idx])
    }

    /// Enrolls the catalog offering `(name, section)`.
    ///
    /// Returns `Ok(false)` when the catalog has no such offering. Any section
    /// of a course name that is already scheduled is rejected.
    pub fn add_course_to_schedule(
        &mut self,
        name: &str,
        section: &str,
    ) -> Result<bool, SchedulerError> {
        let Some(idx) = self.catalog_position(name, section) else {
            debug!(name, section, "course not in catalog");
            return Ok(false);
        };
        if self.scheduled().any(|course| course.name() == name) {
            return Err(SchedulerError::AlreadyEnrolled {
                name: name.to_string(),
            });
        }
        self.schedule.push(idx);
        debug!(name, section, "course added to schedule");
        Ok(true)
    }

    pub fn remove_course_from_schedule(&mut self, name: &str, section: &str) -> bool {
        let position = self
            .schedule
            .iter()
            .position(|&idx| self.catalog[idx].matches(name, section));
        match position {
            Some(position) => {
                self.schedule.remove(position);
                debug!(name, section, "course removed from schedule");
                true
            }
            None => false,
        }
    }

    pub fn reset_schedule(&mut self) {
        self.schedule.clear();
    }

    /// `[name, section, title]` for every catalog entry.
    pub fn course_catalog(&self) -> Vec<[String; 3]> {
        self.catalog.iter().map(short_row).collect()
    }

    /// `[name, section, title]` for every scheduled course.
    pub fn scheduled_courses(&self) -> Vec<[String; 3]> {
        self.scheduled().map(short_row).collect()
    }

    /// `[name, section, title, credits, instructor, meeting]` per scheduled course.
    pub fn full_scheduled_courses(&self) -> Vec<[String; 6]> {
        self.scheduled()
            .map(|course| {
                [
                    course.name().to_string(),
                    course.section().to_string(),
                    course.title().to_string(),
                    course.credits().to_string(),
                    course.instructor_id().to_string(),
                    course.meeting_string(),
                ]
            })
            .collect()
    }

    pub fn catalog_frame(&self) -> PolarsResult<DataFrame> {
        table::rows_to_dataframe(SHORT_HEADERS, &self.course_catalog())
    }

    pub fn schedule_frame(&self) -> PolarsResult<DataFrame> {
        table::rows_to_dataframe(SHORT_HEADERS, &self.scheduled_courses())
    }

    pub fn full_schedule_frame(&self) -> PolarsResult<DataFrame> {
        table::rows_to_dataframe(FULL_HEADERS, &self.full_scheduled_courses())
    }

    /// Writes the current schedule as course records.
    pub fn export_schedule<P: AsRef<Path>>(&self, path: P) -> Result<(), SchedulerError> {
        let courses: Vec<Course> = self.scheduled().cloned().collect();
        persistence::write_course_records(path.as_ref(), &courses)
            .map_err(SchedulerError::ExportFailed)
    }

    pub fn snapshot(&self) -> ScheduleSnapshot {
        ScheduleSnapshot {
            title: self.title.clone(),
            courses: self.scheduled().map(Course::key).collect(),
        }
    }

    /// Replaces the schedule with the snapshot's title and courses.
    ///
    /// Offerings missing from the catalog, or clashing by name with one
    /// already restored, are skipped. Returns how many were enrolled.
    pub fn restore(&mut self, snapshot: &ScheduleSnapshot) -> usize {
        self.reset_schedule();
        self.title = snapshot.title.clone();
        let mut restored = 0;
        for key in &snapshot.courses {
            match self.add_course_to_schedule(&key.name, &key.section) {
                Ok(true) => restored += 1,
                Ok(false) => warn!(course = %key, "snapshot course not in catalog"),
                Err(err) => warn!(course = %key, "snapshot course skipped: {err}"),
            }
        }
        info!(restored, requested = snapshot.courses.len(), "schedule restored");
        restored
    }

    pub fn save_to(&self, store: &dyn ScheduleStore) -> Result<(), SchedulerError> {
        store.save_snapshot(&self.snapshot()).map_err(SchedulerError::Store)
    }

    /// Restores from `store`; `Ok(false)` when nothing was saved yet.
    pub fn restore_from(&mut self, store: &dyn ScheduleStore) -> Result<bool, SchedulerError> {
        match store.load_snapshot().map_err(SchedulerError::Store)? {
            Some(snapshot) => {
                self.restore(&snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn short_row(course: &Course) -> [String; 3] {
    [
        course.name().to_string(),
        course.section().to_string(),
        course.title().to_string(),
    ]
}
