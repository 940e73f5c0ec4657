use super::{PersistenceError, PersistenceResult, ScheduleStore};
use crate::activity::{ARRANGED, Activity};
use crate::course::Course;
use crate::scheduler::ScheduleSnapshot;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reads a catalog file of course records.
///
/// Lines that fail to parse or validate are skipped, as are lines repeating
/// the name and section of an earlier course. Lines that are not valid UTF-8
/// are skipped too; only I/O failures abort the read. A missing file is
/// reported as [`PersistenceError::NotFound`].
pub fn read_course_records<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Course>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => PersistenceError::NotFound(path.display().to_string()),
        _ => PersistenceError::Io(err),
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut courses: Vec<Course> = Vec::new();
    let mut seen = HashSet::new();
    for record in reader.byte_records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let record = match StringRecord::from_byte_record(record) {
            Ok(record) => record,
            Err(err) => {
                warn!(path = %path.display(), line, "skipping course record: {err}");
                continue;
            }
        };
        let course = match parse_course_record(&record) {
            Ok(course) => course,
            Err(err) => {
                let err = PersistenceError::InvalidRecord {
                    line,
                    reason: err.to_string(),
                };
                warn!(path = %path.display(), "skipping course record: {err}");
                continue;
            }
        };
        if !seen.insert(course.key()) {
            warn!(
                path = %path.display(),
                line,
                course = %course.key(),
                "skipping duplicate course record"
            );
            continue;
        }
        courses.push(course);
    }

    info!(path = %path.display(), count = courses.len(), "read course records");
    Ok(courses)
}

/// Parses `name,title,section,credits,instructor,days[,start,end]`.
///
/// Arranged courses carry exactly six fields, every other course eight.
pub fn parse_course_record(record: &StringRecord) -> PersistenceResult<Course> {
    let fields: Vec<&str> = record.iter().collect();
    let [name, title, section, credits, instructor_id, days, times @ ..] = fields.as_slice()
    else {
        return Err(PersistenceError::InvalidData(format!(
            "expected at least 6 fields, found {}",
            fields.len()
        )));
    };

    let credits = credits
        .parse::<u8>()
        .map_err(|e| PersistenceError::InvalidData(format!("invalid credits '{credits}': {e}")))?;

    let course = match times {
        [] if *days == ARRANGED => {
            Course::arranged(*name, *title, *section, credits, *instructor_id)?
        }
        [start, end] if *days != ARRANGED => Course::new(
            *name,
            *title,
            *section,
            credits,
            *instructor_id,
            days,
            parse_time(start)?,
            parse_time(end)?,
        )?,
        _ => {
            return Err(PersistenceError::InvalidData(format!(
                "unexpected field count {} for meeting days '{days}'",
                fields.len()
            )));
        }
    };
    Ok(course)
}

fn parse_time(input: &str) -> PersistenceResult<i32> {
    input
        .parse::<i32>()
        .map_err(|e| PersistenceError::InvalidData(format!("invalid time '{input}': {e}")))
}

fn course_fields(course: &Course) -> Vec<String> {
    let mut fields = vec![
        course.name().to_string(),
        course.title().to_string(),
        course.section().to_string(),
        course.credits().to_string(),
        course.instructor_id().to_string(),
        course.meeting_days().to_string(),
    ];
    if !course.meeting().is_arranged() {
        fields.push(course.start_time().to_string());
        fields.push(course.end_time().to_string());
    }
    fields
}

/// Writes one record line per course, in slice order.
///
/// Fields containing a comma or a double quote are quoted csv-style, so such
/// lines differ from the course's `Display` form but still read back intact.
pub fn write_course_records<P: AsRef<Path>>(path: P, courses: &[Course]) -> PersistenceResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);
    for course in courses {
        writer.write_record(course_fields(course))?;
    }
    writer.flush()?;
    info!(path = %path.display(), count = courses.len(), "wrote course records");
    Ok(())
}

/// Keeps the schedule snapshot as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonScheduleStore {
    path: PathBuf,
}

impl JsonScheduleStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleStore for JsonScheduleStore {
    fn save_snapshot(&self, snapshot: &ScheduleSnapshot) -> PersistenceResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, snapshot)?;
        debug!(path = %self.path.display(), "saved schedule snapshot");
        Ok(())
    }

    fn load_snapshot(&self) -> PersistenceResult<Option<ScheduleSnapshot>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot: ScheduleSnapshot = serde_json::from_reader(file)?;
        Ok(Some(snapshot))
    }
}
