use super::{PersistenceResult, ScheduleStore};
use crate::course::CourseKey;
use crate::scheduler::ScheduleSnapshot;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;
use tracing::debug;

pub struct SqliteScheduleStore {
    connection: Mutex<Connection>,
}

impl SqliteScheduleStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    pub fn in_memory() -> PersistenceResult<Self> {
        let connection = Connection::open_in_memory()?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS schedule_title (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                title TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS scheduled_courses (
                position INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                section TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl ScheduleStore for SqliteScheduleStore {
    fn save_snapshot(&self, snapshot: &ScheduleSnapshot) -> PersistenceResult<()> {
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM schedule_title", [])?;
        tx.execute(
            "INSERT INTO schedule_title (id, title) VALUES (1, ?1)",
            params![snapshot.title],
        )?;
        tx.execute("DELETE FROM scheduled_courses", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO scheduled_courses (position, name, section) VALUES (?1, ?2, ?3)",
            )?;
            for (position, key) in snapshot.courses.iter().enumerate() {
                stmt.execute(params![position as i64, key.name, key.section])?;
            }
        }
        tx.commit()?;
        debug!(courses = snapshot.courses.len(), "saved schedule snapshot to sqlite");
        Ok(())
    }

    fn load_snapshot(&self) -> PersistenceResult<Option<ScheduleSnapshot>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");

        let mut stmt = conn.prepare("SELECT title FROM schedule_title WHERE id = 1")?;
        let title: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
        let Some(title) = title else {
            return Ok(None);
        };

        let mut stmt =
            conn.prepare("SELECT name, section FROM scheduled_courses ORDER BY position ASC")?;
        let rows = stmt.query_map([], |row| {
            Ok(CourseKey::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut courses = Vec::new();
        for key in rows {
            courses.push(key?);
        }

        Ok(Some(ScheduleSnapshot { title, courses }))
    }
}
