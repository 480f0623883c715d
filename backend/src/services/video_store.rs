use crate::error::{VideoError, VideoResult};
use crate::models::{NewVideo, VideoId, VideoRecord};
use anyhow::Context;
use log::info;
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// Storage collaborator for video records.
///
/// Implementations must enforce `video_id` uniqueness atomically with the
/// insert and report a collision as [`VideoError::DuplicateVideoId`].
pub trait VideoStore: Send + Sync {
    fn insert(&self, video: &NewVideo, video_id: &VideoId) -> VideoResult<VideoRecord>;

    /// All records in insertion order.
    fn all(&self) -> VideoResult<Vec<VideoRecord>>;

    fn count(&self) -> VideoResult<usize>;
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS videos (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 200),
        url      TEXT NOT NULL CHECK (length(url) <= 400),
        notes    TEXT,
        video_id TEXT NOT NULL UNIQUE CHECK (length(video_id) <= 40)
    );
";

#[derive(Clone)]
pub struct SqliteVideoStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteVideoStore {
    pub fn open<P: AsRef<Path>>(db_path: P) -> anyhow::Result<Self> {
        let conn = Connection::open(&db_path).with_context(|| {
            format!(
                "Failed to open video database at {}",
                db_path.as_ref().display()
            )
        })?;
        let store = Self::with_connection(conn)?;

        info!(
            "Opened video database at {} with {} videos",
            db_path.as_ref().display(),
            store.count()?
        );
        Ok(store)
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(SCHEMA)
            .context("Failed to create videos table")?;
        Ok(SqliteVideoStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> VideoResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| VideoError::StorageUnavailable)
    }

    fn parse_row(row: &rusqlite::Row) -> rusqlite::Result<VideoRecord> {
        Ok(VideoRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            url: row.get(2)?,
            notes: row.get(3)?,
            video_id: row.get(4)?,
        })
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl VideoStore for SqliteVideoStore {
    fn insert(&self, video: &NewVideo, video_id: &VideoId) -> VideoResult<VideoRecord> {
        let conn = self.lock()?;
        let inserted = conn.execute(
            "INSERT INTO videos (name, url, notes, video_id) VALUES (?1, ?2, ?3, ?4)",
            params![video.name, video.url, video.notes, video_id.as_str()],
        );

        match inserted {
            Ok(_) => Ok(VideoRecord {
                id: conn.last_insert_rowid(),
                name: video.name.clone(),
                url: video.url.clone(),
                notes: video.notes.clone(),
                video_id: video_id.to_string(),
            }),
            Err(e) if is_unique_violation(&e) => Err(VideoError::DuplicateVideoId {
                video_id: video_id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn all(&self) -> VideoResult<Vec<VideoRecord>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT id, name, url, notes, video_id FROM videos ORDER BY id")?;
        let videos = stmt
            .query_map([], Self::parse_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(videos)
    }

    fn count(&self) -> VideoResult<usize> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM videos", [], |r| r.get(0))?;
        Ok(count as usize)
    }
}
