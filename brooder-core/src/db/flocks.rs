//! Flock lifecycle operations.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::{format_ts, parse_opt_ts, parse_ts, parse_uuid, Database};
use crate::error::{CoreError, Result};
use crate::models::{
    CreateFlockInput, Flock, FlockStatus, UpdateFlockInput, DEFAULT_FLOCK_NAME, MAX_FLOCK_NAME_LEN,
};

const FLOCK_COLS: &str = "id, user_id, name, status, start_date, current_week, created_at, updated_at";

struct FlockRow {
    id: String,
    user_id: String,
    name: String,
    status: String,
    start_date: Option<String>,
    current_week: i64,
    created_at: String,
    updated_at: String,
}

impl FlockRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            status: row.get(3)?,
            start_date: row.get(4)?,
            current_week: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }

    fn into_flock(self) -> Result<Flock> {
        Ok(Flock {
            id: parse_uuid(&self.id)?,
            user_id: self.user_id,
            status: FlockStatus::from_str(&self.status)
                .ok_or_else(|| CoreError::Corrupt(format!("bad flock status {:?}", self.status)))?,
            name: self.name,
            start_date: parse_opt_ts(self.start_date)?,
            current_week: self.current_week,
            created_at: parse_ts(&self.created_at)?,
            updated_at: parse_ts(&self.updated_at)?,
        })
    }
}

fn validate_flock_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("flock name must not be empty".into()));
    }
    if name.chars().count() > MAX_FLOCK_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "flock name must be at most {MAX_FLOCK_NAME_LEN} characters"
        )));
    }
    Ok(())
}

impl Database {
    /// Create a flock. With a start date it begins ACTIVE in week 1,
    /// otherwise PREPARING in week 0.
    pub fn create_flock(&self, user_id: &str, input: CreateFlockInput) -> Result<Flock> {
        let name = input.name.unwrap_or_else(|| DEFAULT_FLOCK_NAME.to_string());
        validate_flock_name(&name)?;

        let (status, current_week) = match input.start_date {
            Some(_) => (FlockStatus::Active, 1),
            None => (FlockStatus::Preparing, 0),
        };

        let flock = Flock {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            name,
            status,
            start_date: input.start_date,
            current_week,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO flocks (id, user_id, name, status, start_date, current_week, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    flock.id.to_string(),
                    flock.user_id,
                    flock.name,
                    flock.status.as_str(),
                    flock.start_date.map(format_ts),
                    flock.current_week,
                    format_ts(flock.created_at),
                    format_ts(flock.updated_at),
                ],
            )?;
            Ok(())
        })?;

        Ok(flock)
    }

    pub fn get_flock(&self, id: Uuid) -> Result<Option<Flock>> {
        let row = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!("SELECT {FLOCK_COLS} FROM flocks WHERE id = ?1"),
                    params![id.to_string()],
                    FlockRow::from_row,
                )
                .optional()?)
        })?;
        row.map(FlockRow::into_flock).transpose()
    }

    pub fn list_flocks_for_user(&self, user_id: &str) -> Result<Vec<Flock>> {
        let rows = self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {FLOCK_COLS} FROM flocks WHERE user_id = ?1 ORDER BY created_at DESC"
            ))?;
            let rows = stmt
                .query_map(params![user_id], FlockRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;
        rows.into_iter().map(FlockRow::into_flock).collect()
    }

    /// PREPARING → ACTIVE, one-way. Sets the start date and week 1 in a
    /// single statement; starting an already-started flock is rejected.
    pub fn start_flock(&self, id: Uuid, start_date: DateTime<Utc>) -> Result<Flock> {
        let flock = self.get_flock(id)?.ok_or(CoreError::NotFound("flock"))?;
        if flock.status != FlockStatus::Preparing {
            return Err(CoreError::InvalidTransition(format!(
                "flock is already {}",
                flock.status.as_str()
            )));
        }

        self.with_connection(|conn| {
            conn.execute(
                "UPDATE flocks
                 SET status = 'active', start_date = ?2, current_week = 1, updated_at = ?3
                 WHERE id = ?1 AND status = 'preparing'",
                params![id.to_string(), format_ts(start_date), format_ts(Utc::now())],
            )?;
            Ok(())
        })?;

        self.get_flock(id)?.ok_or(CoreError::NotFound("flock"))
    }

    /// Patch-style update for rename and the manual passthrough fields
    /// (start date, cached week, status; GRADUATED lands here).
    pub fn update_flock(&self, id: Uuid, input: UpdateFlockInput) -> Result<Flock> {
        if let Some(name) = &input.name {
            validate_flock_name(name)?;
        }

        let updated = self.with_connection(|conn| {
            let n = conn.execute(
                "UPDATE flocks SET
                     name = COALESCE(?2, name),
                     start_date = COALESCE(?3, start_date),
                     current_week = COALESCE(?4, current_week),
                     status = COALESCE(?5, status),
                     updated_at = ?6
                 WHERE id = ?1",
                params![
                    id.to_string(),
                    input.name,
                    input.start_date.map(format_ts),
                    input.current_week,
                    input.status.map(|s| s.as_str()),
                    format_ts(Utc::now()),
                ],
            )?;
            Ok(n)
        })?;

        if updated == 0 {
            return Err(CoreError::NotFound("flock"));
        }
        self.get_flock(id)?.ok_or(CoreError::NotFound("flock"))
    }

    /// Relational cascade only: chicks, their photos and notes, and the
    /// completion ledger go with the flock. External photo blobs are the
    /// caller's cleanup; see [`Database::photo_urls_for_flock`].
    pub fn delete_flock(&self, id: Uuid) -> Result<bool> {
        let deleted = self.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM flocks WHERE id = ?1", params![id.to_string()])?)
        })?;
        Ok(deleted > 0)
    }

    /// Every stored blob URL under this flock's chicks, for best-effort
    /// external cleanup before or after deletion.
    pub fn photo_urls_for_flock(&self, id: Uuid) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT p.image_url, p.thumbnail_url
                 FROM chick_photos p
                 JOIN chicks c ON c.id = p.chick_id
                 WHERE c.flock_id = ?1",
            )?;
            let mut urls = Vec::new();
            let rows = stmt.query_map(params![id.to_string()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?;
            for row in rows {
                let (image, thumb) = row?;
                urls.push(image);
                urls.push(thumb);
            }
            Ok(urls)
        })
    }
}
