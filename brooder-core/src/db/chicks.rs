//! Chick profiles and their photo/note journal. Plain ownership-scoped
//! CRUD; no scheduling logic lives here.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::{format_ts, parse_opt_ts, parse_ts, parse_uuid, Database};
use crate::error::{CoreError, Result};
use crate::models::{
    Chick, ChickNote, ChickPhoto, ChickProfile, ChickSummary, CreateChickInput,
    CreateChickNoteInput, CreateChickPhotoInput, UpdateChickInput,
};

const CHICK_COLS: &str =
    "id, flock_id, name, breed, hatch_date, description, photo_url, created_at, updated_at";
const PHOTO_COLS: &str = "id, chick_id, image_url, thumbnail_url, taken_at, week_number";
const NOTE_COLS: &str = "id, chick_id, content, week_number, created_at";

struct ChickRow {
    id: String,
    flock_id: String,
    name: String,
    breed: Option<String>,
    hatch_date: Option<String>,
    description: Option<String>,
    photo_url: Option<String>,
    created_at: String,
    updated_at: String,
}

impl ChickRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            flock_id: row.get(1)?,
            name: row.get(2)?,
            breed: row.get(3)?,
            hatch_date: row.get(4)?,
            description: row.get(5)?,
            photo_url: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }

    fn into_chick(self) -> Result<Chick> {
        Ok(Chick {
            id: parse_uuid(&self.id)?,
            flock_id: parse_uuid(&self.flock_id)?,
            name: self.name,
            breed: self.breed,
            hatch_date: parse_opt_ts(self.hatch_date)?,
            description: self.description,
            photo_url: self.photo_url,
            created_at: parse_ts(&self.created_at)?,
            updated_at: parse_ts(&self.updated_at)?,
        })
    }
}

fn photo_from_row(row: &Row<'_>) -> rusqlite::Result<(String, String, String, String, String, Option<i64>)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn into_photo(
    (id, chick_id, image_url, thumbnail_url, taken_at, week_number): (
        String,
        String,
        String,
        String,
        String,
        Option<i64>,
    ),
) -> Result<ChickPhoto> {
    Ok(ChickPhoto {
        id: parse_uuid(&id)?,
        chick_id: parse_uuid(&chick_id)?,
        image_url,
        thumbnail_url,
        taken_at: parse_ts(&taken_at)?,
        week_number,
    })
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<(String, String, String, Option<i64>, String)> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn into_note(
    (id, chick_id, content, week_number, created_at): (String, String, String, Option<i64>, String),
) -> Result<ChickNote> {
    Ok(ChickNote {
        id: parse_uuid(&id)?,
        chick_id: parse_uuid(&chick_id)?,
        content,
        week_number,
        created_at: parse_ts(&created_at)?,
    })
}

impl Database {
    pub fn create_chick(&self, flock_id: Uuid, input: CreateChickInput) -> Result<Chick> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("chick name must not be empty".into()));
        }

        let chick = Chick {
            id: Uuid::new_v4(),
            flock_id,
            name: input.name,
            breed: input.breed,
            hatch_date: input.hatch_date,
            description: input.description,
            photo_url: input.photo_url,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        self.with_connection(|conn| {
            conn.execute(
                &format!("INSERT INTO chicks ({CHICK_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
                params![
                    chick.id.to_string(),
                    chick.flock_id.to_string(),
                    chick.name,
                    chick.breed,
                    chick.hatch_date.map(format_ts),
                    chick.description,
                    chick.photo_url,
                    format_ts(chick.created_at),
                    format_ts(chick.updated_at),
                ],
            )?;
            Ok(())
        })?;

        Ok(chick)
    }

    pub fn get_chick(&self, id: Uuid) -> Result<Option<Chick>> {
        let row = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!("SELECT {CHICK_COLS} FROM chicks WHERE id = ?1"),
                    params![id.to_string()],
                    ChickRow::from_row,
                )
                .optional()?)
        })?;
        row.map(ChickRow::into_chick).transpose()
    }

    /// Full profile: the chick plus its journal, photos and notes newest
    /// first.
    pub fn get_chick_profile(&self, id: Uuid) -> Result<Option<ChickProfile>> {
        let Some(chick) = self.get_chick(id)? else {
            return Ok(None);
        };
        Ok(Some(ChickProfile {
            photos: self.photos_for_chick(chick.id)?,
            notes: self.notes_for_chick(chick.id)?,
            chick,
        }))
    }

    /// Gallery listing: all chicks in a flock (oldest first) with each
    /// chick's most recent photo.
    pub fn chicks_for_flock(&self, flock_id: Uuid) -> Result<Vec<ChickSummary>> {
        let chicks = {
            let rows = self.with_connection(|conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {CHICK_COLS} FROM chicks WHERE flock_id = ?1 ORDER BY created_at ASC"
                ))?;
                let rows = stmt
                    .query_map(params![flock_id.to_string()], ChickRow::from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })?;
            rows.into_iter()
                .map(ChickRow::into_chick)
                .collect::<Result<Vec<_>>>()?
        };

        chicks
            .into_iter()
            .map(|chick| {
                Ok(ChickSummary {
                    latest_photo: self.latest_photo_for_chick(chick.id)?,
                    chick,
                })
            })
            .collect()
    }

    pub fn update_chick(&self, id: Uuid, input: UpdateChickInput) -> Result<Chick> {
        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(CoreError::Validation("chick name must not be empty".into()));
            }
        }

        let updated = self.with_connection(|conn| {
            Ok(conn.execute(
                "UPDATE chicks SET
                     name = COALESCE(?2, name),
                     breed = COALESCE(?3, breed),
                     hatch_date = COALESCE(?4, hatch_date),
                     description = COALESCE(?5, description),
                     photo_url = COALESCE(?6, photo_url),
                     updated_at = ?7
                 WHERE id = ?1",
                params![
                    id.to_string(),
                    input.name,
                    input.breed,
                    input.hatch_date.map(format_ts),
                    input.description,
                    input.photo_url,
                    format_ts(Utc::now()),
                ],
            )?)
        })?;

        if updated == 0 {
            return Err(CoreError::NotFound("chick"));
        }
        self.get_chick(id)?.ok_or(CoreError::NotFound("chick"))
    }

    pub fn delete_chick(&self, id: Uuid) -> Result<bool> {
        let deleted = self.with_connection(|conn| {
            Ok(conn.execute("DELETE FROM chicks WHERE id = ?1", params![id.to_string()])?)
        })?;
        Ok(deleted > 0)
    }


    // Photos

    pub fn create_chick_photo(&self, chick_id: Uuid, input: CreateChickPhotoInput) -> Result<ChickPhoto> {
        let photo = ChickPhoto {
            id: Uuid::new_v4(),
            chick_id,
            image_url: input.image_url,
            thumbnail_url: input.thumbnail_url,
            taken_at: input.taken_at.unwrap_or_else(Utc::now),
            week_number: input.week_number,
        };

        self.with_connection(|conn| {
            conn.execute(
                &format!("INSERT INTO chick_photos ({PHOTO_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
                params![
                    photo.id.to_string(),
                    photo.chick_id.to_string(),
                    photo.image_url,
                    photo.thumbnail_url,
                    format_ts(photo.taken_at),
                    photo.week_number,
                ],
            )?;
            Ok(())
        })?;

        Ok(photo)
    }

    pub fn get_chick_photo(&self, id: Uuid) -> Result<Option<ChickPhoto>> {
        let row = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!("SELECT {PHOTO_COLS} FROM chick_photos WHERE id = ?1"),
                    params![id.to_string()],
                    photo_from_row,
                )
                .optional()?)
        })?;
        row.map(into_photo).transpose()
    }

    pub fn photos_for_chick(&self, chick_id: Uuid) -> Result<Vec<ChickPhoto>> {
        let rows = self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {PHOTO_COLS} FROM chick_photos WHERE chick_id = ?1 ORDER BY taken_at DESC"
            ))?;
            let rows = stmt
                .query_map(params![chick_id.to_string()], photo_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;
        rows.into_iter().map(into_photo).collect()
    }

    fn latest_photo_for_chick(&self, chick_id: Uuid) -> Result<Option<ChickPhoto>> {
        let row = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!(
                        "SELECT {PHOTO_COLS} FROM chick_photos WHERE chick_id = ?1
                         ORDER BY taken_at DESC LIMIT 1"
                    ),
                    params![chick_id.to_string()],
                    photo_from_row,
                )
                .optional()?)
        })?;
        row.map(into_photo).transpose()
    }

    pub fn delete_chick_photo(&self, id: Uuid) -> Result<bool> {
        let deleted = self.with_connection(|conn| {
            Ok(conn.execute(
                "DELETE FROM chick_photos WHERE id = ?1",
                params![id.to_string()],
            )?)
        })?;
        Ok(deleted > 0)
    }

    pub fn count_photos_for_chick(&self, chick_id: Uuid) -> Result<i64> {
        self.with_connection(|conn| {
            Ok(conn.query_row(
                "SELECT COUNT(*) FROM chick_photos WHERE chick_id = ?1",
                params![chick_id.to_string()],
                |row| row.get(0),
            )?)
        })
    }

    // Notes

    pub fn create_chick_note(&self, chick_id: Uuid, input: CreateChickNoteInput) -> Result<ChickNote> {
        if input.content.trim().is_empty() {
            return Err(CoreError::Validation("note content must not be empty".into()));
        }

        let note = ChickNote {
            id: Uuid::new_v4(),
            chick_id,
            content: input.content,
            week_number: input.week_number,
            created_at: Utc::now(),
        };

        self.with_connection(|conn| {
            conn.execute(
                &format!("INSERT INTO chick_notes ({NOTE_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                params![
                    note.id.to_string(),
                    note.chick_id.to_string(),
                    note.content,
                    note.week_number,
                    format_ts(note.created_at),
                ],
            )?;
            Ok(())
        })?;

        Ok(note)
    }

    pub fn get_chick_note(&self, id: Uuid) -> Result<Option<ChickNote>> {
        let row = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!("SELECT {NOTE_COLS} FROM chick_notes WHERE id = ?1"),
                    params![id.to_string()],
                    note_from_row,
                )
                .optional()?)
        })?;
        row.map(into_note).transpose()
    }

    pub fn notes_for_chick(&self, chick_id: Uuid) -> Result<Vec<ChickNote>> {
        let rows = self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {NOTE_COLS} FROM chick_notes WHERE chick_id = ?1 ORDER BY created_at DESC"
            ))?;
            let rows = stmt
                .query_map(params![chick_id.to_string()], note_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;
        rows.into_iter().map(into_note).collect()
    }

    pub fn update_chick_note(&self, id: Uuid, content: &str) -> Result<ChickNote> {
        if content.trim().is_empty() {
            return Err(CoreError::Validation("note content must not be empty".into()));
        }

        let updated = self.with_connection(|conn| {
            Ok(conn.execute(
                "UPDATE chick_notes SET content = ?2 WHERE id = ?1",
                params![id.to_string(), content],
            )?)
        })?;

        if updated == 0 {
            return Err(CoreError::NotFound("note"));
        }
        self.get_chick_note(id)?.ok_or(CoreError::NotFound("note"))
    }

    pub fn delete_chick_note(&self, id: Uuid) -> Result<bool> {
        let deleted = self.with_connection(|conn| {
            Ok(conn.execute(
                "DELETE FROM chick_notes WHERE id = ?1",
                params![id.to_string()],
            )?)
        })?;
        Ok(deleted > 0)
    }
}
