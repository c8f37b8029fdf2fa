//! The completion ledger: per-(flock, task, day) complete/undo records.
//!
//! `complete` is a single upsert against the unique (flock_id, task_id,
//! day_date) index, so concurrent completes for the same key converge on
//! one row. Undo flips the same row; rows are never hard-deleted.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::tasks::TaskRow;
use super::{format_day, format_ts, parse_day, parse_opt_ts, parse_ts, parse_uuid, Database};
use crate::error::{CoreError, Result};
use crate::models::{CompletionStats, CompletionWithTask, TaskCompletion};

const COMPLETION_COLS: &str = "id, flock_id, task_id, day_date, completed_at, undone_at, notes";

struct CompletionRow {
    id: String,
    flock_id: String,
    task_id: String,
    day_date: String,
    completed_at: String,
    undone_at: Option<String>,
    notes: Option<String>,
}

impl CompletionRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            flock_id: row.get(1)?,
            task_id: row.get(2)?,
            day_date: row.get(3)?,
            completed_at: row.get(4)?,
            undone_at: row.get(5)?,
            notes: row.get(6)?,
        })
    }

    fn into_completion(self) -> Result<TaskCompletion> {
        Ok(TaskCompletion {
            id: parse_uuid(&self.id)?,
            flock_id: parse_uuid(&self.flock_id)?,
            task_id: parse_uuid(&self.task_id)?,
            day_date: parse_day(&self.day_date)?,
            completed_at: parse_ts(&self.completed_at)?,
            undone_at: parse_opt_ts(self.undone_at)?,
            notes: self.notes,
        })
    }
}

impl Database {
    /// Mark a task complete for a day. Creates the ledger row on first
    /// completion; re-completion (including after an undo) refreshes
    /// `completed_at` and clears `undone_at`. New notes replace the saved
    /// ones; completing without notes keeps them.
    pub fn complete_task(
        &self,
        flock_id: Uuid,
        task_id: Uuid,
        day_date: NaiveDate,
        notes: Option<&str>,
    ) -> Result<TaskCompletion> {
        self.with_connection(|conn| {
            conn.execute(
                "INSERT INTO task_completions (id, flock_id, task_id, day_date, completed_at, undone_at, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6)
                 ON CONFLICT (flock_id, task_id, day_date) DO UPDATE SET
                     completed_at = excluded.completed_at,
                     undone_at = NULL,
                     notes = COALESCE(excluded.notes, notes)",
                params![
                    Uuid::new_v4().to_string(),
                    flock_id.to_string(),
                    task_id.to_string(),
                    format_day(day_date),
                    format_ts(Utc::now()),
                    notes,
                ],
            )?;
            Ok(())
        })?;

        self.get_completion(flock_id, task_id, day_date)?
            .ok_or(CoreError::NotFound("completion"))
    }

    /// Undo a completion. Requires an existing ledger row for the key;
    /// undoing something never completed is the caller's logic error.
    pub fn undo_completion(
        &self,
        flock_id: Uuid,
        task_id: Uuid,
        day_date: NaiveDate,
    ) -> Result<TaskCompletion> {
        let updated = self.with_connection(|conn| {
            Ok(conn.execute(
                "UPDATE task_completions SET undone_at = ?4
                 WHERE flock_id = ?1 AND task_id = ?2 AND day_date = ?3",
                params![
                    flock_id.to_string(),
                    task_id.to_string(),
                    format_day(day_date),
                    format_ts(Utc::now()),
                ],
            )?)
        })?;

        if updated == 0 {
            return Err(CoreError::NotFound("completion"));
        }
        self.get_completion(flock_id, task_id, day_date)?
            .ok_or(CoreError::NotFound("completion"))
    }

    pub fn get_completion(
        &self,
        flock_id: Uuid,
        task_id: Uuid,
        day_date: NaiveDate,
    ) -> Result<Option<TaskCompletion>> {
        let row = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!(
                        "SELECT {COMPLETION_COLS} FROM task_completions
                         WHERE flock_id = ?1 AND task_id = ?2 AND day_date = ?3"
                    ),
                    params![
                        flock_id.to_string(),
                        task_id.to_string(),
                        format_day(day_date)
                    ],
                    CompletionRow::from_row,
                )
                .optional()?)
        })?;
        row.map(CompletionRow::into_completion).transpose()
    }

    /// True iff a ledger row exists for the key and has not been undone.
    pub fn is_task_completed(
        &self,
        flock_id: Uuid,
        task_id: Uuid,
        day_date: NaiveDate,
    ) -> Result<bool> {
        Ok(self
            .get_completion(flock_id, task_id, day_date)?
            .is_some_and(|c| c.is_completed()))
    }

    /// All non-undone completions for a flock on one day, with task
    /// metadata attached.
    pub fn completions_for_day(
        &self,
        flock_id: Uuid,
        day_date: NaiveDate,
    ) -> Result<Vec<CompletionWithTask>> {
        self.collect_completions_with_tasks(
            "WHERE c.flock_id = ?1 AND c.day_date = ?2 AND c.undone_at IS NULL",
            params![flock_id.to_string(), format_day(day_date)],
        )
    }

    /// Full non-undone completion history for a flock, newest first.
    pub fn completions_for_flock(&self, flock_id: Uuid) -> Result<Vec<CompletionWithTask>> {
        self.collect_completions_with_tasks(
            "WHERE c.flock_id = ?1 AND c.undone_at IS NULL ORDER BY c.completed_at DESC",
            params![flock_id.to_string()],
        )
    }

    /// Total and per-category counts of non-undone completions.
    pub fn completion_stats(&self, flock_id: Uuid) -> Result<CompletionStats> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(
                "SELECT t.category, COUNT(*)
                 FROM task_completions c
                 JOIN tasks t ON t.id = c.task_id
                 WHERE c.flock_id = ?1 AND c.undone_at IS NULL
                 GROUP BY t.category",
            )?;
            let rows = stmt.query_map(params![flock_id.to_string()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?;

            let mut by_category = BTreeMap::new();
            let mut total_completed = 0;
            for row in rows {
                let (category, count) = row?;
                total_completed += count;
                by_category.insert(category, count);
            }
            Ok(CompletionStats {
                total_completed,
                by_category,
            })
        })
    }

    fn collect_completions_with_tasks(
        &self,
        where_clause: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<CompletionWithTask>> {
        let sql = format!(
            "SELECT c.id, c.flock_id, c.task_id, c.day_date, c.completed_at, c.undone_at, c.notes,
                    t.id, t.title, t.description, t.detailed_content, t.week_number, t.day_number,
                    t.frequency, t.category, t.sort_order
             FROM task_completions c
             JOIN tasks t ON t.id = c.task_id
             {where_clause}"
        );
        let rows = self.with_connection(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params, |row| {
                    Ok((CompletionRow::from_row(row)?, TaskRow::from_row_at(row, 7)?))
                })?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;

        rows.into_iter()
            .map(|(completion, task)| {
                Ok(CompletionWithTask {
                    completion: completion.into_completion()?,
                    task: task.into_task()?,
                })
            })
            .collect()
    }
}
