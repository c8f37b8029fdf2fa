//! Read-only catalog queries. The catalog is written only by the seeder.

use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use super::{parse_uuid, Database};
use crate::error::{CoreError, Result};
use crate::models::{Task, TaskCategory, TaskFrequency};

const TASK_COLS: &str =
    "id, title, description, detailed_content, week_number, day_number, frequency, category, sort_order";

pub(crate) struct TaskRow {
    id: String,
    title: String,
    description: String,
    detailed_content: String,
    week_number: i64,
    day_number: Option<i64>,
    frequency: String,
    category: String,
    sort_order: i64,
}

impl TaskRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Self::from_row_at(row, 0)
    }

    /// Read task columns starting at `offset`, for joined queries.
    pub(crate) fn from_row_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(offset)?,
            title: row.get(offset + 1)?,
            description: row.get(offset + 2)?,
            detailed_content: row.get(offset + 3)?,
            week_number: row.get(offset + 4)?,
            day_number: row.get(offset + 5)?,
            frequency: row.get(offset + 6)?,
            category: row.get(offset + 7)?,
            sort_order: row.get(offset + 8)?,
        })
    }

    pub(crate) fn into_task(self) -> Result<Task> {
        Ok(Task {
            id: parse_uuid(&self.id)?,
            frequency: TaskFrequency::from_str(&self.frequency).ok_or_else(|| {
                CoreError::Corrupt(format!("bad task frequency {:?}", self.frequency))
            })?,
            category: TaskCategory::from_str(&self.category).ok_or_else(|| {
                CoreError::Corrupt(format!("bad task category {:?}", self.category))
            })?,
            title: self.title,
            description: self.description,
            detailed_content: self.detailed_content,
            week_number: self.week_number,
            day_number: self.day_number,
            sort_order: self.sort_order,
        })
    }
}

impl Database {
    pub fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        let row = self.with_connection(|conn| {
            Ok(conn
                .query_row(
                    &format!("SELECT {TASK_COLS} FROM tasks WHERE id = ?1"),
                    params![id.to_string()],
                    TaskRow::from_row,
                )
                .optional()?)
        })?;
        row.map(TaskRow::into_task).transpose()
    }

    /// All catalog entries for one week, day-pinned tasks in day order
    /// first (NULL day last), then by sort order. An unknown week is an
    /// empty vec, not an error.
    pub fn tasks_for_week(&self, week_number: i64) -> Result<Vec<Task>> {
        self.collect_tasks(
            &format!(
                "SELECT {TASK_COLS} FROM tasks WHERE week_number = ?1
                 ORDER BY day_number IS NULL, day_number ASC, sort_order ASC"
            ),
            params![week_number],
        )
    }

    /// Catalog entries relevant to one absolute day: tasks pinned to that
    /// day plus the week's DAILY tasks.
    pub fn tasks_for_week_and_day(&self, week_number: i64, day_number: i64) -> Result<Vec<Task>> {
        self.collect_tasks(
            &format!(
                "SELECT {TASK_COLS} FROM tasks
                 WHERE week_number = ?1
                   AND (day_number = ?2 OR (day_number IS NULL AND frequency = 'daily'))
                 ORDER BY sort_order ASC"
            ),
            params![week_number, day_number],
        )
    }

    pub fn tasks_for_category(&self, category: TaskCategory) -> Result<Vec<Task>> {
        self.collect_tasks(
            &format!(
                "SELECT {TASK_COLS} FROM tasks WHERE category = ?1
                 ORDER BY week_number ASC, day_number IS NULL, day_number ASC, sort_order ASC"
            ),
            params![category.as_str()],
        )
    }

    pub fn all_tasks(&self) -> Result<Vec<Task>> {
        self.collect_tasks(
            &format!(
                "SELECT {TASK_COLS} FROM tasks
                 ORDER BY week_number ASC, day_number IS NULL, day_number ASC, sort_order ASC"
            ),
            params![],
        )
    }

    pub fn task_count(&self) -> Result<i64> {
        self.with_connection(|conn| {
            Ok(conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?)
        })
    }

    fn collect_tasks(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Task>> {
        let rows = self.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt
                .query_map(params, TaskRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        })?;
        rows.into_iter().map(TaskRow::into_task).collect()
    }
}
