//! Task repository — user-scoped CRUD over the `tasks` table.

use chrono::Utc;

use nest_core::entities::Task;
use nest_core::enums::{Priority, TaskStatus};
use nest_core::ids::PREFIX_TASK;

use crate::error::StoreError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::store::NestStore;

const SELECT_COLS: &str = "id, user_id, title, priority, status, created_at, updated_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, StoreError> {
    Ok(Task {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        priority: parse_enum(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl NestStore {
    /// Insert a new task. Status is always `pending`; timestamps are now.
    pub async fn create_task(
        &self,
        user_id: &str,
        title: &str,
        priority: Priority,
    ) -> Result<Task, StoreError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TASK).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    title,
                    priority.as_str(),
                    TaskStatus::Pending.as_str(),
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Task {
            id,
            user_id: user_id.to_string(),
            title: title.to_string(),
            priority,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch one task. A row owned by another user reads as missing.
    pub async fn get_task(&self, user_id: &str, task_id: &str) -> Result<Task, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1 AND user_id = ?2"),
                [task_id, user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_task(&row)
    }

    /// All tasks owned by the user, newest first. This ordering is the
    /// definitive contract for callers.
    pub async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE user_id = ?1
                     ORDER BY created_at DESC"
                ),
                [user_id],
            )
            .await?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Set a task's status and refresh its update timestamp.
    ///
    /// # Errors
    ///
    /// `StoreError::NoResult` if the row is missing or owned by another user.
    pub async fn update_task_status(
        &self,
        user_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Task, StoreError> {
        let now = Utc::now();
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
                libsql::params![status.as_str(), now.to_rfc3339(), task_id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NoResult);
        }
        self.get_task(user_id, task_id).await
    }

    /// Set a task's priority and refresh its update timestamp.
    ///
    /// # Errors
    ///
    /// `StoreError::NoResult` if the row is missing or owned by another user.
    pub async fn update_task_priority(
        &self,
        user_id: &str,
        task_id: &str,
        priority: Priority,
    ) -> Result<Task, StoreError> {
        let now = Utc::now();
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tasks SET priority = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
                libsql::params![priority.as_str(), now.to_rfc3339(), task_id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NoResult);
        }
        self.get_task(user_id, task_id).await
    }

    /// Delete a task. Subtask removal cascades at the schema level.
    ///
    /// # Errors
    ///
    /// `StoreError::NoResult` if the row is missing or owned by another user.
    pub async fn delete_task(&self, user_id: &str, task_id: &str) -> Result<(), StoreError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2",
                [task_id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NoResult);
        }
        Ok(())
    }
}
