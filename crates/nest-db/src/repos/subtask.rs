//! Subtask repository — CRUD scoped to one parent task's children.

use chrono::Utc;

use nest_core::entities::Subtask;
use nest_core::enums::TaskStatus;
use nest_core::ids::PREFIX_SUBTASK;

use crate::error::StoreError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::store::NestStore;

const SELECT_COLS: &str = "id, task_id, user_id, title, status, created_at";

fn row_to_subtask(row: &libsql::Row) -> Result<Subtask, StoreError> {
    Ok(Subtask {
        id: row.get(0)?,
        task_id: row.get(1)?,
        user_id: row.get(2)?,
        title: row.get(3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl NestStore {
    /// Insert a new subtask under an existing task. Status is always
    /// `pending`.
    ///
    /// The parent must exist and belong to the caller at creation time.
    /// Saving the same title twice produces two distinct rows; content is
    /// deliberately not deduplicated.
    ///
    /// # Errors
    ///
    /// `StoreError::NoResult` if the parent task is missing or owned by
    /// another user.
    pub async fn create_subtask(
        &self,
        user_id: &str,
        task_id: &str,
        title: &str,
    ) -> Result<Subtask, StoreError> {
        // Parent check doubles as the ownership check.
        self.get_task(user_id, task_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SUBTASK).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO subtasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
                ),
                libsql::params![
                    id.as_str(),
                    task_id,
                    user_id,
                    title,
                    TaskStatus::Pending.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(Subtask {
            id,
            task_id: task_id.to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            status: TaskStatus::Pending,
            created_at: now,
        })
    }

    /// One task's subtasks, oldest first: the opposite direction from task
    /// listing, preserving the sequence in which subtasks were added.
    pub async fn list_subtasks(
        &self,
        user_id: &str,
        task_id: &str,
    ) -> Result<Vec<Subtask>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM subtasks
                     WHERE task_id = ?1 AND user_id = ?2
                     ORDER BY created_at"
                ),
                [task_id, user_id],
            )
            .await?;

        let mut subtasks = Vec::new();
        while let Some(row) = rows.next().await? {
            subtasks.push(row_to_subtask(&row)?);
        }
        Ok(subtasks)
    }

    /// Fetch one subtask within a task.
    pub async fn get_subtask(
        &self,
        user_id: &str,
        task_id: &str,
        subtask_id: &str,
    ) -> Result<Subtask, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM subtasks
                     WHERE id = ?1 AND task_id = ?2 AND user_id = ?3"
                ),
                [subtask_id, task_id, user_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_subtask(&row)
    }

    /// Set a subtask's status.
    ///
    /// # Errors
    ///
    /// `StoreError::NoResult` if the row is missing, under a different task,
    /// or owned by another user.
    pub async fn update_subtask_status(
        &self,
        user_id: &str,
        task_id: &str,
        subtask_id: &str,
        status: TaskStatus,
    ) -> Result<Subtask, StoreError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE subtasks SET status = ?1
                 WHERE id = ?2 AND task_id = ?3 AND user_id = ?4",
                libsql::params![status.as_str(), subtask_id, task_id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NoResult);
        }
        self.get_subtask(user_id, task_id, subtask_id).await
    }

    /// Delete one subtask.
    ///
    /// # Errors
    ///
    /// `StoreError::NoResult` if the row is missing, under a different task,
    /// or owned by another user.
    pub async fn delete_subtask(
        &self,
        user_id: &str,
        task_id: &str,
        subtask_id: &str,
    ) -> Result<(), StoreError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM subtasks WHERE id = ?1 AND task_id = ?2 AND user_id = ?3",
                [subtask_id, task_id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(StoreError::NoResult);
        }
        Ok(())
    }
}
