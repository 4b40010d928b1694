//! The task/subtask manager: in-memory mirror plus store orchestration.

use std::collections::{HashMap, HashSet};

use nest_core::entities::{Subtask, Task};
use nest_core::enums::{Priority, TaskStatus};
use nest_core::identity::UserIdentity;
use nest_db::store::NestStore;
use nest_remote::RemoteClient;

use crate::error::{ManagerError, not_found};

/// Owns the in-memory mirror of the user's tasks and subtasks and enforces
/// the lifecycle rules: tasks start `pending`, transitions are unrestricted,
/// titles are never empty, and subtasks never outlive their parent.
pub struct TaskManager {
    store: NestStore,
    remote: RemoteClient,
    tasks: Vec<Task>,
    subtasks: HashMap<String, Vec<Subtask>>,
    suggestions: HashMap<String, Vec<String>>,
    suggestions_in_flight: HashSet<String>,
}

impl TaskManager {
    /// Create a manager over an opened store and remote client.
    #[must_use]
    pub fn new(store: NestStore, remote: RemoteClient) -> Self {
        Self {
            store,
            remote,
            tasks: Vec::new(),
            subtasks: HashMap::new(),
            suggestions: HashMap::new(),
            suggestions_in_flight: HashSet::new(),
        }
    }

    /// Access the underlying store (profile reads/writes go through here).
    #[must_use]
    pub const fn store(&self) -> &NestStore {
        &self.store
    }

    // ── Tasks ──────────────────────────────────────────────────────

    /// Create a task with status `pending` and the given priority.
    ///
    /// After the insert commits, embedding generation is dispatched as a
    /// detached job: at-most-once, failure logged and swallowed, never
    /// awaited here. A task whose embedding never materializes simply stays
    /// out of smart-search results.
    ///
    /// # Errors
    ///
    /// `ManagerError::Validation` for an empty or whitespace-only title;
    /// nothing is persisted in that case.
    pub async fn create_task(
        &mut self,
        user: &UserIdentity,
        title: &str,
        priority: Priority,
    ) -> Result<Task, ManagerError> {
        if title.trim().is_empty() {
            return Err(ManagerError::Validation(
                "task title must not be empty".into(),
            ));
        }

        let task = self.store.create_task(&user.user_id, title, priority).await?;

        drop(
            self.remote
                .dispatch_embedding(task.id.clone(), task.title.clone()),
        );

        self.refresh_tasks(user).await?;
        Ok(task)
    }

    /// Insert a copy of an existing task: same title and priority, status
    /// forced back to `pending`, fresh identifier and timestamps. Subtasks
    /// are not duplicated.
    ///
    /// # Errors
    ///
    /// `ManagerError::NotFound` if the source task is missing or foreign.
    pub async fn duplicate_task(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
    ) -> Result<Task, ManagerError> {
        let source = self
            .store
            .get_task(&user.user_id, task_id)
            .await
            .map_err(not_found("task", task_id))?;

        self.create_task(user, &source.title, source.priority).await
    }

    /// Set a task's status and refresh its update timestamp.
    ///
    /// Any status is reachable from any other; `done` can be reopened.
    ///
    /// # Errors
    ///
    /// `ManagerError::NotFound` if the task is missing or foreign; the
    /// mirror is left unchanged.
    pub async fn update_status(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<Task, ManagerError> {
        let task = self
            .store
            .update_task_status(&user.user_id, task_id, status)
            .await
            .map_err(not_found("task", task_id))?;
        self.refresh_tasks(user).await?;
        Ok(task)
    }

    /// Set a task's priority and refresh its update timestamp.
    ///
    /// # Errors
    ///
    /// `ManagerError::NotFound` if the task is missing or foreign; the
    /// mirror is left unchanged.
    pub async fn update_priority(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
        priority: Priority,
    ) -> Result<Task, ManagerError> {
        let task = self
            .store
            .update_task_priority(&user.user_id, task_id, priority)
            .await
            .map_err(not_found("task", task_id))?;
        self.refresh_tasks(user).await?;
        Ok(task)
    }

    /// Delete a task. Subtask removal cascades at the store level; the
    /// manager only drops its own transient state for the task.
    ///
    /// # Errors
    ///
    /// `ManagerError::NotFound` if the task is missing or foreign.
    pub async fn delete_task(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
    ) -> Result<(), ManagerError> {
        self.store
            .delete_task(&user.user_id, task_id)
            .await
            .map_err(not_found("task", task_id))?;

        self.subtasks.remove(task_id);
        self.suggestions.remove(task_id);
        self.refresh_tasks(user).await?;
        Ok(())
    }

    /// All tasks owned by the user, newest first — the definitive ordering
    /// contract for callers.
    pub async fn list_tasks(&mut self, user: &UserIdentity) -> Result<&[Task], ManagerError> {
        self.refresh_tasks(user).await?;
        Ok(&self.tasks)
    }

    // ── Subtasks ───────────────────────────────────────────────────

    /// One task's subtasks, oldest first, preserving the order in which they
    /// were added. A deleted or unknown parent yields an empty list.
    pub async fn list_subtasks(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
    ) -> Result<&[Subtask], ManagerError> {
        self.refresh_subtasks(user, task_id).await?;
        Ok(self.subtasks_of(task_id))
    }

    /// Persist a subtask with status `pending` under an existing task.
    ///
    /// On success, every matching candidate is removed from the task's
    /// suggestion set. Saving the same text twice is allowed and produces two
    /// distinct rows.
    ///
    /// # Errors
    ///
    /// `ManagerError::Validation` for a blank title;
    /// `ManagerError::NotFound` if the parent is missing or foreign.
    pub async fn save_subtask(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
        title: &str,
    ) -> Result<Subtask, ManagerError> {
        if title.trim().is_empty() {
            return Err(ManagerError::Validation(
                "subtask title must not be empty".into(),
            ));
        }

        let subtask = self
            .store
            .create_subtask(&user.user_id, task_id, title)
            .await
            .map_err(not_found("task", task_id))?;

        if let Some(candidates) = self.suggestions.get_mut(task_id) {
            candidates.retain(|candidate| candidate != title);
        }

        self.refresh_subtasks(user, task_id).await?;
        Ok(subtask)
    }

    /// Set a subtask's status.
    ///
    /// # Errors
    ///
    /// `ManagerError::NotFound` if the subtask is missing, under a different
    /// task, or foreign.
    pub async fn update_subtask_status(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
        subtask_id: &str,
        status: TaskStatus,
    ) -> Result<Subtask, ManagerError> {
        let subtask = self
            .store
            .update_subtask_status(&user.user_id, task_id, subtask_id, status)
            .await
            .map_err(not_found("subtask", subtask_id))?;
        self.refresh_subtasks(user, task_id).await?;
        Ok(subtask)
    }

    /// Delete one subtask.
    ///
    /// # Errors
    ///
    /// `ManagerError::NotFound` if the subtask is missing, under a different
    /// task, or foreign.
    pub async fn delete_subtask(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
        subtask_id: &str,
    ) -> Result<(), ManagerError> {
        self.store
            .delete_subtask(&user.user_id, task_id, subtask_id)
            .await
            .map_err(not_found("subtask", subtask_id))?;
        self.refresh_subtasks(user, task_id).await?;
        Ok(())
    }

    // ── Suggestions ────────────────────────────────────────────────

    /// Ask the suggestion generator for candidate subtask titles.
    ///
    /// Candidates replace any previous set for the task and keep the
    /// generator's order — no local re-ranking. At most one generation may be
    /// pending per task; a second request while one is outstanding fails with
    /// `SuggestionInFlight`. The guard clears when the call completes either
    /// way.
    ///
    /// # Errors
    ///
    /// `ManagerError::NotFound` if the task is missing or foreign;
    /// `ManagerError::SuggestionInFlight` while a generation is pending;
    /// `ManagerError::Remote` if the generator call fails.
    pub async fn generate_suggestions(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
    ) -> Result<&[String], ManagerError> {
        let task = self
            .store
            .get_task(&user.user_id, task_id)
            .await
            .map_err(not_found("task", task_id))?;

        if !self.suggestions_in_flight.insert(task_id.to_string()) {
            return Err(ManagerError::SuggestionInFlight {
                task_id: task_id.to_string(),
            });
        }

        let result = self.remote.suggest_subtasks(&task.title).await;
        self.suggestions_in_flight.remove(task_id);

        let candidates = result?;
        self.suggestions.insert(task_id.to_string(), candidates);
        Ok(self.suggestions_for(task_id))
    }

    // ── Mirror accessors ───────────────────────────────────────────

    /// The task mirror as of the last refresh.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The subtask mirror for one task as of its last refresh.
    #[must_use]
    pub fn subtasks_of(&self, task_id: &str) -> &[Subtask] {
        self.subtasks.get(task_id).map_or(&[], Vec::as_slice)
    }

    /// Current candidate subtask titles for a task.
    #[must_use]
    pub fn suggestions_for(&self, task_id: &str) -> &[String] {
        self.suggestions.get(task_id).map_or(&[], Vec::as_slice)
    }

    /// Whether a suggestion generation is pending for a task.
    #[must_use]
    pub fn suggestion_in_flight(&self, task_id: &str) -> bool {
        self.suggestions_in_flight.contains(task_id)
    }

    // ── Internal refresh ───────────────────────────────────────────

    async fn refresh_tasks(&mut self, user: &UserIdentity) -> Result<(), ManagerError> {
        self.tasks = self.store.list_tasks(&user.user_id).await?;
        Ok(())
    }

    async fn refresh_subtasks(
        &mut self,
        user: &UserIdentity,
        task_id: &str,
    ) -> Result<(), ManagerError> {
        let subtasks = self.store.list_subtasks(&user.user_id, task_id).await?;
        self.subtasks.insert(task_id.to_string(), subtasks);
        Ok(())
    }
}
