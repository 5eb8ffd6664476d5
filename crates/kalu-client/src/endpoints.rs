//! Typed wrappers over the dashboard REST routes.
//!
//! Every method goes through the same translate-request / translate-response
//! path as the raw `get`/`post`/`put`/`delete` calls.

use reqwest::Method;
use serde_json::json;

use crate::client::DashboardClient;
use crate::error::ClientError;
use kalu_types::{
    Activity, ActivityFilter, ApiInfo, CalendarEvent, CalendarFilter, CompanyStats, Document,
    DocumentFilter, HealthStatus, Memory, MemoryFilter, NewActivity, NewCalendarEvent,
    NewDocument, NewMemory, NewTask, OverviewStats, Task, TaskFilter, TaskResult, TaskUpdate,
    User,
};

impl DashboardClient {
    // ==================== Health ====================

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.fetch("/health", &()).await
    }

    /// Service banner served at the API root.
    pub async fn api_info(&self) -> Result<ApiInfo, ClientError> {
        self.fetch("/", &()).await
    }

    // ==================== Users ====================

    /// Account behind the current token. Fails with `401` once the token
    /// has expired, so it doubles as a session check.
    pub async fn current_user(&self) -> Result<User, ClientError> {
        self.fetch("/users/me", &()).await
    }

    // ==================== Tasks ====================

    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ClientError> {
        self.fetch("/tasks/", filter).await
    }

    /// Pending and in-progress tasks assigned to the agent. No auth required.
    pub async fn pending_tasks(&self) -> Result<Vec<Task>, ClientError> {
        self.fetch("/tasks/pending", &()).await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ClientError> {
        self.fetch(&format!("/tasks/{}", id), &()).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ClientError> {
        self.submit(Method::POST, "/tasks/", task).await
    }

    pub async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<Task, ClientError> {
        self.submit(Method::PUT, &format!("/tasks/{}", id), update).await
    }

    pub async fn submit_task_result(
        &self,
        id: i64,
        result: &TaskResult,
    ) -> Result<Task, ClientError> {
        self.submit(Method::POST, &format!("/tasks/{}/result", id), result).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
        self.remove(&format!("/tasks/{}", id)).await
    }

    // ==================== Documents ====================

    pub async fn list_documents(
        &self,
        filter: &DocumentFilter,
    ) -> Result<Vec<Document>, ClientError> {
        self.fetch("/documents/", filter).await
    }

    pub async fn get_document(&self, id: i64) -> Result<Document, ClientError> {
        self.fetch(&format!("/documents/{}", id), &()).await
    }

    pub async fn create_document(&self, document: &NewDocument) -> Result<Document, ClientError> {
        self.submit(Method::POST, "/documents/", document).await
    }

    pub async fn delete_document(&self, id: i64) -> Result<(), ClientError> {
        self.remove(&format!("/documents/{}", id)).await
    }

    // ==================== Memories ====================

    pub async fn list_memories(&self, filter: &MemoryFilter) -> Result<Vec<Memory>, ClientError> {
        self.fetch("/memories/", filter).await
    }

    /// Substring search over title, content and tags.
    ///
    /// The search text is free text and is sent verbatim; it never goes
    /// through value translation.
    pub async fn search_memories(&self, text: &str) -> Result<Vec<Memory>, ClientError> {
        self.fetch_pairs("/memories/search", &[("q".to_string(), text.to_string())]).await
    }

    pub async fn create_memory(&self, memory: &NewMemory) -> Result<Memory, ClientError> {
        self.submit(Method::POST, "/memories/", memory).await
    }

    // ==================== Activities ====================

    pub async fn list_activities(
        &self,
        filter: &ActivityFilter,
    ) -> Result<Vec<Activity>, ClientError> {
        self.fetch("/activities/", filter).await
    }

    /// Latest entries for widgets. No auth required.
    pub async fn recent_activities(&self, limit: u32) -> Result<Vec<Activity>, ClientError> {
        self.fetch("/activities/recent", &json!({ "limit": limit })).await
    }

    pub async fn create_activity(&self, activity: &NewActivity) -> Result<Activity, ClientError> {
        self.submit(Method::POST, "/activities/", activity).await
    }

    // ==================== Calendar ====================

    pub async fn list_calendar_events(
        &self,
        filter: &CalendarFilter,
    ) -> Result<Vec<CalendarEvent>, ClientError> {
        self.fetch("/calendar/", filter).await
    }

    pub async fn create_calendar_event(
        &self,
        event: &NewCalendarEvent,
    ) -> Result<CalendarEvent, ClientError> {
        self.submit(Method::POST, "/calendar/", event).await
    }

    pub async fn delete_calendar_event(&self, id: i64) -> Result<(), ClientError> {
        self.remove(&format!("/calendar/{}", id)).await
    }

    // ==================== Stats ====================

    pub async fn overview_stats(&self) -> Result<OverviewStats, ClientError> {
        self.fetch("/stats/overview", &()).await
    }

    pub async fn stats_by_company(&self) -> Result<Vec<CompanyStats>, ClientError> {
        self.fetch("/stats/by-empresa", &()).await
    }
}
