//! Raw request payloads and their validation.
//!
//! Validation runs before the lifecycle service is reached and reports
//! every failing field at once, not first-error-wins.

use crate::auth::domain::UserId;
use crate::task::domain::{TaskDescription, TaskPriority, TaskStatus, TaskTitle};
use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The offending request field.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_owned(),
            message: message.into(),
        }
    }
}

/// Raw body of `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskPayload {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Due date, ISO-8601.
    #[serde(rename = "dueDate")]
    pub due_date: String,
    /// Priority; defaults to medium when absent.
    pub priority: Option<String>,
    /// Initial status; defaults to todo when absent.
    pub status: Option<String>,
    /// Assignee; defaults to the creator when absent.
    #[serde(rename = "assignedTo")]
    pub assigned_to: Option<UserId>,
}

impl CreateTaskPayload {
    /// Validates the payload into a service request.
    ///
    /// # Errors
    ///
    /// Returns the full list of field errors when any field is invalid.
    pub fn validate(&self) -> Result<CreateTaskRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = collect(TaskTitle::new(self.title.clone()), "title", &mut errors);
        let description = collect(
            TaskDescription::new(self.description.clone()),
            "description",
            &mut errors,
        );
        let due_date = collect(parse_due_date(&self.due_date), "dueDate", &mut errors);
        let priority = self
            .priority
            .as_deref()
            .map(|raw| collect(TaskPriority::try_from(raw), "priority", &mut errors));
        let status = self
            .status
            .as_deref()
            .map(|raw| collect(TaskStatus::try_from(raw), "status", &mut errors));

        let (Some(valid_title), Some(valid_description), Some(valid_due)) =
            (title, description, due_date)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut request = CreateTaskRequest::new(valid_title, valid_description, valid_due);
        if let Some(Some(valid_priority)) = priority {
            request = request.with_priority(valid_priority);
        }
        if let Some(Some(valid_status)) = status {
            request = request.with_status(valid_status);
        }
        if let Some(assignee) = self.assigned_to {
            request = request.with_assigned_to(assignee);
        }
        Ok(request)
    }
}

/// Raw body of `PUT /tasks/:id`. Every field is optional; an absent
/// field retains the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskPayload {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement due date, ISO-8601.
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    /// Replacement priority.
    pub priority: Option<String>,
    /// Replacement status.
    pub status: Option<String>,
    /// Replacement assignee.
    #[serde(rename = "assignedTo")]
    pub assigned_to: Option<UserId>,
}

impl UpdateTaskPayload {
    /// Validates the payload into a partial-update request.
    ///
    /// # Errors
    ///
    /// Returns the full list of field errors when any supplied field is
    /// invalid.
    pub fn validate(&self) -> Result<UpdateTaskRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = self
            .title
            .as_deref()
            .map(|raw| collect(TaskTitle::new(raw), "title", &mut errors));
        let description = self
            .description
            .as_deref()
            .map(|raw| collect(TaskDescription::new(raw), "description", &mut errors));
        let due_date = self
            .due_date
            .as_deref()
            .map(|raw| collect(parse_due_date(raw), "dueDate", &mut errors));
        let priority = self
            .priority
            .as_deref()
            .map(|raw| collect(TaskPriority::try_from(raw), "priority", &mut errors));
        let status = self
            .status
            .as_deref()
            .map(|raw| collect(TaskStatus::try_from(raw), "status", &mut errors));

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut request = UpdateTaskRequest::new();
        if let Some(Some(valid_title)) = title {
            request = request.with_title(valid_title);
        }
        if let Some(Some(valid_description)) = description {
            request = request.with_description(valid_description);
        }
        if let Some(Some(valid_due)) = due_date {
            request = request.with_due_date(valid_due);
        }
        if let Some(Some(valid_priority)) = priority {
            request = request.with_priority(valid_priority);
        }
        if let Some(Some(valid_status)) = status {
            request = request.with_status(valid_status);
        }
        if let Some(assignee) = self.assigned_to {
            request = request.with_assigned_to(assignee);
        }
        Ok(request)
    }
}

/// Parses an ISO-8601 due date.
fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, InvalidDate> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| InvalidDate)
}

/// Marker error for unparseable dates; the message lives in the field
/// error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date format")]
struct InvalidDate;

/// Records a failure against `field` and flattens the result to an
/// option.
fn collect<T, E>(result: Result<T, E>, field: &str, errors: &mut Vec<FieldError>) -> Option<T>
where
    E: std::fmt::Display,
{
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(FieldError::new(field, err.to_string()));
            None
        }
    }
}
