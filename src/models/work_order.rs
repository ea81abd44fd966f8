use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkOrderStatus {
    Created,
    Assigned,
    InProgress,
    Paused,
    Completed,
    Cancelled,
}

impl WorkOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Created => "created",
            WorkOrderStatus::Assigned => "assigned",
            WorkOrderStatus::InProgress => "in-progress",
            WorkOrderStatus::Paused => "paused",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "created" => Some(WorkOrderStatus::Created),
            "assigned" => Some(WorkOrderStatus::Assigned),
            "in-progress" => Some(WorkOrderStatus::InProgress),
            "paused" => Some(WorkOrderStatus::Paused),
            "completed" => Some(WorkOrderStatus::Completed),
            "cancelled" => Some(WorkOrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        WorkOrderStatus::from_db_str(&code.to_lowercase())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkOrder {
    pub id: i64,
    pub title: String,
    pub status: WorkOrderStatus,
}

impl WorkOrder {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            status: WorkOrderStatus::Created,
        }
    }
}

/// A temporal assignment fact: from `effective_from` on, the worker's hours
/// belong to `work_order_id` (None records an unassignment).
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub id: i64,
    pub worker_id: i64,
    pub work_order_id: Option<i64>,
    pub effective_from: NaiveDateTime,
}
