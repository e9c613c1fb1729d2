use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkType {
    Morning,
    Evening,
}

impl WalkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkType::Morning => "morning",
            WalkType::Evening => "evening",
        }
    }
}

impl std::str::FromStr for WalkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(WalkType::Morning),
            "evening" => Ok(WalkType::Evening),
            other => Err(format!("unknown walk type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(BookingStatus::Scheduled),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

impl std::str::FromStr for ApprovalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApprovalStatus::Pending),
            "approved" => Ok(ApprovalStatus::Approved),
            "rejected" => Ok(ApprovalStatus::Rejected),
            other => Err(format!("unknown approval status: {}", other)),
        }
    }
}

/// A walk reservation. At most one `scheduled` booking may exist per
/// (dog_id, date, walk_type); cancelled and completed rows do not hold
/// the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub dog_id: String,
    pub date: String,           // YYYY-MM-DD
    pub walk_type: WalkType,
    pub scheduled_time: String, // HH:MM
    pub status: BookingStatus,
    pub requires_approval: bool,
    pub approval_status: ApprovalStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl Booking {
    pub fn new(
        dog_id: String,
        date: String,
        walk_type: WalkType,
        scheduled_time: String,
        requires_approval: bool,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            dog_id,
            date,
            walk_type,
            scheduled_time,
            status: BookingStatus::Scheduled,
            requires_approval,
            approval_status: if requires_approval {
                ApprovalStatus::Pending
            } else {
                ApprovalStatus::Approved
            },
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub dog_id: String,
    pub date: String,           // YYYY-MM-DD
    pub walk_type: WalkType,
    pub scheduled_time: String, // HH:MM
}

/// Outcome of validating a candidate (date, time) pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValidationOutcome {
    pub requires_approval: bool,
}
