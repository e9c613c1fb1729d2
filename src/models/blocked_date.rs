use serde::{Deserialize, Serialize};

/// A date on which walks cannot be booked. `dog_id = None` blocks every
/// dog; a concrete `dog_id` blocks only that dog and leaves the rest
/// bookable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockedDate {
    pub id: String,
    pub date: String, // YYYY-MM-DD
    pub dog_id: Option<String>,
    pub reason: String,
    pub created_by: String,
    pub created_at: String,
}

impl BlockedDate {
    pub fn new(date: String, dog_id: Option<String>, reason: String, created_by: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            dog_id,
            reason,
            created_by,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBlockedDateRequest {
    pub date: String, // YYYY-MM-DD
    pub dog_id: Option<String>,
    pub reason: String,
    pub created_by: Option<String>,
}
