use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-user profile record, keyed by `user_id`.
///
/// Written via upsert: the first picture change inserts the row, later changes
/// update it in place. The picture itself lives in external blob storage; only
/// its public URL is recorded here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub user_id: String,
    pub profile_picture_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}
