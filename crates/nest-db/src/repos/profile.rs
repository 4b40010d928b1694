//! Profile repository — per-user upsert keyed on `user_id`.

use chrono::Utc;

use nest_core::entities::Profile;

use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::store::NestStore;

const SELECT_COLS: &str = "user_id, profile_picture_url, updated_at";

fn row_to_profile(row: &libsql::Row) -> Result<Profile, StoreError> {
    Ok(Profile {
        user_id: row.get(0)?,
        profile_picture_url: get_opt_string(row, 1)?,
        updated_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl NestStore {
    /// Fetch the user's profile, or `None` if no row exists yet.
    ///
    /// A missing profile is a normal state (nothing uploaded yet), not an
    /// error.
    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, StoreError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM profiles WHERE user_id = ?1"),
                [user_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    /// Record the user's profile picture URL, inserting the row on first use.
    ///
    /// Upsert keyed on `user_id`: the conflict branch updates the URL and the
    /// update timestamp in place.
    pub async fn set_profile_picture(
        &self,
        user_id: &str,
        url: &str,
    ) -> Result<Profile, StoreError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO profiles (user_id, profile_picture_url, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (user_id) DO UPDATE SET
                     profile_picture_url = excluded.profile_picture_url,
                     updated_at = excluded.updated_at",
                libsql::params![user_id, url, now.to_rfc3339()],
            )
            .await?;

        Ok(Profile {
            user_id: user_id.to_string(),
            profile_picture_url: Some(url.to_string()),
            updated_at: now,
        })
    }

    /// Clear the stored picture URL. A missing profile row is a no-op.
    pub async fn clear_profile_picture(&self, user_id: &str) -> Result<(), StoreError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "UPDATE profiles SET profile_picture_url = NULL, updated_at = ?1
                 WHERE user_id = ?2",
                libsql::params![now.to_rfc3339(), user_id],
            )
            .await?;
        Ok(())
    }
}
