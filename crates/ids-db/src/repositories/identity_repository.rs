//! Identity repository - the single mutation surface for identity records.
//!
//! All writes go through the upsert/rebind/delete operations here; nothing
//! else in the workspace issues partial updates against the `identities`
//! table. Uniqueness of `email` and `external_id` is enforced by the
//! schema, so concurrent deliveries for the same identity are serialized
//! by the database rather than by application-level locks.

use crate::{DbError, Result as DbErrorResult};

use ids_core::{Identity, Role};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert keyed on `external_id` with conflict-update semantics.
    ///
    /// Redelivery of the same notification updates the mutable fields in
    /// place and bumps `updated_at`; `id` and `created_at` keep their
    /// first-delivery values. An email collision with a different record
    /// surfaces as a UNIQUE-constraint error for the caller to resolve.
    pub async fn upsert_by_external_id(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let created_at = identity.created_at.timestamp();
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, external_id, email, display_name, avatar_url, role,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(external_id) DO UPDATE SET
                    email = excluded.email,
                    display_name = excluded.display_name,
                    avatar_url = excluded.avatar_url,
                    role = excluded.role,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&id)
        .bind(&identity.external_id)
        .bind(&identity.email)
        .bind(&identity.display_name)
        .bind(&identity.avatar_url)
        .bind(identity.role.as_str())
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Rebind the record correlated by `email` to a new `external_id`,
    /// refreshing the mutable fields at the same time. Returns the number
    /// of rows touched (0 when no record carries that email).
    pub async fn rebind_external_id(&self, email: &str, identity: &Identity) -> DbErrorResult<u64> {
        let updated_at = identity.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE identities
                SET external_id = ?, display_name = ?, avatar_url = ?,
                    role = ?, updated_at = ?
                WHERE email = ?
            "#,
        )
        .bind(&identity.external_id)
        .bind(&identity.display_name)
        .bind(&identity.avatar_url)
        .bind(identity.role.as_str())
        .bind(updated_at)
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Refresh the mutable fields of the record keyed on `external_id`.
    /// Returns 0 when no such record exists.
    pub async fn update_by_external_id(&self, identity: &Identity) -> DbErrorResult<u64> {
        let updated_at = identity.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE identities
                SET email = ?, display_name = ?, avatar_url = ?,
                    role = ?, updated_at = ?
                WHERE external_id = ?
            "#,
        )
        .bind(&identity.email)
        .bind(&identity.display_name)
        .bind(&identity.avatar_url)
        .bind(identity.role.as_str())
        .bind(updated_at)
        .bind(&identity.external_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete by `external_id`. Returns 0 when the record was already
    /// gone; deletion is idempotent under redelivery.
    pub async fn delete_by_external_id(&self, external_id: &str) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM identities WHERE external_id = ?")
            .bind(external_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, display_name, avatar_url, role,
                    created_at, updated_at
                FROM identities
                WHERE external_id = ?
            "#,
        )
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_identity).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, external_id, email, display_name, avatar_url, role,
                    created_at, updated_at
                FROM identities
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_identity).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identities")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[track_caller]
fn row_to_identity(row: SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id).map_err(|e| DbError::RowDecode {
            message: format!("Invalid UUID in identities.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        external_id: row.try_get("external_id")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        avatar_url: row.try_get("avatar_url")?,
        role: Role::from_str(&role).map_err(|e| DbError::RowDecode {
            message: format!("Invalid role in identities.role: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::RowDecode {
            message: "Invalid timestamp in identities.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| DbError::RowDecode {
            message: "Invalid timestamp in identities.updated_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}
