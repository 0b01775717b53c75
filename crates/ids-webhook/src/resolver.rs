//! Identity upsert resolution.
//!
//! Reconciles a verified change notification into exactly one identity
//! record. Redelivery safety comes from the store's upsert semantics, not
//! from any internal retry loop: the resolver runs each path once and
//! reports classified failures back to the delivery mechanism.

use crate::{Result as WebhookErrorResult, WebhookError};

use ids_core::{Identity, IdentityEventData, Role};
use ids_db::IdentityRepository;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, info, warn};

pub struct IdentityResolver {
    repo: IdentityRepository,
    store_timeout: Duration,
}

impl IdentityResolver {
    pub fn new(repo: IdentityRepository, store_timeout: Duration) -> Self {
        Self {
            repo,
            store_timeout,
        }
    }

    /// Resolve a `created` notification.
    ///
    /// The happy path is an idempotent upsert keyed on `external_id`.
    /// When the insert trips the email uniqueness constraint instead, the
    /// provider has issued a new external id for a person we already know
    /// by email (account recovery, provider migration); the existing
    /// record is rebound rather than duplicated.
    pub async fn resolve_created(&self, data: &IdentityEventData) -> WebhookErrorResult<Identity> {
        let candidate = identity_from_event(data)?;

        let upsert = self
            .bounded(self.repo.upsert_by_external_id(&candidate))
            .await?;

        match upsert {
            Ok(()) => {}
            Err(e) if e.unique_violation_column() == Some("email") => {
                self.rebind(&candidate).await?;
            }
            Err(e) => return Err(e.into()),
        }

        // A concurrent delete may have removed the row between the upsert
        // and this read; the delete is authoritative, so the candidate
        // stands in for reporting only.
        let resolved = self
            .bounded(self.repo.find_by_external_id(&data.id))
            .await??
            .unwrap_or(candidate);

        debug!(
            "Resolved created notification for {} as {}",
            data.id, resolved.id
        );

        Ok(resolved)
    }

    /// Resolve an `updated` notification, keyed strictly on `external_id`.
    /// A missing record means the paired `created` never arrived (or
    /// arrived out of order), so the created path runs instead of failing.
    pub async fn resolve_updated(&self, data: &IdentityEventData) -> WebhookErrorResult<Identity> {
        let candidate = identity_from_event(data)?;

        let touched = self
            .bounded(self.repo.update_by_external_id(&candidate))
            .await??;

        if touched == 0 {
            info!(
                "Update for unknown identity {}; treating as missed created",
                data.id
            );
            return self.resolve_created(data).await;
        }

        let resolved = self
            .bounded(self.repo.find_by_external_id(&data.id))
            .await??
            .unwrap_or(candidate);

        Ok(resolved)
    }

    /// Resolve a `deleted` notification: hard delete by `external_id`.
    /// Deleting an already-absent record is success, so redelivery and
    /// delete-before-create orderings are both no-ops.
    pub async fn resolve_deleted(&self, external_id: &str) -> WebhookErrorResult<()> {
        let removed = self
            .bounded(self.repo.delete_by_external_id(external_id))
            .await??;

        if removed == 0 {
            debug!("Delete for unknown identity {}; already satisfied", external_id);
        } else {
            info!("Deleted identity record for {}", external_id);
        }

        Ok(())
    }

    /// Self-healing for authenticated requests: create the record for a
    /// session whose subject was never delivered to us. Sessions without
    /// an email cannot satisfy the uniqueness invariants and return None;
    /// callers fall back to metadata-derived role.
    pub async fn ensure_record(
        &self,
        external_id: &str,
        email: Option<&str>,
        role: Role,
    ) -> WebhookErrorResult<Option<Identity>> {
        if let Some(existing) = self
            .bounded(self.repo.find_by_external_id(external_id))
            .await??
        {
            return Ok(Some(existing));
        }

        let Some(email) = email else {
            return Ok(None);
        };

        info!(
            "No record for authenticated identity {}; creating from session",
            external_id
        );

        let candidate = Identity::new(Some(external_id.to_string()), email.to_string(), role);

        let upsert = self
            .bounded(self.repo.upsert_by_external_id(&candidate))
            .await?;

        match upsert {
            Ok(()) => {}
            Err(e) if e.unique_violation_column() == Some("email") => {
                self.rebind(&candidate).await?;
            }
            Err(e) => return Err(e.into()),
        }

        Ok(self
            .bounded(self.repo.find_by_external_id(external_id))
            .await??)
    }

    /// Rebind the email-correlated record to the incoming external id.
    /// The only path allowed to change an existing record's external_id.
    async fn rebind(&self, candidate: &Identity) -> WebhookErrorResult<()> {
        let existing = self
            .bounded(self.repo.find_by_email(&candidate.email))
            .await??;

        match existing.as_ref().and_then(|e| e.external_id.as_deref()) {
            Some(previous) => {
                // Three-way conflict: the email-matched record is already
                // bound to a different external id. The provider is the
                // system of record, so the incoming binding wins.
                warn!(
                    "Rebinding {} from external id {} to {}",
                    candidate.email,
                    previous,
                    candidate.external_id.as_deref().unwrap_or("?")
                );
            }
            None => {
                info!(
                    "Binding existing record for {} to external id {}",
                    candidate.email,
                    candidate.external_id.as_deref().unwrap_or("?")
                );
            }
        }

        self.bounded(self.repo.rebind_external_id(&candidate.email, candidate))
            .await??;

        Ok(())
    }

    /// Bound a store operation by the configured timeout. An elapsed
    /// timeout is a transient failure: control returns to the delivery
    /// mechanism for redelivery.
    async fn bounded<T>(
        &self,
        operation: impl Future<Output = T>,
    ) -> WebhookErrorResult<T> {
        tokio::time::timeout(self.store_timeout, operation)
            .await
            .map_err(|_| WebhookError::StoreTimeout {
                elapsed_secs: self.store_timeout.as_secs(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Shape a notification snapshot into a candidate record.
/// A lifecycle notification without any email address cannot satisfy the
/// record invariants and is malformed.
fn identity_from_event(data: &IdentityEventData) -> WebhookErrorResult<Identity> {
    let email = data
        .primary_email()
        .ok_or_else(|| WebhookError::Payload {
            message: format!("notification for {} carries no email address", data.id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut identity = Identity::new(Some(data.id.clone()), email.to_string(), data.role());
    identity.display_name = data.display_name();
    identity.avatar_url = data.image_url.clone();

    Ok(identity)
}
