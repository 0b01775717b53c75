//! Notification dispatch.
//!
//! A delivery moves `verified -> classified -> resolved` exactly once;
//! redelivery idempotency is the resolver's concern, not the
//! dispatcher's.

use crate::{IdentityResolver, Result as WebhookErrorResult};

use ids_core::{EventKind, IdentityEvent};

use log::{debug, info};

/// What happened to a classified notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A lifecycle event was reconciled into the store
    Resolved,
    /// An unrecognized notification type, accepted and discarded.
    /// The provider introduces new types over time; failing these would
    /// trigger its retry/backoff machinery for nothing.
    Ignored,
}

/// Route a verified notification to its lifecycle handler.
pub async fn dispatch(
    event: &IdentityEvent,
    resolver: &IdentityResolver,
) -> WebhookErrorResult<DispatchOutcome> {
    let kind = event.kind();

    match kind {
        EventKind::Created => {
            let identity = resolver.resolve_created(&event.data).await?;
            info!(
                "Created identity {} for {} (role: {})",
                identity.id, event.data.id, identity.role
            );
        }
        EventKind::Updated => {
            let identity = resolver.resolve_updated(&event.data).await?;
            info!(
                "Updated identity {} for {} (role: {})",
                identity.id, event.data.id, identity.role
            );
        }
        EventKind::Deleted => {
            resolver.resolve_deleted(&event.data.id).await?;
        }
        EventKind::Other => {
            debug!("Ignoring notification type '{}'", event.event_type);
            return Ok(DispatchOutcome::Ignored);
        }
    }

    Ok(DispatchOutcome::Resolved)
}
