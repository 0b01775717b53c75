use serde::Serialize;

/// Acknowledgement returned once a delivery is fully resolved
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}
