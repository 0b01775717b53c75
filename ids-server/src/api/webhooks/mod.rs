pub mod webhook_ack;
pub mod webhooks;
