use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming message from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Channel name (e.g. "telegram", "whatsapp").
    pub channel: String,
    /// Platform-specific user ID.
    pub sender_id: String,
    /// Name parts reported by the platform, any of which may be empty.
    #[serde(default)]
    pub sender: SenderProfile,
    /// Message text content.
    #[serde(default)]
    pub text: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    /// Attachment descriptors (`<mediaType>:<url>`), in delivery order.
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Platform-specific target for routing the response (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
}

/// Contact name parts as the platform reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
}

/// One outbound segment, ready to be handed to a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub channel: String,
    pub text: String,
    /// Platform-specific target for routing (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// 0-based position of this segment.
    pub segment: usize,
    /// Total number of segments the original text was split into.
    pub segments: usize,
}
