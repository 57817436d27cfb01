//! Inbound and outbound text pipelines composed from the `relay-text` helpers.

use relay_core::{
    config::{Config, TextConfig},
    message::{IncomingMessage, OutgoingMessage},
};
use relay_text::{
    decode_possible_base64, flatten, name_from_first_last_username, split_msg,
    text_and_attachments,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

/// An inbound message normalized for storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboundRecord {
    pub id: Uuid,
    pub channel: String,
    pub sender_id: String,
    /// Display name, falling back to `sender_id` when the profile is empty.
    pub sender_name: String,
    pub timestamp: DateTime<Utc>,
    /// Where replies to this message should be routed.
    pub reply_target: Option<String>,
    /// Message text followed by one attachment URL per line.
    pub text: String,
}

/// Normalize an incoming message: undo double base64 encoding of the body
/// (if enabled), then append attachment URLs.
///
/// Only the body is sniffed; attachment URLs are never decoded.
pub fn normalize_inbound(msg: &IncomingMessage, cfg: &TextConfig) -> InboundRecord {
    let text = if cfg.decode_base64 {
        let body = decode_possible_base64(&msg.text);
        if body != msg.text {
            debug!(channel = %msg.channel, id = %msg.id, "inbound body was base64 encoded");
        }
        flatten(&body, &msg.attachments)
    } else {
        text_and_attachments(msg)
    };

    let sender = &msg.sender;
    let mut sender_name =
        name_from_first_last_username(&sender.first_name, &sender.last_name, &sender.username);
    if sender_name.is_empty() {
        sender_name = msg.sender_id.clone();
    }

    InboundRecord {
        id: msg.id,
        channel: msg.channel.clone(),
        sender_id: msg.sender_id.clone(),
        sender_name,
        timestamp: msg.timestamp,
        reply_target: msg.reply_target.clone(),
        text,
    }
}

/// Split outbound text into numbered segments sized for `channel`.
pub fn prepare_outbound(
    channel: &str,
    text: &str,
    reply_target: Option<&str>,
    cfg: &Config,
) -> Vec<OutgoingMessage> {
    let max = cfg.max_length_for(channel);
    let parts = split_msg(text, max);
    let segments = parts.len();
    debug!(channel, max, segments, "prepared outbound segments");

    parts
        .into_iter()
        .enumerate()
        .map(|(segment, text)| OutgoingMessage {
            channel: channel.to_string(),
            text,
            reply_target: reply_target.map(str::to_string),
            segment,
            segments,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::config::ChannelConfig;
    use relay_core::message::SenderProfile;

    // "Your verification code is 4711. Do not share it with anyone else." in base64.
    const ENCODED_BODY: &str =
        "WW91ciB2ZXJpZmljYXRpb24gY29kZSBpcyA0NzExLiBEbyBub3Qgc2hhcmUgaXQgd2l0aCBhbnlvbmUgZWxzZS4=";

    fn incoming(text: &str, attachments: &[&str], sender: SenderProfile) -> IncomingMessage {
        let json = serde_json::json!({
            "channel": "telegram",
            "sender_id": "842",
            "text": text,
            "attachments": attachments,
        });
        let mut msg: IncomingMessage = serde_json::from_value(json).unwrap();
        msg.sender = sender;
        msg
    }

    #[test]
    fn test_inbound_decodes_body_and_appends_urls() {
        let msg = incoming(
            ENCODED_BODY,
            &["image/jpeg:https://cdn.example/a.jpg"],
            SenderProfile::default(),
        );
        let record = normalize_inbound(&msg, &TextConfig::default());
        assert_eq!(
            record.text,
            "Your verification code is 4711. Do not share it with anyone else.\n\
             https://cdn.example/a.jpg"
        );
        assert_eq!(record.id, msg.id);
    }

    #[test]
    fn test_inbound_keeps_timestamp_and_reply_target() {
        let json = serde_json::json!({
            "channel": "telegram",
            "sender_id": "842",
            "text": "hi",
            "timestamp": "2026-10-14T08:30:00Z",
            "reply_target": "-100123",
        });
        let msg: IncomingMessage = serde_json::from_value(json).unwrap();
        let record = normalize_inbound(&msg, &TextConfig::default());
        assert_eq!(record.timestamp.to_rfc3339(), "2026-10-14T08:30:00+00:00");
        assert_eq!(record.reply_target.as_deref(), Some("-100123"));
    }

    #[test]
    fn test_inbound_decoding_disabled() {
        let msg = incoming(
            ENCODED_BODY,
            &["audio/ogg:https://cdn.example/v.ogg"],
            SenderProfile::default(),
        );
        let cfg = TextConfig {
            decode_base64: false,
            ..Default::default()
        };
        let record = normalize_inbound(&msg, &cfg);
        assert_eq!(record.text, format!("{ENCODED_BODY}\nhttps://cdn.example/v.ogg"));
    }

    #[test]
    fn test_inbound_sender_name() {
        let sender = SenderProfile {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            username: "jdoe".to_string(),
        };
        let record = normalize_inbound(&incoming("hi", &[], sender), &TextConfig::default());
        assert_eq!(record.sender_name, "Jane Doe");
        assert_eq!(record.text, "hi");
    }

    #[test]
    fn test_inbound_sender_name_falls_back_to_id() {
        let record = normalize_inbound(
            &incoming("hi", &[], SenderProfile::default()),
            &TextConfig::default(),
        );
        assert_eq!(record.sender_name, "842");
    }

    #[test]
    fn test_outbound_uses_channel_limit() {
        let mut cfg = Config::default();
        cfg.channel.insert(
            "sms".to_string(),
            ChannelConfig {
                max_length: Some(10),
            },
        );
        let out = prepare_outbound("sms", "The quick brown fox jumps", Some("+15550100"), &cfg);
        let texts: Vec<&str> = out.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["The quick", "brown", "fox jumps"]);
        for (i, m) in out.iter().enumerate() {
            assert_eq!(m.segment, i);
            assert_eq!(m.segments, 3);
            assert_eq!(m.channel, "sms");
            assert_eq!(m.reply_target.as_deref(), Some("+15550100"));
        }
    }

    #[test]
    fn test_outbound_default_limit_single_segment() {
        let out = prepare_outbound("web", "hello", None, &Config::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "hello");
        assert_eq!(out[0].segments, 1);
        assert!(out[0].reply_target.is_none());
    }
}
