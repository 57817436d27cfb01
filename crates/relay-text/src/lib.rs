//! # relay-text
//!
//! Text normalization shared by Relay channels: attachment flattening,
//! double-encoded base64 detection, and length-bounded segmentation.

pub mod attachment;
pub mod name;
pub mod segment;
pub mod sniff;
pub mod utf8;

pub use attachment::{flatten, split_attachment, text_and_attachments};
pub use name::name_from_first_last_username;
pub use segment::split_msg;
pub use sniff::decode_possible_base64;
