use crate::message::IncomingMessage;

/// A message as seen by the text helpers: its body plus attachment descriptors.
///
/// Attachment descriptors have the form `<mediaType>:<url>` and are kept in
/// the order the channel delivered them.
pub trait Msg {
    /// Message text content.
    fn text(&self) -> &str;

    /// Attachment descriptors, in delivery order.
    fn attachments(&self) -> &[String];
}

impl Msg for IncomingMessage {
    fn text(&self) -> &str {
        &self.text
    }

    fn attachments(&self) -> &[String] {
        &self.attachments
    }
}
