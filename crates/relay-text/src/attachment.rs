//! Attachment descriptors: `<mediaType>:<url>` strings as channels store them.

use relay_core::traits::Msg;

/// Split an attachment descriptor into `(media_type, url)`.
///
/// Only the first colon separates; the URL keeps any colons of its own.
/// Without a colon the media type is empty and the whole input is the URL.
///
/// One exception to the plain first-colon split: when that colon is
/// followed by `//` it belongs to a URL scheme (`https://...`), so the input
/// is a bare URL with an empty media type.
pub fn split_attachment(attachment: &str) -> (&str, &str) {
    match attachment.split_once(':') {
        Some((media_type, url)) if !url.starts_with("//") => (media_type, url),
        _ => ("", attachment),
    }
}

/// Text followed by each attachment URL on its own line, in the given order.
pub fn flatten<S: AsRef<str>>(text: &str, attachments: &[S]) -> String {
    let mut out = String::from(text);
    for attachment in attachments {
        let (_, url) = split_attachment(attachment.as_ref());
        out.push('\n');
        out.push_str(url);
    }
    out
}

/// [`flatten`] over a message's text and attachments.
pub fn text_and_attachments(msg: &impl Msg) -> String {
    flatten(msg.text(), msg.attachments())
}
