//! Percent-encoding for ids interpolated into URL paths.
//!
//! Dashboard and saved-object ids are user-chosen and may contain spaces or
//! slashes; without encoding, a slash would turn one path segment into two.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a URL path segment.
///
/// RFC 3986 section 3.3 reserved characters, plus percent itself (prevents
/// double-encoding) and slash (prevents path splitting).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
