//! Filesystem-safe filename derivation from track metadata
//!
//! Titles and usernames come from the remote service and may contain
//! anything, including path separators and control characters. Filenames are
//! derived by filtering to a fixed allow-list rather than escaping, so the
//! output can never name a directory or traverse one.

/// Fixed extension appended to every derived filename
pub const AUDIO_EXTENSION: &str = "mp3";

/// Characters allowed in derived filenames beyond ASCII alphanumerics
///
/// A fixed allow-list, not a Unicode-category rule; the accented vowels
/// cover the service's primary locale.
const EXTRA_ALLOWED: &str = "æøåÆØÅ &_-()";

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || EXTRA_ALLOWED.contains(c)
}

/// Derive the output filename for a track
///
/// When the title carries no hyphen of its own it is prefixed with
/// `"{username} - "`: many titles already embed "Artist - Track", and the
/// prefix would duplicate the artist in those. A title containing an
/// unrelated hyphen therefore suppresses the prefix, a known imprecision
/// that is kept intentionally.
///
/// The combined string is filtered to the fixed allow-set (ASCII letters and
/// digits, `æøåÆØÅ`, space, `&`, `_`, `-`, parentheses); every other
/// character is dropped, not replaced. The result always ends in `.mp3` and
/// never contains a path separator, but may degenerate to little more than
/// the extension when nothing survives the filter. Callers handle that case;
/// this function does not reject it.
pub fn track_filename(title: &str, username: &str) -> String {
    let base = if title.contains('-') {
        title.to_string()
    } else {
        format!("{username} - {title}")
    };
    let mut name: String = base.chars().filter(|c| is_allowed(*c)).collect();
    name.push('.');
    name.push_str(AUDIO_EXTENSION);
    name
}
