use crate::session::NativeSession;

/// Formatting options for a diagnostic capture.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Section name printed in the header and footer markers.
    pub section: String,
    /// Cap on the bytes taken from the session dump. Anything beyond it
    /// is dropped so a misbehaving native layer cannot flood the host's
    /// dump output.
    pub max_bytes: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            section: "SESSION".to_string(),
            max_bytes: 64 * 1024,
        }
    }
}

impl DumpOptions {
    pub fn section(name: &str) -> Self {
        Self {
            section: name.to_string(),
            ..Self::default()
        }
    }
}

/// Renders a session's diagnostic dump the way a host dump hook prints
/// it: header marker, body, footer marker. Read-only; the session is
/// only asked for its dump once.
pub fn dump_report<S>(session: &S, options: &DumpOptions) -> String
where
    S: NativeSession + ?Sized,
{
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("========== {} ==========\n", options.section));
    out.push_str(&format!("{} events begin\n", options.section));
    match session.diagnostic_dump() {
        Some(text) => {
            let body = truncate_utf8(&text, options.max_bytes);
            out.push_str(body);
            if !body.ends_with('\n') {
                out.push('\n');
            }
            if body.len() < text.len() {
                out.push_str("(truncated)\n");
            }
        }
        None => out.push_str("(no diagnostic data)\n"),
    }
    out.push_str(&format!("{} events end\n", options.section));
    out
}

/// Longest prefix of `text` that fits in `max_bytes` without splitting a
/// UTF-8 sequence.
fn truncate_utf8(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
