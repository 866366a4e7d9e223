use std::path::Path;

use time::OffsetDateTime;

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Check whether a title is safe to use as a filename stem.
///
/// Titles double as filename stems, so anything outside ASCII alphanumerics
/// is rejected. This closes the path-traversal hole of joining a raw URL
/// segment onto the data directory: separators, `..`, NUL and friends all
/// fail the check.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty() && title.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Generate the last-modified metadata line for a page file
pub fn last_modified_html(path: &Path) -> String {
    let mtime = match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(mtime) => mtime,
        Err(_) => return String::new(),
    };
    let Ok(dur) = mtime.duration_since(std::time::UNIX_EPOCH) else {
        return String::new();
    };
    let Ok(dt) = OffsetDateTime::from_unix_timestamp(dur.as_secs() as i64) else {
        return String::new();
    };
    let fmt = time::format_description::well_known::Rfc3339;
    match dt.format(&fmt) {
        Ok(s) => format!("<p class=\"meta\">Last modified: {}</p>", escape_html(&s)),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_html("<script>alert(\"hi\") & 'bye'</script>"),
            "&lt;script&gt;alert(&quot;hi&quot;) &amp; &#39;bye&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn accepts_alphanumeric_titles() {
        assert!(is_valid_title("FrontPage"));
        assert!(is_valid_title("page2"));
        assert!(is_valid_title("X"));
    }

    #[test]
    fn rejects_unsafe_titles() {
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("a/b"));
        assert!(!is_valid_title(".."));
        assert!(!is_valid_title("../etc/passwd"));
        assert!(!is_valid_title("a\\b"));
        assert!(!is_valid_title("name.txt"));
        assert!(!is_valid_title("sp ace"));
        assert!(!is_valid_title("nul\0byte"));
    }

    #[test]
    fn last_modified_missing_file_is_empty() {
        assert_eq!(last_modified_html(Path::new("no/such/file.txt")), "");
    }
}
