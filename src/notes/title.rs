/// Title used when a note has no top-level heading.
pub const UNTITLED: &str = "Untitled";

/// Derive a display title from Markdown content.
///
/// Returns the trimmed text after the first line whose trimmed form starts
/// with `"# "`. Lower-level headings (`## `) do not match. Falls back to
/// [`UNTITLED`].
pub fn derive_title(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}
