use std::sync::OnceLock;

use regex::Regex;

/// List item marker syntax.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 2] = ['-', '*'];
    pub const BULLET: &'static str = "-";

    /// Content offset after a `- ` or `* ` bullet in a trimmed line.
    /// A lone `-` or `*` is an empty item.
    pub fn bullet(trimmed: &str) -> Option<usize> {
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        if !Self::BULLETS.contains(&first) {
            return None;
        }
        match chars.next() {
            None => Some(1),
            Some(' ') => Some(2),
            _ => None,
        }
    }

    /// Content offset after a `<digits>. ` marker in a trimmed line.
    /// A lone `<digits>.` is an empty item.
    pub fn ordered(trimmed: &str) -> Option<usize> {
        ordered_marker_regex()
            .find(trimmed)
            .map(|m| m.end())
    }
}

fn ordered_marker_regex() -> &'static Regex {
    static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER
        .get_or_init(|| Regex::new(r"^[0-9]+\.(?: |$)").expect("Invalid ordered marker regex"))
}
