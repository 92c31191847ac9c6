/// ATX heading syntax (`# Title`).
pub struct Heading;

/// A heading line's level and where its text starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSig {
    pub level: u8,
    /// Byte offset of the (untrimmed) text, relative to the trimmed line.
    pub text_offset: usize,
}

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// One to six `#` followed by a space, a tab, or the end of the line.
    pub fn sig(trimmed: &str) -> Option<HeadingSig> {
        let hashes = trimmed.len() - trimmed.trim_start_matches(Self::MARKER).len();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        match trimmed[hashes..].chars().next() {
            None | Some(' ') | Some('\t') => Some(HeadingSig {
                level: hashes as u8,
                text_offset: hashes,
            }),
            _ => None,
        }
    }

    /// The marker run for a level, clamped into `1..=6`.
    pub fn marker(level: u8) -> String {
        Self::MARKER
            .to_string()
            .repeat(level.clamp(1, Self::MAX_LEVEL) as usize)
    }
}
