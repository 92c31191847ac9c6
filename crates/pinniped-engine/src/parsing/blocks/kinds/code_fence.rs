#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn ch(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// What a line looks like when it starts with a fence run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Length of the fence run. A closer must be at least as long.
    pub run: usize,
    /// Byte offset of the info string, relative to the start of the line.
    pub info_offset: usize,
    /// The line is only the fence run (plus whitespace) and can close a fence.
    pub bare: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    const MIN_RUN: usize = 3;

    /// Detects a fence line. Leading indentation is allowed.
    ///
    /// A fence whose info string contains its own fence character is ordinary
    /// text, so inline runs such as ```` ```x``` ```` stay in the paragraph.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let indent = line.len() - line.trim_start().len();
        let t = &line[indent..];
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let ch = kind.ch();

        let run = t.len() - t.trim_start_matches(ch).len();
        let rest = &t[run..];
        if rest.contains(ch) {
            return None;
        }

        Some(FenceSig {
            kind,
            run,
            info_offset: indent + run,
            bare: rest.trim().is_empty(),
        })
    }

    /// The fence to emit around a code block.
    ///
    /// Backticks, unless the info string holds a backtick. The run is one
    /// longer than any run of the fence character opening a code line, so
    /// nothing inside the block can close it.
    pub fn for_block(code: &str, language: Option<&str>) -> String {
        let kind = if language.is_some_and(|l| l.contains('`')) {
            FenceKind::Tildes
        } else {
            FenceKind::Backticks
        };
        let ch = kind.ch();
        let longest = code
            .lines()
            .map(|line| {
                let t = line.trim_start();
                t.len() - t.trim_start_matches(ch).len()
            })
            .max()
            .unwrap_or(0);
        ch.to_string().repeat((longest + 1).max(Self::MIN_RUN))
    }

    /// A bare fence of the opener's character, at least as long, closes it.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        matches!(sig, Some(s) if s.kind == open.kind && s.bare && s.run >= open.run)
    }

    /// The trimmed info string of an opening fence line, if any.
    pub fn language(line: &str, sig: FenceSig) -> Option<String> {
        let info = line[sig.info_offset..].trim();
        (!info.is_empty()).then(|| info.to_string())
    }
}
