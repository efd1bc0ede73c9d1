use std::fmt;

/// Identifies one downloaded clip within a single request.
///
/// Keys are unique per request: pronunciation `j` of word `i`, or the
/// connector spoken after pronunciation `j` of word `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipKey {
    Pronunciation { word: usize, index: usize },
    Connector { word: usize, index: usize },
}

impl ClipKey {
    /// File name for this clip, e.g. `tmp_0_1.mp3` or `tmp_0_or_1.mp3`.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{self}.{extension}")
    }
}

impl fmt::Display for ClipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipKey::Pronunciation { word, index } => write!(f, "tmp_{word}_{index}"),
            ClipKey::Connector { word, index } => write!(f, "tmp_{word}_or_{index}"),
        }
    }
}
