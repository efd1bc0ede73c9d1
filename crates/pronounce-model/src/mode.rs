/// Which of a word's dominant pronunciations get spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PronunciationMode {
    /// Only the first pronunciation of each word.
    #[default]
    First,
    /// Every pronunciation, joined by a spoken "or".
    All,
}

impl PronunciationMode {
    pub fn from_all_flag(all: bool) -> Self {
        if all {
            Self::All
        } else {
            Self::First
        }
    }

    /// Narrow a word's ordered pronunciation URLs to the ones to download.
    pub fn select<'a>(&self, urls: &'a [String]) -> &'a [String] {
        match self {
            Self::All => urls,
            Self::First => &urls[..urls.len().min(1)],
        }
    }
}
