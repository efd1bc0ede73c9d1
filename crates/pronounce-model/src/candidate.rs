/// One pronunciation entry scraped from a dictionary page.
///
/// `origin` is the audio host base URL and `src` the path below it, whose
/// first segment groups related recordings (e.g. `L02/L0234500.mp3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronunciationCandidate {
    pub origin: String,
    pub src: String,
}

impl PronunciationCandidate {
    pub fn new(origin: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            src: src.into(),
        }
    }

    /// Grouping token: everything before the first `/` in `src`,
    /// or the whole of `src` when it has no separator.
    pub fn prefix(&self) -> &str {
        self.src.split('/').next().unwrap_or(&self.src)
    }

    /// Fully qualified audio URL, `origin/src`. Not validated.
    pub fn url(&self) -> String {
        format!("{}/{}", self.origin, self.src)
    }
}
