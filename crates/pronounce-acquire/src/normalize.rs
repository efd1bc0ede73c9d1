use unicode_normalization::UnicodeNormalization;

/// Normalize a word for dictionary lookup.
///
/// NFC-composes the text so precomposed and decomposed accents map to the
/// same entry, trims surrounding whitespace and lowercases.
pub fn normalize_word(input: &str) -> String {
    let nfc: String = input.nfc().collect();
    nfc.trim().to_lowercase()
}
