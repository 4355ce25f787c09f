//! Reading normalization
//!
//! Tokenizer backends report readings in katakana (the MeCab/IPADIC
//! convention); the canonical form throughout this crate is hiragana.
//! The two blocks are offset by 0x60, so conversion is a code point shift.

/// Convert katakana code points to their hiragana equivalents.
///
/// Covers ァ (U+30A1) through ヶ (U+30F6) plus the iteration marks ヽ/ヾ.
/// The prolonged sound mark ー and anything outside the katakana block pass
/// through unchanged. Idempotent: hiragana input is already a fixed point.
pub fn kata_to_hira(reading: &str) -> String {
    reading
        .chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' | '\u{30FD}' | '\u{30FE}' => {
                // Checked range above keeps the shifted value a valid scalar
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Normalize an optional reading; absent stays absent
pub fn normalize_reading(reading: Option<&str>) -> Option<String> {
    reading.map(kata_to_hira)
}
