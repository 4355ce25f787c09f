//! Script classification for Japanese text
//!
//! Decides whether a surface needs a reading at all: only spans containing a
//! CJK unified ideograph do. Total over any string, including empty.

/// Writing system of a text unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// Contains at least one CJK unified ideograph
    Kanji,
    /// Entirely within the hiragana block
    Hiragana,
    /// Entirely within the katakana block
    Katakana,
    /// Anything else (Latin, digits, punctuation, mixed kana, empty)
    Other,
}

/// CJK unified ideograph block (U+4E00..=U+9FFF)
fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Hiragana block (U+3040..=U+309F)
fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Katakana block (U+30A0..=U+30FF)
fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Classify a single character
pub fn classify_char(c: char) -> ScriptKind {
    if is_kanji(c) {
        ScriptKind::Kanji
    } else if is_hiragana(c) {
        ScriptKind::Hiragana
    } else if is_katakana(c) {
        ScriptKind::Katakana
    } else {
        ScriptKind::Other
    }
}

/// Classify a surface span.
///
/// A surface containing any kanji character classifies as `Kanji` regardless
/// of what else it contains (okurigana suffixes are the common case, e.g.
/// 食べる). Pure-kana surfaces classify by their uniform block; everything
/// else, including the empty string, is `Other`.
pub fn classify(surface: &str) -> ScriptKind {
    if surface.chars().any(is_kanji) {
        return ScriptKind::Kanji;
    }
    if !surface.is_empty() && surface.chars().all(is_hiragana) {
        return ScriptKind::Hiragana;
    }
    if !surface.is_empty() && surface.chars().all(is_katakana) {
        return ScriptKind::Katakana;
    }
    ScriptKind::Other
}

/// True if the surface contains at least one CJK unified ideograph
pub fn contains_kanji(surface: &str) -> bool {
    surface.chars().any(is_kanji)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_pure_scripts() {
        assert_eq!(classify("日本語"), ScriptKind::Kanji);
        assert_eq!(classify("にほんご"), ScriptKind::Hiragana);
        assert_eq!(classify("カタカナ"), ScriptKind::Katakana);
        assert_eq!(classify("abc123"), ScriptKind::Other);
    }

    #[test]
    fn mixed_surface_with_kanji_is_kanji() {
        // Verb with okurigana
        assert_eq!(classify("食べる"), ScriptKind::Kanji);
        // Kanji embedded in Latin text
        assert_eq!(classify("ABC山XYZ"), ScriptKind::Kanji);
    }

    #[test]
    fn mixed_kana_without_kanji_is_other() {
        assert_eq!(classify("ひらカタ"), ScriptKind::Other);
    }

    #[test]
    fn empty_string_is_other() {
        assert_eq!(classify(""), ScriptKind::Other);
        assert!(!contains_kanji(""));
    }

    #[test]
    fn contains_kanji_matches_classify() {
        for s in ["日本語", "を", "食べる", "カタカナ", "hello", ""] {
            assert_eq!(contains_kanji(s), classify(s) == ScriptKind::Kanji);
        }
    }

    #[test]
    fn block_boundaries() {
        // U+4E00 and U+9FFF are kanji; neighbors are not
        assert_eq!(classify_char('\u{4E00}'), ScriptKind::Kanji);
        assert_eq!(classify_char('\u{9FFF}'), ScriptKind::Kanji);
        assert_ne!(classify_char('\u{4DFF}'), ScriptKind::Kanji);
        // Prolonged sound mark lives in the katakana block
        assert_eq!(classify_char('ー'), ScriptKind::Katakana);
    }
}
