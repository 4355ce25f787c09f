//! Result rendering
//!
//! Pure functions over an already-computed [`AnnotationResult`]: a flat kana
//! reading of the whole text, or inline `<ruby>` markup for display.

use crate::segment::AnnotationResult;

/// Concatenate each segment's reading (falling back to its surface) in order,
/// reconstructing a fully-kana rendition of the input.
pub fn reading_string(result: &AnnotationResult) -> String {
    result
        .segments
        .iter()
        .map(|s| s.reading.as_deref().unwrap_or(&s.surface))
        .collect()
}

/// Render inline ruby markup: `<ruby>表<rt>よみ</rt></ruby>` for segments with
/// a reading, the bare surface otherwise.
pub fn ruby_markup(result: &AnnotationResult) -> String {
    let mut out = String::with_capacity(result.text.len() * 2);
    for s in &result.segments {
        match &s.reading {
            Some(reading) => {
                out.push_str("<ruby>");
                out.push_str(&s.surface);
                out.push_str("<rt>");
                out.push_str(reading);
                out.push_str("</rt></ruby>");
            }
            None => out.push_str(&s.surface),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{Segment, Source};

    fn seg(surface: &str, reading: Option<&str>) -> Segment {
        Segment {
            surface: surface.to_string(),
            reading: reading.map(str::to_string),
            confidence: 0.95,
            source: Source::Tokenizer,
        }
    }

    #[test]
    fn reading_string_interleaves_readings_and_surfaces() {
        let r = AnnotationResult::new(
            "日本語を学習します",
            vec![
                seg("日本語", Some("にほんご")),
                seg("を", None),
                seg("学習", Some("がくしゅう")),
                seg("します", None),
            ],
        );
        assert_eq!(reading_string(&r), "にほんごをがくしゅうします");
    }

    #[test]
    fn ruby_markup_only_wraps_annotated_segments() {
        let r = AnnotationResult::new(
            "日本語を",
            vec![seg("日本語", Some("にほんご")), seg("を", None)],
        );
        assert_eq!(
            ruby_markup(&r),
            "<ruby>日本語<rt>にほんご</rt></ruby>を"
        );
    }

    #[test]
    fn empty_result_renders_empty() {
        let r = AnnotationResult::empty("");
        assert_eq!(reading_string(&r), "");
        assert_eq!(ruby_markup(&r), "");
    }
}
