//! Bundled lexicon tokenizer backend
//!
//! Zero-config segmentation backend: greedy longest-match over an embedded
//! common-word lexicon, with script-run fallback for everything the lexicon
//! does not cover. Deterministic and dependency-free, it stands in for a
//! full morphological engine (MeCab, lindera) behind the same
//! [`ReadingTokenizer`] trait; out-of-lexicon kanji spans come back without
//! a reading and with a high synthetic cost, which routes them to the
//! verification tier.

use yomi_core::script::{classify_char, ScriptKind};
use yomi_core::{RawToken, ReadingTokenizer, TokenizeError};

/// Synthetic cost for script-run tokens the lexicon fully trusts
/// (kana, Latin, punctuation)
const RUN_COST: i64 = 200;

/// Synthetic cost for kanji spans with no lexicon entry; lands in the
/// lowest confidence band so the verification tier picks them up
const UNKNOWN_KANJI_COST: i64 = 9999;

/// Embedded common-word lexicon: (surface, katakana reading, cost).
///
/// Costs follow IPADIC-style magnitudes; frequent words sit well under 500.
/// Only kanji-bearing entries are listed — kana and Latin spans need no
/// dictionary reading.
const LEXICON: &[(&str, &str, i64)] = &[
    ("日本語", "ニホンゴ", 300),
    ("日本", "ニホン", 350),
    ("学習", "ガクシュウ", 400),
    ("勉強", "ベンキョウ", 400),
    ("学校", "ガッコウ", 350),
    ("大学", "ダイガク", 350),
    ("先生", "センセイ", 350),
    ("学生", "ガクセイ", 400),
    ("会社", "カイシャ", 350),
    ("仕事", "シゴト", 350),
    ("問題", "モンダイ", 400),
    ("時間", "ジカン", 400),
    ("今日", "キョウ", 300),
    ("明日", "アシタ", 350),
    ("昨日", "キノウ", 350),
    ("今", "イマ", 300),
    ("人", "ヒト", 300),
    ("私", "ワタシ", 300),
    ("猫", "ネコ", 350),
    ("犬", "イヌ", 350),
    ("山", "ヤマ", 350),
    ("川", "カワ", 350),
    ("海", "ウミ", 350),
    ("空", "ソラ", 400),
    ("雨", "アメ", 400),
    ("水", "ミズ", 350),
    ("本", "ホン", 350),
    ("車", "クルマ", 350),
    ("電車", "デンシャ", 400),
    ("駅", "エキ", 350),
    ("道", "ミチ", 400),
    ("町", "マチ", 400),
    ("家", "イエ", 350),
    ("国", "クニ", 350),
    ("東京", "トウキョウ", 350),
    ("京都", "キョウト", 400),
    ("世界", "セカイ", 400),
    ("言葉", "コトバ", 400),
    ("意味", "イミ", 400),
    ("文章", "ブンショウ", 450),
    ("漢字", "カンジ", 350),
    ("仮名", "カナ", 450),
    ("振り仮名", "フリガナ", 1600),
    ("読み方", "ヨミカタ", 600),
    ("読み", "ヨミ", 500),
    ("音楽", "オンガク", 400),
    ("映画", "エイガ", 400),
    ("天気", "テンキ", 400),
    ("元気", "ゲンキ", 400),
    ("気持ち", "キモチ", 550),
    ("食べる", "タベル", 450),
    ("食べます", "タベマス", 500),
    ("飲む", "ノム", 450),
    ("行く", "イク", 400),
    ("行きます", "イキマス", 500),
    ("来る", "クル", 450),
    ("見る", "ミル", 450),
    ("読む", "ヨム", 450),
    ("書く", "カク", 450),
    ("話す", "ハナス", 450),
    ("聞く", "キク", 450),
    ("言う", "イウ", 450),
    ("思う", "オモウ", 500),
    ("難しい", "ムズカシイ", 500),
    ("新しい", "アタラシイ", 500),
    ("大きい", "オオキイ", 450),
    ("小さい", "チイサイ", 500),
];

/// Greedy longest-match tokenizer over the embedded lexicon
#[derive(Debug, Default)]
pub struct LexiconTokenizer;

impl LexiconTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Longest lexicon entry prefixing `rest`, if any
    fn best_match(rest: &str) -> Option<&'static (&'static str, &'static str, i64)> {
        LEXICON
            .iter()
            .filter(|(surface, _, _)| rest.starts_with(surface))
            .max_by_key(|(surface, _, _)| surface.len())
    }

    /// Consume a run of characters sharing `kind`, starting at `rest`
    fn run_len(rest: &str, kind: ScriptKind) -> usize {
        rest.char_indices()
            .find(|(_, c)| classify_char(*c) != kind)
            .map_or(rest.len(), |(i, _)| i)
    }
}

impl ReadingTokenizer for LexiconTokenizer {
    fn segment_raw(&self, text: &str) -> Result<Vec<RawToken>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];

            if let Some((surface, reading, cost)) = Self::best_match(rest) {
                tokens.push(RawToken {
                    surface: (*surface).to_string(),
                    reading: Some((*reading).to_string()),
                    cost: Some(*cost),
                });
                pos += surface.len();
                continue;
            }

            let first = rest.chars().next().map(classify_char);
            let Some(kind) = first else { break };
            let mut len = Self::run_len(rest, kind);
            if kind == ScriptKind::Kanji {
                // An unknown-kanji run ends where a lexicon word begins
                if let Some((i, _)) = rest[..len]
                    .char_indices()
                    .skip(1)
                    .find(|(i, _)| Self::best_match(&rest[*i..]).is_some())
                {
                    len = i;
                }
            }
            let surface = &rest[..len];

            let (reading, cost) = match kind {
                // Out-of-lexicon kanji: no reading, route to verification
                ScriptKind::Kanji => (None, UNKNOWN_KANJI_COST),
                // A katakana word reads as itself; the adapter's forcing
                // rule drops the reading again
                ScriptKind::Katakana => (Some(surface.to_string()), RUN_COST),
                ScriptKind::Hiragana | ScriptKind::Other => (None, RUN_COST),
            };

            tokens.push(RawToken {
                surface: surface.to_string(),
                reading,
                cost: Some(cost),
            });
            pos += len;
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<RawToken> {
        LexiconTokenizer::new().segment_raw(text).unwrap()
    }

    #[test]
    fn longest_match_wins() {
        // 日本語 must not split as 日本 + 語
        let tokens = segment("日本語");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].surface, "日本語");
        assert_eq!(tokens[0].reading.as_deref(), Some("ニホンゴ"));
    }

    #[test]
    fn sentence_splits_into_words_and_runs() {
        let surfaces: Vec<String> = segment("日本語を学習します")
            .into_iter()
            .map(|t| t.surface)
            .collect();
        assert_eq!(surfaces, vec!["日本語", "を", "学習", "します"]);
    }

    #[test]
    fn surfaces_cover_input() {
        for text in ["日本語を学習します", "abcカタカナ、ひらがな。", "未知熟語です"] {
            let rebuilt: String = segment(text).into_iter().map(|t| t.surface).collect();
            assert_eq!(rebuilt, text);
        }
    }

    #[test]
    fn unknown_kanji_run_has_no_reading_and_high_cost() {
        let tokens = segment("魑魅魍魎");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].reading, None);
        assert_eq!(tokens[0].cost, Some(UNKNOWN_KANJI_COST));
    }

    #[test]
    fn katakana_run_reads_as_itself() {
        let tokens = segment("カタカナ");
        assert_eq!(tokens[0].reading.as_deref(), Some("カタカナ"));
        assert_eq!(tokens[0].cost, Some(RUN_COST));
    }

    #[test]
    fn unknown_kanji_between_known_words() {
        let surfaces: Vec<String> = segment("私は魑魅を見る")
            .into_iter()
            .map(|t| t.surface)
            .collect();
        assert_eq!(surfaces, vec!["私", "は", "魑魅", "を", "見る"]);
    }

    #[test]
    fn kanji_run_stops_where_a_lexicon_word_begins() {
        let surfaces: Vec<String> = segment("魑日本語")
            .into_iter()
            .map(|t| t.surface)
            .collect();
        assert_eq!(surfaces, vec!["魑", "日本語"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = segment("日本語を学習します");
        let b = segment("日本語を学習します");
        let sa: Vec<_> = a.iter().map(|t| (&t.surface, &t.reading, t.cost)).collect();
        let sb: Vec<_> = b.iter().map(|t| (&t.surface, &t.reading, t.cost)).collect();
        assert_eq!(sa, sb);
    }
}
