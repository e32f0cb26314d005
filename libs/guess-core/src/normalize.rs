//! Text normalization applied to guesses and reference answers before comparison.
//!
//! Two levels are provided:
//! - **light**: lower-case, strip diacritics, drop `, ! ? : ; .`, trim.
//! - **strict**: light, then drop a trailing annotation such as
//!   `" (Remastered 2011)"` or `" - Live at Wembley"`.
//!
//! Hyphens and apostrophes survive both levels; the distance metric absorbs
//! them instead.

use crate::types::NormalizationLevel;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Punctuation removed by [`light_normalize`].
pub const STRIPPED_PUNCTUATION: [char; 6] = [',', '!', '?', ':', ';', '.'];

/// Code points with the Unicode `Diacritic` property: combining accents left
/// by NFD, plus spacing marks such as `^`, `` ` `` and `·`.
static DIACRITICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Diacritic}").expect("diacritic pattern is valid"));

/// A space followed by a parenthetical, or a space-dash followed by anything.
/// Leftmost match wins and runs to the end of the line, where any of `\n`,
/// `\r`, U+2028 or U+2029 ends a line.
static TRAILING_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r" \([^\n\r\x{2028}\x{2029}]+\)[^\n\r\x{2028}\x{2029}]*| -[^\n\r\x{2028}\x{2029}]+",
    )
    .expect("annotation pattern is valid")
});

/// Lower-case, strip diacritics and light punctuation, trim.
pub fn light_normalize(text: &str) -> String {
    let decomposed: String = text.to_lowercase().nfd().collect();
    let folded: String = DIACRITICS
        .replace_all(&decomposed, "")
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    folded.trim().to_string()
}

/// Light normalization followed by removal of a trailing annotation.
pub fn strict_normalize(text: &str) -> String {
    let light = light_normalize(text);
    TRAILING_ANNOTATION
        .replace_all(&light, "")
        .trim()
        .to_string()
}

/// Normalize at the given level.
pub fn normalize(text: &str, level: NormalizationLevel) -> String {
    match level {
        NormalizationLevel::Light => light_normalize(text),
        NormalizationLevel::Strict => strict_normalize(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_light_strips_case_diacritics_and_punctuation() {
        assert_eq!(light_normalize("Café, Déjà-vu!"), "cafe deja-vu");
        assert_eq!(light_normalize("  Señor: Ñandú?  "), "senor nandu");
        assert_eq!(light_normalize("Mr. Brightside;"), "mr brightside");
    }

    #[test]
    fn test_light_keeps_hyphens_and_apostrophes() {
        assert_eq!(light_normalize("Rock'n'Roll"), "rock'n'roll");
        assert_eq!(light_normalize("Jay-Z"), "jay-z");
    }

    #[test]
    fn test_light_handles_precomposed_and_decomposed_input() {
        // "e" + U+0301 COMBINING ACUTE ACCENT
        assert_eq!(light_normalize("Beyonce\u{301}"), "beyonce");
        assert_eq!(light_normalize("Beyoncé"), "beyonce");
    }

    #[test]
    fn test_light_strips_spacing_diacritics() {
        assert_eq!(light_normalize("don`t"), "dont");
        assert_eq!(light_normalize("a^b"), "ab");
        assert_eq!(light_normalize("l·l"), "ll");
    }

    #[test]
    fn test_light_keeps_marks_outside_diacritic_set() {
        // Virama (U+094D) is a diacritic; the vowel sign E (U+0947) is not.
        assert_eq!(light_normalize("नमस्ते"), "नमसत\u{947}");
    }

    #[test]
    fn test_light_empty_and_blank() {
        assert_eq!(light_normalize(""), "");
        assert_eq!(light_normalize("   "), "");
        assert_eq!(light_normalize("?!."), "");
    }

    #[test]
    fn test_light_is_idempotent() {
        for s in ["Café, Déjà-vu!", "  MÖTLEY CRÜE  ", "Sigur Rós", "", "a . b"] {
            let once = light_normalize(s);
            assert_eq!(light_normalize(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn test_strict_removes_parenthetical_and_dash_annotations() {
        assert_eq!(strict_normalize("Title (Remix) - Live"), "title");
        assert_eq!(strict_normalize("Yesterday (Remastered 2009)"), "yesterday");
        assert_eq!(strict_normalize("Hurt - Live"), "hurt");
        assert_eq!(strict_normalize("Rock'n'Roll (Remastered)"), "rock'n'roll");
    }

    #[test]
    fn test_strict_first_match_wins() {
        // A legitimate " -" earlier in the string takes the parenthetical with it.
        assert_eq!(strict_normalize("Part one - two (live)"), "part one");
        assert_eq!(strict_normalize("Song (feat. X) - Edit"), "song");
    }

    #[test]
    fn test_strict_needs_content_after_marker() {
        // Hyphen without a preceding space is part of the word.
        assert_eq!(strict_normalize("Déjà-vu"), "deja-vu");
        // Empty parentheses and a bare trailing dash do not match.
        assert_eq!(strict_normalize("Song ()"), "song ()");
        assert_eq!(strict_normalize("Song -"), "song -");
        // No space before the parenthetical.
        assert_eq!(strict_normalize("Song(live)"), "song(live)");
    }

    #[test]
    fn test_strict_annotation_stops_at_line_terminators() {
        assert_eq!(strict_normalize("title - a\rb"), "title\rb");
        assert_eq!(strict_normalize("title (a)\u{2028}b"), "title\u{2028}b");
        assert_eq!(strict_normalize("title - a\u{2029}b"), "title\u{2029}b");
        assert_eq!(strict_normalize("one - a\ntwo (b)"), "one\ntwo");
    }

    #[test]
    fn test_strict_is_idempotent_and_never_lengthens() {
        for s in [
            "Title (Remix) - Live",
            "Part one - two (live)",
            "Song ()",
            "Song -",
            "  A - - B  ",
            "Plain",
            "",
        ] {
            let light = light_normalize(s);
            let once = strict_normalize(s);
            assert_eq!(strict_normalize(&once), once, "input {:?}", s);
            assert!(light.starts_with(&once), "{:?} is not a prefix of {:?}", once, light);
        }
    }

    #[test]
    fn test_normalize_dispatches_on_level() {
        assert_eq!(normalize("Hurt - Live", NormalizationLevel::Light), "hurt - live");
        assert_eq!(normalize("Hurt - Live", NormalizationLevel::Strict), "hurt");
    }
}
