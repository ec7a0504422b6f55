//! Converts a single spoken numeral phrase into its decimal string value.
//!
//! Speech-to-text hands us phrases like "sixty seven", "one nine two" or
//! "two hundred", sometimes with digit runs mixed in ("1 nine 2"). Each
//! phrase is tokenized and matched against one grammar rule; the rules are
//! explicit variants so their priority and consumption semantics stay
//! visible instead of being folded into the accumulator loop.

use spokr_common::{debug, words};

/// Tagged outcome of one conversion attempt.
///
/// `Unchanged` carries the input verbatim and means the phrase did not
/// convert: nothing in it was recognizable, or the accumulated value is
/// unrepresentable. Callers that need a usable octet must treat it as
/// "did not convert" rather than inspect the string again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Converted(String),
    Unchanged(String),
}

impl Conversion {
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Converted(value) | Self::Unchanged(value) => value,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Self::Converted(value) | Self::Unchanged(value) => value,
        }
    }
}

/// One whitespace-delimited token of a numeral phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumeralToken<'a> {
    /// A recognized cardinal word, carrying its value.
    Word(u64),
    /// A run of ASCII digits.
    Digits(&'a str),
    /// Anything else. Skipped by accumulation, never an error.
    Unknown,
}

impl<'a> NumeralToken<'a> {
    fn classify(raw: &'a str) -> Self {
        if let Some(value) = words::value_of(raw) {
            return Self::Word(value);
        }
        if !raw.is_empty() && raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Self::Digits(raw);
        }
        Self::Unknown
    }

    /// The token's value when it reads as a single spoken digit (0-9).
    fn single_digit(&self) -> Option<u64> {
        let value = match self {
            Self::Word(value) => *value,
            Self::Digits(digits) => digits.parse::<u64>().ok()?,
            Self::Unknown => return None,
        };
        (value <= 9).then_some(value)
    }
}

/// The grammar rule selected for a token sequence.
enum Phrase {
    /// "sixty seven six" -> 67.6: a tens word, a unit, and a fraction
    /// digit. Consumes exactly three tokens; anything after is ignored.
    CompressedDecimal { tens: u64, unit: u64, fraction: u64 },
    /// "one nine two" -> 192: every token is a single digit, read as
    /// concatenated digits rather than a sum.
    DigitSpelling(Vec<u64>),
    /// Everything else: additive accumulation with the "hundred" rule.
    Accumulate,
}

fn classify_phrase(tokens: &[NumeralToken]) -> Phrase {
    if let [NumeralToken::Word(first), NumeralToken::Word(second), NumeralToken::Word(third), ..] =
        tokens
        && words::is_tens_value(*first)
        && *second < 10
    {
        return Phrase::CompressedDecimal {
            tens: *first,
            unit: *second,
            fraction: *third,
        };
    }

    if !tokens.is_empty()
        && let Some(digits) = tokens
            .iter()
            .map(NumeralToken::single_digit)
            .collect::<Option<Vec<u64>>>()
    {
        return Phrase::DigitSpelling(digits);
    }

    Phrase::Accumulate
}

/// Additive accumulation over the tokens.
///
/// "hundred" multiplies a positive accumulator by 100 (else sets it to
/// 100), every occurrence applying the same rule; other words and digit
/// runs add. Returns `None` when the value cannot be represented.
fn accumulate(tokens: &[NumeralToken]) -> Option<u64> {
    let mut current: u64 = 0;

    for token in tokens {
        current = match token {
            NumeralToken::Word(100) if current > 0 => current.checked_mul(100)?,
            NumeralToken::Word(value) => current.checked_add(*value)?,
            NumeralToken::Digits(digits) => current.checked_add(digits.parse::<u64>().ok()?)?,
            NumeralToken::Unknown => current,
        };
    }

    Some(current)
}

/// Converts a spoken numeral phrase to its decimal string value.
///
/// A trimmed pure-digit input short-circuits and comes back untouched.
/// Otherwise the phrase is lowercased, the literal word "point" becomes a
/// decimal separator, and the whitespace tokens are run through one
/// grammar rule (see [`Phrase`]).
pub fn convert(phrase: &str) -> Conversion {
    let trimmed = phrase.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Conversion::Converted(trimmed.to_string());
    }

    debug!(phrase, "converting numeral phrase");

    let normalized = phrase.to_lowercase().replace("point", ".");
    let tokens: Vec<NumeralToken> = normalized
        .split_whitespace()
        .map(NumeralToken::classify)
        .collect();

    // A phrase with nothing recognizable passes through instead of
    // accumulating to zero; individual stray tokens are still skipped
    if tokens
        .iter()
        .all(|token| matches!(token, NumeralToken::Unknown))
    {
        return Conversion::Unchanged(phrase.to_string());
    }

    let converted = match classify_phrase(&tokens) {
        Phrase::CompressedDecimal {
            tens,
            unit,
            fraction,
        } => {
            debug!(tens, unit, fraction, "compressed decimal phrase");
            Some(format!("{}.{}", tens + unit, fraction))
        }
        Phrase::DigitSpelling(digits) => Some(
            digits
                .iter()
                .map(u64::to_string)
                .collect::<Vec<String>>()
                .concat(),
        ),
        Phrase::Accumulate => accumulate(&tokens).map(|total| total.to_string()),
    };

    match converted {
        Some(value) => Conversion::Converted(value),
        None => {
            debug!(phrase, "phrase not representable, passing through");
            Conversion::Unchanged(phrase.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(phrase: &str) -> String {
        match convert(phrase) {
            Conversion::Converted(value) => value,
            Conversion::Unchanged(original) => {
                panic!("phrase {original:?} unexpectedly passed through")
            }
        }
    }

    #[test]
    fn test_pure_digit_strings_come_back_unchanged() {
        for input in ["0", "7", "67", "255", "300", "0042"] {
            assert_eq!(converted(input), input);
        }
        // Surrounding whitespace is trimmed, nothing else
        assert_eq!(converted(" 192 "), "192");
    }

    #[test]
    fn test_compressed_decimal_phrases() {
        assert_eq!(converted("sixty seven six"), "67.6");
        assert_eq!(converted("ten six three"), "16.3");
        // The pattern consumes three tokens and ignores the rest
        assert_eq!(converted("sixty seven six nine"), "67.6");
        // "zero" cannot open the pattern; these read as spelled digits
        assert_eq!(converted("zero seven six"), "076");
    }

    #[test]
    fn test_digit_spelling_phrases() {
        assert_eq!(converted("one nine two"), "192");
        assert_eq!(converted("one six eight"), "168");
        assert_eq!(converted("zero"), "0");
        assert_eq!(converted("zero zero seven"), "007");
        // Digit runs participate when they read as single digits
        assert_eq!(converted("1 nine 2"), "192");
    }

    #[test]
    fn test_accumulation_phrases() {
        assert_eq!(converted("twenty five"), "25");
        assert_eq!(converted("one hundred"), "100");
        assert_eq!(converted("two hundred"), "200");
        assert_eq!(converted("two hundred fifty five"), "255");
        assert_eq!(converted("hundred"), "100");
        // Repeated "hundred" keeps multiplying a positive accumulator
        assert_eq!(converted("two hundred hundred"), "20000");
    }

    #[test]
    fn test_unrecognized_tokens_are_skipped() {
        assert_eq!(converted("uh twenty um five"), "25");
        assert_eq!(converted("the number one"), "1");
    }

    #[test]
    fn test_unrecognizable_phrases_pass_through() {
        for phrase in ["banana", "%$#@", "point", ""] {
            assert_eq!(
                convert(phrase),
                Conversion::Unchanged(phrase.to_string()),
                "phrase {phrase:?} has nothing to convert"
            );
        }
    }

    #[test]
    fn test_point_reads_as_decimal_separator() {
        // "point" never reaches the accumulator as a countable token
        assert_eq!(converted("one point five"), "6");
        assert_eq!(converted("Twenty POINT five"), "25");
    }

    #[test]
    fn test_overflowing_phrases_pass_through() {
        let huge = "99999999999999999999999999 one";
        assert_eq!(
            convert(huge),
            Conversion::Unchanged(huge.to_string()),
            "unrepresentable values must come back tagged, not panic"
        );
    }

    #[test]
    fn test_conversion_accessors() {
        let conversion = convert("twenty five");
        assert!(conversion.is_converted());
        assert_eq!(conversion.value(), "25");
        assert_eq!(conversion.into_value(), "25");
    }
}
