use std::collections::HashMap;
use std::sync::OnceLock;

static NUMBER_WORDS: OnceLock<HashMap<&'static str, u64>> = OnceLock::new();

/// Retrieves or initializes the cardinal-word table.
///
/// Covers the vocabulary speech-to-text emits for octets: units, teens,
/// tens multiples and "hundred". Read-only after first use.
fn get_number_words() -> &'static HashMap<&'static str, u64> {
    NUMBER_WORDS.get_or_init(|| {
        HashMap::from([
            ("zero", 0),
            ("one", 1),
            ("two", 2),
            ("three", 3),
            ("four", 4),
            ("five", 5),
            ("six", 6),
            ("seven", 7),
            ("eight", 8),
            ("nine", 9),
            ("ten", 10),
            ("eleven", 11),
            ("twelve", 12),
            ("thirteen", 13),
            ("fourteen", 14),
            ("fifteen", 15),
            ("sixteen", 16),
            ("seventeen", 17),
            ("eighteen", 18),
            ("nineteen", 19),
            ("twenty", 20),
            ("thirty", 30),
            ("forty", 40),
            ("fifty", 50),
            ("sixty", 60),
            ("seventy", 70),
            ("eighty", 80),
            ("ninety", 90),
            ("hundred", 100),
        ])
    })
}

/// Look up the value of a single cardinal word (expects lowercase input).
pub fn value_of(word: &str) -> Option<u64> {
    get_number_words().get(word).copied()
}

/// A non-zero multiple of ten, i.e. a word that can open a
/// compressed-decimal phrase ("sixty seven six").
pub fn is_tens_value(value: u64) -> bool {
    value != 0 && value % 10 == 0
}
