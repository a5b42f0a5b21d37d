/// Scale words ("million", "billón", ...) and their power of ten
///
/// Short and long scale coexist: "billion" is 10^9 while "billón" is 10^12.
/// The table is shared by every language; the word decides the value.
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const SCALE_WORDS: &[(&str, u32)] = &[
    // 10^6
    ("million", 6),
    ("millions", 6),
    ("millionen", 6),
    ("millón", 6),
    ("millon", 6),
    ("millones", 6),
    ("milhão", 6),
    ("milhao", 6),
    ("milhões", 6),
    ("milhoes", 6),
    ("milione", 6),
    ("milioni", 6),
    ("milliard", 6),
    ("milliards", 6),
    ("milliarde", 6),
    ("milliarden", 6),
    // 10^9
    ("billion", 9),
    ("billions", 9),
    ("mil millones", 9),
    ("bilhão", 9),
    ("bilhao", 9),
    ("bilhões", 9),
    ("bilhoes", 9),
    ("miliardo", 9),
    ("miliardi", 9),
    // 10^12
    ("billón", 12),
    ("billon", 12),
    ("billones", 12),
    ("trillion", 12),
    ("trillions", 12),
    ("trilhão", 12),
    ("trilhao", 12),
    ("trilhões", 12),
    ("trilhoes", 12),
    ("trillione", 12),
    ("trillioni", 12),
];

lazy_static! {
    static ref SCALE_MAP: HashMap<&'static str, u32> = SCALE_WORDS.iter().copied().collect();
}

/// Power of ten for a scale word, tolerant of case and inner spacing
pub fn scale_exponent(word: &str) -> Option<u32> {
    let key = word
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    SCALE_MAP.get(key.as_str()).copied()
}

/// All scale words, for building matchers
pub fn scale_words() -> Vec<String> {
    SCALE_WORDS.iter().map(|(word, _)| word.to_string()).collect()
}

/// Scale phrases made of several words ("mil millones")
pub fn multi_word_scales() -> Vec<String> {
    SCALE_WORDS
        .iter()
        .filter(|(word, _)| word.contains(' '))
        .map(|(word, _)| word.to_string())
        .collect()
}
