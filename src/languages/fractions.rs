/// Fraction words of every supported language, mapped to their denominator
///
/// One flat table for all locales: the word itself disambiguates. Plurals,
/// unaccented spellings and common mis-hearings are listed on purpose.
use lazy_static::lazy_static;
use std::collections::HashMap;

const FRACTION_WORDS: &[(&str, u32)] = &[
    // English
    ("half", 2),
    ("halves", 2),
    ("halfs", 2),
    ("third", 3),
    ("thirds", 3),
    ("fourth", 4),
    ("fourths", 4),
    ("forth", 4),
    ("forths", 4),
    ("quarter", 4),
    ("quarters", 4),
    ("fifth", 5),
    ("fifths", 5),
    ("sixth", 6),
    ("sixths", 6),
    ("seventh", 7),
    ("sevenths", 7),
    ("eighth", 8),
    ("eighths", 8),
    ("eights", 8),
    ("ninth", 9),
    ("ninths", 9),
    ("nineth", 9),
    ("nineths", 9),
    ("tenth", 10),
    ("tenths", 10),
    // French
    ("demi", 2),
    ("demis", 2),
    ("moitié", 2),
    ("moitie", 2),
    ("tiers", 3),
    ("quart", 4),
    ("quarts", 4),
    ("cinquième", 5),
    ("cinquièmes", 5),
    ("cinquieme", 5),
    ("sixième", 6),
    ("sixièmes", 6),
    ("septième", 7),
    ("septièmes", 7),
    ("huitième", 8),
    ("huitièmes", 8),
    ("neuvième", 9),
    ("neuvièmes", 9),
    ("dixième", 10),
    ("dixièmes", 10),
    // Spanish
    ("medio", 2),
    ("medios", 2),
    ("tercio", 3),
    ("tercios", 3),
    ("cuarto", 4),
    ("cuartos", 4),
    ("quinto", 5),
    ("quintos", 5),
    ("sexto", 6),
    ("sextos", 6),
    ("séptimo", 7),
    ("séptimos", 7),
    ("septimo", 7),
    ("octavo", 8),
    ("octavos", 8),
    ("noveno", 9),
    ("novenos", 9),
    ("décimo", 10),
    ("décimos", 10),
    ("decimo", 10),
    ("decimos", 10),
    // Portuguese
    ("meio", 2),
    ("meios", 2),
    ("terço", 3),
    ("terços", 3),
    ("terco", 3),
    ("tercos", 3),
    ("quarto", 4),
    ("quartos", 4),
    ("sétimo", 7),
    ("sétimos", 7),
    ("oitavo", 8),
    ("oitavos", 8),
    ("nono", 9),
    ("nonos", 9),
    // German
    ("halb", 2),
    ("halbe", 2),
    ("halbes", 2),
    ("drittel", 3),
    ("viertel", 4),
    ("fünftel", 5),
    ("fuenftel", 5),
    ("sechstel", 6),
    ("siebtel", 7),
    ("achtel", 8),
    ("neuntel", 9),
    ("zehntel", 10),
    // Italian
    ("mezzo", 2),
    ("mezzi", 2),
    ("terzo", 3),
    ("terzi", 3),
    ("quarti", 4),
    ("quinti", 5),
    ("sesto", 6),
    ("sesti", 6),
    ("settimo", 7),
    ("settimi", 7),
    ("ottavo", 8),
    ("ottavi", 8),
    ("noni", 9),
    ("decimi", 10),
];

lazy_static! {
    static ref FRACTION_MAP: HashMap<&'static str, u32> = FRACTION_WORDS.iter().copied().collect();
}

/// Denominator for a spoken fraction word ("fourths" → 4)
pub fn fraction_denominator(word: &str) -> Option<u32> {
    FRACTION_MAP.get(word.trim().to_lowercase().as_str()).copied()
}

/// All fraction words, for building matchers
pub fn fraction_words() -> Vec<String> {
    FRACTION_WORDS.iter().map(|(word, _)| word.to_string()).collect()
}
