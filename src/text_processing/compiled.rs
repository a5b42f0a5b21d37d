/// Per-language compiled matchers
///
/// Everything a rewrite stage needs from a `LanguagePatterns` value is turned
/// into ready-to-run regexes here, once per language. A `None` field means the
/// language has no vocabulary for that rewrite and the stage skips it.
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

use super::compound_numbers::addition_compound_pattern;
use crate::error::{NormalizerError, Result};
use crate::languages::{scales, DecimalSeparator, LanguagePatterns, PhraseTemplate};

/// A numeric operand after decimal normalization ("12", "2.5")
const OPERAND: &str = r"(\d+(?:[.,]\d+)?)";

/// A number that may still carry grouping separators ("1,000", "2,5")
const GROUPED_NUMBER: &str = r"(\d+(?:[.,]\d+)*)";

/// Matchers for spoken number words
pub struct NumberWordMatchers {
    /// Matches a protected phrase (`keep`) or a run of number words (`run`)
    pub run: Regex,
    /// Splits a run into words, with the optional connector before each (`conn`, `word`)
    pub token: Regex,
    /// Normalized word → value
    pub values: HashMap<String, u64>,
}

impl NumberWordMatchers {
    /// Value of a matched number word, tolerant of inner spacing
    pub fn value_of(&self, word: &str) -> Option<u64> {
        self.values.get(&normalize_key(word)).copied()
    }
}

/// Compiled matcher set for one language
pub struct CompiledLanguageRegex {
    /// The patterns this set was compiled from
    pub patterns: Arc<LanguagePatterns>,

    pub number_words: Option<NumberWordMatchers>,

    /// "<number> <scale> <addend>" with a guard for addends that belong to a
    /// percentage or fraction
    pub addition_compound: Regex,

    pub fraction_numeric: Option<Regex>,
    pub fraction_word: Option<Regex>,

    pub decimal: Option<Regex>,

    pub percent_of: Option<Regex>,
    pub percent_add: Option<Regex>,
    pub percent_subtract: Option<Regex>,
    pub percent_plus: Option<Regex>,
    pub percent_minus: Option<Regex>,

    pub phrase_add: Option<Regex>,
    pub phrase_subtract: Option<Regex>,
    pub phrase_multiply: Option<Regex>,
    pub phrase_divide: Option<Regex>,

    pub addition: Option<Regex>,
    pub subtraction: Option<Regex>,
    pub multiplication: Option<Regex>,
    pub division: Option<Regex>,
    pub percent_of_word: Option<Regex>,
    pub percentage: Option<Regex>,
    pub power: Option<Regex>,
    pub squared: Option<Regex>,
    pub sqrt: Option<Regex>,
    pub open_paren: Option<Regex>,
    pub close_paren: Option<Regex>,
}

impl CompiledLanguageRegex {
    /// Compile every matcher for a language
    pub fn compile(patterns: Arc<LanguagePatterns>) -> Result<Self> {
        let p = patterns.as_ref();
        let compiler = Compiler { language: &p.code };

        let of = word_alternation(&p.of_words);

        // "%" glyph or a spoken percentage word
        let mut percent_words = vec!["%".to_string()];
        percent_words.extend(p.percentage.iter().cloned());
        let pct = word_alternation(&percent_words);

        let mut plus_words = vec!["+".to_string()];
        plus_words.extend(p.addition.iter().cloned());
        let plus = word_alternation(&plus_words);

        let mut minus_words = vec!["-".to_string()];
        minus_words.extend(p.subtraction.iter().cloned());
        let minus = word_alternation(&minus_words);

        let add_verbs = word_alternation(&p.phrases.add.verbs);
        let add_connectives = word_alternation(&p.phrases.add.connectives);
        let subtract_verbs = word_alternation(&p.phrases.subtract.verbs);
        let subtract_connectives = word_alternation(&p.phrases.subtract.connectives);

        Ok(Self {
            number_words: compile_number_words(p, &compiler)?,

            addition_compound: compiler.compile(&addition_compound_pattern(pct.as_deref()))?,

            fraction_numeric: compiler.optional(of.as_ref().map(|of| {
                format!(r"(\d+)\s*/\s*(\d+)\s+{}\s+{}", of, GROUPED_NUMBER)
            }))?,
            fraction_word: compiler.optional(of.as_ref().map(|of| {
                format!(r"(\d+)\s+(\p{{L}}+)\s+{}\s+{}", of, GROUPED_NUMBER)
            }))?,

            decimal: compiler.optional(decimal_pattern(p))?,

            percent_of: compiler.optional(both(&pct, &of).map(|(pct, of)| {
                format!(r"{n}\s*{pct}\s+{of}\s+{n}(?:\s*%)?", n = OPERAND, pct = pct, of = of)
            }))?,
            percent_add: compiler.optional(
                both(&add_verbs, &add_connectives)
                    .zip(pct.as_ref())
                    .map(|((verbs, to), pct)| {
                        format!(
                            r"{verbs}\s+{n}\s*{pct}\s+{to}\s+{n}",
                            verbs = verbs,
                            n = OPERAND,
                            pct = pct,
                            to = to
                        )
                    }),
            )?,
            percent_subtract: compiler.optional(
                both(&subtract_verbs, &subtract_connectives)
                    .zip(pct.as_ref())
                    .map(|((verbs, from), pct)| {
                        format!(
                            r"{verbs}\s+{n}\s*{pct}\s+{from}\s+{n}",
                            verbs = verbs,
                            n = OPERAND,
                            pct = pct,
                            from = from
                        )
                    }),
            )?,
            percent_plus: compiler.optional(both(&plus, &pct).map(|(plus, pct)| {
                format!(r"{n}\s*{plus}\s*{n}\s*{pct}", n = OPERAND, plus = plus, pct = pct)
            }))?,
            percent_minus: compiler.optional(both(&minus, &pct).map(|(minus, pct)| {
                format!(r"{n}\s*{minus}\s*{n}\s*{pct}", n = OPERAND, minus = minus, pct = pct)
            }))?,

            phrase_add: compiler.optional(phrase_pattern(&p.phrases.add, pct.as_ref()))?,
            phrase_subtract: compiler.optional(phrase_pattern(&p.phrases.subtract, pct.as_ref()))?,
            phrase_multiply: compiler.optional(phrase_pattern(&p.phrases.multiply, pct.as_ref()))?,
            phrase_divide: compiler.optional(phrase_pattern(&p.phrases.divide, pct.as_ref()))?,

            addition: compiler.optional(word_alternation(&p.addition))?,
            subtraction: compiler.optional(word_alternation(&p.subtraction))?,
            multiplication: compiler.optional(word_alternation(&p.multiplication))?,
            division: compiler.optional(word_alternation(&p.division))?,
            percent_of_word: compiler.optional(word_alternation(&p.percent_of))?,
            percentage: compiler.optional(word_alternation(&p.percentage))?,
            power: compiler.optional(word_alternation(&p.power))?,
            squared: compiler.optional(word_alternation(&p.squared))?,
            sqrt: compiler.optional(word_alternation(&p.sqrt))?,
            open_paren: compiler.optional(word_alternation(&p.open_paren))?,
            close_paren: compiler.optional(word_alternation(&p.close_paren))?,

            patterns,
        })
    }

    pub fn language(&self) -> &str {
        &self.patterns.code
    }

    pub fn decimal_separator(&self) -> DecimalSeparator {
        self.patterns.decimal_separator
    }
}

struct Compiler<'a> {
    language: &'a str,
}

impl Compiler<'_> {
    fn compile(&self, pattern: &str) -> Result<Regex> {
        Regex::new(pattern).map_err(|e| NormalizerError::PatternCompile {
            language: self.language.to_string(),
            message: e.to_string(),
        })
    }

    fn optional(&self, pattern: Option<String>) -> Result<Option<Regex>> {
        pattern.map(|p| self.compile(&p)).transpose()
    }
}

fn both<'a>(a: &'a Option<String>, b: &'a Option<String>) -> Option<(&'a String, &'a String)> {
    a.as_ref().zip(b.as_ref())
}

fn compile_number_words(
    patterns: &LanguagePatterns,
    compiler: &Compiler<'_>,
) -> Result<Option<NumberWordMatchers>> {
    let mut values = HashMap::with_capacity(patterns.numbers.len());
    for (word, digits) in &patterns.numbers {
        let value = digits.parse::<u64>().map_err(|e| {
            NormalizerError::LanguagePack(format!(
                "'{}': number word '{}' has invalid value '{}': {}",
                patterns.code, word, digits, e
            ))
        })?;
        values.insert(normalize_key(word), value);
    }

    let keys: Vec<String> = values.keys().cloned().collect();
    let word = match word_alternation(&keys) {
        Some(word) => word,
        None => return Ok(None),
    };

    let connector = word_alternation(&patterns.number_connectors);
    let gap = match &connector {
        Some(conn) => format!(r"\s+(?:{}\s+)?", conn),
        None => r"\s+".to_string(),
    };
    let run = format!("{word}(?:{gap}{word})*", word = word, gap = gap);

    // Phrases that contain a number word but must survive intact ("pour cent", "mil millones")
    let protected: Vec<String> = patterns
        .percent_of
        .iter()
        .chain(patterns.percentage.iter())
        .cloned()
        .chain(scales::multi_word_scales())
        .filter(|phrase| phrase.trim().contains(char::is_whitespace))
        .collect();

    let run_pattern = match word_alternation(&protected) {
        Some(keep) => format!("(?P<keep>{})|(?P<run>{})", keep, run),
        None => format!("(?P<run>{})", run),
    };
    let token_pattern = match &connector {
        Some(conn) => format!(r"(?:(?P<conn>{})\s+)?(?P<word>{})", conn, word),
        None => format!("(?P<word>{})", word),
    };

    Ok(Some(NumberWordMatchers {
        run: compiler.compile(&run_pattern)?,
        token: compiler.compile(&token_pattern)?,
        values,
    }))
}

/// Spoken decimal point, plus the comma glyph for comma locales
///
/// Spoken words tolerate spacing ("3 virgule 5"); the glyph must sit between
/// digits so "1, 2" stays a list.
fn decimal_pattern(patterns: &LanguagePatterns) -> Option<String> {
    let spoken = word_alternation(&patterns.decimal_words).map(|w| format!(r"\s*{}\s*", w));
    let glyph = (patterns.decimal_separator == DecimalSeparator::Comma).then(|| ",".to_string());

    let separators: Vec<String> = spoken.into_iter().chain(glyph).collect();
    if separators.is_empty() {
        return None;
    }
    Some(format!(r"(\d)(?:{})(\d)", separators.join("|")))
}

/// "add A to B" and friends; the optional last group catches a percent sign
/// after B, in which case the phrase belongs to the percentage forms
fn phrase_pattern(template: &PhraseTemplate, percent: Option<&String>) -> Option<String> {
    if template.is_empty() {
        return None;
    }
    let verbs = word_alternation(&template.verbs)?;
    let connectives = word_alternation(&template.connectives)?;
    let trailing = percent
        .map(|pct| format!(r"(\s*{})?", pct))
        .unwrap_or_default();
    Some(format!(
        r"{verbs}\s+(\d+(?:\.\d+)?)\s+{conn}\s+(\d+(?:\.\d+)?){trailing}",
        verbs = verbs,
        conn = connectives,
        trailing = trailing
    ))
}

/// Lowercase and collapse inner whitespace of a vocabulary entry
pub(crate) fn normalize_key(word: &str) -> String {
    word.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Build a non-capturing alternation from a word list
///
/// Longer entries come first so "divided by" wins over "divided". Entries that
/// start or end with a letter or digit get word boundaries on that side; inner
/// spaces match any run of whitespace. Returns `None` for an empty list.
pub(crate) fn word_alternation(words: &[String]) -> Option<String> {
    let mut entries: Vec<String> = words
        .iter()
        .map(|w| normalize_key(w))
        .filter(|w| !w.is_empty())
        .collect();
    if entries.is_empty() {
        return None;
    }

    entries.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    entries.dedup();

    let alternatives: Vec<String> = entries.iter().map(|entry| bounded(entry)).collect();
    Some(format!("(?:{})", alternatives.join("|")))
}

fn bounded(entry: &str) -> String {
    let body = entry
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let starts_word = entry.chars().next().map_or(false, |c| c.is_alphanumeric());
    let ends_word = entry.chars().last().map_or(false, |c| c.is_alphanumeric());

    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        body,
        if ends_word { r"\b" } else { "" }
    )
}
