/// Spoken number words → digits
///
/// Runs of number words are folded into a single value using the usual
/// place-value rules:
/// - "twenty five" → 25
/// - "two hundred and fifty" → 250
/// - "three thousand four" → 3004
/// - "five three" → "5 3" (a unit cannot extend a unit)
use regex::Captures;

use super::compiled::{CompiledLanguageRegex, NumberWordMatchers};
use super::pipeline::RewriteStage;

pub struct NumberWordStage;

impl RewriteStage for NumberWordStage {
    fn name(&self) -> &'static str {
        "number_words"
    }

    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        match &patterns.number_words {
            Some(numbers) => rewrite_number_words(text, numbers),
            None => text.to_string(),
        }
    }
}

fn rewrite_number_words(text: &str, numbers: &NumberWordMatchers) -> String {
    numbers
        .run
        .replace_all(text, |caps: &Captures| {
            if caps.name("keep").is_some() {
                return caps[0].to_string();
            }
            decode_run(&caps[0], numbers).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// One word of a run and the connector spoken before it, if any
struct Token<'a> {
    value: u64,
    connector: Option<&'a str>,
}

fn decode_run(run: &str, numbers: &NumberWordMatchers) -> Option<String> {
    let mut tokens = Vec::new();
    for caps in numbers.token.captures_iter(run) {
        let word = caps.name("word")?;
        tokens.push(Token {
            value: numbers.value_of(word.as_str())?,
            connector: caps.name("conn").map(|m| m.as_str()),
        });
    }
    if tokens.is_empty() {
        return None;
    }

    Some(NumberAccumulator::fold(&tokens))
}

/// Folds number word values into one or more numbers
#[derive(Default)]
struct NumberAccumulator<'a> {
    output: String,
    total: u64,
    current: u64,
    pending: bool,
    /// Connector to print before the next emitted number
    separator: Option<&'a str>,
}

impl<'a> NumberAccumulator<'a> {
    fn fold(tokens: &[Token<'a>]) -> String {
        let mut acc = Self::default();

        for token in tokens {
            let v = token.value;

            if v == 0 {
                acc.break_before(token);
                acc.emit(0);
            } else if v >= 1000 {
                if acc.total > 0 {
                    // A second thousands group starts a new number
                    let current = acc.current;
                    acc.current = 0;
                    acc.break_before(token);
                    acc.current = current;
                }
                acc.total = acc.current.max(1).saturating_mul(v);
                acc.current = 0;
                acc.pending = true;
            } else if v == 100 {
                if acc.current >= 100 {
                    acc.break_before(token);
                }
                acc.current = acc.current.max(1).saturating_mul(100);
                acc.pending = true;
            } else {
                if !can_extend(acc.current, v) {
                    acc.break_before(token);
                }
                acc.current += v;
                acc.pending = true;
            }
        }

        acc.flush();
        acc.output
    }

    /// Close the pending number; the token's connector goes in between
    fn break_before(&mut self, token: &Token<'a>) {
        self.flush();
        self.separator = token.connector;
    }

    /// Emit the pending number, if any, and reset
    fn flush(&mut self) {
        if self.pending {
            let value = self.total.saturating_add(self.current);
            self.emit(value);
        }
        self.total = 0;
        self.current = 0;
        self.pending = false;
    }

    fn emit(&mut self, value: u64) {
        let separator = self.separator.take();
        if !self.output.is_empty() {
            self.output.push(' ');
            if let Some(separator) = separator {
                self.output.push_str(separator);
                self.output.push(' ');
            }
        }
        self.output.push_str(&value.to_string());
    }
}

/// Whether `v` can be added to `current` as a lower place ("twenty" + "five")
fn can_extend(current: u64, v: u64) -> bool {
    current == 0 || v < place_value(current)
}

/// Largest power of ten dividing `n` (n > 0)
fn place_value(mut n: u64) -> u64 {
    let mut place = 1;
    while n % 10 == 0 {
        n /= 10;
        place *= 10;
    }
    place
}
