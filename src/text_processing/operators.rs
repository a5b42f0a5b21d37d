/// Verbal phrases and operator words → symbols
///
/// Phrase templates come first, since their verbs ("add", "multiply") are
/// also plain operator words:
/// - "add A to B" → "A + B"
/// - "subtract A from B" → "B - A"
/// - "multiply A by B" → "B * A"
/// - "divide A by B" → "B / A"
///
/// Then single words: "plus" → "+", "times" → "*", "percent" → "%", and so on.
use regex::{Captures, NoExpand, Regex};

use super::compiled::CompiledLanguageRegex;
use super::pipeline::RewriteStage;

pub struct OperatorWordStage;

impl RewriteStage for OperatorWordStage {
    fn name(&self) -> &'static str {
        "operators"
    }

    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        let mut result = text.to_string();

        result = phrase(&patterns.phrase_add, &result, |a, b| format!("{} + {}", a, b));
        result = phrase(&patterns.phrase_subtract, &result, |a, b| format!("{} - {}", b, a));
        result = phrase(&patterns.phrase_multiply, &result, |a, b| format!("{} * {}", b, a));
        result = phrase(&patterns.phrase_divide, &result, |a, b| format!("{} / {}", b, a));

        result = substitute(&patterns.addition, &result, " + ");
        result = substitute(&patterns.subtraction, &result, " - ");
        result = substitute(&patterns.multiplication, &result, " * ");
        result = substitute(&patterns.division, &result, " / ");

        // "percent of" with a "%" already present was handled as a percentage
        if !result.contains('%') {
            result = substitute(&patterns.percent_of_word, &result, " / 100 * ");
        }
        result = substitute(&patterns.percentage, &result, " % ");
        result = substitute(&patterns.power, &result, " ^ ");
        result = substitute(&patterns.squared, &result, " ^ 2 ");
        result = substitute(&patterns.sqrt, &result, " sqrt ");
        result = substitute(&patterns.open_paren, &result, " ( ");
        result = substitute(&patterns.close_paren, &result, " ) ");

        result
    }
}

/// Rewrite a two-operand phrase; a trailing percent leaves it for the
/// percentage forms
fn phrase<F>(pattern: &Option<Regex>, text: &str, format: F) -> String
where
    F: Fn(&str, &str) -> String,
{
    match pattern {
        Some(regex) => regex
            .replace_all(text, |caps: &Captures| {
                if caps.get(3).is_some() {
                    return caps[0].to_string();
                }
                format(&caps[1], &caps[2])
            })
            .into_owned(),
        None => text.to_string(),
    }
}

fn substitute(pattern: &Option<Regex>, text: &str, symbol: &str) -> String {
    match pattern {
        Some(regex) => regex.replace_all(text, NoExpand(symbol)).into_owned(),
        None => text.to_string(),
    }
}
