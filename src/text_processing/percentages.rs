/// Percentage phrases → parenthesized formulas
///
/// | Phrase                | Formula                  |
/// |-----------------------|--------------------------|
/// | add X% to Y           | (Y * (1 + X / 100))      |
/// | subtract X% from Y    | (Y * (1 - X / 100))      |
/// | X% of Y               | (Y * X / 100)            |
/// | X + Y%                | (X * (1 + Y / 100))      |
/// | X - Y%                | (X * (1 - Y / 100))      |
///
/// The verb forms go first: in French and Spanish the "from" connective is
/// also the "of" word ("retire 10% de 200").
use regex::{Captures, Regex};

use super::compiled::CompiledLanguageRegex;
use super::pipeline::RewriteStage;

pub struct PercentageStage;

impl RewriteStage for PercentageStage {
    fn name(&self) -> &'static str {
        "percentages"
    }

    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        let mut result = text.to_string();

        result = apply(&patterns.percent_add, &result, |x, y| {
            format!("({} * (1 + {} / 100))", y, x)
        });
        result = apply(&patterns.percent_subtract, &result, |x, y| {
            format!("({} * (1 - {} / 100))", y, x)
        });
        result = apply(&patterns.percent_of, &result, |x, y| {
            format!("({} * {} / 100)", y, x)
        });
        resolve_plus_minus(&result, patterns)
    }
}

/// The "X + Y%" and "X - Y%" forms
///
/// Cleanup runs these again: a filler word between the operands ("5 um plus
/// 3 percent") only disappears there.
pub(crate) fn resolve_plus_minus(text: &str, patterns: &CompiledLanguageRegex) -> String {
    let result = apply(&patterns.percent_plus, text, |x, y| {
        format!("({} * (1 + {} / 100))", x, y)
    });
    apply(&patterns.percent_minus, &result, |x, y| {
        format!("({} * (1 - {} / 100))", x, y)
    })
}

/// Rewrite every match of a two-operand pattern with `format(first, second)`
fn apply<F>(pattern: &Option<Regex>, text: &str, format: F) -> String
where
    F: Fn(&str, &str) -> String,
{
    match pattern {
        Some(regex) => regex
            .replace_all(text, |caps: &Captures| {
                format(&clean_numeral(&caps[1]), &clean_numeral(&caps[2]))
            })
            .into_owned(),
        None => text.to_string(),
    }
}

/// Stray spaces removed, decimal comma turned into a period
fn clean_numeral(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}
