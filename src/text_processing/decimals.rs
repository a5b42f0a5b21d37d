/// Decimal and thousands separators
///
/// Output numerals use a period as decimal point and carry no grouping.
/// The steps run in a fixed order; stripping 3-digit comma groups before
/// reading a lone comma as a decimal point is what tells "1,234" from "1,25".
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::compiled::CompiledLanguageRegex;
use super::pipeline::RewriteStage;
use crate::languages::DecimalSeparator;

lazy_static! {
    /// "3 . 5" → "3.5"
    static ref SPACED_POINT: Regex = Regex::new(r"(\d)\s*\.\s*(\d)").unwrap();

    /// "1,234,567" (comma-grouped thousands)
    static ref COMMA_GROUPS: Regex = Regex::new(r"\b\d{1,3}(?:,\d{3})+\b").unwrap();

    /// "12,5" once grouping is gone
    static ref DECIMAL_COMMA: Regex = Regex::new(r"(\d+),(\d{1,2})\b").unwrap();

    /// "1.234,5" in comma locales (period-grouped thousands before a decimal comma)
    static ref PERIOD_GROUPS: Regex = Regex::new(r"\b\d{1,3}(?:\.\d{3})+,\d").unwrap();
}

pub struct DecimalStage;

impl RewriteStage for DecimalStage {
    fn name(&self) -> &'static str {
        "decimals"
    }

    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        let mut result = fold_unicode_spaces(text);

        if let Some(decimal) = &patterns.decimal {
            if patterns.decimal_separator() == DecimalSeparator::Comma {
                result = strip_period_groups(&result);
            }
            result = decimal.replace_all(&result, "${1}.${2}").into_owned();
        }

        result = SPACED_POINT.replace_all(&result, "${1}.${2}").into_owned();
        result = COMMA_GROUPS
            .replace_all(&result, |caps: &Captures| caps[0].replace(',', ""))
            .into_owned();
        DECIMAL_COMMA.replace_all(&result, "${1}.${2}").into_owned()
    }
}

/// No-break, narrow no-break, figure and thin spaces → ASCII space
fn fold_unicode_spaces(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{00A0}' | '\u{202F}' | '\u{2007}' | '\u{2009}' => ' ',
            _ => c,
        })
        .collect()
}

fn strip_period_groups(text: &str) -> String {
    PERIOD_GROUPS
        .replace_all(text, |caps: &Captures| caps[0].replace('.', ""))
        .into_owned()
}
