/// Scale-word numbers → plain digits
///
/// Two passes, addition first:
/// - "1 million 250,000" → "1250000"
/// - "2.5 million" → "2500000"
///
/// Arithmetic is done on digit strings, so "0.1 million" is exactly "100000".
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::compiled::{word_alternation, CompiledLanguageRegex};
use super::pipeline::RewriteStage;
use crate::languages::fractions::fraction_words;
use crate::languages::scales::{scale_exponent, scale_words};
use crate::languages::DecimalSeparator;

lazy_static! {
    static ref SCALE: String = word_alternation(&scale_words()).unwrap_or_default();
    static ref FRACTION: String = word_alternation(&fraction_words()).unwrap_or_default();

    /// <number> <scale>
    static ref SIMPLE_COMPOUND: Regex = Regex::new(&format!(
        r"([0-9]+(?:[.,][0-9]+)*)\s+({scale})",
        scale = *SCALE
    ))
    .unwrap();
}

/// <number> <scale> <addend>, with whatever follows the addend that would
/// make summing wrong
///
/// `percent` is the language's percentage alternation (glyph included). The
/// guard group catches a fraction bar, a decimal part, a percentage, another
/// scale word or a fraction word.
pub(crate) fn addition_compound_pattern(percent: Option<&str>) -> String {
    let percent = percent.unwrap_or("%");
    format!(
        r"([0-9]+(?:[.,][0-9]+)*)\s+({scale})\s+([0-9]{{1,3}}(?:[.,][0-9]{{3}})+|[0-9]+)(/|[.,][0-9]|\s*{pct}|\s+{scale}|\s+{fraction})?",
        scale = *SCALE,
        pct = percent,
        fraction = *FRACTION
    )
}

pub struct CompoundNumberStage;

impl RewriteStage for CompoundNumberStage {
    fn name(&self) -> &'static str {
        "compound_numbers"
    }

    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        let separator = patterns.decimal_separator();
        let result = resolve_addition_compounds(&patterns.addition_compound, text, separator);
        resolve_simple_compounds(&result, separator)
    }
}

fn resolve_addition_compounds(
    pattern: &Regex,
    text: &str,
    separator: DecimalSeparator,
) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            let scaled = match scaled_value(&caps[1], &caps[2], separator) {
                Some(value) => value,
                None => return caps[0].to_string(),
            };

            // The addend belongs to something else; only scale the leading part
            if let Some(trailing) = caps.get(4) {
                return format!("{} {}{}", scaled, &caps[3], trailing.as_str());
            }

            let addend: String = caps[3].chars().filter(|c| c.is_ascii_digit()).collect();
            add_integer(&scaled, &addend).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn resolve_simple_compounds(text: &str, separator: DecimalSeparator) -> String {
    SIMPLE_COMPOUND
        .replace_all(text, |caps: &Captures| {
            scaled_value(&caps[1], &caps[2], separator).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// `number × 10^scale` as a digit string
fn scaled_value(number: &str, scale: &str, separator: DecimalSeparator) -> Option<String> {
    let exponent = scale_exponent(scale)?;
    let (integer, fraction) = split_leading_number(number, separator)?;
    Some(shift_decimal(&integer, &fraction, exponent))
}

/// Split a leading number into integer and fraction digits
///
/// Grouping separators of the locale are dropped; more than one decimal
/// separator means the number is not understood.
fn split_leading_number(raw: &str, separator: DecimalSeparator) -> Option<(String, String)> {
    let (grouping, decimal) = match separator {
        DecimalSeparator::Period => (',', '.'),
        DecimalSeparator::Comma => ('.', ','),
    };

    let cleaned: String = raw.chars().filter(|&c| c != grouping).collect();
    let mut parts = cleaned.split(decimal);
    let integer = parts.next()?.to_string();
    let fraction = parts.next().unwrap_or_default().to_string();
    if parts.next().is_some() || integer.is_empty() {
        return None;
    }

    Some((integer, fraction))
}

/// Move the decimal point `exponent` places to the right
fn shift_decimal(integer: &str, fraction: &str, exponent: u32) -> String {
    let exponent = exponent as usize;
    let mut digits = format!("{}{}", integer, fraction);
    let point = integer.len() + exponent;

    if digits.len() < point {
        digits.push_str(&"0".repeat(point - digits.len()));
    }

    let (whole, rest) = digits.split_at(point);
    let whole = whole.trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    let rest = rest.trim_end_matches('0');

    if rest.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, rest)
    }
}

/// Add a plain integer to a (possibly fractional) digit string
fn add_integer(value: &str, addend: &str) -> Option<String> {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };

    let sum = whole
        .parse::<u128>()
        .ok()?
        .checked_add(addend.parse::<u128>().ok()?)?;

    Some(match fraction {
        Some(fraction) => format!("{}.{}", sum, fraction),
        None => sum.to_string(),
    })
}
