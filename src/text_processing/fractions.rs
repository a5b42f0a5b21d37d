/// Fractions of a quantity
///
/// - "1/2 of 80" → "((1/2) * 80)"
/// - "3 fourths of 100" → "((3/4) * 100)"
///
/// A fraction word missing from the fraction map leaves the phrase as it was.
use regex::Captures;

use super::compiled::CompiledLanguageRegex;
use super::pipeline::RewriteStage;
use crate::languages::fractions::fraction_denominator;

pub struct FractionStage;

impl RewriteStage for FractionStage {
    fn name(&self) -> &'static str {
        "fractions"
    }

    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        let mut result = text.to_string();

        if let Some(numeric) = &patterns.fraction_numeric {
            result = numeric
                .replace_all(&result, |caps: &Captures| {
                    format!("(({}/{}) * {})", &caps[1], &caps[2], &caps[3])
                })
                .into_owned();
        }

        if let Some(word) = &patterns.fraction_word {
            result = word
                .replace_all(&result, |caps: &Captures| match fraction_denominator(&caps[2]) {
                    Some(denominator) => {
                        format!("(({}/{}) * {})", &caps[1], denominator, &caps[3])
                    }
                    None => caps[0].to_string(),
                })
                .into_owned();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_processing::test_support::compiled;

    fn rewrite(text: &str, code: &str) -> String {
        FractionStage.rewrite(text, &compiled(code))
    }

    #[test]
    fn test_numeric_fraction() {
        assert_eq!(rewrite("1/2 of 80", "en"), "((1/2) * 80)");
        assert_eq!(rewrite("3 / 4 of 200", "en"), "((3/4) * 200)");
    }

    #[test]
    fn test_word_fraction() {
        assert_eq!(rewrite("3 fourths of 100", "en"), "((3/4) * 100)");
        assert_eq!(rewrite("1 half of 10", "en"), "((1/2) * 10)");
        assert_eq!(rewrite("2 forths of 8", "en"), "((2/4) * 8)");
    }

    #[test]
    fn test_word_fraction_other_languages() {
        assert_eq!(rewrite("3 quarts de 100", "fr"), "((3/4) * 100)");
        assert_eq!(rewrite("2 tercios de 90", "es"), "((2/3) * 90)");
        assert_eq!(rewrite("2 terços de 90", "pt"), "((2/3) * 90)");
        assert_eq!(rewrite("3 viertel von 20", "de"), "((3/4) * 20)");
        assert_eq!(rewrite("2 terzi di 60", "it"), "((2/3) * 60)");
    }

    #[test]
    fn test_grouped_quantity_kept_for_decimal_stage() {
        assert_eq!(rewrite("1/4 of 1,000", "en"), "((1/4) * 1,000)");
    }

    #[test]
    fn test_unknown_fraction_word_untouched() {
        assert_eq!(rewrite("3 blorps of 100", "en"), "3 blorps of 100");
        assert_eq!(rewrite("20 percent of 150", "en"), "20 percent of 150");
    }

    #[test]
    fn test_fraction_word_without_numerator_untouched() {
        // A numerator is required; cleanup later drops the bare word
        assert_eq!(rewrite("half of 10", "en"), "half of 10");
        assert_eq!(rewrite("quarter of 200", "en"), "quarter of 200");
    }

    #[test]
    fn test_multiple_fractions() {
        assert_eq!(
            rewrite("1/2 of 10 and 2 thirds of 9", "en"),
            "((1/2) * 10) and ((2/3) * 9)"
        );
    }
}
