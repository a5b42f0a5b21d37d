use lazy_static::lazy_static;
use spoken_math::{NormalizerError, SpokenMathNormalizer};

lazy_static! {
    static ref NORMALIZER: SpokenMathNormalizer =
        SpokenMathNormalizer::with_builtin_languages().unwrap();
}

fn normalize(text: &str, language: &str) -> String {
    NORMALIZER.normalize(text, language).unwrap()
}

#[test]
fn test_percent_of() {
    assert_eq!(normalize("20% of 150", "en"), "(150 * 20 / 100)");
    assert_eq!(
        normalize("twenty percent of one hundred fifty", "en"),
        "(150 * 20 / 100)"
    );
}

#[test]
fn test_percent_phrases() {
    assert_eq!(normalize("add 10% to 200", "en"), "(200 * (1 + 10 / 100))");
    assert_eq!(
        normalize("add ten percent to two hundred", "en"),
        "(200 * (1 + 10 / 100))"
    );
    assert_eq!(
        normalize("subtract 15 percent from 80", "en"),
        "(80 * (1 - 15 / 100))"
    );
    assert_eq!(normalize("50 plus 10%", "en"), "(50 * (1 + 10 / 100))");
    assert_eq!(normalize("50 minus 10 percent", "en"), "(50 * (1 - 10 / 100))");
}

#[test]
fn test_scale_words() {
    assert_eq!(normalize("1 million 250,000", "en"), "1250000");
    assert_eq!(normalize("2.5 million", "en"), "2500000");
    assert_eq!(normalize("5 million", "en"), "5000000");
    assert_eq!(
        normalize("two million five hundred thousand", "en"),
        "2500000"
    );
}

#[test]
fn test_fractions() {
    assert_eq!(normalize("3 fourths of 100", "en"), "((3/4) * 100)");
    assert_eq!(normalize("1/2 of 80", "en"), "((1/2) * 80)");
}

#[test]
fn test_unknown_fraction_word_is_dropped_by_cleanup() {
    assert_eq!(normalize("3 blorps of 100", "en"), "3 100");
}

#[test]
fn test_fraction_without_numerator_keeps_only_operand() {
    assert_eq!(normalize("half of 10", "en"), "10");
}

#[test]
fn test_filler_between_percentage_operands() {
    assert_eq!(
        normalize("5 um plus 3 percent", "en"),
        "(5 * (1 + 3 / 100))"
    );
    assert_eq!(
        normalize("200 uh minus 10 percent", "en"),
        "(200 * (1 - 10 / 100))"
    );
}

#[test]
fn test_thousands_separators() {
    assert_eq!(normalize("1,234.56", "en"), "1234.56");
    assert_eq!(normalize("what is 1,234.56 plus 1", "en"), "1234.56 + 1");
}

#[test]
fn test_operator_words() {
    assert_eq!(normalize("twenty five plus seventeen", "en"), "25 + 17");
    assert_eq!(normalize("Twenty-Five times four", "en"), "25 * 4");
    assert_eq!(normalize("What is 5 minus 3?", "en"), "5 - 3");
    assert_eq!(normalize("two to the power of eight", "en"), "2 ^ 8");
    assert_eq!(
        normalize("square root of 16 plus 2 squared", "en"),
        "sqrt 16 + 2 ^ 2"
    );
    assert_eq!(
        normalize("open parenthesis 2 plus 3 close parenthesis times 4", "en"),
        "( 2 + 3 ) * 4"
    );
}

#[test]
fn test_spoken_decimals() {
    assert_eq!(normalize("three point five times two", "en"), "3.5 * 2");
}

#[test]
fn test_phrase_operand_order() {
    assert_eq!(normalize("subtract 5 from 20", "en"), "20 - 5");
    assert_eq!(normalize("multiply 3 by 4", "en"), "4 * 3");
    // Second operand is the dividend
    assert_eq!(normalize("divide 10 by 2", "en"), "2 / 10");
}

#[test]
fn test_mixed_constructs() {
    assert_eq!(
        normalize("5 plus 3 percent of 200", "en"),
        "5 + (200 * 3 / 100)"
    );
    assert_eq!(
        normalize("10% of 20 plus 5%", "en"),
        "(20 * 10 / 100) + 5%"
    );
    assert_eq!(
        normalize("1/2 of 80 plus 20% of 10", "en"),
        "((1/2) * 80) + (10 * 20 / 100)"
    );
}

#[test]
fn test_percent_phrase_with_stray_scale() {
    assert_eq!(normalize("add 5 million 3% to 20", "en"), "+ 5000000 3% 20");
    assert_eq!(normalize("add 5 to 3 percent", "en"), "+ 5 3 %");
    assert_eq!(
        normalize("add five million three percent to twenty", "en"),
        "+ 5000000 3 % 20"
    );
}

#[test]
fn test_scale_addend_owned_by_fraction_or_percentage() {
    assert_eq!(
        normalize("1 million 3 fourths of 100", "en"),
        "1000000 ((3/4) * 100)"
    );
    assert_eq!(
        normalize("5 millions 20 pour cent de 10", "fr"),
        "5000000 (10 * 20 / 100)"
    );
}

#[test]
fn test_french() {
    assert_eq!(normalize("trois quarts de 100", "fr"), "((3/4) * 100)");
    assert_eq!(
        normalize("dix pour cent de deux cents", "fr"),
        "(200 * 10 / 100)"
    );
    assert_eq!(
        normalize("ajoute dix pour cent à deux cents", "fr"),
        "(200 * (1 + 10 / 100))"
    );
    assert_eq!(
        normalize("retire 10% de 200", "fr"),
        "(200 * (1 - 10 / 100))"
    );
    assert_eq!(normalize("deux virgule cinq fois quatre", "fr"), "2.5 * 4");
    assert_eq!(normalize("3,5 plus 2", "fr"), "3.5 + 2");
    assert_eq!(normalize("1.234,5 moins 4", "fr"), "1234.5 - 4");
    assert_eq!(normalize("2,5 millions", "fr"), "2500000");
    assert_eq!(normalize("soixante et onze plus un", "fr"), "71 + 1");
}

#[test]
fn test_spanish() {
    assert_eq!(
        normalize("veinte por ciento de cincuenta", "es"),
        "(50 * 20 / 100)"
    );
    assert_eq!(normalize("tres cuartos de 100", "es"), "((3/4) * 100)");
    assert_eq!(normalize("treinta y cinco más diez", "es"), "35 + 10");
    assert_eq!(normalize("cinco mil millones", "es"), "5000000000");
    assert_eq!(normalize("2 mil millones", "es"), "2000000000");
    assert_eq!(normalize("1 billón", "es"), "1000000000000");
}

#[test]
fn test_german_italian_portuguese() {
    assert_eq!(
        normalize("zehn prozent von dreihundert", "de"),
        "(300 * 10 / 100)"
    );
    assert_eq!(normalize("drei komma fünf mal zwei", "de"), "3.5 * 2");
    assert_eq!(
        normalize("cento più venti per cento", "it"),
        "(100 * (1 + 20 / 100))"
    );
    assert_eq!(normalize("duzentos e cinquenta mais dez", "pt"), "250 + 10");
}

#[test]
fn test_normalization_is_idempotent() {
    let inputs = [
        ("twenty percent of one hundred fifty", "en"),
        ("add ten percent to two hundred", "en"),
        ("3 fourths of 100", "en"),
        ("1/2 of 80 plus 20% of 10", "en"),
        ("square root of 16 plus 2 squared", "en"),
        ("open parenthesis 2 plus 3 close parenthesis times 4", "en"),
        ("what is 1,234.56 plus 1", "en"),
        ("divide 10 by 2", "en"),
        ("10% of 20 plus 5%", "en"),
        ("add 5 million 3% to 20", "en"),
        ("add 5 to 3 percent", "en"),
        ("3 blorps of 100", "en"),
        ("5 um plus 3 percent", "en"),
        ("200 uh minus 10 percent", "en"),
        ("add five million three percent to twenty", "en"),
        ("1 million 3 fourths of 100", "en"),
        ("half of 10", "en"),
        ("5 millions 20 pour cent de 10", "fr"),
        ("dix pour cent de deux cents", "fr"),
        ("1.234,5 moins 4", "fr"),
        ("treinta y cinco más diez", "es"),
        ("drei komma fünf mal zwei", "de"),
    ];

    for (input, language) in inputs {
        let once = normalize(input, language);
        let twice = normalize(&once, language);
        assert_eq!(
            once, twice,
            "Normalizing '{}' ({}) again changed the output",
            input, language
        );
    }
}

#[test]
fn test_overlong_transcript_is_truncated_and_lowercased() {
    let input = "Twenty Percent Of 150 ".repeat(60);
    assert!(input.chars().count() > 1000);

    let expected: String = input.chars().take(1000).collect::<String>().to_lowercase();
    let output = normalize(&input, "en");

    assert_eq!(output, expected, "Overlong input should bypass the pipeline");
    assert!(output.contains("percent"));
}

#[test]
fn test_transcript_at_limit_is_normalized() {
    let input = format!("{}5 plus 3", " ".repeat(992));
    assert_eq!(input.chars().count(), 1000);
    assert_eq!(normalize(&input, "en"), "5 + 3");
}

#[test]
fn test_empty_and_symbol_only_transcripts() {
    assert_eq!(normalize("", "en"), "");
    assert_eq!(normalize("   ", "en"), "");
    assert_eq!(normalize("hello there", "en"), "");
}

#[test]
fn test_language_code_is_case_insensitive() {
    assert_eq!(normalize("5 plus 3", "EN"), "5 + 3");
}

#[test]
fn test_unknown_language_is_an_error() {
    let result = NORMALIZER.normalize("5 plus 3", "xx");
    assert!(matches!(
        result,
        Err(NormalizerError::UnsupportedLanguage(ref code)) if code == "xx"
    ));
}
