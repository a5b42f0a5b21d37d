pub mod cache;
pub mod cleanup;
pub mod compiled;
pub mod compound_numbers;
pub mod decimals;
pub mod fractions;
pub mod number_words;
pub mod operators;
pub mod percentages;
pub mod pipeline;

pub use cache::PatternCache;
pub use compiled::CompiledLanguageRegex;
pub use pipeline::{normalize_spoken_math, Pipeline, RewriteStage, SpokenMathNormalizer};
