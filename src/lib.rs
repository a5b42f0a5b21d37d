//! Spoken calculator transcripts → canonical arithmetic expressions
//!
//! ```no_run
//! use spoken_math::SpokenMathNormalizer;
//!
//! let normalizer = SpokenMathNormalizer::with_builtin_languages().unwrap();
//! let expression = normalizer.normalize("add ten percent to two hundred", "en").unwrap();
//! assert_eq!(expression, "(200 * (1 + 10 / 100))");
//! ```

// Library modules for integration tests
pub mod cli;
pub mod config;
pub mod error;
pub mod languages;
pub mod logging;
pub mod models;
pub mod server;
pub mod text_processing;

pub use error::{NormalizerError, Result};
pub use languages::{resolve_language_code, LanguagePatterns, LanguageRegistry};
pub use text_processing::{normalize_spoken_math, CompiledLanguageRegex, SpokenMathNormalizer};
