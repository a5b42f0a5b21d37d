/// CLI argument parsing and help text

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
pub struct CliArgs {
    pub help: bool,
    pub version: bool,
    pub server: bool,
    pub port: Option<u16>,
    pub language: Option<String>,
    /// Remaining words, joined into the transcript
    pub text: Vec<String>,
}

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-v" | "--version" => parsed.version = true,
                "--server" => parsed.server = true,
                "--port" => parsed.port = args.next().and_then(|p| p.parse().ok()),
                "--lang" | "-l" => parsed.language = args.next(),
                _ => parsed.text.push(arg),
            }
        }

        parsed
    }

    pub fn transcript(&self) -> String {
        self.text.join(" ")
    }
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("spoken_math v{}", version);
    println!("Turns spoken calculator transcripts into arithmetic expressions");
    println!();
    println!("USAGE:");
    println!("    spoken_math [OPTIONS] [TEXT]...");
    println!();
    println!("OPTIONS:");
    println!("    -l, --lang <CODE>     Transcript language (default: en, \"fr-CA\" style accepted)");
    println!("    --server              Start HTTP server mode");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    spoken_math add ten percent to two hundred");
    println!("    spoken_math --lang fr trois quarts de 100");
    println!("    spoken_math --server --port 8080");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    POST   /normalize    - Normalize a transcript");
    println!("    GET    /languages    - List supported languages");
    println!("    GET    /health       - Health check");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    SPOKEN_MATH_DEFAULT_LANGUAGE     - Fallback language (default: en)");
    println!("    SPOKEN_MATH_LANGUAGE_DIR         - Directory with extra *.json language packs");
    println!("    PORT                             - Server port (default: 3000)");
    println!("    REQUEST_TIMEOUT_SECONDS          - Request timeout in seconds (default: 10)");
    println!("    RUST_LOG                         - Console log filter");
    println!("    LOG_FILE_ENABLED                 - Write a JSON log file (true/false)");
    println!("    SPOKEN_MATH_LOG_DIR              - Log file directory");
    println!();
    println!("Settings can also be placed in a .env file in the working directory.");
}

pub fn print_version() {
    println!("spoken_math v{}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_parse_transcript() {
        let args = parse(&["twenty", "percent", "of", "150"]);
        assert!(!args.server);
        assert_eq!(args.transcript(), "twenty percent of 150");
    }

    #[test]
    fn test_parse_language() {
        let args = parse(&["--lang", "fr-CA", "trois", "quarts"]);
        assert_eq!(args.language.as_deref(), Some("fr-CA"));
        assert_eq!(args.transcript(), "trois quarts");
    }

    #[test]
    fn test_parse_server_mode() {
        let args = parse(&["--server", "--port", "8080"]);
        assert!(args.server);
        assert_eq!(args.port, Some(8080));
        assert!(args.text.is_empty());
    }

    #[test]
    fn test_invalid_port_ignored() {
        let args = parse(&["--server", "--port", "http"]);
        assert_eq!(args.port, None);
    }

    #[test]
    fn test_flags() {
        assert!(parse(&["-h"]).help);
        assert!(parse(&["--version"]).version);
    }
}
