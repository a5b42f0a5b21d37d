use spoken_math::cli::{self, CliArgs};
use spoken_math::config::Settings;
use spoken_math::languages::{resolve_language_code, LanguageRegistry};
use spoken_math::logging::{self, LogConfig};
use spoken_math::server::{create_router, AppState};
use spoken_math::text_processing::SpokenMathNormalizer;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse(env::args().skip(1));

    if args.help {
        cli::print_help();
        return Ok(());
    }
    if args.version {
        cli::print_version();
        return Ok(());
    }

    logging::init_logging(&LogConfig::from_env())?;

    let settings = Settings::from_env();

    let registry = LanguageRegistry::builtin()?;
    if let Some(dir) = &settings.language_pack_dir {
        let loaded = registry.load_dir(dir)?;
        tracing::info!(count = loaded, dir = %dir.display(), "Loaded extra language packs");
    }
    let normalizer = Arc::new(SpokenMathNormalizer::new(Arc::new(registry)));

    if args.server {
        logging::log_platform_info();

        let port = args.port.unwrap_or(settings.port);
        let addr = format!("0.0.0.0:{}", port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        println!("spoken_math v{}", env!("CARGO_PKG_VERSION"));
        println!("\nServer listening on http://{}", addr);
        println!("\nAvailable endpoints:");
        println!("  POST   /normalize    - Normalize a transcript");
        println!("  GET    /languages    - List supported languages");
        println!("  GET    /health       - Health check");
        println!("\nLanguages: {}", normalizer.registry().codes().join(", "));
        println!("Default language: {}", settings.default_language);
        println!("Request timeout: {} seconds", settings.request_timeout.as_secs());

        let state = AppState {
            normalizer,
            default_language: settings.default_language.clone(),
            request_timeout: settings.request_timeout,
        };

        axum::serve(listener, create_router(state)).await?;
    } else {
        let transcript = args.transcript();
        if transcript.trim().is_empty() {
            cli::print_help();
            return Ok(());
        }

        let requested = args
            .language
            .as_deref()
            .unwrap_or(&settings.default_language);
        let language = resolve_language_code(
            requested,
            normalizer.registry(),
            &settings.default_language,
        );

        let normalized = normalizer.normalize(&transcript, &language)?;
        println!("{}", normalized);
    }

    Ok(())
}
