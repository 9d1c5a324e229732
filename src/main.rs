use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use irodori::api;
use irodori::models::{AppConfig, HairPreset};
use irodori::server;
use irodori_color::{generate_palette, HairExtractor, HarmonyMode, Rgb, FALLBACK_COLOR};

#[derive(Parser)]
#[command(name = "irodori")]
#[command(about = "Irodori - color palette and hair-color tools for illustrators")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Generate a harmony palette from a base color
    Palette {
        /// Base color as HEX (e.g. "#3B82F6")
        base: String,

        /// Harmony family instead of the fixed six-color recipe
        #[arg(short, long)]
        mode: Option<String>,
    },
    /// Extract hair colors from an image file
    Extract {
        /// Input image (PNG, JPEG, ...)
        image: PathBuf,

        /// Number of clusters
        #[arg(short, long, default_value_t = 5)]
        k: usize,

        /// RNG seed for reproducible clustering
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Irodori API",
        description = "Color-theory palette generation and hair-color extraction",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_generate_palette,
        api::handle_extract,
        api::handle_presets,
    ),
    components(schemas(
        api::PaletteResponse,
        api::HairColorResponse,
        api::RoleColorDto,
        api::PresetsResponse,
        HairPreset,
    )),
    tags(
        (name = "Palette", description = "Color-theory palette generation"),
        (name = "Hair", description = "Hair-color extraction and presets")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Palette { base, mode }) => run_palette_command(&base, mode.as_deref()),
        Some(Commands::Extract { image, k, seed }) => run_extract_command(&image, k, seed),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Print a harmony palette to the terminal (no server needed)
fn run_palette_command(base: &str, mode: Option<&str>) -> anyhow::Result<()> {
    init_cli_tracing();

    let base_color = base.parse::<Rgb>().unwrap_or_else(|e| {
        tracing::warn!(base, %e, "Invalid base color, using fallback");
        FALLBACK_COLOR
    });

    let colors: Vec<Rgb> = match mode {
        None => generate_palette(base_color).colors().to_vec(),
        Some(name) => {
            let mode: HarmonyMode = name
                .parse()
                .map_err(|_| anyhow::anyhow!("Unknown harmony mode: {name}"))?;
            mode.expand(base_color)
        }
    };

    for color in colors {
        let text = color.contrast_text();
        println!(
            "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {} \x1b[0m",
            color.r,
            color.g,
            color.b,
            text.r,
            text.g,
            text.b,
            color.to_hex()
        );
    }

    Ok(())
}

/// Run the extraction pipeline on an image file and print JSON
fn run_extract_command(path: &PathBuf, k: usize, seed: Option<u64>) -> anyhow::Result<()> {
    init_cli_tracing();

    let bytes = std::fs::read(path)?;
    let image = image::load_from_memory(&bytes)?;
    let rgba = image.to_rgba8();

    let mut extractor = HairExtractor::new().clusters(k);
    if let Some(seed) = seed {
        extractor = extractor.seed(seed);
    }

    let set = extractor.extract(rgba.as_raw());
    let response = api::HairColorResponse::from(set);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Irodori v{VERSION}");
    println!("Color palette and hair-color tools for illustrators\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:8080 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  irodori serve      Start the HTTP server");
    println!("  irodori palette    Generate a harmony palette from a base color");
    println!("  irodori extract    Extract hair colors from an image");
    println!("\nRun 'irodori --help' for more details.");
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irodori=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irodori=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let config = Arc::new(AppConfig::load(config_file.as_deref()));
    let state = server::create_app_state(config);

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Irodori server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
