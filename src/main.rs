use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use okconv::models::{AppConfig, OutputFormat};
use okconv::services::{spaces_table, Converter};

#[derive(Parser)]
#[command(name = "okconv")]
#[command(about = "Convert colors between RGB565, sRGB, linear RGB and HSV encodings")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $OKCONV_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color value to another space
    Convert {
        /// Channel triple "a,b,c", "#rrggbb", packed "0xhhhh" or a swatch name
        value: String,

        /// Source space for channel triples (e.g. rgb888, hsv-decimal)
        #[arg(short, long)]
        from: Option<String>,

        /// Target space
        #[arg(short, long)]
        to: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List supported color spaces and their channel ranges
    Spaces,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "okconv=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config_path = AppConfig::locate(cli.config);

    match cli.command {
        Some(Commands::Convert {
            value,
            from,
            to,
            format,
        }) => {
            let config = AppConfig::load(config_path.as_deref())?;
            run_convert(&config, &value, from.as_deref(), to.as_deref(), format)
        }
        Some(Commands::Spaces) => {
            print!("{}", spaces_table());
            Ok(())
        }
        None => run_status_command(config_path),
    }
}

fn run_convert(
    config: &AppConfig,
    value: &str,
    from: Option<&str>,
    to: Option<&str>,
    format: Option<OutputFormat>,
) -> anyhow::Result<()> {
    let conversion = Converter::new(config).convert(value, from, to)?;

    match format.unwrap_or(config.output) {
        OutputFormat::Text => println!("{conversion}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&conversion.report())?),
    }
    Ok(())
}

fn run_status_command(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("okconv v{VERSION}");
    println!("Color conversion for RGB565, sRGB, linear RGB and HSV\n");

    let config = AppConfig::load(config_path.as_deref())?;
    let source = match &config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "defaults".to_string(),
    };
    let space_name = |space: Option<okcolor::ColorSpace>| {
        space.map_or("(not set)", |space| space.name())
    };

    println!("Config:       {source}");
    println!("default_from: {}", space_name(config.default_from));
    println!("default_to:   {}", space_name(config.default_to));
    println!("Swatches:     {}", config.swatches.len());
    println!("\nRun `okconv spaces` to list color spaces, `okconv convert --help` for usage.");

    Ok(())
}
