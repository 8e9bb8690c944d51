//! NanoBanana CLI - validate an image and produce its preview from the terminal
mod fmt;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use nanobanana_core::{
    content, format_file_size, Completion, IntakeConfig, IntakeController, Preview, SelectedFile,
};
use owo_colors::OwoColorize as _;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::{debug, error, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::fmt::LevelPrefixFormatter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env()?,
            )
            .compact()
            .without_time()
            .with_target(false)
            .event_format(LevelPrefixFormatter)
            .with_writer(std::io::stderr)
            .init();
    }
    debug!("Command line arguments: {:?}", cli);

    let config = build_config(&cli);

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let Some(image_file) = cli.image_file.clone() else {
        println!(
            "{} {} - {}\n",
            content::LOGO,
            content::PRODUCT_NAME.yellow().bold(),
            content::HERO.tagline
        );
        error!("No image file specified. Please provide an image to preview.");
        process::exit(1);
    };

    let file = match SelectedFile::from_path(&image_file).await {
        Ok(file) => file,
        Err(e) => {
            error!("Could not read {}: {}", image_file.display(), e);
            process::exit(1);
        }
    };

    if cli.verbose {
        println!("{}", "NanoBanana - Image Preview".yellow().bold());
        println!("File: {}", file.name());
        println!("Declared type: {}", file.media_type());
        println!("Size: {}", format_file_size(file.len()));
        println!(
            "Validation: {}",
            if config.validate {
                "enabled".green().to_string()
            } else {
                "disabled".red().to_string()
            }
        );
        println!();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.yellow} {msg}")?);
    spinner.set_message(format!("Decoding {}...", file.name()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let controller = IntakeController::new(config);
    let outcome = controller.select_file(file).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(Completion::Applied) => {}
        Ok(Completion::Superseded) => {
            error!("Preview was superseded before it could be shown");
            process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }

    let state = controller.snapshot();
    let Some(preview) = state.preview() else {
        error!("No preview was produced for {}", image_file.display());
        process::exit(1);
    };

    let output_content = render_preview(preview, &cli.output)?;

    if let Some(output_file) = cli.output_file {
        std::fs::write(&output_file, &output_content)?;
        if cli.verbose {
            println!(
                "{} Output written to: {}",
                "Success:".green().bold(),
                output_file.display()
            );
        }
    } else {
        println!("{}", output_content);
    }

    Ok(())
}

const ABOUT: &str = "🍌 Validate images and build previews the way the NanoBanana uploader does";
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = ABOUT)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the image to preview (when no subcommand)
    #[arg(value_name = "IMAGE_FILE")]
    image_file: Option<PathBuf>,

    /// Output format: text, json, uri
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    /// Output file path (writes to file instead of stdout)
    #[arg(short = 'f', long = "output-file")]
    output_file: Option<PathBuf>,

    /// Largest accepted file, in megabytes
    #[arg(long, value_name = "MB")]
    max_size: Option<u64>,

    /// Skip type and size checks, only decoding has to succeed
    #[arg(long)]
    no_validate: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the accepted image formats
    Formats,
    /// Print the frequently asked questions
    Faq,
}

/// Output format options
#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Human readable summary
    Text,
    /// JSON summary including the data URI
    Json,
    /// Only the data URI
    Uri,
}

fn build_config(cli: &Cli) -> IntakeConfig {
    let mut config = IntakeConfig::new().with_validation(!cli.no_validate);
    if let Some(mb) = cli.max_size {
        config = config.with_max_bytes(mb.saturating_mul(1024 * 1024));
    }
    config
}

fn render_preview(preview: &Preview, format: &OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Text => [
            format!("File: {}", preview.file_name),
            format!("Type: {} ({})", preview.kind, preview.kind.mime_type()),
            format!("Dimensions: {}x{}", preview.width, preview.height),
            format!("Size: {}", format_file_size(preview.byte_len)),
        ]
        .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "file_name": preview.file_name,
            "kind": preview.kind,
            "media_type": preview.kind.mime_type(),
            "width": preview.width,
            "height": preview.height,
            "byte_len": preview.byte_len,
            "data_uri": preview.data_uri,
        }))?,
        OutputFormat::Uri => preview.data_uri.clone(),
    };
    Ok(rendered)
}

/// Handle subcommands
fn handle_command(command: Commands, config: &IntakeConfig) -> anyhow::Result<()> {
    match command {
        Commands::Formats => {
            println!("{}", "Accepted formats:".yellow().bold());
            println!();
            for kind in &config.accepted {
                let extensions = kind
                    .extensions()
                    .iter()
                    .map(|ext| format!(".{}", ext))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "  {} - {} ({}) {}",
                    kind.to_string().green().bold(),
                    kind.description(),
                    kind.mime_type().cyan(),
                    extensions.dimmed()
                );
            }
            println!();
            println!(
                "Maximum size: {}",
                format_file_size(config.max_bytes).yellow()
            );
            if !config.validate {
                println!(
                    "{} Validation is disabled, these limits are not enforced.",
                    "Warning:".yellow().bold()
                );
            }
        }

        Commands::Faq => {
            println!(
                "{}",
                format!("{} Frequently Asked Questions", content::PRODUCT_NAME)
                    .yellow()
                    .bold()
            );
            for entry in content::FAQS {
                println!();
                println!("{}", entry.question.bold());
                println!("  {}", entry.answer);
            }
        }
    }

    Ok(())
}
