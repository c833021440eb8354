mod config;
mod errors;
mod feed;
mod lang;
mod pipeline;
mod query;
mod render;
mod tokenize;

pub const USER_AGENT: &str = concat!("newscloud/", env!("CARGO_PKG_VERSION"));

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use errors::AppError;
use feed::GoogleNewsClient;
use lang::{Locale, WhatlangDetector};
use pipeline::{PipelineRequest, format_report};
use query::{Mode, Query};
use render::RenderOptions;
use tokenize::{KoreanBackend, TokenizerSet};

/// Build a word cloud from news headlines matching a multilingual query.
#[derive(Parser, Debug)]
#[command(name = "newscloud", version, about)]
struct Cli {
    /// Comma-separated search terms
    #[arg(short, long, default_value = "트럼프")]
    include: String,

    /// Comma-separated terms to exclude
    #[arg(short = 'x', long, default_value = "")]
    exclude: String,

    /// How include terms combine
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = Mode::And)]
    mode: Mode,

    /// News locale
    #[arg(short, long, value_enum, default_value_t = Locale::Korean)]
    language: Locale,

    /// Restrict results to one site (e.g. "example.com")
    #[arg(long)]
    site: Option<String>,

    /// SVG output path
    #[arg(short, long, default_value = "wordcloud.svg")]
    output: PathBuf,

    /// Font file with CJK coverage (overrides NEWSCLOUD_FONT)
    #[arg(long)]
    font: Option<PathBuf>,

    /// Embed the font in the SVG instead of linking it
    #[arg(long)]
    embed_font: bool,

    /// Layout seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Korean word splitting strategy
    #[arg(long, value_enum, default_value_t = KoreanBackend::Syllable)]
    korean_backend: KoreanBackend,

    /// Number of top words to print
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Print the frequency report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newscloud=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?;

    let query = Query::from_fields(&cli.include, &cli.exclude, cli.mode).render();
    let locale = cli.language;
    info!(query = %query, language = %locale.language(), "final search query");

    let client = GoogleNewsClient::new(&config.feed_url, config.timeout)?;
    let tokenizers = TokenizerSet::new(cli.korean_backend)?;
    let detector = WhatlangDetector::new();

    let request = PipelineRequest {
        query: &query,
        site: cli.site.as_deref(),
        lang: locale.lang(),
        region: locale.region(),
    };
    let report = pipeline::run(&client, &detector, &tokenizers, &request).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report, cli.top));
    }

    if report.is_empty() {
        warn!(snippets = report.snippets, "no words found");
        return Ok(());
    }

    let font_path = cli.font.or(config.font_path);
    if font_path.is_none() && report.languages.keys().any(|l| l.is_cjk()) {
        warn!("no font given for CJK words; glyphs depend on system fonts (set --font or NEWSCLOUD_FONT)");
    }

    let options = RenderOptions {
        font_path,
        embed_font: cli.embed_font,
        seed: cli.seed,
        ..RenderOptions::default()
    };
    let image = render::render(&report.frequencies, &options)?;
    image.save(&cli.output)?;

    info!(path = %cli.output.display(), words = image.words, "word cloud written");
    if !cli.json {
        println!("\nWord cloud written to {}", cli.output.display());
    }
    Ok(())
}
