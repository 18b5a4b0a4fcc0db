use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{ParseOptions, QuoteStyle, build_site, page, parse_document_with};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a directory of Markdown")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild the output directory from static files and markdown content
    Build(BuildArgs),
    /// Convert one markdown file and print the HTML fragment
    Render {
        /// Markdown file to convert
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = QuoteArg::FirstMarker)]
        quote_style: QuoteArg,

        /// Escape text and attribute values
        #[arg(long)]
        escape: bool,
    },
    /// Print the title (first `# ` line) of a markdown file
    Title {
        /// Markdown file to inspect
        input: PathBuf,
    },
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Config file (defaults to ./markdown-sitegen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory mirrored verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (deleted and recreated)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Keep generating pages after one fails
    #[arg(long)]
    keep_going: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum QuoteArg {
    FirstMarker,
    PerLine,
}

impl From<QuoteArg> for QuoteStyle {
    fn from(arg: QuoteArg) -> Self {
        match arg {
            QuoteArg::FirstMarker => QuoteStyle::FirstMarker,
            QuoteArg::PerLine => QuoteStyle::PerLine,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build(args) => build(args),
        Command::Render {
            input,
            quote_style,
            escape,
        } => {
            let markdown = read_markdown(&input)?;
            let options = ParseOptions {
                quote_style: quote_style.into(),
            };
            let tree = parse_document_with(&markdown, &options)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
            if escape {
                println!("{}", tree.to_escaped_html());
            } else {
                println!("{tree}");
            }
            Ok(())
        }
        Command::Title { input } => {
            let markdown = read_markdown(&input)?;
            match page::extract_title(&markdown) {
                Some(title) => {
                    println!("{title}");
                    Ok(())
                }
                None => bail!("No `# ` title line in {}", input.display()),
            }
        }
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let mut config = match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None if args.config.is_some() => {
            bail!("Config file {} not found", config_path.display())
        }
        None => {
            log::debug!("No config file, using defaults");
            Config::default()
        }
    };

    if let Some(content) = args.content {
        config.content_dir = content;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }
    if let Some(output) = args.output {
        config.output_dir = output;
    }
    if let Some(template) = args.template {
        config.template = template;
    }
    config.keep_going |= args.keep_going;

    let excludes = config.exclude_set()?;
    let settings = config.site_settings();
    let report = build_site(&settings, |path| excludes.is_excluded(path))
        .context("Site build failed")?;

    if !report.is_success() {
        for (path, e) in &report.failures {
            log::error!("{path}: {e}");
        }
        bail!(
            "{} of {} pages failed",
            report.failures.len(),
            report.failures.len() + report.generated.len()
        );
    }

    log::info!(
        "Built {} pages into {}",
        report.generated.len(),
        settings.output_dir.display()
    );
    Ok(())
}

fn read_markdown(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
