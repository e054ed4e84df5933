use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::PossibleValuesParser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdftile",
    about = "Generate a grid of pages to print a given PDF",
    version
)]
struct Cli {
    /// Input PDF
    #[arg(short, long, required_unless_present = "config")]
    input: Option<PathBuf>,

    /// Output PDF
    #[arg(short, long, required_unless_present_any = ["config", "stats_only"])]
    output: Option<PathBuf>,

    /// Output sheet format
    #[arg(
        short,
        long,
        required_unless_present = "config",
        value_parser = PossibleValuesParser::new(pdf_tile::format_names())
    )]
    format: Option<String>,

    /// Border in points, at least 25 [default: 25]
    #[arg(short, long, allow_negative_numbers = true)]
    border: Option<i32>,

    /// Load options from a JSON file; flags given on the command line win
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show the tile plan only, don't generate a PDF
    #[arg(long)]
    stats_only: bool,

    /// Log every tile
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Merge command line flags over the config file (or the defaults)
    async fn options(&self) -> Result<pdf_tile::TileOptions> {
        let mut options = match &self.config {
            Some(path) => pdf_tile::TileOptions::load(path)
                .await
                .with_context(|| format!("loading config {}", path.display()))?,
            None => pdf_tile::TileOptions::default(),
        };

        if let Some(input) = &self.input {
            options.input = input.clone();
        }
        if let Some(output) = &self.output {
            options.output = output.clone();
        }
        if let Some(format) = &self.format {
            options.format = format.clone();
        }
        if let Some(border) = self.border {
            options.border = border as f32;
        }

        Ok(options)
    }
}

fn print_statistics(stats: &pdf_tile::TilingStatistics, format: &pdf_tile::SheetFormat, border: f32) {
    println!("Tiling Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!(
        "  Sheet format: {} ({}x{}), border {} points",
        format.name, format.width, format.height, border
    );
    for page in &stats.pages {
        println!(
            "  Page {}: {}x{} -> {} x {} = {} tiles{}",
            page.page_index,
            page.page.width,
            page.page.height,
            page.plan.num_cols,
            page.plan.num_rows,
            page.plan.tile_count(),
            if page.plan.orientation_swapped {
                " (sheet rotated)"
            } else {
                ""
            }
        );
    }
    println!("  Output pages: {}", stats.total_tiles);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    run(&cli).await
}

async fn run(cli: &Cli) -> Result<()> {
    let options = cli.options().await?;

    // Fail on a bad border or format before the input is read
    options.validate()?;
    let format = options.sheet_format()?;

    if let Some(path) = &cli.save_config {
        options
            .save(path)
            .await
            .with_context(|| format!("saving config {}", path.display()))?;
        log::info!("saved options to {}", path.display());
    }

    if options.input.as_os_str().is_empty() {
        anyhow::bail!("no input file given");
    }

    let document = pdf_tile::load_pdf(&options.input)
        .await
        .with_context(|| format!("reading {}", options.input.display()))?;

    let stats = pdf_tile::calculate_statistics(&document, &options)?;
    print_statistics(&stats, &format, options.border);

    if cli.stats_only {
        return Ok(());
    }

    if options.output.as_os_str().is_empty() {
        anyhow::bail!("no output file given");
    }

    let tiled = pdf_tile::tile(&document, &options).await?;
    log::info!("writing to output file {}", options.output.display());
    pdf_tile::save_pdf(tiled, &options.output).await?;
    println!("Tiled → {}", options.output.display());

    Ok(())
}
