use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_booklet::{BlankPageSize, BookletOptions, PaperSize, SignatureKey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfb", about = "Prepare PDFs for booklet printing", version)]
struct Cli {
    /// Show per-stage detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Number, pad and reorder a PDF into signature print order
    Booklet {
        /// Input PDF file (".pdf" is appended if missing)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file [default: <input>_booklet.pdf]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON options file; explicit flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pages per signature (4, 8, 16 or 32)
        #[arg(short, long)]
        signature_size: Option<usize>,

        /// Pages printed on each sheet side (2, or 4 when cutting sheets in half)
        #[arg(short = 'k', long)]
        pages_per_sheet: Option<usize>,

        /// Stamp page numbers on the original pages before padding
        #[arg(long)]
        page_numbers: bool,

        /// Size of the blank pages added for padding
        #[arg(long, value_enum)]
        blank_size: Option<BlankSizeArg>,

        /// Replace the output file if it already exists
        #[arg(short, long)]
        force: bool,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the sheet order for one signature layout
    Order {
        /// Pages per signature (4, 8, 16 or 32)
        #[arg(short, long, default_value = "16")]
        signature_size: usize,

        /// Pages printed on each sheet side (2 or 4)
        #[arg(short = 'k', long, default_value = "2")]
        pages_per_sheet: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BlankSizeArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    /// Same size as the first page of the document
    MatchFirst,
}

impl From<BlankSizeArg> for BlankPageSize {
    fn from(arg: BlankSizeArg) -> Self {
        match arg {
            BlankSizeArg::A3 => Self::Paper(PaperSize::A3),
            BlankSizeArg::A4 => Self::Paper(PaperSize::A4),
            BlankSizeArg::A5 => Self::Paper(PaperSize::A5),
            BlankSizeArg::Letter => Self::Paper(PaperSize::Letter),
            BlankSizeArg::Legal => Self::Paper(PaperSize::Legal),
            BlankSizeArg::Tabloid => Self::Paper(PaperSize::Tabloid),
            BlankSizeArg::MatchFirst => Self::MatchFirstPage,
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Booklet {
            input,
            output,
            config,
            signature_size,
            pages_per_sheet,
            page_numbers,
            blank_size,
            force,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => BookletOptions::load(path)
                    .await
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => BookletOptions::default(),
            };
            if let Some(size) = signature_size {
                options.signature_size = size;
            }
            if let Some(k) = pages_per_sheet {
                options.pages_per_sheet = k;
            }
            if page_numbers {
                options.stamp_page_numbers = true;
            }
            if let Some(size) = blank_size {
                options.blank_page_size = size.into();
            }

            // Fail on configuration before touching any file
            options.validate()?;

            let input = pdf_booklet::resolve_input_path(&input)?;
            let output = match output {
                Some(path) => pdf_booklet::resolve_output_path(path),
                None => pdf_booklet::default_output_path(&input),
            };
            if !stats_only && output.exists() && !force {
                bail!(
                    "{} already exists (pass --force to overwrite)",
                    output.display()
                );
            }

            let document = pdf_booklet::load_pdf(&input).await?;

            let stats = pdf_booklet::calculate_statistics(&document, &options)?;
            println!("Booklet Statistics:");
            println!("  Source pages: {}", stats.source_pages);
            println!("  Blank pages added: {}", stats.blank_pages_added);
            println!("  Signatures: {}", stats.signatures);
            println!("  Output pages: {}", stats.output_pages);
            println!("  Sheets: {}", stats.sheets);
            if let Some(suggested) = pdf_booklet::suggest_signature_size(stats.source_pages) {
                if suggested != options.signature_size {
                    log::info!("Suggested signature size: {} pages", suggested);
                }
            }

            if stats_only {
                return Ok(());
            }

            let booklet = pdf_booklet::make_booklet(document, &options).await?;
            pdf_booklet::save_pdf(booklet.document, &output).await?;
            println!(
                "Booklet ({} pages) → {}",
                booklet.report.final_pages,
                output.display()
            );
        }

        Commands::Order {
            signature_size,
            pages_per_sheet,
        } => {
            let key = SignatureKey::new(signature_size, pages_per_sheet)?;
            let order: Vec<String> = key
                .permutation()
                .iter()
                .map(|offset| (offset + 1).to_string())
                .collect();
            println!(
                "{}-page signature, {} pages per sheet side:",
                signature_size, pages_per_sheet
            );
            println!("  Order: {}", order.join(", "));
            for side in pdf_booklet::printed_sides(key) {
                let pages: Vec<String> = side.pages.iter().map(|p| (p + 1).to_string()).collect();
                println!(
                    "  Sheet {} {}: {}",
                    side.sheet + 1,
                    side.side,
                    pages.join(", ")
                );
            }
        }
    }

    Ok(())
}
