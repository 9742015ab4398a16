use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use crate::filters::{count_duplicates, remove_duplicates};
use crate::formatters::{HtmlOptions, OutputFormat, format_csv, format_html_with};
use crate::models::Bookmark;
use crate::parsers::parse_file;
use crate::utils::write_file;

#[derive(Parser)]
#[command(name = "bookmark-export")]
#[command(version = "0.1.0")]
#[command(about = "Convert Firefox bookmark backups to CSV or HTML tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export bookmark items as a CSV file or an HTML table
    Export(ExportArgs),
    /// Show statistics about a bookmarks backup
    Stats {
        /// Bookmarks backup (JSON)
        input: PathBuf,
    },
}

#[derive(Args)]
pub struct ExportArgs {
    /// Bookmarks backup (JSON)
    pub input: PathBuf,

    /// Output file; written to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; guessed from the output extension, html otherwise
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only export the bookmarks directly inside the first folder with this title
    #[arg(long)]
    pub folder: Option<String>,

    /// Drop bookmarks whose URI already appeared earlier
    #[arg(long)]
    pub dedupe: bool,

    /// Escape HTML special characters in table cells
    #[arg(long)]
    pub escape_html: bool,

    /// Title of the generated HTML page
    #[arg(long)]
    pub title: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Export(args)) => {
            export(args)?;
        }
        Some(Commands::Stats { input }) => {
            show_stats(input)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn load(input: &Path) -> Result<Bookmark> {
    parse_file(input).with_context(|| format!("Failed to load bookmarks from {}", input.display()))
}

/// Leaf items to export: direct children of the selected folder, or every leaf in the tree
fn select_items(root: &Bookmark, folder: Option<&str>) -> Result<Vec<Bookmark>> {
    let items: Vec<Bookmark> = match folder {
        Some(title) => root
            .find_folder(title)
            .with_context(|| format!("Folder not found: {}", title))?
            .children()
            .iter()
            .filter(|node| node.is_leaf())
            .cloned()
            .collect(),
        None => root.leaves().into_iter().cloned().collect(),
    };
    Ok(items)
}

fn export(args: &ExportArgs) -> Result<()> {
    let root = load(&args.input)?;

    let mut items = select_items(&root, args.folder.as_deref())?;
    if items.is_empty() {
        warn!(input = %args.input.display(), "no bookmarks selected for export");
    }

    if args.dedupe {
        let before = items.len();
        items = remove_duplicates(&items);
        info!(removed = before - items.len(), "removed duplicate bookmarks");
    }

    let format = args
        .format
        .or_else(|| args.output.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or(OutputFormat::Html);

    let content = match format {
        OutputFormat::Csv => format_csv(&items).context("Failed to encode CSV")?,
        OutputFormat::Html => {
            let mut options = HtmlOptions { escape: args.escape_html, ..HtmlOptions::default() };
            if let Some(title) = &args.title {
                options.title = title.clone();
            }
            format_html_with(&items, &options)
        }
    };

    match &args.output {
        Some(path) => {
            write_file(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {} bookmarks to {}", items.len(), path.display());
        }
        None => {
            print!("{}", content);
        }
    }

    Ok(())
}

fn show_stats(input: &Path) -> Result<()> {
    let root = load(input)?;

    let folders = root.walk().filter(|n| n.is_container()).count();
    let separators = root.walk().filter(|n| n.is_separator()).count();
    let leaves = root.leaves();
    let duplicates = count_duplicates(leaves.iter().copied());

    println!("Bookmark Statistics");
    println!("===================");
    println!("Total nodes: {}", root.node_count());
    println!("  Folders: {}", folders);
    println!("  Bookmarks: {}", leaves.len());
    println!("  Separators: {}", separators);
    println!("Duplicate URIs: {}", duplicates);
    println!("Max depth: {}", root.depth());
    println!();
    println!("Root: {}", root.root);

    if let Some(oldest) = leaves.iter().map(|b| b.date_added).min() {
        println!("Oldest bookmark: {}", oldest.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(newest) = leaves.iter().map(|b| b.date_added).max() {
        println!("Newest bookmark: {}", newest.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}
