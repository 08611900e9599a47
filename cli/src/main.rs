//! reprint CLI - rebuild chaptered documents from layout analysis JSON

mod package;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use reprint::{load_file, render, AnalyzeResult, Book, JsonFormat, Reprint};

use package::{DirectoryPackager, TOC_FILE};

#[derive(Parser)]
#[command(name = "reprint")]
#[command(version)]
#[command(about = "Rebuild layout analysis JSON into chaptered XHTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build chapter files and a table of contents
    Build {
        /// Layout analysis JSON file
        #[arg(value_name = "ANALYSIS")]
        input: PathBuf,

        /// Output directory (defaults to <stem>_chapters)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Book title when the document has no title paragraph
        #[arg(long, env = "REPRINT_TITLE")]
        title: Option<String>,

        /// Drop content before the first section heading
        #[arg(long)]
        drop_front_matter: bool,

        /// Do not turn URLs into links
        #[arg(long)]
        no_links: bool,

        /// Do not join hyphenated line breaks
        #[arg(long)]
        no_dehyphenate: bool,

        /// Make footnote identifiers unique per position
        #[arg(long)]
        unique_footnotes: bool,

        /// CSS file replacing the default chapter stylesheet
        #[arg(long, value_name = "FILE")]
        css: Option<PathBuf>,
    },

    /// Print the built book as JSON
    Json {
        /// Layout analysis JSON file
        #[arg(value_name = "ANALYSIS")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document statistics
    Info {
        /// Layout analysis JSON file
        #[arg(value_name = "ANALYSIS")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Flags shaping a build.
#[derive(Default)]
struct BuildFlags {
    title: Option<String>,
    drop_front_matter: bool,
    no_links: bool,
    no_dehyphenate: bool,
    unique_footnotes: bool,
    css: Option<PathBuf>,
}

impl BuildFlags {
    fn builder(&self) -> Result<Reprint, Box<dyn std::error::Error>> {
        let mut builder = Reprint::new();
        if let Some(ref title) = self.title {
            builder = builder.with_title(title.as_str());
        }
        if self.drop_front_matter {
            builder = builder.drop_front_matter();
        }
        if self.no_links {
            builder = builder.without_links();
        }
        if self.no_dehyphenate {
            builder = builder.without_dehyphenation();
        }
        if self.unique_footnotes {
            builder = builder.unique_footnote_ids();
        }
        if let Some(ref css) = self.css {
            let css = fs::read_to_string(css)?;
            builder = builder.with_stylesheet(format!("<style>\n{}\n</style>\n", css.trim()));
        }
        Ok(builder)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            input,
            output,
            title,
            drop_front_matter,
            no_links,
            no_dehyphenate,
            unique_footnotes,
            css,
        }) => {
            let flags = BuildFlags {
                title,
                drop_front_matter,
                no_links,
                no_dehyphenate,
                unique_footnotes,
                css,
            };
            cmd_build(&input, output.as_deref(), &flags)
        }
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: reprint build <ANALYSIS> [-o DIR]".yellow());
            println!("       reprint --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}_chapters", stem))
}

fn cmd_build(
    input: &Path,
    output: Option<&Path>,
    flags: &BuildFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| default_output_dir(input));

    let book = flags.builder()?.build_file(input)?;

    debug!(
        "writing {} chapters to {}",
        book.chapter_count(),
        output_dir.display()
    );
    let packager = DirectoryPackager::new(&output_dir);
    packager.prepare()?;

    let pb = ProgressBar::new(book.chapter_count() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    for chapter in &book.chapters {
        pb.set_message(chapter.file_name.clone());
        packager.write_chapter(chapter)?;
        pb.inc(1);
    }

    pb.set_message(TOC_FILE);
    packager.write_toc(&book)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{} {}",
        "Output files:".green().bold(),
        packager.dir().display()
    );
    for chapter in &book.chapters {
        println!("  {} {}", "├─".dimmed(), chapter.file_name);
    }
    println!("  {} {}", "└─".dimmed(), TOC_FILE);

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let book = Reprint::new().build_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&book, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

/// Load an analysis file once and build its book, titled after the file
/// stem when the document has no title paragraph.
fn load_book(input: &Path) -> Result<(AnalyzeResult, Book), Box<dyn std::error::Error>> {
    let result = load_file(input)?;
    let mut builder = Reprint::new();
    if let Some(stem) = input.file_stem().and_then(|s| s.to_str()) {
        builder = builder.with_title(stem);
    }
    let book = builder.build(&result)?;
    Ok((result, book))
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let (result, book) = load_book(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), book.title);
    println!(
        "{}: {}",
        "Title paragraph".bold(),
        if result.title().is_some() { "Yes" } else { "No" }
    );

    print_stats(&book);
    print_toc(&book);

    Ok(())
}

fn print_stats(book: &Book) {
    let stats = &book.stats;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages".bold(), stats.page_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!(
        "{}: {}",
        "Paragraphs inside tables".bold(),
        stats.filtered_paragraph_count
    );
    println!("{}: {}", "Footnotes".bold(), stats.footnote_count);
    println!("{}: {}", "Chapters".bold(), stats.chapter_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);
}

fn print_toc(book: &Book) {
    if book.toc.is_empty() {
        return;
    }

    println!();
    println!("{}", "Table of Contents".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for entry in &book.toc {
        let indent = "  ".repeat(entry.level.saturating_sub(1) as usize);
        println!("{}{} {}", indent, entry.title, entry.file_name.dimmed());
    }
}

fn cmd_version() {
    println!("{} {}", "reprint".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout analysis to chaptered XHTML");
    println!();
    println!("License: MIT");
}
