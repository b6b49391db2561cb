//! Command-line interface for comicinfo

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use comicinfo::{Issue, Limits, Page};
#[cfg(feature = "cli")]
use tracing::{debug, Level};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "comicinfo")]
#[command(author, version, about = "ComicInfo.xml inspection and validation tool", long_about = None)]
struct Cli {
    /// Apply strict loading limits
    #[arg(long, global = true)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the metadata of a ComicInfo document
    Show {
        /// Path to a ComicInfo.xml file, or literal XML
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,

        /// List every page
        #[arg(short, long)]
        pages: bool,
    },

    /// Validate one or more ComicInfo documents
    Validate {
        /// Paths to ComicInfo.xml files, or literal XML
        #[arg(value_name = "SOURCE", required = true)]
        sources: Vec<String>,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let limits = if cli.strict {
        Limits::strict()
    } else {
        Limits::default()
    };
    debug!(?limits, "using loading limits");

    let result = match cli.command {
        Commands::Show {
            source,
            json,
            pages,
        } => cmd_show(&source, limits, json, pages),
        Commands::Validate { sources } => cmd_validate(&sources, limits),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn cmd_show(
    source: &str,
    limits: Limits,
    json_output: bool,
    show_pages: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let issue = Issue::load_with_limits(source, limits)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&issue)?);
        return Ok(());
    }

    print_issue_summary(&issue);

    if show_pages && issue.has_pages() {
        println!("\n=== Pages ===");
        for page in issue.pages() {
            print_page(page);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_issue_summary(issue: &Issue) {
    fn field(label: &str, value: &str) {
        if !value.is_empty() {
            println!("  {}: {}", label, value);
        }
    }

    println!("comicinfo v{}", comicinfo::VERSION);
    println!();
    println!("Issue:");
    field("Series", issue.series());
    field("Number", issue.number());
    field("Title", issue.title());
    if issue.volume() != -1 {
        println!("  Volume: {}", issue.volume());
    }
    if let Some(date) = issue.publication_date() {
        println!("  Published: {}", date);
    }
    field("Publisher", issue.publisher());
    field("Writer", issue.writer());
    field("Penciller", issue.penciller());
    field("Cover Artist", issue.cover_artist());

    let genres = issue.genres();
    if !genres.is_empty() {
        println!("  Genres: {}", genres.join(", "));
    }
    let characters = issue.characters();
    if !characters.is_empty() {
        println!("  Characters: {}", characters.join(", "));
    }

    println!();
    println!("Flags:");
    println!("  Manga: {}", issue.manga());
    println!("  Black and White: {}", issue.black_and_white());
    println!("  Age Rating: {}", issue.age_rating());
    match issue.community_rating() {
        Some(rating) => println!("  Community Rating: {:.1}", rating),
        None => println!("  Community Rating: (none)"),
    }

    println!();
    println!("Statistics:");
    println!("  Page Count: {}", issue.page_count());
    println!("  Listed Pages: {}", issue.pages().len());
    println!("  Cover Pages: {}", issue.cover_pages().len());
    println!("  Story Pages: {}", issue.story_pages().len());
}

#[cfg(feature = "cli")]
fn print_page(page: &Page) {
    let mut line = format!("  {:>4}  {}", page.image(), page.page_type());
    if page.is_double_page() {
        line.push_str("  [double]");
    }
    if let Some(ratio) = page.aspect_ratio() {
        line.push_str(&format!(
            "  {}x{} ({:.2})",
            page.image_width(),
            page.image_height(),
            ratio
        ));
    }
    if page.is_bookmarked() {
        line.push_str(&format!("  \"{}\"", page.bookmark()));
    }
    println!("{}", line);
}

#[cfg(feature = "cli")]
fn cmd_validate(sources: &[String], limits: Limits) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0;

    for source in sources {
        match Issue::load_with_limits(source, limits.clone()) {
            Ok(_) => println!("✓ {}", source),
            Err(e) => {
                failures += 1;
                println!("✗ {}: {}", source, e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} documents are invalid", failures, sources.len()).into());
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
