//! coverletter CLI - print-ready cover letters from generated text

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use coverletter::delivery;
use coverletter::render::{self, RenderStats};
use coverletter::{
    date, resume, structure, JsonFormat, LetterLabels, LetterStructurer, LineKind, RenderOptions,
};

#[derive(Parser)]
#[command(name = "coverletter")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn generated cover-letter text into a print-ready document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Organization and role used for the title and filenames.
#[derive(clap::Args)]
struct LabelArgs {
    /// Organization (company) name
    #[arg(long, env = "COVERLETTER_ORGANIZATION")]
    organization: String,

    /// Role or position title
    #[arg(long, env = "COVERLETTER_ROLE")]
    role: String,
}

impl LabelArgs {
    fn labels(&self) -> Result<LetterLabels, Box<dyn std::error::Error>> {
        let labels = LetterLabels::new(self.organization.trim(), self.role.trim());
        labels.validate()?;
        Ok(labels)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the original text and the print-ready HTML side by side
    Convert {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        labels: LabelArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Embed letter text without HTML escaping
        #[arg(long)]
        raw_html: bool,
    },

    /// Render the letter as print-ready HTML
    Html {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        labels: LabelArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Embed letter text without HTML escaping
        #[arg(long)]
        raw_html: bool,

        /// Leave out the print button
        #[arg(long)]
        no_print_button: bool,
    },

    /// Re-flow the letter as structured plain text
    Text {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the letter structure as JSON
    Json {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show letter structure information
    Info {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Guess the candidate name from resume text
    Name {
        /// Resume text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print today's date as a letter date line
    Date,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            labels,
            output,
            raw_html,
        }) => cmd_convert(&input, &labels, output.as_deref(), raw_html),
        Some(Commands::Html {
            input,
            labels,
            output,
            raw_html,
            no_print_button,
        }) => cmd_html(&input, &labels, output.as_deref(), raw_html, no_print_button),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Name { input }) => cmd_name(&input),
        Some(Commands::Date) => {
            println!("{}", date::today_line());
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!(
                "{}",
                "Usage: coverletter convert <FILE> --organization <ORG> --role <ROLE>".yellow()
            );
            println!("       coverletter --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read letter text from a file, or stdin for "-".
fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn render_options(raw_html: bool, no_print_button: bool) -> RenderOptions {
    let mut options = RenderOptions::new().with_print_button(!no_print_button);
    if raw_html {
        options = options.with_raw_html();
    }
    options
}

fn cmd_convert(
    input: &Path,
    labels: &LabelArgs,
    output: Option<&Path>,
    raw_html: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let labels = labels.labels()?;
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reading letter...");
    let text = read_input(input)?;
    pb.inc(1);

    pb.set_message("Structuring...");
    let doc = structure(&text);
    pb.inc(1);

    pb.set_message("Rendering HTML...");
    let artifacts = delivery::artifacts(&text, &doc, &labels, &render_options(raw_html, false))?;
    for artifact in &artifacts {
        let path = output_dir.join(&artifact.filename);
        fs::write(&path, artifact.as_bytes())?;
        log::debug!("wrote {} ({} bytes)", path.display(), artifact.content.len());
    }
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let last = artifacts.len().saturating_sub(1);
    for (i, artifact) in artifacts.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), artifact.filename);
    }

    Ok(())
}

fn cmd_html(
    input: &Path,
    labels: &LabelArgs,
    output: Option<&Path>,
    raw_html: bool,
    no_print_button: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let labels = labels.labels()?;
    let text = read_input(input)?;
    let doc = structure(&text);

    let html = render::to_html(&doc, &labels, &render_options(raw_html, no_print_button))?;
    write_output(output, &html)?;

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = structure(&text);
    write_output(output, &render::to_text(&doc))?;
    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = structure(&text);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&doc, format)?;
    write_output(output, &json)?;

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let structurer = LetterStructurer::default();
    let doc = structurer.structure(&text);
    let kinds = structurer.classify(&text);
    let stats = RenderStats::from_document(&doc);

    println!("{}", "Letter Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {}",
        "Date".bold(),
        if doc.has_date() {
            doc.date_line()
        } else {
            "(none)"
        }
    );
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    if doc.has_signature() {
        println!("{}: {}", "Signature".bold(), doc.signature_lines().join(" / "));
    } else {
        println!("{}: {}", "Signature".bold(), "(none)".yellow());
    }

    println!();
    println!("{}", "Line Classification".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let count = |kind: LineKind| kinds.iter().filter(|k| **k == kind).count();
    println!("{}: {}", "Date lines".bold(), count(LineKind::Date));
    println!("{}: {}", "Paragraph lines".bold(), count(LineKind::Paragraph));
    println!("{}: {}", "Signature lines".bold(), count(LineKind::Signature));
    println!("{}: {}", "Blank lines".bold(), count(LineKind::Blank));

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_name(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    println!("{}", resume::extract_name(&text));
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "coverletter".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Print-ready cover letters from generated text");
    println!();
    println!("License: MIT");
}
