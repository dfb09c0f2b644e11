mod process;
mod report;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::Level;

use shellmark::{Highlighter, Warning};

use crate::process::CliError;

const SUBCOMMANDS: &[&str] = &["annotate", "unmark", "help"];
const DEFAULT_FILE: &str = "index.html";

#[derive(Parser)]
#[command(name = "shellmark", version, about = "Shell syntax highlighting for HTML code blocks")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Suppress the block report and warnings
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML file with highlighting settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Highlight the shell code blocks of an HTML file
    Annotate(AnnotateArgs),

    /// Remove shell highlighting from an HTML file, in place
    Unmark(UnmarkArgs),
}

#[derive(clap::Args)]
struct AnnotateArgs {
    /// HTML file to read
    #[arg(default_value = DEFAULT_FILE)]
    input: PathBuf,

    /// File to write (defaults to the input file)
    output: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[derive(clap::Args)]
struct UnmarkArgs {
    /// HTML file to rewrite
    #[arg(default_value = DEFAULT_FILE)]
    file: PathBuf,
}

fn main() {
    let args = with_default_subcommand(std::env::args().collect());
    let cli = Cli::parse_from(&args);

    init_tracing(cli.verbose, cli.no_color);

    let result = process::load_config(cli.config.as_deref()).and_then(|config| {
        let highlighter = Highlighter::new(&config);
        match &cli.command {
            Command::Annotate(annotate_args) => do_annotate(&cli, annotate_args, &highlighter),
            Command::Unmark(unmark_args) => do_unmark(&cli, unmark_args, &highlighter),
        }
    });

    if let Err(error) = result {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

/// `shellmark page.html` means `shellmark annotate page.html`, and a bare
/// `shellmark` means `shellmark annotate`.
fn with_default_subcommand(mut args: Vec<String>) -> Vec<String> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "--config" {
            // Skip the option's value.
            i += 2;
            continue;
        }
        if matches!(arg, "-h" | "--help" | "-V" | "--version") {
            return args;
        }
        if !arg.starts_with('-') {
            if !SUBCOMMANDS.contains(&arg) {
                args.insert(i, "annotate".to_string());
            }
            return args;
        }
        i += 1;
    }
    args.push("annotate".to_string());
    args
}

fn init_tracing(verbose: u8, no_color: bool) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .init();
}

fn do_annotate(cli: &Cli, args: &AnnotateArgs, highlighter: &Highlighter) -> Result<(), CliError> {
    let input = args.input.as_path();
    let output = args.output.as_deref().unwrap_or(input);

    let mut stdout = io::stdout();
    if !cli.quiet {
        report::write_annotate_header(&mut stdout, input, output).map_err(CliError::Stdout)?;
    }

    let source = process::read_document(input)?;

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(input.display().to_string(), source.clone());

    let summary = process::annotate_document(highlighter, &source, file_id, output, args.dry_run)?;

    if !cli.quiet {
        emit_warnings(&files, &summary.warnings, cli.no_color);
        let written = if args.dry_run { None } else { Some(output) };
        report::write_annotate_summary(&mut stdout, &summary, written).map_err(CliError::Stdout)?;
    }
    Ok(())
}

fn do_unmark(cli: &Cli, args: &UnmarkArgs, highlighter: &Highlighter) -> Result<(), CliError> {
    let path: &Path = &args.file;
    let summary = process::unmark_file(highlighter, path)?;
    if !cli.quiet {
        report::write_unmark_summary(&mut io::stdout(), &summary, path).map_err(CliError::Stdout)?;
    }
    Ok(())
}

fn emit_warnings(files: &SimpleFiles<String, String>, warnings: &[Warning], no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for warning in warnings {
        let diagnostic = warning.to_diagnostic();
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, &diagnostic);
    }
}
