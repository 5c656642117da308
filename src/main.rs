//! Signglyph CLI
//!
//! Usage:
//!   signglyph --text "your text here"          # Single translation
//!   signglyph --text "text" --missing          # Only list missing words
//!   signglyph --interactive                    # Line-by-line translation
//!   signglyph --serve                          # HTTP API server
//!   signglyph --text "text" --json             # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use signglyph::core::{
    run_server, AppState, Catalog, ClassifierAugmented, DirectoryAssets, DirectoryStudio,
    FixedSet, LexiconClassifier, SignRegistrar, TranslationEngine,
};
use signglyph::types::{SignKind, TranslationOutput};
use signglyph::{PLACEHOLDER_PREFIX, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "signglyph",
    version = VERSION,
    about = "Signglyph - Translate text into sign-language glyphs",
    long_about = "Signglyph turns text into a sequence of sign images.\n\n\
                  Known words get their own sign, everything else is\n\
                  fingerspelled letter by letter. Content words without\n\
                  a sign are reported as missing so they can be backfilled.\n\n\
                  Modes:\n  \
                  --text         Translate once\n  \
                  --interactive  Translate line by line\n  \
                  --serve        HTTP API server mode"
)]
struct Args {
    /// Text to translate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address
    #[arg(long, env = "SIGNGLYPH_ADDR", default_value = "127.0.0.1:3000")]
    addr: String,

    /// Directory holding `{token}.png` sign images
    #[arg(long, env = "SIGNGLYPH_SIGNS_DIR", default_value = "./signs")]
    signs_dir: PathBuf,

    /// URL prefix under which sign images are served
    #[arg(long, default_value = PLACEHOLDER_PREFIX)]
    asset_prefix: String,

    /// JSON lexicon for part-of-speech detection of content words
    #[arg(long, env = "SIGNGLYPH_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Only list missing content words
    #[arg(short, long)]
    missing: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show one line per sign
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("signglyph=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let (engine, registrar) = match build(&args) {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::exit(2);
        }
    };

    if args.serve {
        run_serve(&args, engine, registrar).await;
    } else if args.interactive {
        run_interactive(&engine, &args);
    } else if let Some(ref text) = args.text {
        run_single(&engine, text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&engine, &args);
    }
}

/// Catalog, engine and registrar from the command line
fn build(args: &Args) -> Result<(TranslationEngine, SignRegistrar), signglyph::types::SignError> {
    let assets = DirectoryAssets::new(&args.signs_dir, &args.asset_prefix);
    let words = FixedSet::default();
    let catalog = Catalog::initialize(&assets, words.sorted());

    let engine = match &args.lexicon {
        Some(path) => {
            let classifier = LexiconClassifier::load(path)?;
            tracing::info!(path = %path.display(), entries = classifier.len(), "lexicon loaded");
            TranslationEngine::new(catalog.clone(), ClassifierAugmented::new(words, classifier))
        }
        None => TranslationEngine::new(catalog.clone(), words),
    };
    let registrar = SignRegistrar::new(catalog, DirectoryStudio::new(assets));

    Ok((engine, registrar))
}

/// Run single text translation
fn run_single(engine: &TranslationEngine, text: &str, args: &Args) {
    if args.missing {
        print_missing(&engine.find_all_missing(text), args.json);
        return;
    }
    print_output(&engine.translate(text), args);
}

/// Run interactive mode
fn run_interactive(engine: &TranslationEngine, args: &Args) {
    print_header(args.no_color);
    println!("Type text and press Enter to translate. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut count = 0u64;

    loop {
        print!("{} ", ">".bold());
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Translations: {}", count);
            break;
        }
        if line.is_empty() {
            continue;
        }

        count += 1;
        if args.missing {
            print_missing(&engine.find_all_missing(line), args.json);
        } else {
            print_output(&engine.translate(line), args);
        }
    }
}

/// Print one translation in the selected format
fn print_output(output: &TranslationOutput, args: &Args) {
    if args.json {
        match serde_json::to_string_pretty(output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
    } else if args.verbose {
        print_verbose(output);
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Print missing words
fn print_missing(missing: &[String], json: bool) {
    if json {
        match serde_json::to_string(missing) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        }
    } else if missing.is_empty() {
        println!("{}", "no missing signs".green());
    } else {
        for word in missing {
            println!("{} {}", "missing:".yellow(), word);
        }
    }
}

/// Print verbose output: one line per sign
fn print_verbose(output: &TranslationOutput) {
    println!("{}", "┌─────────────────────────────────────".dimmed());
    for sign in &output.signs {
        if sign.is_separator() {
            println!("{}", "│ ·".dimmed());
            continue;
        }
        let kind = match sign.kind {
            SignKind::Word => "word  ".green(),
            SignKind::Letter => "letter".cyan(),
        };
        println!("{} {} {:<12} {}", "│".dimmed(), kind, sign.token, sign.image_path.dimmed());
    }
    println!("{}", "├─────────────────────────────────────".dimmed());
    println!(
        "{} words: {} | letters: {} | missing: {}",
        "│".dimmed(),
        output.word_count(),
        output.letter_count(),
        if output.missing.is_empty() { "-".to_string() } else { output.missing.join(", ") }
    );
    println!("{}", "└─────────────────────────────────────".dimmed());
}

/// Print header
fn print_header(no_color: bool) {
    let title = format!("  Signglyph v{}", VERSION);
    println!("========================================");
    if no_color {
        println!("{}", title);
    } else {
        println!("{}", title.bold());
    }
    println!("========================================");
    println!();
}

/// Run HTTP API server
async fn run_serve(args: &Args, engine: TranslationEngine, registrar: SignRegistrar) {
    println!();
    println!("{}", format!("Signglyph API Server v{}", VERSION).bold());
    println!("Signs directory: {}", args.signs_dir.display());
    println!();

    if let Err(e) = run_server(&args.addr, AppState::new(engine, registrar)).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
