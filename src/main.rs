use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use reprtrunc::cli::{Args, OutputFormat};
use reprtrunc::input::{Source, represent};
use reprtrunc::output::{compare_limits, format_json, format_summary, format_text};
use reprtrunc::{Result, Truncator};

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let source = Source::from_args(&args.values, args.file.as_deref());
    tracing::debug!(?source, style = ?args.style, "reading values");

    let values = source.read()?;
    let reprs = values
        .iter()
        .enumerate()
        .map(|(i, value)| represent(value, args.style, i + 1))
        .collect::<Result<Vec<_>>>()?;

    if args.compare.is_some() {
        print!("{}", compare_limits(&reprs, &args.compare_limits()?));
        return Ok(());
    }

    let truncator = Truncator::new().with_limit(args.limit()?);
    let outcomes: Vec<_> = reprs.iter().map(|full| truncator.outcome(full)).collect();

    match args.format {
        OutputFormat::Text => print!("{}", format_text(&outcomes)),
        OutputFormat::Json => println!("{}", format_json(&outcomes)),
    }

    if args.verbose {
        eprintln!("{}", format_summary(&outcomes));
    }

    Ok(())
}

/// Log to stderr, honoring RUST_LOG when set
fn init_logging(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::WARN };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
