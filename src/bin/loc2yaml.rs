//! Command-line front end for loc2yaml.
//!
//! Reads a localization file (or stdin), writes YAML (or the parse result as
//! JSON) to stdout or `--output`, and reports skipped lines on stderr.
//!
//! Usage:
//!   loc2yaml `<path>`                      - Convert a file, print YAML
//!   loc2yaml - --format json               - Read stdin, print the parse result
//!   loc2yaml `<path>` --all-errors --strict - List every skipped line, exit 2 if any
//!
//! Exit codes: 0 on success, 1 on I/O failure, 2 with `--strict` when lines
//! were skipped.

use clap::{Parser, ValueEnum};
use loc2yaml::{convert_with_options, Conversion, EmitOptions, Error, ParseResult};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "loc2yaml",
    version,
    about = "Convert quoted key/value localization files to YAML",
    long_about = None,
    after_help = r#"EXAMPLES
  $ loc2yaml strings_l_english.yml
  $ cat strings.txt | loc2yaml --indent 4 -o strings.yml
  $ loc2yaml strings.txt --format json"#
)]
struct Cli {
    #[arg(help = "Input file; reads stdin when omitted or '-'")]
    input: Option<PathBuf>,

    #[arg(short, long, help = "Write output here instead of stdout")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 2, help = "Spaces per indentation level")]
    indent: usize,

    #[arg(
        long,
        default_value = "yaml",
        value_enum,
        help = "Output format: yaml|json"
    )]
    format: OutputFormat,

    #[arg(long, help = "Print each key followed by its decoded value")]
    preview: bool,

    #[arg(long, help = "List every skipped line instead of a one-line summary")]
    all_errors: bool,

    #[arg(long, help = "Exit with status 2 when any line was skipped")]
    strict: bool,

    #[arg(short, long, help = "Log parser decisions to stderr")]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(conversion) if cli.strict && conversion.result.has_errors() => ExitCode::from(2),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<Conversion, Error> {
    let text = read_input(cli.input.as_deref())?;
    let conversion = convert_with_options(&text, EmitOptions::new().with_indent(cli.indent));

    for (key, lines) in conversion.result.key_index().duplicates() {
        tracing::warn!(key, ?lines, "duplicate key kept as separate entries");
    }

    let rendered = match cli.format {
        OutputFormat::Yaml => conversion.output.clone(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&conversion.result).map_err(Error::custom)?
        }
    };
    write_output(cli.output.as_deref(), &rendered)?;

    if cli.preview {
        print_preview(&conversion.result)?;
    }
    report_errors(&conversion.result, cli.all_errors);
    Ok(conversion)
}

fn read_input(path: Option<&Path>) -> Result<String, Error> {
    match path {
        Some(path) if path != Path::new("-") => {
            let bytes = fs::read(path)
                .map_err(|err| Error::io(&format!("{}: {err}", path.display())))?;
            String::from_utf8(bytes).map_err(|err| Error::utf8(err.utf8_error()))
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<(), Error> {
    match path {
        Some(path) => fs::write(path, rendered)
            .map_err(|err| Error::io(&format!("{}: {err}", path.display()))),
        None => {
            let mut stdout = io::stdout().lock();
            if !rendered.is_empty() {
                writeln!(stdout, "{rendered}")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}

fn print_preview(result: &ParseResult) -> Result<(), Error> {
    let mut stderr = io::stderr().lock();
    for entry in &result.entries {
        writeln!(stderr, "{}", entry.key)?;
        for line in entry.value.split('\n') {
            writeln!(stderr, "    {line}")?;
        }
    }
    Ok(())
}

fn report_errors(result: &ParseResult, all: bool) {
    if all {
        for error in &result.errors {
            eprintln!("skipped {error}");
        }
    } else if let Some(summary) = result.summary() {
        eprintln!("{summary}");
    }
}
