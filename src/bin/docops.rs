//! docops - run document operations from the command line
//!
//! Reads an inputs document, runs one operation against a runtime whose
//! variable store can be loaded from and saved to a file, and prints the
//! outputs document.
//!
//! ```sh
//! echo '{"dict": {"user": {"name": "Ann"}}, "key": "user.name"}' | docops run dict_get
//! docops run dict_merge --inputs merge.yaml --format yaml
//! docops run var_set --store vars.json --save-store vars.json -i set.json
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use docops::ops::{self, Runtime};
use docops::value::{Format, Map, Value};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "docops", version, about = "Run document operations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available operations
    List,
    /// Run one operation and print its outputs
    Run {
        /// Operation name, e.g. dict_get
        operation: String,
        /// Inputs document (reads stdin if omitted or '-')
        #[arg(short, long)]
        inputs: Option<PathBuf>,
        /// Variable store to start from
        #[arg(long)]
        store: Option<PathBuf>,
        /// Where to write the variable store after the operation
        #[arg(long)]
        save_store: Option<PathBuf>,
        /// Encoding of stdin and stdout; files ending in .yaml/.yml are always YAML
        #[arg(short, long, value_enum, default_value_t = FormatArg::Json)]
        format: FormatArg,
        /// Indent JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

/// Reads `RUST_LOG`, defaulting to `warn`; logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List => {
            for name in ops::names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Run {
            operation,
            inputs,
            store,
            save_store,
            format,
            pretty,
        } => {
            let format = Format::from(format);
            let inputs = match inputs.as_deref() {
                Some(path) if path != Path::new("-") => read_mapping(path, format)?,
                _ => read_stdin(format)?,
            };
            let store = match store.as_deref() {
                Some(path) => read_mapping(path, format)?,
                None => Map::new(),
            };

            let mut runtime = Runtime::with_store(store);
            let outputs = ops::invoke(&operation, &mut runtime, &inputs)?;
            let rendered = format
                .render(&Value::map(outputs), pretty)
                .context("failed to serialize outputs")?;
            println!("{}", rendered.trim_end());

            if let Some(path) = save_store {
                let store = file_format(&path, format)
                    .render(&Value::map(runtime.store), pretty)
                    .context("failed to serialize store")?;
                fs::write(&path, store)
                    .with_context(|| format!("failed to write store {}", path.display()))?;
            }
            Ok(())
        }
    }
}

fn file_format(path: &Path, fallback: Format) -> Format {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => Format::Yaml,
        Some("json") => Format::Json,
        _ => fallback,
    }
}

fn read_mapping(path: &Path, format: Format) -> Result<Map> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_mapping(&text, file_format(path, format))
        .with_context(|| format!("invalid document in {}", path.display()))
}

fn read_stdin(format: Format) -> Result<Map> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    parse_mapping(&text, format).context("invalid inputs on stdin")
}

/// Blank text is an empty mapping.
fn parse_mapping(text: &str, format: Format) -> Result<Map> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    match format.parse(text)? {
        Value::Map(map) => Ok((*map).clone()),
        other => bail!("expected a mapping, got {}", other.type_name()),
    }
}
