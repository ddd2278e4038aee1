//! mdx-code-props CLI - apply the code props transform to a hast JSON tree

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mdx_code_props::{CodeProps, CodePropsError, CodePropsOptions, JsxWriter};
use mdx_hast::Root;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdx-code-props")]
#[command(version)]
#[command(about = "Attach code fence meta attributes to code or pre elements", long_about = None)]
struct Cli {
    /// Input hast JSON file (reads stdin when omitted or '-')
    input: Option<PathBuf>,

    /// Element that receives the meta attributes (code, pre)
    #[arg(long)]
    tag_name: Option<String>,

    /// Attribute name casing (html, react)
    #[arg(long)]
    attribute_name_case: Option<String>,

    /// Options file (.toml or .json); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    to: OutputFormat,

    /// Write output to FILE instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report errors as JSON on stderr
    #[arg(long)]
    json_errors: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The transformed hast tree as JSON
    Json,
    /// A JSX preview of the transformed tree
    Jsx,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdx_code_props=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let options = load_options(&cli)?;
    let transform = match CodeProps::new(&options) {
        Ok(transform) => transform,
        Err(err) => report(&err.into(), cli.json_errors),
    };

    let input = read_input(cli.input.as_deref())?;
    let mut root: Root =
        serde_json::from_str(&input).context("Failed to parse input as a hast JSON tree")?;

    let count = match transform.transform(&mut root) {
        Ok(count) => count,
        Err(err) => report(&err, cli.json_errors),
    };
    tracing::info!(count, "transformed code blocks");

    let mut rendered = match cli.to {
        OutputFormat::Json => serde_json::to_string_pretty(&root)?,
        OutputFormat::Jsx => match JsxWriter::new(transform.attribute_name_case()).write(&root) {
            Ok(jsx) => jsx,
            Err(err) => report(&err, cli.json_errors),
        },
    };
    rendered.push('\n');

    write_output(cli.output.as_deref(), &rendered)
}

/// Options from `--config`, with command-line flags layered on top.
fn load_options(cli: &Cli) -> Result<CodePropsOptions> {
    let file_options = match &cli.config {
        Some(path) => read_options_file(path)?,
        None => CodePropsOptions::default(),
    };

    let flags = CodePropsOptions {
        tag_name: cli.tag_name.clone(),
        attribute_name_case: cli.attribute_name_case.clone(),
    };

    Ok(file_options.merge(flags))
}

fn read_options_file(path: &Path) -> Result<CodePropsOptions> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read from stdin")?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Print a transform error as a diagnostic and exit.
fn report(err: &CodePropsError, json: bool) -> ! {
    if json {
        eprintln!("{}", err.to_diagnostic().to_json());
    } else {
        eprint!("{}", err.render());
    }
    std::process::exit(1);
}
