mod debug_report;

use anyhow::{Context, bail};
use clap::Parser;
use env_logger::Env;
use rigcode::{KeyRequest, ModelCatalog, Options, RigAttributes, detect_family, mentions_efi, parse_verbose_with};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// Parse Mercury outboard rigging codes and build canonical model keys.
///
/// Input comes from --input, the trailing arguments, or stdin.
#[derive(Parser, Debug)]
#[command(name = "rigcode", version)]
struct Cli {
    /// Input text to parse
    #[arg(short, long, conflicts_with = "words")]
    input: Option<String>,

    /// Known horsepower (feeds the power-trim rule and the key)
    #[arg(long, value_name = "HP")]
    hp: Option<f64>,

    /// Motor family for the key; detected from the input when omitted
    #[arg(long)]
    family: Option<String>,

    /// Mark the motor as EFI; detected from an `EFI` word when omitted
    #[arg(long)]
    efi: bool,

    /// Human-readable description to look up in the model table
    #[arg(long, value_name = "TEXT")]
    display_name: Option<String>,

    /// Manufacturer model number
    #[arg(long, value_name = "MODEL")]
    model_number: Option<String>,

    /// JSON model table to use instead of the bundled one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Print attributes and key as JSON
    #[arg(long)]
    json: bool,

    /// Force ANSI color output
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    debug: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "INPUT")]
    words: Vec<String>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    input: &'a str,
    family: Option<&'a str>,
    attributes: &'a RigAttributes,
    key: &'a str,
}

fn main() {
    let cli = Cli::parse();

    let env = if cli.debug { Env::default().default_filter_or("debug") } else { Env::default().default_filter_or("warn") };
    env_logger::Builder::from_env(env).init();

    let input = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&cli, &input) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, input: &str) -> anyhow::Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => ModelCatalog::from_path(path).with_context(|| format!("loading {}", path.display()))?,
        None => ModelCatalog::builtin().context("bundled model table")?,
    };

    let res = parse_verbose_with(input, &Options { horsepower: cli.hp });

    let family = cli.family.clone().or_else(|| detect_family(input).map(|f| f.display_name().to_string()));
    let key = KeyRequest {
        family: family.as_deref(),
        horsepower: res.details.horsepower.unwrap_or(0.0),
        has_efi: cli.efi || mentions_efi(input),
        rig: &res.attributes,
        display_name: cli.display_name.as_deref(),
        model_number: cli.model_number.as_deref(),
    }
    .build(&catalog);

    if cli.json {
        let out = JsonOutput { input, family: family.as_deref(), attributes: &res.attributes, key: &key };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };
        debug_report::print_run(input, &res, &key, color);
    }

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    let input = match (&cli.input, cli.words.is_empty()) {
        (Some(input), _) => input.clone(),
        (None, false) => cli.words.join(" "),
        (None, true) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
            buffer
        }
    };

    if input.trim().is_empty() {
        bail!("no input provided (see --help)");
    }
    Ok(input)
}
