//! Day-by-day puzzle scaffold generator.
//!
//! `aoc-scaffold [YEAR]` makes sure `aoc<YEAR>/` holds `DayNN.txt`,
//! `DayNN_test.txt` and a `DayNN.kt` stub for every day, creating only what is
//! missing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use scaffold::check::check_scaffold;
use scaffold::core::types::{SkipPolicy, SlotStatus};
use scaffold::exit_codes;
use scaffold::generate::{GenerateOptions, generate_with};
use scaffold::io::config::{CONFIG_FILE_NAME, ScaffoldConfig, load_config, render_config};
use scaffold::logging;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "aoc-scaffold",
    version,
    about = "Create missing day files for a puzzle calendar year",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Create missing day files (same as running without a subcommand).
    Generate(GenerateArgs),
    /// Report which days are complete, partial or missing.
    Check(CheckArgs),
    /// Print the effective configuration as TOML.
    Config(TargetArgs),
}

/// Where the scaffold lives.
#[derive(Args, Debug, Default)]
struct TargetArgs {
    /// Year to scaffold; falls back to the config file, then 2023.
    year: Option<String>,

    /// Directory the year folder is created in.
    #[arg(short = 'd', long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Extra source-root folder between the base dir and the year folder.
    #[arg(long, value_name = "DIR")]
    nest: Option<String>,

    /// Stub file extension, without the dot.
    #[arg(long, value_name = "EXT")]
    ext: Option<String>,

    /// Number of days to scaffold.
    #[arg(long)]
    days: Option<u32>,

    /// Config file (defaults to `aoc-scaffold.toml` in the working directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log progress to stderr (`-vv` for every file).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// When to leave a day alone.
    #[arg(long, value_enum)]
    skip: Option<SkipArg>,

    /// Custom minijinja template for the stub file.
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Show what would be created without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Print the full report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
struct CheckArgs {
    #[command(flatten)]
    target: TargetArgs,

    /// Print the full report as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SkipArg {
    /// Create each missing file.
    File,
    /// Skip a day entirely once its input file exists.
    Slot,
}

impl From<SkipArg> for SkipPolicy {
    fn from(arg: SkipArg) -> Self {
        match arg {
            SkipArg::File => SkipPolicy::File,
            SkipArg::Slot => SkipPolicy::Slot,
        }
    }
}

impl TargetArgs {
    /// Config file values overridden by command-line flags.
    fn resolve_config(&self) -> Result<ScaffoldConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                if !path.exists() {
                    bail!("config file {} not found", path.display());
                }
                load_config(path)?
            }
            None => load_config(Path::new(CONFIG_FILE_NAME))?,
        };
        if let Some(year) = &self.year {
            cfg.year = year.clone();
        }
        if let Some(base_dir) = &self.base_dir {
            cfg.base_dir = base_dir.clone();
        }
        if let Some(nest) = &self.nest {
            cfg.nest_dir = Some(nest.clone());
        }
        if let Some(ext) = &self.ext {
            cfg.extension = ext.clone();
        }
        if let Some(days) = self.days {
            cfg.days = days;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Cli {
    fn verbosity(&self) -> u8 {
        match &self.command {
            Some(Command::Generate(args)) => args.target.verbose,
            Some(Command::Check(args)) => args.target.verbose,
            Some(Command::Config(args)) => args.verbose,
            None => self.generate.target.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity());
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            exit_codes::FAILED
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Some(Command::Generate(args)) => cmd_generate(&args),
        Some(Command::Check(args)) => cmd_check(&args),
        Some(Command::Config(args)) => cmd_config(&args),
        None => cmd_generate(&cli.generate),
    }
}

fn cmd_generate(args: &GenerateArgs) -> Result<i32> {
    let cfg = args.target.resolve_config()?;
    let mut options = GenerateOptions::from_config(&cfg);
    if let Some(skip) = args.skip {
        options.skip = skip.into();
    }
    if let Some(template) = &args.template {
        options.template = Some(template.clone());
    }
    options.dry_run = args.dry_run;

    let report = generate_with(&options)?;
    if args.json {
        print_json(&report)?;
    } else {
        println!("{}", report.summary());
    }
    Ok(exit_codes::OK)
}

fn cmd_check(args: &CheckArgs) -> Result<i32> {
    let cfg = args.target.resolve_config()?;
    let outcome = check_scaffold(&GenerateOptions::from_config(&cfg))?;
    if args.json {
        print_json(&outcome)?;
    } else {
        for slot in outcome.slots.iter().filter(|s| s.status != SlotStatus::Complete) {
            let missing: Vec<String> = slot
                .missing
                .iter()
                .filter_map(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .collect();
            println!("{} {:?}: missing {}", slot.label, slot.status, missing.join(", "));
        }
        println!(
            "{}: complete={} partial={} missing={}",
            outcome.target_dir.display(),
            outcome.count(SlotStatus::Complete),
            outcome.count(SlotStatus::Partial),
            outcome.count(SlotStatus::Missing)
        );
    }
    Ok(if outcome.is_complete() {
        exit_codes::OK
    } else {
        exit_codes::INCOMPLETE
    })
}

fn cmd_config(args: &TargetArgs) -> Result<i32> {
    let cfg = args.resolve_config()?;
    print!("{}", render_config(&cfg)?);
    Ok(exit_codes::OK)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{payload}");
    Ok(())
}
