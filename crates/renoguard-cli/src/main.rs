//! CLI entry point for renoguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `renoguard-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use logging::{LogConfig, LogFormat, init_logging};
use renoguard_app::{
    CatalogSource, EngineInput, exit_code, list_rules, load_catalog, load_engine,
    parse_operation_json, parse_scene_json, run_operation_check, run_scene_check, run_validation,
};
use renoguard_catalog::{ListOptions, RuleCatalog};
use renoguard_settings::Overrides;
use renoguard_types::{RuleCategory, Severity};
use serde::Serialize;
use std::io::IsTerminal;

#[derive(Parser, Debug)]
#[command(
    name = "renoguard",
    version,
    about = "Building-code compliance checks for floor-plan renovations"
)]
struct Cli {
    /// Path to renoguard config TOML. A missing file means defaults.
    #[arg(long, default_value = "renoguard.toml")]
    config: Utf8PathBuf,

    /// Rule catalog (TOML, or JSON when the name ends in `.json`). Defaults to the built-in catalog.
    #[arg(long)]
    catalog: Option<Utf8PathBuf>,

    /// Override profile (strict|advisory).
    #[arg(long)]
    profile: Option<String>,

    /// Override the rule-set version stamped on results.
    #[arg(long)]
    rules_version: Option<String>,

    /// Evaluate categories one after another instead of in parallel.
    #[arg(long)]
    sequential: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a whole scene against every active rule.
    Check {
        /// Scene JSON file.
        #[arg(long)]
        scene: Utf8PathBuf,

        /// Where to write the JSON result (stdout if not specified).
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },

    /// Check one proposed operation against the rules that cover it.
    CheckOp {
        /// Scene JSON file.
        #[arg(long)]
        scene: Utf8PathBuf,

        /// Operation JSON file.
        #[arg(long)]
        operation: Utf8PathBuf,

        /// Where to write the JSON verdict (stdout if not specified).
        #[arg(long)]
        out: Option<Utf8PathBuf>,
    },

    /// Quick validation: report only ERROR-severity violations.
    Validate {
        /// Scene JSON file.
        #[arg(long)]
        scene: Utf8PathBuf,
    },

    /// List catalog rules.
    Rules {
        /// Only rules of this category (e.g. load_bearing).
        #[arg(long)]
        category: Option<String>,

        /// Only rules of this severity (info|warning|error).
        #[arg(long)]
        severity: Option<String>,

        #[arg(long)]
        active_only: bool,

        /// Page size (0 = everything).
        #[arg(long, default_value = "0")]
        limit: usize,

        #[arg(long, default_value = "0")]
        offset: usize,
    },

    /// Show rule categories with their active rule counts.
    Categories,
}

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(cli.log_format)
        .with_ansi(std::io::stderr().is_terminal());
    init_logging(&log_config);

    match run(&cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("renoguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Check { scene, out } => cmd_check(cli, scene, out.as_deref()),
        Commands::CheckOp {
            scene,
            operation,
            out,
        } => cmd_check_op(cli, scene, operation, out.as_deref()),
        Commands::Validate { scene } => cmd_validate(cli, scene),
        Commands::Rules {
            category,
            severity,
            active_only,
            limit,
            offset,
        } => {
            let opts = ListOptions {
                category: category
                    .as_deref()
                    .map(str::parse::<RuleCategory>)
                    .transpose()
                    .context("--category")?,
                severity: severity
                    .as_deref()
                    .map(str::parse::<Severity>)
                    .transpose()
                    .context("--severity")?,
                active_only: *active_only,
                limit: *limit,
                offset: *offset,
            };
            cmd_rules(cli, &opts)
        }
        Commands::Categories => cmd_categories(cli),
    }
}

fn cmd_check(cli: &Cli, scene_path: &Utf8Path, out: Option<&Utf8Path>) -> anyhow::Result<i32> {
    let engine = build_engine(cli)?;
    let scene = parse_scene_json(&read_text(scene_path)?)
        .with_context(|| format!("load scene: {scene_path}"))?;

    let result = run_scene_check(&engine, &scene);
    emit_json(out, &result)?;
    Ok(exit_code(
        result.compliant,
        result.is_fully_covered(),
        engine.config(),
    ))
}

fn cmd_check_op(
    cli: &Cli,
    scene_path: &Utf8Path,
    op_path: &Utf8Path,
    out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let engine = build_engine(cli)?;
    let scene = parse_scene_json(&read_text(scene_path)?)
        .with_context(|| format!("load scene: {scene_path}"))?;
    let op = parse_operation_json(&read_text(op_path)?)
        .with_context(|| format!("load operation: {op_path}"))?;

    let verdict = run_operation_check(&engine, &scene, &op);
    emit_json(out, &verdict)?;
    Ok(exit_code(
        verdict.allowed,
        verdict.is_fully_covered(),
        engine.config(),
    ))
}

fn cmd_validate(cli: &Cli, scene_path: &Utf8Path) -> anyhow::Result<i32> {
    let engine = build_engine(cli)?;
    let scene = parse_scene_json(&read_text(scene_path)?)
        .with_context(|| format!("load scene: {scene_path}"))?;

    let validation = run_validation(&engine, &scene);
    emit_json(None, &validation)?;
    Ok(exit_code(
        validation.valid,
        validation.coverage_gaps.is_empty(),
        engine.config(),
    ))
}

fn cmd_rules(cli: &Cli, opts: &ListOptions) -> anyhow::Result<i32> {
    let catalog = read_catalog(cli)?;
    emit_json(None, &list_rules(&catalog, opts))?;
    Ok(0)
}

fn cmd_categories(cli: &Cli) -> anyhow::Result<i32> {
    let catalog = read_catalog(cli)?;
    emit_json(None, &catalog.categories())?;
    Ok(0)
}

fn build_engine(cli: &Cli) -> anyhow::Result<renoguard_app::RuleEngine> {
    // Missing config file is allowed (defaults apply).
    let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let overrides = Overrides {
        profile: cli.profile.clone(),
        rules_version: cli.rules_version.clone(),
        parallel: cli.sequential.then_some(false),
    };
    load_engine(EngineInput {
        config_text: &config_text,
        catalog: read_catalog(cli)?,
        overrides,
    })
}

fn read_catalog(cli: &Cli) -> anyhow::Result<RuleCatalog> {
    match &cli.catalog {
        None => load_catalog(CatalogSource::Builtin),
        Some(path) => {
            let text = read_text(path)?;
            load_catalog(CatalogSource::from_file(path.as_str(), &text))
                .with_context(|| format!("load catalog: {path}"))
        }
    }
}

fn read_text(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {path}"))
}

fn emit_json<T: Serialize>(out: Option<&Utf8Path>, value: &T) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create directory: {parent}"))?;
            }
            std::fs::write(path, data + "\n").with_context(|| format!("write output: {path}"))?;
        }
        None => println!("{data}"),
    }
    Ok(())
}
