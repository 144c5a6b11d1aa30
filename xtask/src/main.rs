//! Developer tasks (schema generation, catalog checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use renoguard_catalog::RuleCatalog;
use renoguard_domain::CategoryChecker;
use renoguard_types::RuleCategory;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_result_schema() -> schemars::Schema {
    schema_for!(renoguard_types::ComplianceResult)
}

fn generate_rule_schema() -> schemars::Schema {
    schema_for!(renoguard_types::Rule)
}

fn generate_categories_schema() -> schemars::Schema {
    schema_for!(Vec<renoguard_types::RuleCategoryInfo>)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(renoguard_settings::RenoguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "renoguard.result.v1.json",
            generate: generate_result_schema,
        },
        SchemaSpec {
            filename: "renoguard.rule.v1.json",
            generate: generate_rule_schema,
        },
        SchemaSpec {
            filename: "renoguard.categories.v1.json",
            generate: generate_categories_schema,
        },
        SchemaSpec {
            filename: "renoguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    for name in &missing {
        eprintln!("missing schema: {name}");
    }
    for name in &mismatched {
        eprintln!("schema out of date: {name}");
    }
    eprintln!("\nRun `cargo run -p xtask -- emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Load the built-in catalog and report which of its categories no checker fully evaluates.
fn catalog_coverage() -> anyhow::Result<()> {
    let catalog = RuleCatalog::builtin().context("built-in catalog does not load")?;
    println!(
        "built-in catalog {}: {} rules, {} active",
        catalog.version(),
        catalog.len(),
        catalog.count_active()
    );

    let mut unchecked = Vec::new();
    for info in catalog.categories() {
        let status = match CategoryChecker::for_category(info.id) {
            Some(_) => "checker",
            None => {
                unchecked.push(info.id);
                "NO CHECKER"
            }
        };
        println!("  {:<14} {:>3} active  {status}", info.id.as_str(), info.rules_count);
    }

    let uncovered: Vec<RuleCategory> = RuleCategory::ALL
        .into_iter()
        .filter(|c| CategoryChecker::for_category(*c).is_none())
        .collect();
    println!("categories without a checker: {uncovered:?}");

    if !unchecked.is_empty() {
        bail!("active built-in rules in categories without a checker: {unchecked:?}");
    }
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  catalog-coverage  Check the built-in catalog loads and every active category has a checker");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "catalog-coverage" => catalog_coverage(),
        other => bail!("unknown xtask command: {other}\n\nRun `cargo run -p xtask -- help` for usage."),
    }
    .context("xtask failed")
}
