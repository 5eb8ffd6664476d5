use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde_json::{json, Value};
use std::io::Read;
use std::path::Path;

use crate::cli::{BodyArgs, Cli, Commands, KindArg, Target};
use crate::config::{self, Overrides};
use kalu_client::{ClientConfig, DashboardClient};
use kalu_schema::tables::{FIELD_PAIRS, VALUE_PAIRS};
use kalu_schema::{standard_profiles, FieldMap, SchemaProfiles, Translator, ValueMap};
use kalu_types::{Priority, RecordKind, TaskFilter, TaskStatus};

pub async fn run(cli: Cli) -> Result<()> {
    let Cli { command, api_url, token, timeout_secs, config: config_path, .. } = cli;
    let overrides = Overrides { api_url, token, timeout_secs };

    match command {
        Commands::Translate { to, kind, file } => translate(to, kind, file.as_deref()),
        Commands::Tables { kind, json } => print_tables(kind, json),
        Commands::CheckTables => check_tables(),
        Commands::Login { username, password } => {
            let client = connect(overrides, config_path.as_deref())?;
            let token = client.login(&username, &password).await?;
            print_json(&serde_json::to_value(token)?)
        },
        Commands::Get { path } => {
            let client = connect(overrides, config_path.as_deref())?;
            print_json(&client.get(&path).await?)
        },
        Commands::Post { path, body } => {
            let client = connect(overrides, config_path.as_deref())?;
            let record = read_body(&body)?;
            print_json(&client.post(&path, &record).await?)
        },
        Commands::Put { path, body } => {
            let client = connect(overrides, config_path.as_deref())?;
            let record = read_body(&body)?;
            print_json(&client.put(&path, &record).await?)
        },
        Commands::Delete { path } => {
            let client = connect(overrides, config_path.as_deref())?;
            print_json(&client.delete(&path).await?)
        },
        Commands::Health => {
            let client = connect(overrides, config_path.as_deref())?;
            let health = client.health().await?;
            println!("{} {}", "✓".green(), health.status);
            Ok(())
        },
        Commands::Stats { json } => {
            let client = connect(overrides, config_path.as_deref())?;
            let stats = client.overview_stats().await?;
            if json {
                return print_json(&serde_json::to_value(stats)?);
            }
            println!("{}", "Task Overview:".cyan().bold());
            println!("  Total:       {}", stats.total_tasks);
            println!("  Pending:     {}", stats.pending);
            println!("  In Progress: {}", stats.in_progress);
            println!("  Completed:   {}", stats.completed);
            println!("  Completion:  {:.1}%", stats.completion_rate);
            Ok(())
        },
        Commands::Tasks { status, company, priority, limit, json } => {
            let client = connect(overrides, config_path.as_deref())?;
            list_tasks(&client, status, company, priority, limit, json).await
        },
    }
}

fn connect(overrides: Overrides, config_path: Option<&Path>) -> Result<DashboardClient> {
    let config = load_client_config(overrides, config_path)?;
    tracing::info!(base_url = %config.base_url, "Using dashboard API");
    Ok(DashboardClient::new(config)?)
}

fn load_client_config(overrides: Overrides, config_path: Option<&Path>) -> Result<ClientConfig> {
    let file = match config_path.map(Path::to_path_buf).or_else(config::default_config_path) {
        Some(path) => config::load_file_config(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => config::FileConfig::default(),
    };
    Ok(config::resolve(overrides, file)?)
}

fn translate(to: Target, kind: Option<KindArg>, file: Option<&Path>) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => read_stdin()?,
    };
    let record = parse_record(&input)?;
    let profiles = standard_profiles()?;
    print_json(&translate_record(&profiles, kind, to, &record))
}

fn translate_record(
    profiles: &SchemaProfiles,
    kind: Option<KindArg>,
    to: Target,
    record: &Value,
) -> Value {
    profiles.for_kind(kind.map(RecordKind::from)).translate(record, to.into())
}

fn print_tables(kind: Option<KindArg>, as_json: bool) -> Result<()> {
    let profiles = standard_profiles()?;
    let translator = profiles.for_kind(kind.map(RecordKind::from));

    if as_json {
        return print_json(&tables_json(translator));
    }

    let label = kind.map_or_else(|| "general".to_string(), |k| RecordKind::from(k).to_string());
    println!("{} ({})", "Field table".cyan().bold(), label);
    println!("{}", pair_table(translator.fields().iter()));
    println!("{}", "Value table".cyan().bold());
    println!("{}", pair_table(translator.values().iter()));
    Ok(())
}

fn tables_json(translator: &Translator) -> Value {
    let fields: serde_json::Map<String, Value> =
        translator.fields().iter().map(|(e, i)| (e.to_string(), json!(i))).collect();
    let values: serde_json::Map<String, Value> =
        translator.values().iter().map(|(e, i)| (e.to_string(), json!(i))).collect();
    json!({ "fields": fields, "values": values })
}

fn pair_table<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["External", "Internal"]);
    for (external, internal) in pairs {
        table.add_row(vec![external, internal]);
    }
    table
}

/// Validate the tables exactly as shipped, then the per-kind split.
fn check_tables() -> Result<()> {
    let _ = ValueMap::new(VALUE_PAIRS.iter().copied())?;
    println!("{} value table: {} entries, injective", "✓".green(), VALUE_PAIRS.len());

    let _ = SchemaProfiles::standard()?;
    println!("{} per-kind field tables: injective", "✓".green());

    FieldMap::new(FIELD_PAIRS.iter().copied())
        .map(|_| ())
        .context("Shipped field table cannot be used as a single table")
}

async fn list_tasks(
    client: &DashboardClient,
    status: Option<TaskStatus>,
    company: Option<String>,
    priority: Option<Priority>,
    limit: Option<u32>,
    as_json: bool,
) -> Result<()> {
    let filter = TaskFilter { status, company, priority, limit, ..Default::default() };
    let tasks = client.list_tasks(&filter).await?;

    if as_json {
        return print_json(&serde_json::to_value(&tasks)?);
    }

    if tasks.is_empty() {
        println!("{}", "No tasks found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Title", "Company", "Priority", "Status"]);
    for task in &tasks {
        let status = match task.status {
            TaskStatus::Completed => Cell::new(&task.status).fg(Color::Green),
            TaskStatus::Cancelled | TaskStatus::Blocked => Cell::new(&task.status).fg(Color::Red),
            _ => Cell::new(&task.status),
        };
        table.add_row(vec![
            Cell::new(task.id),
            Cell::new(&task.title),
            Cell::new(&task.company),
            Cell::new(&task.priority),
            status,
        ]);
    }
    println!("{table}");
    println!("{} task(s)", tasks.len());
    Ok(())
}

fn read_body(body: &BodyArgs) -> Result<Value> {
    let input = match (&body.data, &body.file) {
        (Some(data), _) => data.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => read_stdin()?,
    };
    parse_record(&input)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    let _ = std::io::stdin().read_to_string(&mut input).context("Failed to read stdin")?;
    Ok(input)
}

fn parse_record(input: &str) -> Result<Value> {
    serde_json::from_str(input).context("Input is not valid JSON")
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_record_uses_kind() {
        let profiles = standard_profiles().unwrap();
        let record = json!({"doc_type": "HTML", "title": "T3 Oshakati Report", "version": "final"});

        let out = translate_record(&profiles, Some(KindArg::Document), Target::Internal, &record);
        assert_eq!(out, json!({"tipo": "HTML", "titulo": "T3 Oshakati Report", "versao": "final"}));

        let general = translate_record(&profiles, None, Target::Internal, &record);
        assert_eq!(general["doc_type"], "HTML");
    }

    #[test]
    fn test_tables_json_lists_pairs() {
        let profiles = standard_profiles().unwrap();
        let tables = tables_json(profiles.for_kind(Some(RecordKind::Memory)));
        assert_eq!(tables["fields"]["type"], "tipo");
        assert_eq!(tables["values"]["In Progress"], "Em Progresso");
        assert!(tables["fields"].get("doc_type").is_none());
    }

    #[test]
    fn test_check_tables_reports_shipped_collision() {
        let err = check_tables().unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("doc_type"));
        assert!(chain.contains("tipo"));
    }

    #[test]
    fn test_read_body_inline() {
        let body = BodyArgs { data: Some(r#"{"title": "X"}"#.to_string()), file: None };
        assert_eq!(read_body(&body).unwrap(), json!({"title": "X"}));
    }

    #[test]
    fn test_read_body_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.json");
        std::fs::write(&path, r#"[{"priority": "Low"}]"#).unwrap();

        let body = BodyArgs { data: None, file: Some(path) };
        assert_eq!(read_body(&body).unwrap(), json!([{"priority": "Low"}]));
    }

    #[test]
    fn test_parse_record_rejects_garbage() {
        assert!(parse_record("title: X").is_err());
    }
}
