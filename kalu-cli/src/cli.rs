use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use kalu_schema::Direction;
use kalu_types::{Priority, RecordKind, TaskStatus};

#[derive(Parser, Debug)]
#[command(
    name = "kalu",
    about = "Kalu Dashboard - PT/EN schema translation and API client",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, env = "KALU_API_URL", help = "Dashboard API base URL")]
    pub api_url: Option<String>,

    #[arg(long, global = true, env = "KALU_TOKEN", hide_env_values = true, help = "Bearer token")]
    pub token: Option<String>,

    #[arg(long, global = true, env = "KALU_TIMEOUT_SECS", help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,

    #[arg(long, global = true, env = "KALU_CONFIG", help = "Path to config.json")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Translate a JSON record read from a file or stdin")]
    Translate {
        #[arg(long, value_enum, help = "Target schema")]
        to: Target,

        #[arg(long, value_enum, help = "Record kind (selects the field table)")]
        kind: Option<KindArg>,

        #[arg(help = "Input file (stdin if omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Print the active field and value tables")]
    Tables {
        #[arg(long, value_enum, help = "Record kind (general table if omitted)")]
        kind: Option<KindArg>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Validate the configured tables as shipped")]
    CheckTables,

    #[command(about = "Log in and print the bearer token")]
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, env = "KALU_PASSWORD", hide_env_values = true)]
        password: String,
    },

    #[command(about = "GET a path and print the translated response")]
    Get { path: String },

    #[command(about = "POST a translated record")]
    Post {
        path: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "PUT a translated record")]
    Put {
        path: String,
        #[command(flatten)]
        body: BodyArgs,
    },

    #[command(about = "DELETE a path")]
    Delete { path: String },

    #[command(about = "Check API health")]
    Health,

    #[command(about = "Show task overview statistics")]
    Stats {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List tasks")]
    Tasks {
        #[arg(long, value_parser = parse_status, help = "Pending, In Progress, Completed, Cancelled")]
        status: Option<TaskStatus>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long, value_parser = parse_priority, help = "High, Medium, Low")]
        priority: Option<Priority>,

        #[arg(long)]
        limit: Option<u32>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct BodyArgs {
    #[arg(short, long, conflicts_with = "file", help = "Record as inline JSON")]
    pub data: Option<String>,

    #[arg(short, long, conflicts_with = "data", help = "Record from a JSON file (stdin if neither)")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Internal,
    External,
}

impl From<Target> for Direction {
    fn from(target: Target) -> Self {
        match target {
            Target::Internal => Self::ToInternal,
            Target::External => Self::ToExternal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Task,
    Document,
    Memory,
    Activity,
    Calendar,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Task => Self::Task,
            KindArg::Document => Self::Document,
            KindArg::Memory => Self::Memory,
            KindArg::Activity => Self::Activity,
            KindArg::Calendar => Self::Calendar,
        }
    }
}

/// Only the standard spellings are accepted as filters.
fn parse_status(s: &str) -> Result<TaskStatus, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .ok()
        .filter(TaskStatus::is_known)
        .ok_or_else(|| format!("unknown status: {}", s))
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .ok()
        .filter(Priority::is_known)
        .ok_or_else(|| format!("unknown priority: {}", s))
}
