//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockroom_domain::{ResourceKind, StockRequest};

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

/// Resource kind argument
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Tool,
    Material,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Tool => ResourceKind::Tool,
            KindArg::Material => ResourceKind::Material,
        }
    }
}

/// CLI arguments for stockroom
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(author, version, about = "Storage management - tools, materials, users and builds")]
#[command(long_about = r#"
Stockroom tracks a fleet of reusable tools and consumable materials and
mediates their use by users, including a composite "build" operation that
validates and consumes multiple resources at once.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./stockroom.toml      Project-level config
3. ~/.config/stockroom/config.toml   Global config

Example:
  stockroom create-material Wood --amount 20 --cost 1.5 --supplier "Forest Co"
  stockroom build <user-id> --tool Hammer:1 --material Wood:20 --material Metal:50
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Use an ephemeral in-memory store instead of the JSON document
    #[arg(long, global = true)]
    pub memory: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a tool
    CreateTool {
        /// Tool name
        name: String,
        /// Starting stock level
        #[arg(long)]
        amount: u32,
        /// Unit cost
        #[arg(long)]
        cost: f64,
        /// What the tool is for
        #[arg(long)]
        usage: String,
        /// Starting condition (0-100)
        #[arg(long, default_value_t = 100)]
        condition: u8,
    },

    /// Create a material
    CreateMaterial {
        /// Material name
        name: String,
        /// Starting stock level
        #[arg(long)]
        amount: u32,
        /// Unit cost
        #[arg(long)]
        cost: f64,
        /// Supplier name
        #[arg(long)]
        supplier: String,
        /// Quality grade label
        #[arg(long, default_value = "standard")]
        quality: String,
    },

    /// Create a user
    CreateUser {
        name: String,
        #[arg(long)]
        age: u32,
    },

    /// List all resources of one kind
    List { kind: KindArg },

    /// Patch fields on a resource (only fields valid for its kind)
    Update {
        /// Resource id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        amount: Option<u32>,
        #[arg(long)]
        cost: Option<f64>,
        /// Tool-only
        #[arg(long)]
        usage: Option<String>,
        /// Tool-only
        #[arg(long)]
        condition: Option<u8>,
        /// Material-only
        #[arg(long)]
        supplier: Option<String>,
        /// Material-only
        #[arg(long)]
        quality: Option<String>,
    },

    /// Delete a resource by id
    Delete { id: String },

    /// Use a tool on behalf of a user
    Use {
        user_id: String,
        tool_id: String,
    },

    /// Repair a tool (+20 condition, capped at 100)
    Fix { tool_id: String },

    /// List the names of tools a user has used
    UsedTools {
        /// User name, matched case-insensitively
        user: String,
        /// Treat USER as a user id instead of a name
        #[arg(long)]
        by_id: bool,
    },

    /// Record a stock arrival for a tool or material
    AddStock {
        kind: KindArg,
        name: String,
        /// Units to add (must be positive)
        amount: i64,
    },

    /// Build something from tools and materials
    Build {
        user_id: String,
        /// Required tool as NAME:QTY (repeatable)
        #[arg(short, long = "tool", value_name = "NAME:QTY", value_parser = parse_stock_request)]
        tools: Vec<StockRequest>,
        /// Required material as NAME:QTY (repeatable)
        #[arg(short, long = "material", value_name = "NAME:QTY", value_parser = parse_stock_request)]
        materials: Vec<StockRequest>,
    },
}

/// Parse a `NAME:QTY` requirement.
///
/// Rejects malformed lines and non-integer quantities before anything
/// reaches the engine.
pub fn parse_stock_request(raw: &str) -> Result<StockRequest, String> {
    let Some((name, quantity)) = raw.rsplit_once(':') else {
        return Err(format!("expected NAME:QTY, got '{raw}'"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{raw}'"));
    }
    let quantity: u32 = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity in '{raw}' (expected a non-negative integer)"))?;
    Ok(StockRequest::new(name, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_quantity() {
        let request = parse_stock_request("Wood:20").unwrap();
        assert_eq!(request.name, "Wood");
        assert_eq!(request.quantity, 20);
    }

    #[test]
    fn trims_whitespace() {
        let request = parse_stock_request(" Iron Nails : 5 ").unwrap();
        assert_eq!(request.name, "Iron Nails");
        assert_eq!(request.quantity, 5);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_stock_request("Wood").is_err());
        assert!(parse_stock_request(":5").is_err());
        assert!(parse_stock_request("Wood:lots").is_err());
        assert!(parse_stock_request("Wood:-2").is_err());
        assert!(parse_stock_request("Wood:2.5").is_err());
    }
}
