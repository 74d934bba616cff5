// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// comment-migration - Generate COMMENT migrations from a schema definition
///
/// Derives table and column comments from schema documentation and emits
/// SQL only for the comments that changed since the last run.
#[derive(Parser, Debug)]
#[command(name = "comment-migration")]
#[command(author = "Comment Migration Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate COMMENT migrations from a schema definition")]
#[command(long_about = "comment-migration - Generate COMMENT migrations from a schema definition

Table and column comments are derived from the documentation in your schema
file. The comments written by the previous run are kept in a snapshot file,
so each run only emits the statements needed to apply the difference.

Supported databases: MySQL, PostgreSQL")]
#[command(propagate_version = true)]
#[command(after_help = "GETTING STARTED:
  1. Create a config file:          comment-migration init --provider postgresql
  2. Document your schema:          Edit documentation in schema.yaml
  3. Generate a comment migration:  comment-migration generate --name add_comments

For detailed help on each command, use: comment-migration <command> --help")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a configuration file with default settings
    ///
    /// EXAMPLES:
    ///   # Initialize for MySQL
    ///   comment-migration init
    ///
    ///   # Initialize for PostgreSQL, overwriting an existing config
    ///   comment-migration init --provider postgresql --force
    Init {
        /// Database provider (mysql, postgresql)
        #[arg(short, long, value_name = "PROVIDER", default_value = "mysql")]
        provider: String,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a comment migration from documentation changes
    ///
    /// Compares the comments derived from the current schema with the
    /// snapshot of the previous run and writes the statements for any
    /// detected changes.
    ///
    /// EXAMPLES:
    ///   # Generate a migration with a name
    ///   comment-migration generate --name add_user_comments
    ///
    ///   # Append to the latest migration instead of creating a new one
    ///   comment-migration generate --append
    ///
    ///   # Preview the SQL without writing anything
    ///   comment-migration generate --dry-run
    Generate(GenerateArgs),
}

/// generateコマンドの引数
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to the schema definition file
    #[arg(short, long, value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Path to the latest comment snapshot file
    #[arg(short = 'l', long = "latest-comment", value_name = "PATH")]
    pub latest_comment: Option<PathBuf>,

    /// Comma-separated comment targets: table,column
    #[arg(short, long, value_name = "TARGETS")]
    pub targets: Option<String>,

    /// Include enum values in field comments
    #[arg(short = 'e', long, conflicts_with = "no_include_enum")]
    pub include_enum: bool,

    /// Do not include enum values in field comments
    #[arg(long)]
    pub no_include_enum: bool,

    /// Database provider (mysql, postgresql)
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Output directory for migrations
    #[arg(short, long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Migration name (prompted for when omitted in an interactive terminal)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Append to the latest migration instead of creating a new one
    #[arg(short, long)]
    pub append: bool,

    /// Dry run - show SQL without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// ENUM値の埋め込み指定（未指定なら None）
    pub fn include_enum_override(&self) -> Option<bool> {
        if self.include_enum {
            Some(true)
        } else if self.no_include_enum {
            Some(false)
        } else {
            None
        }
    }
}
