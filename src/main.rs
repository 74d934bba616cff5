use anyhow::Result;
use clap::Parser;
use colored::control as color_control;
use comment_migration::cli::commands::generate::{
    ConfigOverrides, GenerateCommand, GenerateCommandHandler,
};
use comment_migration::cli::commands::init::{InitCommand, InitCommandHandler};
use comment_migration::cli::{Cli, Commands};
use comment_migration::core::config::Provider;
use std::env;
use std::io::{self, IsTerminal};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// ログ出力を初期化（RUST_LOG が優先）
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("comment_migration={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// コマンドを実行する
fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    match cli.command {
        Commands::Init { provider, force } => {
            let provider = provider.parse::<Provider>()?;
            let handler = InitCommandHandler::new();
            let command = InitCommand {
                project_path,
                provider,
                force,
            };
            let path = handler.execute(&command)?;
            Ok(format!("Config file created: {}", path.display()))
        }

        Commands::Generate(args) => {
            let handler = GenerateCommandHandler::new();
            let command = GenerateCommand {
                project_path,
                config_path: cli.config,
                overrides: ConfigOverrides {
                    schema_path: args.schema.clone(),
                    snapshot_path: args.latest_comment.clone(),
                    output_dir: args.output_dir.clone(),
                    targets: args.targets.clone(),
                    include_enum: args.include_enum_override(),
                    provider: args.provider.clone(),
                },
                migration_name: args.name.clone(),
                append: args.append,
                dry_run: args.dry_run,
                prompt_for_name: io::stdin().is_terminal(),
            };
            handler.execute(&command)
        }
    }
}
