// generateコマンドハンドラー
//
// コメント差分検出とマイグレーションファイル生成を実装します。
// - スキーマ定義の読み込み
// - 前回のコメントスナップショットの読み込み
// - 差分検出とCOMMENT文の生成
// - マイグレーションの書き込み後にスナップショットを更新

use crate::cli::command_context::CommandContext;
use crate::core::config::{Config, Provider, Target};
use crate::core::comment::ChangeKind;
use crate::services::comment_pipeline::{CommentPipeline, PipelineResult};
use crate::services::migration_writer::MigrationWriter;
use crate::services::schema_parser::SchemaParserService;
use crate::services::snapshot_store::SnapshotStore;
use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Input;
use std::path::PathBuf;
use tracing::{debug, info};

/// コマンドラインからの設定上書き
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// スキーマファイル
    pub schema_path: Option<PathBuf>,
    /// コメントスナップショット
    pub snapshot_path: Option<PathBuf>,
    /// マイグレーション出力ディレクトリ
    pub output_dir: Option<PathBuf>,
    /// カンマ区切りのターゲット
    pub targets: Option<String>,
    /// ENUM値の埋め込み
    pub include_enum: Option<bool>,
    /// プロバイダー名
    pub provider: Option<String>,
}

impl ConfigOverrides {
    /// 設定に上書きを適用
    ///
    /// プロバイダー・ターゲットの不正値はSQL生成の前にここで拒否します。
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(path) = &self.schema_path {
            config.schema_path = path.clone();
        }
        if let Some(path) = &self.snapshot_path {
            config.snapshot_path = path.clone();
        }
        if let Some(path) = &self.output_dir {
            config.output_dir = path.clone();
        }
        if let Some(targets) = &self.targets {
            config.targets = Target::parse_list(targets)?;
        }
        if let Some(include_enum) = self.include_enum {
            config.include_enum_in_field_comment = include_enum;
        }
        if let Some(provider) = &self.provider {
            config.provider = provider.parse::<Provider>()?;
        }
        config.validate()
    }
}

/// generateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// 設定ファイルのパス（オプション）
    pub config_path: Option<PathBuf>,
    /// 設定の上書き
    pub overrides: ConfigOverrides,
    /// マイグレーション名（オプション）
    pub migration_name: Option<String>,
    /// 最新のマイグレーションに追記する
    pub append: bool,
    /// ドライラン（SQLを表示するがファイルは作成しない）
    pub dry_run: bool,
    /// 名前未指定時に対話的に入力を求める
    pub prompt_for_name: bool,
}

/// generateコマンドハンドラー
#[derive(Debug, Clone)]
pub struct GenerateCommandHandler {}

impl GenerateCommandHandler {
    /// 新しいGenerateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// generateコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - generateコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は表示用メッセージ、失敗時はエラー
    pub fn execute(&self, command: &GenerateCommand) -> Result<String> {
        let mut context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;
        command.overrides.apply(&mut context.config)?;

        let config = &context.config;
        debug!(
            provider = %config.provider,
            targets = ?config.targets,
            include_enum = config.include_enum_in_field_comment,
            "Resolved configuration"
        );

        // 現在のスキーマを読み込む
        let schema_path = context.require_schema_path()?;
        let schema = SchemaParserService::new()
            .parse_schema_file(&schema_path)
            .with_context(|| "Failed to read schema")?;

        // 前回のスナップショットを読み込む（存在しない場合は空）
        let store = SnapshotStore::new(context.snapshot_path());
        let previous = store
            .load()
            .with_context(|| "Failed to load latest comment snapshot")?;

        let pipeline = CommentPipeline::new(config.comment_config(), config.provider);
        let result = pipeline.run(&schema, &previous)?;

        if result.is_noop() {
            // 削除済みオブジェクトのコメントはSQLなしでスナップショットから取り除く
            if !command.dry_run && result.needs_snapshot_update() {
                store
                    .save(&result.current)
                    .with_context(|| "Failed to update latest comment snapshot")?;
                info!(
                    orphaned = result.orphaned.len(),
                    "Dropped comments of removed objects from snapshot"
                );
            }
            info!("No comment changes detected");
            return Ok(
                "No changes detected, skipping creating a fresh comments migration..."
                    .to_string(),
            );
        }

        if command.dry_run {
            return Ok(self.format_dry_run(&result));
        }

        let migration_name = self.resolve_migration_name(command)?;

        // マイグレーションを書き込んでからスナップショットを更新する
        let writer = MigrationWriter::new(context.output_dir());
        let output = writer.write(
            &result.statements,
            migration_name.as_deref(),
            command.append,
        )?;

        store
            .save(&result.current)
            .with_context(|| "Failed to update latest comment snapshot")?;

        info!(
            migration = %output.dir_name,
            statements = result.statements.len(),
            appended = output.appended,
            "Comment migration written"
        );

        Ok(format!(
            "Comments generation completed: {}",
            output.dir_name.cyan()
        ))
    }

    /// マイグレーション名を決定
    ///
    /// 追記モードでは名前を使わないため入力を求めません。
    fn resolve_migration_name(&self, command: &GenerateCommand) -> Result<Option<String>> {
        if command.migration_name.is_some() || command.append || !command.prompt_for_name {
            return Ok(command.migration_name.clone());
        }
        prompt_migration_name()
    }

    /// dry-runモードの出力を整形
    fn format_dry_run(&self, result: &PipelineResult) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{}", "=== Dry Run: Comment Migration Preview ===".bold()));
        lines.push(self.format_summary(result));
        lines.push(String::new());
        lines.extend(result.statements.iter().cloned());

        lines.join("\n")
    }

    /// 変更件数のサマリー
    fn format_summary(&self, result: &PipelineResult) -> String {
        let count = |kind: ChangeKind| result.changes.iter().filter(|c| c.kind == kind).count();
        format!(
            "{} added, {} modified, {} removed",
            count(ChangeKind::Added).to_string().green(),
            count(ChangeKind::Modified).to_string().yellow(),
            count(ChangeKind::Removed).to_string().red()
        )
    }
}

impl Default for GenerateCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// マイグレーション名を対話的に入力させる
///
/// 空入力の場合は None を返します。
pub fn prompt_migration_name() -> Result<Option<String>> {
    let answer: String = Input::new()
        .with_prompt("Enter migration name (leave empty for default)")
        .allow_empty(true)
        .interact_text()
        .with_context(|| "Failed to read migration name")?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}
