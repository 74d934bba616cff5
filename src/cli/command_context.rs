// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::core::config::Config;
use crate::services::config_loader::ConfigLoader;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// プロジェクトルートから設定を読み込んでコンテキストを作成
    ///
    /// 設定ファイルが明示された場合は存在必須、既定パスの場合は省略可能です。
    pub fn load(project_path: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let (config_path, explicit) = match config_path {
            Some(path) => (resolve(&project_path, &path), true),
            None => (project_path.join(Config::DEFAULT_CONFIG_PATH), false),
        };

        if explicit && !config_path.exists() {
            return Err(anyhow!("Config file not found: {:?}", config_path));
        }

        let config = ConfigLoader::load_or_default(&config_path)
            .with_context(|| "Failed to read config file")?;

        Ok(Self {
            project_path,
            config_path,
            config,
        })
    }

    /// スキーマファイルの絶対パス
    pub fn schema_path(&self) -> PathBuf {
        resolve(&self.project_path, &self.config.schema_path)
    }

    /// スキーマファイルが存在することを確認して返す
    pub fn require_schema_path(&self) -> Result<PathBuf> {
        let path = self.schema_path();
        if !path.exists() {
            return Err(anyhow!("Could not find schema file at {:?}", path));
        }
        Ok(path)
    }

    /// コメントスナップショットの絶対パス
    pub fn snapshot_path(&self) -> PathBuf {
        resolve(&self.project_path, &self.config.snapshot_path)
    }

    /// マイグレーション出力ディレクトリの絶対パス
    pub fn output_dir(&self) -> PathBuf {
        resolve(&self.project_path, &self.config.output_dir)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
