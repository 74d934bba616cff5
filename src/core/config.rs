// 設定管理
//
// プロジェクト設定（YAML形式）の型定義と、
// プロバイダー・コメントターゲットの解釈を行います。

use crate::core::error::CommentError;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::str::FromStr;

/// データベースプロバイダー（SQL方言）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "mysql")]
    Mysql,
    #[serde(rename = "postgresql")]
    Postgresql,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Mysql => write!(f, "mysql"),
            Provider::Postgresql => write!(f, "postgresql"),
        }
    }
}

impl FromStr for Provider {
    type Err = CommentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mysql" => Ok(Provider::Mysql),
            "postgresql" | "postgres" => Ok(Provider::Postgresql),
            other => Err(CommentError::UnknownProvider {
                value: other.to_string(),
            }),
        }
    }
}

/// コメントターゲット種別
///
/// 宣言順（table → column）がスナップショットと差分の出力順になります。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Table,
    Column,
}

impl Target {
    /// すべてのターゲット
    pub const ALL: [Target; 2] = [Target::Table, Target::Column];

    /// スナップショット上のキー名
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Table => "table",
            Target::Column => "column",
        }
    }

    /// カンマ区切りのターゲット指定を解析
    ///
    /// 空要素は無視し、未知の名前はエラーにします。
    pub fn parse_list(value: &str) -> Result<Vec<Target>, CommentError> {
        let mut targets = Vec::new();
        for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let target: Target = part.parse()?;
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        Ok(targets)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = CommentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "table" => Ok(Target::Table),
            "column" => Ok(Target::Column),
            other => Err(CommentError::UnknownTarget {
                value: other.to_string(),
            }),
        }
    }
}

/// コメント導出の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentConfig {
    /// 有効なターゲット
    pub targets: BTreeSet<Target>,
    /// フィールドコメントにENUM値を含めるか
    pub include_enum_in_field_comment: bool,
}

impl CommentConfig {
    /// ターゲットが有効か
    pub fn is_enabled(&self, target: Target) -> bool {
        self.targets.contains(&target)
    }
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            targets: Target::ALL.into_iter().collect(),
            include_enum_in_field_comment: true,
        }
    }
}

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// スキーマ定義ファイル
    #[serde(default = "default_schema_path")]
    pub schema_path: PathBuf,

    /// 前回のコメントスナップショット
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// マイグレーション出力ディレクトリ
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// データベースプロバイダー
    #[serde(default = "default_provider")]
    pub provider: Provider,

    /// コメントターゲット
    #[serde(default = "default_targets")]
    pub targets: Vec<Target>,

    /// フィールドコメントにENUM値を含めるか
    #[serde(default = "default_include_enum")]
    pub include_enum_in_field_comment: bool,
}

fn default_schema_path() -> PathBuf {
    PathBuf::from(crate::core::naming::SCHEMA_FILE)
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from(crate::core::naming::SNAPSHOT_FILE)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(crate::core::naming::MIGRATIONS_DIR)
}

fn default_provider() -> Provider {
    Provider::Mysql
}

fn default_targets() -> Vec<Target> {
    Target::ALL.to_vec()
}

fn default_include_enum() -> bool {
    true
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = crate::core::naming::CONFIG_FILE;

    /// コメント導出用の設定を取得
    pub fn comment_config(&self) -> CommentConfig {
        CommentConfig {
            targets: self.targets.iter().copied().collect(),
            include_enum_in_field_comment: self.include_enum_in_field_comment,
        }
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(anyhow!("At least one comment target is required"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            snapshot_path: default_snapshot_path(),
            output_dir: default_output_dir(),
            provider: default_provider(),
            targets: default_targets(),
            include_enum_in_field_comment: default_include_enum(),
        }
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}
