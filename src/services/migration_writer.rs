// マイグレーションファイル出力サービス
//
// 生成されたCOMMENT文をマイグレーションディレクトリに書き出します。
// - 新規ディレクトリ `<タイムスタンプ>_<名前>/migration.sql` の作成
// - 最新のマイグレーションへの追記

use crate::core::error::IoError;
use crate::core::naming::{DEFAULT_MIGRATION_NAME, MIGRATION_SQL_FILE};
use anyhow::Result;
use chrono::Utc;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 出力結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutput {
    /// マイグレーションディレクトリ名
    pub dir_name: String,
    /// 書き込んだmigration.sqlのパス
    pub sql_path: PathBuf,
    /// 既存マイグレーションへ追記したか
    pub appended: bool,
}

/// マイグレーションファイル出力サービス
#[derive(Debug, Clone)]
pub struct MigrationWriter {
    migrations_dir: PathBuf,
}

impl MigrationWriter {
    /// 新しいMigrationWriterを作成
    pub fn new(migrations_dir: impl Into<PathBuf>) -> Self {
        Self {
            migrations_dir: migrations_dir.into(),
        }
    }

    /// SQL文を書き出す
    ///
    /// `append` が真で既存のマイグレーションがある場合は最新のものに追記し、
    /// それ以外は新しいマイグレーションディレクトリを作成します。
    pub fn write(
        &self,
        statements: &[String],
        migration_name: Option<&str>,
        append: bool,
    ) -> Result<MigrationOutput> {
        if append {
            if let Some(latest) = self.latest_migration_dir()? {
                return self.append_to(&latest, statements);
            }
            info!("No existing migration found, creating a new one");
        }

        let dir_name = self.directory_name(&self.generate_timestamp(), migration_name)?;
        self.create(&dir_name, statements)
    }

    /// 新しいマイグレーションディレクトリを作成して書き込む
    pub fn create(&self, dir_name: &str, statements: &[String]) -> Result<MigrationOutput> {
        let migration_dir = self.migrations_dir.join(dir_name);
        fs::create_dir_all(&migration_dir).map_err(|e| IoError::DirectoryCreate {
            path: migration_dir.display().to_string(),
            cause: e.to_string(),
        })?;

        let sql_path = migration_dir.join(MIGRATION_SQL_FILE);
        fs::write(&sql_path, statements.join("\n")).map_err(|e| IoError::FileWrite {
            path: sql_path.display().to_string(),
            cause: e.to_string(),
        })?;

        debug!(path = %sql_path.display(), statements = statements.len(), "Created migration");

        Ok(MigrationOutput {
            dir_name: dir_name.to_string(),
            sql_path,
            appended: false,
        })
    }

    /// 既存マイグレーションのmigration.sqlに追記する
    fn append_to(&self, dir_name: &str, statements: &[String]) -> Result<MigrationOutput> {
        let sql_path = self.migrations_dir.join(dir_name).join(MIGRATION_SQL_FILE);

        let mut content = if sql_path.exists() {
            fs::read_to_string(&sql_path).map_err(|e| IoError::FileRead {
                path: sql_path.display().to_string(),
                cause: e.to_string(),
            })?
        } else {
            String::new()
        };

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&statements.join("\n"));

        fs::write(&sql_path, content).map_err(|e| IoError::FileWrite {
            path: sql_path.display().to_string(),
            cause: e.to_string(),
        })?;

        debug!(path = %sql_path.display(), statements = statements.len(), "Appended to migration");

        Ok(MigrationOutput {
            dir_name: dir_name.to_string(),
            sql_path,
            appended: true,
        })
    }

    /// 最新（名前順で最後）のマイグレーションディレクトリ名を取得
    pub fn latest_migration_dir(&self) -> Result<Option<String>> {
        if !self.migrations_dir.exists() {
            return Ok(None);
        }

        let entries = fs::read_dir(&self.migrations_dir).map_err(|e| IoError::FileRead {
            path: self.migrations_dir.display().to_string(),
            cause: e.to_string(),
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| IoError::FileRead {
                path: self.migrations_dir.display().to_string(),
                cause: e.to_string(),
            })?;
            let path = entry.path();
            if path.is_dir() && is_migration_dir(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names.pop())
    }

    /// タイムスタンプを生成（YYYYMMDDHHMMSS, UTC）
    pub fn generate_timestamp(&self) -> String {
        Utc::now().format("%Y%m%d%H%M%S").to_string()
    }

    /// マイグレーションディレクトリ名を生成
    ///
    /// 名前の空白は `_` に置き換え、名前が空なら既定名を使用します。
    pub fn directory_name(&self, timestamp: &str, migration_name: Option<&str>) -> Result<String> {
        let name = match migration_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => sanitize_name(name)?,
            None => DEFAULT_MIGRATION_NAME.to_string(),
        };
        Ok(format!("{}_{}", timestamp, name))
    }
}

fn sanitize_name(name: &str) -> Result<String> {
    let whitespace = Regex::new(r"\s+")?;
    Ok(whitespace.replace_all(name, "_").into_owned())
}

/// マイグレーションディレクトリ（先頭が数字）かどうか
fn is_migration_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}
