// コメントスナップショット保存サービス
//
// 前回実行時のコメントスナップショット（JSON）の読み込みと保存を行います。
// 読み込みは実行開始時に一度、保存は差分が出力された場合のみ最後に一度行います。

use crate::core::comment::CommentSnapshot;
use crate::core::error::{CommentError, IoError};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// コメントスナップショット保存サービス
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// 新しいSnapshotStoreを作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// スナップショットファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 前回のスナップショットを読み込む
    ///
    /// ファイルが存在しない場合は空のスナップショットを返します。
    ///
    /// # Errors
    ///
    /// - ファイルの読み込みに失敗した場合
    /// - JSONとして不正、または未知のキーを含む場合（部分的な読み込みは行わない）
    pub fn load(&self) -> Result<CommentSnapshot> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No previous comment snapshot");
            return Ok(CommentSnapshot::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| IoError::FileRead {
            path: self.path.display().to_string(),
            cause: e.to_string(),
        })?;

        let snapshot = Self::parse(&content).map_err(|e| CommentError::SnapshotParse {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(
            path = %self.path.display(),
            entries = snapshot.len(),
            "Loaded previous comment snapshot"
        );

        Ok(snapshot)
    }

    /// スナップショットを保存する
    pub fn save(&self, snapshot: &CommentSnapshot) -> Result<()> {
        let content = Self::serialize(snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| IoError::DirectoryCreate {
                    path: parent.display().to_string(),
                    cause: e.to_string(),
                })?;
            }
        }

        fs::write(&self.path, content).map_err(|e| IoError::FileWrite {
            path: self.path.display().to_string(),
            cause: e.to_string(),
        })?;

        debug!(path = %self.path.display(), "Saved comment snapshot");
        Ok(())
    }

    /// JSON文字列からスナップショットを解析
    pub fn parse(content: &str) -> serde_json::Result<CommentSnapshot> {
        serde_json::from_str(content)
    }

    /// スナップショットをJSON文字列に変換（2スペースインデント、キーはソート済み）
    pub fn serialize(snapshot: &CommentSnapshot) -> serde_json::Result<String> {
        serde_json::to_string_pretty(snapshot)
    }
}
