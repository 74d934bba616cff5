// コメントドメインモデル
//
// 正規化済みのコメントスナップショット、差分エントリ、
// SQL生成時に参照するオブジェクトカタログを提供します。

use crate::core::config::Target;
use crate::core::error::CommentError;
use crate::core::schema::{ColumnType, Schema};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// カラム識別子（`table.column`）を生成
pub fn column_identifier(table_name: &str, column_name: &str) -> String {
    format!("{}.{}", table_name, column_name)
}

/// コメントスナップショット
///
/// ターゲット種別ごとに「識別子 -> コメント」を保持します。
/// エントリが存在しないことは「コメントなし」を意味し、空文字列とは区別します。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentSnapshot {
    /// テーブルコメント（テーブル名 -> コメント）
    #[serde(default)]
    pub table: BTreeMap<String, String>,

    /// カラムコメント（`table.column` -> コメント）
    #[serde(default)]
    pub column: BTreeMap<String, String>,
}

impl CommentSnapshot {
    /// 空のスナップショットを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// ターゲット種別のエントリを取得
    pub fn entries(&self, target: Target) -> &BTreeMap<String, String> {
        match target {
            Target::Table => &self.table,
            Target::Column => &self.column,
        }
    }

    fn entries_mut(&mut self, target: Target) -> &mut BTreeMap<String, String> {
        match target {
            Target::Table => &mut self.table,
            Target::Column => &mut self.column,
        }
    }

    /// コメントを登録
    ///
    /// 同一ターゲット内で識別子が既に存在する場合は上書きせずにエラーを返します。
    pub fn insert(
        &mut self,
        target: Target,
        identifier: String,
        comment: String,
    ) -> Result<(), CommentError> {
        let entries = self.entries_mut(target);
        if entries.contains_key(&identifier) {
            return Err(CommentError::IdentifierCollision {
                target: target.to_string(),
                identifier,
            });
        }
        entries.insert(identifier, comment);
        Ok(())
    }

    /// コメントを取得
    ///
    /// 空文字列のコメントは「コメントなし」として扱います。
    pub fn get(&self, target: Target, identifier: &str) -> Option<&str> {
        self.entries(target)
            .get(identifier)
            .map(String::as_str)
            .filter(|comment| !comment.is_empty())
    }

    /// 全ターゲットのエントリ数
    pub fn len(&self) -> usize {
        self.table.len() + self.column.len()
    }

    /// エントリが一つもないか
    pub fn is_empty(&self) -> bool {
        self.table.is_empty() && self.column.is_empty()
    }
}

/// 変更の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::Added => write!(f, "added"),
            ChangeKind::Removed => write!(f, "removed"),
            ChangeKind::Modified => write!(f, "modified"),
        }
    }
}

/// 差分エントリ
///
/// Added は previous なし・current あり、Removed はその逆、
/// Modified は両方ありかつ不一致であることを保証します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    /// ターゲット種別
    pub target: Target,
    /// オブジェクト識別子
    pub identifier: String,
    /// 前回のコメント
    pub previous: Option<String>,
    /// 現在のコメント
    pub current: Option<String>,
    /// 分類
    pub kind: ChangeKind,
}

impl ChangeEntry {
    /// 追加エントリを作成
    pub fn added(target: Target, identifier: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            target,
            identifier: identifier.into(),
            previous: None,
            current: Some(current.into()),
            kind: ChangeKind::Added,
        }
    }

    /// 削除エントリを作成
    pub fn removed(
        target: Target,
        identifier: impl Into<String>,
        previous: impl Into<String>,
    ) -> Self {
        Self {
            target,
            identifier: identifier.into(),
            previous: Some(previous.into()),
            current: None,
            kind: ChangeKind::Removed,
        }
    }

    /// 変更エントリを作成
    pub fn modified(
        target: Target,
        identifier: impl Into<String>,
        previous: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            target,
            identifier: identifier.into(),
            previous: Some(previous.into()),
            current: Some(current.into()),
            kind: ChangeKind::Modified,
        }
    }

    /// 設定すべきコメント（Removed の場合は None）
    pub fn target_comment(&self) -> Option<&str> {
        match self.kind {
            ChangeKind::Added | ChangeKind::Modified => self.current.as_deref(),
            ChangeKind::Removed => None,
        }
    }
}

/// カラム定義（SQL生成用）
///
/// MySQLの MODIFY COLUMN はカラム定義全体を再指定する必要があるため、
/// コメント以外の属性も保持します。
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// テーブル名
    pub table_name: String,
    /// カラム名
    pub column_name: String,
    /// カラム型
    pub column_type: ColumnType,
    /// NULL許可フラグ
    pub nullable: bool,
    /// デフォルト値
    pub default_value: Option<String>,
    /// 自動増分フラグ
    pub auto_increment: bool,
    /// ENUM参照時の値一覧
    pub enum_values: Vec<String>,
}

/// オブジェクトカタログ
///
/// 現在のスキーマに存在するテーブルとカラムの一覧です。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectCatalog {
    tables: BTreeSet<String>,
    columns: BTreeMap<String, ColumnDefinition>,
}

impl ObjectCatalog {
    /// スキーマからカタログを構築
    pub fn from_schema(schema: &Schema) -> Result<Self, CommentError> {
        let mut catalog = Self::default();

        for entity in &schema.entities {
            let table_name = entity.table_name();
            if !catalog.tables.insert(table_name.to_string()) {
                return Err(CommentError::IdentifierCollision {
                    target: Target::Table.to_string(),
                    identifier: table_name.to_string(),
                });
            }

            for field in &entity.fields {
                let enum_values = match field.enum_name() {
                    Some(enum_name) => schema
                        .get_enum(enum_name)
                        .map(|e| e.values.clone())
                        .ok_or_else(|| CommentError::UnknownEnumeration {
                            enum_name: enum_name.to_string(),
                            entity: entity.name.clone(),
                            field: field.name.clone(),
                        })?,
                    None => Vec::new(),
                };

                let identifier = column_identifier(table_name, field.column_name());
                if catalog.columns.contains_key(&identifier) {
                    return Err(CommentError::IdentifierCollision {
                        target: Target::Column.to_string(),
                        identifier,
                    });
                }

                catalog.columns.insert(
                    identifier,
                    ColumnDefinition {
                        table_name: table_name.to_string(),
                        column_name: field.column_name().to_string(),
                        column_type: field.column_type.clone(),
                        nullable: field.nullable,
                        default_value: field.default_value.clone(),
                        auto_increment: field.auto_increment,
                        enum_values,
                    },
                );
            }
        }

        Ok(catalog)
    }

    /// オブジェクトが存在するか
    pub fn contains(&self, target: Target, identifier: &str) -> bool {
        match target {
            Target::Table => self.tables.contains(identifier),
            Target::Column => self.columns.contains_key(identifier),
        }
    }

    /// テーブルが存在するか
    pub fn has_table(&self, table_name: &str) -> bool {
        self.tables.contains(table_name)
    }

    /// カラム定義を取得
    pub fn get_column(&self, identifier: &str) -> Option<&ColumnDefinition> {
        self.columns.get(identifier)
    }
}
