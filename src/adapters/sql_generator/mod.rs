// SQL生成アダプター
//
// コメント差分から各データベース方言用のCOMMENT文を生成するアダプター層。

pub mod mysql;
pub mod postgres;

use crate::core::comment::{ChangeEntry, ColumnDefinition, ObjectCatalog};
use crate::core::config::{Provider, Target};
use crate::core::error::CommentError;
use mysql::MysqlCommentGenerator;
use postgres::PostgresCommentGenerator;

/// SQLジェネレータートレイト
///
/// 各データベース方言用のCOMMENT文ジェネレーターが実装すべきインターフェース。
/// `comment` が None の場合はコメントを削除する文を生成します。
pub trait CommentSqlGenerator {
    /// テーブルコメントの設定・削除文を生成
    ///
    /// # Arguments
    ///
    /// * `table_name` - データベース上のテーブル名
    /// * `comment` - 設定するコメント（None で削除）
    fn generate_table_comment(&self, table_name: &str, comment: Option<&str>) -> String;

    /// カラムコメントの設定・削除文を生成
    ///
    /// # Arguments
    ///
    /// * `column` - 対象カラムの定義
    /// * `comment` - 設定するコメント（None で削除）
    fn generate_column_comment(&self, column: &ColumnDefinition, comment: Option<&str>)
        -> String;
}

/// COMMENT文レンダラー
///
/// 差分エントリ1件につき1文を、入力と同じ順序で生成します。
#[derive(Debug, Clone)]
pub struct StatementRenderer {
    provider: Provider,
}

impl StatementRenderer {
    /// 新しいStatementRendererを作成
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    /// 対象プロバイダー
    pub fn provider(&self) -> Provider {
        self.provider
    }

    fn generator(&self) -> &'static dyn CommentSqlGenerator {
        match self.provider {
            Provider::Mysql => &MysqlCommentGenerator,
            Provider::Postgresql => &PostgresCommentGenerator,
        }
    }

    /// 差分エントリをSQL文に変換
    ///
    /// # Errors
    ///
    /// カタログに存在しないオブジェクトへの変更が含まれる場合。
    /// その場合は一文も返しません。
    pub fn render(
        &self,
        changes: &[ChangeEntry],
        catalog: &ObjectCatalog,
    ) -> Result<Vec<String>, CommentError> {
        let generator = self.generator();

        changes
            .iter()
            .map(|change| {
                let comment = change.target_comment();
                match change.target {
                    Target::Table => {
                        if !catalog.has_table(&change.identifier) {
                            return Err(unknown_object(change));
                        }
                        Ok(generator.generate_table_comment(&change.identifier, comment))
                    }
                    Target::Column => catalog
                        .get_column(&change.identifier)
                        .map(|column| generator.generate_column_comment(column, comment))
                        .ok_or_else(|| unknown_object(change)),
                }
            })
            .collect()
    }
}

fn unknown_object(change: &ChangeEntry) -> CommentError {
    CommentError::UnknownObject {
        target: change.target.to_string(),
        identifier: change.identifier.clone(),
    }
}
