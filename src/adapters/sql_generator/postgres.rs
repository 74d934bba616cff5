// PostgreSQL用SQLジェネレーター
//
// コメント差分からPostgreSQL用のCOMMENT ON文を生成します。
// 型情報は不要です。

use crate::adapters::sql_generator::CommentSqlGenerator;
use crate::adapters::sql_quote::{quote_identifier_postgres, quote_literal_postgres};
use crate::core::comment::ColumnDefinition;

/// PostgreSQL用SQLジェネレーター
#[derive(Debug, Clone)]
pub struct PostgresCommentGenerator;

impl PostgresCommentGenerator {
    /// 新しいPostgresCommentGeneratorを作成
    pub fn new() -> Self {
        Self
    }

    /// コメント値（None は NULL）
    fn comment_value(&self, comment: Option<&str>) -> String {
        comment
            .map(quote_literal_postgres)
            .unwrap_or_else(|| "NULL".to_string())
    }
}

impl Default for PostgresCommentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentSqlGenerator for PostgresCommentGenerator {
    fn generate_table_comment(&self, table_name: &str, comment: Option<&str>) -> String {
        format!(
            "COMMENT ON TABLE {} IS {};",
            quote_identifier_postgres(table_name),
            self.comment_value(comment)
        )
    }

    fn generate_column_comment(
        &self,
        column: &ColumnDefinition,
        comment: Option<&str>,
    ) -> String {
        format!(
            "COMMENT ON COLUMN {}.{} IS {};",
            quote_identifier_postgres(&column.table_name),
            quote_identifier_postgres(&column.column_name),
            self.comment_value(comment)
        )
    }
}
