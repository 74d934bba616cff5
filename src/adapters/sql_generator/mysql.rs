// MySQL用SQLジェネレーター
//
// コメント差分からMySQL用のALTER TABLE文を生成します。

use crate::adapters::sql_generator::CommentSqlGenerator;
use crate::adapters::sql_quote::{quote_identifier_mysql, quote_literal_mysql};
use crate::core::comment::ColumnDefinition;
use crate::core::schema::ColumnType;

/// MySQL用SQLジェネレーター
#[derive(Debug, Clone)]
pub struct MysqlCommentGenerator;

impl MysqlCommentGenerator {
    /// 新しいMysqlCommentGeneratorを作成
    pub fn new() -> Self {
        Self
    }

    /// MODIFY COLUMN用のカラム定義を生成
    ///
    /// MySQLのMODIFY COLUMNは完全なカラム定義が必要なため、
    /// 型・NULL制約・AUTO_INCREMENT・デフォルト値をすべて再指定します。
    fn generate_column_definition_for_modify(&self, column: &ColumnDefinition) -> String {
        let mut parts = Vec::new();

        // カラム名
        parts.push(quote_identifier_mysql(&column.column_name));

        // データ型
        parts.push(self.map_column_type(&column.column_type, &column.enum_values));

        // NULL制約
        if !column.nullable {
            parts.push("NOT NULL".to_string());
        }

        // AUTO_INCREMENT（MySQLではデータ型の後に指定）
        if column.auto_increment {
            parts.push("AUTO_INCREMENT".to_string());
        }

        // デフォルト値
        if let Some(ref default_value) = column.default_value {
            parts.push(format!("DEFAULT {}", default_value));
        }

        parts.join(" ")
    }

    /// ColumnTypeをMySQLの型文字列にマッピング
    fn map_column_type(&self, column_type: &ColumnType, enum_values: &[String]) -> String {
        match column_type {
            ColumnType::INTEGER { precision } => match precision {
                Some(2) => "SMALLINT".to_string(),
                Some(8) => "BIGINT".to_string(),
                _ => "INT".to_string(),
            },
            ColumnType::VARCHAR { length } => format!("VARCHAR({})", length),
            ColumnType::TEXT => "TEXT".to_string(),
            ColumnType::BOOLEAN => "TINYINT(1)".to_string(),
            ColumnType::TIMESTAMP { .. } => "TIMESTAMP".to_string(),
            ColumnType::JSON => "JSON".to_string(),
            ColumnType::DECIMAL { precision, scale } => {
                format!("DECIMAL({}, {})", precision, scale)
            }
            ColumnType::FLOAT => "FLOAT".to_string(),
            ColumnType::DOUBLE => "DOUBLE".to_string(),
            ColumnType::CHAR { length } => format!("CHAR({})", length),
            ColumnType::DATE => "DATE".to_string(),
            ColumnType::TIME { .. } => "TIME".to_string(),
            ColumnType::BLOB => "BLOB".to_string(),
            ColumnType::UUID => "CHAR(36)".to_string(),
            // MySQLのENUMはインライン定義
            ColumnType::Enum { .. } => format!(
                "ENUM({})",
                enum_values
                    .iter()
                    .map(|v| quote_literal_mysql(v))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl Default for MysqlCommentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentSqlGenerator for MysqlCommentGenerator {
    fn generate_table_comment(&self, table_name: &str, comment: Option<&str>) -> String {
        // MySQLではコメントの削除は空文字列の設定で表現する
        format!(
            "ALTER TABLE {} COMMENT = {};",
            quote_identifier_mysql(table_name),
            quote_literal_mysql(comment.unwrap_or(""))
        )
    }

    fn generate_column_comment(
        &self,
        column: &ColumnDefinition,
        comment: Option<&str>,
    ) -> String {
        format!(
            "ALTER TABLE {} MODIFY COLUMN {} COMMENT {};",
            quote_identifier_mysql(&column.table_name),
            self.generate_column_definition_for_modify(column),
            quote_literal_mysql(comment.unwrap_or(""))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(column_type: ColumnType) -> ColumnDefinition {
        ColumnDefinition {
            table_name: "User".to_string(),
            column_name: "email".to_string(),
            column_type,
            nullable: false,
            default_value: None,
            auto_increment: false,
            enum_values: Vec::new(),
        }
    }

    #[test]
    fn test_table_comment() {
        let generator = MysqlCommentGenerator::new();
        assert_eq!(
            generator.generate_table_comment("User", Some("application users")),
            "ALTER TABLE `User` COMMENT = 'application users';"
        );
    }

    #[test]
    fn test_table_comment_clear() {
        let generator = MysqlCommentGenerator::new();
        assert_eq!(
            generator.generate_table_comment("Order", None),
            "ALTER TABLE `Order` COMMENT = '';"
        );
    }

    #[test]
    fn test_column_comment_reissues_type() {
        let generator = MysqlCommentGenerator::new();
        let sql = generator.generate_column_comment(
            &column(ColumnType::VARCHAR { length: 191 }),
            Some("primary contact"),
        );
        assert_eq!(
            sql,
            "ALTER TABLE `User` MODIFY COLUMN `email` VARCHAR(191) NOT NULL COMMENT 'primary contact';"
        );
    }

    #[test]
    fn test_column_comment_full_definition() {
        let generator = MysqlCommentGenerator::new();
        let mut definition = column(ColumnType::INTEGER { precision: Some(8) });
        definition.column_name = "id".to_string();
        definition.auto_increment = true;

        assert_eq!(
            generator.generate_column_comment(&definition, Some("identifier")),
            "ALTER TABLE `User` MODIFY COLUMN `id` BIGINT NOT NULL AUTO_INCREMENT COMMENT 'identifier';"
        );

        let mut nullable = column(ColumnType::BOOLEAN);
        nullable.column_name = "active".to_string();
        nullable.nullable = true;
        nullable.default_value = Some("1".to_string());
        assert_eq!(
            generator.generate_column_comment(&nullable, None),
            "ALTER TABLE `User` MODIFY COLUMN `active` TINYINT(1) DEFAULT 1 COMMENT '';"
        );
    }

    #[test]
    fn test_column_comment_enum_type() {
        let generator = MysqlCommentGenerator::new();
        let mut definition = column(ColumnType::Enum {
            name: "Role".to_string(),
        });
        definition.column_name = "status".to_string();
        definition.enum_values = vec!["ADMIN".to_string(), "USER".to_string()];

        assert_eq!(
            generator.generate_column_comment(&definition, Some("user role (ADMIN, USER)")),
            "ALTER TABLE `User` MODIFY COLUMN `status` ENUM('ADMIN', 'USER') NOT NULL COMMENT 'user role (ADMIN, USER)';"
        );
    }

    #[test]
    fn test_comment_escaping() {
        let generator = MysqlCommentGenerator::new();
        assert_eq!(
            generator.generate_table_comment("User", Some(r"it's a \path")),
            r"ALTER TABLE `User` COMMENT = 'it''s a \\path';"
        );
    }

    #[test]
    fn test_map_column_type() {
        let generator = MysqlCommentGenerator::new();
        assert_eq!(
            generator.map_column_type(&ColumnType::DECIMAL { precision: 10, scale: 2 }, &[]),
            "DECIMAL(10, 2)"
        );
        assert_eq!(generator.map_column_type(&ColumnType::UUID, &[]), "CHAR(36)");
        assert_eq!(
            generator.map_column_type(&ColumnType::INTEGER { precision: None }, &[]),
            "INT"
        );
    }
}
