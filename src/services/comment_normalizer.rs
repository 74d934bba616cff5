// コメント正規化サービス
//
// スキーマモデルから正規化されたコメントスナップショットを導出します。
// 出力はスキーマと設定のみから決まる純粋関数です。

use crate::core::comment::{column_identifier, CommentSnapshot, ObjectCatalog};
use crate::core::config::{CommentConfig, Target};
use crate::core::error::CommentError;
use crate::core::schema::{Entity, Field, Schema};
use tracing::debug;

/// コメント正規化サービス
#[derive(Debug, Clone)]
pub struct CommentNormalizer {
    config: CommentConfig,
}

impl CommentNormalizer {
    /// 新しいCommentNormalizerを作成
    pub fn new(config: CommentConfig) -> Self {
        Self { config }
    }

    /// スキーマを正規化してコメントスナップショットを生成
    ///
    /// # Arguments
    ///
    /// * `schema` - 解析済みのスキーマ
    ///
    /// # Returns
    ///
    /// 有効なターゲットのコメントのみを含むスナップショット
    ///
    /// # Errors
    ///
    /// - テーブル名・カラム識別子が衝突した場合
    /// - 未定義のENUMを参照している場合
    pub fn normalize(&self, schema: &Schema) -> Result<CommentSnapshot, CommentError> {
        let catalog = ObjectCatalog::from_schema(schema)?;
        self.normalize_with_catalog(schema, &catalog)
    }

    /// 構築済みのカタログを使って正規化
    ///
    /// 識別子の一意性とENUM参照はカタログ構築時に検証済みです。
    pub fn normalize_with_catalog(
        &self,
        schema: &Schema,
        catalog: &ObjectCatalog,
    ) -> Result<CommentSnapshot, CommentError> {
        let mut snapshot = CommentSnapshot::new();

        for entity in &schema.entities {
            let table_name = entity.table_name();

            if self.config.is_enabled(Target::Table) {
                if let Some(comment) = self.table_comment(entity) {
                    snapshot.insert(Target::Table, table_name.to_string(), comment)?;
                }
            }

            if !self.config.is_enabled(Target::Column) {
                continue;
            }

            for field in &entity.fields {
                let identifier = column_identifier(table_name, field.column_name());
                let column = catalog.get_column(&identifier).ok_or_else(|| {
                    CommentError::UnknownObject {
                        target: Target::Column.to_string(),
                        identifier: identifier.clone(),
                    }
                })?;

                let enum_suffix = self.enum_suffix(field, &column.enum_values);
                if let Some(comment) = self.column_comment(field, enum_suffix) {
                    snapshot.insert(Target::Column, identifier, comment)?;
                }
            }
        }

        debug!(
            tables = snapshot.table.len(),
            columns = snapshot.column.len(),
            "Normalized comment snapshot"
        );

        Ok(snapshot)
    }

    /// テーブルコメントを導出（ドキュメントをそのまま使用）
    fn table_comment(&self, entity: &Entity) -> Option<String> {
        non_blank(entity.documentation.as_deref()).map(str::to_string)
    }

    /// カラムコメントを導出
    fn column_comment(&self, field: &Field, enum_suffix: Option<String>) -> Option<String> {
        let documentation = non_blank(field.documentation.as_deref());
        match (documentation, enum_suffix) {
            (Some(doc), Some(suffix)) => Some(format!("{} {}", doc, suffix)),
            (Some(doc), None) => Some(doc.to_string()),
            (None, Some(suffix)) => Some(suffix),
            (None, None) => None,
        }
    }

    /// ENUM値のサフィックス `(A, B)` を生成
    fn enum_suffix(&self, field: &Field, enum_values: &[String]) -> Option<String> {
        if field.enum_name().is_none()
            || !self.config.include_enum_in_field_comment
            || enum_values.is_empty()
        {
            return None;
        }
        Some(format!("({})", enum_values.join(", ")))
    }
}

impl Default for CommentNormalizer {
    fn default() -> Self {
        Self::new(CommentConfig::default())
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
