// コメントマイグレーションパイプライン
//
// 正規化 → 差分検出 → SQL生成 を一度だけ実行する純粋な処理。
// ファイルI/Oは呼び出し側（CLI層）が担当します。

use crate::adapters::sql_generator::StatementRenderer;
use crate::core::comment::{ChangeEntry, ChangeKind, CommentSnapshot, ObjectCatalog};
use crate::core::config::{CommentConfig, Provider};
use crate::core::error::CommentError;
use crate::core::schema::Schema;
use crate::services::comment_diff_detector::CommentDiffDetector;
use crate::services::comment_normalizer::CommentNormalizer;
use tracing::debug;

/// パイプラインの実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    /// 今回導出したスナップショット（保存候補）
    pub current: CommentSnapshot,
    /// SQL化された差分エントリ
    pub changes: Vec<ChangeEntry>,
    /// 対象オブジェクトが既に存在しないため除外した削除エントリ
    pub orphaned: Vec<ChangeEntry>,
    /// 生成されたSQL文（changes と同じ順序）
    pub statements: Vec<String>,
}

impl PipelineResult {
    /// 出力すべきSQLがないか
    pub fn is_noop(&self) -> bool {
        self.statements.is_empty()
    }

    /// スナップショットを更新すべきか
    ///
    /// 除外した削除エントリだけの場合もスナップショットからは取り除く必要があります。
    pub fn needs_snapshot_update(&self) -> bool {
        !self.changes.is_empty() || !self.orphaned.is_empty()
    }
}

/// コメントマイグレーションパイプライン
#[derive(Debug, Clone)]
pub struct CommentPipeline {
    normalizer: CommentNormalizer,
    detector: CommentDiffDetector,
    renderer: StatementRenderer,
}

impl CommentPipeline {
    /// 新しいCommentPipelineを作成
    pub fn new(config: CommentConfig, provider: Provider) -> Self {
        Self {
            normalizer: CommentNormalizer::new(config),
            detector: CommentDiffDetector::new(),
            renderer: StatementRenderer::new(provider),
        }
    }

    /// パイプラインを実行
    ///
    /// # Arguments
    ///
    /// * `schema` - 現在のスキーマ
    /// * `previous` - 前回保存したスナップショット
    pub fn run(
        &self,
        schema: &Schema,
        previous: &CommentSnapshot,
    ) -> Result<PipelineResult, CommentError> {
        let catalog = ObjectCatalog::from_schema(schema)?;
        let current = self.normalizer.normalize_with_catalog(schema, &catalog)?;
        let diff = self.detector.detect_diff(&current, previous);

        // 対象オブジェクト自体が消えた場合のコメント削除は適用できない
        let (changes, orphaned): (Vec<ChangeEntry>, Vec<ChangeEntry>) =
            diff.into_iter().partition(|change| {
                change.kind != ChangeKind::Removed
                    || catalog.contains(change.target, &change.identifier)
            });

        for change in &orphaned {
            debug!(
                target_kind = %change.target,
                identifier = %change.identifier,
                "Skipping comment removal for object no longer in schema"
            );
        }

        let statements = self.renderer.render(&changes, &catalog)?;

        debug!(
            changes = changes.len(),
            orphaned = orphaned.len(),
            statements = statements.len(),
            "Comment pipeline finished"
        );

        Ok(PipelineResult {
            current,
            changes,
            orphaned,
            statements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Target;
    use crate::core::schema::{ColumnType, Entity, Enumeration, Field};

    fn schema() -> Schema {
        let mut schema = Schema::new();
        schema.add_enum(Enumeration::new(
            "Role",
            vec!["ADMIN".to_string(), "USER".to_string()],
        ));
        let mut user = Entity::new("User");
        user.add_field(
            Field::new("email", ColumnType::VARCHAR { length: 191 })
                .with_documentation("primary contact"),
        );
        user.add_field(
            Field::new(
                "status",
                ColumnType::Enum {
                    name: "Role".to_string(),
                },
            )
            .with_documentation("user role"),
        );
        schema.add_entity(user);
        schema
    }

    #[test]
    fn test_first_run_generates_statements() {
        let pipeline = CommentPipeline::new(CommentConfig::default(), Provider::Postgresql);
        let result = pipeline.run(&schema(), &CommentSnapshot::new()).unwrap();

        assert_eq!(
            result.statements,
            vec![
                "COMMENT ON COLUMN \"User\".\"email\" IS 'primary contact';".to_string(),
                "COMMENT ON COLUMN \"User\".\"status\" IS 'user role (ADMIN, USER)';"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_second_run_is_noop() {
        let pipeline = CommentPipeline::new(CommentConfig::default(), Provider::Mysql);
        let first = pipeline.run(&schema(), &CommentSnapshot::new()).unwrap();
        assert!(!first.is_noop());

        let second = pipeline.run(&schema(), &first.current).unwrap();
        assert!(second.is_noop());
        assert!(!second.needs_snapshot_update());
        assert!(second.changes.is_empty());
    }

    #[test]
    fn test_removed_documentation_clears_comment() {
        let mut schema = schema();
        let mut order = Entity::new("Order");
        order.add_field(Field::new("id", ColumnType::UUID));
        schema.add_entity(order);

        let mut previous = CommentSnapshot::new();
        previous
            .insert(
                Target::Table,
                "Order".to_string(),
                "legacy order table".to_string(),
            )
            .unwrap();

        let config = CommentConfig {
            targets: [Target::Table].into_iter().collect(),
            include_enum_in_field_comment: true,
        };
        let result = CommentPipeline::new(config, Provider::Mysql)
            .run(&schema, &previous)
            .unwrap();

        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].kind, ChangeKind::Removed);
        assert_eq!(
            result.statements,
            vec!["ALTER TABLE `Order` COMMENT = '';".to_string()]
        );
    }

    #[test]
    fn test_removal_of_dropped_object_is_orphaned() {
        let mut previous = CommentSnapshot::new();
        previous
            .insert(
                Target::Column,
                "User.nickname".to_string(),
                "display name".to_string(),
            )
            .unwrap();

        let config = CommentConfig::default();
        let result = CommentPipeline::new(config, Provider::Mysql)
            .run(&schema(), &previous)
            .unwrap();

        assert_eq!(result.orphaned.len(), 1);
        assert_eq!(result.orphaned[0].identifier, "User.nickname");
        assert!(result.needs_snapshot_update());
        assert!(result
            .changes
            .iter()
            .all(|c| c.identifier != "User.nickname"));
        assert!(!result.current.column.contains_key("User.nickname"));
    }

    #[test]
    fn test_readded_column_gets_comment_after_orphaned_removal() {
        let mut with_nickname = schema();
        with_nickname.entities[0].add_field(
            Field::new("nickname", ColumnType::TEXT).with_documentation("display name"),
        );

        let pipeline = CommentPipeline::new(CommentConfig::default(), Provider::Postgresql);
        let first = pipeline
            .run(&with_nickname, &CommentSnapshot::new())
            .unwrap();

        // カラムを削除: SQLは出ないがスナップショットからは消える
        let dropped = pipeline.run(&schema(), &first.current).unwrap();
        assert!(dropped.is_noop());
        assert!(dropped.needs_snapshot_update());
        assert_eq!(dropped.current.get(Target::Column, "User.nickname"), None);

        // 同じドキュメントで再追加するとコメントが再設定される
        let readded = pipeline.run(&with_nickname, &dropped.current).unwrap();
        assert_eq!(
            readded.statements,
            vec!["COMMENT ON COLUMN \"User\".\"nickname\" IS 'display name';".to_string()]
        );
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let pipeline = CommentPipeline::new(CommentConfig::default(), Provider::Mysql);
        let first = pipeline.run(&schema(), &CommentSnapshot::new()).unwrap();
        let second = pipeline.run(&schema(), &CommentSnapshot::new()).unwrap();
        assert_eq!(first, second);
    }
}
