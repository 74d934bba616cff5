// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "comment-migration";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".comment-migration.yaml";

/// 既定のスキーマファイル
pub const SCHEMA_FILE: &str = "schema.yaml";

/// 既定のコメントスナップショットファイル
pub const SNAPSHOT_FILE: &str = ".latest_migration_comment.json";

/// 既定のマイグレーション出力ディレクトリ
pub const MIGRATIONS_DIR: &str = "migrations";

/// マイグレーションSQLファイル名
pub const MIGRATION_SQL_FILE: &str = "migration.sql";

/// マイグレーション名が指定されなかった場合の既定名
pub const DEFAULT_MIGRATION_NAME: &str = "update_comments";
