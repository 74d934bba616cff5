// Services Layer
// ドメインロジックを実行するサービス層

pub mod comment_diff_detector;
pub mod comment_normalizer;
pub mod comment_pipeline;
pub mod config_loader;
pub mod migration_writer;
pub mod schema_parser;
pub mod snapshot_store;
