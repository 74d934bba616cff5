// comment-migration ライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインモデル（スキーマ、コメントスナップショット、設定、エラー）
// - services: 正規化・差分検出・スナップショット保存・マイグレーション出力
// - adapters: 方言ごとのCOMMENT文生成

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;
