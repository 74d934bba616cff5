// エラー型定義
//
// アプリケーション全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、CommentError と IoError を定義します。

use thiserror::Error;

/// コメント処理エラー
///
/// 正規化・差分検出・SQL生成の各段階で発生する致命的なエラーを表現します。
/// いずれも部分的な回復は行いません。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    /// 同一ターゲット種別内で識別子が衝突した
    #[error("Identifier collision: {target} '{identifier}' is defined more than once")]
    IdentifierCollision {
        /// ターゲット種別（table / column）
        target: String,
        /// 衝突した識別子
        identifier: String,
    },

    /// 未定義のENUMを参照している
    #[error("Unknown enum '{enum_name}' referenced by {entity}.{field}")]
    UnknownEnumeration {
        /// 参照されたENUM名
        enum_name: String,
        /// エンティティ名
        entity: String,
        /// フィールド名
        field: String,
    },

    /// サポートされていないプロバイダー
    #[error("Unsupported provider: {value}. Please specify one of: mysql, postgresql.")]
    UnknownProvider {
        /// 指定された値
        value: String,
    },

    /// サポートされていないターゲット
    #[error("Unsupported comment target: {value}. Please specify one of: table, column.")]
    UnknownTarget {
        /// 指定された値
        value: String,
    },

    /// スナップショットの解析失敗
    #[error("Failed to parse comment snapshot {path}: {message}")]
    SnapshotParse {
        /// スナップショットファイルのパス
        path: String,
        /// エラーメッセージ
        message: String,
    },

    /// SQL生成対象のオブジェクトがカタログに存在しない
    #[error("Unknown {target} '{identifier}': no definition available to render the statement")]
    UnknownObject {
        /// ターゲット種別（table / column）
        target: String,
        /// 識別子
        identifier: String,
    },
}

impl CommentError {
    /// 識別子衝突エラーかどうか
    pub fn is_identifier_collision(&self) -> bool {
        matches!(self, CommentError::IdentifierCollision { .. })
    }

    /// 未定義ENUM参照エラーかどうか
    pub fn is_unknown_enumeration(&self) -> bool {
        matches!(self, CommentError::UnknownEnumeration { .. })
    }

    /// 未サポートプロバイダーエラーかどうか
    pub fn is_unknown_provider(&self) -> bool {
        matches!(self, CommentError::UnknownProvider { .. })
    }

    /// 未サポートターゲットエラーかどうか
    pub fn is_unknown_target(&self) -> bool {
        matches!(self, CommentError::UnknownTarget { .. })
    }

    /// スナップショット解析エラーかどうか
    pub fn is_snapshot_parse(&self) -> bool {
        matches!(self, CommentError::SnapshotParse { .. })
    }

    /// 未知オブジェクトエラーかどうか
    pub fn is_unknown_object(&self) -> bool {
        matches!(self, CommentError::UnknownObject { .. })
    }
}

/// I/Oエラー
///
/// ファイル操作時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found
    #[error("File not found: {path}")]
    FileNotFound {
        /// ファイルパス
        path: String,
    },

    /// File read error
    #[error("Failed to read file: {path} (cause: {cause})")]
    FileRead {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// File write error
    #[error("Failed to write file: {path} (cause: {cause})")]
    FileWrite {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// Directory creation error
    #[error("Failed to create directory: {path} (cause: {cause})")]
    DirectoryCreate {
        /// ディレクトリパス
        path: String,
        /// エラー原因
        cause: String,
    },
}

impl IoError {
    /// ファイルが見つからないエラーかどうか
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, IoError::FileNotFound { .. })
    }

    /// ファイル読み込みエラーかどうか
    pub fn is_file_read(&self) -> bool {
        matches!(self, IoError::FileRead { .. })
    }

    /// ファイル書き込みエラーかどうか
    pub fn is_file_write(&self) -> bool {
        matches!(self, IoError::FileWrite { .. })
    }

    /// ディレクトリ作成エラーかどうか
    pub fn is_directory_create(&self) -> bool {
        matches!(self, IoError::DirectoryCreate { .. })
    }
}
