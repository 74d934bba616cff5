// スキーマドメインモデル
//
// コメント導出の入力となる宣言的スキーマを表現する型システム。
// Schema, Entity, Field, Enumeration, ColumnType を提供します。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// スキーマ定義
///
/// エンティティ（テーブル）とENUMの定義を保持します。
/// エンティティは宣言順を保持します。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// ENUM定義のマップ（ENUM名 -> Enumeration）
    #[serde(default)]
    pub enums: BTreeMap<String, Enumeration>,

    /// エンティティ定義のリスト
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Schema {
    /// 空のスキーマを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// エンティティを追加
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// ENUM定義を追加
    pub fn add_enum(&mut self, enumeration: Enumeration) {
        self.enums.insert(enumeration.name.clone(), enumeration);
    }

    /// 指定されたENUM定義を取得
    pub fn get_enum(&self, enum_name: &str) -> Option<&Enumeration> {
        self.enums.get(enum_name)
    }

    /// 指定されたエンティティを取得
    pub fn get_entity(&self, entity_name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == entity_name)
    }
}

/// エンティティ定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entity {
    /// エンティティ名
    pub name: String,

    /// データベース上のテーブル名（省略時はエンティティ名）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,

    /// ドキュメント
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// フィールド定義のリスト
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Entity {
    /// 新しいエンティティを作成
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            map: None,
            documentation: None,
            fields: Vec::new(),
        }
    }

    /// ドキュメントを設定
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// テーブル名のマッピングを設定
    pub fn with_map(mut self, map: impl Into<String>) -> Self {
        self.map = Some(map.into());
        self
    }

    /// フィールドを追加
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// データベース上のテーブル名
    pub fn table_name(&self) -> &str {
        self.map.as_deref().unwrap_or(&self.name)
    }
}

/// フィールド定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    /// フィールド名
    pub name: String,

    /// データベース上のカラム名（省略時はフィールド名）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,

    /// カラム型
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// NULL許可フラグ
    #[serde(default)]
    pub nullable: bool,

    /// デフォルト値（SQL式）
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// 自動増分フラグ
    #[serde(default)]
    pub auto_increment: bool,

    /// ドキュメント
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Field {
    /// 新しいフィールドを作成
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            map: None,
            column_type,
            nullable: false,
            default_value: None,
            auto_increment: false,
            documentation: None,
        }
    }

    /// ドキュメントを設定
    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// カラム名のマッピングを設定
    pub fn with_map(mut self, map: impl Into<String>) -> Self {
        self.map = Some(map.into());
        self
    }

    /// データベース上のカラム名
    pub fn column_name(&self) -> &str {
        self.map.as_deref().unwrap_or(&self.name)
    }

    /// 参照しているENUM名
    pub fn enum_name(&self) -> Option<&str> {
        match &self.column_type {
            ColumnType::Enum { name } => Some(name),
            _ => None,
        }
    }
}

/// ENUM定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Enumeration {
    /// ENUM名（YAMLではマップのキーから補完）
    #[serde(default)]
    pub name: String,

    /// ENUM値（順序を保持）
    pub values: Vec<String>,

    /// ドキュメント
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Enumeration {
    /// 新しいENUM定義を作成
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
            documentation: None,
        }
    }
}

/// カラム型
///
/// サポートされるデータ型を表現します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ColumnType {
    /// 整数型
    INTEGER {
        /// 精度（バイト数）
        precision: Option<u32>,
    },

    /// 可変長文字列型
    VARCHAR {
        /// 最大長
        length: u32,
    },

    /// テキスト型（長文）
    TEXT,

    /// 真偽値型
    BOOLEAN,

    /// タイムスタンプ型
    TIMESTAMP {
        /// タイムゾーン付きかどうか
        with_time_zone: Option<bool>,
    },

    /// JSON型
    JSON,

    /// 固定小数点数型
    DECIMAL {
        /// 全体の桁数
        precision: u32,
        /// 小数点以下の桁数
        scale: u32,
    },

    /// 単精度浮動小数点型
    FLOAT,

    /// 倍精度浮動小数点型
    DOUBLE,

    /// 固定長文字列型
    CHAR {
        /// 固定長
        length: u32,
    },

    /// 日付型
    DATE,

    /// 時刻型
    TIME {
        /// タイムゾーン付きかどうか (PostgreSQL only)
        with_time_zone: Option<bool>,
    },

    /// バイナリラージオブジェクト型
    BLOB,

    /// UUID型
    UUID,

    /// ENUM参照型
    #[serde(rename = "ENUM")]
    Enum {
        /// 参照するENUM名
        name: String,
    },
}
