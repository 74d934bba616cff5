// スキーマパーサーサービス
//
// YAMLスキーマファイルの読み込みと解析を行うサービス。
// ENUM名はマップのキーから補完します。

use crate::core::error::IoError;
use crate::core::schema::Schema;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// スキーマパーサーサービス
#[derive(Debug, Clone)]
pub struct SchemaParserService {}

impl SchemaParserService {
    /// 新しいSchemaParserServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// YAMLファイルを解析してスキーマオブジェクトに変換
    ///
    /// # Errors
    ///
    /// - ファイルが存在しない場合
    /// - ファイルの読み込みに失敗した場合
    /// - YAMLの解析に失敗した場合
    pub fn parse_schema_file(&self, file_path: &Path) -> Result<Schema> {
        if !file_path.exists() {
            return Err(IoError::FileNotFound {
                path: file_path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(file_path).map_err(|e| IoError::FileRead {
            path: file_path.display().to_string(),
            cause: e.to_string(),
        })?;

        self.parse_schema_str(&content)
            .with_context(|| format!("Failed to parse schema file: {:?}", file_path))
    }

    /// YAML文字列を解析してスキーマオブジェクトに変換
    pub fn parse_schema_str(&self, content: &str) -> Result<Schema> {
        let mut schema: Schema =
            serde_saphyr::from_str(content).with_context(|| "Invalid schema YAML")?;

        for (key, enumeration) in schema.enums.iter_mut() {
            if enumeration.name.is_empty() {
                enumeration.name = key.clone();
            } else if &enumeration.name != key {
                return Err(anyhow!(
                    "Enum name mismatch: key '{}' declares name '{}'",
                    key,
                    enumeration.name
                ));
            }
        }

        Ok(schema)
    }
}

impl Default for SchemaParserService {
    fn default() -> Self {
        Self::new()
    }
}
