// SQLクォートユーティリティ
//
// 各データベース方言用の識別子クォートと文字列リテラルのエスケープを提供します。
// COMMENT文のコメント本文は必ずここを通してSQLに埋め込みます。

/// PostgreSQL用識別子クォート（ダブルクォート）
///
/// 識別子内のダブルクォートは二重にエスケープします。
///
/// # Examples
/// ```
/// use comment_migration::adapters::sql_quote::quote_identifier_postgres;
/// assert_eq!(quote_identifier_postgres("users"), r#""users""#);
/// assert_eq!(quote_identifier_postgres(r#"table"name"#), r#""table""name""#);
/// ```
pub fn quote_identifier_postgres(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// MySQL用識別子クォート（バッククォート）
///
/// 識別子内のバッククォートは二重にエスケープします。
///
/// # Examples
/// ```
/// use comment_migration::adapters::sql_quote::quote_identifier_mysql;
/// assert_eq!(quote_identifier_mysql("users"), "`users`");
/// assert_eq!(quote_identifier_mysql("table`name"), "`table``name`");
/// ```
pub fn quote_identifier_mysql(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// PostgreSQL用文字列リテラル
///
/// standard_conforming_strings 前提で、シングルクォートのみ二重化します。
///
/// # Examples
/// ```
/// use comment_migration::adapters::sql_quote::quote_literal_postgres;
/// assert_eq!(quote_literal_postgres("it's"), "'it''s'");
/// ```
pub fn quote_literal_postgres(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// MySQL用文字列リテラル
///
/// MySQLの既定sql_modeではバックスラッシュがエスケープ文字になるため、
/// シングルクォートに加えてバックスラッシュも二重化します。
///
/// # Examples
/// ```
/// use comment_migration::adapters::sql_quote::quote_literal_mysql;
/// assert_eq!(quote_literal_mysql("it's"), "'it''s'");
/// assert_eq!(quote_literal_mysql(r"C:\tmp"), r"'C:\\tmp'");
/// ```
pub fn quote_literal_mysql(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
}
