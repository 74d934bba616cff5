// Adapters
// データベース方言ごとのSQL文字列生成を抽象化

pub mod sql_generator;
pub mod sql_quote;
