// Core Domain
// コメント導出・差分検出・SQL生成のための純粋なドメインモデル

pub mod comment;
pub mod config;
pub mod error;
pub mod naming;
pub mod schema;
