// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod generate;
pub mod init;
