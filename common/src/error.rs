//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データ読み込みエラー: {0}")]
    DataLoad(String),

    #[error("見つかりません: {0}")]
    NotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
