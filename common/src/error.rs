//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// バックエンドが返したメッセージをそのまま保持する
    #[error("{0}")]
    Backend(String),

    #[error("要素が見つかりません: {0}")]
    ElementNotFound(String),

    #[error("画像化に失敗しました: {0}")]
    Capture(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
