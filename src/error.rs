use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("接続先が設定されていません。`nailist-crm config --set-url URL --set-key KEY` または環境変数 SUPABASE_URL / SUPABASE_ANON_KEY で設定してください")]
    MissingBackendConfig,

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Backend(#[from] nailist_crm_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("フォント取得エラー: {0}")]
    FontDownload(String),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, CrmError>;
