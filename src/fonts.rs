//! フォント取得（初回のみ）
//!
//! 既に存在するファイルは取得しない。
//! 転送途中で失敗した場合は書きかけのファイルを削除する。

use crate::error::{CrmError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::Path;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy)]
pub struct FontAsset {
    pub file_name: &'static str,
    pub url: &'static str,
}

pub const FONT_ASSETS: &[FontAsset] = &[
    FontAsset {
        file_name: "NotoSansJP-Regular.otf",
        url: "https://github.com/notofonts/noto-cjk/raw/main/Sans/SubsetOTF/JP/NotoSansJP-Regular.otf",
    },
    FontAsset {
        file_name: "NotoSansJP-Bold.otf",
        url: "https://github.com/notofonts/noto-cjk/raw/main/Sans/SubsetOTF/JP/NotoSansJP-Bold.otf",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    /// 取得したバイト数
    Downloaded(u64),
    Skipped,
}

/// リダイレクトを追従するHTTPクライアント
pub fn http_client() -> Result<Client> {
    Ok(Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("nailist-crm/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// フォントをまとめて取得
pub async fn download_fonts(
    client: &Client,
    dir: &Path,
    assets: &[FontAsset],
) -> Result<Vec<(&'static str, DownloadStatus)>> {
    tokio::fs::create_dir_all(dir).await?;

    let mut results = Vec::with_capacity(assets.len());
    for asset in assets {
        let dest = dir.join(asset.file_name);
        if dest.exists() {
            tracing::info!(file = asset.file_name, "already exists, skipped");
            results.push((asset.file_name, DownloadStatus::Skipped));
            continue;
        }

        match fetch_to_file(client, asset.url, &dest).await {
            Ok(bytes) => results.push((asset.file_name, DownloadStatus::Downloaded(bytes))),
            Err(e) => {
                if let Err(rm) = tokio::fs::remove_file(&dest).await {
                    tracing::debug!(error = %rm, "partial file not removed");
                }
                return Err(CrmError::FontDownload(format!("{}: {}", asset.file_name, e)));
            }
        }
    }
    Ok(results)
}

async fn fetch_to_file(client: &Client, url: &str, dest: &Path) -> Result<u64> {
    tracing::debug!(url, dest = %dest.display(), "downloading");
    let mut response = client.get(url).send().await?.error_for_status()?;

    let progress = match response.content_length() {
        Some(total) => {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::with_template("{bar:40} {bytes}/{total_bytes} {msg}")
                    .map_err(|e| CrmError::FontDownload(e.to_string()))?,
            );
            pb
        }
        None => ProgressBar::new_spinner(),
    };
    progress.set_message(dest.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default());

    let transfer = async {
        let mut file = tokio::fs::File::create(dest).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
            progress.set_position(written);
        }
        file.flush().await?;
        Ok::<u64, CrmError>(written)
    };

    match transfer.await {
        Ok(written) => {
            progress.finish_and_clear();
            Ok(written)
        }
        Err(e) => {
            progress.abandon();
            Err(e)
        }
    }
}
