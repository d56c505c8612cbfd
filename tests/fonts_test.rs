//! フォント取得の統合テスト（ネットワークを使わないケースのみ）

use nailist_crm::fonts::{download_fonts, http_client, DownloadStatus, FONT_ASSETS};
use tempfile::tempdir;

/// 既存のファイルは取得せずスキップする
#[tokio::test]
async fn test_existing_fonts_are_skipped() {
    let dir = tempdir().expect("Failed to create temp dir");
    for asset in FONT_ASSETS {
        std::fs::write(dir.path().join(asset.file_name), b"font").unwrap();
    }

    let client = http_client().expect("クライアント作成失敗");
    let results = download_fonts(&client, dir.path(), FONT_ASSETS)
        .await
        .expect("スキップのみなので成功するはず");

    assert_eq!(results.len(), FONT_ASSETS.len());
    assert!(results.iter().all(|(_, status)| *status == DownloadStatus::Skipped));

    // 既存ファイルは書き換えない
    let content = std::fs::read(dir.path().join(FONT_ASSETS[0].file_name)).unwrap();
    assert_eq!(content, b"font");
}

/// 保存先ディレクトリがなければ作成する
#[tokio::test]
async fn test_creates_font_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let font_dir = dir.path().join("public").join("fonts");

    let client = http_client().expect("クライアント作成失敗");
    let results = download_fonts(&client, &font_dir, &[]).await.expect("空リストは成功");

    assert!(results.is_empty());
    assert!(font_dir.is_dir());
}

/// 転送が途中で切れたら書きかけのファイルを残さない
#[tokio::test]
async fn test_truncated_transfer_removes_partial_file() {
    use nailist_crm::error::CrmError;
    use nailist_crm::fonts::FontAsset;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 1024];
        let _ = socket.read(&mut buf).await;
        // 宣言より短い本文を送って切断
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100000\r\n\r\npartial-bytes")
            .await;
        let _ = socket.shutdown().await;
    });

    let url: &'static str = Box::leak(format!("http://{}/font.otf", addr).into_boxed_str());
    let assets = [FontAsset { file_name: "Broken.otf", url }];
    let dir = tempdir().expect("Failed to create temp dir");
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let result = download_fonts(&client, dir.path(), &assets).await;

    assert!(matches!(result, Err(CrmError::FontDownload(_))), "結果: {:?}", result);
    assert!(!dir.path().join("Broken.otf").exists());
}
