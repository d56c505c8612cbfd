use clap::Parser;
use dialoguer::{Input, Password};
use nailist_crm::{backend, cli, config, customers, deploy, error, fonts, reference_export};
use nailist_crm_common::Credentials;
use cli::{Cli, Commands};
use config::Config;
use error::{CrmError, Result};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt_credentials(email: Option<String>) -> Result<Credentials> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("メールアドレス")
            .interact_text()
            .map_err(|e| CrmError::Prompt(e.to_string()))?,
    };
    let password = Password::new()
        .with_prompt("パスワード")
        .interact()
        .map_err(|e| CrmError::Prompt(e.to_string()))?;
    Ok(Credentials { email, password })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::CheckDeploy { root, platform } => {
            println!("🚀 nailist-crm - デプロイ前チェック\n");

            let root = root.unwrap_or_else(|| std::path::PathBuf::from("."));
            let report = deploy::check_files(&root);
            deploy::print_report(&report, platform);

            let missing = report.missing_mandatory();
            if !missing.is_empty() {
                println!("✘ 必須ファイルが{}件不足しています", missing.len());
                std::process::exit(1);
            }
            println!("✅ デプロイ準備完了");
        }

        Commands::DownloadFonts { dir } => {
            println!("🔤 nailist-crm - フォント取得\n");

            let dir = match dir {
                Some(dir) => dir,
                None => Config::load()?.font_dir(),
            };
            let client = fonts::http_client()?;
            let results = fonts::download_fonts(&client, &dir, fonts::FONT_ASSETS).await?;
            for (file_name, status) in results {
                match status {
                    fonts::DownloadStatus::Downloaded(bytes) => {
                        println!("✔ {} ({} bytes)", file_name, bytes)
                    }
                    fonts::DownloadStatus::Skipped => println!("- {} (既存のためスキップ)", file_name),
                }
            }
            println!("\n✅ 保存先: {}", dir.display());
        }

        Commands::Customers { search, email } => {
            println!("💅 nailist-crm - 顧客一覧\n");

            let backend_config = Config::load()?.backend_config()?;
            let credentials = prompt_credentials(email)?;
            let client = backend::RestClient::new(reqwest::Client::new(), backend_config);
            customers::list_customers(&client, &credentials, &search).await?;
        }

        Commands::Reference { output, format } => {
            println!("📄 nailist-crm - 基準タイム出力\n");

            let output = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            let path = reference_export::output_path(&output, format);
            reference_export::export_reference(&path, format)?;
            println!("✔ 出力: {}", path.display());
        }

        Commands::Rate { category, time } => {
            let assessment = reference_export::rate_time(&category, &time)?;
            println!("⏱ {}", assessment.summary());
            if let Some(diff) = assessment.diff_from_average() {
                let label = if diff <= 0 { "速い" } else { "遅い" };
                println!("  全国平均より{}秒{}", diff.unsigned_abs(), label);
            }
        }

        Commands::Config { set_url, set_key, show } => {
            let mut config = Config::load()?;

            if set_url.is_some() || set_key.is_some() {
                if let Some(url) = set_url {
                    config.supabase_url = Some(url);
                }
                if let Some(key) = set_key {
                    config.supabase_anon_key = Some(key);
                }
                config.save()?;
                println!("✔ 接続先を保存しました");
            }

            if show {
                println!("設定:");
                println!("  URL: {}", config.supabase_url.as_deref().unwrap_or("未設定"));
                println!("  公開キー: {}", if config.supabase_anon_key.is_some() { "設定済み" } else { "未設定" });
                println!("  フォント保存先: {}", config.font_dir().display());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
