use clap::{Parser, Subcommand};
use crate::deploy::Platform;
use crate::reference_export::ReferenceFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nailist-crm")]
#[command(about = "ネイリスト技能診断 顧客管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// デプロイ前のファイル確認と手順表示
    CheckDeploy {
        /// プロジェクトのルート（省略時はカレント）
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// 配信先 (vercel/netlify/cloudflare/all)
        #[arg(short, long, default_value = "all")]
        platform: Platform,
    },

    /// 日本語フォントを取得（既存ファイルはスキップ）
    DownloadFonts {
        /// 保存先ディレクトリ
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// 顧客一覧を表示
    Customers {
        /// 検索文字列（氏名・受付番号）
        #[arg(short, long, default_value = "")]
        search: String,

        /// ログインするメールアドレス（省略時は入力を求める）
        #[arg(short, long)]
        email: Option<String>,
    },

    /// 基準タイム表・全国平均表を出力
    Reference {
        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (excel/json)
        #[arg(short, long, default_value = "excel")]
        format: ReferenceFormat,
    },

    /// 計測タイムを基準タイム・全国平均と比較
    Rate {
        /// 施術カテゴリ（例: ケア）
        category: String,

        /// 計測タイム（m:ss または秒）
        time: String,
    },

    /// 設定を表示/編集
    Config {
        /// 接続先URLを設定
        #[arg(long)]
        set_url: Option<String>,

        /// 公開キーを設定
        #[arg(long)]
        set_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
