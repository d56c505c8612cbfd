//! デプロイ前チェック
//!
//! 必要なファイルの有無を確認し、配信先ごとの手順を表示する。
//! 必須ファイルが欠けている場合は終了コード1で終わる。

use std::path::Path;

/// チェック対象のファイル
#[derive(Debug, Clone, Copy)]
pub struct DeployFile {
    pub path: &'static str,
    pub mandatory: bool,
    pub description: &'static str,
}

pub const DEPLOY_FILES: &[DeployFile] = &[
    DeployFile { path: "Cargo.toml", mandatory: true, description: "ワークスペース定義" },
    DeployFile { path: "web-wasm/Cargo.toml", mandatory: true, description: "Webアプリのクレート定義" },
    DeployFile { path: "web-wasm/index.html", mandatory: true, description: "Trunkのエントリ" },
    DeployFile { path: "web-wasm/js/capture-bridge.js", mandatory: true, description: "グラフ画像化ブリッジ" },
    DeployFile { path: "web-wasm/js/download.js", mandatory: true, description: "ダウンロードブリッジ" },
    DeployFile { path: "web-wasm/Trunk.toml", mandatory: false, description: "Trunkのビルド設定" },
    DeployFile { path: "web-wasm/public/fonts/NotoSansJP-Regular.otf", mandatory: false, description: "日本語フォント（download-fontsで取得）" },
    DeployFile { path: "web-wasm/public/fonts/NotoSansJP-Bold.otf", mandatory: false, description: "日本語フォント太字（download-fontsで取得）" },
    DeployFile { path: ".env", mandatory: false, description: "SUPABASE_URL / SUPABASE_ANON_KEY" },
];

#[derive(Debug, Clone)]
pub struct FileCheck {
    pub file: DeployFile,
    pub exists: bool,
}

#[derive(Debug, Clone)]
pub struct DeployReport {
    pub checks: Vec<FileCheck>,
}

impl DeployReport {
    pub fn missing_mandatory(&self) -> Vec<&DeployFile> {
        self.checks
            .iter()
            .filter(|c| c.file.mandatory && !c.exists)
            .map(|c| &c.file)
            .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.missing_mandatory().is_empty()
    }
}

/// `root` 以下のファイルを確認
pub fn check_files(root: &Path) -> DeployReport {
    let checks = DEPLOY_FILES
        .iter()
        .map(|file| FileCheck {
            file: *file,
            exists: root.join(file.path).exists(),
        })
        .collect();
    DeployReport { checks }
}

/// 配信先
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    Vercel,
    Netlify,
    Cloudflare,
    #[default]
    All,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Vercel => "Vercel",
            Platform::Netlify => "Netlify",
            Platform::Cloudflare => "Cloudflare Pages",
            Platform::All => "すべて",
        }
    }

    /// 配信手順
    pub fn instructions(&self) -> Vec<&'static str> {
        match self {
            Platform::Vercel => vec![
                "Build Command: cd web-wasm && trunk build --release",
                "Output Directory: web-wasm/dist",
                "Environment Variables に SUPABASE_URL / SUPABASE_ANON_KEY を登録",
                "Rewrites: /(.*) → /index.html（SPAルーティング）",
            ],
            Platform::Netlify => vec![
                "Build command: cd web-wasm && trunk build --release",
                "Publish directory: web-wasm/dist",
                "Site settings > Environment に SUPABASE_URL / SUPABASE_ANON_KEY を登録",
                "_redirects に `/* /index.html 200` を追加（SPAルーティング）",
            ],
            Platform::Cloudflare => vec![
                "Build command: cd web-wasm && trunk build --release",
                "Build output directory: web-wasm/dist",
                "Settings > Environment variables に SUPABASE_URL / SUPABASE_ANON_KEY を登録",
                "404.html を置かずSPAフォールバックを有効にする",
            ],
            Platform::All => Vec::new(),
        }
    }

    pub fn targets(&self) -> Vec<Platform> {
        match self {
            Platform::All => vec![Platform::Vercel, Platform::Netlify, Platform::Cloudflare],
            other => vec![*other],
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vercel" => Ok(Platform::Vercel),
            "netlify" => Ok(Platform::Netlify),
            "cloudflare" | "pages" => Ok(Platform::Cloudflare),
            "all" => Ok(Platform::All),
            _ => Err(format!("Unknown platform: {}. Use vercel, netlify, cloudflare, or all", s)),
        }
    }
}

/// チェック結果と手順を表示
pub fn print_report(report: &DeployReport, platform: Platform) {
    println!("[1/2] ファイル確認");
    for check in &report.checks {
        let mark = match (check.exists, check.file.mandatory) {
            (true, _) => "✔",
            (false, true) => "✘",
            (false, false) => "-",
        };
        let kind = if check.file.mandatory { "必須" } else { "任意" };
        println!("  {} [{}] {} ({})", mark, kind, check.file.path, check.file.description);
    }
    println!();

    println!("[2/2] デプロイ手順");
    for target in platform.targets() {
        println!("  ■ {}", target.label());
        for (i, step) in target.instructions().iter().enumerate() {
            println!("    {}. {}", i + 1, step);
        }
    }
    println!();
}
