//! イメージビルド処理
//!
//! ワークショップイメージを日付タグ付きでビルドし、レジストリ公開用の
//! タグを付与します。

use crate::docker::DockerCli;
use crate::tag;
use colored::Colorize;

/// ローカルイメージ名
pub const IMAGE_NAME: &str = "pycsep_quakeworx_workshop";

/// レジストリ公開用のイメージ参照
pub const REGISTRY_IMAGE: &str = "sceccode/pycsep_quakeworx_workshop";

// Dockerfile の ARG に対応する固定値
const APP_UNAME: &str = "csepuser";
const APP_GRPNAME: &str = "csepuser";
const APP_UID: u32 = 1000;
const APP_GID: u32 = 1000;

/// イメージビルドを実行するハンドラ
pub struct ImageBuilder {
    docker: DockerCli,
}

impl ImageBuilder {
    /// 新しい ImageBuilder を作成
    pub fn new(docker: DockerCli) -> Self {
        Self { docker }
    }

    /// イメージをビルドし、レジストリ公開用のタグを付与
    ///
    /// build / tag の終了ステータスは確認しない。成否は docker 自身の
    /// コンソール出力で判断する。
    pub async fn build(&self) {
        let bdate = tag::today_tag();

        let args = build_args(&bdate);
        if let Err(e) = self.docker.run(&args).await {
            eprintln!("  {} {}", "✗".red().bold(), e);
        }

        // build の結果にかかわらず再タグへ進む
        let args = tag_args();
        println!("Running: docker {}", args.join(" ").cyan());
        if let Err(e) = self.docker.run(&args).await {
            eprintln!("  {} {}", "✗".red().bold(), e);
        }
    }
}

/// docker build の引数列を組み立てる
pub fn build_args(bdate: &str) -> Vec<String> {
    let mut args: Vec<String> = [
        "build",
        "--progress=plain",
        "--no-cache=false",
        "-f",
        "Dockerfile",
        ".",
        "-t",
        IMAGE_NAME,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let build_arg_pairs = [
        ("APP_UNAME", APP_UNAME.to_string()),
        ("APP_GRPNAME", APP_GRPNAME.to_string()),
        ("APP_UID", APP_UID.to_string()),
        ("APP_GID", APP_GID.to_string()),
        ("BDATE", bdate.to_string()),
    ];
    for (key, value) in build_arg_pairs {
        args.push("--build-arg".to_string());
        args.push(format!("{}={}", key, value));
    }

    args
}

/// docker tag の引数列を組み立てる
pub fn tag_args() -> Vec<String> {
    vec![
        "tag".to_string(),
        IMAGE_NAME.to_string(),
        REGISTRY_IMAGE.to_string(),
    ]
}
