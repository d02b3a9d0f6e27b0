//! イメージプッシュ処理
//!
//! ビルド済みのワークショップイメージを dockerhub の sceccode 名前空間へ
//! プッシュします。事前に docker login で sceccode への書き込み権限を
//! 持つアカウントにログインしておく必要があります。

use crate::builder::REGISTRY_IMAGE;
use crate::docker::DockerCli;
use colored::Colorize;

/// イメージプッシュを実行するハンドラ
pub struct ImagePusher {
    docker: DockerCli,
}

impl ImagePusher {
    /// 新しい ImagePusher を作成
    pub fn new(docker: DockerCli) -> Self {
        Self { docker }
    }

    /// イメージをレジストリにプッシュ
    ///
    /// 終了ステータスは確認しない。認証エラー等は docker 自身の出力に現れる。
    pub async fn push(&self) {
        let args = push_args();
        println!("Running: docker {}", args.join(" ").cyan());
        if let Err(e) = self.docker.run(&args).await {
            eprintln!("  {} {}", "✗".red().bold(), e);
        }
    }
}

/// docker push の引数列を組み立てる
pub fn push_args() -> Vec<String> {
    vec!["push".to_string(), REGISTRY_IMAGE.to_string()]
}
