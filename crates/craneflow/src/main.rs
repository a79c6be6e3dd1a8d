mod assets;
mod commands;
mod docker;
mod gitignore;
mod messenger;
mod prompts;

use clap::{Parser, Subcommand};
use craneflow_core::Registry;
use messenger::Messenger;

#[derive(Parser)]
#[command(name = "crane")]
#[command(about = "選ぶ。生成する。コンテナ構成は、カタログから。", long_about = None)]
struct Cli {
    /// ユーザー向けメッセージを抑制する
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// サービスを選んで Dockerfile と docker-compose.yml を生成
    Generate {
        /// 選択するサービス (name:version 形式、複数指定可。省略時は対話選択)
        #[arg(short = 'n', long = "service", value_name = "NAME:VERSION")]
        service: Vec<String>,
        /// 確認なしで実行
        #[arg(short, long)]
        yes: bool,
        /// 生成後にコンテナを起動する
        #[arg(long)]
        up: bool,
    },
    /// 定義済みサービスとテンプレートをレジストリへ公開
    Publish {
        /// 既存のエントリを上書きする
        #[arg(short, long)]
        force: bool,
    },
    /// 利用可能なサービスを一覧表示
    List,
    /// サービス定義を表示
    Show {
        /// サービス名
        service: String,
        /// 特定バージョンのみ表示
        #[arg(short, long)]
        release: Option<String>,
    },
    /// 生成済みプロジェクトのコンテナを起動
    Up,
    /// 生成済みプロジェクトのコンテナを停止
    Down,
    /// CraneFlow について
    About,
    /// バージョン情報を表示
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let messenger = if cli.quiet {
        Messenger::silent()
    } else {
        Messenger::new()
    };

    match cli.command {
        Commands::Generate { service, yes, up } => {
            commands::generate::handle(
                &messenger,
                commands::generate::GenerateArgs {
                    services: service,
                    yes,
                    up,
                },
            )?;
        }
        Commands::Publish { force } => {
            commands::publish::handle(&messenger, force)?;
        }
        Commands::List => {
            let registry = Registry::load(&craneflow_config::services_dir()?)?;
            commands::list::handle(&messenger, &registry)?;
        }
        Commands::Show { service, release } => {
            let registry = Registry::load(&craneflow_config::services_dir()?)?;
            commands::show::handle(&messenger, &registry, &service, release.as_deref())?;
        }
        Commands::Up => {
            docker::compose_up(&messenger)?;
        }
        Commands::Down => {
            docker::compose_down(&messenger)?;
        }
        Commands::About => {
            commands::about::handle();
        }
        Commands::Version => {
            println!("craneflow {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
