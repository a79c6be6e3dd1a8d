//! about コマンド

use colored::Colorize;

pub fn handle() {
    println!();
    println!("  {}", "CraneFlow".blue().bold());
    println!("  {}", "サービスカタログから docker-compose プロジェクトを生成するツール");
    println!();
    println!("  {} {}", "Version:".bold(), env!("CARGO_PKG_VERSION"));
    println!("  {} {}", "License:".bold(), env!("CARGO_PKG_LICENSE"));
    println!("  {} {}", "Repository:".bold(), env!("CARGO_PKG_REPOSITORY").cyan());
    println!();
    println!("  {}", "主なコマンド:".bold());
    println!("    {}   サービスを選んで compose プロジェクトを生成", "generate".cyan());
    println!("    {}    定義済みサービスとテンプレートを公開", "publish".cyan());
    println!("    {}       利用可能なサービスを一覧表示", "list".cyan());
    println!("    {}       サービス定義を表示", "show".cyan());
    println!("    {}         生成済みプロジェクトを起動", "up".cyan());
    println!("    {}       生成済みプロジェクトを停止", "down".cyan());
    println!();
}
