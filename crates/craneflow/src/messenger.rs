//! ユーザー向けメッセージ出力
//!
//! tracing のログとは別系統の、人間が読むための出力。重要度ごとに
//! 記号と色を変えます。

use colored::Colorize;

#[derive(Debug, Clone, Copy, Default)]
pub struct Messenger {
    quiet: bool,
}

impl Messenger {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// 出力を抑制するメッセンジャー（テストや --quiet 用）
    pub fn silent() -> Self {
        Self { quiet: true }
    }

    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", format!("[+] {message}").cyan());
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", format!("✓ {message}").green());
        }
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{}", format!("[!] {message}").yellow());
        }
    }

    pub fn error(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", format!("[-] {message}").red().bold());
        }
    }

    pub fn note(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }
}
