//! .gitignore へのパターン追記
//!
//! 既存の `.gitignore` に生成物のパターンを追記します。ファイルが
//! 存在しない場合は何もしません（エラーにもしません）。

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// パターンを追記する。追記した場合のみ true を返す
pub fn add_pattern(
    project_root: &Path,
    pattern: &str,
    comment: Option<&str>,
) -> std::io::Result<bool> {
    let path = project_root.join(".gitignore");
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)?;
    if content.lines().any(|line| line.trim() == pattern) {
        return Ok(false);
    }

    let mut file = OpenOptions::new().append(true).open(&path)?;
    if !content.is_empty() && !content.ends_with('\n') {
        writeln!(file)?;
    }
    if let Some(comment) = comment {
        writeln!(file, "\n# {comment}")?;
    }
    writeln!(file, "{pattern}")?;
    Ok(true)
}
