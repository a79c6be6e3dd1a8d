pub mod error;

pub use error::*;

use std::path::PathBuf;

/// ホームディレクトリを上書きする環境変数
pub const HOME_ENV: &str = "CRANEFLOW_HOME";

/// CraneFlow のホームディレクトリを取得
///
/// 以下の優先順位で解決:
/// 1. 環境変数 CRANEFLOW_HOME (直接パス指定)
/// 2. ~/.config/craneflow (OS の設定ディレクトリ配下)
pub fn home_dir() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var(HOME_ENV)
        && !custom.is_empty()
    {
        return Ok(PathBuf::from(custom));
    }

    Ok(dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("craneflow"))
}

/// サービスレジストリのディレクトリ
pub fn services_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join("services"))
}

/// テンプレートのディレクトリ
pub fn templates_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join("templates"))
}

/// ホーム以下の基本ディレクトリを作成して返す
pub fn ensure_dirs() -> Result<(PathBuf, PathBuf)> {
    let services = services_dir()?;
    let templates = templates_dir()?;
    std::fs::create_dir_all(&services)?;
    std::fs::create_dir_all(&templates)?;
    Ok((services, templates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_home_dir_env_override() {
        let temp = tempfile::tempdir().unwrap();

        // SAFETY: serial 実行下でのテスト用環境変数設定
        unsafe {
            std::env::set_var(HOME_ENV, temp.path());
        }

        let home = home_dir().unwrap();
        assert_eq!(home, temp.path());
        assert!(services_dir().unwrap().ends_with("services"));
        assert!(templates_dir().unwrap().ends_with("templates"));

        // クリーンアップ
        unsafe {
            std::env::remove_var(HOME_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_home_dir_defaults_under_config_dir() {
        // SAFETY: serial 実行下でのテスト用環境変数設定
        unsafe {
            std::env::remove_var(HOME_ENV);
        }

        let home = home_dir().unwrap();
        assert!(home.ends_with("craneflow"));
    }

    #[test]
    #[serial]
    fn test_ensure_dirs_creates_layout() {
        let temp = tempfile::tempdir().unwrap();

        // SAFETY: serial 実行下でのテスト用環境変数設定
        unsafe {
            std::env::set_var(HOME_ENV, temp.path());
        }

        let (services, templates) = ensure_dirs().unwrap();
        assert!(services.exists());
        assert!(templates.exists());

        // クリーンアップ
        unsafe {
            std::env::remove_var(HOME_ENV);
        }
    }
}
