use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("レジストリディレクトリを読み込めません: {path}\n理由: {message}")]
    Io { path: PathBuf, message: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("サービスが見つかりません: {0}")]
    ServiceNotFound(String),

    #[error("サービス {service} にバージョン {version} がありません")]
    VersionNotFound { service: String, version: String },

    #[error("無効なサービス設定: {service} {version}\n不足している項目: {missing}")]
    InvalidConfig {
        service: String,
        version: String,
        missing: String,
    },
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
