use craneflow_core::ResolveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("テンプレートを読み込めません: {dir}\n理由: {message}")]
    TemplateLoad { dir: PathBuf, message: String },

    #[error("テンプレート展開エラー: {name}\n理由: {message}")]
    Render { name: String, message: String },

    #[error("IO エラー: {path}\n理由: {message}")]
    Io { path: PathBuf, message: String },

    #[error("base_image からタグを導出できません: {0}")]
    InvalidBaseImage(String),

    #[error("サービス {0} は build 設定を持ちません")]
    NotBuildable(String),
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;
