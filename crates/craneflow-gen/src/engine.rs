//! テンプレートエンジンのラッパー
//!
//! Tera に `to_json` フィルターを登録した状態で包みます。JSON は YAML の
//! サブセットなので、エンコードした値はそのまま compose マニフェストに
//! 埋め込めます。

use crate::error::{GenError, Result};
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera};

/// 値を JSON 文字列にエンコードするフィルター
///
/// 使用例: `{{ value | to_json }}`
fn to_json(value: &tera::Value, _args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
    let encoded = serde_json::to_string(value).map_err(|e| tera::Error::msg(e.to_string()))?;
    Ok(tera::Value::String(encoded))
}

pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// テンプレートディレクトリ内の `*.tera` を全て読み込む
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let pattern = format!("{}/**/*.tera", dir.display());
        let tera = Tera::new(&pattern).map_err(|e| GenError::TemplateLoad {
            dir: dir.to_path_buf(),
            message: error_chain(&e),
        })?;
        Ok(Self::with_tera(tera))
    }

    /// 名前と内容の組からエンジンを構築する（テストやフォールバック用）
    pub fn from_templates(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.to_vec())
            .map_err(|e| GenError::Render {
                name: "raw".to_string(),
                message: error_chain(&e),
            })?;
        Ok(Self::with_tera(tera))
    }

    fn with_tera(mut tera: Tera) -> Self {
        tera.autoescape_on(vec![]);
        tera.register_filter("to_json", to_json);
        Self { tera }
    }

    /// 名前付きテンプレートを描画する
    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera.render(name, context).map_err(|e| GenError::Render {
            name: name.to_string(),
            message: error_chain(&e),
        })
    }
}

/// エラーチェーンを辿って詳細メッセージを組み立てる
///
/// Tera は原因（未定義変数など）を source 側に持つことが多い。
fn error_chain(e: &tera::Error) -> String {
    use std::error::Error;

    let mut details = vec![e.to_string()];
    let mut source = e.source();
    while let Some(err) = source {
        details.push(err.to_string());
        source = err.source();
    }
    details.join(" | ")
}
