//! 成果物の描画
//!
//! buildable なサービスごとの Dockerfile と、全サービスを束ねた
//! compose マニフェストをテンプレートから描画して書き出します。
//! 入力が同一であれば出力はバイト単位で決定的です。

use crate::engine::TemplateEngine;
use crate::error::{GenError, Result};
use crate::materialize::{OUTPUT_DIR, PreparedService};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Context;
use tracing::debug;

/// Dockerfile テンプレートの名前
pub const DOCKERFILE_TEMPLATE: &str = "Dockerfile.tera";

/// compose マニフェストテンプレートの名前
pub const COMPOSE_TEMPLATE: &str = "docker-compose.yml.tera";

/// 生成される compose マニフェストのファイル名
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// buildable なサービスの Dockerfile を描画して書き出す
///
/// 出力先は `<project_root>/craneflow/<service>-<tag>/Dockerfile`。
pub fn render_dockerfile(
    engine: &TemplateEngine,
    prepared: &PreparedService,
    project_root: &Path,
) -> Result<PathBuf> {
    let (Some(build), Some(tag)) = (&prepared.build, &prepared.build_tag) else {
        return Err(GenError::NotBuildable(prepared.name.clone()));
    };

    let mut context = Context::new();
    context.insert("service_name", &prepared.name);
    context.insert("build", build);
    context.insert("compose", &prepared.compose);

    let rendered = engine.render(DOCKERFILE_TEMPLATE, &context)?;

    let build_dir = project_root
        .join(OUTPUT_DIR)
        .join(format!("{}-{tag}", prepared.name));
    fs::create_dir_all(&build_dir).map_err(|e| GenError::io(&build_dir, e))?;

    let path = build_dir.join("Dockerfile");
    fs::write(&path, rendered).map_err(|e| GenError::io(&path, e))?;
    debug!(service = %prepared.name, path = %path.display(), "Rendered Dockerfile");

    Ok(path)
}

/// 全サービスを束ねた compose マニフェストを描画して書き出す
///
/// `project_name` はテンプレート内のラベルとしてのみ使われます。
pub fn render_compose(
    engine: &TemplateEngine,
    prepared: &[PreparedService],
    project_name: &str,
    project_root: &Path,
) -> Result<PathBuf> {
    let mut context = Context::new();
    context.insert("project_name", project_name);
    context.insert("services", prepared);
    context.insert("networks", &collect_networks(prepared));
    context.insert("volumes", &collect_named_volumes(prepared));

    let rendered = engine.render(COMPOSE_TEMPLATE, &context)?;

    let path = project_root.join(COMPOSE_FILE);
    fs::write(&path, rendered).map_err(|e| GenError::io(&path, e))?;
    debug!(path = %path.display(), services = prepared.len(), "Rendered compose manifest");

    Ok(path)
}

/// フラグメントが参照するネットワーク名を集める（トップレベル宣言用）
fn collect_networks(prepared: &[PreparedService]) -> BTreeSet<String> {
    let mut networks = BTreeSet::new();
    for service in prepared {
        if let Some(Value::Array(list)) = service.compose.get("networks") {
            for entry in list {
                if let Some(name) = entry.as_str() {
                    networks.insert(name.to_string());
                }
            }
        }
    }
    networks
}

/// フラグメントが参照する名前付きボリュームを集める（トップレベル宣言用）
///
/// マウント元がパス（`./`、`/`、`~` 始まり）のものは対象外。
fn collect_named_volumes(prepared: &[PreparedService]) -> BTreeSet<String> {
    let mut volumes = BTreeSet::new();
    for service in prepared {
        if let Some(Value::Array(list)) = service.compose.get("volumes") {
            for entry in list {
                let Some(mount) = entry.as_str() else { continue };
                let Some(source) = mount.split(':').next() else { continue };
                if !source.is_empty() && !source.starts_with(['.', '/', '~', '$']) {
                    volumes.insert(source.to_string());
                }
            }
        }
    }
    volumes
}
