//! ファイル実体化（materialize）
//!
//! 解決済みサービスを消費し、公開ファイルをプロジェクトの出力ツリーへ
//! 複製した上で、描画可能な `PreparedService` へ変換します。変換は
//! 新しい構造体を生成する純粋な変換であり、レジストリ側の設定を
//! 書き換えることはありません。`ResolvedService` は値ごと消費されるため、
//! 同じ解決結果を二度実体化してボリュームが重複することは起こりません。

use crate::error::{GenError, Result};
use craneflow_core::{ResolvedService, build_tag};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 生成物を置くプロジェクト相対ディレクトリの名前
pub const OUTPUT_DIR: &str = "craneflow";

/// 生成イメージ名の接頭辞
pub const IMAGE_PREFIX: &str = "craneflow";

/// 生成パイプラインが参照するパス
#[derive(Debug, Clone)]
pub struct GenPaths {
    /// レジストリのサービスディレクトリ（`<services_dir>/<name>/service.json`）
    pub services_dir: PathBuf,

    /// 生成先プロジェクトのルート
    pub project_root: PathBuf,
}

/// 描画の準備が整った1サービス分の構造体
///
/// compose フラグメントにはボリュームマウントの追記と build/image の
/// 座標書き換えが済んでおり、そのまま compose テンプレートへ渡せます。
#[derive(Debug, Clone, Serialize)]
pub struct PreparedService {
    pub name: String,
    pub version: String,

    /// Dockerfile テンプレートへ渡す元のビルド指示
    pub build: Option<Map<String, Value>>,

    /// base_image から導出したタグ（buildable のみ）
    pub build_tag: Option<String>,

    /// 最終的な compose フラグメント
    pub compose: Map<String, Value>,
}

impl PreparedService {
    pub fn is_buildable(&self) -> bool {
        self.build.is_some()
    }
}

/// 解決済みサービスを実体化する
///
/// 公開ファイルの欠落や複製の失敗は致命的ではなく、警告として
/// 蓄積して処理を続行します。
#[tracing::instrument(skip(resolved, paths), fields(service = %resolved.name, version = %resolved.version))]
pub fn prepare_service(
    resolved: ResolvedService,
    paths: &GenPaths,
) -> Result<(PreparedService, Vec<String>)> {
    let ResolvedService {
        name,
        version,
        config,
    } = resolved;

    let mut compose = config.compose.unwrap_or_default();
    let mut warnings = Vec::new();

    let service_dir = paths.services_dir.join(&name);
    let stage_dir = format!("{OUTPUT_DIR}/{name}-{version}");

    for (file_name, spec) in &config.publishes {
        let source_rel = spec.source.replace("{version}", &version);
        let source = service_dir.join(&source_rel);

        if !source.exists() {
            warnings.push(format!("公開ファイルが見つかりません: {}", source.display()));
            continue;
        }

        let target = paths.project_root.join(&stage_dir).join(file_name);
        if let Err(e) = copy_file(&source, &target) {
            warnings.push(format!("公開ファイルを複製できません: {e}"));
            continue;
        }
        debug!(file = %file_name, "Materialized published file");

        if !spec.skip_volumes {
            let mount = format!("./{stage_dir}/{file_name}:{}", spec.destination);
            append_volume(&mut compose, mount, &mut warnings);
        }
    }

    let (build, tag) = match config.build {
        Some(build) => {
            let base_image = build
                .get("base_image")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let tag = build_tag(base_image)
                .ok_or_else(|| GenError::InvalidBaseImage(base_image.to_string()))?
                .to_string();

            // compose 側にはビルド座標と生成イメージ名を書き込み、
            // 元のビルド指示は Dockerfile テンプレート用に残す
            compose.insert(
                "image".to_string(),
                json!(format!("{IMAGE_PREFIX}-{name}-{tag}")),
            );
            compose.insert(
                "build".to_string(),
                json!({
                    "context": format!("./{OUTPUT_DIR}/{name}-{tag}"),
                    "dockerfile": "Dockerfile",
                }),
            );
            (Some(build), Some(tag))
        }
        None => {
            if let Some(image) = &config.image {
                compose.insert("image".to_string(), json!(image));
            }
            (None, None)
        }
    };

    Ok((
        PreparedService {
            name,
            version,
            build,
            build_tag: tag,
            compose,
        },
        warnings,
    ))
}

fn copy_file(source: &Path, target: &Path) -> std::result::Result<(), String> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("{}: {e}", parent.display()))?;
    }
    // バイナリセーフな複製
    fs::copy(source, target).map_err(|e| format!("{}: {e}", source.display()))?;
    Ok(())
}

fn append_volume(compose: &mut Map<String, Value>, mount: String, warnings: &mut Vec<String>) {
    let volumes = compose
        .entry("volumes")
        .or_insert_with(|| Value::Array(Vec::new()));
    match volumes {
        Value::Array(list) => list.push(Value::String(mount)),
        _ => warnings.push("compose.volumes が配列ではないため、マウントを追加できません".to_string()),
    }
}
