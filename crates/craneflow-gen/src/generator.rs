//! 生成オーケストレーター
//!
//! 解決 → 実体化 → 描画 を1回の生成として順に実行します。
//! 解決の失敗は成果物を一切書き出す前に走行を打ち切り、実体化と
//! Dockerfile 描画の問題は蓄積してレポートで報告します。compose の
//! 描画失敗のみが描画フェーズの致命的エラーです。

use crate::engine::TemplateEngine;
use crate::error::Result;
use crate::materialize::{GenPaths, prepare_service};
use crate::render::{render_compose, render_dockerfile};
use craneflow_core::{Registry, resolve};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 1回の生成走行の結果
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// 書き出された compose マニフェスト
    pub compose_path: PathBuf,

    /// 書き出された Dockerfile（buildable なサービスごと）
    pub dockerfiles: Vec<PathBuf>,

    /// 実体化中の非致命的な問題（公開ファイルの欠落など）
    pub warnings: Vec<String>,

    /// サービス単位の Dockerfile 描画失敗（走行は継続する）
    pub dockerfile_errors: Vec<String>,
}

impl GenerationReport {
    /// 警告もサービス単位の失敗もない走行だったか
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.dockerfile_errors.is_empty()
    }
}

/// 生成パイプラインのオーケストレーター
pub struct Generator {
    paths: GenPaths,
    engine: TemplateEngine,
}

impl Generator {
    /// テンプレートディレクトリからエンジンを構築して生成器を作る
    pub fn new(paths: GenPaths, templates_dir: &Path) -> Result<Self> {
        let engine = TemplateEngine::from_dir(templates_dir)?;
        Ok(Self { paths, engine })
    }

    /// 構築済みエンジンを使う生成器を作る（テスト用途）
    pub fn with_engine(paths: GenPaths, engine: TemplateEngine) -> Self {
        Self { paths, engine }
    }

    /// 選択を成果物まで生成する
    #[tracing::instrument(skip(self, registry))]
    pub fn run(
        &self,
        registry: &Registry,
        selection: &[(String, String)],
    ) -> Result<GenerationReport> {
        // Resolving: 失敗したら成果物を書く前に打ち切る
        let resolved = resolve(selection, registry)?;
        debug!(services = resolved.len(), "Selection resolved");

        // Materializing: 警告は蓄積して続行する
        let mut prepared = Vec::with_capacity(resolved.len());
        let mut report = GenerationReport::default();
        for service in resolved {
            let (ready, warnings) = prepare_service(service, &self.paths)?;
            report.warnings.extend(warnings);
            prepared.push(ready);
        }

        // Rendering: Dockerfile の失敗はサービス単位で報告し、他は続行
        for service in prepared.iter().filter(|p| p.is_buildable()) {
            match render_dockerfile(&self.engine, service, &self.paths.project_root) {
                Ok(path) => report.dockerfiles.push(path),
                Err(e) => report
                    .dockerfile_errors
                    .push(format!("{}: {e}", service.name)),
            }
        }

        // compose の描画失敗は走行全体の失敗
        let project_name = project_name_from(&self.paths.project_root);
        report.compose_path = render_compose(
            &self.engine,
            &prepared,
            &project_name,
            &self.paths.project_root,
        )?;

        info!(
            compose = %report.compose_path.display(),
            dockerfiles = report.dockerfiles.len(),
            warnings = report.warnings.len(),
            "Generation finished"
        );
        Ok(report)
    }
}

/// プロジェクト名をプロジェクトルートのディレクトリ名から導出する
///
/// 小文字化し、空白をハイフンに置き換えます。compose テンプレート内の
/// ラベルとしてのみ使われます。
pub fn project_name_from(project_root: &Path) -> String {
    project_root
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().replace(' ', "-"))
        .unwrap_or_else(|| "project".to_string())
}
