//! 生成コマンド — カタログから compose プロジェクトを生成する

use crate::commands::publish;
use crate::messenger::Messenger;
use crate::prompts;
use crate::{docker, gitignore};
use colored::Colorize;
use craneflow_core::Registry;
use craneflow_gen::{GenPaths, Generator, OUTPUT_DIR};
use std::path::Path;
use tracing::debug;

pub struct GenerateArgs {
    /// `--service name:version` で渡された選択（空なら対話選択）
    pub services: Vec<String>,
    /// 確認プロンプトをスキップ
    pub yes: bool,
    /// 生成後に docker compose up -d を実行
    pub up: bool,
}

pub fn handle(messenger: &Messenger, args: GenerateArgs) -> anyhow::Result<()> {
    // 初回実行ならレジストリを初期化する
    let services_dir = craneflow_config::services_dir()?;
    let templates_dir = craneflow_config::templates_dir()?;
    if !services_dir.exists() || !templates_dir.exists() {
        messenger.info("初回実行のため、定義済みコンテンツを初期化します");
        publish::handle(messenger, false)?;
    }

    let registry = Registry::load(&services_dir)?;
    for warning in &registry.warnings {
        messenger.warning(&format!("定義を読み飛ばしました: {warning}"));
    }
    if registry.is_empty() {
        messenger.warning("レジストリにサービスがありません。`crane publish` を実行してください。");
        return Ok(());
    }

    // 選択の収集: フラグ指定か対話か
    let selection = if args.services.is_empty() {
        let services = prompts::select_services(&registry)?;
        if services.is_empty() {
            messenger.warning("サービスが選択されていません");
            return Ok(());
        }
        prompts::select_versions(&registry, &services)?
    } else {
        parse_selection(&args.services)?
    };

    // 選択内容の要約と確認
    messenger.info("選択された構成:");
    for (service, version) in &selection {
        messenger.note(&format!("  • {} → {}", service.as_str().cyan(), version));
    }
    if !args.yes && !prompts::confirm_generation()? {
        messenger.info("生成をキャンセルしました");
        return Ok(());
    }

    let project_root = std::env::current_dir()?;
    let generator = Generator::new(
        GenPaths {
            services_dir,
            project_root: project_root.clone(),
        },
        &templates_dir,
    )?;

    let report = generator.run(&registry, &selection)?;

    for warning in &report.warnings {
        messenger.warning(warning);
    }
    for error in &report.dockerfile_errors {
        messenger.error(&format!("Dockerfile を生成できません: {error}"));
    }
    for dockerfile in &report.dockerfiles {
        messenger.info(&format!("Dockerfile を生成しました: {}", relative_display(dockerfile, &project_root)));
    }
    messenger.success("docker-compose.yml を生成しました");

    // 生成物ディレクトリを .gitignore へ追記（.gitignore がなければ何もしない）
    if gitignore::add_pattern(
        &project_root,
        &format!("{OUTPUT_DIR}/"),
        Some("CraneFlow build context"),
    )? {
        messenger.info(&format!(".gitignore に {OUTPUT_DIR}/ を追加しました"));
    }

    if args.up {
        docker::compose_up(messenger)?;
    }

    Ok(())
}

/// `name:version` 形式のフラグ列を選択へ変換する
fn parse_selection(flags: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    let mut selection: Vec<(String, String)> = Vec::with_capacity(flags.len());

    for flag in flags {
        let Some((service, version)) = flag.split_once(':') else {
            anyhow::bail!("--service は name:version 形式で指定してください: {flag}");
        };
        let (service, version) = (service.trim(), version.trim());
        if service.is_empty() || version.is_empty() {
            anyhow::bail!("--service は name:version 形式で指定してください: {flag}");
        }
        // 解決結果はサービス名をキーとするため、1サービスにつき1バージョン
        if selection.iter().any(|(existing, _)| existing == service) {
            anyhow::bail!("サービスが複数回指定されています: {service}");
        }
        selection.push((service.to_string(), version.to_string()));
    }

    debug!(count = selection.len(), "Parsed selection from flags");
    Ok(selection)
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
