//! 定義済みコンテンツのレジストリへの公開

use crate::assets;
use crate::messenger::Messenger;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 同梱のサービス定義とテンプレートをホームディレクトリへ展開する
///
/// force が false の場合、既存のエントリには触れず警告だけを出します。
pub fn handle(messenger: &Messenger, force: bool) -> anyhow::Result<()> {
    let (services_dir, templates_dir) = craneflow_config::ensure_dirs()?;

    publish_services(messenger, &services_dir, force)?;
    publish_templates(messenger, &templates_dir, force)?;

    messenger.success("定義済みコンテンツを公開しました");
    Ok(())
}

fn publish_services(messenger: &Messenger, services_dir: &Path, force: bool) -> anyhow::Result<()> {
    for service in assets::SERVICES {
        let target_dir = services_dir.join(service.name);

        if target_dir.exists() {
            if !force {
                messenger.warning(&format!("サービスは既に存在します: {}", service.name));
                continue;
            }
            fs::remove_dir_all(&target_dir)?;
            write_files(&target_dir, service.files)?;
            messenger.info(&format!("サービスを再公開しました: {}", service.name));
        } else {
            write_files(&target_dir, service.files)?;
            messenger.info(&format!("サービスを公開しました: {}", service.name));
        }
    }
    Ok(())
}

fn publish_templates(
    messenger: &Messenger,
    templates_dir: &Path,
    force: bool,
) -> anyhow::Result<()> {
    for template in assets::TEMPLATES {
        let target = templates_dir.join(template.path);

        if target.exists() && !force {
            messenger.warning(&format!("テンプレートは既に存在します: {}", template.path));
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, template.contents)?;
        debug!(template = %template.path, "Published template");
        messenger.info(&format!("テンプレートを公開しました: {}", template.path));
    }
    Ok(())
}

fn write_files(dir: &Path, files: &[assets::EmbeddedFile]) -> anyhow::Result<()> {
    for file in files {
        let target = dir.join(file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, file.contents)?;
    }
    Ok(())
}
