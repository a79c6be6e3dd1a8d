//! サービス定義の表示

use crate::messenger::Messenger;
use colored::Colorize;
use craneflow_core::Registry;

/// サービス定義（全体または特定バージョン）を JSON で表示する
pub fn handle(
    messenger: &Messenger,
    registry: &Registry,
    service: &str,
    release: Option<&str>,
) -> anyhow::Result<()> {
    let Some(entry) = registry.get(service) else {
        anyhow::bail!("サービスが見つかりません: {service}");
    };

    match release {
        Some(version) => {
            let Some(config) = entry.versions.get(version) else {
                anyhow::bail!("サービス {service} にバージョン {version} がありません");
            };
            messenger.info(&format!("{} {}", service.cyan().bold(), version));
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        None => {
            messenger.info(&format!(
                "{} (priority: {})",
                service.cyan().bold(),
                entry.priority
            ));
            println!("{}", serde_json::to_string_pretty(&entry.versions)?);
        }
    }

    Ok(())
}
