//! サービス一覧の表示

use crate::messenger::Messenger;
use crate::prompts::display_name;
use colored::Colorize;
use craneflow_core::Registry;

/// 読み込み済みサービスを優先度順に表示する
pub fn handle(messenger: &Messenger, registry: &Registry) -> anyhow::Result<()> {
    if registry.is_empty() {
        messenger.warning("レジストリにサービスがありません。`crane publish` を実行してください。");
        return Ok(());
    }

    for warning in &registry.warnings {
        messenger.warning(&format!("定義を読み飛ばしました: {warning}"));
    }

    messenger.info("利用可能なサービス:");
    for entry in &registry.services {
        let versions: Vec<&str> = entry.versions.keys().map(String::as_str).collect();
        messenger.note(&format!(
            "  {} {}",
            display_name(&entry.name).cyan().bold(),
            versions.join(", ").white()
        ));
    }

    Ok(())
}
