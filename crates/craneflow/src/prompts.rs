//! 対話的なサービス・バージョン選択

use craneflow_core::Registry;
use dialoguer::{Confirm, MultiSelect, Select};

/// 一覧表示用のサービス名
///
/// 短い名前は大文字（PHP, MYSQL）、それ以外は先頭だけ大文字にします。
pub fn display_name(name: &str) -> String {
    if name.len() <= 4 {
        name.to_uppercase()
    } else {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// 含めるサービスを複数選択させる（レジストリの優先度順に提示）
pub fn select_services(registry: &Registry) -> anyhow::Result<Vec<String>> {
    let names = registry.service_names();
    let items: Vec<String> = names.iter().map(|name| display_name(name)).collect();

    let chosen = MultiSelect::new()
        .with_prompt("含めるサービスを選択してください")
        .items(&items)
        .interact()?;

    Ok(chosen.into_iter().map(|i| names[i].to_string()).collect())
}

/// 選択された各サービスについてバージョンを選択させる
pub fn select_versions(
    registry: &Registry,
    services: &[String],
) -> anyhow::Result<Vec<(String, String)>> {
    let mut selection = Vec::with_capacity(services.len());

    for service in services {
        let Some(entry) = registry.get(service) else {
            anyhow::bail!("サービスが見つかりません: {service}");
        };
        let versions: Vec<&String> = entry.versions.keys().collect();

        let index = Select::new()
            .with_prompt(format!("{} のバージョンを選択してください", display_name(service)))
            .items(&versions)
            .default(0)
            .interact()?;

        selection.push((service.clone(), versions[index].clone()));
    }

    Ok(selection)
}

/// 生成を実行してよいか確認する
pub fn confirm_generation() -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt("この構成で生成を実行しますか?")
        .default(true)
        .interact()?)
}
