//! 選択の解決
//!
//! {サービス → バージョン} の選択を索引と突き合わせ、検証済みの
//! 設定へ解決します。解決は all-or-nothing: 1件でも失敗すれば
//! 部分的な結果は返しません（サービスが黙って欠けた compose
//! ファイルを生成しないため）。

use crate::error::ResolveError;
use crate::model::VersionConfig;
use crate::registry::Registry;
use crate::validate::validate;
use tracing::debug;

/// 解決済みの1サービス分の設定
///
/// 索引から複製された値であり、生成1回分の使い捨て出力として扱います。
/// 索引側のデータは解決によって変化しません。
#[derive(Debug, Clone)]
pub struct ResolvedService {
    pub name: String,
    pub version: String,
    pub config: VersionConfig,
}

/// 選択を解決済み設定の列へ解決する（選択順を維持）
pub fn resolve(
    selection: &[(String, String)],
    registry: &Registry,
) -> Result<Vec<ResolvedService>, ResolveError> {
    let mut resolved = Vec::with_capacity(selection.len());

    for (service, version) in selection {
        let entry = registry
            .get(service)
            .ok_or_else(|| ResolveError::ServiceNotFound(service.clone()))?;

        let config = entry
            .versions
            .get(version)
            .ok_or_else(|| ResolveError::VersionNotFound {
                service: service.clone(),
                version: version.clone(),
            })?;

        validate(config).map_err(|missing| ResolveError::InvalidConfig {
            service: service.clone(),
            version: version.clone(),
            missing: missing.to_string(),
        })?;

        debug!(service = %service, version = %version, "Resolved service configuration");
        resolved.push(ResolvedService {
            name: service.clone(),
            version: version.clone(),
            config: config.clone(),
        });
    }

    Ok(resolved)
}
