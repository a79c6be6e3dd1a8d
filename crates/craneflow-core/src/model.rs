//! サービス定義のデータモデル

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// サービスが公開する設定ファイルの定義
///
/// `source` は `{version}` プレースホルダを含むことができ、
/// サービス定義ディレクトリからの相対パスとして解決されます。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSpec {
    /// 定義ディレクトリからの相対パステンプレート
    pub source: String,

    /// コンテナ内の配置先（絶対パス）
    pub destination: String,

    /// true の場合、ボリュームマウントを自動追加しない
    #[serde(default, rename = "skipVolumes", skip_serializing_if = "is_false")]
    pub skip_volumes: bool,
}

/// 解決の単位となるバージョン設定
///
/// `build` か `image` の少なくとも一方と、`compose` フラグメントが必須。
/// 形状の強制はパース時ではなく解決時の検証で行います（validate 参照）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionConfig {
    /// ビルド指示（base_image, command など、自由形式のマップ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Map<String, Value>>,

    /// ビルド済みイメージ参照（例: "mysql:8.0"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// compose マニフェストへマージされるフラグメント（自由形式）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compose: Option<Map<String, Value>>,

    /// 公開ファイル定義（出力ファイル名 → FileSpec）
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub publishes: BTreeMap<String, FileSpec>,

    /// 未知のキーはそのまま保持する
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VersionConfig {
    /// build 設定を持つサービスかどうか
    pub fn is_buildable(&self) -> bool {
        self.build.is_some()
    }
}

/// 読み込まれた1サービス分の定義
#[derive(Debug, Clone)]
pub struct ServiceEntry {
    /// サービス名（小文字の英数字とハイフン）
    pub name: String,

    /// 一覧表示の順序にのみ使う優先度（解決には関与しない）
    pub priority: i64,

    /// バージョンラベル → VersionConfig
    pub versions: BTreeMap<String, VersionConfig>,
}

/// サービス名として妥当かどうか
///
/// 小文字の英字・数字・ハイフンのみを許可します。
pub fn is_valid_service_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// base_image からビルドタグを導出する
///
/// コロン以降を取り出し、`-suffix` を取り除きます。
/// 例: "php:8.2-fpm" → "8.2"
pub fn build_tag(base_image: &str) -> Option<&str> {
    let (_, tag) = base_image.split_once(':')?;
    let tag = tag.split('-').next().unwrap_or(tag);
    if tag.is_empty() { None } else { Some(tag) }
}

fn is_false(value: &bool) -> bool {
    !value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tag() {
        assert_eq!(build_tag("php:8.2-fpm"), Some("8.2"));
        assert_eq!(build_tag("mysql:8.0"), Some("8.0"));
        assert_eq!(build_tag("redis:latest"), Some("latest"));
        // タグなしは導出できない
        assert_eq!(build_tag("postgres"), None);
        assert_eq!(build_tag("nginx:"), None);
    }

    #[test]
    fn test_is_valid_service_name() {
        assert!(is_valid_service_name("php"));
        assert!(is_valid_service_name("my-service2"));
        assert!(!is_valid_service_name("MySQL"));
        assert!(!is_valid_service_name(""));
        assert!(!is_valid_service_name("with space"));
    }

    #[test]
    fn test_file_spec_skip_volumes_default() {
        let spec: FileSpec = serde_json::from_str(
            r#"{"source": "config/{version}/php.ini", "destination": "/usr/local/etc/php/php.ini"}"#,
        )
        .unwrap();
        assert!(!spec.skip_volumes);

        let spec: FileSpec = serde_json::from_str(
            r#"{"source": "a", "destination": "/b", "skipVolumes": true}"#,
        )
        .unwrap();
        assert!(spec.skip_volumes);
    }

    #[test]
    fn test_version_config_unknown_keys_preserved() {
        let config: VersionConfig = serde_json::from_str(
            r#"{"image": "redis:latest", "compose": {}, "note": "keep me"}"#,
        )
        .unwrap();
        assert_eq!(config.extra.get("note").unwrap(), "keep me");
    }
}
