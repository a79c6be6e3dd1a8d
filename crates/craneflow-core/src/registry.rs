//! レジストリローダー
//!
//! レジストリディレクトリ直下のサブディレクトリを走査し、各ディレクトリの
//! `service.json` をサービス定義として読み込みます。定義ファイルの不備は
//! 警告として記録し、他のサービスの読み込みは続行します。

use crate::error::{RegistryError, Result};
use crate::model::{ServiceEntry, VersionConfig, is_valid_service_name};
use serde::Deserialize;
use serde::de::{self, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// サービス定義ファイルの名前
pub const DEFINITION_FILE: &str = "service.json";

/// 読み込み時に記録される警告（定義の不備、パース失敗など）
#[derive(Debug, Clone)]
pub struct LoadWarning {
    pub service: String,
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.service, self.message)
    }
}

/// 読み込み済みサービス定義の索引
///
/// サービスは優先度の降順（同値は走査順）で保持されます。
/// この順序は一覧表示にのみ使われ、解決の正しさには関与しません。
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub services: Vec<ServiceEntry>,
    pub warnings: Vec<LoadWarning>,
}

impl Registry {
    /// レジストリディレクトリから全サービス定義を読み込む
    ///
    /// ディレクトリが存在しない場合は空のまま作成し、空の索引を返します
    /// （初回実行をサポートするため）。
    #[tracing::instrument]
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| RegistryError::Io {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            debug!(dir = %dir.display(), "Created empty registry directory");
            return Ok(Self::default());
        }

        let mut names = Vec::new();
        let entries = fs::read_dir(dir).map_err(|e| RegistryError::Io {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        for entry in entries.flatten() {
            if entry.path().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        // read_dir の順序は環境依存なので、走査順を固定する
        names.sort();

        let mut services = Vec::new();
        let mut warnings = Vec::new();

        for name in names {
            let definition = dir.join(&name).join(DEFINITION_FILE);
            if !definition.exists() {
                continue;
            }

            if !is_valid_service_name(&name) {
                warnings.push(LoadWarning {
                    service: name.clone(),
                    message: "サービス名が不正です（小文字の英数字とハイフンのみ）".to_string(),
                });
                continue;
            }

            match read_definition(&definition) {
                Ok(file) => {
                    debug!(service = %name, versions = file.versions.len(), "Loaded service definition");
                    services.push(ServiceEntry {
                        name,
                        priority: file.priority,
                        versions: file.versions,
                    });
                }
                Err(message) => {
                    warn!(service = %name, %message, "Skipping malformed service definition");
                    warnings.push(LoadWarning { service: name, message });
                }
            }
        }

        // 優先度の降順、同値は走査順を維持（stable sort）
        services.sort_by_key(|entry| std::cmp::Reverse(entry.priority));

        Ok(Self { services, warnings })
    }

    /// サービス定義を取得
    pub fn get(&self, name: &str) -> Option<&ServiceEntry> {
        self.services.iter().find(|entry| entry.name == name)
    }

    /// 特定バージョンの設定を取得
    pub fn version(&self, service: &str, version: &str) -> Option<&VersionConfig> {
        self.get(service).and_then(|entry| entry.versions.get(version))
    }

    /// 読み込み済みサービス名の一覧（優先度順）
    pub fn service_names(&self) -> Vec<&str> {
        self.services.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// パース済みの定義ファイル
///
/// トップレベルの `priority` キーはバージョンではなくメタデータとして
/// 取り出され、残りのキーがバージョンラベルになります。
struct DefinitionFile {
    priority: i64,
    versions: BTreeMap<String, VersionConfig>,
}

fn read_definition(path: &Path) -> std::result::Result<DefinitionFile, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

impl<'de> Deserialize<'de> for DefinitionFile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DefinitionVisitor;

        impl<'de> Visitor<'de> for DefinitionVisitor {
            type Value = DefinitionFile;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("バージョンラベルをキーとする JSON オブジェクト")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut priority = 0i64;
                let mut versions = BTreeMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "priority" {
                        priority = map.next_value()?;
                        continue;
                    }
                    let config: VersionConfig = map.next_value()?;
                    // JSON オブジェクトはキーの重複を黙って上書きするため、
                    // ここで明示的に検出してパースエラーにする
                    if versions.insert(key.clone(), config).is_some() {
                        return Err(de::Error::custom(format!(
                            "バージョンラベルが重複しています: {key}"
                        )));
                    }
                }

                Ok(DefinitionFile { priority, versions })
            }
        }

        deserializer.deserialize_map(DefinitionVisitor)
    }
}
