//! バイナリに同梱する定義済みコンテンツ
//!
//! `crane publish` がレジストリとテンプレートをユーザーのホームへ
//! 展開するときの供給源。

pub struct EmbeddedFile {
    /// サービスディレクトリ（またはテンプレートディレクトリ）からの相対パス
    pub path: &'static str,
    pub contents: &'static str,
}

pub struct EmbeddedService {
    pub name: &'static str,
    pub files: &'static [EmbeddedFile],
}

/// 定義済みサービス
pub const SERVICES: &[EmbeddedService] = &[
    EmbeddedService {
        name: "php",
        files: &[
            EmbeddedFile {
                path: "service.json",
                contents: include_str!("../assets/services/php/service.json"),
            },
            EmbeddedFile {
                path: "config/7.4/php.ini",
                contents: include_str!("../assets/services/php/config/7.4/php.ini"),
            },
            EmbeddedFile {
                path: "config/8.2/php.ini",
                contents: include_str!("../assets/services/php/config/8.2/php.ini"),
            },
            EmbeddedFile {
                path: "config/8.3/php.ini",
                contents: include_str!("../assets/services/php/config/8.3/php.ini"),
            },
            EmbeddedFile {
                path: "config/8.4/php.ini",
                contents: include_str!("../assets/services/php/config/8.4/php.ini"),
            },
        ],
    },
    EmbeddedService {
        name: "nginx",
        files: &[
            EmbeddedFile {
                path: "service.json",
                contents: include_str!("../assets/services/nginx/service.json"),
            },
            EmbeddedFile {
                path: "config/default.conf",
                contents: include_str!("../assets/services/nginx/config/default.conf"),
            },
        ],
    },
    EmbeddedService {
        name: "mysql",
        files: &[EmbeddedFile {
            path: "service.json",
            contents: include_str!("../assets/services/mysql/service.json"),
        }],
    },
    EmbeddedService {
        name: "postgres",
        files: &[EmbeddedFile {
            path: "service.json",
            contents: include_str!("../assets/services/postgres/service.json"),
        }],
    },
    EmbeddedService {
        name: "redis",
        files: &[EmbeddedFile {
            path: "service.json",
            contents: include_str!("../assets/services/redis/service.json"),
        }],
    },
];

/// 定義済みテンプレート
pub const TEMPLATES: &[EmbeddedFile] = &[
    EmbeddedFile {
        path: "docker-compose.yml.tera",
        contents: include_str!("../assets/templates/docker-compose.yml.tera"),
    },
    EmbeddedFile {
        path: "Dockerfile.tera",
        contents: include_str!("../assets/templates/Dockerfile.tera"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_definitions_are_valid_json() {
        for service in SERVICES {
            let definition = service
                .files
                .iter()
                .find(|f| f.path == "service.json")
                .expect("service.json が同梱されているべき");
            let parsed: serde_json::Value = serde_json::from_str(definition.contents).unwrap();
            assert!(parsed.is_object(), "{} の定義が JSON オブジェクトでない", service.name);
        }
    }

    #[test]
    fn test_embedded_service_names_are_valid() {
        for service in SERVICES {
            assert!(craneflow_core::is_valid_service_name(service.name));
        }
    }
}
