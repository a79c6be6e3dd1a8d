//! VersionConfig の検証ルール
//!
//! 検証は存在チェックの小さなルール表として構成し、必須項目の追加を
//! 分岐の増殖なしに行えるようにしています。各ルールは不足している
//! 項目名を返します。

use crate::model::{VersionConfig, build_tag};
use serde_json::Value;

type Rule = fn(&VersionConfig) -> Result<(), &'static str>;

/// 適用されるルール表（並び順に評価し、最初の違反で打ち切る）
const RULES: &[Rule] = &[
    has_build_or_image,
    build_has_required_fields,
    build_base_image_has_tag,
    has_compose,
];

/// VersionConfig を検証し、違反があれば不足項目名を返す
pub fn validate(config: &VersionConfig) -> Result<(), &'static str> {
    for rule in RULES {
        rule(config)?;
    }
    Ok(())
}

fn has_build_or_image(config: &VersionConfig) -> Result<(), &'static str> {
    if config.build.is_none() && config.image.is_none() {
        return Err("build または image");
    }
    Ok(())
}

fn build_has_required_fields(config: &VersionConfig) -> Result<(), &'static str> {
    let Some(build) = &config.build else {
        return Ok(());
    };
    if !matches!(build.get("base_image"), Some(Value::String(_))) {
        return Err("build.base_image");
    }
    if !build.contains_key("command") {
        return Err("build.command");
    }
    Ok(())
}

/// base_image は `<image>:<tag>` 形式でなければならない
///
/// タグはビルドディレクトリ名とイメージ名の導出に使うため、
/// タグ導出時ではなくここで弾きます。
fn build_base_image_has_tag(config: &VersionConfig) -> Result<(), &'static str> {
    let Some(build) = &config.build else {
        return Ok(());
    };
    if let Some(Value::String(base_image)) = build.get("base_image")
        && build_tag(base_image).is_none()
    {
        return Err("build.base_image のタグ");
    }
    Ok(())
}

fn has_compose(config: &VersionConfig) -> Result<(), &'static str> {
    if config.compose.is_none() {
        return Err("compose");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(json: &str) -> VersionConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_build_config() {
        let config = config_from(
            r#"{"build": {"base_image": "php:8.2-fpm", "command": "php-fpm"}, "compose": {}}"#,
        );
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_valid_image_config() {
        let config = config_from(r#"{"image": "mysql:8.0", "compose": {}}"#);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_build_and_image() {
        let config = config_from(r#"{"compose": {}}"#);
        assert_eq!(validate(&config), Err("build または image"));
    }

    #[test]
    fn test_build_missing_base_image() {
        let config = config_from(r#"{"build": {"command": "php-fpm"}, "compose": {}}"#);
        assert_eq!(validate(&config), Err("build.base_image"));
    }

    #[test]
    fn test_build_missing_command() {
        let config = config_from(r#"{"build": {"base_image": "php:8.2-fpm"}, "compose": {}}"#);
        assert_eq!(validate(&config), Err("build.command"));
    }

    #[test]
    fn test_base_image_without_tag() {
        let config = config_from(
            r#"{"build": {"base_image": "php", "command": "php-fpm"}, "compose": {}}"#,
        );
        assert_eq!(validate(&config), Err("build.base_image のタグ"));
    }

    #[test]
    fn test_missing_compose() {
        let config = config_from(r#"{"image": "redis:latest"}"#);
        assert_eq!(validate(&config), Err("compose"));
    }

    #[test]
    fn test_build_and_image_both_present_is_ok() {
        // 排他ではない: 両方あっても build 側が使われるだけ
        let config = config_from(
            r#"{"image": "php:8.2-fpm", "build": {"base_image": "php:8.2-fpm", "command": "php-fpm"}, "compose": {}}"#,
        );
        assert!(validate(&config).is_ok());
    }
}
