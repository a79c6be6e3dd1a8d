#![allow(deprecated)] // TODO: cargo_bin の非推奨化に合わせて移行する

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// CLIヘルプが正しく表示されることを確認
#[test]
fn test_cli_help() {
    let env = TestEnv::new();
    env.crane()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("カタログから"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("list"));
}

/// バージョン表示が正しく動作することを確認
#[test]
fn test_cli_version() {
    let env = TestEnv::new();
    env.crane()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("craneflow"));
}

/// generateコマンドのヘルプが正しく表示されることを確認
#[test]
fn test_generate_help() {
    let env = TestEnv::new();
    env.crane()
        .arg("generate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--service"))
        .stdout(predicate::str::contains("--yes"))
        .stdout(predicate::str::contains("--up"));
}

/// 不正なコマンドでエラーになることを確認
#[test]
fn test_invalid_command() {
    let env = TestEnv::new();
    env.crane().arg("invalid-command").assert().failure();
}

/// 空のレジストリでlistを実行すると案内が表示されることを確認
#[test]
fn test_list_on_empty_registry() {
    let env = TestEnv::new();
    env.crane()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("crane publish"));
}

/// publish後のlistにサービスが優先度順で並ぶことを確認
#[test]
fn test_list_after_publish() {
    let env = TestEnv::new();
    env.crane().arg("publish").assert().success();

    let output = env.crane().arg("list").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    // php (priority 100) が nginx (90) より先に表示される
    let php_pos = stdout.find("PHP").unwrap();
    let nginx_pos = stdout.find("Nginx").unwrap();
    assert!(php_pos < nginx_pos, "priority順になっていない:\n{stdout}");
}

/// showコマンドで特定バージョンの定義が表示されることを確認
#[test]
fn test_show_service_version() {
    let env = TestEnv::new();
    env.crane().arg("publish").assert().success();

    env.crane()
        .args(["show", "php", "--release", "8.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("php:8.2-fpm"));
}

/// 未知のサービスのshowはエラーになることを確認
#[test]
fn test_show_unknown_service() {
    let env = TestEnv::new();
    env.crane().arg("publish").assert().success();

    env.crane().args(["show", "ghost"]).assert().failure();
}
