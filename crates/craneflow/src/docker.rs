//! docker compose の薄い呼び出し
//!
//! コンテナのライフサイクル管理は行わず、生成済みプロジェクトに対する
//! `docker compose up -d` / `down` の起動のみを担当します。

use crate::messenger::Messenger;
use std::process::{Command, Stdio};

/// Docker が利用可能か（インストール済みかつデーモン起動中か）
pub fn is_docker_available() -> bool {
    Command::new("docker")
        .arg("info")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// コンテナをデタッチモードで起動
pub fn compose_up(messenger: &Messenger) -> anyhow::Result<()> {
    ensure_docker(messenger)?;

    messenger.info("コンテナを起動しています...");
    let status = Command::new("docker")
        .args(["compose", "up", "-d"])
        .status()?;
    if !status.success() {
        anyhow::bail!("コンテナの起動に失敗しました (exit: {status})");
    }
    messenger.success("コンテナを起動しました");
    Ok(())
}

/// コンテナを停止
pub fn compose_down(messenger: &Messenger) -> anyhow::Result<()> {
    ensure_docker(messenger)?;

    messenger.info("コンテナを停止しています...");
    let status = Command::new("docker")
        .args(["compose", "down"])
        .status()?;
    if !status.success() {
        anyhow::bail!("コンテナの停止に失敗しました (exit: {status})");
    }
    messenger.success("コンテナを停止しました");
    Ok(())
}

fn ensure_docker(messenger: &Messenger) -> anyhow::Result<()> {
    if !is_docker_available() {
        messenger.error("Docker が見つかりません。Docker が起動しているか確認してください。");
        anyhow::bail!("docker info が失敗しました");
    }
    Ok(())
}
