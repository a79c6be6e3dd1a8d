use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// テスト用の隔離された環境
///
/// CRANEFLOW_HOME を一時ディレクトリへ向け、生成先のプロジェクトも
/// 一時ディレクトリにすることで、テスト間の漏れを防ぐ。
pub struct TestEnv {
    pub home: TempDir,
    pub project: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
            project: tempfile::tempdir().unwrap(),
        }
    }

    /// 環境を設定済みの crane コマンドを作る
    pub fn crane(&self) -> Command {
        let mut cmd = Command::cargo_bin("crane").unwrap();
        cmd.env("CRANEFLOW_HOME", self.home.path());
        cmd.current_dir(self.project.path());
        cmd
    }

    #[allow(dead_code)]
    pub fn compose_path(&self) -> PathBuf {
        self.project.path().join("docker-compose.yml")
    }

    #[allow(dead_code)]
    pub fn services_dir(&self) -> PathBuf {
        self.home.path().join("services")
    }
}
