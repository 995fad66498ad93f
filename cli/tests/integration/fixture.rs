//! Project directory with fake `railway` / `vercel` executables on `PATH`.

#![allow(clippy::expect_used, dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Logged-in Railway. `service status` reports `$TANDEM_TEST_SERVICE_STATUS`
/// (default `SUCCESS`); the project-wide status lists a ready MySQL service
/// next to the backend.
pub const RAILWAY_OK: &str = r#"#!/bin/sh
echo "railway $*" >> "$TANDEM_TEST_LOG"
service_status="${TANDEM_TEST_SERVICE_STATUS:-SUCCESS}"
case "$1" in
  --version) echo "railway 3.17.0" ;;
  whoami) echo "dev@example.com" ;;
  service) echo "{\"name\":\"shop-backend\",\"status\":\"$service_status\"}" ;;
  status)
    if [ "$2" = "--json" ]; then
      echo "{\"services\":[{\"name\":\"MySQL\",\"status\":\"SUCCESS\"},{\"name\":\"shop-backend\",\"status\":\"$service_status\"}]}"
    else
      echo "Project: shop-backend"
    fi ;;
  domain) echo "https://shop-backend.up.railway.app" ;;
esac
exit 0
"#;

pub const RAILWAY_LOGGED_OUT: &str = r#"#!/bin/sh
echo "railway $*" >> "$TANDEM_TEST_LOG"
case "$1" in
  --version) echo "railway 3.17.0" ;;
  whoami) echo "Unauthorized. Please login with railway login" >&2; exit 1 ;;
  login) exit 1 ;;
esac
exit 0
"#;

/// Logged-in Vercel. `--version` fails when `$TANDEM_TEST_VERCEL_MISSING` is
/// set, which makes the deployment run the configured installer.
pub const VERCEL_OK: &str = r#"#!/bin/sh
echo "vercel $*" >> "$TANDEM_TEST_LOG"
case "$1" in
  --version)
    if [ -n "$TANDEM_TEST_VERCEL_MISSING" ]; then exit 127; fi
    echo "Vercel CLI 37.0.0" ;;
  whoami) echo "dev" ;;
  --prod) echo "Production: https://shop-x123.vercel.app" >&2 ;;
esac
exit 0
"#;

/// Project root with `backend/` and `frontend/`, a `tandem.yaml` with a
/// one-second poll interval, plus a `bin/` holding the fake platform CLIs.
pub struct Fixture {
    root: TempDir,
}

impl Fixture {
    pub fn new(railway: &str, vercel: &str) -> Self {
        Self::with_config(railway, vercel, "")
    }

    /// `extra_yaml` is appended to the generated `tandem.yaml`.
    pub fn with_config(railway: &str, vercel: &str, extra_yaml: &str) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        for dir in ["bin", "backend", "frontend"] {
            std::fs::create_dir(root.path().join(dir)).expect("mkdir");
        }
        write_script(&root.path().join("bin/railway"), railway);
        write_script(&root.path().join("bin/vercel"), vercel);
        std::fs::write(
            root.path().join("tandem.yaml"),
            format!(
                "app:\n  name: shop\ndeploy:\n  poll_interval_secs: 1\n  timeout_secs: 3\n{extra_yaml}"
            ),
        )
        .expect("config");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    fn log(&self) -> PathBuf {
        self.path().join("calls.log")
    }

    /// Every fake CLI invocation, one per line.
    pub fn calls(&self) -> String {
        std::fs::read_to_string(self.log()).unwrap_or_default()
    }

    /// `tandem` in the project root with the fake CLIs first on `PATH`.
    pub fn tandem(&self) -> Command {
        let path = std::env::var("PATH").unwrap_or_default();
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tandem"));
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("PATH", format!("{}:{path}", self.path().join("bin").display()))
            .env("TANDEM_TEST_LOG", self.log())
            .env_remove("TANDEM_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `tandem --yes deploy`.
    pub fn deploy(&self) -> Command {
        let mut cmd = self.tandem();
        cmd.args(["--yes", "deploy"]);
        cmd
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, body).expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
}
