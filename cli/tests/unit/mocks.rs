//! Shared mock infrastructure for unit tests.
//!
//! Scripted implementations of every application port, each recording the
//! calls it receives so tests can assert on ordering and absence of calls.

#![allow(dead_code, clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::{Path, PathBuf};

use anyhow::Result;
use tandem_cli::application::ports::{
    BackendPlatform, CommandRunner, FrontendPlatform, LocalFs, OperatorPrompt, PlatformSession,
    ProgressReporter,
};
use tandem_cli::domain::{CommandOutput, TandemConfig};

// ── Output helpers ────────────────────────────────────────────────────────────

pub fn ok(stdout: &str) -> CommandOutput {
    CommandOutput::new(Some(0), stdout.as_bytes(), b"")
}

pub fn fail(code: i32, stderr: &str) -> CommandOutput {
    CommandOutput::new(Some(code), b"", stderr.as_bytes())
}

/// Config with a short poll window so paused-clock tests stay small.
pub fn test_config() -> TandemConfig {
    let mut config = TandemConfig::default();
    config.app.name = "shop".to_string();
    config.deploy.poll_interval_secs = 5;
    config.deploy.timeout_secs = 15;
    config
}

// ── Reporter ──────────────────────────────────────────────────────────────────

/// Records every event as `"<kind>: <message>"`.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<String>>,
}

impl RecordingReporter {
    fn push(&self, kind: &str, message: &str) {
        self.events.borrow_mut().push(format!("{kind}: {message}"));
    }

    pub fn has(&self, kind: &str, needle: &str) -> bool {
        let prefix = format!("{kind}: ");
        self.events
            .borrow()
            .iter()
            .any(|e| e.starts_with(&prefix) && e.contains(needle))
    }
}

impl ProgressReporter for RecordingReporter {
    fn header(&self, message: &str) {
        self.push("header", message);
    }
    fn info(&self, message: &str) {
        self.push("info", message);
    }
    fn step(&self, message: &str) {
        self.push("step", message);
    }
    fn success(&self, message: &str) {
        self.push("success", message);
    }
    fn warn(&self, message: &str) {
        self.push("warn", message);
    }
    fn error(&self, message: &str) {
        self.push("error", message);
    }
}

// ── Prompt ────────────────────────────────────────────────────────────────────

/// Answers URL prompts from a queue; `None` once the queue is empty.
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<String>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|s| (*s).to_string()).collect()),
            asked: RefCell::default(),
        }
    }
}

impl OperatorPrompt for ScriptedPrompt {
    async fn ask_url(&self, prompt: &str) -> Result<Option<String>> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().pop_front())
    }

    async fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(default)
    }
}

// ── Filesystem ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryFs {
    pub files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemoryFs {
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }
}

impl LocalFs for MemoryFs {
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

// ── Command runner ────────────────────────────────────────────────────────────

/// `--version` answers per binary; binaries without an entry fail to spawn.
#[derive(Default)]
pub struct FakeRunner {
    pub versions: HashMap<String, String>,
    pub install_exit: i32,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn with_versions(versions: &[(&str, &str)]) -> Self {
        Self {
            versions: versions
                .iter()
                .map(|(b, v)| ((*b).to_string(), (*v).to_string()))
                .collect(),
            ..Self::default()
        }
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[&str], _: Option<&Path>) -> Result<CommandOutput> {
        self.calls
            .borrow_mut()
            .push(format!("{program} {}", args.join(" ")));
        match self.versions.get(program) {
            Some(version) => Ok(ok(version)),
            None => anyhow::bail!("failed to spawn {program}: No such file or directory"),
        }
    }

    async fn run_interactive(
        &self,
        program: &str,
        args: &[&str],
        _: Option<&Path>,
    ) -> Result<CommandOutput> {
        self.calls
            .borrow_mut()
            .push(format!("{program} {}", args.join(" ")));
        Ok(CommandOutput::new(Some(self.install_exit), b"", b""))
    }
}

// ── Backend platform ──────────────────────────────────────────────────────────

pub struct ScriptedBackend {
    pub logged_in: Cell<bool>,
    pub login_works: bool,
    pub linked: bool,
    pub failing_variables: Vec<String>,
    /// Popped per status poll; an empty queue reports `BUILDING`.
    pub statuses: RefCell<VecDeque<CommandOutput>>,
    pub domain: CommandOutput,
    pub calls: RefCell<Vec<String>>,
    pub variables: RefCell<Vec<(String, String)>>,
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self {
            logged_in: Cell::new(true),
            login_works: true,
            linked: true,
            failing_variables: Vec::new(),
            statuses: RefCell::new(VecDeque::from([ok(r#"{"status":"SUCCESS"}"#)])),
            domain: ok("https://shop-backend.up.railway.app"),
            calls: RefCell::default(),
            variables: RefCell::default(),
        }
    }
}

impl ScriptedBackend {
    fn call(&self, name: &str) {
        self.calls.borrow_mut().push(name.to_string());
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == name)
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == name).count()
    }
}

impl PlatformSession for ScriptedBackend {
    fn platform(&self) -> &str {
        "Railway"
    }
    fn cli(&self) -> &str {
        "railway"
    }
    async fn whoami(&self) -> Result<CommandOutput> {
        self.call("whoami");
        if self.logged_in.get() {
            Ok(ok("dev@example.com"))
        } else {
            Ok(fail(1, "Unauthorized. Please login"))
        }
    }
    async fn login(&self) -> Result<CommandOutput> {
        self.call("login");
        self.logged_in.set(self.login_works);
        Ok(CommandOutput::new(Some(i32::from(!self.login_works)), b"", b""))
    }
}

impl BackendPlatform for ScriptedBackend {
    async fn link_status(&self) -> Result<CommandOutput> {
        self.call("status");
        Ok(if self.linked {
            ok("Project: shop-backend")
        } else {
            fail(1, "No linked project found")
        })
    }
    async fn create_project(&self, name: &str) -> Result<CommandOutput> {
        self.call(&format!("init {name}"));
        Ok(ok("Created project"))
    }
    async fn add_database(&self, kind: &str) -> Result<CommandOutput> {
        self.call(&format!("add {kind}"));
        Ok(ok("Database added"))
    }
    async fn set_variable(&self, key: &str, value: &str) -> Result<CommandOutput> {
        self.call("variables");
        if self.failing_variables.iter().any(|k| k == key) {
            return Ok(fail(1, "rate limited"));
        }
        self.variables
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        Ok(ok(""))
    }
    async fn deploy_detached(&self) -> Result<CommandOutput> {
        self.call("up");
        Ok(ok("Uploaded"))
    }
    async fn deployment_status(&self) -> Result<CommandOutput> {
        self.call("service status");
        Ok(self
            .statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| ok(r#"{"status":"BUILDING"}"#)))
    }
    async fn domain(&self) -> Result<CommandOutput> {
        self.call("domain");
        Ok(self.domain.clone())
    }
}

// ── Frontend platform ─────────────────────────────────────────────────────────

pub struct ScriptedFrontend {
    pub logged_in: Cell<bool>,
    pub login_works: bool,
    pub deploy: CommandOutput,
    pub calls: RefCell<Vec<String>>,
}

impl Default for ScriptedFrontend {
    fn default() -> Self {
        Self {
            logged_in: Cell::new(true),
            login_works: true,
            deploy: CommandOutput::new(
                Some(0),
                b"",
                b"Vercel CLI 37.0.0\nInspect: https://vercel.com/shop/abc\nProduction: https://shop-x123.vercel.app\n",
            ),
            calls: RefCell::default(),
        }
    }
}

impl ScriptedFrontend {
    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == name)
    }
}

impl PlatformSession for ScriptedFrontend {
    fn platform(&self) -> &str {
        "Vercel"
    }
    fn cli(&self) -> &str {
        "vercel"
    }
    async fn whoami(&self) -> Result<CommandOutput> {
        self.calls.borrow_mut().push("whoami".to_string());
        if self.logged_in.get() {
            Ok(ok("dev"))
        } else {
            Ok(fail(1, "Error: No existing credentials found."))
        }
    }
    async fn login(&self) -> Result<CommandOutput> {
        self.calls.borrow_mut().push("login".to_string());
        self.logged_in.set(self.login_works);
        Ok(CommandOutput::new(Some(i32::from(!self.login_works)), b"", b""))
    }
}

impl FrontendPlatform for ScriptedFrontend {
    async fn deploy_production(&self) -> Result<CommandOutput> {
        self.calls.borrow_mut().push("deploy".to_string());
        Ok(self.deploy.clone())
    }
}
