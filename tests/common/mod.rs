//! Shared testing utilities for workerkit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const WORKER_TEMPLATE: &str = "image: pushkinl3/pushkin-worker:latest
build:
  context: ./pushkin-worker
  dockerfile: Dockerfile
volumes:
  - ./pushkin-worker:/usr/src/app
command: bash start.debug.sh
depends_on:
  - \"message-queue\"
environment:
  - AMPQ_ADDRESS=amqp://message-queue:5672
  - QUEUE=verbcorner
links:
  - message-queue
";

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an empty project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Create a project with compose files, the worker template, and its source tree.
    pub fn with_project() -> Self {
        let ctx = Self::new();
        ctx.write("docker-compose.debug.yml", "services:\n  debug-service: debug\n");
        ctx.write("docker-compose.yml", "services:\n  normal-service: normal\n");
        ctx.write("docker-compose.production.yml", "services:\n  production-service: production\n");
        ctx.write("templates/yaml/worker.yml", WORKER_TEMPLATE);
        ctx.write("pushkin-worker/Dockerfile", "FROM node:10\n");
        ctx.write("pushkin-worker/src/index.js", "console.log('worker');\n");
        ctx
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `workerkit` binary in the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("workerkit").expect("Failed to locate workerkit binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the project directory.
    pub fn write(&self, path: &str, content: &str) {
        let full = self.work_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write test file");
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.work_dir.join(path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
    }

    /// Parse a YAML file relative to the project directory.
    pub fn read_yaml(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read(path)).expect("Failed to parse YAML")
    }

    /// Service keys of a compose file, in document order.
    pub fn service_keys(&self, path: &str) -> Vec<String> {
        self.read_yaml(path)["services"]
            .as_mapping()
            .map(|services| {
                services.keys().filter_map(|k| k.as_str().map(str::to_string)).collect()
            })
            .unwrap_or_default()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.work_dir.join(path).exists()
    }
}
