//! Seeded project layouts for command tests.

use super::ports::TestFiles;

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

/// A project with the three compose files, the worker template, and a
/// two-file template source tree.
pub fn pushkin_project() -> TestFiles {
    let files = TestFiles::new();
    files.add("docker-compose.debug.yml", "services:\n  debug-service: debug\n");
    files.add("docker-compose.yml", "services:\n  normal-service: normal\n");
    files.add("docker-compose.production.yml", "services:\n  production-service: production\n");
    files.add("templates/yaml/worker.yml", WORKER_TEMPLATE);
    files.add("pushkin-worker/Dockerfile", "FROM node:10\n");
    files.add("pushkin-worker/start.debug.sh", "node index.js\n");
    files
}
