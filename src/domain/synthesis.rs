//! Turn a generic service stanza into a worker-specific definition.

use crate::domain::identity::WorkerIdentity;
use crate::domain::service::{ServiceStanza, WorkerDefinition, env_key, split_volume};

/// Environment variable naming the queue a worker consumes.
pub const DEFAULT_QUEUE_KEY: &str = "QUEUE";

/// Produce the concrete service definition for `identity`.
///
/// - `build.context` becomes `./<folder>`.
/// - The worker volume is re-pointed at `./<folder>`, keeping its container
///   path. It is the volume mounted from the build context (compared without a
///   leading `./` or trailing `/`), else the first `host:container` entry.
///   Other volumes pass through.
/// - Every `<queue_key>=...` assignment becomes `<queue_key>=<logical name>`;
///   order and all other assignments are preserved. When the stanza has no such
///   assignment, one is appended so every worker is bound to its queue.
/// - Image, dockerfile, command, dependencies, and links are copied unchanged.
pub fn synthesize(
    stanza: &ServiceStanza,
    identity: &WorkerIdentity,
    queue_key: &str,
) -> WorkerDefinition {
    let template = stanza.definition();
    let mut definition = template.clone();

    let context = format!("./{}", identity.folder_name());
    if let Some(index) = worker_volume(&template.volumes, &template.build.context)
        && let Some((_, container)) = split_volume(&template.volumes[index])
    {
        definition.volumes[index] = format!("{}:{}", context, container);
    }
    definition.build.context = context;

    let queue_assignment = format!("{}={}", queue_key, identity.logical_name());
    let mut bound = false;
    definition.environment = template
        .environment
        .iter()
        .map(|assignment| {
            if env_key(assignment) == queue_key {
                bound = true;
                queue_assignment.clone()
            } else {
                assignment.clone()
            }
        })
        .collect();
    if !bound {
        definition.environment.push(queue_assignment);
    }

    WorkerDefinition::new(definition)
}

fn worker_volume(volumes: &[String], context: &str) -> Option<usize> {
    let context = normalize_host(context);
    volumes
        .iter()
        .position(|volume| {
            split_volume(volume).is_some_and(|(host, _)| normalize_host(host) == context)
        })
        .or_else(|| volumes.iter().position(|volume| split_volume(volume).is_some()))
}

fn normalize_host(path: &str) -> &str {
    let path = path.strip_prefix("./").unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => path,
        trimmed => trimmed,
    }
}
