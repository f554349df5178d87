pub mod config;
pub mod environment;
pub mod error;
pub mod identity;
pub mod merge;
pub mod service;
pub mod synthesis;

pub use config::{GeneratorConfig, TemplateConfig};
pub use environment::{EnvironmentDocument, EnvironmentDocuments, EnvironmentSpec};
pub use error::AppError;
pub use identity::WorkerIdentity;
pub use merge::{detach_from, merge_into, service_keys};
pub use service::{BuildSpec, ServiceDefinition, ServiceStanza, WorkerDefinition};
pub use synthesis::synthesize;
