pub mod environment_loader;
pub mod template_loader;

pub use environment_loader::load_documents;
pub use template_loader::load_template;
