pub mod fixtures;
pub mod ports;

pub use ports::MockDocumentStore;
pub use ports::TestFiles;
