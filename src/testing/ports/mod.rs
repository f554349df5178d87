mod test_document_store;
mod test_files;

pub use self::test_document_store::MockDocumentStore;
pub use self::test_files::TestFiles;
