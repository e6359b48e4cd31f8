pub mod mock;

pub use mock::MockEmbeddings;
