//! Built-in embedding providers.

mod hashing;

pub use hashing::HashingEmbedder;
