// This is a metapackage for tests
// Re-export crates as modules

pub use common;
pub use pricing_engine;
