pub mod error;
pub mod registry;

// Re-export key types for convenience.
pub use error::{LoadError, Result};
pub use registry::{
    load_process_libraries, process_registry, LibraryLoader, LoadOutcome, LoadRegistry,
};
