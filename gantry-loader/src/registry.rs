use std::sync::Mutex;
use std::sync::PoisonError;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::Result;

/// Platform library-loading collaborator (`System.loadLibrary` /
/// `dlopen` equivalent).
///
/// The dynamic linker on some platforms remembers a failed load and
/// refuses to retry it, so implementations should only be asked to load
/// a library the caller expects to succeed; the registry surfaces
/// failures instead of recording them.
pub trait LibraryLoader {
    fn load(&mut self, name: &str) -> Result<()>;
}

/// Whether a load attempt actually hit the platform loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    AlreadyLoaded,
}

/// Append-only set of library names already loaded in this process,
/// kept in first-seen order.
///
/// Consulted before every load attempt so that interdependent (even
/// circularly declared) libraries are each loaded exactly once.
#[derive(Debug, Default)]
pub struct LoadRegistry {
    loaded: Vec<String>,
}

impl LoadRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.iter().any(|loaded| loaded == name)
    }

    /// Loaded library names in first-seen order.
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    /// Loads one library through `loader` unless it is already
    /// registered. A failed load is not recorded, so the caller may
    /// retry through a different loader.
    pub fn load<L>(&mut self, name: &str, loader: &mut L) -> Result<LoadOutcome>
    where
        L: LibraryLoader,
    {
        if self.is_loaded(name) {
            debug!(name, "library already loaded, skipping");
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        loader.load(name)?;
        self.loaded.push(name.to_string());
        debug!(name, "library loaded");
        Ok(LoadOutcome::Loaded)
    }

    /// Loads an ordered list of libraries, deduplicating while
    /// preserving first-seen order. Load order matters when the
    /// libraries depend on each other, so the list is processed front
    /// to back and the first failure aborts the pass.
    pub fn load_all<L, S>(&mut self, names: &[S], loader: &mut L) -> Result<()>
    where
        L: LibraryLoader,
        S: AsRef<str>,
    {
        for name in names {
            self.load(name.as_ref(), loader)?;
        }
        Ok(())
    }
}

static PROCESS_REGISTRY: Lazy<Mutex<LoadRegistry>> =
    Lazy::new(|| Mutex::new(LoadRegistry::new()));

/// The process-wide registry, initialized empty at first use.
pub fn process_registry() -> &'static Mutex<LoadRegistry> {
    &PROCESS_REGISTRY
}

/// Loads an ordered library list into the process-wide registry. This
/// is the replacement for a host-language static initializer block: call
/// it before handing control to the native entry point.
pub fn load_process_libraries<L, S>(names: &[S], loader: &mut L) -> Result<()>
where
    L: LibraryLoader,
    S: AsRef<str>,
{
    let mut registry = process_registry()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    registry.load_all(names, loader)
}
