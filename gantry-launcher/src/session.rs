use gantry_capability::Capability;
use serde::Deserialize;
use serde::Serialize;

/// Feature level the native session should run at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Every required capability is granted.
    Full,
    /// At least one capability was denied. The native layer must run
    /// the listed features degraded rather than fail.
    Degraded { denied: Vec<Capability> },
    /// Startup was speculative: a permission request is still pending
    /// for the listed capabilities and the native layer polls grant
    /// state itself.
    Speculative { pending: Vec<Capability> },
}

/// Startup payload handed to the native entry point.
///
/// The grant outcome travels with the handoff so the native layer never
/// has to guess why a feature is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStart {
    pub mode: SessionMode,
}

impl SessionStart {
    pub fn new(mode: SessionMode) -> Self {
        Self { mode }
    }
}

/// The native runtime entry point.
///
/// An integration that already lives inside the host's session object
/// implements `start` as a plain return to the host; a standalone
/// integration launches the native activity and finishes the current
/// one. Either way the launcher only sees this narrow contract.
pub trait NativeSession {
    fn start(&mut self, start: SessionStart);

    /// Read-only introspection hook for diagnostic capture. Must return
    /// promptly. `None` when the session exposes no dump.
    fn diagnostic_dump(&self) -> Option<String> {
        None
    }
}
