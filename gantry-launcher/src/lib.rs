pub mod diagnostics;
pub mod error;
pub mod host;
pub mod launcher;
pub mod session;

// Re-export key types for convenience.
pub use diagnostics::{dump_report, DumpOptions};
pub use error::{LaunchError, Result};
pub use host::PermissionHost;
pub use launcher::{Action, BootstrapOutcome, Launcher, LauncherPhase};
pub use session::{NativeSession, SessionMode, SessionStart};
