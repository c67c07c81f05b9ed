use gantry_capability::missing_capabilities;
use gantry_capability::Capability;
use gantry_capability::DenialPolicy;
use gantry_capability::GrantResult;
use gantry_capability::LaunchConfiguration;
use gantry_capability::RequestId;
use gantry_capability::StartPolicy;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::error::LaunchError;
use crate::error::Result;
use crate::host::PermissionHost;
use crate::session::NativeSession;
use crate::session::SessionMode;
use crate::session::SessionStart;

/// Bootstrap state machine phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LauncherPhase {
    Created,
    CheckingPermissions,
    AwaitingGrant,
    Granted,
    SessionStarted,
    TornDown,
}

/// Outcome of a bootstrap pass, reported to the embedder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Nothing was missing; the session started in full mode without a
    /// permission dialog.
    Started,
    /// One batched request was issued; native startup waits for the
    /// grant callback.
    AwaitingGrant {
        request_id: RequestId,
        requested: Vec<Capability>,
    },
    /// One batched request was issued and the session started
    /// speculatively while it is pending.
    StartedSpeculatively {
        request_id: RequestId,
        requested: Vec<Capability>,
    },
}

/// Decision produced by a consumed grant callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hand off (or, for a speculative start, confirm) the native
    /// session at the given mode.
    StartSession(SessionMode),
    /// At least one capability was denied and the configuration defers
    /// the re-prompt decision to the embedding application. The
    /// launcher itself never re-prompts.
    RetryOrAbort { denied: Vec<Capability> },
}

/// One-shot, permission-gated gate in front of a native session.
///
/// One launcher exists per session-host lifecycle. All calls arrive on
/// the host's main thread; the grant callback is delivered
/// asynchronously on that same thread, never from inside
/// [`PermissionHost::request_batch`].
#[derive(Debug)]
pub struct Launcher {
    config: LaunchConfiguration,
    phase: LauncherPhase,
    pending: Option<RequestId>,
    next_request: u32,
}

impl Launcher {
    pub fn new(config: LaunchConfiguration) -> Self {
        Self {
            config,
            phase: LauncherPhase::Created,
            pending: None,
            next_request: 1,
        }
    }

    pub fn phase(&self) -> LauncherPhase {
        self.phase
    }

    pub fn config(&self) -> &LaunchConfiguration {
        &self.config
    }

    /// Runs the one-time permission gate.
    ///
    /// Evaluates which required capabilities are missing. With none
    /// missing, no dialog is shown and the session starts immediately in
    /// full mode. Otherwise exactly one batched request is issued for
    /// all missing capabilities; whether the session also starts right
    /// away follows the configured [`StartPolicy`].
    pub fn bootstrap<H, S>(&mut self, host: &mut H, session: &mut S) -> Result<BootstrapOutcome>
    where
        H: PermissionHost,
        S: NativeSession,
    {
        match self.phase {
            LauncherPhase::Created => {}
            LauncherPhase::TornDown => return Err(LaunchError::TornDown),
            _ => return Err(LaunchError::AlreadyBootstrapped),
        }
        self.phase = LauncherPhase::CheckingPermissions;

        let missing =
            missing_capabilities(&self.config.required, |cap| host.check_granted(cap));
        if missing.is_empty() {
            debug!("all required capabilities already granted");
            self.phase = LauncherPhase::Granted;
            self.start_session(session, SessionMode::Full);
            return Ok(BootstrapOutcome::Started);
        }

        let request_id = RequestId(self.next_request);
        self.next_request += 1;
        debug!(
            request_id = request_id.0,
            missing = missing.len(),
            "requesting missing capabilities"
        );
        host.request_batch(&missing, request_id);
        self.pending = Some(request_id);

        match self.config.start_policy {
            StartPolicy::AwaitGrants => {
                self.phase = LauncherPhase::AwaitingGrant;
                Ok(BootstrapOutcome::AwaitingGrant {
                    request_id,
                    requested: missing,
                })
            }
            StartPolicy::Immediate => {
                self.start_session(
                    session,
                    SessionMode::Speculative {
                        pending: missing.clone(),
                    },
                );
                Ok(BootstrapOutcome::StartedSpeculatively {
                    request_id,
                    requested: missing,
                })
            }
        }
    }

    /// Consumes the grant callback for a previously issued request.
    ///
    /// Returns `None` for stale callbacks: a callback after
    /// [`Launcher::teardown`], one carrying an unknown request id, or a
    /// second delivery for an already-consumed request. Stale callbacks
    /// leave all state untouched.
    ///
    /// A live callback is consumed exactly once and resolves to an
    /// [`Action`]. When startup was deferred, a `StartSession` action
    /// also invokes the native entry point; when startup was
    /// speculative the session is already running and the action only
    /// tells the embedder (and through it the native layer) the final
    /// grant outcome.
    pub fn on_grant_result<S>(
        &mut self,
        request_id: RequestId,
        result: &GrantResult,
        session: &mut S,
    ) -> Option<Action>
    where
        S: NativeSession,
    {
        if self.phase == LauncherPhase::TornDown {
            debug!(request_id = request_id.0, "grant callback after teardown, discarding");
            return None;
        }
        match self.pending {
            Some(pending) if pending == request_id => {}
            _ => {
                debug!(request_id = request_id.0, "stale grant callback, discarding");
                return None;
            }
        }
        self.pending = None;

        let denied = result.denied();
        let action = if denied.is_empty() {
            info!("all requested capabilities granted");
            Action::StartSession(SessionMode::Full)
        } else {
            warn!(denied = denied.len(), "capabilities denied by user or policy");
            match self.config.denial_policy {
                DenialPolicy::StartDegraded => {
                    Action::StartSession(SessionMode::Degraded { denied })
                }
                DenialPolicy::Defer => Action::RetryOrAbort { denied },
            }
        };

        if self.phase == LauncherPhase::AwaitingGrant {
            match &action {
                Action::StartSession(mode) => {
                    self.phase = LauncherPhase::Granted;
                    self.start_session(session, mode.clone());
                }
                Action::RetryOrAbort { .. } => {
                    // The embedder owns the re-prompt decision; going
                    // back to Created lets it run another pass if it
                    // chooses to.
                    self.phase = LauncherPhase::Created;
                }
            }
        }

        Some(action)
    }

    /// Marks the launcher torn down, e.g. because the hosting activity
    /// was destroyed before the grant callback fired. Any later
    /// callback becomes a no-op.
    pub fn teardown(&mut self) {
        debug!("launcher torn down");
        self.phase = LauncherPhase::TornDown;
        self.pending = None;
    }

    fn start_session<S: NativeSession>(&mut self, session: &mut S, mode: SessionMode) {
        info!(mode = ?mode, "starting native session");
        session.start(SessionStart::new(mode));
        self.phase = LauncherPhase::SessionStarted;
    }
}
