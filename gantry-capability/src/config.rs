use serde::Deserialize;
use serde::Serialize;

use crate::capability::Capability;

/// Whether native startup waits for grant resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// Start the native session right away, even while a permission
    /// request is still pending. The native layer polls grant state
    /// itself.
    Immediate,
    /// Defer native startup until the grant callback resolves.
    AwaitGrants,
}

impl Default for StartPolicy {
    fn default() -> Self {
        Self::AwaitGrants
    }
}

/// What to do when at least one required capability is denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialPolicy {
    /// Start the session anyway, with the denied capabilities surfaced
    /// to the native layer so the affected features run degraded.
    StartDegraded,
    /// Do not start; hand the denial back to the embedding application
    /// to decide between re-prompting and aborting.
    Defer,
}

impl Default for DenialPolicy {
    fn default() -> Self {
        Self::StartDegraded
    }
}

/// Ordered capability requirements for one session type.
///
/// Constructed once at session-host creation and not mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchConfiguration {
    pub required: Vec<Capability>,
    pub start_policy: StartPolicy,
    pub denial_policy: DenialPolicy,
}

impl LaunchConfiguration {
    pub fn new(required: Vec<Capability>) -> Self {
        Self {
            required,
            start_policy: StartPolicy::default(),
            denial_policy: DenialPolicy::default(),
        }
    }

    pub fn with_start_policy(mut self, policy: StartPolicy) -> Self {
        self.start_policy = policy;
        self
    }

    pub fn with_denial_policy(mut self, policy: DenialPolicy) -> Self {
        self.denial_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_await_grants_and_degrade() {
        let config = LaunchConfiguration::new(vec![Capability::scene_access()]);
        assert_eq!(config.start_policy, StartPolicy::AwaitGrants);
        assert_eq!(config.denial_policy, DenialPolicy::StartDegraded);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LaunchConfiguration::new(vec![])
            .with_start_policy(StartPolicy::Immediate)
            .with_denial_policy(DenialPolicy::Defer);
        assert_eq!(config.start_policy, StartPolicy::Immediate);
        assert_eq!(config.denial_policy, DenialPolicy::Defer);
    }

    #[test]
    fn test_policy_serialization() {
        let json = serde_json::to_string(&StartPolicy::AwaitGrants).unwrap();
        assert_eq!(json, "\"await_grants\"");

        let parsed: DenialPolicy = serde_json::from_str("\"start_degraded\"").unwrap();
        assert_eq!(parsed, DenialPolicy::StartDegraded);
    }
}
