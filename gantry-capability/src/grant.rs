use serde::Deserialize;
use serde::Serialize;

use crate::capability::Capability;

/// Opaque handle correlating a batched permission request with its
/// asynchronous result callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u32);

/// Grant outcome for a single capability within a batched request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityGrant {
    pub capability: Capability,
    pub granted: bool,
}

/// Grant outcome for one batched request.
///
/// Produced once by the host after the user interacts with the
/// permission prompt, consumed once by the launcher, then discarded.
/// Entries keep the order the host reported them in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrantResult {
    grants: Vec<CapabilityGrant>,
}

impl GrantResult {
    pub fn new(grants: Vec<CapabilityGrant>) -> Self {
        Self { grants }
    }

    /// Builds a result from the parallel arrays hosts typically deliver
    /// (capability names alongside grant flags). Extra entries on either
    /// side are dropped.
    pub fn from_parallel(capabilities: &[Capability], granted: &[bool]) -> Self {
        let grants = capabilities
            .iter()
            .zip(granted.iter())
            .map(|(capability, granted)| CapabilityGrant {
                capability: capability.clone(),
                granted: *granted,
            })
            .collect();
        Self { grants }
    }

    /// Grant state for one capability. Absent capabilities count as
    /// denied.
    pub fn granted(&self, capability: &Capability) -> bool {
        self.grants
            .iter()
            .any(|g| g.granted && g.capability == *capability)
    }

    pub fn all_granted(&self) -> bool {
        self.grants.iter().all(|g| g.granted)
    }

    /// Denied capabilities in reported order.
    pub fn denied(&self) -> Vec<Capability> {
        self.grants
            .iter()
            .filter(|g| !g.granted)
            .map(|g| g.capability.clone())
            .collect()
    }

    pub fn grants(&self) -> &[CapabilityGrant] {
        &self.grants
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parallel_zips() {
        let caps = vec![Capability::face_tracking(), Capability::microphone()];
        let result = GrantResult::from_parallel(&caps, &[true, false]);
        assert_eq!(result.len(), 2);
        assert!(result.granted(&Capability::face_tracking()));
        assert!(!result.granted(&Capability::microphone()));
    }

    #[test]
    fn test_from_parallel_drops_unmatched_tail() {
        let caps = vec![Capability::scene_access()];
        let result = GrantResult::from_parallel(&caps, &[true, false, true]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_absent_capability_counts_as_denied() {
        let result = GrantResult::from_parallel(&[Capability::microphone()], &[true]);
        assert!(!result.granted(&Capability::eye_tracking()));
    }

    #[test]
    fn test_all_granted_and_denied() {
        let caps = vec![
            Capability::eye_tracking(),
            Capability::face_tracking(),
            Capability::microphone(),
        ];
        let result = GrantResult::from_parallel(&caps, &[true, false, false]);
        assert!(!result.all_granted());
        assert_eq!(
            result.denied(),
            vec![Capability::face_tracking(), Capability::microphone()]
        );

        let result = GrantResult::from_parallel(&caps, &[true, true, true]);
        assert!(result.all_granted());
        assert!(result.denied().is_empty());
    }

    #[test]
    fn test_empty_result_is_all_granted() {
        // Vacuous truth; callers never consult an empty result in
        // practice because no request is issued when nothing is missing.
        assert!(GrantResult::default().all_granted());
    }
}
