use serde::Deserialize;
use serde::Serialize;

/// Permission string for eye tracking on Meta headsets.
pub const EYE_TRACKING: &str = "com.oculus.permission.EYE_TRACKING";
/// Permission string for face tracking on Meta headsets.
pub const FACE_TRACKING: &str = "com.oculus.permission.FACE_TRACKING";
/// Standard Android microphone permission.
pub const MICROPHONE: &str = "android.permission.RECORD_AUDIO";
/// Permission string for scene/spatial data access on Meta headsets.
pub const SCENE_ACCESS: &str = "com.oculus.permission.USE_SCENE";

/// A single OS-level permission the native session needs.
///
/// Identified by the host permission string. Immutable once constructed;
/// a session declares its requirements statically in a
/// [`crate::LaunchConfiguration`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn eye_tracking() -> Self {
        Self::new(EYE_TRACKING)
    }

    pub fn face_tracking() -> Self {
        Self::new(FACE_TRACKING)
    }

    pub fn microphone() -> Self {
        Self::new(MICROPHONE)
    }

    pub fn scene_access() -> Self {
        Self::new(SCENE_ACCESS)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the subset of `required` for which `is_granted` reports false,
/// preserving the relative order of `required`. Pure; no side effects.
pub fn missing_capabilities<F>(required: &[Capability], is_granted: F) -> Vec<Capability>
where
    F: Fn(&Capability) -> bool,
{
    required
        .iter()
        .filter(|cap| !is_granted(cap))
        .cloned()
        .collect()
}
