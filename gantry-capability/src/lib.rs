pub mod capability;
pub mod config;
pub mod grant;

// Re-export key types for convenience.
pub use capability::{
    missing_capabilities, Capability, EYE_TRACKING, FACE_TRACKING, MICROPHONE, SCENE_ACCESS,
};
pub use config::{DenialPolicy, LaunchConfiguration, StartPolicy};
pub use grant::{CapabilityGrant, GrantResult, RequestId};
