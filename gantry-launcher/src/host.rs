use gantry_capability::Capability;
use gantry_capability::RequestId;

/// Host permission API.
///
/// On Android this maps onto `checkSelfPermission` and
/// `requestPermissions`. The launcher is composed into the host's
/// session object and drives the host through this seam rather than
/// subclassing anything.
pub trait PermissionHost {
    /// Current grant state for one capability.
    fn check_granted(&self, capability: &Capability) -> bool;

    /// Issues exactly one batched asynchronous request for all listed
    /// capabilities. Must return without delivering results
    /// synchronously; the host delivers them later through
    /// [`crate::Launcher::on_grant_result`] with the same `request_id`.
    fn request_batch(&mut self, capabilities: &[Capability], request_id: RequestId);
}
