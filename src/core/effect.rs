//! Maps the active tab to the effect its action button triggers

use crate::app::Tab;

/// What should happen when a tab's action is triggered.
///
/// The dispatcher only names the effect; the event loop decides how to
/// fulfil it. Until the real sales, maintenance and camera collaborators
/// exist, fulfilment opens a placeholder notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Open the sales entry form
    OpenSalesForm,
    /// Open the maintenance dashboard
    OpenMaintenanceDashboard,
    /// Open the surveillance camera stream viewer
    OpenCameraStream,
}

/// Resolve the primary action of a tab. Total over the tab set.
pub fn dispatch(tab: Tab) -> Effect {
    match tab {
        Tab::Vente => Effect::OpenSalesForm,
        Tab::Maintenance => Effect::OpenMaintenanceDashboard,
        Tab::Camera => Effect::OpenCameraStream,
    }
}
