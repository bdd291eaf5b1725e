pub mod controller;
pub mod state;

pub use controller::{SwitchOutcome, Toolbar};
pub use state::{Action, AlgoStatus, Dialog, StatusBadge, Toast, ToastIntent, ToolbarState};
