pub mod algorithm_client;
pub mod notifier;

pub use algorithm_client::{AlgorithmBackend, AlgorithmClient, SwitchResponse};
pub use notifier::{Notifier, TerminalNotifier};
