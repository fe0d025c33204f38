//! Bootstrap use cases

mod sequencer;

pub use sequencer::{BootstrapConfig, BootstrapHandle, BootstrapOutcome, BootstrapSequencer};
