//! Session use cases

mod resolve_session;

pub use resolve_session::ResolveSessionState;

use async_trait::async_trait;
use ks_core::session::SessionFlags;

/// Source of session flags for the bootstrap sequencer.
///
/// An `Err` here is unexpected; the sequencer continues with
/// [`SessionFlags::default`].
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self) -> anyhow::Result<SessionFlags>;
}
