//! Bootstrap sequencer.
//!
//! This module drives the bootstrap state machine: it runs the splash timer
//! and the session read concurrently and hands exactly one reset to the
//! router.

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, error, info, info_span, warn, Instrument};

use ks_core::bootstrap::{
    BootstrapAction, BootstrapEvent, BootstrapPhase, BootstrapStateMachine,
    DEFAULT_SPLASH_DURATION,
};
use ks_core::navigation::RouteTransition;
use ks_core::ports::{NavigationError, NavigatorPort};

use crate::usecases::session::SessionResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Minimum time the splash stays up; never extends past the session read.
    pub splash_duration: Duration,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            splash_duration: DEFAULT_SPLASH_DURATION,
        }
    }
}

/// How a bootstrap run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The router accepted the landing transition.
    Navigated(RouteTransition),
    /// Torn down before dispatch; the router was never called.
    Cancelled,
    /// A run had already started on this sequencer; nothing was done.
    AlreadyStarted,
}

/// Orchestrator that drives bootstrap state and side effects.
pub struct BootstrapSequencer {
    resolver: Arc<dyn SessionResolver>,
    navigator: Arc<dyn NavigatorPort>,
    config: BootstrapConfig,
    started: AtomicBool,
    navigated: AtomicBool,
    phase: watch::Sender<BootstrapPhase>,
}

impl BootstrapSequencer {
    pub fn new(
        resolver: Arc<dyn SessionResolver>,
        navigator: Arc<dyn NavigatorPort>,
        config: BootstrapConfig,
    ) -> Self {
        let (phase, _) = watch::channel(BootstrapPhase::Idle);
        Self {
            resolver,
            navigator,
            config,
            started: AtomicBool::new(false),
            navigated: AtomicBool::new(false),
            phase,
        }
    }

    /// Observe phase changes.
    pub fn subscribe(&self) -> watch::Receiver<BootstrapPhase> {
        self.phase.subscribe()
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase.borrow().clone()
    }

    /// Run on the current runtime, tied to the returned handle's lifetime.
    pub fn spawn(self: Arc<Self>) -> BootstrapHandle {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let task = tokio::spawn(async move { self.run(token).await });
        BootstrapHandle {
            cancel: cancel.clone(),
            _guard: cancel.drop_guard(),
            task,
        }
    }

    /// Drive one bootstrap to completion or cancellation.
    ///
    /// Only the first call on a sequencer does anything; later calls return
    /// [`BootstrapOutcome::AlreadyStarted`].
    pub async fn run(
        &self,
        cancel: CancellationToken,
    ) -> Result<BootstrapOutcome, NavigationError> {
        let span = info_span!(
            "usecase.bootstrap.run",
            splash_ms = self.config.splash_duration.as_millis() as u64
        );
        self.run_inner(cancel).instrument(span).await
    }

    async fn run_inner(
        &self,
        cancel: CancellationToken,
    ) -> Result<BootstrapOutcome, NavigationError> {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!(
                error = %NavigationError::Conflict("bootstrap already started".into()),
                "ignoring re-entrant bootstrap"
            );
            return Ok(BootstrapOutcome::AlreadyStarted);
        }

        let mut splash = self.config.splash_duration;
        for action in self.apply(BootstrapEvent::Mount) {
            if let BootstrapAction::StartTimer(duration) = action {
                splash = duration;
            }
        }

        let timer = tokio::time::sleep(splash);
        let resolve = AssertUnwindSafe(self.resolver.resolve()).catch_unwind();
        tokio::pin!(timer);
        tokio::pin!(resolve);
        let mut timer_done = false;
        let mut resolve_done = false;

        loop {
            let event = tokio::select! {
                biased;
                _ = cancel.cancelled() => BootstrapEvent::Unmount,
                _ = &mut timer, if !timer_done => {
                    timer_done = true;
                    debug!("splash timer elapsed");
                    BootstrapEvent::TimerElapsed
                }
                result = &mut resolve, if !resolve_done => {
                    resolve_done = true;
                    match result {
                        Ok(Ok(flags)) => BootstrapEvent::FlagsResolved(flags),
                        Ok(Err(err)) => {
                            warn!(error = %err, "session resolve failed, using fail-safe flags");
                            BootstrapEvent::ResolveFailed
                        }
                        Err(_) => {
                            error!("session resolver panicked, using fail-safe flags");
                            BootstrapEvent::ResolveFailed
                        }
                    }
                }
            };

            for action in self.apply(event) {
                if let BootstrapAction::Dispatch(transition) = action {
                    return self.dispatch(transition, &cancel).await;
                }
            }

            if self.phase() == BootstrapPhase::Cancelled {
                info!("bootstrap torn down before navigation");
                return Ok(BootstrapOutcome::Cancelled);
            }
        }
    }

    async fn dispatch(
        &self,
        transition: RouteTransition,
        cancel: &CancellationToken,
    ) -> Result<BootstrapOutcome, NavigationError> {
        if cancel.is_cancelled() {
            info!(target_route = %transition.target, "dropping landing transition after teardown");
            self.phase.send_replace(BootstrapPhase::Cancelled);
            return Ok(BootstrapOutcome::Cancelled);
        }

        if self.navigated.swap(true, Ordering::SeqCst) {
            let conflict = NavigationError::Conflict(format!(
                "landing transition to {} after navigation",
                transition.target
            ));
            warn!(error = %conflict, "dropping duplicate landing transition");
            return Ok(BootstrapOutcome::AlreadyStarted);
        }

        self.navigator.dispatch(transition.clone()).await?;
        self.apply(BootstrapEvent::Dispatched);
        info!(target_route = %transition.target, "bootstrap navigated");
        Ok(BootstrapOutcome::Navigated(transition))
    }

    fn apply(&self, event: BootstrapEvent) -> Vec<BootstrapAction> {
        let mut actions = Vec::new();
        let splash = self.config.splash_duration;
        self.phase.send_if_modified(|phase| {
            let (next, produced) =
                BootstrapStateMachine::transition(phase.clone(), event, splash);
            actions = produced;
            if *phase == next {
                return false;
            }
            debug!(from = ?phase, to = ?next, "bootstrap phase changed");
            *phase = next;
            true
        });
        actions
    }
}

/// Lifetime handle of a spawned bootstrap.
///
/// Dropping the handle tears the bootstrap down.
pub struct BootstrapHandle {
    cancel: CancellationToken,
    _guard: DropGuard,
    task: JoinHandle<Result<BootstrapOutcome, NavigationError>>,
}

impl BootstrapHandle {
    /// Tear down the owning view. No navigation happens afterwards.
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn join(self) -> anyhow::Result<BootstrapOutcome> {
        Ok(self.task.await??)
    }
}
