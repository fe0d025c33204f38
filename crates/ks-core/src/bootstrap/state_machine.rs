//! Bootstrap state machine.
//!
//! Defines a pure state transition function for the splash-to-landing flow.

use std::time::Duration;

use serde::Serialize;

use crate::navigation::RouteTransition;
use crate::session::{initial_route, SessionFlags};

/// Default minimum time the splash screen stays visible.
pub const DEFAULT_SPLASH_DURATION: Duration = Duration::from_millis(2000);

/// Bootstrap flow phase.
///
/// 启动流程阶段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BootstrapPhase {
    /// Not mounted yet.
    Idle,
    /// Timer and session read are both in flight; records whichever finished.
    Waiting {
        timer_elapsed: bool,
        flags: Option<SessionFlags>,
    },
    /// Both inputs present, computing the landing route.
    Resolving { flags: SessionFlags },
    /// Exactly one transition has been handed out for dispatch.
    Dispatching { transition: RouteTransition },
    /// Router acknowledged the transition.
    Done,
    /// Torn down before anything was dispatched.
    Cancelled,
}

impl BootstrapPhase {
    /// Whether navigation has been handed out (or can no longer happen).
    pub fn has_navigated(&self) -> bool {
        matches!(
            self,
            BootstrapPhase::Dispatching { .. } | BootstrapPhase::Done
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BootstrapPhase::Done | BootstrapPhase::Cancelled)
    }
}

/// Events that drive the bootstrap flow.
///
/// 驱动启动流程的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapEvent {
    /// Owning view mounted.
    Mount,
    /// Minimum splash duration elapsed.
    TimerElapsed,
    /// Session flags read from storage.
    FlagsResolved(SessionFlags),
    /// Session read failed unexpectedly; fail-safe flags are used.
    ResolveFailed,
    /// Router accepted the transition.
    Dispatched,
    /// Owning view torn down.
    Unmount,
}

/// Side-effects produced by transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    StartTimer(Duration),
    ResolveSession,
    Dispatch(RouteTransition),
}

/// Pure bootstrap state machine: no side-effects.
pub struct BootstrapStateMachine;

impl BootstrapStateMachine {
    pub fn transition(
        state: BootstrapPhase,
        event: BootstrapEvent,
        splash_duration: Duration,
    ) -> (BootstrapPhase, Vec<BootstrapAction>) {
        match (state, event) {
            (BootstrapPhase::Idle, BootstrapEvent::Mount) => (
                BootstrapPhase::Waiting {
                    timer_elapsed: false,
                    flags: None,
                },
                vec![
                    BootstrapAction::StartTimer(splash_duration),
                    BootstrapAction::ResolveSession,
                ],
            ),
            (BootstrapPhase::Waiting { flags, .. }, BootstrapEvent::TimerElapsed) => {
                Self::join(true, flags)
            }
            (
                BootstrapPhase::Waiting { timer_elapsed, .. },
                BootstrapEvent::FlagsResolved(flags),
            ) => Self::join(timer_elapsed, Some(flags)),
            (BootstrapPhase::Waiting { timer_elapsed, .. }, BootstrapEvent::ResolveFailed) => {
                Self::join(timer_elapsed, Some(SessionFlags::default()))
            }
            (BootstrapPhase::Dispatching { .. }, BootstrapEvent::Dispatched) => {
                (BootstrapPhase::Done, Vec::new())
            }
            (BootstrapPhase::Idle | BootstrapPhase::Waiting { .. }, BootstrapEvent::Unmount) => {
                (BootstrapPhase::Cancelled, Vec::new())
            }
            (state, _event) => (state, Vec::new()),
        }
    }

    /// Compute the landing transition from resolved flags.
    pub fn resolve(flags: &SessionFlags) -> (BootstrapPhase, Vec<BootstrapAction>) {
        let transition = RouteTransition::reset(initial_route(flags));
        (
            BootstrapPhase::Dispatching {
                transition: transition.clone(),
            },
            vec![BootstrapAction::Dispatch(transition)],
        )
    }

    /// Leave transient phases that need no outside input.
    fn step(state: BootstrapPhase) -> (BootstrapPhase, Vec<BootstrapAction>) {
        match state {
            BootstrapPhase::Resolving { flags } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?flags, "bootstrap inputs joined, resolving landing route");
                Self::resolve(&flags)
            }
            other => (other, Vec::new()),
        }
    }

    fn join(
        timer_elapsed: bool,
        flags: Option<SessionFlags>,
    ) -> (BootstrapPhase, Vec<BootstrapAction>) {
        match (timer_elapsed, flags) {
            (true, Some(flags)) => Self::step(BootstrapPhase::Resolving { flags }),
            (timer_elapsed, flags) => (
                BootstrapPhase::Waiting {
                    timer_elapsed,
                    flags,
                },
                Vec::new(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Route;

    const SPLASH: Duration = DEFAULT_SPLASH_DURATION;

    fn mounted() -> BootstrapPhase {
        let (state, _) =
            BootstrapStateMachine::transition(BootstrapPhase::Idle, BootstrapEvent::Mount, SPLASH);
        state
    }

    fn returning_user() -> SessionFlags {
        SessionFlags {
            has_seen_onboarding: true,
            auth_token: Some("tok".into()),
        }
    }

    #[test]
    fn mount_starts_timer_and_session_read() {
        let (state, actions) =
            BootstrapStateMachine::transition(BootstrapPhase::Idle, BootstrapEvent::Mount, SPLASH);
        assert_eq!(
            state,
            BootstrapPhase::Waiting {
                timer_elapsed: false,
                flags: None
            }
        );
        assert_eq!(
            actions,
            vec![
                BootstrapAction::StartTimer(SPLASH),
                BootstrapAction::ResolveSession
            ]
        );
    }

    #[test]
    fn timer_first_then_flags_dispatches_once() {
        let (state, actions) =
            BootstrapStateMachine::transition(mounted(), BootstrapEvent::TimerElapsed, SPLASH);
        assert!(actions.is_empty());

        let (state, actions) = BootstrapStateMachine::transition(
            state,
            BootstrapEvent::FlagsResolved(returning_user()),
            SPLASH,
        );
        assert!(state.has_navigated());
        assert_eq!(
            actions,
            vec![BootstrapAction::Dispatch(RouteTransition::reset(
                Route::main()
            ))]
        );
    }

    #[test]
    fn flags_first_then_timer_dispatches_once() {
        let (state, actions) = BootstrapStateMachine::transition(
            mounted(),
            BootstrapEvent::FlagsResolved(returning_user()),
            SPLASH,
        );
        assert!(actions.is_empty());
        assert!(!state.has_navigated());

        let (state, actions) =
            BootstrapStateMachine::transition(state, BootstrapEvent::TimerElapsed, SPLASH);
        assert_eq!(actions.len(), 1);

        // A duplicate completion after dispatch is ignored.
        let (_, actions) =
            BootstrapStateMachine::transition(state, BootstrapEvent::TimerElapsed, SPLASH);
        assert!(actions.is_empty());
    }

    #[test]
    fn resolve_failure_falls_back_to_onboarding() {
        let (state, _) =
            BootstrapStateMachine::transition(mounted(), BootstrapEvent::ResolveFailed, SPLASH);
        let (_, actions) =
            BootstrapStateMachine::transition(state, BootstrapEvent::TimerElapsed, SPLASH);
        assert_eq!(
            actions,
            vec![BootstrapAction::Dispatch(RouteTransition::reset(
                Route::Onboarding
            ))]
        );
    }

    #[test]
    fn remount_while_waiting_is_ignored() {
        let (state, actions) =
            BootstrapStateMachine::transition(mounted(), BootstrapEvent::Mount, SPLASH);
        assert!(actions.is_empty());
        assert!(matches!(state, BootstrapPhase::Waiting { .. }));
    }

    #[test]
    fn unmount_while_waiting_cancels_and_blocks_dispatch() {
        let (state, _) =
            BootstrapStateMachine::transition(mounted(), BootstrapEvent::Unmount, SPLASH);
        assert_eq!(state, BootstrapPhase::Cancelled);

        let (state, actions) = BootstrapStateMachine::transition(
            state,
            BootstrapEvent::FlagsResolved(returning_user()),
            SPLASH,
        );
        assert_eq!(state, BootstrapPhase::Cancelled);
        assert!(actions.is_empty());
    }

    #[test]
    fn dispatched_acknowledgement_completes() {
        let (state, _) = BootstrapStateMachine::resolve(&SessionFlags::default());
        let (state, actions) =
            BootstrapStateMachine::transition(state, BootstrapEvent::Dispatched, SPLASH);
        assert_eq!(state, BootstrapPhase::Done);
        assert!(state.is_terminal());
        assert!(actions.is_empty());
    }
}
