//! Onboarding use cases

mod complete;

pub use complete::CompleteOnboarding;
