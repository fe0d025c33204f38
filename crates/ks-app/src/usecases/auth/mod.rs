//! Auth use cases
//!
//! Screen-level sign-in and sign-out handlers. Both end by handing the
//! router a transition over the same typed routes the bootstrap uses.

mod login;
mod logout;

pub use login::{LoginError, LoginUser, DEFAULT_LOGIN_LATENCY};
pub use logout::LogoutUser;
