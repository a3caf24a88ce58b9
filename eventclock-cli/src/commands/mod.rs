pub mod list;
pub mod session;
pub mod show;
pub mod watch;
