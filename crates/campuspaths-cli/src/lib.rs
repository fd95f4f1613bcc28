//! Campus paths CLI library.
//!
//! Text rendering shared by the `campuspaths` binary, kept here so it can be
//! unit tested without spawning the process.

pub mod output;
