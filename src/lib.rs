//! # Introduction
//!
//! sortviz animates bubble, insertion, merge and quick sort on an array of
//! random integers drawn as vertical bars in the terminal, using
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Animation pipeline
//!
//! ```text
//! Keyboard → App → Session → SortRoutine::step → Checkpoint → Frame
//! ```
//!
//! 1. [`sort`] — the four algorithms as resumable state machines that stop at
//!    checkpoints after selected mutations.
//! 2. [`session`] — selected algorithm, direction, tick rate and the single
//!    running routine; honours each checkpoint's delay.
//! 3. [`canvas`] — the array plus the bar geometry derived from its bounds.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! Everything runs on one thread. A routine only runs inside
//! [`session::Session::advance`], so cancelling is dropping it.

pub mod array;
pub mod canvas;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod sort;
pub mod ui;
