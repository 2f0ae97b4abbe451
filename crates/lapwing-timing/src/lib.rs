//! Loop timing helpers for lapwing.
//!
//! This crate provides the timing side of the lapwing toolkit:
//!
//! - [`LoopTimer`] - records a start instant against an injectable clock
//! - [`ElapsedReport`] - whole-second elapsed time with a printable message
//! - [`FinishEstimate`] - linear-extrapolation projection of completion time

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lapwing-rs/lapwing/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod elapsed;
mod estimate;
mod timer;

pub use elapsed::ElapsedReport;
pub use estimate::{EstimateError, FinishEstimate};
pub use timer::LoopTimer;
