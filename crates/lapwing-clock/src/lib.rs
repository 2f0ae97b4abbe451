//! Time source abstraction for lapwing.
//!
//! This crate provides the pieces every time-dependent lapwing helper is
//! built on:
//!
//! - [`Clock`] - injectable source of "now"
//! - [`SystemClock`] - the default wall-clock source
//! - [`FixedClock`] - a pinned clock for reproducible output
//! - [`StampStyle`] - date/datetime stamp rendering

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lapwing-rs/lapwing/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod clock;
mod stamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use stamp::{StampParseError, StampStyle, now_stamp, stamp_with};
