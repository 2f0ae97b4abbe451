//! Helper routines for ad-hoc data-processing scripts.
//!
//! This is a facade crate that re-exports functionality from the lapwing
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use lapwing_lib::prelude::*;
//!
//! # fn process(_i: u64) {}
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! println!("run started {}", now_stamp(StampStyle::DateTime));
//!
//! let timer = LoopTimer::start();
//! for i in 1..=50 {
//!     process(i);
//!     timer.estimate_finish(50, i)?.announce();
//! }
//! println!("{}", timer.elapsed());
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lapwing-rs/lapwing/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export the clock abstraction
pub use lapwing_clock::*;

// Re-export loop timing
#[cfg(feature = "timing")]
pub use lapwing_timing::{ElapsedReport, EstimateError, FinishEstimate, LoopTimer};

// Re-export tabular datasets and XLSX export
#[cfg(feature = "sheet")]
pub use lapwing_sheet::{Book, CellValue, SheetError, Table, XLSX_EXTENSION, write_sheets};

/// Prelude module for convenient imports.
///
/// ```
/// use lapwing_lib::prelude::*;
/// ```
pub mod prelude {
    pub use lapwing_clock::{Clock, FixedClock, StampStyle, SystemClock, now_stamp, stamp_with};

    #[cfg(feature = "timing")]
    pub use lapwing_timing::{ElapsedReport, FinishEstimate, LoopTimer};

    #[cfg(feature = "sheet")]
    pub use lapwing_sheet::{Book, CellValue, Table, write_sheets};
}
