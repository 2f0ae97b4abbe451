//! Tabular datasets and multi-sheet XLSX export for lapwing.
//!
//! This crate provides the spreadsheet side of the lapwing toolkit:
//!
//! - [`CellValue`] - a single typed cell
//! - [`Table`] - a rectangular dataset with named columns
//! - [`Book`] - an ordered mapping of worksheet name to table
//! - [`write_sheets`] - one workbook file, one worksheet per book entry

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/lapwing-rs/lapwing/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod book;
mod cell;
mod error;
mod json;
mod table;
mod xlsx;

pub use book::Book;
pub use cell::CellValue;
pub use error::{Result, SheetError};
pub use table::Table;
pub use xlsx::{XLSX_EXTENSION, write_sheets};
