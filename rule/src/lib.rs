// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule model, parsing, and validation (RFC 5545 Section 3.3.10).
//!
//! A rule starts life as a raw [`RuleParts`] record, either built
//! programmatically or parsed from the textual `KEY=VALUE;KEY=VALUE` form.
//! Validation turns it into an immutable [`Rule`] with every BY set
//! range-checked, canonicalized, and the DTSTART-derived defaults applied.
//! The expansion engine lives in the companion `cadence-core` crate.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::similar_names,
    clippy::single_match_else
)]

pub mod keyword;

mod error;
mod frequency;
mod parser;
mod parts;
mod rule;
mod weekday;

pub use crate::error::ValidationError;
pub use crate::frequency::Frequency;
pub use crate::parts::{PartValue, RuleParts};
pub use crate::rule::Rule;
pub use crate::weekday::{NthWeekday, weekday_token};

pub use jiff::civil::Weekday;
