//! Content-Defined Chunking (CDC) core.
//!
//! This module contains the boundary search that decides where chunks end
//! based on content rather than fixed offsets.
//!
//! - [`FastCdc`] - Two-phase masked gear-hash cut-point finder
//! - `gear` - The 256-entry gear table

mod fastcdc;
mod gear;

pub(crate) use fastcdc::FastCdc;
