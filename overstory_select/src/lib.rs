// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Select: the capability-strip selection set and its click
//! state machine.
//!
//! The strip renderer hit-tests capability icons; this crate decides what a
//! click on (or outside) them means. The controller is pure data-out: it
//! mutates only its own [`SelectionSet`] and returns a [`StripResponse`]
//! describing the effect the caller should route to the host, so every
//! transition is testable without a host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod set;
mod strip;

pub use set::SelectionSet;
pub use strip::{StripController, StripHit, StripResponse};
