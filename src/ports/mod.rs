// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing the trait definitions for remote lookups.
//!
//! This module contains the interfaces that decouple the resolver from the
//! AWS SDK. The adapters layer provides concrete implementations for each
//! supported scope.

pub mod describer;

pub use describer::ResourceDescriber;
