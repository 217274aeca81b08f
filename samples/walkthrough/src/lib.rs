//! # Walkthrough Sample Application
//!
//! A guided tour of fp-abstractions, one small demo per idiom.
//!
//! ## Overview
//!
//! Every demo is a pure function that returns the lines it wants to show,
//! paired with a thin wrapper that hands those lines to an injected console
//! sink. Nothing in the library touches stdout or the network directly, so
//! every demo is testable with plain values.
//!
//! ## Module Structure
//!
//! - `demos`: the individual demos (pure functions, immutability, `Optional`,
//!   `Either` railways, lazy `Sequence` pipelines)
//! - `config`: command line and environment configuration
//! - `runner`: dispatch from a selected [`config::Demo`] to its demo

#![forbid(unsafe_code)]

pub mod config;
pub mod demos;
pub mod runner;
