//! Vigil Core
//!
//! Core types for the Vigil run watcher.
//!
//! This crate contains the domain types shared by the client and the CLI:
//! runs, jobs, steps, and the annotations a job produces. Every type is an
//! immutable value snapshot; the watcher refetches them whole on each poll
//! cycle and never mutates them in place.

pub mod domain;
