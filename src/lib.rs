//! Connector endpoint picker.
//!
//! This crate provides the search and selection logic used to attach a
//! network endpoint to a diagram lifeline: building suggestion lists from a
//! package catalog and turning a selection into document effects.
//!
//! The binary `endpointlink` exposes both steps on the command line.

pub mod catalog;
pub mod editor;
pub mod model;
