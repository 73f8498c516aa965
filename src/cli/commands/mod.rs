//! Command implementations for the Datamill CLI

pub mod demo;
