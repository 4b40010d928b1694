//! # nest-core
//!
//! Core types, ID prefixes, and error types for Tasknest.
//!
//! This crate provides the foundational types shared across all Tasknest crates:
//! - Entity structs for the domain objects (tasks, subtasks, profiles)
//! - Priority and status enums with their wire representations
//! - ID prefix constants
//! - Cross-cutting error types
//! - Authenticated-identity type passed into every manager operation
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod responses;
