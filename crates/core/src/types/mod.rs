//! Core types for Gatehouse.
//!
//! This module provides type-safe wrappers for the host platform concepts
//! the access gate reads.

pub mod customer;
pub mod groups;
pub mod id;

pub use customer::Customer;
pub use groups::{ActivatedGroups, ParsedGroupList, parse_group_list};
pub use id::*;
