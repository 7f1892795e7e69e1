#![deny(missing_debug_implementations)]

//! # rpb-entities
//!
//! Reusable, agnostic domain entities for Repboard.
//!
//! The entities only contain generic functionality that does not reveal
//! any application-specific business logic.

pub mod comment;
pub mod rating;
pub mod time;
pub mod user;
