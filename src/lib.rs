//! Attendance-to-Payroll Reconciliation Engine
//!
//! This crate partitions every calendar day of a pay period into exactly one
//! day category (present, half day, paid leave, compensated absence, bonus
//! day, out of contract, or unpaid absence) according to an employee group
//! policy, and converts the resulting tallies into monetary pay lines.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reconcile;
