//! CTC to take-home salary engine for Indian payroll
//!
//! This crate breaks an annual cost-to-company figure into a monthly salary
//! structure: employer statutory charges (PF, EDLI, ESI), gross salary, the
//! Basic+DA / HRA / special allowance split, employee deductions (PF, ESI,
//! professional tax) and net in-hand pay, all in whole rupees.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
