// rut/src/lib.rs
//! # rut CLI Application
//!
//! This crate provides the command-line interface over `rut-core`: per-value
//! cleaning, formatting, validation and reporting, plus scanning of free text.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
