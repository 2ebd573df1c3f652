// wordguard/src/lib.rs
//! # WordGuard CLI
//!
//! This crate provides the command-line interface for the WordGuard
//! sensitive-word engine: `check`, `scan`, and `redact` over deny/allow word
//! lists loaded from plain text files.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod wordlists;
