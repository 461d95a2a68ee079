//! core
//!
//! Core domain types for flatdoc.
//!
//! # Modules
//!
//! - [`entity`] - Documentation entities and their member tables
//! - [`chain`] - The non-empty context chain of enclosing entities
//! - [`reference`] - Reference paths written inside include directives
//! - [`directive`] - Recognition of `!INCLUDE` lines
//! - [`docstring`] - Fragment normalization
//! - [`manifest`] - Stored form of a module
//! - [`naming`] - Qualified-name helpers
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Fragment bodies are opaque text except for directive lines
//! - Invalid states (an empty chain, a trailing-dot path) are unrepresentable

pub mod chain;
pub mod config;
pub mod directive;
pub mod docstring;
pub mod entity;
pub mod manifest;
pub mod naming;
pub mod reference;
