//! core::reference
//!
//! Reference paths as written inside an include directive.
//!
//! A path is split on `.` exactly as written. Every empty segment steps one
//! level up the context chain, so `.Bar` is `[Up, Bar]`, `..mod` is
//! `[Up, Up, mod]` and the empty reference is a single `Up`. A path that ends
//! in a dot is always rejected.

use std::fmt;

use thiserror::Error;

/// Errors from parsing a reference path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("include '{0}' cannot end in a period")]
    TrailingDot(String),
}

/// One step of a reference path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Step one level up the context chain.
    Up,
    /// Descend into the named member.
    Name(String),
}

/// A parsed reference path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePath {
    text: String,
    segments: Vec<Segment>,
}

impl ReferencePath {
    /// Parse one comma-separated item of a directive.
    ///
    /// # Example
    ///
    /// ```
    /// use flatdoc::core::reference::{ReferencePath, Segment};
    ///
    /// let path = ReferencePath::parse(".Bar.baz").unwrap();
    /// assert_eq!(
    ///     path.segments(),
    ///     &[Segment::Up, Segment::Name("Bar".into()), Segment::Name("baz".into())]
    /// );
    ///
    /// assert!(ReferencePath::parse("Bar.").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::TrailingDot` if `text` ends with `.`.
    pub fn parse(text: &str) -> Result<Self, ReferenceError> {
        if text.ends_with('.') {
            return Err(ReferenceError::TrailingDot(text.to_string()));
        }

        let segments = text
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Segment::Up
                } else {
                    Segment::Name(segment.to_string())
                }
            })
            .collect();

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    /// The reference exactly as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for ReferencePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
