//! core::directive
//!
//! Recognition of `!INCLUDE` lines.
//!
//! A directive is a line that, after trailing whitespace is trimmed, starts
//! with `!INCLUDE` followed by exactly one space. Everything after that space
//! is the argument: a comma-separated list of reference paths.

/// Keyword plus its mandatory space.
const INCLUDE_PREFIX: &str = "!INCLUDE ";

/// An include directive borrowed from a fragment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    argument: &'a str,
}

impl<'a> Directive<'a> {
    /// Recognize a directive.
    ///
    /// `line` must already have its trailing whitespace trimmed.
    ///
    /// # Example
    ///
    /// ```
    /// use flatdoc::core::directive::Directive;
    ///
    /// let directive = Directive::parse("!INCLUDE Bar, func").unwrap();
    /// assert_eq!(directive.references().collect::<Vec<_>>(), vec!["Bar", "func"]);
    ///
    /// assert!(Directive::parse("!INCLUDED x").is_none());
    /// assert!(Directive::parse("  !INCLUDE x").is_none());
    /// ```
    pub fn parse(line: &'a str) -> Option<Self> {
        line.strip_prefix(INCLUDE_PREFIX)
            .map(|argument| Self { argument })
    }

    /// Raw argument text after the keyword and its space.
    pub fn argument(&self) -> &'a str {
        self.argument
    }

    /// Whether the argument ends in a dot.
    pub fn is_dangling(&self) -> bool {
        self.argument.ends_with('.')
    }

    /// Comma-separated references, each trimmed, in order.
    pub fn references(&self) -> impl Iterator<Item = &'a str> {
        self.argument.split(',').map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_single_reference() {
        let directive = Directive::parse("!INCLUDE main").unwrap();
        assert_eq!(directive.argument(), "main");
        assert_eq!(directive.references().collect::<Vec<_>>(), vec!["main"]);
    }

    #[test]
    fn trims_each_reference() {
        let directive = Directive::parse("!INCLUDE  a ,b,   .c").unwrap();
        assert_eq!(
            directive.references().collect::<Vec<_>>(),
            vec!["a", "b", ".c"]
        );
    }

    #[test]
    fn keeps_empty_items() {
        let directive = Directive::parse("!INCLUDE a, , b").unwrap();
        assert_eq!(directive.references().collect::<Vec<_>>(), vec!["a", "", "b"]);
    }

    #[test]
    fn requires_keyword_and_space() {
        assert!(Directive::parse("!INCLUDE").is_none());
        assert!(Directive::parse("!include x").is_none());
        assert!(Directive::parse("!INCLUDEx").is_none());
        assert!(Directive::parse("text !INCLUDE x").is_none());
    }

    #[test]
    fn dangling_detection() {
        assert!(Directive::parse("!INCLUDE Foo.").unwrap().is_dangling());
        assert!(Directive::parse("!INCLUDE a, b.").unwrap().is_dangling());
        assert!(!Directive::parse("!INCLUDE a., b").unwrap().is_dangling());
        assert!(!Directive::parse("!INCLUDE .a").unwrap().is_dangling());
    }
}
