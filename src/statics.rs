use std::sync::OnceLock;

use regex::Regex;
use scraper::Selector;

/// A hardcoded css selector or regex that is compiled on first use.
#[derive(Debug)]
pub struct StaticPattern<T> {
    cell: OnceLock<T>,
    source: &'static str,
    compile: fn(&'static str) -> T,
}

impl<T> StaticPattern<T> {
    pub const fn new(source: &'static str, compile: fn(&'static str) -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
            compile,
        }
    }
}

impl<T> core::ops::Deref for StaticPattern<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.cell.get_or_init(|| (self.compile)(self.source))
    }
}

// patterns are literals in this crate, so a failure here is a programming error
pub fn selector(source: &'static str) -> Selector {
    match Selector::parse(source) {
        Ok(sel) => sel,
        Err(e) => panic!("Error parsing static selector {source}: {e:?}"),
    }
}

pub fn regex(source: &'static str) -> Regex {
    match Regex::new(source) {
        Ok(re) => re,
        Err(e) => panic!("Error compiling static regex {source}: {e}"),
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::statics::StaticPattern<scraper::Selector> =
            $crate::statics::StaticPattern::new($sel, $crate::statics::selector);
    };
}

#[macro_export]
macro_rules! static_regex {
    ($x: ident <- $re: literal) => {
        static $x: $crate::statics::StaticPattern<regex::Regex> =
            $crate::statics::StaticPattern::new($re, $crate::statics::regex);
    };
}
