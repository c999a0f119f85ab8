//! Mercury outboard rigging-code parsing.
//!
//! Two entry points cover most uses:
//!
//! - [`parse`] turns a free-form rigging string (`"9.9 EXLPT EFI"`,
//!   `"25 ELHPT"`, `"MLH"`) into [`RigAttributes`]. It never fails: anything
//!   it does not recognize degrades to short shaft, unknown start, remote
//!   control.
//! - [`build_key`] assembles a canonical model key, preferring an
//!   authoritative manufacturer model number from a [`ModelCatalog`].
//!
//! ```
//! use rigcode::{ModelCatalog, build_key, parse};
//!
//! let rig = parse("9.9 EXLPT EFI");
//! assert_eq!(rig.token_strs(), vec!["XL", "E", "PT"]);
//!
//! let catalog = ModelCatalog::builtin().unwrap();
//! let key = build_key(&catalog, Some("FourStroke"), 9.9, true, &rig, None, None);
//! assert_eq!(key, "FOURSTROKE-9.9HP-EFI-XL-E-PT");
//! ```

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod catalog;
mod engine;
mod error;
mod model_key;
mod rig;
mod rules;

pub use api::{
    ChunkSummary, Options, ParseDetails, ParseResultVerbose, detect_family, extract_horsepower, mentions_efi, parse,
    parse_verbose_with, parse_with,
};
pub use catalog::{ModelCatalog, ModelMapping};
pub use error::{CatalogError, Result};
pub use model_key::{KeyRequest, build_key, format_horsepower};
pub use rig::{ControlType, MotorFamily, RigAttributes, RigCode, ShaftCode, StartType};

// --- Rule primitives ---------------------------------------------------------

/// How a rule recognizes its text.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// Literal that must be a prefix of the remaining chunk text. Chunk text
    /// is already uppercased, so literals are written in uppercase.
    Prefix(&'static str),

    /// Regular expression searched anywhere in the normalized input. Stored
    /// as a static reference created through the `regex!` macro.
    Regex(&'static Regex),
}

impl Pattern {
    /// Length of the match when the pattern matches at the very start of `text`.
    pub(crate) fn match_prefix(&self, text: &str) -> Option<usize> {
        match self {
            Pattern::Prefix(lit) => text.starts_with(lit).then_some(lit.len()),
            Pattern::Regex(re) => re.find(text).filter(|m| m.start() == 0 && !m.is_empty()).map(|m| m.end()),
        }
    }

    /// Byte span of the first match anywhere in `text`.
    pub(crate) fn find(&self, text: &str) -> Option<std::ops::Range<usize>> {
        match self {
            Pattern::Prefix(lit) => text.find(lit).map(|start| start..start + lit.len()),
            Pattern::Regex(re) => re.find(text).map(|m| m.range()),
        }
    }
}

/// A data-driven rule: a name (for traces and tests), a pattern and the value
/// produced when the pattern matches.
///
/// Rule tables are ordered; the first matching rule wins, so more specific
/// rules must come before the ones they shadow.
#[derive(Debug)]
pub(crate) struct Rule<P> {
    pub name: &'static str,
    pub pattern: Pattern,
    pub produces: P,
}

/// Rule whose production is a fixed sequence of canonical codes.
pub(crate) type CodeRule = Rule<&'static [RigCode]>;
