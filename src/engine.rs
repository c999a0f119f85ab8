//! Rigging-code parsing engine.
//!
//! Parsing one input is a fixed pipeline. Every step reads rule tables from a
//! [`RuleSet`](crate::rules::RuleSet) rather than hard-coding codes:
//!
//! ```text
//! input ── normalize (trim + uppercase)
//!           │
//!           ├─ TriggerInfo::scan                (trigger.rs)
//!           │    - horsepower
//!           │    - counter-rotation compound (blanked from the text)
//!           │    - high-HP shaft suffix ("150XL")
//!           │
//!           ├─ peel_chunk per alphanumeric chunk (peel.rs)
//!           │    - stopwords skipped
//!           │    - longest/most specific code first
//!           │
//!           ├─ HP >= 40 without PT -> PT      (parser.rs)
//!           ├─ dedup_first_seen                (dedup.rs)
//!           └─ resolve -> RigAttributes        (resolve.rs)
//! ```
//!
//! No step can fail. Text that no rule recognizes is dropped and shows up only
//! in the run trace (`trace.rs`).
//!
//! ## Debugging
//!
//! Rule hits and dropped text are logged at `trace` level under the
//! `rigcode::engine` target, e.g. `RUST_LOG=rigcode=trace`.

#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/peel.rs"]
mod peel;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trace.rs"]
mod trace;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use parser::Parser;
pub(crate) use trace::{ChunkTrace, RunTrace};
pub(crate) use trigger::extract_horsepower;
