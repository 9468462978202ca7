//! # placeholder-engine
//!
//! A small expression-evaluation layer: a dotted, quote-aware request string
//! goes in, a computed display value comes out.
//!
//! The real logic lives in two places. The tokenizing side splits dotted
//! argument strings while keeping `"..."`-quoted spans atomic and recursively
//! expands nested `{...}` placeholder references. The temporal side computes
//! "time remaining until X" under three recurrence rules (same/next day, next
//! weekday, next month-day) and folds free-form duration strings like
//! `"1y2mo3d"` into day counts. Everything else — inventory, auth-registry
//! and online-status reads — is a one-line property read against an injected
//! collaborator.
//!
//! Evaluation never fails outward: malformed input degrades to documented
//! sentinel values (`-1`, `false`, `"null"`, or a fixed message).
//!
//! ## Modules
//!
//! - [`args`] — quote-aware dotted argument splitting
//! - [`interpolate`] — recursive `{...}` placeholder expansion
//! - [`temporal`] — recurrence-rule time differences and unit conversion
//! - [`duration`] — folding duration strings into day counts
//! - [`provider`] — injected external collaborators (resolver, auth, players)
//! - [`engine`] — the per-selector request dispatcher
//! - [`error`] — error types (internal; the request surface returns sentinels)

pub mod args;
pub mod duration;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod provider;
pub mod temporal;

pub use args::split_args;
pub use duration::{parse_to_days, try_parse_to_days};
pub use engine::{Engine, UNSUPPORTED_PARAMETER};
pub use error::EngineError;
pub use interpolate::interpolate;
pub use provider::{
    AuthRegistry, HandItem, PlaceholderResolver, PlayerDirectory, RegistrationInfo,
};
pub use temporal::{
    convert_millis, convert_to_millis, diff_to_next_month_day, diff_to_next_weekday,
    diff_to_time_of_day, elapsed_since, format_instant, parse_time_of_day, weekday_name, Clock,
    SystemClock, Unit,
};
