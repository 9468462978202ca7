//! `phe` — evaluate one placeholder-engine expression from the command line.
//!
//! Runs the engine detached from any game server or auth backend: those
//! collaborators answer with their sentinel values, while `{...}` placeholder
//! references resolve against environment variables. `--now` pins the clock
//! for reproducible output.
//!
//! ```text
//! phe 'diffDays.second."18:00:00".false'
//! phe --now 2026-03-02T12:00:00 getTheWeek
//! EXPIRY='1mo 6d' phe 'luckPermsExpiryTime."{EXPIRY}"'
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use placeholder_engine::provider::{
    AuthRegistry, HandItem, PlaceholderResolver, PlayerDirectory, RegistrationInfo,
};
use placeholder_engine::temporal::{Clock, SystemClock};
use placeholder_engine::Engine;

#[derive(Parser)]
#[command(name = "phe", version, about = "Evaluate a placeholder-engine expression")]
struct Cli {
    /// Raw dotted expression, e.g. 'diffDays.second."18:00:00".false'
    expression: String,

    /// Subject identity for player-scoped selectors
    #[arg(long, default_value = "console")]
    subject: String,

    /// Evaluate against this fixed local date-time (YYYY-MM-DDTHH:MM:SS)
    /// instead of the wall clock
    #[arg(long)]
    now: Option<String>,

    /// Emit a JSON object instead of the bare value
    #[arg(long)]
    json: bool,
}

/// Resolves `%NAME%` against the process environment. Unknown names echo
/// back unchanged, mirroring how the upstream substitution system leaves
/// unmatched placeholders in place.
struct EnvResolver;

impl PlaceholderResolver for EnvResolver {
    fn resolve(&self, expanded: &str) -> String {
        let name = expanded.trim_matches('%');
        std::env::var(name).unwrap_or_else(|_| expanded.to_string())
    }
}

/// No game server and no auth registry: every lookup degrades to its
/// documented sentinel.
struct Detached;

impl AuthRegistry for Detached {
    fn registration_info(&self, _identity: &str) -> Option<RegistrationInfo> {
        None
    }

    fn is_registered(&self, _identity: &str) -> bool {
        false
    }

    fn names_sharing_address(&self, _address: &str) -> Vec<String> {
        Vec::new()
    }
}

impl PlayerDirectory for Detached {
    fn address_of(&self, _identity: &str) -> Option<String> {
        None
    }

    fn is_online(&self, _identity: &str) -> bool {
        false
    }

    fn main_hand_item(&self, _identity: &str) -> Option<HandItem> {
        None
    }

    fn empty_slot_count(&self, _identity: &str) -> i32 {
        0
    }
}

struct FixedClock(NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let clock: Box<dyn Clock> = match &cli.now {
        Some(s) => {
            let anchor = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
                .with_context(|| format!("cannot parse --now '{s}' as YYYY-MM-DDTHH:MM:SS"))?;
            Box::new(FixedClock(anchor))
        }
        None => Box::new(SystemClock),
    };

    let engine = Engine::with_clock(
        Box::new(EnvResolver),
        Box::new(Detached),
        Box::new(Detached),
        clock,
    );
    let output = engine.evaluate(&cli.subject, &cli.expression);

    if cli.json {
        let report = serde_json::json!({
            "expression": cli.expression,
            "subject": cli.subject,
            "output": output,
        });
        println!("{report}");
    } else {
        println!("{output}");
    }
    Ok(())
}
