//! Request dispatch: raw dotted string in, display text out.
//!
//! [`Engine::evaluate`] tokenizes the request with the quote-aware splitter
//! and routes it by its first token. Every selector has an explicit handler
//! with its own argument-count guard; a known selector with too few
//! arguments gets the unsupported-parameter message rather than sliding into
//! another selector's behavior.
//!
//! Nothing here returns an error. Each failure mode degrades to the sentinel
//! the selector documents: `-1` for numeric queries, `false` for boolean
//! ones, `"null"` for date strings, and the player's own name for an empty
//! shared-address list.

use crate::args::split_args;
use crate::duration::parse_to_days;
use crate::interpolate::interpolate;
use crate::provider::{AuthRegistry, PlaceholderResolver, PlayerDirectory};
use crate::temporal::{
    diff_to_next_month_day, diff_to_next_weekday, diff_to_time_of_day, elapsed_since,
    format_instant, weekday_name, Clock, SystemClock,
};

/// Returned for unknown selectors and for known selectors invoked with too
/// few arguments.
pub const UNSUPPORTED_PARAMETER: &str = "The parameter you entered does not exist.";

/// The request dispatcher.
///
/// Owns its collaborators and a [`Clock`]; every evaluation is synchronous,
/// reads the clock once per time-dependent selector, and shares no mutable
/// state across calls.
pub struct Engine {
    resolver: Box<dyn PlaceholderResolver>,
    auth: Box<dyn AuthRegistry>,
    players: Box<dyn PlayerDirectory>,
    clock: Box<dyn Clock>,
}

impl Engine {
    /// Build an engine against the process-local wall clock.
    pub fn new(
        resolver: Box<dyn PlaceholderResolver>,
        auth: Box<dyn AuthRegistry>,
        players: Box<dyn PlayerDirectory>,
    ) -> Self {
        Self::with_clock(resolver, auth, players, Box::new(SystemClock))
    }

    /// Build an engine with an injected clock, for deterministic tests.
    pub fn with_clock(
        resolver: Box<dyn PlaceholderResolver>,
        auth: Box<dyn AuthRegistry>,
        players: Box<dyn PlayerDirectory>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            auth,
            players,
            clock,
        }
    }

    /// Evaluate one raw dotted request on behalf of `subject` (the player or
    /// account the player-scoped selectors refer to).
    ///
    /// # Examples
    ///
    /// Selector grammar, by example:
    ///
    /// ```text
    /// diffDays.second."18:00:00".false
    /// diffWeeks.minute."18:00:00".5
    /// diffMonths.hour."12:00:00".15
    /// getTheWeek
    /// luckPermsExpiryTime."{luckperms_expiry_time}"
    /// authMe.registrationDate."%Y-%m-%d %H:%M:%S"
    /// authMe.registrationDiffDate.day
    /// authMe.listNameByIp.","
    /// authMe.getUserCountByIp
    /// authMe.registered
    /// bukkit.emptySlots
    /// bukkit.playerOnline.Steve
    /// bukkit.itemInHand / itemInHandName / itemInHandCustomName
    ///                   / itemInHandAmount / itemInHandEnchanted
    /// ```
    pub fn evaluate(&self, subject: &str, raw: &str) -> String {
        let args = split_args(raw);

        match args[0].to_uppercase().as_str() {
            "DIFFDAYS" => self.diff_days(&args),
            "DIFFWEEKS" => self.diff_weeks(&args),
            "DIFFMONTHS" => self.diff_months(&args),
            "GETTHEWEEK" => weekday_name(self.clock.now().date()).to_string(),
            "LUCKPERMSEXPIRYTIME" => self.expiry_days(&args),
            "AUTHME" => self.auth_query(subject, &args),
            "BUKKIT" => self.player_query(subject, &args),
            _ => UNSUPPORTED_PARAMETER.to_string(),
        }
    }

    // ── Time-difference selectors ───────────────────────────────────────────

    fn diff_days(&self, args: &[String]) -> String {
        if args.len() < 4 {
            return UNSUPPORTED_PARAMETER.to_string();
        }
        let roll_to_tomorrow = args[3].eq_ignore_ascii_case("true");
        diff_to_time_of_day(self.clock.now(), &args[2], &args[1], roll_to_tomorrow).to_string()
    }

    fn diff_weeks(&self, args: &[String]) -> String {
        if args.len() < 4 {
            return UNSUPPORTED_PARAMETER.to_string();
        }
        let week_number = args[3].parse::<i32>().unwrap_or(1);
        diff_to_next_weekday(self.clock.now(), &args[2], week_number, &args[1]).to_string()
    }

    fn diff_months(&self, args: &[String]) -> String {
        if args.len() < 4 {
            return UNSUPPORTED_PARAMETER.to_string();
        }
        let day_of_month = args[3].parse::<i32>().unwrap_or(31);
        diff_to_next_month_day(self.clock.now(), &args[2], day_of_month, &args[1]).to_string()
    }

    // ── Duration folding ────────────────────────────────────────────────────

    fn expiry_days(&self, args: &[String]) -> String {
        let Some(expr) = args.get(1) else {
            return "-1".to_string();
        };
        let resolved = interpolate(expr, |name| self.resolver.resolve(&format!("%{name}%")));
        parse_to_days(&resolved).to_string()
    }

    // ── Auth registry selectors ─────────────────────────────────────────────

    fn auth_query(&self, subject: &str, args: &[String]) -> String {
        let Some(field) = args.get(1) else {
            return UNSUPPORTED_PARAMETER.to_string();
        };

        if field.eq_ignore_ascii_case("registered") {
            return self.auth.is_registered(subject).to_string();
        }
        if field.eq_ignore_ascii_case("getUserCountByIp") {
            return self.shared_address_count(subject).to_string();
        }

        let Some(arg) = args.get(2) else {
            return UNSUPPORTED_PARAMETER.to_string();
        };

        if field.eq_ignore_ascii_case("registrationDate") {
            return match self.auth.registration_info(subject) {
                Some(info) => {
                    format_instant(info.registered_at, arg).unwrap_or_else(|_| "null".to_string())
                }
                None => "null".to_string(),
            };
        }
        if field.eq_ignore_ascii_case("registrationDiffDate") {
            return match self.auth.registration_info(subject) {
                Some(info) => elapsed_since(info.registered_at, self.clock.now(), arg).to_string(),
                None => "-1".to_string(),
            };
        }
        if field.eq_ignore_ascii_case("listNameByIp") {
            return self.shared_address_names(subject, arg);
        }

        UNSUPPORTED_PARAMETER.to_string()
    }

    fn shared_address_count(&self, subject: &str) -> usize {
        match self.players.address_of(subject) {
            Some(address) => {
                let names = self.auth.names_sharing_address(&address);
                // An empty list still accounts for the subject themself.
                if names.is_empty() {
                    1
                } else {
                    names.len()
                }
            }
            None => 0,
        }
    }

    fn shared_address_names(&self, subject: &str, separator: &str) -> String {
        let names = self
            .players
            .address_of(subject)
            .map(|address| self.auth.names_sharing_address(&address))
            .unwrap_or_default();
        if names.is_empty() {
            subject.to_string()
        } else {
            names.join(separator)
        }
    }

    // ── Game-server selectors ───────────────────────────────────────────────

    fn player_query(&self, subject: &str, args: &[String]) -> String {
        let Some(field) = args.get(1) else {
            return UNSUPPORTED_PARAMETER.to_string();
        };

        if field.eq_ignore_ascii_case("playerOnline") {
            if args.len() < 3 {
                return UNSUPPORTED_PARAMETER.to_string();
            }
            return self.players.is_online(subject).to_string();
        }
        if field.eq_ignore_ascii_case("emptySlots") {
            return self.players.empty_slot_count(subject).to_string();
        }

        // The inventory read happens only once the field is recognized.
        if field.eq_ignore_ascii_case("itemInHand") {
            return self
                .players
                .main_hand_item(subject)
                .map_or_else(|| "AIR".to_string(), |it| it.material_name);
        }
        if field.eq_ignore_ascii_case("itemInHandName") {
            return self.players.main_hand_item(subject).map_or_else(
                || "Air".to_string(),
                |it| it.localized_name.unwrap_or(it.material_name),
            );
        }
        if field.eq_ignore_ascii_case("itemInHandCustomName") {
            return self.players.main_hand_item(subject).map_or_else(
                || "Air".to_string(),
                |it| {
                    it.display_name
                        .or(it.localized_name)
                        .unwrap_or(it.material_name)
                },
            );
        }
        if field.eq_ignore_ascii_case("itemInHandAmount") {
            return self
                .players
                .main_hand_item(subject)
                .map_or(0, |it| it.amount)
                .to_string();
        }
        if field.eq_ignore_ascii_case("itemInHandEnchanted") {
            return self
                .players
                .main_hand_item(subject)
                .is_some_and(|it| it.enchanted)
                .to_string();
        }

        UNSUPPORTED_PARAMETER.to_string()
    }
}
