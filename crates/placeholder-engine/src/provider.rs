//! External collaborator interfaces.
//!
//! The engine's own logic is string and calendar arithmetic; everything it
//! knows about the outside world (the placeholder substitution system, the
//! auth registry, the game-server view of a player) comes in through these
//! traits. Production wires real backends in; tests and the CLI wire in
//! stubs, which is the point — none of the core paths need a live server.
//!
//! Every lookup is allowed to fail softly: absence is modeled with `Option`
//! and the dispatch layer maps it to the documented sentinel values.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Expands `%...%` placeholders through the external text-substitution
/// system.
///
/// Implementations must be thread-safe; beyond that the engine holds no
/// locks and shares no mutable state across calls. Resolvers must not be
/// self-referential (see [`crate::interpolate`] on termination).
pub trait PlaceholderResolver: Send + Sync {
    /// Expand one placeholder given in its full `%name%` form.
    fn resolve(&self, expanded: &str) -> String;
}

/// A registered account's auth-system record.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationInfo {
    /// When the account was registered, in local time.
    pub registered_at: NaiveDateTime,
}

/// Read-only view of the external auth registry.
pub trait AuthRegistry: Send + Sync {
    fn registration_info(&self, identity: &str) -> Option<RegistrationInfo>;

    fn is_registered(&self, identity: &str) -> bool;

    /// All account names that have connected from `address`.
    fn names_sharing_address(&self, address: &str) -> Vec<String>;
}

/// The item held in a player's main hand.
#[derive(Debug, Clone, Serialize)]
pub struct HandItem {
    /// Material identifier, e.g. `DIAMOND_SWORD`.
    pub material_name: String,
    /// Custom display name, when the item has been renamed.
    pub display_name: Option<String>,
    /// Localized item name, when one exists.
    pub localized_name: Option<String>,
    pub amount: i32,
    pub enchanted: bool,
}

/// Read-only view of the game server's player state.
pub trait PlayerDirectory: Send + Sync {
    /// Network address the player connected from.
    fn address_of(&self, identity: &str) -> Option<String>;

    fn is_online(&self, identity: &str) -> bool;

    /// `None` when the hand is empty (or the player is unknown).
    fn main_hand_item(&self, identity: &str) -> Option<HandItem>;

    /// Empty slots in the 36-slot main inventory; armor and off-hand slots
    /// are not counted.
    fn empty_slot_count(&self, identity: &str) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn hand_item_serializes_with_optional_names() {
        let item = HandItem {
            material_name: "DIAMOND_SWORD".to_string(),
            display_name: Some("Cleaver".to_string()),
            localized_name: None,
            amount: 1,
            enchanted: true,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["material_name"], "DIAMOND_SWORD");
        assert_eq!(json["display_name"], "Cleaver");
        assert!(json["localized_name"].is_null());
    }

    #[test]
    fn registration_info_serializes_the_instant() {
        let info = RegistrationInfo {
            registered_at: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("2025-06-01T09:30:00"));
    }
}
