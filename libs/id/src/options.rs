//! Toggles for which kinds of numbers are accepted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which schemes and variants the parser accepts.
///
/// Everything is allowed by default except interim numbers.
///
/// Keys are matched leniently when building from pairs or deserializing:
/// `allowDanishCprNumber`, `allow_danish_cpr_number` and
/// `ALLOWDANISHCPRNUMBER` all name the same toggle, and the `allow` prefix
/// may be left out. Unknown keys are logged as warnings and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "BTreeMap<String, bool>")]
pub struct Options {
    pub allow_personal_identity_number: bool,
    pub allow_coordination_number: bool,
    pub allow_t_number: bool,
    pub allow_vgr_reserve_number: bool,
    pub allow_sll_reserve_number: bool,
    pub allow_rvb_reserve_number: bool,
    pub allow_norwegian_birth_number: bool,
    pub allow_danish_cpr_number: bool,
    pub allow_interim_number: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_personal_identity_number: true,
            allow_coordination_number: true,
            allow_t_number: true,
            allow_vgr_reserve_number: true,
            allow_sll_reserve_number: true,
            allow_rvb_reserve_number: true,
            allow_norwegian_birth_number: true,
            allow_danish_cpr_number: true,
            allow_interim_number: false,
        }
    }
}

/// Canonical option keys, in declaration order.
pub const OPTION_KEYS: [&str; 9] = [
    "allowPersonalIdentityNumber",
    "allowCoordinationNumber",
    "allowTNumber",
    "allowVgrReserveNumber",
    "allowSllReserveNumber",
    "allowRvbReserveNumber",
    "allowNorwegianBirthNumber",
    "allowDanishCprNumber",
    "allowInterimNumber",
];

fn normalize_key(key: &str) -> String {
    let folded: String = key
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if folded.starts_with("allow") {
        folded
    } else {
        format!("allow{folded}")
    }
}

impl Options {
    /// Only Swedish numbers; Norwegian and Danish numbers are rejected.
    #[must_use]
    pub fn swedish_only() -> Self {
        Self {
            allow_norwegian_birth_number: false,
            allow_danish_cpr_number: false,
            ..Self::default()
        }
    }

    /// Builds options from key/value pairs on top of the defaults.
    ///
    /// Unknown keys are reported with a warning, never an error.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            if !options.set(key, value) {
                tracing::warn!(key, "ignoring unknown option");
            }
        }
        options
    }

    /// Sets a toggle by name. Returns false if the key is unknown.
    pub fn set(&mut self, key: &str, value: bool) -> bool {
        match self.slot(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Reads a toggle by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        let mut copy = *self;
        copy.slot(key).map(|slot| *slot)
    }

    /// Returns true if `key` names a known toggle.
    #[must_use]
    pub fn is_known_key(key: &str) -> bool {
        Self::default().get(key).is_some()
    }

    fn slot(&mut self, key: &str) -> Option<&mut bool> {
        let slot = match normalize_key(key).as_str() {
            "allowpersonalidentitynumber" => &mut self.allow_personal_identity_number,
            "allowcoordinationnumber" => &mut self.allow_coordination_number,
            "allowtnumber" => &mut self.allow_t_number,
            "allowvgrreservenumber" => &mut self.allow_vgr_reserve_number,
            "allowsllreservenumber" => &mut self.allow_sll_reserve_number,
            "allowrvbreservenumber" => &mut self.allow_rvb_reserve_number,
            "allownorwegianbirthnumber" => &mut self.allow_norwegian_birth_number,
            "allowdanishcprnumber" => &mut self.allow_danish_cpr_number,
            "allowinterimnumber" => &mut self.allow_interim_number,
            _ => return None,
        };
        Some(slot)
    }
}

impl From<BTreeMap<String, bool>> for Options {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self::from_pairs(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(options.allow_personal_identity_number);
        assert!(options.allow_coordination_number);
        assert!(options.allow_danish_cpr_number);
        assert!(!options.allow_interim_number);
    }

    #[test]
    fn test_key_spellings() {
        for key in [
            "allowDanishCprNumber",
            "allow_danish_cpr_number",
            "ALLOWDANISHCPRNUMBER",
            "danish-cpr-number",
        ] {
            let mut options = Options::default();
            assert!(options.set(key, false), "{key} should be known");
            assert!(!options.allow_danish_cpr_number);
        }
    }

    #[test]
    fn test_all_canonical_keys_known() {
        for key in OPTION_KEYS {
            assert!(Options::is_known_key(key), "{key}");
        }
        assert!(!Options::is_known_key("allowEverything"));
    }

    #[test]
    fn test_from_pairs_ignores_unknown() {
        let options = Options::from_pairs([("allowInterimNumber", true), ("bogus", false)]);
        assert!(options.allow_interim_number);
        assert_eq!(
            Options {
                allow_interim_number: false,
                ..options
            },
            Options::default()
        );
    }

    #[test]
    fn test_deserialize_from_json() {
        let options: Options =
            serde_json::from_str(r#"{"allowCoordinationNumber": false, "unknownKey": true}"#)
                .unwrap();
        assert!(!options.allow_coordination_number);
        assert!(options.allow_personal_identity_number);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(Options::default()).unwrap();
        for key in OPTION_KEYS {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_swedish_only() {
        let options = Options::swedish_only();
        assert!(!options.allow_danish_cpr_number);
        assert!(!options.allow_norwegian_birth_number);
        assert!(options.allow_sll_reserve_number);
    }
}
