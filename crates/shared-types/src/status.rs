use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual weight of a status value, mapped to a badge variant by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

/// A closed set of backend enum strings with display labels.
///
/// Every vocabulary carries an `Unknown` fallback so an unexpected value from
/// the backend never fails a whole list decode.
pub trait StatusVocabulary: Sized + Copy + Default + PartialEq + 'static {
    /// Known values in display order. `Unknown` is not included.
    const ALL: &'static [Self];

    /// Backend wire string.
    fn as_str(&self) -> &'static str;

    /// Human-readable label.
    fn label(&self) -> &'static str;

    fn tone(&self) -> Tone;

    /// Parse a wire string, case-insensitively. Returns `None` for unknown keys.
    fn parse_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(key))
    }

    /// Parse a wire string, falling back to the `Unknown` variant.
    fn from_str_or_default(key: &str) -> Self {
        Self::parse_key(key).unwrap_or_default()
    }
}

macro_rules! status_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($key:literal, $label:literal, $tone:ident) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
            #[default]
            #[serde(rename = "unknown", other)]
            Unknown,
        }

        impl StatusVocabulary for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                    $name::Unknown => "unknown",
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unknown => "Unknown",
                }
            }

            fn tone(&self) -> Tone {
                match self {
                    $($name::$variant => Tone::$tone,)+
                    $name::Unknown => Tone::Neutral,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

status_vocabulary! {
    /// Account role as stored by the backend.
    UserRole {
        Worker => ("worker", "Worker", Info),
        Employer => ("employer", "Employer", Info),
        Admin => ("admin", "Admin", Warning),
    }
}

status_vocabulary! {
    /// Identity verification state of a worker or employer.
    KycStatus {
        Unverified => ("unverified", "Unverified", Neutral),
        Pending => ("pending", "Pending review", Warning),
        Verified => ("verified", "Verified", Success),
        Rejected => ("rejected", "Rejected", Danger),
    }
}

status_vocabulary! {
    AccountStatus {
        Active => ("active", "Active", Success),
        Blocked => ("blocked", "Blocked", Danger),
    }
}

status_vocabulary! {
    JobStatus {
        Draft => ("draft", "Draft", Neutral),
        Open => ("open", "Open", Info),
        InProgress => ("in_progress", "In progress", Warning),
        Completed => ("completed", "Completed", Success),
        Cancelled => ("cancelled", "Cancelled", Danger),
    }
}

status_vocabulary! {
    ContractStatus {
        Draft => ("draft", "Draft", Neutral),
        Active => ("active", "Active", Info),
        Completed => ("completed", "Completed", Success),
        Disputed => ("disputed", "Disputed", Warning),
        Cancelled => ("cancelled", "Cancelled", Danger),
    }
}

status_vocabulary! {
    PaymentStatus {
        Pending => ("pending", "Pending", Warning),
        Success => ("success", "Paid", Success),
        Failed => ("failed", "Failed", Danger),
        Cancelled => ("cancelled", "Cancelled", Neutral),
    }
}

status_vocabulary! {
    /// How a payment moves between parties. Escrow is a label only.
    PaymentMethod {
        Transfer => ("transfer", "Bank transfer", Neutral),
        EWallet => ("e_wallet", "E-wallet", Info),
        Cash => ("cash", "Cash", Neutral),
        Escrow => ("escrow", "Escrow", Warning),
    }
}

status_vocabulary! {
    /// Moderation visibility of a rating.
    RatingStatus {
        Visible => ("visible", "Visible", Success),
        Hidden => ("hidden", "Hidden", Neutral),
        Flagged => ("flagged", "Flagged", Danger),
    }
}

/// Options for a status `<select>`: `(wire key, label)` pairs in display order.
pub fn select_options<S: StatusVocabulary>() -> Vec<(String, String)> {
    S::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_values_fall_back() {
        let status: JobStatus = serde_json::from_str(r#""archived""#).unwrap();
        assert_eq!(status, JobStatus::Unknown);
        assert_eq!(status.label(), "Unknown");
        assert_eq!(status.tone(), Tone::Neutral);
    }

    #[test]
    fn snake_case_keys_round_trip() {
        let status: JobStatus = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(status, JobStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""in_progress""#);
        assert_eq!(
            serde_json::to_string(&PaymentMethod::EWallet).unwrap(),
            r#""e_wallet""#
        );
    }

    #[test]
    fn parse_key_is_case_insensitive() {
        assert_eq!(KycStatus::parse_key("Verified"), Some(KycStatus::Verified));
        assert_eq!(KycStatus::parse_key(" pending "), Some(KycStatus::Pending));
        assert_eq!(KycStatus::parse_key("unknown"), None);
        assert_eq!(KycStatus::from_str_or_default("nope"), KycStatus::Unknown);
    }

    #[test]
    fn all_excludes_unknown() {
        assert_eq!(ContractStatus::ALL.len(), 5);
        assert!(!ContractStatus::ALL.contains(&ContractStatus::Unknown));
        assert_eq!(RatingStatus::ALL[0], RatingStatus::Visible);
    }

    #[test]
    fn labels_and_tones() {
        assert_eq!(PaymentStatus::Success.label(), "Paid");
        assert_eq!(PaymentStatus::Success.tone(), Tone::Success);
        assert_eq!(ContractStatus::Disputed.tone(), Tone::Warning);
        assert_eq!(AccountStatus::Blocked.to_string(), "Blocked");
    }

    #[test]
    fn select_options_in_display_order() {
        let opts = select_options::<AccountStatus>();
        assert_eq!(
            opts,
            vec![
                ("active".to_string(), "Active".to_string()),
                ("blocked".to_string(), "Blocked".to_string()),
            ]
        );
    }
}
