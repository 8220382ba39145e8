use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPolicy;

/// How a failed pairing treats the entity it was called on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingPolicy {
    /// All-or-nothing: a rejected pairing leaves both sides untouched
    #[default]
    Transactional,
    /// The caller's link is assigned before the argument is checked, so a
    /// rejected pairing still records the foreign value on the caller.
    /// The reciprocal assignment is skipped.
    Asymmetric,
}

impl PairingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PairingPolicy::Transactional => "transactional",
            PairingPolicy::Asymmetric => "asymmetric",
        }
    }
}

impl fmt::Display for PairingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PairingPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transactional" => Ok(PairingPolicy::Transactional),
            "asymmetric" => Ok(PairingPolicy::Asymmetric),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_transactional() {
        assert_eq!(PairingPolicy::default(), PairingPolicy::Transactional);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Asymmetric".parse::<PairingPolicy>(),
            Ok(PairingPolicy::Asymmetric)
        );
        assert_eq!(
            " transactional ".parse::<PairingPolicy>(),
            Ok(PairingPolicy::Transactional)
        );
    }

    #[test]
    fn test_parse_unknown_policy() {
        let err = "lenient".parse::<PairingPolicy>().unwrap_err();
        assert_eq!(err, UnknownPolicy("lenient".to_string()));
        assert!(err.to_string().contains("'lenient'"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for policy in [PairingPolicy::Transactional, PairingPolicy::Asymmetric] {
            assert_eq!(policy.to_string().parse::<PairingPolicy>(), Ok(policy));
        }
    }
}
