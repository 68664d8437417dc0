use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let email = "cynthia.softball12@gmail.com".parse::<EmailAddress>().unwrap();
        assert_eq!(email.as_str(), "cynthia.softball12@gmail.com");
        assert_eq!(email.to_string(), "cynthia.softball12@gmail.com");
    }

    #[test]
    fn parse_invalid() {
        for input in ["", "cynthia.softball12@", "@gmail.com", "cynthia", "a b@c.de"] {
            assert!(input.parse::<EmailAddress>().is_err(), "{input:?}");
        }
    }
}
