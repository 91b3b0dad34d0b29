use std::borrow::Cow;
use std::fmt;

/// A symbolic name, as opposed to free-form message text.
///
/// Comparison ignores ASCII case.
#[derive(Debug, Clone)]
pub struct Name(Cow<'static, str>);

impl Name {
    pub const NONE: Name = Name(Cow::Borrowed("None"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_none(&self) -> bool {
        self == &Self::NONE
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::NONE
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Name {}

impl From<&'static str> for Name {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_eq() {
        assert_eq!(Name::from("PlayerStart"), Name::from("playerstart".to_string()));
        assert_ne!(Name::from("PlayerStart"), Name::from("PlayerEnd"));
    }

    #[test]
    fn test_none() {
        assert!(Name::default().is_none());
        assert!(Name::from("none").is_none());
        assert!(!Name::from("Spawn").is_none());
    }
}
