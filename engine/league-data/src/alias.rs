//! Display-name aliases

use crate::error::AliasError;
use std::collections::BTreeMap;

/// Canonical display name to preferred nickname
///
/// No nickname may itself be an alias key, so resolving twice gives the same
/// answer as resolving once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    nicknames: BTreeMap<String, String>,
}

impl AliasMap {
    pub fn new<I, K, V>(entries: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut nicknames = BTreeMap::new();
        for (name, nickname) in entries {
            let name = name.into();
            if nicknames.contains_key(&name) {
                return Err(AliasError::Duplicate { name });
            }
            nicknames.insert(name, nickname.into());
        }

        for (name, nickname) in &nicknames {
            if nickname != name && nicknames.contains_key(nickname) {
                return Err(AliasError::Chained { name: name.clone(), nickname: nickname.clone() });
            }
        }

        Ok(Self { nicknames })
    }

    /// Nickname for `name`, or `name` itself
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.nicknames.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.nicknames.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nicknames.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.nicknames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nicknames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league_aliases() -> AliasMap {
        AliasMap::new([("Selkow", "Jared"), ("Dak", "Brodack")]).unwrap()
    }

    #[test]
    fn test_resolve_known_and_unknown_names() {
        let aliases = league_aliases();
        assert_eq!(aliases.resolve("Selkow"), "Jared");
        assert_eq!(aliases.resolve("Dak"), "Brodack");
        assert_eq!(aliases.resolve("selkow"), "selkow");
        assert_eq!(aliases.resolve("Selkow "), "Selkow ");
        assert_eq!(aliases.resolve(""), "");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let aliases = league_aliases();
        for (name, _) in aliases.iter() {
            let once = aliases.resolve(name);
            assert_eq!(aliases.resolve(once), once);
        }
    }

    #[test]
    fn test_chained_alias_rejected() {
        let err = AliasMap::new([("Selkow", "Jared"), ("Jared", "J")]).unwrap_err();
        assert_eq!(
            err,
            AliasError::Chained { name: "Selkow".to_string(), nickname: "Jared".to_string() }
        );
    }

    #[test]
    fn test_self_alias_allowed_and_duplicates_rejected() {
        let aliases = AliasMap::new([("Jared", "Jared")]).unwrap();
        assert_eq!(aliases.resolve("Jared"), "Jared");

        let err = AliasMap::new([("Dak", "Brodack"), ("Dak", "Dakota")]).unwrap_err();
        assert_eq!(err, AliasError::Duplicate { name: "Dak".to_string() });
    }
}
