//! Provider to registry namespace mapping.

use std::collections::HashMap;

/// Namespace for providers published by HashiCorp.
pub const DEFAULT_NAMESPACE: &str = "hashicorp";

/// Providers whose registry publisher is not `hashicorp`, keyed by the
/// lowercase provider prefix. Values keep the publisher's casing.
pub const PROVIDER_NAMESPACES: &[(&str, &str)] = &[
    ("okta", "okta"),
    ("datadog", "DataDog"),
    ("docker", "kreuzwerker"),
    ("sakuracloud", "sacloud"),
    ("github", "integrations"),
];

/// Namespace of a provider according to the built-in table.
#[must_use]
pub fn builtin_namespace(provider: &str) -> &'static str {
    PROVIDER_NAMESPACES
        .iter()
        .find(|(name, _)| *name == provider)
        .map_or(DEFAULT_NAMESPACE, |&(_, namespace)| namespace)
}

/// The built-in table, optionally extended with user overrides.
///
/// User overrides are consulted first. The built-in table is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    overrides: HashMap<String, String>,
}

impl NamespaceTable {
    /// A table with only the built-in entries.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// A table with user overrides. Provider keys are lowercased.
    #[must_use]
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let overrides = overrides
            .into_iter()
            .map(|(provider, namespace)| (provider.as_ref().to_lowercase(), namespace.into()))
            .collect();
        Self { overrides }
    }

    /// Number of user overrides.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Registry namespace for a lowercase provider prefix.
    #[must_use]
    pub fn namespace_for(&self, provider: &str) -> &str {
        self.overrides
            .get(provider)
            .map_or_else(|| builtin_namespace(provider), String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("aws", "hashicorp")]
    #[test_case("google", "hashicorp")]
    #[test_case("okta", "okta")]
    #[test_case("datadog", "DataDog")]
    #[test_case("docker", "kreuzwerker")]
    #[test_case("sakuracloud", "sacloud")]
    #[test_case("github", "integrations")]
    fn test_builtin_namespace(provider: &str, expected: &str) {
        assert_eq!(builtin_namespace(provider), expected);
        assert_eq!(NamespaceTable::builtin().namespace_for(provider), expected);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(builtin_namespace("DataDog"), DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let table = NamespaceTable::with_overrides([("MyCorp", "my-corp"), ("docker", "acme")]);
        assert_eq!(table.override_count(), 2);
        assert_eq!(table.namespace_for("mycorp"), "my-corp");
        assert_eq!(table.namespace_for("docker"), "acme");
        assert_eq!(table.namespace_for("datadog"), "DataDog");

        // The built-in table is unaffected.
        assert_eq!(builtin_namespace("docker"), "kreuzwerker");
    }
}
