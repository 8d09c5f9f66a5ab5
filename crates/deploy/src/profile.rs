use serde::{Deserialize, Serialize};

/// The two supported deployment sequences.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Validator, then an Aggregator pointing at it.
    #[default]
    Basic,
    /// Like [`Profile::Basic`] but the Aggregator also receives the token
    /// address and is registered on the Validator afterwards.
    Linked,
}

impl Profile {
    /// Whether the Aggregator gets registered on the Validator after both
    /// contracts are deployed.
    pub fn links_aggregator(self) -> bool {
        matches!(self, Self::Linked)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Linked => f.write_str("linked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::ValueEnum, rstest::rstest};

    #[rstest]
    #[case::basic("basic", Profile::Basic, false)]
    #[case::linked("linked", Profile::Linked, true)]
    fn parses_profile_names(#[case] name: &str, #[case] profile: Profile, #[case] links: bool) {
        assert_eq!(Profile::from_str(name, false).unwrap(), profile);
        assert_eq!(
            serde_json::from_str::<Profile>(&format!("\"{name}\"")).unwrap(),
            profile
        );
        assert_eq!(profile.to_string(), name);
        assert_eq!(profile.links_aggregator(), links);
    }
}
