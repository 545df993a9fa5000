use std::path::Path;

use mediasift_parse::{MediaType, MediaTypeSet};
use serde::{Deserialize, Serialize};

use crate::error::SiftError;

/// Embedded disambiguation rules.
const EMBEDDED_POLICY: &str = include_str!("../data/policy.toml");

/// A rule as written in a policy file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ResolutionDef {
    name: String,
    candidates: Vec<String>,
    resolved: Vec<String>,
}

/// Wrapper for TOML deserialization.
#[derive(Debug, Deserialize)]
struct PolicyFile {
    #[serde(rename = "resolution", default)]
    resolutions: Vec<ResolutionDef>,
}

/// Maps one exact candidate set to the set the classifier should use instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    pub candidates: MediaTypeSet,
    pub resolved: MediaTypeSet,
}

/// Explicit candidate-set to resolved-set table.
///
/// Candidate sets without a rule pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisambiguationPolicy {
    resolutions: Vec<Resolution>,
}

impl Default for DisambiguationPolicy {
    fn default() -> Self {
        Self::embedded()
    }
}

impl DisambiguationPolicy {
    /// A policy with no rules.
    pub fn new() -> Self {
        Self {
            resolutions: Vec::new(),
        }
    }

    /// Load the built-in rules.
    pub fn embedded() -> Self {
        Self::from_toml(EMBEDDED_POLICY).expect("embedded policy.toml should be valid")
    }

    /// Load a policy from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SiftError> {
        let file: PolicyFile =
            toml::from_str(toml_str).map_err(|e| SiftError::Policy(e.to_string()))?;

        let mut policy = Self::new();
        for def in file.resolutions {
            let resolution = def.into_resolution()?;
            if policy.lookup(resolution.candidates).is_some() {
                return Err(SiftError::Policy(format!(
                    "rule {:?}: candidate set {} is already resolved by another rule",
                    resolution.name, resolution.candidates
                )));
            }
            policy.resolutions.push(resolution);
        }
        Ok(policy)
    }

    /// Load a policy from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SiftError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Merge a user policy into this one.
    /// Rules for an equal candidate set are replaced; new rules are appended.
    pub fn merge_user(&mut self, user: &DisambiguationPolicy) {
        for rule in &user.resolutions {
            if let Some(existing) = self
                .resolutions
                .iter_mut()
                .find(|r| r.candidates == rule.candidates)
            {
                *existing = rule.clone();
            } else {
                self.resolutions.push(rule.clone());
            }
        }
    }

    /// The rule for exactly this candidate set, if any.
    pub fn lookup(&self, candidates: MediaTypeSet) -> Option<&Resolution> {
        self.resolutions.iter().find(|r| r.candidates == candidates)
    }

    /// Apply the policy to a candidate set.
    pub fn resolve(&self, candidates: MediaTypeSet) -> MediaTypeSet {
        self.lookup(candidates)
            .map(|r| r.resolved)
            .unwrap_or(candidates)
    }

    pub fn resolutions(&self) -> &[Resolution] {
        &self.resolutions
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    /// Whether the policy has no rules.
    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }
}

impl ResolutionDef {
    fn into_resolution(self) -> Result<Resolution, SiftError> {
        let candidates = parse_set(&self.name, &self.candidates)?;
        let resolved = parse_set(&self.name, &self.resolved)?;

        if candidates.is_empty() {
            return Err(SiftError::Policy(format!(
                "rule {:?}: candidates must name at least one media type",
                self.name
            )));
        }
        if !candidates.contains(resolved) {
            return Err(SiftError::Policy(format!(
                "rule {:?}: resolved set {} is not within candidates {}",
                self.name, resolved, candidates
            )));
        }

        Ok(Resolution {
            name: self.name,
            candidates,
            resolved,
        })
    }
}

/// Parse media type names into a set, rejecting the sentinel types.
fn parse_set(rule: &str, names: &[String]) -> Result<MediaTypeSet, SiftError> {
    names
        .iter()
        .map(|name| {
            let media_type: MediaType = name
                .parse()
                .map_err(|e| SiftError::Policy(format!("rule {rule:?}: {e}")))?;
            if !media_type.is_concrete() {
                return Err(SiftError::Policy(format!(
                    "rule {rule:?}: {name:?} is not a concrete media type"
                )));
            }
            Ok(media_type)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_loads() {
        let policy = DisambiguationPolicy::embedded();
        assert_eq!(policy.len(), 1, "Expected 1 built-in rule, got {}", policy.len());
        let rule = &policy.resolutions()[0];
        assert_eq!(rule.candidates, MediaTypeSet::TV | MediaTypeSet::MOVIE);
        assert_eq!(rule.resolved, MediaTypeSet::TV);
    }

    #[test]
    fn test_resolve_exact_set_only() {
        let policy = DisambiguationPolicy::embedded();
        assert_eq!(
            policy.resolve(MediaTypeSet::TV | MediaTypeSet::MOVIE),
            MediaTypeSet::TV
        );
        // Supersets and subsets are not special-cased.
        let three = MediaTypeSet::TV | MediaTypeSet::MOVIE | MediaTypeSet::MUSIC;
        assert_eq!(policy.resolve(three), three);
        assert_eq!(policy.resolve(MediaTypeSet::MOVIE), MediaTypeSet::MOVIE);
        assert_eq!(policy.resolve(MediaTypeSet::empty()), MediaTypeSet::empty());
    }

    #[test]
    fn test_empty_policy_passes_through() {
        let policy = DisambiguationPolicy::new();
        assert!(policy.is_empty());
        let set = MediaTypeSet::TV | MediaTypeSet::MOVIE;
        assert_eq!(policy.resolve(set), set);
    }

    #[test]
    fn test_labels_accepted() {
        let policy = DisambiguationPolicy::from_toml(
            r#"
            [[resolution]]
            name = "books"
            candidates = ["audio book", "ebook"]
            resolved = ["ebook"]
            "#,
        )
        .unwrap();
        assert_eq!(
            policy.resolve(MediaTypeSet::AUDIO_BOOK | MediaTypeSet::EBOOK),
            MediaTypeSet::EBOOK
        );
    }

    #[test]
    fn test_no_rules_is_valid() {
        let policy = DisambiguationPolicy::from_toml("").unwrap();
        assert!(policy.is_empty());
    }

    #[test]
    fn test_rejects_widening() {
        let err = DisambiguationPolicy::from_toml(
            r#"
            [[resolution]]
            name = "widen"
            candidates = ["tv"]
            resolved = ["tv", "movie"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SiftError::Policy(_)), "got {err:?}");
    }

    #[test]
    fn test_rejects_sentinels_and_unknown_names() {
        for bad in [r#"["tv", "ambiguous"]"#, r#"["tv", "podcast"]"#, "[]"] {
            let toml_str = format!(
                "[[resolution]]\nname = \"bad\"\ncandidates = {bad}\nresolved = []\n"
            );
            let err = DisambiguationPolicy::from_toml(&toml_str).unwrap_err();
            assert!(matches!(err, SiftError::Policy(_)), "{bad}: got {err:?}");
        }
    }

    #[test]
    fn test_rejects_duplicate_candidate_sets() {
        let err = DisambiguationPolicy::from_toml(
            r#"
            [[resolution]]
            name = "a"
            candidates = ["tv", "movie"]
            resolved = ["tv"]

            [[resolution]]
            name = "b"
            candidates = ["movie", "tv"]
            resolved = ["movie"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SiftError::Policy(_)), "got {err:?}");
    }

    #[test]
    fn test_malformed_toml() {
        let err = DisambiguationPolicy::from_toml("[[resolution]]\nname = 3\n").unwrap_err();
        assert!(matches!(err, SiftError::Policy(_)), "got {err:?}");
    }

    #[test]
    fn test_merge_user_replaces_and_appends() {
        let mut policy = DisambiguationPolicy::embedded();
        let user = DisambiguationPolicy::from_toml(
            r#"
            [[resolution]]
            name = "prefer-movie"
            candidates = ["movie", "tv"]
            resolved = ["movie"]

            [[resolution]]
            name = "music-over-movie"
            candidates = ["movie", "music"]
            resolved = ["music"]
            "#,
        )
        .unwrap();
        policy.merge_user(&user);

        assert_eq!(policy.len(), 2);
        assert_eq!(
            policy.resolve(MediaTypeSet::TV | MediaTypeSet::MOVIE),
            MediaTypeSet::MOVIE
        );
        assert_eq!(
            policy.resolve(MediaTypeSet::MOVIE | MediaTypeSet::MUSIC),
            MediaTypeSet::MUSIC
        );
        let rule = policy.lookup(MediaTypeSet::TV | MediaTypeSet::MOVIE).unwrap();
        assert_eq!(rule.name, "prefer-movie");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.toml");
        std::fs::write(
            &path,
            "[[resolution]]\nname = \"x\"\ncandidates = [\"tv\", \"music\"]\nresolved = []\n",
        )
        .unwrap();
        let policy = DisambiguationPolicy::from_file(&path).unwrap();
        assert_eq!(
            policy.resolve(MediaTypeSet::TV | MediaTypeSet::MUSIC),
            MediaTypeSet::empty()
        );

        let missing = DisambiguationPolicy::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(SiftError::Io(_))));
    }
}
