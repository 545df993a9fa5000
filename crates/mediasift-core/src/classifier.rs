use mediasift_parse::{detector, MediaDetails, MediaType, MediaTypeSet};

use crate::config::SiftConfig;
use crate::error::SiftError;
use crate::policy::DisambiguationPolicy;

/// Runs every detector over a name and settles on a single verdict.
///
/// Flow: detect all → apply disambiguation policy → count what is left.
/// Holds no per-call state; one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    policy: DisambiguationPolicy,
}

impl Classifier {
    pub fn new(policy: DisambiguationPolicy) -> Self {
        Self { policy }
    }

    /// Build a classifier from config: built-in rules, plus the user policy
    /// file when enabled and present.
    pub fn from_config(config: &SiftConfig) -> Result<Self, SiftError> {
        let mut policy = DisambiguationPolicy::embedded();
        if config.policy.use_user_rules {
            let path = config.policy_path();
            if path.exists() {
                let user = DisambiguationPolicy::from_file(&path).inspect_err(|e| {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load user policy");
                })?;
                tracing::info!(
                    path = %path.display(),
                    rules = user.len(),
                    "Merging user disambiguation policy"
                );
                policy.merge_user(&user);
            } else {
                tracing::debug!(path = %path.display(), "No user policy file, using built-in rules");
            }
        }
        Ok(Self::new(policy))
    }

    pub fn policy(&self) -> &DisambiguationPolicy {
        &self.policy
    }

    /// Types whose detector matched `name`, before disambiguation.
    pub fn candidates(&self, name: &str) -> MediaTypeSet {
        detector::detect_all(name)
    }

    /// Apply the disambiguation policy to a candidate set.
    pub fn resolve(&self, candidates: MediaTypeSet) -> MediaTypeSet {
        match self.policy.lookup(candidates) {
            Some(rule) => {
                tracing::debug!(
                    %candidates,
                    resolved = %rule.resolved,
                    rule = %rule.name,
                    "Candidates disambiguated"
                );
                rule.resolved
            }
            None => candidates,
        }
    }

    /// Classify a name: one concrete type, `Unknown` or `Ambiguous`.
    #[tracing::instrument(name = "classify", level = "debug", skip(self), fields(name = %name))]
    pub fn classify(&self, name: &str) -> MediaType {
        let resolved = self.resolve(self.candidates(name));

        let verdict = if resolved.is_empty() {
            MediaType::Unknown
        } else {
            resolved.single().unwrap_or(MediaType::Ambiguous)
        };
        tracing::debug!(%resolved, verdict = verdict.name(), "Classified");
        verdict
    }

    /// Details for the classified type, re-extracted by that type's detector.
    /// `None` for `Unknown`, `Ambiguous` and types without extraction fields.
    pub fn details(&self, name: &str) -> Option<MediaDetails> {
        detector::detect(self.classify(name), name)
    }
}
