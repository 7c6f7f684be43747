//! Identity and matcher resolution.
//!
//! Pure mapping from caller-facing `(group, name)` pairs to engine keys.
//! No validation happens here; the engine decides what keys it accepts.

use jobhands_protocols::{GroupMatcher, JobKey};

/// The `(group, name)` pair addressing exactly one job.
pub type JobIdentity = JobKey;

/// Map a group and name to the engine key of a single job.
pub fn resolve_identity(group: &str, name: &str) -> JobIdentity {
    JobKey::new(group, name)
}

/// Matcher selecting every job regardless of group.
pub fn match_any_group() -> GroupMatcher {
    GroupMatcher::Any
}

/// Matcher selecting the jobs whose group equals `group` exactly.
pub fn match_group(group: &str) -> GroupMatcher {
    GroupMatcher::Equals(group.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_identity() {
        let key = resolve_identity("billing", "invoice-run");
        assert_eq!(key.group, "billing");
        assert_eq!(key.name, "invoice-run");
    }

    #[test]
    fn test_resolve_identity_passes_empty_strings_through() {
        let key = resolve_identity("", "");
        assert!(key.group.is_empty());
        assert!(key.name.is_empty());
    }

    #[test]
    fn test_match_any_group() {
        let matcher = match_any_group();
        assert!(matcher.matches(&resolve_identity("a", "1")));
        assert!(matcher.matches(&resolve_identity("b", "2")));
    }

    #[test]
    fn test_match_group_exact() {
        let matcher = match_group("grpA");
        assert!(matcher.matches(&resolve_identity("grpA", "job1")));
        assert!(!matcher.matches(&resolve_identity("grpB", "job3")));
        assert!(!matcher.matches(&resolve_identity("grp*", "job1")));
    }
}
