//! Property-based tests for repository names and fingerprints.
//!
//! These tests use proptest to generate random paths and field values and
//! verify that the naming and hashing invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::github::{GitHubRepository, Owner};
    use crate::path::last_path_segment;
    use crate::repository::{name_of, Repository};
    use crate::workflow::WorkflowPreferences;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{1,16}"
    }

    fn unix_path() -> impl Strategy<Value = (String, String)> {
        prop::collection::vec(segment(), 1..6).prop_map(|segments| {
            let last = segments.last().cloned().unwrap_or_default();
            (format!("/{}", segments.join("/")), last)
        })
    }

    fn windows_path() -> impl Strategy<Value = (String, String)> {
        ("[A-Z]", prop::collection::vec(segment(), 1..6)).prop_map(|(drive, segments)| {
            let last = segments.last().cloned().unwrap_or_default();
            (format!("{}:\\{}", drive, segments.join("\\")), last)
        })
    }

    // ============================================================================
    // name derivation property tests
    // ============================================================================

    proptest! {
        /// Property: without a hosting reference, name is the last path segment
        #[test]
        fn name_is_last_segment_of_unix_path((path, last) in unix_path()) {
            let repo = Repository::new(path.as_str(), 1, None, false);
            prop_assert_eq!(repo.name(), last.as_str());
        }

        /// Property: backslash-separated paths are split the same way
        #[test]
        fn name_is_last_segment_of_windows_path((path, last) in windows_path()) {
            let repo = Repository::new(path.as_str(), 1, None, false);
            prop_assert_eq!(repo.name(), last.as_str());
        }

        /// Property: trailing separators do not change the name
        #[test]
        fn trailing_separator_is_ignored((path, last) in unix_path()) {
            let repo = Repository::new(format!("{}/", path), 1, None, false);
            prop_assert_eq!(repo.name(), last.as_str());
        }

        /// Property: drive roots fall back to the full path
        #[test]
        fn drive_root_name_is_full_path(drive in "[A-Z]") {
            let path = format!("{}:\\", drive);
            let repo = Repository::new(path.as_str(), 1, None, false);
            prop_assert_eq!(repo.name(), path.as_str());
        }

        /// Property: name is never empty for a non-empty path
        #[test]
        fn name_is_never_empty(path in "[a-zA-Z0-9/\\\\:_. -]{1,40}") {
            let repo = Repository::new(path.as_str(), 1, None, false);
            prop_assert!(!repo.name().is_empty(), "empty name for path {:?}", path);
        }

        /// Property: a hosting reference's name wins over any path
        #[test]
        fn hosted_name_wins(path in ".{1,40}", name in segment(), login in segment()) {
            let hosted = Arc::new(GitHubRepository::new(Owner::new(login.clone()), name.clone()));
            let repo = Repository::new(path.as_str(), 1, Some(hosted), false);
            prop_assert_eq!(repo.name(), name.as_str());
            prop_assert_eq!(name_of(&repo), format!("{}/{}", login, name));
        }

        /// Property: the last segment never contains a separator
        #[test]
        fn last_segment_has_no_separator(path in ".*") {
            let segment = last_path_segment(&path);
            prop_assert!(!segment.contains('/') && !segment.contains('\\'));
        }
    }

    // ============================================================================
    // hash property tests
    // ============================================================================

    proptest! {
        /// Property: equal constituent fields give equal fingerprints
        #[test]
        fn hash_is_deterministic(
            (path, _) in unix_path(),
            id in any::<i64>(),
            missing in any::<bool>(),
            tutorial in any::<Option<bool>>(),
        ) {
            let build = || Repository::from_parts(
                path.as_str(),
                id,
                None,
                missing,
                WorkflowPreferences::default(),
                tutorial,
            );
            let repo = build();
            prop_assert_eq!(repo.hash(), repo.hash());
            prop_assert_eq!(repo.hash(), build().hash());
        }

        /// Property: changing the id changes the fingerprint
        #[test]
        fn hash_tracks_id((path, _) in unix_path(), a in any::<i64>(), b in any::<i64>()) {
            prop_assume!(a != b);
            let left = Repository::new(path.as_str(), a, None, false);
            let right = Repository::new(path.as_str(), b, None, false);
            prop_assert_ne!(left.hash(), right.hash());
        }

        /// Property: changing the missing flag changes the fingerprint
        #[test]
        fn hash_tracks_missing((path, _) in unix_path(), id in any::<i64>()) {
            let repo = Repository::new(path.as_str(), id, None, false);
            prop_assert_ne!(repo.hash(), repo.with_missing(true).hash());
        }

        /// Property: changing the path changes the fingerprint
        #[test]
        fn hash_tracks_path((a, _) in unix_path(), (b, _) in unix_path()) {
            prop_assume!(a != b);
            let left = Repository::new(a.as_str(), 1, None, false);
            let right = Repository::new(b.as_str(), 1, None, false);
            prop_assert_ne!(left.hash(), right.hash());
        }

        /// Property: linking a hosting reference changes the fingerprint
        #[test]
        fn hash_tracks_hosting_reference((path, _) in unix_path(), name in segment()) {
            let repo = Repository::new(path.as_str(), 1, None, false);
            let hosted = Arc::new(GitHubRepository::new(Owner::new("octocat"), name));
            prop_assert_ne!(repo.hash(), repo.with_github_repository(Some(hosted)).hash());
        }

        /// Property: moving the owner to another host changes the fingerprint
        #[test]
        fn hash_tracks_owner_endpoint((path, _) in unix_path(), host in "[a-z]{1,12}") {
            let dotcom = GitHubRepository::new(Owner::new("octocat"), "repo");
            let enterprise = GitHubRepository::new(
                Owner::new("octocat").with_endpoint(format!("https://{}.example.com/api/v3", host)),
                "repo",
            );
            let left = Repository::new(path.as_str(), 1, Some(Arc::new(dotcom)), false);
            let right = Repository::new(path.as_str(), 1, Some(Arc::new(enterprise)), false);
            prop_assert_ne!(&left, &right);
            prop_assert_ne!(left.hash(), right.hash());
        }

        /// Property: recording the owner's id changes the fingerprint
        #[test]
        fn hash_tracks_owner_id((path, _) in unix_path(), owner_id in any::<i64>()) {
            let anonymous = GitHubRepository::new(Owner::new("octocat"), "repo");
            let known = GitHubRepository::new(Owner::new("octocat").with_id(owner_id), "repo");
            let left = Repository::new(path.as_str(), 1, Some(Arc::new(anonymous)), false);
            let right = Repository::new(path.as_str(), 1, Some(Arc::new(known)), false);
            prop_assert_ne!(left.hash(), right.hash());
        }
    }
}
