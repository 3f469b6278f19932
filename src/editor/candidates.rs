//! Candidate list construction for the connector search box.
//!
//! Every keystroke rebuilds the list from the full catalog. Existing endpoints
//! are deduplicated by their `"<package>-<endpoint>"` key in an [`IndexMap`]:
//! a later entry with the same key replaces the earlier value but keeps its
//! position, so the result order is the order in which keys were first seen.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{Endpoint, Package, PackageId};

/// One row of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Candidate {
    /// An endpoint offered by a catalog package.
    Existing {
        package: PackageId,
        endpoint: Endpoint,
    },
    /// "Create a new endpoint named after the typed text."
    CreateNew,
}

impl Candidate {
    /// Dedup key of an existing candidate; `None` for [`Candidate::CreateNew`].
    pub fn key(&self) -> Option<String> {
        match self {
            Candidate::Existing { package, endpoint } => {
                Some(candidate_key(&package.name, &endpoint.name))
            }
            Candidate::CreateNew => None,
        }
    }

    pub fn is_create_new(&self) -> bool {
        matches!(self, Candidate::CreateNew)
    }

    /// Label shown in the list: `http Client`, or empty for the create row.
    pub fn label(&self) -> String {
        match self {
            Candidate::Existing { package, endpoint } => {
                format!("{} {}", package.name, endpoint.name)
            }
            Candidate::CreateNew => String::new(),
        }
    }
}

/// Dedup key for an endpoint of a package.
pub fn candidate_key(package_name: &str, endpoint_name: &str) -> String {
    format!("{}-{}", package_name, endpoint_name)
}

/// Case-insensitive substring match on package or endpoint name.
///
/// `needle` must already be lower-cased; an empty needle matches everything.
fn matches_query(package_name: &str, endpoint_name: &str, needle: &str) -> bool {
    needle.is_empty()
        || package_name.to_lowercase().contains(needle)
        || endpoint_name.to_lowercase().contains(needle)
}

fn collect_existing(catalog: &[Package], needle: &str) -> IndexMap<String, Candidate> {
    let mut by_key = IndexMap::new();
    for pkg in catalog {
        for endpoint in &pkg.endpoints {
            if !matches_query(&pkg.name, &endpoint.name, needle) {
                continue;
            }
            by_key.insert(
                candidate_key(&pkg.name, &endpoint.name),
                Candidate::Existing {
                    package: pkg.id(),
                    endpoint: endpoint.clone(),
                },
            );
        }
    }
    by_key
}

/// Build the suggestion list for `query`.
///
/// A non-empty query always ends the list with exactly one
/// [`Candidate::CreateNew`], even when nothing in the catalog matched.
pub fn build_candidates(catalog: &[Package], query: &str) -> Vec<Candidate> {
    let needle = query.to_lowercase();
    let mut candidates: Vec<Candidate> = collect_existing(catalog, &needle).into_values().collect();
    if !query.is_empty() {
        candidates.push(Candidate::CreateNew);
    }
    candidates
}

/// Every endpoint in the catalog, deduplicated, without a create row.
pub fn list_all(catalog: &[Package]) -> Vec<Candidate> {
    collect_existing(catalog, "").into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> Package {
        Package::new("wso2", "http", &["Client", "Listener"])
    }

    #[test]
    fn query_is_case_insensitive() {
        let upper = build_candidates(&[http()], "CLI");
        let lower = build_candidates(&[http()], "cli");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn package_name_match_includes_all_endpoints() {
        let c = build_candidates(&[http()], "htt");
        let keys: Vec<_> = c.iter().filter_map(Candidate::key).collect();
        assert_eq!(keys, vec!["http-Client", "http-Listener"]);
        assert!(c.last().unwrap().is_create_new());
    }

    #[test]
    fn no_match_still_offers_create_new() {
        let c = build_candidates(&[http()], "zzz");
        assert_eq!(c, vec![Candidate::CreateNew]);
    }

    #[test]
    fn empty_catalog() {
        assert!(build_candidates(&[], "").is_empty());
        assert_eq!(build_candidates(&[], "x"), vec![Candidate::CreateNew]);
    }

    #[test]
    fn create_new_has_no_key() {
        assert_eq!(Candidate::CreateNew.key(), None);
        assert_eq!(Candidate::CreateNew.label(), "");
    }
}
