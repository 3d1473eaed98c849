//! Discovery of the builds composed into the root build.
//!
//! The host exposes two views: the legacy included-builds view (direct
//! includes, nested ones reachable through each build) and the flat
//! editable-builds view. Which one to trust depends on the host version and is
//! decided once per aggregation.

use buildscope_api::{BuildGraph, BuildRef, HostVersion};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Hosts at or below this version only offer a reliable legacy view.
pub const EDITABLE_BUILDS_SINCE: HostVersion = HostVersion::new(8, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscoveryStrategy {
    /// Included-builds view only.
    Legacy,
    /// Editable-builds view unless it is empty, then the legacy view.
    PreferEditable,
}

impl DiscoveryStrategy {
    pub fn for_version(version: HostVersion) -> Self {
        if version <= EDITABLE_BUILDS_SINCE {
            DiscoveryStrategy::Legacy
        } else {
            DiscoveryStrategy::PreferEditable
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildView {
    Included,
    Editable,
}

/// The fallback rule: the editable view is preferred but is sometimes empty
/// even though included builds exist, in which case the legacy view wins.
pub fn select_view(strategy: DiscoveryStrategy, graph: &BuildGraph) -> BuildView {
    match strategy {
        DiscoveryStrategy::Legacy => BuildView::Included,
        DiscoveryStrategy::PreferEditable if graph.editable_builds.is_empty() => {
            BuildView::Included
        }
        DiscoveryStrategy::PreferEditable => BuildView::Editable,
    }
}

/// Lists the builds to visit, in discovery order, without duplicates and
/// without the root build itself.
pub fn discover_builds<'a>(
    strategy: DiscoveryStrategy,
    graph: &'a BuildGraph,
    root_build: &str,
) -> Vec<&'a BuildRef> {
    let mut found: IndexMap<&str, &BuildRef> = IndexMap::new();

    match select_view(strategy, graph) {
        BuildView::Editable => {
            for build in &graph.editable_builds {
                if build.name != root_build {
                    found.entry(build.name.as_str()).or_insert(build);
                }
            }
        }
        BuildView::Included => {
            let mut queue: VecDeque<&BuildRef> = graph.included_builds.iter().collect();
            while let Some(build) = queue.pop_front() {
                if build.name == root_build || found.contains_key(build.name.as_str()) {
                    continue;
                }
                found.insert(build.name.as_str(), build);
                queue.extend(build.included.iter());
            }
        }
    }

    found.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(builds: &[&BuildRef]) -> Vec<String> {
        builds.iter().map(|b| b.name.clone()).collect()
    }

    #[test]
    fn version_marker_selects_strategy() {
        assert_eq!(
            DiscoveryStrategy::for_version(HostVersion::new(7, 6, 3)),
            DiscoveryStrategy::Legacy
        );
        assert_eq!(
            DiscoveryStrategy::for_version(HostVersion::new(8, 0, 0)),
            DiscoveryStrategy::Legacy
        );
        assert_eq!(
            DiscoveryStrategy::for_version(HostVersion::new(8, 0, 1)),
            DiscoveryStrategy::PreferEditable
        );
        assert_eq!(
            DiscoveryStrategy::for_version(HostVersion::new(8, 5, 0)),
            DiscoveryStrategy::PreferEditable
        );
    }

    #[test]
    fn empty_editable_view_falls_back_to_included() {
        let graph = BuildGraph {
            included_builds: vec![BuildRef::new("a"), BuildRef::new("b")],
            editable_builds: vec![],
        };
        assert_eq!(
            select_view(DiscoveryStrategy::PreferEditable, &graph),
            BuildView::Included
        );
        assert_eq!(
            names(&discover_builds(DiscoveryStrategy::PreferEditable, &graph, "root")),
            vec!["a", "b"]
        );
    }

    #[test]
    fn non_empty_editable_view_wins() {
        let graph = BuildGraph {
            included_builds: vec![BuildRef::new("a")],
            editable_builds: vec![BuildRef::new("a"), BuildRef::new("nested")],
        };
        assert_eq!(
            names(&discover_builds(DiscoveryStrategy::PreferEditable, &graph, "root")),
            vec!["a", "nested"]
        );
        assert_eq!(
            names(&discover_builds(DiscoveryStrategy::Legacy, &graph, "root")),
            vec!["a"]
        );
    }

    #[test]
    fn legacy_view_reaches_nested_builds_once() {
        let shared = BuildRef::new("shared");
        let graph = BuildGraph {
            included_builds: vec![
                BuildRef::new("a")
                    .with_included(shared.clone())
                    .with_included(BuildRef::new("root")),
                BuildRef::new("b").with_included(shared),
            ],
            editable_builds: vec![],
        };
        assert_eq!(
            names(&discover_builds(DiscoveryStrategy::Legacy, &graph, "root")),
            vec!["a", "b", "shared"]
        );
    }
}
