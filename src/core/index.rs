//! Top-level index construction
//!
//! Collapses the planner's flat list of top-level names into the minimal
//! set of index entries: every dropped name stays reachable by following
//! nesting from a kept ancestor.

use crate::models::plan::ModulePath;

/// Sort the names, then drop every name that is a strict descendant of the
/// most recently kept name. Ancestry is decided on name segments, so
/// `foobar` is never treated as nested under `foo`.
pub fn build_index(names: &[ModulePath]) -> Vec<ModulePath> {
    let mut sorted: Vec<ModulePath> = names.to_vec();
    sorted.sort();

    let mut kept: Vec<ModulePath> = Vec::new();
    for name in sorted {
        if kept
            .last()
            .is_some_and(|prev| name.is_descendant_of(prev))
        {
            continue;
        }
        kept.push(name);
    }
    kept
}
