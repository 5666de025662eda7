//! Dependency resolution: selection → ordered, deduplicated install plan
//!
//! Depth-first expansion with a visited set marked before recursion, so the
//! walk terminates even on malformed (cyclic) dependency data. Dependencies
//! are emitted before their dependents; the selection is processed in caller
//! order, which makes the plan deterministic for a given selection.
//!
//! Unknown names are user input noise, not errors: they are collected on the
//! plan for the caller to report and otherwise skipped.

use std::collections::HashSet;

use crate::registry::Registry;

/// Resolver output: the execution order plus the names it had to drop
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    /// Dependency-ordered, deduplicated component names
    pub ordered: Vec<String>,
    /// Selected names not present in the registry, in first-seen order
    pub unknown: Vec<String>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Expand a selection into a dependency-ordered plan
pub fn resolve(registry: &Registry, selection: &[String]) -> Plan {
    let mut plan = Plan::default();
    let mut visited = HashSet::new();

    for name in selection {
        visit(registry, name, &mut visited, &mut plan);
    }
    plan
}

fn visit(registry: &Registry, name: &str, visited: &mut HashSet<String>, plan: &mut Plan) {
    if visited.contains(name) {
        return;
    }
    // Mark before recursing: cyclic declarations resolve once instead of
    // recursing forever
    visited.insert(name.to_string());

    let Some(component) = registry.get(name) else {
        if !plan.unknown.iter().any(|n| n == name) {
            plan.unknown.push(name.to_string());
        }
        return;
    };

    for dep in component.spec().dependencies {
        visit(registry, dep, visited, plan);
    }
    plan.ordered.push(name.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::fixtures::boxed;

    fn names(selection: &[&str]) -> Vec<String> {
        selection.iter().map(|s| (*s).to_string()).collect()
    }

    fn abc_registry() -> Registry {
        Registry::with_components(vec![
            boxed("a", false, &[]),
            boxed("b", false, &["a"]),
            boxed("c", false, &["a", "b"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_selection_empty_plan() {
        let plan = resolve(&abc_registry(), &[]);
        assert!(plan.is_empty());
        assert!(plan.unknown.is_empty());
    }

    #[test]
    fn test_transitive_dependencies_precede() {
        let plan = resolve(&abc_registry(), &names(&["c"]));
        assert_eq!(plan.ordered, ["a", "b", "c"]);
    }

    #[test]
    fn test_duplicates_deduplicated_at_first_occurrence() {
        let plan = resolve(&abc_registry(), &names(&["b", "c", "b", "a"]));
        assert_eq!(plan.ordered, ["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_names_skipped_and_reported() {
        let plan = resolve(&abc_registry(), &names(&["ghost", "a"]));
        assert_eq!(plan.ordered, ["a"]);
        assert_eq!(plan.unknown, ["ghost"]);
    }

    #[test]
    fn test_resolve_is_idempotent_over_its_output() {
        let registry = abc_registry();
        let first = resolve(&registry, &names(&["c", "b"]));
        let second = resolve(&registry, &first.ordered);
        assert_eq!(second.ordered, first.ordered);
    }

    #[test]
    fn test_selection_order_determines_plan_order() {
        let registry = Registry::with_components(vec![
            boxed("x", false, &[]),
            boxed("y", false, &[]),
        ])
        .unwrap();
        assert_eq!(resolve(&registry, &names(&["y", "x"])).ordered, ["y", "x"]);
        assert_eq!(resolve(&registry, &names(&["x", "y"])).ordered, ["x", "y"]);
    }

    #[test]
    fn test_cyclic_declarations_resolve_once() {
        // Bypasses registry validation: the resolver itself must still
        // terminate on malformed data
        let registry = Registry::unvalidated(vec![
            boxed("a", false, &["b"]),
            boxed("b", false, &["a"]),
        ]);
        let plan = resolve(&registry, &names(&["a"]));
        assert_eq!(plan.ordered, ["b", "a"]);
    }

    #[test]
    fn test_self_dependency_resolves_once() {
        let registry = Registry::unvalidated(vec![boxed("a", false, &["a"])]);
        let plan = resolve(&registry, &names(&["a"]));
        assert_eq!(plan.ordered, ["a"]);
    }

    #[test]
    fn test_every_dependency_precedes_dependent_in_builtin() {
        let registry = Registry::builtin().unwrap();
        let all: Vec<String> = registry.iter().map(|c| c.spec().name.to_string()).collect();
        let plan = resolve(&registry, &all);

        let position = |name: &str| plan.ordered.iter().position(|n| n == name);
        for component in registry.iter() {
            let spec = component.spec();
            for dep in spec.dependencies {
                assert!(
                    position(dep) < position(spec.name),
                    "{dep} must precede {}",
                    spec.name
                );
            }
        }
        assert_eq!(plan.ordered.len(), registry.len());
    }
}
