//! Transitive-edge pruning
//!
//! For display and export: a direct prerequisite that is already implied
//! through a longer path adds noise, so it gets dropped. Only the
//! "closest" edges survive. The plan itself is never pruned in place;
//! callers get a new value.

use super::models::StudyPlan;
use std::collections::{HashMap, HashSet};

/// Remove every direct prerequisite that is also reachable transitively
/// through one of the same course's other direct prerequisites.
///
/// Transitive closures are memoized per course id, which keeps
/// diamond-shaped graphs linear instead of exponential. A visited set
/// keeps the walk terminating when user-created edges form a cycle; edges
/// inside a cycle imply each other, so both directions read as redundant.
#[must_use]
pub fn prune_plan_dependencies(plan: &StudyPlan) -> StudyPlan {
    let mut next = plan.clone();

    let direct: HashMap<String, Vec<String>> = plan
        .all_courses()
        .into_iter()
        .map(|course| (course.id.clone(), course.dependencies.clone()))
        .collect();
    let mut memo: HashMap<String, HashSet<String>> = HashMap::new();

    for year in &mut next.years {
        for sem in &mut year.semesters {
            for course in &mut sem.courses {
                if course.dependencies.len() < 2 {
                    continue;
                }
                let original = course.dependencies.clone();
                course.dependencies.retain(|dep| {
                    let redundant = original.iter().any(|other| {
                        other != dep
                            && transitive_deps(other, &direct, &mut memo, &mut HashSet::new())
                                .contains(dep)
                    });
                    !redundant
                });
            }
        }
    }

    next
}

/// Every course id reachable from `course_id` by following prerequisite
/// edges. Ids on the current walk path contribute nothing, which is what
/// cuts cycles.
fn transitive_deps(
    course_id: &str,
    direct: &HashMap<String, Vec<String>>,
    memo: &mut HashMap<String, HashSet<String>>,
    in_progress: &mut HashSet<String>,
) -> HashSet<String> {
    if let Some(cached) = memo.get(course_id) {
        return cached.clone();
    }
    if !in_progress.insert(course_id.to_string()) {
        return HashSet::new();
    }

    let mut result = HashSet::new();
    if let Some(deps) = direct.get(course_id) {
        for dep in deps {
            result.insert(dep.clone());
            result.extend(transitive_deps(dep, direct, memo, in_progress));
        }
    }

    in_progress.remove(course_id);
    memo.insert(course_id.to_string(), result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Semester, Year};

    fn plan_from_edges(edges: &[(&str, &[&str])]) -> StudyPlan {
        let mut sem = Semester::new(1, "1° Cuatrimestre".to_string());
        for (id, deps) in edges {
            let mut course = Course::new((*id).to_string(), format!("Materia {id}"), 0);
            course.dependencies = deps.iter().map(|d| (*d).to_string()).collect();
            sem.courses.push(course);
        }
        let mut year = Year::new(1, "Año 1".to_string());
        year.semesters.push(sem);
        let mut plan = StudyPlan::new("Plan".to_string(), String::new());
        plan.years.push(year);
        plan
    }

    fn deps_of<'a>(plan: &'a StudyPlan, id: &str) -> &'a [String] {
        &plan.course(id).unwrap().dependencies
    }

    #[test]
    fn test_redundant_diamond_edge_is_dropped() {
        // c3 -> [c1, c2], c2 -> [c1]: the direct edge to c1 is implied
        let plan = plan_from_edges(&[("c1", &[]), ("c2", &["c1"]), ("c3", &["c1", "c2"])]);
        let pruned = prune_plan_dependencies(&plan);

        assert_eq!(deps_of(&pruned, "c3"), ["c2".to_string()]);
        assert_eq!(deps_of(&pruned, "c2"), ["c1".to_string()]);
    }

    #[test]
    fn test_independent_edges_survive() {
        let plan = plan_from_edges(&[("c1", &[]), ("c2", &[]), ("c3", &["c1", "c2"])]);
        let pruned = prune_plan_dependencies(&plan);
        assert_eq!(
            deps_of(&pruned, "c3"),
            ["c1".to_string(), "c2".to_string()]
        );
    }

    #[test]
    fn test_multi_hop_redundancy() {
        // c4 -> [c1, c3] with c3 -> c2 -> c1: c1 is two hops away
        let plan = plan_from_edges(&[
            ("c1", &[]),
            ("c2", &["c1"]),
            ("c3", &["c2"]),
            ("c4", &["c1", "c3"]),
        ]);
        let pruned = prune_plan_dependencies(&plan);
        assert_eq!(deps_of(&pruned, "c4"), ["c3".to_string()]);
    }

    #[test]
    fn test_kept_edges_preserve_order() {
        let plan = plan_from_edges(&[
            ("c1", &[]),
            ("c2", &["c1"]),
            ("c3", &[]),
            ("c4", &["c3", "c1", "c2"]),
        ]);
        let pruned = prune_plan_dependencies(&plan);
        // c1 drops (via c2); c3 and c2 keep their relative order
        assert_eq!(
            deps_of(&pruned, "c4"),
            ["c3".to_string(), "c2".to_string()]
        );
    }

    #[test]
    fn test_single_dependency_untouched() {
        let plan = plan_from_edges(&[("c1", &[]), ("c2", &["c1"])]);
        let pruned = prune_plan_dependencies(&plan);
        assert_eq!(pruned, plan);
    }

    #[test]
    fn test_unknown_dependency_ids_survive() {
        // dangling edges have no closure, so nothing implies them
        let plan = plan_from_edges(&[("c1", &[]), ("c2", &["ghost", "c1"])]);
        let pruned = prune_plan_dependencies(&plan);
        assert_eq!(
            deps_of(&pruned, "c2"),
            ["ghost".to_string(), "c1".to_string()]
        );
    }

    #[test]
    fn test_terminates_on_cycles() {
        // a and b imply each other; both edges on c read as redundant
        let plan = plan_from_edges(&[("a", &["b"]), ("b", &["a"]), ("c", &["a", "b"])]);
        let pruned = prune_plan_dependencies(&plan);
        assert!(deps_of(&pruned, "c").is_empty());
    }
}
