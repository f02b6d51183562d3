//! The skill catalog.
//!
//! Built once from `SkillData` by flattening every profession's novice and
//! master anchors and grid cells into a single `id -> Skill` map. Structural
//! problems (duplicate ids, unknown prerequisites, cycles, an empty catalog)
//! are rejected here so the selection engine can assume a valid DAG.

pub mod index;
mod validate;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use skillplan_types::error::CatalogError;
use skillplan_types::skill::{Profession, Skill, SkillData, SkillNode};

pub use index::DependencyIndex;

/// Immutable index of every skill across every profession.
#[derive(Debug, Clone)]
pub struct Catalog {
    skills: HashMap<String, Skill>,
    professions: BTreeMap<String, Profession>,
    titles: HashMap<String, String>,
    index: DependencyIndex,
}

impl Catalog {
    /// Build and validate the catalog.
    ///
    /// Fails with `EmptyCatalog` when there are no professions or no skills,
    /// `DuplicateSkill` when two professions (or two different definitions)
    /// claim the same id, `UnknownPrerequisite` for dangling edges and
    /// `PrerequisiteCycle` when the prerequisite graph is not acyclic.
    pub fn build(data: &SkillData) -> Result<Self, CatalogError> {
        let mut skills: HashMap<String, Skill> = HashMap::new();
        let mut professions = BTreeMap::new();

        for (key, prof) in &data.skills {
            let novice = match &prof.novice {
                Some(node) => insert_node(&mut skills, key, node)?,
                None => None,
            };
            let master = match &prof.master {
                Some(node) => insert_node(&mut skills, key, node)?,
                None => None,
            };

            let mut columns = Vec::with_capacity(prof.trees.len());
            for tree in &prof.trees {
                let mut column = Vec::with_capacity(tree.len());
                for cell in tree {
                    let id = match cell {
                        Some(node) => insert_node(&mut skills, key, node)?,
                        None => None,
                    };
                    column.push(id);
                }
                columns.push(column);
            }

            professions.insert(
                key.clone(),
                Profession {
                    key: key.clone(),
                    novice,
                    master,
                    columns,
                },
            );
        }

        if skills.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        validate::check_prerequisites_known(&skills)?;
        validate::check_acyclic(&skills)?;

        let index = DependencyIndex::build(&skills);
        let titles = data
            .skill_names
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        tracing::debug!(
            professions = professions.len(),
            skills = skills.len(),
            "skill catalog built"
        );

        Ok(Self {
            skills,
            professions,
            titles,
            index,
        })
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.skills.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.skills.contains_key(id)
    }

    /// Number of distinct skills.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// All skills, in no particular order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn profession(&self, key: &str) -> Option<&Profession> {
        self.professions.get(key)
    }

    /// All professions, sorted by key.
    pub fn professions(&self) -> impl Iterator<Item = &Profession> {
        self.professions.values()
    }

    /// Key of the profession that owns `id`.
    pub fn profession_of(&self, id: &str) -> Option<&str> {
        self.skills.get(id).map(|s| s.profession.as_str())
    }

    /// Direct prerequisites of `id`; empty for unknown ids.
    pub fn prerequisites(&self, id: &str) -> &[String] {
        self.skills
            .get(id)
            .map(|s| s.prerequisites.as_slice())
            .unwrap_or(&[])
    }

    /// Skills that list `id` as a direct prerequisite.
    pub fn dependents(&self, id: &str) -> &[String] {
        self.index.dependents(id)
    }

    /// Human-readable title for a skill, falling back to its id.
    pub fn display_title<'a>(&'a self, id: &'a str) -> &'a str {
        self.titles.get(id).map(String::as_str).unwrap_or(id)
    }

    /// `id` together with every transitive prerequisite. Empty for unknown ids.
    pub fn prerequisite_closure(&self, id: &str) -> BTreeSet<String> {
        let mut closure = BTreeSet::new();
        if !self.contains(id) {
            return closure;
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if !closure.insert(current.to_string()) {
                continue;
            }
            for req in self.prerequisites(current) {
                if !closure.contains(req) {
                    stack.push(req.as_str());
                }
            }
        }

        closure
    }
}

/// Insert one data node for profession `key`, returning its id, or `None`
/// when the node has no name.
///
/// Re-listing an identical definition under the same profession is tolerated;
/// anything else sharing an id is a duplicate.
fn insert_node(
    skills: &mut HashMap<String, Skill>,
    key: &str,
    node: &SkillNode,
) -> Result<Option<String>, CatalogError> {
    if node.name.trim().is_empty() {
        return Ok(None);
    }

    let skill = Skill::from_node(key, node);
    if let Some(existing) = skills.get(&skill.id) {
        if *existing == skill {
            tracing::debug!(skill = %skill.id, profession = key, "skill listed twice, keeping one");
            return Ok(Some(skill.id));
        }
        return Err(CatalogError::DuplicateSkill {
            id: skill.id,
            first: existing.profession.clone(),
            second: key.to_string(),
        });
    }

    let id = skill.id.clone();
    skills.insert(id.clone(), skill);
    Ok(Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{abc_catalog, data, node, profession, two_profession_catalog};
    use skillplan_types::skill::ProfessionData;

    #[test]
    fn test_build_flattens_anchors_and_grid() {
        let catalog = two_profession_catalog();
        assert_eq!(catalog.len(), 7);
        assert!(catalog.contains("M0"));
        assert!(catalog.contains("M_master"));
        assert!(catalog.contains("trap_1"));
        assert_eq!(catalog.profession_of("trap_1"), Some("outdoors_scout"));

        let marksman = catalog.profession("combat_marksman").unwrap();
        assert_eq!(marksman.novice.as_deref(), Some("M0"));
        assert_eq!(marksman.master.as_deref(), Some("M_master"));
        assert_eq!(marksman.columns.len(), 2);
        assert_eq!(marksman.columns[0][2], None);
    }

    #[test]
    fn test_empty_data_is_rejected() {
        let err = Catalog::build(&SkillData::default()).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCatalog);
    }

    #[test]
    fn test_professions_without_skills_are_rejected() {
        let data = data(vec![("empty", ProfessionData::default())]);
        let err = Catalog::build(&data).unwrap_err();
        assert_eq!(err, CatalogError::EmptyCatalog);
    }

    #[test]
    fn test_nameless_nodes_are_skipped() {
        let data = data(vec![("p", profession(vec![node("", 5, &[]), node("a", 1, &[])]))]);
        let catalog = Catalog::build(&data).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.profession("p").unwrap().columns[0], vec![None, Some("a".to_string())]);
    }

    #[test]
    fn test_duplicate_across_professions_names_both() {
        let data = data(vec![
            ("alpha", profession(vec![node("shared", 5, &[])])),
            ("beta", profession(vec![node("shared", 5, &[])])),
        ]);
        let err = Catalog::build(&data).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSkill {
                id: "shared".to_string(),
                first: "alpha".to_string(),
                second: "beta".to_string(),
            }
        );
    }

    #[test]
    fn test_identical_relisting_in_same_profession_is_tolerated() {
        let mut prof = profession(vec![node("a", 5, &[])]);
        prof.novice = Some(node("a", 5, &[]));
        let catalog = Catalog::build(&data(vec![("p", prof)])).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_conflicting_relisting_in_same_profession_is_rejected() {
        let prof = profession(vec![node("a", 5, &[]), node("a", 6, &[])]);
        let err = Catalog::build(&data(vec![("p", prof)])).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSkill { .. }));
    }

    #[test]
    fn test_prerequisite_closure() {
        let catalog = abc_catalog();
        let closure: Vec<String> = catalog.prerequisite_closure("C").into_iter().collect();
        assert_eq!(closure, vec!["A", "B", "C"]);
        assert!(catalog.prerequisite_closure("missing").is_empty());
    }

    #[test]
    fn test_prerequisite_closure_diamond() {
        let catalog = two_profession_catalog();
        let closure = catalog.prerequisite_closure("M_master");
        let expected: BTreeSet<String> = ["M0", "rifle_1", "rifle_2", "pistol_1", "M_master"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(closure, expected);
    }

    #[test]
    fn test_display_title_falls_back_to_id() {
        let catalog = two_profession_catalog();
        assert_eq!(catalog.display_title("M0"), "Novice Marksman");
        assert_eq!(catalog.display_title("rifle_1"), "rifle_1");
    }

    #[test]
    fn test_unknown_id_lookups_are_empty() {
        let catalog = abc_catalog();
        assert!(catalog.get("Z").is_none());
        assert!(catalog.prerequisites("Z").is_empty());
        assert!(catalog.dependents("Z").is_empty());
        assert_eq!(catalog.profession_of("Z"), None);
    }
}
