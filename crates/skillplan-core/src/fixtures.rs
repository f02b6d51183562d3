//! Shared test fixtures.

use std::collections::BTreeMap;
use std::sync::Arc;

use skillplan_types::skill::{ModifierValue, ProfessionData, SkillData, SkillNode};

use crate::catalog::Catalog;

/// A node with a cost and prerequisites, nothing else.
pub fn node(name: &str, cost: u32, reqs: &[&str]) -> SkillNode {
    SkillNode {
        name: name.to_string(),
        skills_required: reqs.iter().map(|r| r.to_string()).collect(),
        skillpoint_cost: cost,
        ..Default::default()
    }
}

/// Attach numeric modifiers to a node.
pub fn with_mods(mut node: SkillNode, mods: &[(&str, f64)]) -> SkillNode {
    node.mods = Some(
        mods.iter()
            .map(|(k, v)| (k.to_string(), ModifierValue::Number(*v)))
            .collect(),
    );
    node
}

/// Attach an experience cost to a node.
pub fn with_xp(mut node: SkillNode, category: &str, cost: i64) -> SkillNode {
    node.xp_type = Some(category.to_string());
    node.xp_cost = Some(cost);
    node
}

/// A profession whose nodes all sit in one grid column.
pub fn profession(nodes: Vec<SkillNode>) -> ProfessionData {
    ProfessionData {
        name: None,
        novice: None,
        master: None,
        trees: vec![nodes.into_iter().map(Some).collect()],
    }
}

/// Skill data from `(profession key, profession)` pairs.
pub fn data(professions: Vec<(&str, ProfessionData)>) -> SkillData {
    SkillData {
        skills: professions
            .into_iter()
            .map(|(k, p)| (k.to_string(), p))
            .collect::<BTreeMap<_, _>>(),
        skill_names: BTreeMap::new(),
    }
}

/// The A/B/C chain: A (10), B (15, needs A), C (300, needs B).
pub fn abc_catalog() -> Arc<Catalog> {
    let data = data(vec![(
        "test_prof",
        profession(vec![
            node("A", 10, &[]),
            node("B", 15, &["A"]),
            node("C", 300, &["B"]),
        ]),
    )]);
    Arc::new(Catalog::build(&data).expect("fixture catalog is valid"))
}

/// A small two-profession catalog with anchors, a cross-profession edge,
/// modifiers and experience:
///
/// ```text
/// combat_marksman: novice M0 (5)
///   col 0: rifle_1 (10, M0) -> rifle_2 (20, rifle_1)
///   col 1: pistol_1 (10, M0)
///   master: M_master (40, rifle_2 + pistol_1)
/// outdoors_scout: novice S0 (5)
///   col 0: trap_1 (10, S0 + rifle_1)
/// ```
pub fn two_profession_catalog() -> Arc<Catalog> {
    let marksman = ProfessionData {
        name: Some("combat_marksman".to_string()),
        novice: Some(with_xp(
            with_mods(node("M0", 5, &[]), &[("ranged_accuracy", 5.0)]),
            "combat_general",
            1000,
        )),
        master: Some(node("M_master", 40, &["rifle_2", "pistol_1"])),
        trees: vec![
            vec![
                Some(with_xp(
                    with_mods(node("rifle_1", 10, &["M0"]), &[("ranged_accuracy", 3.0), ("rifle_speed", 2.0)]),
                    "combat_rifle",
                    2000,
                )),
                Some(with_xp(node("rifle_2", 20, &["rifle_1"]), "combat_rifle", 3000)),
                None,
            ],
            vec![Some(node("pistol_1", 10, &["M0"]))],
        ],
    };
    let scout = ProfessionData {
        name: Some("outdoors_scout".to_string()),
        novice: Some(with_xp(node("S0", 5, &[]), "", 500)),
        master: None,
        trees: vec![vec![Some(with_mods(node("trap_1", 10, &["S0", "rifle_1"]), &[("trapping", 10.0)]))]],
    };
    let mut data = data(vec![("combat_marksman", marksman), ("outdoors_scout", scout)]);
    data.skill_names
        .insert("M0".to_string(), "Novice Marksman".to_string());
    Arc::new(Catalog::build(&data).expect("fixture catalog is valid"))
}
