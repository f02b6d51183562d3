//! Skill system domain types.
//!
//! Two layers live here: the raw data shapes (`SkillData`, `ProfessionData`,
//! `SkillNode`) exactly as the calculator ships them, and the normalized
//! `Skill` / `Profession` types the catalog is built from.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Raw data
// ---------------------------------------------------------------------------

/// Top-level skill data document.
///
/// `skills` is keyed by profession key (e.g. `"combat_marksman"`).
/// `skill_names` maps skill ids to human-readable titles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: BTreeMap<String, ProfessionData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skill_names: BTreeMap<String, String>,
}

/// One profession as it appears in the data: two anchors plus branch columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub novice: Option<SkillNode>,
    #[serde(default)]
    pub master: Option<SkillNode>,
    /// Columns ordered entry-level first. `null` cells are layout placeholders.
    #[serde(default, deserialize_with = "null_as_default")]
    pub trees: Vec<Vec<Option<SkillNode>>>,
}

/// A single skill entry in the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills_required: Vec<String>,
    #[serde(default, deserialize_with = "lenient_point_cost")]
    pub skillpoint_cost: u32,
    #[serde(default)]
    pub mods: Option<BTreeMap<String, ModifierValue>>,
    #[serde(default)]
    pub xp_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_xp_cost")]
    pub xp_cost: Option<i64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A cost as it may appear in hand-edited data: an integer, an integral
/// float such as `10.0`, or a numeric string such as `"10"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    /// The whole-number reading. A blank string reads as zero.
    fn whole(&self) -> Result<i64, String> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Float(f) => whole_from_float(*f),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(0);
                }
                if let Ok(n) = text.parse::<i64>() {
                    return Ok(n);
                }
                match text.parse::<f64>() {
                    Ok(f) => whole_from_float(f),
                    Err(_) => Err(format!("\"{text}\" is not a number")),
                }
            }
        }
    }
}

fn whole_from_float(f: f64) -> Result<i64, String> {
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(format!("{f} is not a whole number"));
    }
    // i64::MAX is not representable as f64; the cast rounds it up to 2^63
    if f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(format!("{f} is out of range"));
    }
    Ok(f as i64)
}

fn non_negative_cost<E: serde::de::Error>(field: &str, raw: &LooseNumber) -> Result<i64, E> {
    let n = raw
        .whole()
        .map_err(|reason| E::custom(format!("{field}: {reason}")))?;
    if n < 0 {
        return Err(E::custom(format!("{field}: {n} is negative")));
    }
    Ok(n)
}

/// `skillpoint_cost`: missing or `null` is zero.
fn lenient_point_cost<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<LooseNumber>::deserialize(deserializer)? else {
        return Ok(0);
    };
    let n = non_negative_cost::<D::Error>("skillpoint_cost", &raw)?;
    u32::try_from(n).map_err(|_| D::Error::custom(format!("skillpoint_cost: {n} is out of range")))
}

/// `xp_cost`: missing or `null` means the skill has no experience cost.
fn lenient_xp_cost<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LooseNumber>::deserialize(deserializer)? {
        Some(raw) => non_negative_cost::<D::Error>("xp_cost", &raw).map(Some),
        None => Ok(None),
    }
}

/// A modifier value as found in the data.
///
/// The data is loosely typed: most values are numbers, some are numeric
/// strings, a few are free text. Only the numeric reading counts towards
/// aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModifierValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl ModifierValue {
    /// The finite numeric reading of this value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Other(_) => None,
        }
    }
}

impl From<f64> for ModifierValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ModifierValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Normalized types
// ---------------------------------------------------------------------------

/// Categorized experience cost, independent of the point budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Category label; may be blank in the data.
    pub category: String,
    pub cost: i64,
}

/// A selectable skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    /// Key of the owning profession.
    pub profession: String,
    /// Ordered, duplicate-free prerequisite ids.
    pub prerequisites: Vec<String>,
    pub point_cost: u32,
    pub modifiers: BTreeMap<String, ModifierValue>,
    pub experience: Option<Experience>,
}

impl Skill {
    /// Normalize a raw data node owned by `profession`.
    pub fn from_node(profession: &str, node: &SkillNode) -> Self {
        let mut prerequisites: Vec<String> = Vec::with_capacity(node.skills_required.len());
        for req in &node.skills_required {
            if !prerequisites.contains(req) {
                prerequisites.push(req.clone());
            }
        }

        let experience = match (&node.xp_type, node.xp_cost) {
            (None, None) => None,
            (category, cost) => Some(Experience {
                category: category.clone().unwrap_or_default(),
                cost: cost.unwrap_or(0),
            }),
        };

        Self {
            id: node.name.clone(),
            profession: profession.to_string(),
            prerequisites,
            point_cost: node.skillpoint_cost,
            modifiers: node.mods.clone().unwrap_or_default(),
            experience,
        }
    }
}

/// A profession's fixed topology, by skill id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    pub key: String,
    pub novice: Option<String>,
    pub master: Option<String>,
    /// Branch columns, entry-level first. `None` marks an empty grid cell.
    pub columns: Vec<Vec<Option<String>>>,
}

impl Profession {
    /// Every skill id in this profession: novice, master, then the grid
    /// column by column.
    pub fn skill_ids(&self) -> impl Iterator<Item = &str> {
        self.novice
            .iter()
            .chain(self.master.iter())
            .chain(self.columns.iter().flatten().flatten())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_node_deserialize_with_defaults() {
        let node: SkillNode = serde_json::from_str(r#"{"name": "combat_brawler_novice"}"#).unwrap();
        assert_eq!(node.name, "combat_brawler_novice");
        assert!(node.skills_required.is_empty());
        assert_eq!(node.skillpoint_cost, 0);
        assert!(node.mods.is_none());
    }

    #[test]
    fn test_skill_node_null_fields_fall_back() {
        let node: SkillNode = serde_json::from_str(
            r#"{"name": "a", "skills_required": null, "skillpoint_cost": null, "extra": 3}"#,
        )
        .unwrap();
        assert!(node.skills_required.is_empty());
        assert_eq!(node.skillpoint_cost, 0);
    }

    #[test]
    fn test_skill_node_accepts_loose_costs() {
        let node: SkillNode = serde_json::from_str(
            r#"{"name": "a", "skillpoint_cost": 10.0, "xp_cost": "1000"}"#,
        )
        .unwrap();
        assert_eq!(node.skillpoint_cost, 10);
        assert_eq!(node.xp_cost, Some(1000));

        let node: SkillNode = serde_json::from_str(
            r#"{"name": "a", "skillpoint_cost": " 10 ", "xp_cost": 1000.0}"#,
        )
        .unwrap();
        assert_eq!(node.skillpoint_cost, 10);
        assert_eq!(node.xp_cost, Some(1000));

        let node: SkillNode =
            serde_json::from_str(r#"{"name": "a", "skillpoint_cost": "", "xp_cost": null}"#).unwrap();
        assert_eq!(node.skillpoint_cost, 0);
        assert_eq!(node.xp_cost, None);
    }

    #[test]
    fn test_skill_node_rejects_bad_costs() {
        let err = |json: &str| serde_json::from_str::<SkillNode>(json).unwrap_err().to_string();

        assert!(err(r#"{"name": "a", "skillpoint_cost": -5}"#).contains("skillpoint_cost: -5 is negative"));
        assert!(err(r#"{"name": "a", "skillpoint_cost": 2.5}"#).contains("not a whole number"));
        assert!(err(r#"{"name": "a", "skillpoint_cost": "abc"}"#).contains("\"abc\" is not a number"));
        assert!(err(r#"{"name": "a", "skillpoint_cost": 5000000000}"#).contains("out of range"));
        assert!(err(r#"{"name": "a", "xp_cost": "-100"}"#).contains("xp_cost: -100 is negative"));
        assert!(err(r#"{"name": "a", "xp_cost": "12.5"}"#).contains("xp_cost"));
    }

    #[test]
    fn test_trees_allow_placeholders() {
        let prof: ProfessionData = serde_json::from_str(
            r#"{"name": "p", "trees": [[{"name": "a"}, null], []]}"#,
        )
        .unwrap();
        assert_eq!(prof.trees.len(), 2);
        assert!(prof.trees[0][1].is_none());
    }

    #[test]
    fn test_modifier_value_numeric_reading() {
        let mods: BTreeMap<String, ModifierValue> = serde_json::from_str(
            r#"{"a": 5, "b": " 2.5 ", "c": "fast", "d": null, "e": true}"#,
        )
        .unwrap();
        assert_eq!(mods["a"].as_number(), Some(5.0));
        assert_eq!(mods["b"].as_number(), Some(2.5));
        assert_eq!(mods["c"].as_number(), None);
        assert_eq!(mods["d"].as_number(), None);
        assert_eq!(mods["e"].as_number(), None);
    }

    #[test]
    fn test_modifier_value_rejects_non_finite_text() {
        assert_eq!(ModifierValue::from("inf").as_number(), None);
        assert_eq!(ModifierValue::from("NaN").as_number(), None);
        assert_eq!(ModifierValue::from("").as_number(), None);
    }

    #[test]
    fn test_skill_from_node_dedupes_prerequisites() {
        let node = SkillNode {
            name: "b".into(),
            skills_required: vec!["a".into(), "c".into(), "a".into()],
            skillpoint_cost: 15,
            ..Default::default()
        };
        let skill = Skill::from_node("prof", &node);
        assert_eq!(skill.prerequisites, vec!["a", "c"]);
        assert_eq!(skill.profession, "prof");
        assert_eq!(skill.point_cost, 15);
        assert!(skill.experience.is_none());
    }

    #[test]
    fn test_skill_from_node_experience() {
        let node = SkillNode {
            name: "a".into(),
            xp_cost: Some(1000),
            ..Default::default()
        };
        let skill = Skill::from_node("prof", &node);
        assert_eq!(
            skill.experience,
            Some(Experience {
                category: String::new(),
                cost: 1000
            })
        );
    }

    #[test]
    fn test_profession_skill_ids_order() {
        let prof = Profession {
            key: "p".into(),
            novice: Some("n".into()),
            master: Some("m".into()),
            columns: vec![vec![Some("a1".into()), None], vec![Some("b1".into())]],
        };
        let ids: Vec<&str> = prof.skill_ids().collect();
        assert_eq!(ids, vec!["n", "m", "a1", "b1"]);
    }
}
