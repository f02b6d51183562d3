//! Textual build steps.
//!
//! A build can be described as a sequence of short tokens, which is how the
//! command line replays user gestures:
//!
//! - `+id`  select a skill (with its prerequisites)
//! - `-id`  deselect a skill (and everything that depends on it)
//! - `id`   toggle a skill
//! - `@key` switch the viewed profession
//! - `!`    reset the build

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StepParseError;

/// One user gesture against a build session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "target", rename_all = "snake_case")]
pub enum BuildStep {
    Select(String),
    Deselect(String),
    Toggle(String),
    SwitchProfession(String),
    Reset,
}

impl FromStr for BuildStep {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StepParseError::Empty);
        }
        if s == "!" {
            return Ok(Self::Reset);
        }

        let target = |rest: &str| {
            let rest = rest.trim();
            if rest.is_empty() {
                Err(StepParseError::MissingTarget(s.to_string()))
            } else {
                Ok(rest.to_string())
            }
        };

        match s.as_bytes()[0] {
            b'+' => target(&s[1..]).map(Self::Select),
            b'-' => target(&s[1..]).map(Self::Deselect),
            b'@' => target(&s[1..]).map(Self::SwitchProfession),
            _ => Ok(Self::Toggle(s.to_string())),
        }
    }
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(id) => write!(f, "+{id}"),
            Self::Deselect(id) => write!(f, "-{id}"),
            Self::Toggle(id) => write!(f, "{id}"),
            Self::SwitchProfession(key) => write!(f, "@{key}"),
            Self::Reset => write!(f, "!"),
        }
    }
}
