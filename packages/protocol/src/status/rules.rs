//! Ordered keyword rules that turn a status phrase into a [`StatusCategory`].
//!
//! Rules are evaluated top to bottom and the first hit wins, so the order of
//! the table is part of its meaning: "AVAILABLE ON SCENE" must land on
//! `available` before `on_scene` gets a chance to look at it.

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    Dispatched,
    Enroute,
    OnScene,
    Transporting,
    Available,
    Clear,
}

impl StatusCategory {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Serializable form of a rule, as written in a rules file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub category: StatusCategory,
    pub patterns: Vec<String>,
}

/// Serializable form of a whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTableSpec {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_fallback")]
    pub fallback: StatusCategory,
    /// Drop the `(Location: ...)` fragment before matching.
    #[serde(default)]
    pub strip_location: bool,
    pub rules: Vec<RuleSpec>,
}

fn default_version() -> u32 {
    1
}

fn default_fallback() -> StatusCategory {
    StatusCategory::Dispatched
}

/// A compiled rule: any of `patterns` matching the text selects `category`.
#[derive(Debug, Clone)]
pub struct StatusRule {
    category: StatusCategory,
    patterns: Vec<String>,
    matcher: Regex,
}

impl StatusRule {
    pub fn new(category: StatusCategory, patterns: Vec<String>) -> Result<Self> {
        if patterns.is_empty() {
            return Err(anyhow!("rule for `{category}` has no patterns"));
        }
        if let Some(idx) = patterns.iter().position(|p| p.trim().is_empty()) {
            return Err(anyhow!(
                "rule for `{category}` has an empty pattern at position {}",
                idx + 1
            ));
        }
        let alternation = patterns
            .iter()
            .map(|p| format!("(?:{p})"))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!("(?i){alternation}"))
            .with_context(|| format!("invalid pattern in rule for `{category}`"))?;
        Ok(Self {
            category,
            patterns,
            matcher,
        })
    }

    pub fn category(&self) -> StatusCategory {
        self.category
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Versioned, ordered list of rules plus the category used when none match.
#[derive(Debug, Clone)]
pub struct RuleTable {
    version: u32,
    fallback: StatusCategory,
    strip_location: bool,
    rules: Vec<StatusRule>,
}

static BUILTIN: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::from_spec(builtin_spec()).expect("builtin status rules compile")
});

fn builtin_spec() -> RuleTableSpec {
    use StatusCategory::*;

    let rule = |category, patterns: &[&str]| RuleSpec {
        category,
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
    };

    RuleTableSpec {
        version: 1,
        fallback: Dispatched,
        strip_location: false,
        rules: vec![
            rule(Available, &["available", "in service"]),
            rule(Transporting, &["transporting"]),
            rule(OnScene, &["on scene", "arrived", "on location"]),
            rule(Enroute, &["enroute", "en route", "responding"]),
            rule(Dispatched, &["dispatched"]),
            rule(Clear, &["clear", "complete"]),
        ],
    }
}

impl RuleTable {
    /// The table shipped with the crate, built once per process.
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN
    }

    pub fn from_spec(spec: RuleTableSpec) -> Result<Self> {
        if spec.rules.is_empty() {
            return Err(anyhow!("rule table v{} contains no rules", spec.version));
        }
        let rules = spec
            .rules
            .into_iter()
            .enumerate()
            .map(|(idx, r)| {
                StatusRule::new(r.category, r.patterns)
                    .with_context(|| format!("rule #{} of table v{}", idx + 1, spec.version))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            version: spec.version,
            fallback: spec.fallback,
            strip_location: spec.strip_location,
            rules,
        })
    }

    /// Load a table from its TOML representation.
    pub fn from_toml(source: &str) -> Result<Self> {
        let spec: RuleTableSpec = toml::from_str(source).context("failed to parse rule table")?;
        Self::from_spec(spec)
    }

    pub fn to_spec(&self) -> RuleTableSpec {
        RuleTableSpec {
            version: self.version,
            fallback: self.fallback,
            strip_location: self.strip_location,
            rules: self
                .rules
                .iter()
                .map(|r| RuleSpec {
                    category: r.category,
                    patterns: r.patterns.clone(),
                })
                .collect(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn fallback(&self) -> StatusCategory {
        self.fallback
    }

    /// Whether location fragments are removed before classification.
    pub fn strips_location(&self) -> bool {
        self.strip_location
    }

    pub fn rules(&self) -> &[StatusRule] {
        &self.rules
    }

    /// First matching rule's category, or the fallback.
    pub fn classify(&self, text: &str) -> StatusCategory {
        self.rules
            .iter()
            .find(|rule| rule.is_match(text))
            .map(StatusRule::category)
            .unwrap_or(self.fallback)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::builtin().clone()
    }
}
