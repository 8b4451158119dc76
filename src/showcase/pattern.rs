//! The catalogue of demonstrated patterns.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One of the three demonstrated patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Builder,
    Composite,
    Decorator,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Builder, Pattern::Composite, Pattern::Decorator];

    pub fn title(self) -> &'static str {
        match self {
            Pattern::Builder => "The Builder Pattern",
            Pattern::Composite => "The Composite Pattern",
            Pattern::Decorator => "The Decorator Pattern",
        }
    }

    /// One-paragraph summary of what the pattern is for.
    pub fn concept(self) -> &'static str {
        match self {
            Pattern::Builder => {
                "The Builder pattern separates the construction of a complex object from its \
                 representation, so that the same construction process can create different \
                 representations. It's ideal when an object has many configuration options."
            }
            Pattern::Composite => {
                "The Composite pattern allows you to compose objects into tree-like structures \
                 and then work with these structures as if they were individual objects."
            }
            Pattern::Decorator => {
                "The Decorator pattern allows you to attach new behaviors to objects dynamically \
                 by placing them inside special \"wrapper\" objects."
            }
        }
    }

    /// The roles that make up the pattern, as `(role, implementing type)` pairs.
    pub fn roles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Pattern::Builder => &[
                ("Product", "Car"),
                ("Builder", "CarBuilder"),
                ("Concrete Builder", "SportsCarBuilder"),
                ("Director", "Director"),
            ],
            Pattern::Composite => &[
                ("Component", "Part"),
                ("Leaf", "Part::Leaf"),
                ("Composite", "Part::Composite"),
            ],
            Pattern::Decorator => &[
                ("Component", "CoffeeItem"),
                ("Concrete Component", "SimpleCoffee"),
                ("Decorator", "WithTopping"),
            ],
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "  {}", self.concept())?;
        for (role, implementor) in self.roles() {
            writeln!(f, "  - {role}: {implementor}")?;
        }
        Ok(())
    }
}

/// A role within a pattern and the type that plays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRole {
    pub role: &'static str,
    pub implementor: &'static str,
}

/// Everything known about one pattern, in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternInfo {
    pub name: Pattern,
    pub title: &'static str,
    pub concept: &'static str,
    pub roles: Vec<PatternRole>,
}

impl From<Pattern> for PatternInfo {
    fn from(pattern: Pattern) -> Self {
        Self {
            name: pattern,
            title: pattern.title(),
            concept: pattern.concept(),
            roles: pattern
                .roles()
                .iter()
                .map(|&(role, implementor)| PatternRole { role, implementor })
                .collect(),
        }
    }
}

/// The menu of all demonstrated patterns. Serializes as a list of [`PatternInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PatternCatalogue {
    pub patterns: Vec<PatternInfo>,
}

impl Display for PatternCatalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (n, info) in self.patterns.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", info.name)?;
        }
        Ok(())
    }
}

/// Lists every pattern with its title, concept and roles.
pub fn catalogue() -> PatternCatalogue {
    PatternCatalogue {
        patterns: Pattern::ALL.into_iter().map(PatternInfo::from).collect(),
    }
}
