//! The [`Part`] tree and its recursive pricing.

use super::StructureError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A node in a part tree.
///
/// A composite owns its children by value, so no part can ever be reached twice or
/// become its own descendant. The tree is acyclic by construction and pricing always
/// terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Part {
    /// An individual part with a fixed price.
    Leaf { name: String, price: f64 },
    /// A part that aggregates sub-parts on top of its own base price.
    Composite {
        name: String,
        price: f64,
        children: Vec<Part>,
    },
}

/// One row of a price breakdown, see [`Part::breakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Distance from the root, which sits at depth 0.
    pub depth: usize,
    pub name: String,
    /// The node's own price, children excluded.
    pub price: f64,
}

impl Part {
    /// Creates a leaf part.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `price` - Fixed price (negative values are accepted)
    pub fn leaf(name: impl Into<String>, price: f64) -> Self {
        Part::Leaf {
            name: name.into(),
            price,
        }
    }

    /// Creates a composite part with no children yet.
    pub fn composite(name: impl Into<String>, base_price: f64) -> Self {
        Part::Composite {
            name: name.into(),
            price: base_price,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Part::Leaf { name, .. } | Part::Composite { name, .. } => name,
        }
    }

    /// The node's own price, without any children.
    pub fn base_price(&self) -> f64 {
        match self {
            Part::Leaf { price, .. } | Part::Composite { price, .. } => *price,
        }
    }

    /// Direct children in insertion order. Always empty for a leaf.
    pub fn children(&self) -> &[Part] {
        match self {
            Part::Leaf { .. } => &[],
            Part::Composite { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Part::Leaf { .. })
    }

    /// Appends `part` to this composite's children.
    ///
    /// # Errors
    /// Returns [`StructureError::NotComposite`] when called on a leaf.
    pub fn add_part(&mut self, part: Part) -> Result<&mut Self, StructureError> {
        match self {
            Part::Leaf { name, .. } => {
                return Err(StructureError::NotComposite { name: name.clone() });
            }
            Part::Composite { name, children, .. } => {
                debug!(parent = %name, child = %part.name(), "add_part");
                children.push(part);
            }
        }
        Ok(self)
    }

    /// Total price: own price plus every descendant's, at any depth.
    pub fn get_price(&self) -> f64 {
        match self {
            Part::Leaf { price, .. } => *price,
            Part::Composite {
                price, children, ..
            } => *price + children.iter().map(Part::get_price).sum::<f64>(),
        }
    }

    /// Flattens the tree in depth-first pre-order.
    pub fn breakdown(&self) -> Vec<BreakdownLine> {
        let mut lines = Vec::new();
        self.collect_lines(0, &mut lines);
        lines
    }

    fn collect_lines(&self, depth: usize, lines: &mut Vec<BreakdownLine>) {
        lines.push(BreakdownLine {
            depth,
            name: self.name().to_string(),
            price: self.base_price(),
        });
        for child in self.children() {
            child.collect_lines(depth + 1, lines);
        }
    }

    /// Depth-first search for the first node called `name`, this node included.
    pub fn find(&self, name: &str) -> Option<&Part> {
        if self.name() == name {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_price_is_its_own_price() {
        assert_eq!(Part::leaf("CPU", 500.0).get_price(), 500.0);
    }

    #[test]
    fn test_empty_composite_is_base_price() {
        assert_eq!(Part::composite("Case", 100.0).get_price(), 100.0);
    }

    #[test]
    fn test_add_part_to_leaf_fails() {
        let mut leaf = Part::leaf("RAM", 150.0);
        let err = leaf.add_part(Part::leaf("Heatsink", 20.0)).unwrap_err();
        assert_eq!(
            err,
            StructureError::NotComposite {
                name: "RAM".to_string()
            }
        );
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn test_add_part_chains() {
        let mut board = Part::composite("Motherboard", 300.0);
        board
            .add_part(Part::leaf("CPU", 500.0))
            .unwrap()
            .add_part(Part::leaf("RAM", 150.0))
            .unwrap();

        let names: Vec<&str> = board.children().iter().map(Part::name).collect();
        assert_eq!(names, vec!["CPU", "RAM"]);
        assert_eq!(board.get_price(), 950.0);
    }

    #[test]
    fn test_negative_prices_are_summed() {
        let mut bundle = Part::composite("Bundle", 50.0);
        bundle.add_part(Part::leaf("Discount", -20.0)).unwrap();
        assert_eq!(bundle.get_price(), 30.0);
    }

    #[test]
    fn test_find_searches_nested_nodes() {
        let mut case = Part::composite("Case", 100.0);
        let mut board = Part::composite("Motherboard", 300.0);
        board.add_part(Part::leaf("CPU", 500.0)).unwrap();
        case.add_part(board).unwrap();

        assert_eq!(case.find("CPU").map(Part::get_price), Some(500.0));
        assert!(case.find("GPU").is_none());
    }
}
