//! Composite interaction: assemble a PC from selected components.

use super::{format_money, ShowcaseError};
use crate::composite::{BreakdownLine, Part};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{info, instrument};

pub const CASE: (&str, f64) = ("PC Case", 100.0);
pub const MOTHERBOARD: (&str, f64) = ("Motherboard", 300.0);
pub const CPU: (&str, f64) = ("CPU (Intel i9)", 500.0);
pub const RAM: (&str, f64) = ("RAM (32GB DDR5)", 150.0);
pub const GPU: (&str, f64) = ("GPU (NVIDIA RTX 4080)", 1200.0);
pub const SSD: (&str, f64) = ("SSD (2TB NVMe)", 200.0);

/// Which optional components go into the build. Everything is selected by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcSelection {
    pub cpu: bool,
    pub ram: bool,
    pub gpu: bool,
    pub ssd: bool,
}

impl Default for PcSelection {
    fn default() -> Self {
        Self {
            cpu: true,
            ram: true,
            gpu: true,
            ssd: true,
        }
    }
}

/// The assembled tree, its total and a full breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcReport {
    pub tree: Part,
    pub total: f64,
    pub breakdown: Vec<BreakdownLine>,
}

impl Display for PcReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total PC Price: {}", format_money(self.total))?;
        write!(f, "Price Breakdown:")?;
        for line in &self.breakdown {
            let indent = "    ".repeat(line.depth);
            write!(f, "\n{indent}{}: {}", line.name, format_money(line.price))?;
        }
        Ok(())
    }
}

fn leaf((name, price): (&str, f64)) -> Part {
    Part::leaf(name, price)
}

/// Builds the PC tree: the motherboard hosts CPU and RAM, the case hosts the
/// motherboard, GPU and SSD.
#[instrument]
pub fn assemble_pc(selection: &PcSelection) -> Result<PcReport, ShowcaseError> {
    let mut motherboard = Part::composite(MOTHERBOARD.0, MOTHERBOARD.1);
    if selection.cpu {
        motherboard.add_part(leaf(CPU))?;
    }
    if selection.ram {
        motherboard.add_part(leaf(RAM))?;
    }

    let mut case = Part::composite(CASE.0, CASE.1);
    case.add_part(motherboard)?;
    if selection.gpu {
        case.add_part(leaf(GPU))?;
    }
    if selection.ssd {
        case.add_part(leaf(SSD))?;
    }

    let total = case.get_price();
    info!(total, "PC assembled");
    Ok(PcReport {
        breakdown: case.breakdown(),
        total,
        tree: case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_build_is_case_and_motherboard() {
        let selection = PcSelection {
            cpu: false,
            ram: false,
            gpu: false,
            ssd: false,
        };
        let report = assemble_pc(&selection).unwrap();
        assert_eq!(report.total, 400.0);
        assert_eq!(report.breakdown.len(), 2);
    }

    #[test]
    fn test_display_indents_by_depth() {
        let report = assemble_pc(&PcSelection::default()).unwrap();
        let text = report.to_string();
        assert!(text.starts_with("Total PC Price: $2,450.00"));
        assert!(text.contains("\n        CPU (Intel i9): $500.00"));
        assert!(text.contains("\n    GPU (NVIDIA RTX 4080): $1,200.00"));
    }
}
