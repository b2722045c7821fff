//! Validation System - Plan Rules
//!
//! Rules inspect a `Planned` identicon and produce structured violations.
//! The pipeline refuses to render a plan with any violation.

use serde::{Deserialize, Serialize};

use crate::grid::GRID_CELLS;
use crate::layout::{rect_for, GRID_COLUMNS};
use crate::stages::Planned;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationViolation {
    pub rule: String,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<ValidationViolation>,
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<ValidationViolation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }

    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}: {}", v.rule, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait PlanRule {
    fn name(&self) -> &'static str;
    fn validate(&self, planned: &Planned) -> Vec<ValidationViolation>;
}

// --- Concrete Rules ---

/// Painted cells are even-valued, in increasing index order, inside the grid.
pub struct PaintedCellsRule;

impl PlanRule for PaintedCellsRule {
    fn name(&self) -> &'static str { "painted_cells" }

    fn validate(&self, planned: &Planned) -> Vec<ValidationViolation> {
        let mut violations = vec![];
        let cells = planned.cells();

        if cells.len() > GRID_CELLS {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                message: "Too many painted cells".to_string(),
                expected: Some(format!("at most {}", GRID_CELLS)),
                actual: Some(cells.len().to_string()),
            });
        }

        if let Some(cell) = cells.iter().find(|c| !c.is_painted()) {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                message: format!("Odd value kept at index {}", cell.index),
                expected: Some("even value".to_string()),
                actual: Some(cell.value.to_string()),
            });
        }

        let ordered = cells.windows(2).all(|w| w[0].index < w[1].index);
        let in_range = cells.iter().all(|c| c.index < GRID_CELLS);
        if !ordered || !in_range {
            violations.push(ValidationViolation {
                rule: self.name().to_string(),
                message: "Cell indices out of order or out of range".to_string(),
                expected: Some(format!("strictly increasing, below {}", GRID_CELLS)),
                actual: Some(format!("{:?}", cells.iter().map(|c| c.index).collect::<Vec<_>>())),
            });
        }

        violations
    }
}

/// Every painted cell has its mirror across the middle column painted too.
pub struct SymmetryRule;

impl PlanRule for SymmetryRule {
    fn name(&self) -> &'static str { "symmetry" }

    fn validate(&self, planned: &Planned) -> Vec<ValidationViolation> {
        let cells = planned.cells();
        let painted = |index: usize| cells.iter().any(|c| c.index == index);

        cells
            .iter()
            .filter_map(|cell| {
                let row = cell.index / GRID_COLUMNS;
                let column = cell.index % GRID_COLUMNS;
                let mirror = row * GRID_COLUMNS + (GRID_COLUMNS - 1 - column);
                (!painted(mirror)).then(|| ValidationViolation {
                    rule: self.name().to_string(),
                    message: format!("Cell {} painted without its mirror", cell.index),
                    expected: Some(format!("cell {} painted", mirror)),
                    actual: None,
                })
            })
            .collect()
    }
}

/// One rectangle per cell, each exactly the cell's square on the canvas.
pub struct PixelMapRule;

impl PlanRule for PixelMapRule {
    fn name(&self) -> &'static str { "pixel_map" }

    fn validate(&self, planned: &Planned) -> Vec<ValidationViolation> {
        let cells = planned.cells();
        if planned.pixel_map.len() != cells.len() {
            return vec![ValidationViolation {
                rule: self.name().to_string(),
                message: "Rectangle count does not match cell count".to_string(),
                expected: Some(cells.len().to_string()),
                actual: Some(planned.pixel_map.len().to_string()),
            }];
        }

        cells
            .iter()
            .zip(&planned.pixel_map)
            .filter(|(cell, rect)| rect_for(cell) != **rect)
            .map(|(cell, rect)| ValidationViolation {
                rule: self.name().to_string(),
                message: format!("Rectangle misplaced for cell {}", cell.index),
                expected: Some(format!("{:?}", rect_for(cell))),
                actual: Some(format!("{:?}", rect)),
            })
            .collect()
    }
}

/// Validator runs every rule over a plan
pub struct Validator {
    rules: Vec<Box<dyn PlanRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(PaintedCellsRule),
                Box::new(SymmetryRule),
                Box::new(PixelMapRule),
            ],
        }
    }

    pub fn validate(&self, planned: &Planned) -> ValidationResult {
        let violations = self
            .rules
            .iter()
            .flat_map(|rule| rule.validate(planned))
            .collect();
        ValidationResult::from_violations(violations)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::layout::Rect;

    #[test]
    fn test_generated_plans_are_valid() {
        let validator = Validator::new();
        for seed in ["", "test", "alice", "bob", "0123456789"] {
            let result = validator.validate(&Planned::from_seed(seed));
            assert!(result.valid, "seed {seed:?}: {}", result.summary());
        }
    }

    #[test]
    fn test_odd_cell_is_rejected() {
        let mut planned = Planned::from_seed("test");
        planned.filtered.cells[0].value = 71;

        let result = Validator::new().validate(&planned);
        assert!(!result.valid);
        assert!(result.violations.iter().any(|v| v.rule == "painted_cells"));
    }

    #[test]
    fn test_broken_symmetry_is_rejected() {
        let mut planned = Planned::from_seed("test");
        // Cells 6 and 8 mirror each other; drop 8.
        planned.filtered.cells.remove(1);
        planned.pixel_map.remove(1);

        let result = SymmetryRule.validate(&planned);
        assert_eq!(result.len(), 1);
        assert!(result[0].message.contains("Cell 6"));
    }

    #[test]
    fn test_misplaced_rectangle_is_rejected() {
        let mut planned = Planned::from_seed("test");
        planned.pixel_map[0] = Rect::from(((0, 0), (50, 50)));

        let violations = PixelMapRule.validate(&planned);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "pixel_map");
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let mut planned = Planned::from_seed("test");
        planned.filtered.cells.push(Cell::from((0, 24)));

        let violations = PixelMapRule.validate(&planned);
        assert!(violations[0].message.contains("count"));
    }
}
