//! Traditional blasting vs. NEDA comparison rows and hover tracking.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub traditional: &'static str,
    pub neda: &'static str,
}

pub static METRICS: &[Metric] = &[
    Metric { label: "Safety Radius", traditional: "500m Evacuation", neda: "50m Safe Zone" },
    Metric { label: "Operational Downtime", traditional: "2-4 Hours", neda: "Zero Downtime" },
    Metric { label: "Ground Vibration", traditional: "High Risk", neda: "None (Silent)" },
    Metric { label: "Permit Complexity", traditional: "High (Police/Gov)", neda: "Low (Non-Explosive)" },
];

/// Hovered row index, shared by both columns so a row lights up side by side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComparisonHover {
    pub hovered: Option<usize>,
}

impl ComparisonHover {
    pub fn enter(&mut self, row: usize) {
        self.hovered = Some(row);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn is_highlighted(&self, row: usize) -> bool {
        self.hovered == Some(row)
    }
}
