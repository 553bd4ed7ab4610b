use std::collections::BTreeMap;

use crate::models::TestResult;
use crate::reference::{canonical_key, Panel, PANEL_KEYWORDS};

/// Panel for a single test name; anything unmatched lands in
/// [`Panel::Other`].
pub fn panel_for(test_name: &str) -> Panel {
    let key = canonical_key(test_name);
    PANEL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| key.contains(k)))
        .map(|(panel, _)| *panel)
        .unwrap_or(Panel::Other)
}

/// Groups results by panel. All seven panels are present in the map, in
/// display order, and each keeps the input order of its results.
pub fn categorize(results: &[TestResult]) -> BTreeMap<Panel, Vec<&TestResult>> {
    let mut panels: BTreeMap<Panel, Vec<&TestResult>> =
        Panel::ALL.iter().map(|p| (*p, Vec::new())).collect();

    for result in results {
        panels.entry(panel_for(&result.test_name)).or_default().push(result);
    }

    panels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> TestResult {
        TestResult {
            test_name: name.to_string(),
            value: "1".to_string(),
            units: String::new(),
            normal_range: String::new(),
        }
    }

    #[test]
    fn known_panels() {
        assert_eq!(panel_for("Hemoglobin"), Panel::BloodCount);
        assert_eq!(panel_for("Glucose"), Panel::MetabolicPanel);
        assert_eq!(panel_for("Total Bilirubin"), Panel::LiverFunction);
        assert_eq!(panel_for("eGFR"), Panel::KidneyFunction);
        assert_eq!(panel_for("LDL Cholesterol"), Panel::Lipids);
        assert_eq!(panel_for("Free T4"), Panel::ThyroidFunction);
        assert_eq!(panel_for("Vitamin D"), Panel::Other);
    }

    #[test]
    fn first_matching_panel_wins() {
        // "alt" is a liver keyword, but "sodium" is tested first
        assert_eq!(panel_for("Sodium alt"), Panel::MetabolicPanel);
    }

    #[test]
    fn every_result_lands_in_exactly_one_panel() {
        let results: Vec<_> = ["Hemoglobin", "WBC", "Glucose", "ALT", "Creatinine", "HDL", "TSH", "Ferritin", "PSA"]
            .into_iter()
            .map(result)
            .collect();

        let panels = categorize(&results);
        assert_eq!(panels.len(), 7);
        let total: usize = panels.values().map(|v| v.len()).sum();
        assert_eq!(total, results.len());
        assert_eq!(panels[&Panel::BloodCount].len(), 2);
        assert_eq!(panels[&Panel::Other].len(), 2);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let results = vec![result("Sodium"), result("Glucose"), result("Sodium")];
        let panels = categorize(&results);
        let names: Vec<_> = panels[&Panel::MetabolicPanel]
            .iter()
            .map(|r| r.test_name.as_str())
            .collect();
        assert_eq!(names, vec!["Sodium", "Glucose", "Sodium"]);
    }

    #[test]
    fn empty_input_keeps_all_panels() {
        let panels = categorize(&[]);
        assert_eq!(panels.keys().copied().collect::<Vec<_>>(), Panel::ALL.to_vec());
        assert!(panels.values().all(|v| v.is_empty()));
    }
}
