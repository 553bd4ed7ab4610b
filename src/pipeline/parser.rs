use regex::Regex;

use crate::models::TestResult;

/// Line templates, applied in order. Each one independently scans the whole
/// text, so a single line can be reported by more than one template.
const RESULT_PATTERNS: [&str; 3] = [
    // Name: value units (low-high)
    r"(?i)([A-Za-z\s]+)\s*[:=]\s*([\d.]+)\s*([a-zA-Z/%]*)\s*[\(\[]?\s*([\d.-]+\s*[-–]\s*[\d.-]+)\s*[\)\]]?",
    // Name value/units (low-high)
    r"(?i)([A-Za-z\s]+)\s+([\d.]+)\s*/?\s*([a-zA-Z/%]*)\s*[\(\[]?\s*([\d.-]+\s*[-–]\s*[\d.-]+)\s*[\)\]]?",
    // Name value units, range in (), [] or {}
    r"(?i)([A-Za-z\s]+)\s+([\d.]+)\s*([^\(\)\[\]]*?)\s*[\(\[\{]([^\)\]\}]+)[\)\]\}]",
];

#[derive(Debug, Clone)]
pub struct ResultParser {
    patterns: Vec<Regex>,
}

impl ResultParser {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = RESULT_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Every match of every template, in template order and then left to
    /// right. Duplicates are kept.
    pub fn parse(&self, text: &str) -> Vec<TestResult> {
        let mut results = Vec::new();

        for pattern in &self.patterns {
            for caps in pattern.captures_iter(text) {
                let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let units = caps.get(3).map(|m| m.as_str()).unwrap_or("");
                let normal_range = caps.get(4).map(|m| m.as_str()).unwrap_or("");

                results.push(TestResult {
                    test_name: name.as_str().trim().to_string(),
                    value: value.as_str().trim().to_string(),
                    units: clean_units(units),
                    normal_range: clean_range(normal_range),
                });
            }
        }

        results
    }
}

fn clean_units(units: &str) -> String {
    units
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '/' | '%'))
        .collect()
}

/// Blanks out everything but digits, dots, dashes and en-dashes so the
/// classifier can still tell the bounds apart.
fn clean_range(range: &str) -> String {
    range
        .chars()
        .map(|c| if c.is_ascii_digit() || matches!(c, '.' | '-' | '–') { c } else { ' ' })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<TestResult> {
        ResultParser::new().unwrap().parse(text)
    }

    #[test]
    fn colon_separated_line() {
        let results = parse("Glucose: 130 mg/dL (70-100)");
        assert_eq!(
            results,
            vec![TestResult {
                test_name: "Glucose".to_string(),
                value: "130".to_string(),
                units: "mg/dL".to_string(),
                normal_range: "70-100".to_string(),
            }]
        );
    }

    #[test]
    fn space_separated_line_matches_twice() {
        let results = parse("Hemoglobin 10 g/dL (13.8-17.2)");
        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.test_name, "Hemoglobin");
            assert_eq!(result.value, "10");
            assert_eq!(result.units, "g/dL");
            assert_eq!(result.normal_range, "13.8-17.2");
        }
    }

    #[test]
    fn several_results_on_one_line() {
        let results = parse("Glucose: 130 mg/dL (70-100) Sodium: 140 mmol/L (135-145)");
        let names: Vec<_> = results.iter().map(|r| r.test_name.as_str()).collect();
        assert_eq!(names, vec!["Glucose", "Sodium"]);
        assert_eq!(results[1].units, "mmol/L");
        assert_eq!(results[1].normal_range, "135-145");
    }

    #[test]
    fn en_dash_and_square_brackets() {
        let results = parse("Potassium = 4.2 mmol/L [3.5–5.1]");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].test_name, "Potassium");
        assert_eq!(results[0].value, "4.2");
        assert_eq!(results[0].normal_range, "3.5–5.1");
    }

    #[test]
    fn brace_range_with_words() {
        let results = parse("TSH 2.5 mIU/L {ref 0.4 to 4.0}");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].test_name, "TSH");
        assert_eq!(results[0].units, "mIU/L");
        assert_eq!(results[0].normal_range, "0.4    4.0");
    }

    #[test]
    fn text_without_ranges_yields_nothing() {
        assert!(parse("Patient is doing well. Follow up in 6 months.").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn units_lose_stray_punctuation() {
        assert_eq!(clean_units(" mg/dL, "), "mg/dL");
        assert_eq!(clean_units("%"), "%");
    }
}
