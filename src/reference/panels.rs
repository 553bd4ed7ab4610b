use std::fmt;

/// Presentation groups for extracted results, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    BloodCount,
    MetabolicPanel,
    LiverFunction,
    KidneyFunction,
    Lipids,
    ThyroidFunction,
    Other,
}

impl Panel {
    pub const ALL: [Panel; 7] = [
        Panel::BloodCount,
        Panel::MetabolicPanel,
        Panel::LiverFunction,
        Panel::KidneyFunction,
        Panel::Lipids,
        Panel::ThyroidFunction,
        Panel::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::BloodCount => "Blood Count",
            Panel::MetabolicPanel => "Metabolic Panel",
            Panel::LiverFunction => "Liver Function",
            Panel::KidneyFunction => "Kidney Function",
            Panel::Lipids => "Lipids (Cholesterol)",
            Panel::ThyroidFunction => "Thyroid Function",
            Panel::Other => "Other Tests",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Keyword lists for every panel except [`Panel::Other`], in the order they
/// are tested. A test belongs to the first panel with a keyword contained in
/// its lower-cased name.
pub static PANEL_KEYWORDS: &[(Panel, &[&str])] = &[
    (Panel::BloodCount, &["hemoglobin", "wbc", "rbc", "platelets", "hematocrit"]),
    (Panel::MetabolicPanel, &["glucose", "sodium", "potassium", "chloride", "calcium"]),
    (Panel::LiverFunction, &["alt", "ast", "bilirubin", "alkaline phosphatase", "albumin"]),
    (Panel::KidneyFunction, &["creatinine", "bun", "egfr"]),
    (Panel::Lipids, &["cholesterol", "ldl", "hdl", "triglycerides"]),
    (Panel::ThyroidFunction, &["tsh", "t4", "t3"]),
];
