/// Plain-language name and explanation for a lab test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermInfo {
    pub canonical_key: &'static str,
    pub display_term: &'static str,
    pub description: &'static str,
}

/// Description used when a test has no entry in [`MEDICAL_TERMS`].
pub const GENERIC_DESCRIPTION: &str = "Medical measurement";

const fn term(
    canonical_key: &'static str,
    display_term: &'static str,
    description: &'static str,
) -> TermInfo {
    TermInfo { canonical_key, display_term, description }
}

pub static MEDICAL_TERMS: &[TermInfo] = &[
    // Complete blood count
    term("hemoglobin", "Hemoglobin", "Protein in red blood cells that carries oxygen throughout your body"),
    term("wbc", "White Blood Cells", "Cells that fight infection and diseases"),
    term("rbc", "Red Blood Cells", "Cells that carry oxygen from your lungs to the rest of your body"),
    term("platelets", "Platelets", "Tiny blood cells that help your body form clots to stop bleeding"),
    term("hematocrit", "Hematocrit", "Percentage of red blood cells in your blood"),
    term("mcv", "Mean Corpuscular Volume", "Average size of your red blood cells"),
    // Metabolic panel
    term("glucose", "Blood Sugar", "Amount of sugar in your blood"),
    term("creatinine", "Creatinine", "Waste product from muscle activity, filtered by kidneys"),
    term("bun", "Blood Urea Nitrogen", "Measure of kidney function and protein metabolism"),
    term("sodium", "Sodium", "Electrolyte that helps control fluid balance and nerve function"),
    term("potassium", "Potassium", "Electrolyte important for heart and muscle function"),
    term("chloride", "Chloride", "Electrolyte that helps maintain fluid balance"),
    term("calcium", "Calcium", "Mineral essential for bones, teeth, and nerve function"),
    term("egfr", "Estimated Glomerular Filtration Rate", "Measure of how well your kidneys are filtering waste"),
    // Liver function
    term("alt", "ALT (Liver Enzyme)", "Enzyme that indicates liver health and potential damage"),
    term("ast", "AST (Liver Enzyme)", "Enzyme found in liver, heart, and muscles"),
    term("alkaline phosphatase", "Alkaline Phosphatase", "Enzyme related to liver and bone health"),
    term("bilirubin", "Bilirubin", "Substance produced when red blood cells break down"),
    term("albumin", "Albumin", "Protein made by your liver that keeps fluid in your bloodstream"),
    // Lipids
    term("cholesterol", "Total Cholesterol", "Total amount of cholesterol in your blood"),
    term("ldl", "LDL (Bad Cholesterol)", "Cholesterol that can build up in arteries"),
    term("hdl", "HDL (Good Cholesterol)", "Cholesterol that helps remove bad cholesterol"),
    term("triglycerides", "Triglycerides", "Type of fat stored in fat cells for energy"),
    // Thyroid
    term("tsh", "TSH (Thyroid Stimulating Hormone)", "Hormone that controls thyroid function"),
    term("t4", "Thyroxine (T4)", "Main hormone produced by thyroid gland"),
    term("t3", "Triiodothyronine (T3)", "Active thyroid hormone"),
    // Other
    term("hba1c", "HbA1c (Average Blood Sugar)", "Average blood sugar level over past 3 months"),
    term("vitamin d", "Vitamin D", "Vitamin important for bone health and immunity"),
    term("iron", "Iron", "Mineral needed for red blood cell production"),
    term("ferritin", "Ferritin", "Protein that stores iron in your body"),
    term("psa", "PSA (Prostate Specific Antigen)", "Protein produced by prostate cells"),
    term("inr", "INR (Blood Clotting)", "Measure of how long it takes blood to clot"),
];

/// Exact lookup by canonical key.
pub fn lookup_term(canonical_key: &str) -> Option<&'static TermInfo> {
    MEDICAL_TERMS.iter().find(|t| t.canonical_key == canonical_key)
}

/// Display name and description for a raw test name, falling back to the
/// name itself and [`GENERIC_DESCRIPTION`].
pub fn describe(test_name: &str) -> (String, &'static str) {
    match lookup_term(&super::canonical_key(test_name)) {
        Some(info) => (info.display_term.to_string(), info.description),
        None => (test_name.to_string(), GENERIC_DESCRIPTION),
    }
}
