use regex::{Captures, Regex};
use std::str::FromStr;

/// How OCR confusions between letters and digits are repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OcrCorrection {
    /// Repair `l`, `|`, `o` and `O` only inside tokens made entirely of digits
    /// and look-alikes with at least one real digit, e.g. `1O5`, `l3.8` or `|30`.
    #[default]
    Contextual,
    /// Blanket substring replacement over the whole text. Corrupts ordinary
    /// words (`Glucose` becomes `G1uc0se`).
    Legacy,
}

impl FromStr for OcrCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contextual" => Ok(OcrCorrection::Contextual),
            "legacy" => Ok(OcrCorrection::Legacy),
            other => Err(format!(
                "invalid OCR correction mode '{}', expected 'contextual' or 'legacy'",
                other
            )),
        }
    }
}

/// Applied in order by [`OcrCorrection::Legacy`].
pub const LEGACY_SUBSTITUTIONS: [(&str, &str); 5] =
    [("rn", "m"), ("l", "1"), ("O", "0"), ("o", "0"), ("|", "1")];

/// Maximal runs of word characters, pipes and dots. Only runs made entirely
/// of digits and look-alikes are repaired.
const TOKEN_PATTERN: &str = r"[\w|.]+";

#[derive(Debug, Clone)]
pub struct Preprocessor {
    mode: OcrCorrection,
    token: Regex,
}

impl Preprocessor {
    pub fn new(mode: OcrCorrection) -> Result<Self, regex::Error> {
        Ok(Self {
            mode,
            token: Regex::new(TOKEN_PATTERN)?,
        })
    }

    /// Collapses whitespace runs to single spaces, repairs OCR confusions and
    /// trims the result.
    pub fn preprocess(&self, text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

        let corrected = match self.mode {
            OcrCorrection::Legacy => LEGACY_SUBSTITUTIONS
                .iter()
                .fold(collapsed, |acc, (wrong, right)| acc.replace(wrong, right)),
            OcrCorrection::Contextual => self
                .token
                .replace_all(&collapsed, |caps: &Captures| repair_numeric_token(&caps[0]))
                .into_owned(),
        };

        corrected.trim().to_string()
    }
}

/// `1O5` becomes `105`; tokens holding any other letter, or no real digit,
/// come back unchanged.
fn repair_numeric_token(token: &str) -> String {
    let lookalikes_only = token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, 'l' | '|' | 'o' | 'O' | '.'));
    if !lookalikes_only || !token.chars().any(|c| c.is_ascii_digit()) {
        return token.to_string();
    }

    token
        .chars()
        .map(|c| match c {
            'l' | '|' => '1',
            'o' | 'O' => '0',
            other => other,
        })
        .collect()
}
