// The label vocabulary emitted by the detector, plus the run-level tally
// record the CLI serializes.

use anyhow::bail;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Final classification of a span of text.
///
/// The two `...QuotesInSwc` variants are produced only by quote/matrix
/// reconciliation. Labels are terminal values; they are never combined
/// further once returned from `judge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Judgement {
    Neutral,
    Cantonese,
    #[serde(rename = "SWC")]
    Swc,
    Mixed,
    #[serde(rename = "CantoneseQuotesInSWC")]
    CantoneseQuotesInSwc,
    #[serde(rename = "MixedQuotesInSWC")]
    MixedQuotesInSwc,
}

impl Judgement {
    /// Stable wire string for this label, used for tab-separated output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Judgement::Neutral => "Neutral",
            Judgement::Cantonese => "Cantonese",
            Judgement::Swc => "SWC",
            Judgement::Mixed => "Mixed",
            Judgement::CantoneseQuotesInSwc => "CantoneseQuotesInSWC",
            Judgement::MixedQuotesInSwc => "MixedQuotesInSWC",
        }
    }
}

impl fmt::Display for Judgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Judgement {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Neutral" => Ok(Judgement::Neutral),
            "Cantonese" => Ok(Judgement::Cantonese),
            "SWC" => Ok(Judgement::Swc),
            "Mixed" => Ok(Judgement::Mixed),
            "CantoneseQuotesInSWC" => Ok(Judgement::CantoneseQuotesInSwc),
            "MixedQuotesInSWC" => Ok(Judgement::MixedQuotesInSwc),
            other => bail!("unknown judgement label: {other}"),
        }
    }
}

/// Per-label tallies across one run of line judgements.
#[derive(Debug, Default, Clone, Serialize)]
pub struct JudgeStats {
    pub lines_judged: u64,
    pub neutral: u64,
    pub cantonese: u64,
    pub swc: u64,
    pub mixed: u64,
    pub cantonese_quotes_in_swc: u64,
    pub mixed_quotes_in_swc: u64,
}

impl JudgeStats {
    pub fn record(&mut self, judgement: Judgement) {
        self.lines_judged += 1;
        match judgement {
            Judgement::Neutral => self.neutral += 1,
            Judgement::Cantonese => self.cantonese += 1,
            Judgement::Swc => self.swc += 1,
            Judgement::Mixed => self.mixed += 1,
            Judgement::CantoneseQuotesInSwc => self.cantonese_quotes_in_swc += 1,
            Judgement::MixedQuotesInSwc => self.mixed_quotes_in_swc += 1,
        }
    }
}
