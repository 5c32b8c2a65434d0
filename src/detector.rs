// Register judgement engine: segment judge, segment aggregation, and
// quote/matrix separation with reconciliation.

use anyhow::Result;
use tracing::debug;

use crate::features::SegmentFeatures;
use crate::judgement::Judgement;
use crate::patterns::PatternTables;

/// Glyph standing in for a removed quoted span in the matrix text, and the
/// joiner between concatenated quote bodies. Not a sentential delimiter and
/// not a Han character, so it never adds evidence of its own.
pub const QUOTE_PLACEHOLDER: &str = "…";

/// A register must hold more than this share of the normalized evidence
/// before a pure label is considered; anything closer defaults to Mixed.
const DOMINANCE_RATIO: f64 = 0.9;

/// Share of segments that must agree (counting Neutral as agreeing) for a
/// pure document-level label.
const AGGREGATION_THRESHOLD: f64 = 0.95;

/// Thresholds and flags for a detector instance. Immutable once the
/// detector is constructed.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Split the document on sentential delimiters and aggregate the
    /// per-segment judgements.
    pub split_segments: bool,
    /// Separate quoted spans from the narrating matrix and reconcile the
    /// two judgements.
    pub separate_quotes: bool,
    /// Cantonese evidence at or below this fraction of the Han length is
    /// tolerated in non-Cantonese text.
    pub canto_tolerance: f64,
    /// SWC evidence at or below this fraction of the Han length is
    /// tolerated in non-SWC text.
    pub swc_tolerance: f64,
    /// Minimum Cantonese density for the register to count as present.
    pub canto_presence: f64,
    /// Minimum SWC density for the register to count as present.
    pub swc_presence: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            split_segments: false,
            separate_quotes: false,
            canto_tolerance: 0.01,
            swc_tolerance: 0.01,
            canto_presence: 0.03,
            swc_presence: 0.03,
        }
    }
}

/// Classifies Chinese-script text as written Cantonese, Standard Written
/// Chinese (SWC), Neutral, or Mixed, with two hybrid labels for documents
/// whose quoted speech and narration disagree.
///
/// Judgement is a pure function of the input and the configuration: no
/// state is carried between calls, so one instance can be shared freely
/// across threads.
pub struct CantoneseDetector {
    config: DetectorConfig,
    tables: PatternTables,
}

impl CantoneseDetector {
    /// Build a detector, compiling the pattern tables once.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        let tables = PatternTables::compile()?;
        debug!(?config, "constructed detector");
        Ok(Self { config, tables })
    }

    /// Detector with default thresholds and both flags off.
    pub fn with_defaults() -> Result<Self> {
        Self::new(DetectorConfig::default())
    }

    /// Judge a document. The only public judgement operation: total over
    /// any Unicode string, never fails, and always returns one of the six
    /// labels. An empty document is Neutral.
    pub fn judge(&self, document: &str) -> Judgement {
        if self.config.separate_quotes {
            self.judge_matrix_quotes(document)
        } else {
            self.judge_document(document)
        }
    }

    /// Dispatch on the segment-splitting flag.
    fn judge_document(&self, document: &str) -> Judgement {
        if self.config.split_segments {
            self.judge_split(document)
        } else {
            self.judge_segment(document)
        }
    }

    /// Judge one segment from its feature counts.
    ///
    /// Tolerance checks use floor and presence checks use ceil; the
    /// asymmetry is load-bearing at boundary lengths.
    fn judge_segment(&self, segment: &str) -> Judgement {
        let features = SegmentFeatures::extract(&self.tables, segment);
        let length = features.han_length as f64;
        let canto = features.canto_count;
        let swc = features.swc_count;

        let lack_canto = (canto as f64) <= (self.config.canto_tolerance * length).floor();
        let lack_swc = (swc as f64) <= (self.config.swc_tolerance * length).floor();

        if canto + swc == 0 || (lack_canto && lack_swc) {
            return Judgement::Neutral;
        }

        let has_canto = (canto as f64) >= (self.config.canto_presence * length).ceil();
        let has_swc = (swc as f64) >= (self.config.swc_presence * length).ceil();

        // canto + swc != 0 here, so the normalization cannot divide by zero
        let total = (canto + swc) as f64;
        let canto_pref = canto as f64 / total - swc as f64 / total > DOMINANCE_RATIO;
        let swc_pref = swc as f64 / total - canto as f64 / total > DOMINANCE_RATIO;

        if canto_pref && !has_swc {
            Judgement::Cantonese
        } else if swc_pref && !has_canto {
            Judgement::Swc
        } else {
            Judgement::Mixed
        }
    }

    /// Split the document on sentential delimiters, judge each non-empty
    /// piece, and aggregate with the 95% threshold. Checked in fixed order
    /// Neutral, Cantonese, SWC; a document with no pieces is Neutral.
    fn judge_split(&self, document: &str) -> Judgement {
        let mut neutral = 0usize;
        let mut cantonese = 0usize;
        let mut swc = 0usize;
        let mut total = 0usize;

        for span in self.tables.delimiters.split(document) {
            let piece = &document[span.range()];
            if piece.trim().is_empty() {
                continue;
            }
            total += 1;
            match self.judge_segment(piece) {
                Judgement::Neutral => neutral += 1,
                Judgement::Cantonese => cantonese += 1,
                Judgement::Swc => swc += 1,
                // Mixed counts toward neither pure tally
                _ => {}
            }
        }

        let threshold = (total as f64 * AGGREGATION_THRESHOLD).ceil() as usize;
        debug!(total, neutral, cantonese, swc, threshold, "aggregated segments");

        if neutral >= threshold {
            Judgement::Neutral
        } else if cantonese + neutral >= threshold {
            Judgement::Cantonese
        } else if swc + neutral >= threshold {
            Judgement::Swc
        } else {
            Judgement::Mixed
        }
    }

    /// Partition a document into narrating matrix and quoted content.
    ///
    /// Every matched quoted span, delimiters included, becomes one
    /// placeholder glyph in the matrix; the inner contents are concatenated
    /// in document order, joined by the same glyph. With no quote pairs the
    /// matrix is the document itself and the quote text is empty.
    fn separate_quotes(&self, document: &str) -> (String, String) {
        let mut matrix = String::with_capacity(document.len());
        let mut quote_bodies: Vec<&str> = Vec::new();
        let mut last = 0usize;

        for m in self.tables.quote_pairs.find_iter(document) {
            matrix.push_str(&document[last..m.start()]);
            matrix.push_str(QUOTE_PLACEHOLDER);
            quote_bodies.push(strip_quote_marks(&document[m.range()]));
            last = m.end();
        }
        matrix.push_str(&document[last..]);

        (matrix, quote_bodies.join(QUOTE_PLACEHOLDER))
    }

    /// Remove every matched quote-pair span, contents included.
    fn remove_quote_spans(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0usize;
        for m in self.tables.quote_pairs.find_iter(text) {
            out.push_str(&text[last..m.start()]);
            last = m.end();
        }
        out.push_str(&text[last..]);
        out
    }

    /// Judge matrix and quotes independently and reconcile the two labels.
    fn judge_matrix_quotes(&self, document: &str) -> Judgement {
        let (matrix, quotes) = self.separate_quotes(document);

        if matrix == QUOTE_PLACEHOLDER {
            // The entire document is one quoted span
            return self.judge_document(&self.remove_quote_spans(&quotes));
        }
        if quotes.is_empty() {
            return self.judge_document(&matrix);
        }

        let matrix_judgement = self.judge_document(&matrix);
        let quotes_judgement = self.judge_document(&quotes);
        debug!(?matrix_judgement, ?quotes_judgement, "reconciling matrix and quotes");

        match (matrix_judgement, quotes_judgement) {
            (m, q) if m == q => m,
            (Judgement::Neutral, q) => q,
            (m, Judgement::Neutral) => m,
            (Judgement::Swc, Judgement::Cantonese) => Judgement::CantoneseQuotesInSwc,
            (Judgement::Swc, Judgement::Mixed) => Judgement::MixedQuotesInSwc,
            // Every other disagreement collapses to Mixed
            _ => Judgement::Mixed,
        }
    }
}

/// Inner content of a matched quote span: the span minus its single opening
/// and closing mark.
fn strip_quote_marks(span: &str) -> &str {
    let start = span.chars().next().map_or(0, |c| c.len_utf8());
    let end = span.len() - span.chars().next_back().map_or(0, |c| c.len_utf8());
    &span[start..end]
}
