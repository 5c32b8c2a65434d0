// Per-segment feature extraction: the normalization denominator (Han length)
// and the net register evidence counts fed to the segment judge.

use crate::patterns::{count_matches, find_matches, PatternTables};

/// Ephemeral feature record for one segment.
///
/// Match lists borrow from the segment; the record lives only for the
/// judgement call that requested it. Net counts are signed and unclamped:
/// a segment whose exclusions outnumber its feature matches contributes
/// non-positive evidence, which the tolerance checks treat the same as zero.
#[derive(Debug)]
pub struct SegmentFeatures<'a> {
    pub canto_matches: Vec<&'a str>,
    pub canto_exclusions: Vec<&'a str>,
    pub swc_matches: Vec<&'a str>,
    pub swc_exclusions: Vec<&'a str>,
    pub canto_count: i64,
    pub swc_count: i64,
    pub han_length: usize,
}

impl<'a> SegmentFeatures<'a> {
    /// Scan one segment against the feature, exclusion, and Han tables.
    /// Empty input yields zero counts and zero length.
    pub fn extract(tables: &PatternTables, segment: &'a str) -> Self {
        let canto_matches = find_matches(&tables.canto_feature, segment);
        let canto_exclusions = find_matches(&tables.canto_exclude, segment);
        let swc_matches = find_matches(&tables.swc_feature, segment);
        let swc_exclusions = find_matches(&tables.swc_exclude, segment);

        let canto_count = canto_matches.len() as i64 - canto_exclusions.len() as i64;
        let swc_count = swc_matches.len() as i64 - swc_exclusions.len() as i64;
        let han_length = count_matches(&tables.han_char, segment);

        Self {
            canto_matches,
            canto_exclusions,
            swc_matches,
            swc_exclusions,
            canto_count,
            swc_count,
            han_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> PatternTables {
        PatternTables::compile().unwrap()
    }

    #[test]
    fn test_empty_segment() {
        let tables = tables();
        let features = SegmentFeatures::extract(&tables, "");
        assert_eq!(features.canto_count, 0);
        assert_eq!(features.swc_count, 0);
        assert_eq!(features.han_length, 0);
        assert!(features.canto_matches.is_empty());
    }

    #[test]
    fn test_cantonese_segment() {
        let tables = tables();
        let features = SegmentFeatures::extract(&tables, "佢喺屋企");
        assert_eq!(features.canto_matches, vec!["佢", "喺", "屋企"]);
        assert_eq!(features.canto_count, 3);
        assert_eq!(features.swc_count, 0);
        assert_eq!(features.han_length, 4);
    }

    #[test]
    fn test_exclusion_subtracts_from_feature() {
        let tables = tables();
        // 關係 is SWC vocabulary despite containing 係
        let features = SegmentFeatures::extract(&tables, "關係");
        assert_eq!(features.canto_matches, vec!["係"]);
        assert_eq!(features.canto_exclusions, vec!["關係"]);
        assert_eq!(features.canto_count, 0);
    }

    #[test]
    fn test_swc_exclusion_neutralizes_evidence() {
        let tables = tables();
        let features = SegmentFeatures::extract(&tables, "亞利桑那");
        assert_eq!(features.swc_matches, vec!["那"]);
        assert_eq!(features.swc_exclusions, vec!["亞利桑那"]);
        assert_eq!(features.swc_count, 0);
        assert_eq!(features.han_length, 4);
    }

    #[test]
    fn test_han_length_ignores_non_han() {
        let tables = tables();
        let features = SegmentFeatures::extract(&tables, "佢好fit，真係！");
        // 佢好真係 are Han; ASCII and punctuation are not
        assert_eq!(features.han_length, 4);
    }

    #[test]
    fn test_variation_selector_counts_once() {
        let tables = tables();
        let features = SegmentFeatures::extract(&tables, "今\u{fe00}日");
        assert_eq!(features.han_length, 2);
    }
}
