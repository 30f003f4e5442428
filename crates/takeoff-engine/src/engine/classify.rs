//! Description classification.
//!
//! Takeoff descriptions conventionally read `"Element - Material - Location"`.
//! Splitting on the literal delimiter turns the trailing segment into a
//! location label and the rest into the grouping key.
//!
//! # Examples
//!
//! ```ignore
//! let c = classify_description("Grade Beam (GB1) - Concrete C30 - Grid A");
//! assert_eq!(c.group, "Grade Beam (GB1) - Concrete C30");
//! assert_eq!(c.location, "Grid A");
//! ```

/// Literal delimiter between description segments.
pub const SEGMENT_DELIMITER: &str = " - ";

/// Location label assigned when a description has no location segment.
pub const DEFAULT_LOCATION: &str = "General";

/// Parsed grouping key and location label for one description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub group: String,
    pub location: String,
}

/// Split a description into a group name and a location label.
///
/// Rules:
/// - Two or more segments: the last segment is the location, the preceding
///   segments rejoined with the delimiter are the group name.
/// - One segment (no delimiter): the whole string is the group name and the
///   location falls back to [`DEFAULT_LOCATION`].
///
/// This is a total function over arbitrary input. It is also a lossy
/// heuristic: group identity requires the leading segments to be
/// byte-identical, and no semantic validation is performed.
pub fn classify_description(description: &str) -> Classification {
    let segments: Vec<&str> = description.split(SEGMENT_DELIMITER).collect();
    if segments.len() < 2 {
        return Classification {
            group: description.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        };
    }

    Classification {
        group: segments[..segments.len() - 1].join(SEGMENT_DELIMITER),
        location: segments[segments.len() - 1].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_segments_split_group_and_location() {
        let c = classify_description("Grade Beam (GB1) - Concrete C30 - Grid A");
        assert_eq!(c.group, "Grade Beam (GB1) - Concrete C30");
        assert_eq!(c.location, "Grid A");
    }

    #[test]
    fn test_two_segments() {
        let c = classify_description("Internal Walls - Emulsion");
        assert_eq!(c.group, "Internal Walls");
        assert_eq!(c.location, "Emulsion");
    }

    #[test]
    fn test_single_segment_falls_back_to_general() {
        let c = classify_description("Site Clearance");
        assert_eq!(c.group, "Site Clearance");
        assert_eq!(c.location, DEFAULT_LOCATION);
    }

    #[test]
    fn test_four_segments_keep_only_last_as_location() {
        let c = classify_description("Slab - Concrete C35 - First Floor - Zone 2");
        assert_eq!(c.group, "Slab - Concrete C35 - First Floor");
        assert_eq!(c.location, "Zone 2");
    }

    #[test]
    fn test_delimiter_requires_surrounding_spaces() {
        // A bare hyphen is part of the text, not a segment boundary.
        let c = classify_description("Anti-termite Treatment");
        assert_eq!(c.group, "Anti-termite Treatment");
        assert_eq!(c.location, DEFAULT_LOCATION);
    }

    #[test]
    fn test_empty_input() {
        let c = classify_description("");
        assert_eq!(c.group, "");
        assert_eq!(c.location, DEFAULT_LOCATION);
    }
}
