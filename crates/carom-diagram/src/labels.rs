//! Diamond-numbering systems.
//!
//! The physical diamonds are always evenly spaced; a label system only
//! changes the printed numbers. "standard" counts 0..8 / 0..4, the scaled
//! systems print multiples so players can read cushion values directly.

/// Number of diamonds along each long edge (bottom, top).
pub const LONG_EDGE_MARKERS: usize = 9;
/// Number of diamonds along each short edge (left, right).
pub const SHORT_EDGE_MARKERS: usize = 5;

/// Numbering convention for the diamond markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelSystem {
    /// Sequential integers: 0..8 on long edges, 0..4 on short edges.
    #[default]
    Standard,
    /// "50" system: long edge x5, short edge x10.
    System50,
    /// "100" system: long edge x7, short edge x14.
    System100,
}

impl LabelSystem {
    /// Resolve a system by name. Unknown names fall back to `Standard`,
    /// never an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "standard" => Self::Standard,
            "system_50" => Self::System50,
            "system_100" => Self::System100,
            other => {
                log::warn!("unknown label system '{}', using standard", other);
                Self::Standard
            }
        }
    }

    /// The canonical name this system resolves from.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::System50 => "system_50",
            Self::System100 => "system_100",
        }
    }

    /// (long-edge, short-edge) label multipliers.
    fn factors(&self) -> (u32, u32) {
        match self {
            Self::Standard => (1, 1),
            Self::System50 => (5, 10),
            Self::System100 => (7, 14),
        }
    }

    /// Label for the i-th diamond on the bottom or top edge.
    pub fn long_edge_label(&self, index: usize) -> String {
        (index as u32 * self.factors().0).to_string()
    }

    /// Label for the j-th diamond on the left or right edge.
    pub fn short_edge_label(&self, index: usize) -> String {
        (index as u32 * self.factors().1).to_string()
    }

    /// All labels for the bottom/top edges, in marker order.
    pub fn long_edge_labels(&self) -> Vec<String> {
        (0..LONG_EDGE_MARKERS).map(|i| self.long_edge_label(i)).collect()
    }

    /// All labels for the left/right edges, in marker order.
    pub fn short_edge_labels(&self) -> Vec<String> {
        (0..SHORT_EDGE_MARKERS).map(|j| self.short_edge_label(j)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_labels() {
        let s = LabelSystem::Standard;
        assert_eq!(
            s.long_edge_labels(),
            vec!["0", "1", "2", "3", "4", "5", "6", "7", "8"]
        );
        assert_eq!(s.short_edge_labels(), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn system_50_labels() {
        let s = LabelSystem::System50;
        assert_eq!(
            s.long_edge_labels(),
            vec!["0", "5", "10", "15", "20", "25", "30", "35", "40"]
        );
        assert_eq!(s.short_edge_labels(), vec!["0", "10", "20", "30", "40"]);
    }

    #[test]
    fn system_100_labels() {
        let s = LabelSystem::System100;
        assert_eq!(
            s.long_edge_labels(),
            vec!["0", "7", "14", "21", "28", "35", "42", "49", "56"]
        );
        assert_eq!(s.short_edge_labels(), vec!["0", "14", "28", "42", "56"]);
    }

    #[test]
    fn unknown_name_falls_back_to_standard() {
        let s = LabelSystem::from_name("system_9000");
        assert_eq!(s, LabelSystem::Standard);
        assert_eq!(s.long_edge_labels(), LabelSystem::Standard.long_edge_labels());
    }

    #[test]
    fn names_round_trip() {
        for s in [
            LabelSystem::Standard,
            LabelSystem::System50,
            LabelSystem::System100,
        ] {
            assert_eq!(LabelSystem::from_name(s.name()), s);
        }
    }
}
