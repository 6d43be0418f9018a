//! Fixed lookup of the Basketball Victoria competitions the tool knows about.

use super::ids::CompetitionId;

/// Named competition, selectable on the command line with `--competition`.
///
/// The ids behind these names are placeholders, not confirmed against the
/// Synergy API. Pass `--competition-id` with the provider's id for live calls.
///
/// # Examples
///
/// ```rust
/// use bigv_stats::Competition;
///
/// let comp = Competition::BigVMen;
/// assert_eq!(comp.label(), "Big V Men");
/// assert!(Competition::ALL.contains(&comp));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Competition {
    /// NBL1 South, men's
    Nbl1SouthMen,
    /// NBL1 South, women's
    Nbl1SouthWomen,
    /// Big V Championship, men's
    BigVMen,
    /// Big V Championship, women's
    BigVWomen,
}

impl Competition {
    pub const ALL: [Competition; 4] = [
        Competition::Nbl1SouthMen,
        Competition::Nbl1SouthWomen,
        Competition::BigVMen,
        Competition::BigVWomen,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Competition::Nbl1SouthMen => "NBL1 South Men",
            Competition::Nbl1SouthWomen => "NBL1 South Women",
            Competition::BigVMen => "Big V Men",
            Competition::BigVWomen => "Big V Women",
        }
    }

    /// Placeholder competition id for the `competitions/{id}/seasons` route.
    ///
    /// Not a confirmed Synergy id; `--competition-id` overrides it.
    pub fn id(self) -> CompetitionId {
        let raw = match self {
            Competition::Nbl1SouthMen => "0e4f1ab6-e1d4-11ef-adf4-c9b5f45cb025",
            Competition::Nbl1SouthWomen => "1c3a9d52-e1d4-11ef-adf4-c9b5f45cb025",
            Competition::BigVMen => "2a7be4f0-e1d4-11ef-adf4-c9b5f45cb025",
            Competition::BigVWomen => "38d61c8e-e1d4-11ef-adf4-c9b5f45cb025",
        };
        CompetitionId::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = Competition::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Competition::ALL.len());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = Competition::ALL.iter().map(|c| c.id().0).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Competition::ALL.len());
    }

    #[test]
    fn test_value_enum_names() {
        use clap::ValueEnum;
        let value = Competition::BigVMen.to_possible_value().unwrap();
        assert_eq!(value.get_name(), "big-v-men");
    }
}
