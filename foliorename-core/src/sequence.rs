//! The pure naming-sequence generator: folio-number advancement,
//! recto/verso alternation and name assembly. No I/O lives here.

use crate::config::{RenameConfig, Side};
use std::path::Path;

/// How much the folio counter advances immediately before being used for
/// `index`: 1 on every recto transition except the very first entry,
/// 0 otherwise. One folio thereby serves exactly one recto + one verso
/// pair.
///
/// This is the single shared increment rule. Both the name computed for
/// `index` and the counter prepared for `index + 1` must go through it,
/// so the displayed plan and the applied plan can never drift apart.
pub fn folio_step(index: usize, first_side: Side) -> u32 {
    if index != 0 && Side::at_index(index, first_side) == Side::Recto {
        1
    } else {
        0
    }
}

/// The folio number used at `index`, obtained by folding [`folio_step`]
/// over all positions up to and including `index`. Plan computation
/// threads the counter instead; this closed traversal exists for callers
/// that need a single position.
pub fn folio_at_index(start_folio: u32, index: usize, first_side: Side) -> u32 {
    (0..=index).fold(start_folio, |folio, i| folio + folio_step(i, first_side))
}

/// Format a folio number as a decimal string zero-padded to `digits`
/// characters. A number wider than `digits` keeps its full width;
/// padding never truncates.
pub fn format_folio(folio: u32, digits: usize) -> String {
    format!("{folio:0digits$}")
}

/// Assemble the new base name for the entry at `index`, given the folio
/// counter value already advanced for that index:
/// prefix + padded folio number + side suffix + general suffix.
pub fn base_name(config: &RenameConfig, index: usize, folio: u32) -> String {
    let side = Side::at_index(index, config.first_side);
    format!(
        "{}{}{}{}",
        config.prefix,
        format_folio(folio, config.folio_digits),
        config.side_suffix(side),
        config.general_suffix
    )
}

/// The extension carried over to the new name: the text after the last
/// '.', dot included, or an empty string when the name has none.
/// Dot-leading names like `.gitignore` count as having no extension.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map_or_else(String::new, |ext| format!(".{}", ext.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EntryKind, RenameConfig};
    use proptest::prelude::*;

    fn config(first_side: Side) -> RenameConfig {
        RenameConfig {
            prefix: "MS1_".to_string(),
            start_folio: 10,
            folio_digits: 3,
            recto_suffix: "r".to_string(),
            verso_suffix: "v".to_string(),
            first_side,
            general_suffix: String::new(),
            kind: EntryKind::Files,
            ignore_extension: false,
        }
    }

    #[test]
    fn test_step_is_zero_at_index_zero() {
        assert_eq!(folio_step(0, Side::Recto), 0);
        assert_eq!(folio_step(0, Side::Verso), 0);
    }

    #[test]
    fn test_step_bumps_on_recto_transitions_only() {
        // Recto-first: rectos sit at even indices.
        assert_eq!(folio_step(1, Side::Recto), 0);
        assert_eq!(folio_step(2, Side::Recto), 1);
        assert_eq!(folio_step(3, Side::Recto), 0);
        assert_eq!(folio_step(4, Side::Recto), 1);
        // Verso-first: rectos sit at odd indices.
        assert_eq!(folio_step(1, Side::Verso), 1);
        assert_eq!(folio_step(2, Side::Verso), 0);
        assert_eq!(folio_step(3, Side::Verso), 1);
    }

    #[test]
    fn test_folio_at_index_recto_first() {
        let folios: Vec<u32> = (0..6)
            .map(|i| folio_at_index(10, i, Side::Recto))
            .collect();
        assert_eq!(folios, vec![10, 10, 11, 11, 12, 12]);
    }

    #[test]
    fn test_folio_at_index_verso_first() {
        let folios: Vec<u32> = (0..5)
            .map(|i| folio_at_index(5, i, Side::Verso))
            .collect();
        assert_eq!(folios, vec![5, 6, 6, 7, 7]);
    }

    #[test]
    fn test_format_folio_pads_to_width() {
        assert_eq!(format_folio(7, 3), "007");
        assert_eq!(format_folio(99, 4), "0099");
    }

    #[test]
    fn test_format_folio_never_truncates() {
        assert_eq!(format_folio(99, 1), "99");
        assert_eq!(format_folio(12345, 3), "12345");
    }

    #[test]
    fn test_base_name_assembly() {
        let config = config(Side::Recto);
        assert_eq!(base_name(&config, 0, 10), "MS1_010r");
        assert_eq!(base_name(&config, 1, 10), "MS1_010v");
    }

    #[test]
    fn test_base_name_with_general_suffix() {
        let config = RenameConfig {
            general_suffix: "_web".to_string(),
            ..config(Side::Recto)
        };
        assert_eq!(base_name(&config, 0, 10), "MS1_010r_web");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("img1.jpg"), ".jpg");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".gitignore"), "");
    }

    proptest! {
        /// The counter used for index i+1 equals the counter for index i
        /// plus exactly 0 or 1; it never decreases or jumps.
        #[test]
        fn prop_folio_counter_is_monotone(
            start in 0u32..10_000,
            len in 1usize..64,
            recto_first in any::<bool>(),
        ) {
            let first_side = if recto_first { Side::Recto } else { Side::Verso };
            let mut folio = start;
            for i in 0..len {
                let step = folio_step(i, first_side);
                prop_assert!(step <= 1);
                folio += step;
                prop_assert_eq!(folio, folio_at_index(start, i, first_side));
            }
        }

        /// Every folio number except possibly the endpoints appears for
        /// exactly one recto and one verso entry.
        #[test]
        fn prop_one_folio_per_recto_verso_pair(
            start in 0u32..1_000,
            pairs in 1usize..32,
        ) {
            let len = pairs * 2;
            for i in (0..len).step_by(2) {
                let recto = folio_at_index(start, i, Side::Recto);
                let verso = folio_at_index(start, i + 1, Side::Recto);
                prop_assert_eq!(recto, verso);
                prop_assert_eq!(recto, start + u32::try_from(i / 2).unwrap());
            }
        }
    }
}
