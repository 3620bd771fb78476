//! # Property-Based Tests
//!
//! Invariants of the level codec checked over the whole `i32` range.

use proptest::collection::vec;
use proptest::prelude::*;
use reginald_core::{Anchor, Level};

/// Mixes the case of ASCII letters according to `mask`.
fn mix_case(name: &str, mask: &[bool]) -> String {
    name.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| {
            if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn any_anchor() -> impl Strategy<Value = Anchor> {
    prop::sample::select(Anchor::ALL.to_vec())
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Parsing the canonical form gives back the exact value.
    #[test]
    fn encode_then_parse_round_trips(value in any::<i32>()) {
        let level = Level::new(value);
        prop_assert_eq!(Level::parse(&level.encode()), Ok(level));
    }

    /// Encoding is stable: the canonical form of a parsed canonical form is
    /// itself.
    #[test]
    fn canonical_form_is_a_fixed_point(value in any::<i32>()) {
        let text = Level::new(value).encode();
        let reparsed = Level::parse(&text).expect("parse canonical");
        prop_assert_eq!(reparsed.encode(), text);
    }

    /// Every level lies in the band of the greatest anchor not exceeding it.
    #[test]
    fn level_lies_in_its_anchor_band(value in any::<i32>()) {
        let anchor = Level::new(value).anchor();

        if anchor != Anchor::Trace {
            prop_assert!(anchor.value() <= value);
        }
        for higher in Anchor::ALL.into_iter().filter(|a| *a > anchor) {
            prop_assert!(value < higher.value());
        }
    }

    /// Offsets inside a band render as `NAME+k`.
    #[test]
    fn in_band_offsets_render_with_plus(anchor in any_anchor(), k in 0i32..4) {
        let text = (anchor.level() + k).encode();
        if k == 0 {
            prop_assert_eq!(text, anchor.name());
        } else {
            prop_assert_eq!(text, format!("{}+{}", anchor.name(), k));
        }
    }

    /// Below TRACE the offset is negative and keeps the TRACE name.
    #[test]
    fn below_trace_renders_with_minus(k in 1i32..1_000_000) {
        prop_assert_eq!((Level::TRACE - k).encode(), format!("TRACE-{}", k));
    }

    /// Case never changes the parsed value.
    #[test]
    fn parse_ignores_case(
        anchor in any_anchor(),
        mask in vec(any::<bool>(), 1..6),
        offset in -1_000_000i32..1_000_000,
    ) {
        let text = format!("{}{:+}", mix_case(anchor.name(), &mask), offset);
        prop_assert_eq!(Level::parse(&text), Ok(anchor.level() + offset));
    }

    /// Any anchor plus any offset names the same value as its canonical form.
    #[test]
    fn non_canonical_spellings_normalize(anchor in any_anchor(), offset in -1000i32..1000) {
        let level = Level::parse(&format!("{}{:+}", anchor.name(), offset)).expect("parse");
        prop_assert_eq!(level, Level::new(anchor.value() + offset));
        prop_assert_eq!(Level::parse(&level.encode()), Ok(level));
    }

    /// Appending keeps the existing prefix byte for byte.
    #[test]
    fn append_text_preserves_prefix(prefix in vec(any::<u8>(), 0..32), value in any::<i32>()) {
        let level = Level::new(value);
        let mut buf = prefix.clone();
        level.append_text(&mut buf);

        prop_assert_eq!(&buf[..prefix.len()], &prefix[..]);
        let marshaled = level.marshal_text();
        prop_assert_eq!(&buf[prefix.len()..], marshaled.as_slice());
    }

    /// JSON and text hooks agree with each other and with the canonical form.
    #[test]
    fn hooks_share_the_canonical_form(value in any::<i32>()) {
        let level = Level::new(value);
        let json = level.marshal_json();
        let text = level.marshal_text();

        prop_assert_eq!(json, format!("\"{}\"", level.encode()).into_bytes());
        prop_assert_eq!(Level::unmarshal_json(&level.marshal_json()), Ok(level));
        prop_assert_eq!(Level::unmarshal_text(&text), Ok(level));
    }
}
