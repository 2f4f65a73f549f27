//! Property tests for the scoring engine

use proptest::prelude::*;
use squad_role_toolkit::attributes::VOCABULARY;
use squad_role_toolkit::classify::{classify, Category, Thresholds};
use squad_role_toolkit::normalize::{
    normalize_record, NormalizedPlayer, NormalizerConfig, PlayerRecord,
};
use squad_role_toolkit::roles::{IMPORTANT_WEIGHT, KEY_WEIGHT, USEFUL_WEIGHT};
use squad_role_toolkit::scoring::{breakdown, score};
use squad_role_toolkit::{RoleCatalog, RoleScore};

/// Build a player from optional whole-number ratings, one per vocabulary entry.
fn player(values: &[Option<u8>], missing_default: f64) -> NormalizedPlayer {
    let mut record = PlayerRecord::new(1, "Prop");
    for (code, value) in VOCABULARY.iter().zip(values) {
        if let Some(v) = value {
            record = record.with_attribute(code, &v.to_string());
        }
    }
    let config = NormalizerConfig {
        missing_default,
        degraded_fraction: 0.5,
    };
    normalize_record(&record, &config)
}

fn ratings() -> impl Strategy<Value = Vec<Option<u8>>> {
    prop::collection::vec(prop::option::weighted(0.8, 1u8..=20), VOCABULARY.len())
}

proptest! {
    #[test]
    fn score_is_bounded(values in ratings(), default in 0.0f64..=20.0, role in 0usize..85) {
        let catalog = RoleCatalog::builtin();
        let role = &catalog.roles()[role % catalog.len()];
        let p = player(&values, default);
        if let RoleScore::Scored(v) = score(&p, role) {
            prop_assert!((0.0..=20.0).contains(&v), "{} scored {}", role.id, v);
        }
    }

    #[test]
    fn denominator_is_role_local(values in ratings(), role in 0usize..85) {
        let catalog = RoleCatalog::builtin();
        let role = &catalog.roles()[role % catalog.len()];
        let b = breakdown(&player(&values, 10.0), role);
        let expected = KEY_WEIGHT * role.key.len() as u32
            + IMPORTANT_WEIGHT * role.important.len() as u32
            + USEFUL_WEIGHT * role.useful.len() as u32;
        prop_assert_eq!(b.applied_weight, expected);
    }

    #[test]
    fn raising_an_attribute_never_lowers_a_score(
        values in prop::collection::vec(1u8..=19, VOCABULARY.len()),
        role in 0usize..85,
        pick in 0usize..64,
        bump in 1u8..=19,
    ) {
        let catalog = RoleCatalog::builtin();
        let role = &catalog.roles()[role % catalog.len()];
        let attrs: Vec<&str> = role.weighted_attributes().map(|(a, _)| a).collect();
        let target = attrs[pick % attrs.len()];
        let idx = VOCABULARY.iter().position(|a| *a == target).unwrap();

        let before: Vec<Option<u8>> = values.iter().copied().map(Some).collect();
        let mut after = before.clone();
        after[idx] = Some((values[idx] + bump).min(20));

        let low = score(&player(&before, 10.0), role).value().unwrap();
        let high = score(&player(&after, 10.0), role).value().unwrap();
        prop_assert!(
            high >= low,
            "{}: {} -> {} lowered {} to {}",
            role.id,
            target,
            after[idx].unwrap(),
            low,
            high
        );
    }

    #[test]
    fn cutoff_is_inclusive(cutoff in 1.0f64..19.0) {
        let t = Thresholds::standard(cutoff + 1.0, cutoff, cutoff - 0.5, cutoff - 0.75).unwrap();
        prop_assert_eq!(classify(RoleScore::Scored(cutoff), &t), Category::Good);
        prop_assert_eq!(classify(RoleScore::Scored(cutoff + 1.0), &t), Category::Excellent);
    }
}

#[test]
fn all_twenty_beats_weak_key_attributes() {
    let catalog = RoleCatalog::builtin();
    let a = player(&vec![Some(20); VOCABULARY.len()], 10.0);
    for role in catalog.roles() {
        let mut values = vec![Some(20u8); VOCABULARY.len()];
        for key in role.key {
            let idx = VOCABULARY.iter().position(|c| c == key).unwrap();
            values[idx] = Some(1);
        }
        let b = player(&values, 10.0);

        let score_a = score(&a, role).value().unwrap();
        let score_b = score(&b, role).value().unwrap();
        assert_eq!(score_a, 20.0, "{}", role.id);
        assert!(score_a > score_b, "{}: {} vs {}", role.id, score_a, score_b);
    }
}

#[test]
fn nothing_observed_is_undefined_not_zero() {
    let catalog = RoleCatalog::builtin();
    let empty = player(&vec![None; VOCABULARY.len()], 0.0);
    for role in catalog.roles() {
        assert_eq!(score(&empty, role), RoleScore::Undefined, "{}", role.id);
    }
}
