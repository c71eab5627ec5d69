mod common;

use std::time::SystemTime;

use fieldseed_core::{Error, TemporalSemantics, ValueCategory};
use fieldseed_plan::{PlanFormat, load_plan_str};
use fieldseed_populate::{
    FieldOutcome, FieldPopulator, PopulateError, PopulationPolicies, Populate, SkipReason,
    populate, populate_with,
};

use common::{
    Badge, Chronology, Compact, Gapped, Level, Locked, Profile, Ratios, Stamped, WithPath,
};

#[test]
fn badge_matches_hand_computed_values() {
    let policies = PopulationPolicies::new().with_length_or_scale(|_| 5);
    let mut badge = Badge::default();
    let report = populate_with(10, &mut badge, &policies).expect("populate badge");

    assert_eq!(badge.code, -118);
    assert_eq!(badge.label, "+++++");
    assert_eq!(report.populated, vec!["code", "label"]);
    assert!(report.skipped.is_empty());
}

#[test]
fn same_seed_produces_identical_objects() {
    let mut first = Profile::default();
    let mut second = Profile::default();
    populate(42, &mut first).expect("populate first");
    populate(42, &mut second).expect("populate second");

    assert_eq!(first, second);
    assert_ne!(first, Profile::default());
}

#[test]
fn different_seeds_produce_different_objects() {
    let mut first = Profile::default();
    let mut second = Profile::default();
    populate(1, &mut first).expect("populate first");
    populate(2, &mut second).expect("populate second");

    assert_ne!(first.id, second.id);
    assert_ne!(first.nickname, second.nickname);
}

#[test]
fn default_lengths_and_scales_apply() {
    let mut profile = Profile::default();
    populate(42, &mut profile).expect("populate profile");

    assert_eq!(profile.nickname.chars().count(), 20);
    assert_eq!(profile.tags.len(), 20);
    assert_eq!(profile.digest.len(), 20);
    assert_eq!(profile.score.scale(), 4);
    assert!(profile.homepage.is_some());
    assert!(profile.born.is_some());
}

#[test]
fn nullable_fields_are_set_to_some() {
    let mut profile = Profile::default();
    populate(9, &mut profile).expect("populate profile");

    let homepage = profile.homepage.expect("homepage set");
    assert_eq!(homepage.as_str(), "http://sample.url.org/seed/9/position/9");
}

#[test]
fn enum_constant_follows_position() {
    let mut profile = Profile::default();
    populate(0, &mut profile).expect("populate profile");
    // level sits at position 1
    assert_eq!(profile.level, Level::Medium);
}

#[test]
fn excluded_field_keeps_its_value() {
    let policies = PopulationPolicies::new().with_exclusion(|field| field.name == "gap");
    let mut gapped = Gapped {
        gap: "untouched".to_string(),
        ..Gapped::default()
    };
    let report = populate_with(17, &mut gapped, &policies).expect("populate gapped");

    assert_eq!(gapped.gap, "untouched");
    assert_eq!(report.was_skipped("gap"), Some(SkipReason::Excluded));
    assert_eq!(report.position_of("second"), Some(1));
}

#[test]
fn excluded_field_does_not_shift_later_fields() {
    let policies = PopulationPolicies::new().with_exclusion(|field| field.name == "gap");
    let mut gapped = Gapped::default();
    let mut compact = Compact::default();
    populate_with(17, &mut gapped, &policies).expect("populate gapped");
    populate(17, &mut compact).expect("populate compact");

    assert_eq!(gapped.first, compact.first);
    assert_eq!(gapped.second, compact.second);
    assert_eq!(gapped.third, compact.third);
}

#[test]
fn unsupported_field_is_skipped_without_shifting() {
    let mut with_path = WithPath::default();
    let mut compact = Compact::default();
    let report = populate(23, &mut with_path).expect("populate with path");
    populate(23, &mut compact).expect("populate compact");

    assert_eq!(report.was_skipped("path"), Some(SkipReason::Unsupported));
    assert!(with_path.path.as_os_str().is_empty());
    assert_eq!(with_path.second, compact.second);
    assert_eq!(with_path.third, compact.third);
}

#[test]
fn float_at_position_zero_is_infinite() {
    let mut ratios = Ratios::default();
    populate(10, &mut ratios).expect("float division by zero is not an error");

    assert!(ratios.ratio.is_infinite());
    assert!(ratios.ratio.is_sign_positive());
    assert_eq!(ratios.coarse, 10.0_f32 + i32::MAX as f32);
}

#[test]
fn decimal_at_position_zero_overflows_with_context() {
    let mut price = common::Price::default();
    let err = populate(10, &mut price).expect_err("decimal quotient is infinite");

    match &err {
        PopulateError::Field {
            object,
            field,
            seed,
            position,
            ..
        } => {
            assert!(object.ends_with("Price"));
            assert_eq!(*field, "amount");
            assert_eq!(*seed, 10);
            assert_eq!(*position, 0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(err.root_cause(), Some(Error::Overflow(_))));
}

#[test]
fn oversized_decimal_scale_overflows() {
    let policies = PopulationPolicies::new().with_length_or_scale(|_| 29);
    let mut profile = Profile::default();
    let err = populate_with(3, &mut profile, &policies).expect_err("scale too large");

    assert_eq!(err.field(), "score");
    assert!(matches!(err.root_cause(), Some(Error::Overflow(_))));
    // fields before the failure stay written
    assert_ne!(profile.id, 0);
}

#[test]
fn decimal_scale_without_room_for_the_integer_digits_overflows() {
    let policies = PopulationPolicies::new().with_length_or_scale(|_| 20);
    let mut profile = Profile::default();
    let err = populate_with(0, &mut profile, &policies).expect_err("scale does not fit");

    assert_eq!(err.field(), "score");
    assert!(matches!(err.root_cause(), Some(Error::Overflow(_))));

    let policies = PopulationPolicies::new().with_length_or_scale(|_| 18);
    populate_with(0, &mut profile, &policies).expect("eighteen digits fit");
    assert_eq!(profile.score.scale(), 18);
}

#[test]
fn chronology_fills_every_temporal_slot() {
    let mut chronology = Chronology::default();
    let report = populate(42, &mut chronology).expect("populate chronology");

    assert_eq!(report.populated.len(), 16);
    assert!(report.skipped.is_empty());
    // 9^42 seconds saturates
    assert_eq!(chronology.elapsed, Some(chrono::TimeDelta::MAX));
    let timeout = chronology.timeout.expect("timeout");
    assert_eq!(timeout.as_secs(), i64::MAX as u64);
    let clock = chronology.offset_clock.expect("offset clock");
    assert_eq!(clock.offset.local_minus_utc(), 0);
    // (42 + 12) folds to 06:54:54
    assert_eq!(clock.to_string(), "06:54:54+00:00");
    assert_eq!(chronology.rate.scale(), 4);
}

#[test]
fn read_only_field_fails_with_context_and_no_rollback() {
    let mut locked = Locked::default();
    let err = populate(5, &mut locked).expect_err("frozen denies writes");

    match &err {
        PopulateError::Field {
            field,
            seed,
            position,
            ..
        } => {
            assert_eq!(*field, "frozen");
            assert_eq!(*seed, 5);
            assert_eq!(*position, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(
        err.root_cause(),
        Some(Error::AccessDenied { field: "frozen" })
    ));
    assert_eq!(locked.id, -2_147_483_643);
    assert_eq!(locked.after, 0);
    assert!(err.to_string().contains("seed 5, position 1"));
}

#[test]
fn single_field_path_matches_bulk_path() {
    let populator = FieldPopulator::default();
    let mut bulk = Profile::default();
    let report = populator.populate(42, &mut bulk).expect("populate bulk");

    let mut single = Profile::default();
    for descriptor in Profile::fields() {
        let position = report
            .position_of(descriptor.name())
            .expect("every profile field is populated");
        let outcome = populator
            .populate_field(&mut single, &descriptor, 42, position)
            .expect("populate field");
        assert!(outcome.is_populated());
    }
    assert_eq!(single, bulk);
}

#[test]
fn populate_named_reports_category_or_unknown_field() {
    let populator = FieldPopulator::default();
    let mut badge = Badge::default();

    let outcome = populator
        .populate_named(&mut badge, "label", 10, 1)
        .expect("label exists");
    assert_eq!(outcome, FieldOutcome::Populated(ValueCategory::String));
    assert_eq!(badge.label, "+".repeat(20));
    assert_eq!(badge.code, 0);

    let err = populator
        .populate_named(&mut badge, "missing", 10, 0)
        .expect_err("no such field");
    assert!(matches!(err, PopulateError::UnknownField { .. }));
    assert_eq!(err.field(), "missing");
}

#[test]
fn ambiguous_temporal_fields_follow_the_resolver() {
    let policies = PopulationPolicies::new().with_temporal_resolver(|field| {
        if field.name == "seen" {
            TemporalSemantics::Date
        } else {
            TemporalSemantics::Time
        }
    });
    let mut stamped = Stamped::default();
    populate_with(10, &mut stamped, &policies).expect("populate stamped");

    let midnight = time::Date::from_calendar_date(2000, time::Month::November, 11)
        .expect("valid date")
        .midnight()
        .assume_utc();
    assert_eq!(stamped.seen, SystemTime::from(midnight));
    let epoch = time::Date::from_calendar_date(1970, time::Month::January, 1).expect("epoch");
    assert_eq!(stamped.at.date(), epoch);
    assert_eq!(
        (stamped.at.hour(), stamped.at.minute(), stamped.at.second()),
        (11, 11, 11)
    );
}

#[test]
fn ambiguous_temporal_fields_default_to_timestamps() {
    let mut stamped = Stamped::default();
    populate(10, &mut stamped).expect("populate stamped");

    assert_eq!(stamped.at.year(), 2001);
    assert_eq!(stamped.at.hour(), 11);
    assert_ne!(stamped.at.time(), time::Time::MIDNIGHT);
}

#[test]
fn plan_compiles_into_policies() {
    let plan = r#"
plan_version = "0.1"
seed = 17

[[exclude]]
field = "gap"

[[length_or_scale]]
field = "third"
owner = "Gapped"
value = 3
"#;
    let validated = load_plan_str(plan, PlanFormat::Toml).expect("valid plan");
    let seed = validated.plan.seed.expect("plan seed");
    let policies = PopulationPolicies::from_plan(&validated.plan);

    let mut gapped = Gapped::default();
    let report = populate_with(seed, &mut gapped, &policies).expect("populate gapped");

    assert_eq!(report.was_skipped("gap"), Some(SkipReason::Excluded));
    assert!(gapped.gap.is_empty());
    assert_eq!(gapped.third.chars().count(), 3);
}
