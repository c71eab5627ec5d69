mod common;

use fieldseed_core::{Error, TypeShape};
use fieldseed_plan::{PlanFormat, load_plan_str};
use fieldseed_populate::{
    FieldFailure, PopulateError, PopulationPolicies, SkipReason, populate, populate_with,
};

use common::{Attachment, Invoice, Point, Segment};

fn composites() -> PopulationPolicies {
    PopulationPolicies::new().with_composite(|_, ty| ty.shape == TypeShape::Composite)
}

#[test]
fn composites_are_opt_in() {
    let mut segment = Segment::default();
    let report = populate(4, &mut segment).expect("populate segment");

    assert_eq!(segment.start, Point::default());
    assert_eq!(segment.end, Point::default());
    assert_eq!(report.was_skipped("start"), Some(SkipReason::Unsupported));
    assert_eq!(report.was_skipped("end"), Some(SkipReason::Unsupported));
}

#[test]
fn sibling_composites_get_distinct_seeds() {
    let mut segment = Segment::default();
    let report = populate_with(4, &mut segment, &composites()).expect("populate segment");

    assert_ne!(segment.start, Point::default());
    assert_ne!(segment.start.x, segment.end.x);
    assert_ne!(segment.start.label, segment.end.label);

    assert_eq!(report.nested("start").map(|nested| nested.seed), Some(400_001));
    assert_eq!(report.nested("end").map(|nested| nested.seed), Some(400_002));
    assert_eq!(report.position_of("end"), Some(2));
}

#[test]
fn nested_object_equals_a_direct_population_under_the_derived_seed() {
    let mut segment = Segment::default();
    populate_with(4, &mut segment, &composites()).expect("populate segment");

    let mut direct = Point::default();
    populate(400_001, &mut direct).expect("populate point");
    assert_eq!(segment.start, direct);
}

#[test]
fn nested_failure_reports_the_full_path() {
    let mut invoice = Invoice::default();
    let err = populate_with(3, &mut invoice, &composites()).expect_err("nested decimal overflows");

    assert_eq!(err.field_path(), vec!["price", "amount"]);
    assert!(matches!(err.root_cause(), Some(Error::Overflow(_))));

    let PopulateError::Field {
        seed,
        position,
        source,
        ..
    } = &err
    else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!((*seed, *position), (3, 1));
    let FieldFailure::Nested(inner) = source else {
        panic!("expected nested failure, got {source:?}");
    };
    assert!(matches!(
        inner.as_ref(),
        PopulateError::Field {
            field: "amount",
            seed: 300_001,
            position: 0,
            ..
        }
    ));
    assert_ne!(invoice.number, 0);
}

#[test]
fn composite_without_default_constructor_fails() {
    let policies = PopulationPolicies::new().with_composite(|field, _| field.name == "path");
    let mut attachment = Attachment::default();
    let err = populate_with(8, &mut attachment, &policies).expect_err("paths are not populable");

    assert_eq!(err.field(), "path");
    assert!(matches!(
        err.root_cause(),
        Some(Error::NoDefaultConstructor { .. })
    ));
    assert!(err.to_string().contains("position 1"));
}

#[test]
fn plan_composite_rules_select_by_type_name() {
    let plan = r#"{
        "plan_version": "0.1",
        "composite": [{ "type_name": "Point", "field": "end" }]
    }"#;
    let validated = load_plan_str(plan, PlanFormat::Json).expect("valid plan");
    let policies = PopulationPolicies::from_plan(&validated.plan);

    let mut segment = Segment::default();
    let report = populate_with(4, &mut segment, &policies).expect("populate segment");

    assert_eq!(report.was_skipped("start"), Some(SkipReason::Unsupported));
    assert_eq!(segment.start, Point::default());
    // start is skipped, so end takes position 1
    assert_eq!(report.nested("end").map(|nested| nested.seed), Some(400_001));
}
