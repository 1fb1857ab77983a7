mod property;

use crate::{
    predicate::{Condition, Filter, Inclusion, PredicateKind, PredicateType},
    test_support::{User, user_age, user_id, user_name, user_score},
    value::Value,
};

// ---- helpers -----------------------------------------------------------

fn aged(age: Option<i32>) -> User {
    User {
        age,
        ..User::new(1, "ice")
    }
}

// ---- negation ----------------------------------------------------------

#[test]
fn negated_forms_are_flag_flips() {
    let id = user_id();

    assert_eq!(id.not_equal(3), id.equal(3).negate());
    assert_eq!(id.less_than(3), id.greater_or_equal(3).negate());
    assert_eq!(id.less_or_equal(3), id.greater_than(3).negate());
    assert_eq!(
        id.not_between(1, 5, Inclusion::StartInclusiveEndInclusive),
        id.between(1, 5, Inclusion::StartInclusiveEndInclusive).negate()
    );
    assert_eq!(id.not_in([1, 2]), id.in_set([1, 2]).negate());
}

#[test]
fn double_negation_is_identity() {
    let name = user_name();
    let predicate = name.equal("ice".to_string());

    assert_eq!(predicate.negate().negate(), predicate);
}

#[test]
fn null_fails_every_positive_operator() {
    let age = user_age();
    let entity = aged(None);

    let positives = [
        age.equal(3),
        age.greater_than(3),
        age.greater_or_equal(3),
        age.between(1, 5, Inclusion::StartInclusiveEndInclusive),
        age.in_set([3]),
    ];
    for predicate in positives {
        assert!(!predicate.test(&entity), "{predicate:?}");
        assert!(predicate.negate().test(&entity), "{predicate:?}");
    }

    assert!(age.not_equal(3).test(&entity));
    assert!(age.less_than(3).test(&entity));
    assert!(age.less_or_equal(3).test(&entity));
    assert!(age.not_in([3]).test(&entity));
}

#[test]
fn ordering_operators_follow_natural_order() {
    let age = user_age();
    let entity = aged(Some(30));

    assert!(age.greater_than(29).test(&entity));
    assert!(!age.greater_than(30).test(&entity));
    assert!(age.greater_or_equal(30).test(&entity));
    assert!(age.less_than(31).test(&entity));
    assert!(!age.less_than(30).test(&entity));
    assert!(age.less_or_equal(30).test(&entity));
}

#[test]
fn nan_never_satisfies_a_positive_operator() {
    let score = user_score();
    let entity = User::new(1, "ice").with_score(f64::NAN);

    assert!(!score.equal(f64::NAN).test(&entity));
    assert!(!score.greater_than(0.0).test(&entity));
    assert!(!score.greater_or_equal(f64::NEG_INFINITY).test(&entity));
    assert!(!score.in_set([f64::NAN]).test(&entity));

    assert!(score.not_equal(f64::NAN).test(&entity));
    assert!(score.less_than(0.0).test(&entity));
    assert!(score.not_in([f64::NAN]).test(&entity));
}

#[test]
fn signed_zeros_compare_equal() {
    let score = user_score();
    let entity = User::new(1, "ice").with_score(-0.0);

    assert!(score.equal(0.0).test(&entity));
    assert!(score.in_set([0.0]).test(&entity));
}

// ---- between -----------------------------------------------------------

#[test]
fn between_boundaries_follow_inclusion() {
    let age = user_age();

    for inclusion in Inclusion::ALL {
        let predicate = age.between(10, 20, inclusion);

        assert_eq!(
            predicate.test(&aged(Some(10))),
            inclusion.is_start_inclusive(),
            "{inclusion:?}"
        );
        assert_eq!(
            predicate.test(&aged(Some(20))),
            inclusion.is_end_inclusive(),
            "{inclusion:?}"
        );
        assert!(predicate.test(&aged(Some(15))), "{inclusion:?}");
        assert!(!predicate.test(&aged(Some(9))), "{inclusion:?}");
        assert!(!predicate.test(&aged(Some(21))), "{inclusion:?}");
    }
}

#[test]
fn inverted_range_matches_nothing() {
    let age = user_age();
    let predicate = age.between(20, 10, Inclusion::StartInclusiveEndInclusive);

    for probe in [5, 10, 15, 20, 25] {
        assert!(!predicate.test(&aged(Some(probe))));
        assert!(predicate.negate().test(&aged(Some(probe))));
    }
}

#[test]
fn inclusion_defaults_to_half_open() {
    assert_eq!(Inclusion::default(), Inclusion::StartInclusiveEndExclusive);
    assert_eq!(
        user_id().between(1, 2, Inclusion::default()).inclusion(),
        Some(Inclusion::StartInclusiveEndExclusive)
    );
    assert_eq!(user_id().equal(1).inclusion(), None);
}

// ---- membership --------------------------------------------------------

#[test]
fn in_set_operands_are_sorted_and_deduplicated() {
    let predicate = user_id().in_set([3, 1, 2, 1]);

    assert_eq!(
        predicate.condition(),
        &Condition::In(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
    );
    assert_eq!(predicate, user_id().in_set([1, 2, 3]));
}

#[test]
fn empty_set_matches_nothing() {
    let predicate = user_id().in_set(Vec::<i32>::new());
    let entity = User::new(7, "ice");

    assert!(!predicate.test(&entity));
    assert!(predicate.negate().test(&entity));
}

// ---- rewrite table -----------------------------------------------------

#[test]
fn predicate_type_rewrites_negation() {
    let id = user_id();
    let cases = [
        (id.equal(1), PredicateType::Equal),
        (id.not_equal(1), PredicateType::NotEqual),
        (id.greater_than(1), PredicateType::GreaterThan),
        (id.less_or_equal(1), PredicateType::LessOrEqual),
        (id.greater_or_equal(1), PredicateType::GreaterOrEqual),
        (id.less_than(1), PredicateType::LessThan),
        (id.between(1, 2, Inclusion::default()), PredicateType::Between),
        (id.not_between(1, 2, Inclusion::default()), PredicateType::NotBetween),
        (id.in_set([1]), PredicateType::In),
        (id.not_in([1]), PredicateType::NotIn),
    ];

    for (predicate, expected) in cases {
        assert_eq!(predicate.predicate_type(), expected);
        assert_eq!(predicate.negate().predicate_type(), expected.complement());
        assert_eq!(expected.kind(), predicate.kind());
    }
}

#[test]
fn less_than_keeps_its_positive_kind() {
    let predicate = user_id().less_than(5);

    assert_eq!(predicate.kind(), PredicateKind::GreaterOrEqual);
    assert!(predicate.is_negated());
    assert_eq!(predicate.predicate_type().to_string(), "LessThan");
}

// ---- fingerprint -------------------------------------------------------

#[test]
fn fingerprint_is_stable_for_equal_predicates() {
    let left = user_id().in_set([3, 1, 2]);
    let right = user_id().in_set([1, 2, 3, 3]);

    assert_eq!(left.fingerprint(), right.fingerprint());
    assert_eq!(left.fingerprint().as_hex().len(), 64);
}

#[test]
fn fingerprint_folds_signed_zero() {
    let score = user_score();
    let (positive, negative) = (score.equal(0.0), score.equal(-0.0));

    assert_eq!(positive, negative);
    assert_eq!(positive.fingerprint(), negative.fingerprint());
    assert_eq!(
        score
            .between(-0.0, 1.0, Inclusion::StartInclusiveEndInclusive)
            .fingerprint(),
        score
            .between(0.0, 1.0, Inclusion::StartInclusiveEndInclusive)
            .fingerprint()
    );
}

#[test]
fn in_set_collapses_signed_zeros() {
    let score = user_score();
    let both = score.in_set([0.0, -0.0]);

    let Condition::In(values) = both.condition() else {
        panic!("expected membership condition");
    };
    assert_eq!(values.len(), 1);
    assert!(matches!(values[0], Value::Double(v) if v.is_sign_positive()));
    assert_eq!(both.fingerprint(), score.in_set([0.0]).fingerprint());
    assert!(both.test(&User::new(1, "ice").with_score(-0.0)));
}

#[test]
fn fingerprint_separates_negation_column_and_operands() {
    let predicate = user_id().equal(1);

    assert_ne!(predicate.fingerprint(), predicate.negate().fingerprint());
    assert_ne!(predicate.fingerprint(), user_age().equal(1).fingerprint());
    assert_ne!(predicate.fingerprint(), user_id().equal(2).fingerprint());
    assert_ne!(
        user_id().between(1, 2, Inclusion::StartExclusiveEndExclusive).fingerprint(),
        user_id().between(1, 2, Inclusion::StartInclusiveEndInclusive).fingerprint()
    );
}

// ---- filter ------------------------------------------------------------

#[test]
fn filter_negation_applies_de_morgan() {
    let id = user_id();
    let age = user_age();
    let filter = id.greater_than(5).and(age.equal(30));

    assert_eq!(
        filter.negate(),
        Filter::Or(vec![
            Filter::Field(id.less_or_equal(5)),
            Filter::Field(age.not_equal(30)),
        ])
    );

    for entity in [
        User::new(6, "a").with_age(30),
        User::new(6, "b"),
        User::new(4, "c").with_age(30),
    ] {
        assert_eq!(filter.negate().test(&entity), !filter.test(&entity));
    }
}

#[test]
fn filter_composition_flattens() {
    let id = user_id();
    let filter = id.equal(1).or(id.equal(2)).or(id.equal(3));

    match &filter {
        Filter::Or(children) => assert_eq!(children.len(), 3),
        other => panic!("expected a flat Or, got {other:?}"),
    }
    assert!(filter.test(&User::new(2, "x")));
    assert!(!filter.test(&User::new(4, "x")));
}

#[test]
fn empty_composites_are_identities() {
    let entity = User::new(1, "x");

    assert!(Filter::<User>::And(Vec::new()).test(&entity));
    assert!(!Filter::<User>::Or(Vec::new()).test(&entity));
    assert!(!Filter::<User>::And(Vec::new()).negate().test(&entity));
}
