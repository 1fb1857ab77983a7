use crate::{
    predicate::{Filter, Inclusion},
    test_support::{User, user_age, user_id},
};
use proptest::prelude::*;

fn arb_age() -> impl Strategy<Value = Option<i32>> {
    proptest::option::of(-4..4i32)
}

fn arb_inclusion() -> impl Strategy<Value = Inclusion> {
    prop_oneof![
        Just(Inclusion::StartExclusiveEndExclusive),
        Just(Inclusion::StartInclusiveEndExclusive),
        Just(Inclusion::StartExclusiveEndInclusive),
        Just(Inclusion::StartInclusiveEndInclusive),
    ]
}

fn aged(age: Option<i32>) -> User {
    User {
        age,
        ..User::new(1, "probe")
    }
}

proptest! {
    #[test]
    fn not_equal_complements_equal(operand in -4..4i32, age in arb_age()) {
        let field = user_age();
        let entity = aged(age);

        prop_assert_eq!(field.not_equal(operand).test(&entity), !field.equal(operand).test(&entity));
    }

    #[test]
    fn range_negations_complement(operand in -4..4i32, age in arb_age()) {
        let field = user_age();
        let entity = aged(age);

        prop_assert_eq!(
            field.less_than(operand).test(&entity),
            !field.greater_or_equal(operand).test(&entity)
        );
        prop_assert_eq!(
            field.less_or_equal(operand).test(&entity),
            !field.greater_than(operand).test(&entity)
        );
    }

    #[test]
    fn between_negation_agrees_with_not_between(
        start in -4..4i32,
        end in -4..4i32,
        inclusion in arb_inclusion(),
        age in arb_age(),
    ) {
        let field = user_age();
        let entity = aged(age);
        let between = field.between(start, end, inclusion);

        prop_assert_eq!(
            between.negate().test(&entity),
            field.not_between(start, end, inclusion).test(&entity)
        );
        prop_assert_eq!(between.negate().test(&entity), !between.test(&entity));
    }

    #[test]
    fn between_matches_its_boundary_definition(
        start in -4..4i32,
        end in -4..4i32,
        inclusion in arb_inclusion(),
        value in -4..4i32,
    ) {
        let lower = if inclusion.is_start_inclusive() { value >= start } else { value > start };
        let upper = if inclusion.is_end_inclusive() { value <= end } else { value < end };

        prop_assert_eq!(
            user_age().between(start, end, inclusion).test(&aged(Some(value))),
            lower && upper
        );
    }

    #[test]
    fn not_in_is_non_membership(
        set in proptest::collection::vec(-4..4i32, 0..6),
        age in arb_age(),
    ) {
        let field = user_age();
        let entity = aged(age);
        let expected = age.is_none_or(|value| !set.contains(&value));

        prop_assert_eq!(field.not_in(set.clone()).test(&entity), expected);
        prop_assert_eq!(field.in_set(set).test(&entity), !expected);
    }

    #[test]
    fn filter_negation_complements(
        low in -4..4i32,
        high in -4..4i32,
        id in -4..4i32,
        age in arb_age(),
    ) {
        let filter = Filter::from(user_id().greater_than(low))
            .and(user_age().less_or_equal(high))
            .or(user_age().equal(low));
        let entity = User { id, ..aged(age) };

        prop_assert_eq!(filter.negate().test(&entity), !filter.test(&entity));
    }
}
