use crate::{
    comparator::NullOrder,
    test_support::{User, user_age, user_id, user_name, user_score},
};
use proptest::prelude::*;
use std::cmp::Ordering;

fn ages(users: &[User]) -> Vec<Option<i32>> {
    users.iter().map(|user| user.age).collect()
}

fn population() -> Vec<User> {
    vec![
        User::new(1, "c").with_age(40),
        User::new(2, "a"),
        User::new(3, "b").with_age(20),
        User::new(4, "d"),
        User::new(5, "e").with_age(30),
    ]
}

#[test]
fn comparator_orders_ascending() {
    let mut users = population();
    users.sort_by(|a, b| user_name().comparator().compare(a, b));

    let names: Vec<_> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);
}

#[test]
fn null_placement_follows_variant() {
    let age = user_age();

    let mut users = population();
    users.sort_by(|a, b| age.comparator_null_fields_first().compare(a, b));
    assert_eq!(ages(&users), [None, None, Some(20), Some(30), Some(40)]);

    users.sort_by(|a, b| age.comparator_null_fields_last().compare(a, b));
    assert_eq!(ages(&users), [Some(20), Some(30), Some(40), None, None]);
}

#[test]
fn plain_comparator_ranks_nulls_last() {
    let age = user_age();

    assert_eq!(age.comparator().null_order(), NullOrder::Last);
    assert_eq!(age.comparator(), age.comparator_null_fields_last());
    assert_ne!(age.comparator(), age.comparator_null_fields_first());
}

#[test]
fn null_ties_are_equal() {
    let comparator = user_age().comparator_null_fields_first();

    assert_eq!(
        comparator.compare(&User::new(1, "a"), &User::new(2, "b")),
        Ordering::Equal
    );
}

#[test]
fn reversal_keeps_null_placement() {
    let comparator = user_age().comparator_null_fields_last().reversed();
    assert!(comparator.is_reversed());

    let mut users = population();
    users.sort_by(|a, b| comparator.compare(a, b));
    assert_eq!(ages(&users), [Some(40), Some(30), Some(20), None, None]);

    assert!(!comparator.reversed().is_reversed());
}

#[test]
fn floating_point_uses_total_order() {
    let score = user_score();
    let mut users = vec![
        User::new(1, "nan").with_score(f64::NAN),
        User::new(2, "pos").with_score(1.5),
        User::new(3, "neg").with_score(-0.0),
        User::new(4, "zero").with_score(0.0),
    ];
    users.sort_by(|a, b| score.comparator().compare(a, b));

    let names: Vec<_> = users.iter().map(|user| user.name.as_str()).collect();
    assert_eq!(names, ["neg", "zero", "pos", "nan"]);
}

#[test]
fn non_nullable_variants_are_one_comparator() {
    let id = user_id();

    assert_eq!(id.comparator(), id.comparator_null_fields_first());
    assert_eq!(id.comparator(), id.comparator_null_fields_last());
    assert!(!id.comparator().is_nullable());
}

proptest! {
    #[test]
    fn non_nullable_variants_agree_on_every_pair(left in any::<i32>(), right in any::<i32>()) {
        let id = user_id();
        let (a, b) = (User::new(left, "a"), User::new(right, "b"));
        let expected = left.cmp(&right);

        prop_assert_eq!(id.comparator().compare(&a, &b), expected);
        prop_assert_eq!(id.comparator_null_fields_first().compare(&a, &b), expected);
        prop_assert_eq!(id.comparator_null_fields_last().compare(&a, &b), expected);
    }
}
