//! Shared fixture entities and fields for core tests.

use crate::{
    field::{DoubleField, FieldBuilder, ForeignKeyField, IntField, StringField},
    identity::TableIdentifier,
};

pub const USER: TableIdentifier<User> = TableIdentifier::new("db", "app", "user");
pub const ORDER: TableIdentifier<Order> = TableIdentifier::new("db", "app", "order");

///
/// User
///

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub age: Option<i32>,
    pub score: f64,
}

impl User {
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            age: None,
            score: 0.0,
        }
    }

    pub const fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub const fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }
}

///
/// Order
///

#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: Option<i32>,
}

impl Order {
    pub const fn new(id: i32, user_id: Option<i32>) -> Self {
        Self { id, user_id }
    }
}

pub fn user_id() -> IntField<User> {
    FieldBuilder::identity(USER.column("id"))
        .getter(|user: &User| user.id)
        .setter(|user: &mut User, id| user.id = id)
        .unique(true)
        .build()
        .expect("user.id fixture")
}

pub fn user_name() -> StringField<User> {
    FieldBuilder::identity(USER.column("name"))
        .getter(|user: &User| user.name.clone())
        .setter(|user: &mut User, name| user.name = name)
        .build()
        .expect("user.name fixture")
}

pub fn user_age() -> IntField<User> {
    FieldBuilder::identity(USER.column("age"))
        .nullable_getter(|user: &User| user.age)
        .nullable_setter(|user: &mut User, age| user.age = age)
        .build()
        .expect("user.age fixture")
}

pub fn user_score() -> DoubleField<User> {
    FieldBuilder::identity(USER.column("score"))
        .getter(|user: &User| user.score)
        .setter(|user: &mut User, score| user.score = score)
        .build()
        .expect("user.score fixture")
}

pub fn order_user_id() -> ForeignKeyField<Order, i32, i32, User> {
    FieldBuilder::identity(ORDER.column("user_id"))
        .nullable_getter(|order: &Order| order.user_id)
        .nullable_setter(|order: &mut Order, user_id| order.user_id = user_id)
        .build_foreign_key(user_id())
        .expect("order.user_id fixture")
}
