//! Property-based tests for builder invariants using proptest.
//!
//! Invariants tested:
//! - Tag deduplication across arbitrary insertion sequences
//! - Insertion-order irrelevance of built tag snapshots
//! - Last-write-wins for scalar chain methods
//! - Defensive-copy independence of built entities
//! - Required-field enforcement before any entity is allocated

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::collections::HashSet;

use proptest::prelude::*;

use fabrica::{
    BuildError, Calzone, Interest, NyPizza, Person, PizzaBuilder, ProfileBuilder, Size, Topping,
};

/// Optimized proptest config for builder property tests.
fn builder_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 256,
        ..ProptestConfig::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STRATEGIES FOR GENERATING TEST DATA
// ═══════════════════════════════════════════════════════════════════════════

/// Strategy for generating any single topping.
fn topping_strategy() -> impl Strategy<Value = Topping> {
    prop_oneof![
        Just(Topping::Ham),
        Just(Topping::Mushroom),
        Just(Topping::Onion),
        Just(Topping::Pepper),
        Just(Topping::Sausage),
    ]
}

/// Strategy for generating any single interest.
fn interest_strategy() -> impl Strategy<Value = Interest> {
    prop_oneof![
        Just(Interest::Music),
        Just(Interest::Photography),
        Just(Interest::Programming),
        Just(Interest::Philosophy),
        Just(Interest::Poetry),
        Just(Interest::Sports),
        Just(Interest::Nutrition),
    ]
}

/// Strategy for generating a staging sequence of toppings, duplicates
/// included on purpose.
fn topping_sequence_strategy() -> impl Strategy<Value = Vec<Topping>> {
    proptest::collection::vec(topping_strategy(), 0..16)
}

/// Strategy for generating valid names.
///
/// Matches the validation rule in person.rs: rejected only when the
/// trimmed name is empty, so any string starting with a letter passes.
fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

/// Strategy for generating valid email addresses.
fn valid_email_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}@[a-z]{1,8}\\.(cl|com|io)"
}

fn pizza_from(size: Size, toppings: &[Topping]) -> NyPizza {
    let built = toppings
        .iter()
        .fold(NyPizza::builder(size), |builder, &topping| {
            builder.topping(topping)
        })
        .build();
    built.expect("ny pizza has no deferred required fields")
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY: Tag Deduplication
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(builder_config())]

    /// Property: however many times a topping is staged, the built
    /// snapshot holds each distinct topping exactly once.
    #[test]
    fn prop_toppings_collapse_duplicates(toppings in topping_sequence_strategy()) {
        let distinct = toppings.iter().collect::<HashSet<_>>().len();
        let pizza = pizza_from(Size::Medium, &toppings);

        prop_assert_eq!(pizza.toppings().len(), distinct);
        for topping in &toppings {
            prop_assert!(pizza.toppings().contains(topping));
        }
    }

    /// Property: interests behave the same way on the person family.
    #[test]
    fn prop_interests_collapse_duplicates(
        interests in proptest::collection::vec(interest_strategy(), 0..16),
    ) {
        let distinct = interests.iter().collect::<HashSet<_>>().len();
        let built = interests
            .iter()
            .fold(
                Person::builder()
                    .name("Ron")
                    .expect("strategy-independent valid name")
                    .email("r@x.cl")
                    .expect("strategy-independent valid email"),
                |builder, &interest| builder.interest(interest),
            )
            .build();
        let person = built.expect("required fields staged");

        prop_assert_eq!(person.interests().len(), distinct);
    }

    /// Property: insertion order never changes the built entity.
    #[test]
    fn prop_topping_order_is_irrelevant(toppings in topping_sequence_strategy()) {
        let forward = pizza_from(Size::Small, &toppings);
        let reversed: Vec<Topping> = toppings.iter().rev().copied().collect();
        let backward = pizza_from(Size::Small, &reversed);

        prop_assert_eq!(forward, backward);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY: Last Write Wins For Scalars
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(builder_config())]

    /// Property: repeated scalar chain calls keep only the final value.
    #[test]
    fn prop_last_name_write_wins(
        names in proptest::collection::vec(valid_name_strategy(), 1..5),
        email in valid_email_strategy(),
    ) {
        let mut builder = Person::builder()
            .email(email)
            .expect("strategy yields valid emails");
        for name in &names {
            builder = builder.name(name.as_str()).expect("strategy yields valid names");
        }
        let person = builder.build().expect("required fields staged");

        prop_assert_eq!(person.name(), names[names.len() - 1].as_str());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY: Defensive Copy On Freeze
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(builder_config())]

    /// Property: a built entity never observes tags staged into another
    /// copy of its builder, before or after the build.
    #[test]
    fn prop_built_snapshot_is_independent(
        staged in topping_sequence_strategy(),
        extra in topping_strategy(),
    ) {
        let builder = staged
            .iter()
            .fold(Calzone::builder(), |builder, &topping| builder.topping(topping));
        let spare = builder.clone();

        let calzone = builder.build().expect("calzone has no required fields");
        let frozen_len = calzone.toppings().len();

        let grown = spare
            .topping(extra)
            .build()
            .expect("calzone has no required fields");

        prop_assert_eq!(calzone.toppings().len(), frozen_len);
        prop_assert!(grown.toppings().len() >= frozen_len);
        prop_assert!(grown.toppings().contains(&extra));
        if !staged.contains(&extra) {
            prop_assert!(!calzone.toppings().contains(&extra));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTY: Required-Field Enforcement
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(builder_config())]

    /// Property: however much optional state is staged, building a person
    /// without a name fails with MissingRequired before any entity exists.
    #[test]
    fn prop_person_without_name_never_builds(
        email in valid_email_strategy(),
        age in any::<u8>(),
        interests in proptest::collection::vec(interest_strategy(), 0..8),
    ) {
        let builder = interests
            .iter()
            .fold(
                Person::builder()
                    .email(email)
                    .expect("strategy yields valid emails")
                    .age(age),
                |builder, &interest| builder.interest(interest),
            );

        let result = builder.build();
        prop_assert_eq!(
            result.unwrap_err(),
            BuildError::MissingRequired { field: "name" }
        );
    }
}
