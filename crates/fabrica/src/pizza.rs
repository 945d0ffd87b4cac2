//! Pizza family: a tag-set base attribute with two leaf entities.
//!
//! [`PizzaBuilder`] carries the one base chain method (`topping`) typed to
//! return the concrete builder in use. [`NyPizza`] requires a [`Size`] at
//! builder construction; [`Calzone`] adds a `sauce_inside` flag that
//! defaults to `false`.
//!
//! # Invariants
//!
//! 1. Built pizzas are immutable; toppings are a frozen snapshot
//! 2. Each entity is only producible through its paired builder
//! 3. Toppings collapse duplicates, in any insertion order
//! 4. A [`NyPizza`] always has a size; absence is unrepresentable

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::error::BuildError;
use crate::tags::TagSet;

// ============================================================================
// TAG AND SIZE ENUMERATIONS
// ============================================================================

/// Closed enumeration of pizza toppings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Topping {
    Ham,
    Mushroom,
    Onion,
    Pepper,
    Sausage,
}

/// Size classification for a New-York-style pizza.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

// ============================================================================
// SHARED STAGING STATE
// ============================================================================

/// Mutable staging copy of the base pizza attributes.
#[derive(Debug, Clone, Default)]
pub struct PizzaParts {
    toppings: TagSet<Topping>,
}

// ============================================================================
// SELF-TYPED BUILDER CHAIN
// ============================================================================

/// Fluent construction chain for pizza entities.
///
/// The base chain method returns `Self`, so leaf-added methods like
/// [`CalzoneBuilder::sauce_inside`] stay reachable after a base-level
/// call and vice versa, with no casting at any call site. Implementors
/// supply access to their staged [`PizzaParts`] and the terminal
/// [`build`](Self::build) returning their own entity type.
pub trait PizzaBuilder: Sized {
    /// The concrete entity this builder materializes.
    type Entity;

    /// Mutable access to the shared staging state.
    fn pizza_mut(&mut self) -> &mut PizzaParts;

    /// Stage one topping. Adding a present topping is a no-op.
    #[must_use]
    fn topping(mut self, topping: Topping) -> Self {
        self.pizza_mut().toppings.insert(topping);
        self
    }

    /// Freeze the staged state into an immutable entity.
    ///
    /// Consumes the builder: there is no post-build state to misuse.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::MissingRequired` if a required field was
    /// never staged. Neither leaf in this family has a deferred required
    /// field today, but the terminal contract is fallible for every
    /// builder in a chain.
    fn build(self) -> Result<Self::Entity, BuildError>;
}

// ============================================================================
// NEW-YORK-STYLE PIZZA
// ============================================================================

/// Immutable New-York-style pizza with a required size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NyPizza {
    size: Size,
    toppings: TagSet<Topping>,
}

impl NyPizza {
    /// Start a builder in staging state.
    ///
    /// The size has no sensible default, so it is supplied here rather
    /// than through a chain call.
    #[must_use]
    pub fn builder(size: Size) -> NyPizzaBuilder {
        NyPizzaBuilder::new(size)
    }

    /// The pizza's size classification.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Frozen snapshot of the pizza's toppings.
    #[must_use]
    pub const fn toppings(&self) -> &TagSet<Topping> {
        &self.toppings
    }
}

impl fmt::Display for NyPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ny pizza {}", self.size, self.toppings)
    }
}

/// Builder for [`NyPizza`].
#[derive(Debug, Clone)]
pub struct NyPizzaBuilder {
    size: Size,
    parts: PizzaParts,
}

impl NyPizzaBuilder {
    /// Create a new builder with the required size staged.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            parts: PizzaParts::default(),
        }
    }
}

impl PizzaBuilder for NyPizzaBuilder {
    type Entity = NyPizza;

    fn pizza_mut(&mut self) -> &mut PizzaParts {
        &mut self.parts
    }

    fn build(self) -> Result<NyPizza, BuildError> {
        let toppings = self.parts.toppings.snapshot();

        debug!(size = %self.size, toppings = toppings.len(), "ny pizza built");

        Ok(NyPizza {
            size: self.size,
            toppings,
        })
    }
}

// ============================================================================
// CALZONE
// ============================================================================

/// Immutable calzone. The sauce may be inside; by default it is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calzone {
    sauce_inside: bool,
    toppings: TagSet<Topping>,
}

impl Calzone {
    /// Start a builder in staging state.
    #[must_use]
    pub fn builder() -> CalzoneBuilder {
        CalzoneBuilder::new()
    }

    /// Whether the sauce is inside.
    #[must_use]
    pub const fn sauce_inside(&self) -> bool {
        self.sauce_inside
    }

    /// Frozen snapshot of the calzone's toppings.
    #[must_use]
    pub const fn toppings(&self) -> &TagSet<Topping> {
        &self.toppings
    }
}

impl fmt::Display for Calzone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sauce = if self.sauce_inside {
            "sauce inside"
        } else {
            "sauce on top"
        };
        write!(f, "calzone ({sauce}) {}", self.toppings)
    }
}

/// Builder for [`Calzone`].
///
/// # Optional Fields
/// - `sauce_inside`: defaults to `false`
/// - `toppings`: staged via [`PizzaBuilder::topping`]
#[derive(Debug, Clone, Default)]
pub struct CalzoneBuilder {
    sauce_inside: bool,
    parts: PizzaParts,
}

impl CalzoneBuilder {
    /// Create a new builder with no fields staged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the sauce inside (leaf-only chain method).
    #[must_use]
    pub fn sauce_inside(mut self) -> Self {
        self.sauce_inside = true;
        self
    }
}

impl PizzaBuilder for CalzoneBuilder {
    type Entity = Calzone;

    fn pizza_mut(&mut self) -> &mut PizzaParts {
        &mut self.parts
    }

    fn build(self) -> Result<Calzone, BuildError> {
        let toppings = self.parts.toppings.snapshot();

        debug!(sauce_inside = self.sauce_inside, toppings = toppings.len(), "calzone built");

        Ok(Calzone {
            sauce_inside: self.sauce_inside,
            toppings,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
