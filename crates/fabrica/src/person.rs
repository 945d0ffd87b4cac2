//! People family: base profile attributes with a self-typed builder chain.
//!
//! [`ProfileBuilder`] carries the base chain methods (`name`, `age`,
//! `email`, `interest`) once, typed to return the concrete builder in use.
//! [`Person`] is the leaf entity; [`PersonBuilder`] adds the leaf-only
//! `national_id` chain method and implements the terminal build.
//!
//! # Invariants
//!
//! 1. A built [`Person`] is immutable; no setters exist post-construction
//! 2. A [`Person`] is only producible through [`PersonBuilder`]
//! 3. `name` and `email` are required; building without them fails
//! 4. Interests collapse duplicates, in any insertion order

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
// TAG ENUMERATION
// ============================================================================

/// Closed enumeration of profile interests.
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
pub enum Interest {
    Music,
    Photography,
    Programming,
    Philosophy,
    Poetry,
    Sports,
    Nutrition,
}

// ============================================================================
// SHARED STAGING STATE
// ============================================================================

/// Mutable staging copy of the base profile attributes.
///
/// Every builder in the family holds one and exposes it through
/// [`ProfileBuilder::profile_mut`]; the chain methods mutate it in place.
#[derive(Debug, Clone, Default)]
pub struct ProfileParts {
    name: Option<String>,
    age: Option<u8>,
    email: Option<String>,
    interests: TagSet<Interest>,
}

// ============================================================================
// SELF-TYPED BUILDER CHAIN
// ============================================================================

/// Fluent construction chain for profile-based entities.
///
/// Chain methods are provided here and return `Self`, so a concrete
/// builder keeps its own type through base-level calls and leaf-added
/// methods stay reachable mid-chain with no casting. Implementors supply
/// two things: access to their staged [`ProfileParts`], and the terminal
/// [`build`](Self::build) returning their own entity type.
pub trait ProfileBuilder: Sized {
    /// The concrete entity this builder materializes.
    type Entity;

    /// Mutable access to the shared staging state.
    fn profile_mut(&mut self) -> &mut ProfileParts;

    /// Stage the name (required). Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidValue` if the name is empty; the
    /// invalid value never enters staging state.
    fn name(mut self, name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BuildError::InvalidValue {
                field: "name",
                reason: "name cannot be empty".to_string(),
            });
        }
        self.profile_mut().name = Some(name);
        Ok(self)
    }

    /// Stage the age (optional). Last write wins.
    #[must_use]
    fn age(mut self, age: u8) -> Self {
        self.profile_mut().age = Some(age);
        self
    }

    /// Stage the email address (required). Last write wins.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidValue` if the address has no `@`
    /// separating a local part from a domain.
    fn email(mut self, email: impl Into<String>) -> Result<Self, BuildError> {
        let email = email.into();
        if !is_plausible_email(&email) {
            return Err(BuildError::InvalidValue {
                field: "email",
                reason: format!("'{email}' is not a valid address"),
            });
        }
        self.profile_mut().email = Some(email);
        Ok(self)
    }

    /// Stage one interest. Adding a present interest is a no-op.
    #[must_use]
    fn interest(mut self, interest: Interest) -> Self {
        self.profile_mut().interests.insert(interest);
        self
    }

    /// Freeze the staged state into an immutable entity.
    ///
    /// Consumes the builder: there is no post-build state to misuse.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::MissingRequired` if a required field was
    /// never staged.
    fn build(self) -> Result<Self::Entity, BuildError>;
}

fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
}

// ============================================================================
// PERSON LEAF ENTITY
// ============================================================================

/// Immutable person entity.
///
/// Constructed exclusively by [`PersonBuilder`]; all accessors are
/// side-effect-free and fields cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    age: Option<u8>,
    email: String,
    interests: TagSet<Interest>,
    national_id: Option<String>,
}

impl Person {
    /// Start a builder in staging state.
    #[must_use]
    pub fn builder() -> PersonBuilder {
        PersonBuilder::new()
    }

    /// The person's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age, if staged.
    #[must_use]
    pub const fn age(&self) -> Option<u8> {
        self.age
    }

    /// The person's email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Frozen snapshot of the person's interests.
    #[must_use]
    pub const fn interests(&self) -> &TagSet<Interest> {
        &self.interests
    }

    /// The person's national identifier, if staged.
    #[must_use]
    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)?;
        if !self.interests.is_empty() {
            write!(f, " {}", self.interests)?;
        }
        Ok(())
    }
}

// ============================================================================
// PERSON LEAF BUILDER
// ============================================================================

/// Builder for [`Person`].
///
/// # Required Fields
/// - `name`: staged via [`ProfileBuilder::name`]
/// - `email`: staged via [`ProfileBuilder::email`]
///
/// # Optional Fields
/// - `age`, `interests` (base chain), `national_id` (leaf chain)
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    profile: ProfileParts,
    national_id: Option<String>,
}

impl PersonBuilder {
    /// Create a new builder with no fields staged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the national identifier (leaf-only chain method).
    #[must_use]
    pub fn national_id(mut self, id: impl Into<String>) -> Self {
        self.national_id = Some(id.into());
        self
    }
}

impl ProfileBuilder for PersonBuilder {
    type Entity = Person;

    fn profile_mut(&mut self) -> &mut ProfileParts {
        &mut self.profile
    }

    fn build(self) -> Result<Person, BuildError> {
        let name = self
            .profile
            .name
            .ok_or(BuildError::MissingRequired { field: "name" })?;
        let email = self
            .profile
            .email
            .ok_or(BuildError::MissingRequired { field: "email" })?;
        let interests = self.profile.interests.snapshot();

        debug!(name = %name, interests = interests.len(), "person built");

        Ok(Person {
            name,
            age: self.profile.age,
            email,
            interests,
            national_id: self.national_id,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
