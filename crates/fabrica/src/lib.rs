//! # Fabrica
//!
//! Hierarchical self-typed builders for immutable domain entities.
//!
//! A base builder defines fluent chain methods once; every builder in a
//! derivation chain extends the chain, and the terminal `build()` returns
//! the concrete entity type — no casting at any call site. Built entities
//! are immutable, deduplicate their multi-valued attributes, and own
//! defensively-copied snapshots of anything the builder staged.
//!
//! ## The mechanism
//!
//! Each family declares one chain trait ([`ProfileBuilder`],
//! [`PizzaBuilder`]) whose chain methods are *provided* and return `Self`:
//! a concrete builder keeps its own type through base-level calls, so
//! leaf-added methods remain reachable mid-chain. The trait requires only
//! two things of an implementor:
//!
//! - an accessor to the family's shared staging state, through which the
//!   provided methods mutate
//! - the terminal `build(self)`, whose associated `Entity` type each
//!   implementor declares concretely
//!
//! ```
//! use fabrica::{Interest, Person, ProfileBuilder};
//!
//! # fn main() -> Result<(), fabrica::BuildError> {
//! let person = Person::builder()
//!     .national_id("12345678-9") // leaf method
//!     .name("Ron")?              // base method, still PersonBuilder
//!     .age(38)
//!     .email("r@x.cl")?
//!     .interest(Interest::Music)
//!     .interest(Interest::Music) // duplicates collapse
//!     .build()?;
//!
//! assert_eq!(person.interests().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` outside tests
//! - No `unsafe` - safe Rust only
//! - Terminal builds consume the builder: reuse after build does not
//!   compile
//!
//! ## Error Handling
//!
//! All fallible operations return `Result<T, BuildError>`. Validating
//! chain methods fail eagerly (`InvalidValue`), terminal builds fail on
//! absent required fields (`MissingRequired`). Use `?` for propagation.
//!
//! ## Concurrency
//!
//! Builders are plain owned values confined to one owner by the borrow
//! checker; no internal synchronization exists or is needed. Built
//! entities are immutable and safe for unsynchronized shared reads.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod error;
pub mod person;
pub mod pizza;
pub mod tags;

pub use error::BuildError;
pub use person::{Interest, Person, PersonBuilder, ProfileBuilder, ProfileParts};
pub use pizza::{
    Calzone, CalzoneBuilder, NyPizza, NyPizzaBuilder, PizzaBuilder, PizzaParts, Size, Topping,
};
pub use tags::TagSet;
