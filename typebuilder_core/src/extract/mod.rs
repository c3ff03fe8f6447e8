//! Lexical extraction of a single TypeScript type alias.
//!
//! The scanners here are deliberately shallow: they match patterns over the
//! raw document text rather than parsing it. Given
//!
//! ```ts
//! export type Person = {
//!     firstName: string
//!     age: number
//! }
//! ```
//!
//! extraction yields the alias name `Person` and the members
//! `firstName: string` and `age: number`, in source order. Nested, generic,
//! and union types are not understood.

mod members;
mod name;

pub use members::{
    Member, contains_method_signature, extract_data_types, extract_members, extract_properties,
};
pub use name::extract_alias_name;
