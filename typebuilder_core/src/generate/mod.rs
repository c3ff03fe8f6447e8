//! TypeScript builder class generation.
//!
//! [`generate_property_output`] turns each extracted member into three text
//! fragments, and [`generate_class`] stitches them into one class:
//!
//! ```ts
//! export class PersonBuilder {
//!   private firstName: string = undefined
//!
//!   public build(): Person {
//!     return {
//!       firstName: this.firstName
//!     }
//!   }
//!
//!   public withFirstName(value: string) {
//!     this.firstName = value
//!     return this
//!   }
//! }
//! ```

mod class;
mod property_output;

pub use class::generate_class;
pub use property_output::{PropertyOutput, generate_property_output, setter_name};
