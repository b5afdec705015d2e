//! Wire-level value types shared across directory surfaces.

pub mod employee;
pub mod office;

pub use employee::{Employee, Roster};
pub use office::OfficeFilter;
