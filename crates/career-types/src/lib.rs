#![allow(non_snake_case)]

pub mod company;
pub mod draft;
pub mod failure;
pub mod job;

pub use company::*;
pub use draft::*;
pub use failure::Failure;
pub use job::*;
