//! Fixture runner shared by the decoder test suites.

pub mod test;
pub mod utils;
