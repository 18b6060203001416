//! UI Components for the helium client.

mod card;

pub use card::{Card, CardContent};
