mod schema;
#[cfg(feature = "testing")]
pub mod strategies;
mod tag;
mod text;
mod validators;
mod vector;

// Re-export the type modules, so that we can use them as a single import in other crates.
pub use schema::*;
pub use tag::*;
pub use text::*;
pub use validators::*;
pub use vector::*;
