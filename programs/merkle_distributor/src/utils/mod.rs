pub mod guard;
pub mod merkle;
pub mod token;

pub use guard::*;
pub use merkle::*;
pub use token::*;
