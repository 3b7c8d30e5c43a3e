pub mod cascade;
pub mod error;
pub mod value;

pub use cascade::Cascade;
pub use error::TerraceCascadeError;
pub use value::CascadeValue;
