pub mod field;
pub mod record;
pub mod record_set;

pub use field::*;
pub use record::*;
pub use record_set::*;
