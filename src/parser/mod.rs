pub mod main;
pub mod packet;
pub mod stream;

pub use main::*;
pub use packet::*;
pub use stream::*;
