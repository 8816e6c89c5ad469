pub mod enums;
pub mod event;
pub mod family;
pub mod filters;
pub mod profile;

pub use enums::*;
pub use event::*;
pub use family::*;
pub use filters::*;
pub use profile::*;
