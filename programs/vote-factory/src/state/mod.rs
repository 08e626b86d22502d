pub mod ballot;
pub mod events;
pub mod lookup;
pub mod question;
pub mod registry;
pub mod voter_slot;

pub use ballot::*;
pub use events::*;
pub use lookup::*;
pub use question::*;
pub use registry::*;
pub use voter_slot::*;
