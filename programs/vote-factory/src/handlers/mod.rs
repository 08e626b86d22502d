pub mod initialize_registry;
pub use initialize_registry::*;

pub mod transfer_ownership;
pub use transfer_ownership::*;

pub mod create_question;
pub use create_question::*;

pub mod edit_question;
pub use edit_question::*;

pub mod lifecycle;
pub use lifecycle::*;

pub mod cast;
pub use cast::*;

pub mod results;
pub use results::*;

pub mod views;
pub use views::*;
