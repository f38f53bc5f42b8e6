pub mod checkin_state;
pub mod karma_task;
pub mod language;
pub mod outcome;
pub mod practice;
pub mod quote;
pub mod reading;

pub use checkin_state::CheckInState;
pub use language::Language;
pub use outcome::Outcome;
pub use quote::{Quote, QuoteRef};
pub use reading::{Chapter, Translation};
