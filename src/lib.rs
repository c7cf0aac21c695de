// Library surface for the scoring engine core.
// Keep this lean: hosts embed the controller and drive it through runtime events.
pub mod clock;
pub mod composition;
pub mod config;
pub mod controller;
pub mod history;
pub mod runtime;
pub mod sample_text;
pub mod score;
pub mod session;
pub mod time_series;
pub mod util;

pub use controller::{SessionController, SessionSnapshot};
pub use session::Phase;
