//! Rounds, timing and the signals sent to the UI

pub mod clock;
pub mod coordinator;
pub mod events;

pub use clock::{Clock, ManualClock, RoundTimer, SystemClock};
pub use coordinator::{PlaySessionCoordinator, Round};
pub use events::{FigurePart, GameMode, GuessReport, RoundSummary, SoundEvent};
