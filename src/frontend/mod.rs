//! Interactive front end: menu, prompts, request/result records and display

mod menu;
mod prompt;
mod request;
mod session;

pub use menu::{menu_text, MenuChoice};
pub use prompt::Prompter;
pub use request::{evaluate, CalcOutcome, CalcRequest, PeriodSplit, MAX_SCHEDULE_PERIODS};
pub use session::Session;
