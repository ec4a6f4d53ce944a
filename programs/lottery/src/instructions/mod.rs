pub mod admin;
pub mod buy_ticket;
pub mod commit_randomness;
pub mod draw_winner;
pub mod queries;

pub use admin::*;
pub use buy_ticket::*;
pub use commit_randomness::*;
pub use draw_winner::*;
pub use queries::*;
