pub mod attendance;
pub mod auth;
pub mod bonus_point;
pub mod bp_log;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod listing;
pub mod penalty;
pub mod position;
pub mod role;
pub mod user;
pub mod yearly_bonus;
