//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod attendance;
pub mod bonus_point;
pub mod bp_log;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod penalty;
pub mod position;
pub mod role;
pub mod user;
pub mod yearly_bonus;
