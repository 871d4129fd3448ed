//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod attendance_repo;
pub mod bonus_point_repo;
pub mod bp_log_repo;
pub mod dashboard_repo;
pub mod department_repo;
pub mod employee_repo;
pub mod penalty_repo;
pub mod position_repo;
pub mod role_repo;
pub mod user_repo;
pub mod yearly_bonus_repo;

pub use attendance_repo::AttendanceRepo;
pub use bonus_point_repo::BonusPointRepo;
pub use bp_log_repo::BpLogRepo;
pub use dashboard_repo::DashboardRepo;
pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
pub use penalty_repo::PenaltyRepo;
pub use position_repo::PositionRepo;
pub use role_repo::RoleRepo;
pub use user_repo::UserRepo;
pub use yearly_bonus_repo::YearlyBonusRepo;
