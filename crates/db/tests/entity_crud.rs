//! Integration tests for the HR repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create the department -> position -> employee -> owned records chain
//! - Partial updates via `COALESCE`
//! - Cascade delete of owned records, unlinking of users
//! - Unique, check and foreign key violations

use chrono::NaiveDate;
use sqlx::PgPool;

use hrms_db::models::attendance::{CreateAttendance, UpdateAttendance};
use hrms_db::models::bonus_point::CreateBonusPoint;
use hrms_db::models::bp_log::CreateBpLogEntry;
use hrms_db::models::department::{CreateDepartment, UpdateDepartment};
use hrms_db::models::employee::{CreateEmployee, UpdateEmployee};
use hrms_db::models::penalty::CreatePenalty;
use hrms_db::models::position::CreatePosition;
use hrms_db::models::user::{CreateUser, UpdateUser};
use hrms_db::models::yearly_bonus::CreateYearlyBonus;
use hrms_db::repositories::{
    AttendanceRepo, BonusPointRepo, BpLogRepo, DashboardRepo, DepartmentRepo, EmployeeRepo,
    PenaltyRepo, PositionRepo, RoleRepo, UserRepo, YearlyBonusRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_employee(pool: &PgPool, first: &str, last: &str) -> i64 {
    let dept = match DepartmentRepo::create(
        pool,
        &CreateDepartment {
            name: format!("Dept of {first}"),
            description: None,
        },
    )
    .await
    {
        Ok(d) => d,
        Err(e) => panic!("department insert failed: {e}"),
    };
    let position = PositionRepo::create(
        pool,
        &CreatePosition {
            name: format!("Position of {first}"),
            base_salary: 4000.0,
        },
    )
    .await
    .unwrap();
    EmployeeRepo::create(
        pool,
        &CreateEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            salary: 4200.0,
            start_date: date(2024, 3, 1),
            department_id: dept.id,
            position_id: position.id,
        },
    )
    .await
    .unwrap()
    .id
}

async fn role_id(pool: &PgPool, name: &str) -> i64 {
    RoleRepo::find_by_name(pool, name).await.unwrap().unwrap().id
}

fn db_error_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Test: create and read back
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_employee_with_owned_records(pool: PgPool) {
    let employee_id = seed_employee(&pool, "Ann", "Smith").await;

    let attendance = AttendanceRepo::create(
        &pool,
        &CreateAttendance {
            attendance_date: date(2026, 1, 5),
            status: "Late".into(),
            employee_id,
        },
    )
    .await
    .unwrap();
    assert_eq!(attendance.status, "Late");

    let bonus = BonusPointRepo::create(
        &pool,
        &CreateBonusPoint {
            month: 1,
            year: 2026,
            points: 40,
            employee_id,
        },
    )
    .await
    .unwrap();

    let log = BpLogRepo::create(
        &pool,
        &CreateBpLogEntry {
            entry_type: "bonus".into(),
            reference_id: bonus.id,
            entry_date: None,
            employee_id,
        },
    )
    .await
    .unwrap();
    assert_eq!(log.reference_id, bonus.id);

    let profile = EmployeeRepo::find_profile(&pool, employee_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.department_name, "Dept of Ann");
    assert_eq!(profile.position_name, "Position of Ann");

    let options = EmployeeRepo::list_options(&pool).await.unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].full_name, "Ann Smith");
}

// ---------------------------------------------------------------------------
// Test: partial updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_only_given_fields(pool: PgPool) {
    let employee_id = seed_employee(&pool, "Bob", "Jones").await;

    let updated = EmployeeRepo::update(
        &pool,
        employee_id,
        &UpdateEmployee {
            first_name: None,
            last_name: Some("Jonas".into()),
            salary: None,
            start_date: None,
            department_id: None,
            position_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.first_name, "Bob");
    assert_eq!(updated.last_name, "Jonas");
    assert_eq!(updated.salary, 4200.0);

    let att = AttendanceRepo::create(
        &pool,
        &CreateAttendance {
            attendance_date: date(2026, 2, 1),
            status: "Present".into(),
            employee_id,
        },
    )
    .await
    .unwrap();
    let att = AttendanceRepo::update(
        &pool,
        att.id,
        &UpdateAttendance {
            attendance_date: None,
            status: Some("Absent".into()),
            employee_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(att.status, "Absent");
    assert_eq!(att.attendance_date, date(2026, 2, 1));
    assert!(att.updated_at >= att.created_at);

    let missing = DepartmentRepo::update(
        &pool,
        999_999,
        &UpdateDepartment {
            name: Some("Nowhere".into()),
            description: None,
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: deleting an employee
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_employee_cascades_and_unlinks_user(pool: PgPool) {
    let employee_id = seed_employee(&pool, "Cara", "White").await;
    let penalty = PenaltyRepo::create(
        &pool,
        &CreatePenalty {
            penalty_level: "Low".into(),
            description: Some("Violation".into()),
            penalty_date: date(2026, 1, 9),
            employee_id,
        },
    )
    .await
    .unwrap();
    let yearly = YearlyBonusRepo::create(
        &pool,
        &CreateYearlyBonus {
            year: 2025,
            total_bonus_point: 120,
            yearly_bonus_score: 1.5e7,
            employee_id,
        },
    )
    .await
    .unwrap();
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "c.white".into(),
            email: "c.white@hrapp.com".into(),
            password_hash: "hash".into(),
            role_id: role_id(&pool, "Employee").await,
            employee_id: Some(employee_id),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        UserRepo::employee_id_for_user(&pool, user.id).await.unwrap(),
        Some(employee_id)
    );

    assert!(EmployeeRepo::delete(&pool, employee_id).await.unwrap());

    assert!(PenaltyRepo::find_by_id(&pool, penalty.id).await.unwrap().is_none());
    assert!(YearlyBonusRepo::find_by_id(&pool, yearly.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(UserRepo::employee_id_for_user(&pool, user.id).await.unwrap(), None);
    assert!(!EmployeeRepo::delete(&pool, employee_id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_username_violation(pool: PgPool) {
    let role = role_id(&pool, "Employee").await;
    let new_user = |username: &str, email: &str| CreateUser {
        username: username.into(),
        email: email.into(),
        password_hash: "hash".into(),
        role_id: role,
        employee_id: None,
    };
    UserRepo::create(&pool, &new_user("dup", "a@hrapp.com"))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &new_user("dup", "b@hrapp.com"))
        .await
        .unwrap_err();

    assert_eq!(db_error_code(&err).as_deref(), Some("23505"));
    match err {
        sqlx::Error::Database(db) => assert_eq!(db.constraint(), Some("uq_users_username")),
        other => panic!("expected database error, got {other}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_and_foreign_key_violations(pool: PgPool) {
    let employee_id = seed_employee(&pool, "Dan", "Hill").await;

    let err = BonusPointRepo::create(
        &pool,
        &CreateBonusPoint {
            month: 13,
            year: 2026,
            points: 1,
            employee_id,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23514"));

    let err = AttendanceRepo::create(
        &pool,
        &CreateAttendance {
            attendance_date: date(2026, 1, 1),
            status: "Present".into(),
            employee_id: 999_999,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));

    // The employee's department is still referenced.
    let employee = EmployeeRepo::find_by_id(&pool, employee_id)
        .await
        .unwrap()
        .unwrap();
    let err = DepartmentRepo::delete(&pool, employee.department_id)
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
}

// ---------------------------------------------------------------------------
// Test: user password update and dashboard counts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_update_and_dashboard_counts(pool: PgPool) {
    let employee_id = seed_employee(&pool, "Eve", "King").await;
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            username: "e.king".into(),
            email: "e.king@hrapp.com".into(),
            password_hash: "old".into(),
            role_id: role_id(&pool, "HR Staff").await,
            employee_id: None,
        },
    )
    .await
    .unwrap();

    let updated = UserRepo::update(
        &pool,
        user.id,
        &UpdateUser {
            password_hash: Some("new".into()),
            employee_id: Some(employee_id),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.password_hash, "new");
    assert_eq!(updated.username, "e.king");
    assert_eq!(updated.employee_id, Some(employee_id));

    let admin = DashboardRepo::admin_stats(&pool).await.unwrap();
    assert_eq!(admin.users, 1);
    assert_eq!(admin.roles, 3);
    assert_eq!(admin.employees, 1);
    assert_eq!(admin.departments, 1);

    let hr = DashboardRepo::hr_stats(&pool).await.unwrap();
    assert_eq!(hr.positions, 1);
    assert_eq!(hr.penalties, 0);

    let headcounts = DepartmentRepo::headcounts(&pool).await.unwrap();
    assert_eq!(headcounts.len(), 1);
    assert_eq!(headcounts[0].employee_count, 1);
}
