//! Unit tests for employee management and the branch counter.

use chrono::NaiveDate;
use restaurante_sucursales::{create_sucursal, get_sucursal};
use restaurante_types::{EmpleadoParams, SucursalParams};
use rusqlite::Connection;

use super::*;

fn test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("should open in-memory db");
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .expect("should enable foreign keys");
    restaurante_db::run_migrations(&conn).expect("migrations should succeed");
    conn
}

fn seed_sucursal(conn: &Connection, nombre: &str) -> i64 {
    create_sucursal(conn, &SucursalParams::new(nombre))
        .expect("should insert sucursal")
        .id
}

fn ana(sucursal_id: i64) -> EmpleadoParams {
    EmpleadoParams {
        nombre: "Ana".to_string(),
        puesto: "Mesera".to_string(),
        fecha_contratacion: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        sucursal_id,
    }
}

fn num_empleados(conn: &Connection, sucursal_id: i64) -> i64 {
    get_sucursal(conn, sucursal_id)
        .expect("sucursal should exist")
        .num_empleados
}

fn empleado_rows(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM empleados", [], |row| row.get(0))
        .expect("should count empleados")
}

// ── create_empleado ──────────────────────────────────────────────────

#[test]
fn create_returns_inserted_employee() {
    let conn = test_db();
    let sid = seed_sucursal(&conn, "Centro");

    let empleado = create_empleado(&conn, &ana(sid)).unwrap();

    assert_eq!(empleado.id, 1);
    assert_eq!(empleado.nombre, "Ana");
    assert_eq!(empleado.puesto, "Mesera");
    assert_eq!(
        empleado.fecha_contratacion,
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    );
    assert_eq!(empleado.sucursal_id, sid);
    assert_eq!(get_empleado(&conn, empleado.id).unwrap(), empleado);
}

#[test]
fn create_increments_branch_counter_by_one() {
    let conn = test_db();
    let sid = seed_sucursal(&conn, "Centro");
    let other = seed_sucursal(&conn, "Norte");

    create_empleado(&conn, &ana(sid)).unwrap();
    assert_eq!(num_empleados(&conn, sid), 1);

    create_empleado(&conn, &ana(sid)).unwrap();
    assert_eq!(num_empleados(&conn, sid), 2);
    assert_eq!(num_empleados(&conn, other), 0);
}

#[test]
fn create_for_missing_branch_persists_nothing() {
    let conn = test_db();

    let result = create_empleado(&conn, &ana(77));

    assert!(matches!(result, Err(EmpleadoError::SucursalNotFound(77))));
    assert_eq!(empleado_rows(&conn), 0);
}

#[test]
fn failed_counter_update_rolls_back_employee_insert() {
    let conn = test_db();
    let sid = seed_sucursal(&conn, "Centro");
    conn.execute_batch(
        "CREATE TRIGGER block_counter BEFORE UPDATE OF num_empleados ON sucursales
         BEGIN SELECT RAISE(ABORT, 'counter locked'); END;",
    )
    .unwrap();

    let result = create_empleado(&conn, &ana(sid));

    assert!(matches!(result, Err(EmpleadoError::Database(_))));
    assert_eq!(empleado_rows(&conn), 0, "insert must not outlive the failed counter write");
    assert_eq!(num_empleados(&conn, sid), 0);
}

// ── delete_empleado ──────────────────────────────────────────────────

#[test]
fn delete_restores_prior_counter() {
    let conn = test_db();
    let sid = seed_sucursal(&conn, "Centro");
    let before = num_empleados(&conn, sid);

    let empleado = create_empleado(&conn, &ana(sid)).unwrap();
    delete_empleado(&conn, empleado.id).unwrap();

    assert_eq!(num_empleados(&conn, sid), before);
    assert!(matches!(
        get_empleado(&conn, empleado.id),
        Err(EmpleadoError::NotFound(_))
    ));
}

#[test]
fn delete_missing_employee_is_not_found() {
    let conn = test_db();
    let sid = seed_sucursal(&conn, "Centro");
    create_empleado(&conn, &ana(sid)).unwrap();

    assert!(matches!(
        delete_empleado(&conn, 99),
        Err(EmpleadoError::NotFound(99))
    ));
    assert_eq!(num_empleados(&conn, sid), 1);
}

#[test]
fn counter_matches_row_count_after_mixed_operations() {
    let conn = test_db();
    let sid = seed_sucursal(&conn, "Centro");

    let ids: Vec<i64> = (0..4)
        .map(|_| create_empleado(&conn, &ana(sid)).unwrap().id)
        .collect();
    delete_empleado(&conn, ids[1]).unwrap();
    delete_empleado(&conn, ids[3]).unwrap();

    let listed = list_empleados_by_sucursal(&conn, sid).unwrap();
    assert_eq!(num_empleados(&conn, sid), listed.len() as i64);
    assert_eq!(num_empleados(&conn, sid), 2);
}

// ── listing ──────────────────────────────────────────────────────────

#[test]
fn list_by_branch_filters_on_sucursal() {
    let conn = test_db();
    let centro = seed_sucursal(&conn, "Centro");
    let norte = seed_sucursal(&conn, "Norte");

    create_empleado(&conn, &ana(centro)).unwrap();
    let mut luis = ana(norte);
    luis.nombre = "Luis".to_string();
    luis.puesto = "Cocinero".to_string();
    create_empleado(&conn, &luis).unwrap();

    let norte_staff = list_empleados_by_sucursal(&conn, norte).unwrap();
    assert_eq!(norte_staff.len(), 1);
    assert_eq!(norte_staff[0].nombre, "Luis");

    let all = list_empleados(&conn).unwrap();
    let names: Vec<&str> = all.iter().map(|e| e.nombre.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Luis"]);
}

#[test]
fn list_by_branch_without_staff_is_empty() {
    let conn = test_db();
    let sid = seed_sucursal(&conn, "Vacia");

    assert!(list_empleados_by_sucursal(&conn, sid).unwrap().is_empty());
    assert!(list_empleados_by_sucursal(&conn, 12345).unwrap().is_empty());
}
