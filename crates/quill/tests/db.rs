mod support;
use support::*;

use pretty_assertions::assert_eq;
use quill::{
    driver::Response,
    stmt::Value,
    Db, Error, Flavor, Query, Serializer,
};
use std::time::Duration;

fn sqlite(driver: &MockDriver) -> Db {
    Db::builder()
        .flavor(Flavor::Sqlite)
        .build(driver.clone())
        .unwrap()
}

#[tokio::test]
async fn create_table_runs_on_a_fresh_connection() {
    let driver = MockDriver::new();
    let db = sqlite(&driver);

    db.create_table::<Person>().await.unwrap();

    assert_eq!(
        driver.events(),
        [
            Event::Connect(0),
            Event::Sql(
                0,
                "CREATE TABLE \"Person\" (\n    \"Id\" INTEGER PRIMARY KEY AUTOINCREMENT,\n    \"Name\" VARCHAR(255) NULL,\n    \"Age\" INTEGER NOT NULL\n);".to_string()
            ),
        ]
    );
}

#[tokio::test]
async fn insert_returns_generated_identity() {
    let driver = MockDriver::new();
    driver.respond(Ok(Response::scalar(42i64)));
    let db = sqlite(&driver);

    let id = db
        .insert(&[Person::new("Jane", 31), Person::new("John", 40)])
        .await
        .unwrap();

    assert_eq!(id, Some(Value::I64(42)));
    assert_eq!(
        driver.sql(),
        ["INSERT INTO \"Person\" (\"Name\", \"Age\") VALUES (@p_0, @p_1), (@p_2, @p_3); SELECT last_insert_rowid();"]
    );
}

#[tokio::test]
async fn insert_takes_the_last_returned_identity() {
    let driver = MockDriver::new();
    driver.respond(Ok(Response::values(vec![
        vec![Value::I64(7)],
        vec![Value::I64(8)],
    ])));
    let db = Db::new(driver.clone(), Serializer::postgresql());

    let id = db
        .insert(&[Person::new("Jane", 31), Person::new("John", 40)])
        .await
        .unwrap();

    assert_eq!(id, Some(Value::I64(8)));
}

#[tokio::test]
async fn update_and_delete_report_row_counts() {
    let driver = MockDriver::new();
    driver.respond(Ok(Response::count(1)));
    driver.respond(Ok(Response::count(0)));
    let db = sqlite(&driver);

    let person = Person {
        id: 3,
        name: "Jane".to_string(),
        age: 32,
    };

    assert_eq!(db.update(&person).await.unwrap(), 1);
    assert_eq!(db.delete(&person).await.unwrap(), 0);
    assert_eq!(
        driver.sql(),
        [
            "UPDATE \"Person\" SET \"Name\" = @p_0, \"Age\" = @p_1 WHERE \"Id\" = @p_2;",
            "DELETE FROM \"Person\" WHERE \"Id\" = @p_0;",
        ]
    );
}

#[tokio::test]
async fn query_and_count() {
    let driver = MockDriver::new();
    driver.respond(Ok(Response::values(vec![vec![
        Value::I64(1),
        Value::from("Jane"),
        Value::I32(31),
    ]])));
    driver.respond(Ok(Response::scalar(5i64)));
    let db = sqlite(&driver);

    let query = Query::<Person>::filter(Person::AGE.gt(10));

    let rows = db.all(&query).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][1], Value::from("Jane"));

    assert_eq!(db.count(&query).await.unwrap(), 5);
}

#[tokio::test]
async fn driver_errors_are_wrapped() {
    let driver = MockDriver::new();
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed");
    driver.respond(Err(Error::driver_operation_failed(io)));
    let db = sqlite(&driver);

    let err = db.insert(&[Person::new("Jane", 31)]).await.unwrap_err();

    assert!(err.is_execution_failed());
    assert!(err.root().is_driver_operation_failed());
    assert_eq!(
        err.to_string(),
        "failed to execute INSERT on `Person`: socket closed"
    );
}

#[tokio::test]
async fn compile_errors_never_reach_the_driver() {
    let driver = MockDriver::new();
    let db = sqlite(&driver);

    let err = db.insert::<Person>(&[]).await.unwrap_err();

    assert!(err.is_invalid_statement());
    assert!(driver.events().is_empty());
}

#[tokio::test]
async fn slow_statements_time_out() {
    let driver = MockDriver::new();
    driver.delay(Duration::from_secs(10));

    let db = Db::builder()
        .flavor(Flavor::Sqlite)
        .command_timeout(Duration::from_millis(50))
        .build(driver.clone())
        .unwrap();

    let err = db.drop_table::<Person>().await.unwrap_err();

    assert!(err.is_command_timed_out());
    assert_eq!(err.to_string(), "command timed out after 50ms");
}

#[tokio::test]
async fn table_exists_runs_the_catalog_probe() {
    let driver = MockDriver::new();
    driver.respond(Ok(Response::scalar(0i64)));
    let db = sqlite(&driver);

    assert!(!db.table_exists::<Person>().await.unwrap());
    assert!(db.table_exists::<Person>().await.unwrap());
    assert_eq!(
        driver.sql()[0],
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = @p_0;"
    );
}

#[tokio::test]
async fn sequence_exists_without_catalog_is_constant() {
    let driver = MockDriver::new();
    let db = sqlite(&driver);

    assert!(db.sequence_exists("person_id_seq", None).await.unwrap());
    assert!(driver.events().is_empty());
}
