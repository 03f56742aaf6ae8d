mod common;
use common::*;

use pretty_assertions::assert_eq;
use quill_core::schema::{Model, ModelBuilder};
use quill_sql::{naming::{Pluralized, SnakeCase}, Serializer, Statement};

#[test]
fn person_sqlite() {
    let stmt = Statement::create_table(Person::definition());
    let compiled = serialize(&Serializer::sqlite(), &stmt);

    assert_eq!(
        compiled.sql,
        "CREATE TABLE \"Person\" (\n    \"Id\" INTEGER PRIMARY KEY AUTOINCREMENT,\n    \"Name\" VARCHAR(255) NULL,\n    \"Age\" INTEGER NOT NULL\n);"
    );
    assert!(compiled.params.is_empty());
    assert!(compiled.intent.is_execute());
}

#[test]
fn person_postgresql() {
    let stmt = Statement::create_table(Person::definition());

    assert_eq!(
        sql(&Serializer::postgresql(), &stmt),
        "CREATE TABLE \"Person\" (\n    \"Id\" BIGSERIAL PRIMARY KEY,\n    \"Name\" VARCHAR(255) NULL,\n    \"Age\" INTEGER NOT NULL\n);"
    );
}

#[test]
fn person_mysql() {
    let stmt = Statement::create_table(Person::definition());

    assert_eq!(
        sql(&Serializer::mysql(), &stmt),
        "CREATE TABLE `Person` (\n    `Id` BIGINT PRIMARY KEY AUTO_INCREMENT,\n    `Name` VARCHAR(255) NULL,\n    `Age` INT NOT NULL\n);"
    );
}

#[test]
fn person_sql_server() {
    let stmt = Statement::create_table(Person::definition());

    assert_eq!(
        sql(&Serializer::sql_server(), &stmt),
        "CREATE TABLE \"Person\" (\n    \"Id\" BIGINT PRIMARY KEY IDENTITY(1,1),\n    \"Name\" NVARCHAR(255) NULL,\n    \"Age\" INT NOT NULL\n);"
    );
}

#[test]
fn composite_primary_key_is_a_trailing_clause() {
    let stmt = Statement::create_table(OrderLine::definition());

    assert_eq!(
        sql(&Serializer::sqlite(), &stmt),
        "CREATE TABLE \"OrderLine\" (\n    \"OrderId\" INTEGER NOT NULL,\n    \"LineNo\" INTEGER NOT NULL,\n    \"Sku\" VARCHAR(40) NOT NULL,\n    \"Quantity\" INTEGER NOT NULL DEFAULT 1,\n    \"UnitPrice\" DECIMAL(10,2) NOT NULL,\n    PRIMARY KEY (\"OrderId\", \"LineNo\")\n);"
    );
}

#[test]
fn naming_strategy_applies_to_every_identifier() {
    let serializer = Serializer::postgresql().naming_strategy(Pluralized(SnakeCase));
    let stmt = Statement::create_table(OrderLine::definition());

    assert_eq!(
        sql(&serializer, &stmt),
        "CREATE TABLE \"order_lines\" (\n    \"order_id\" INTEGER NOT NULL,\n    \"line_no\" INTEGER NOT NULL,\n    \"sku\" VARCHAR(40) NOT NULL,\n    \"quantity\" INTEGER NOT NULL DEFAULT 1,\n    \"unit_price\" DECIMAL(10,2) NOT NULL,\n    PRIMARY KEY (\"order_id\", \"line_no\")\n);"
    );
}

#[test]
fn self_referencing_foreign_key_with_schema() {
    let stmt = Statement::create_table(Department::definition());

    assert_eq!(
        sql(&Serializer::postgresql(), &stmt),
        "CREATE TABLE \"hr\".\"departments\" (\n    \"Id\" INTEGER NOT NULL,\n    \"Name\" VARCHAR(255) NOT NULL,\n    \"ParentId\" INTEGER NULL,\n    PRIMARY KEY (\"Id\"),\n    CONSTRAINT \"FK_departments_departments_ParentId\" FOREIGN KEY (\"ParentId\") REFERENCES \"hr\".\"departments\" (\"Id\") ON DELETE CASCADE\n);"
    );
}

#[test]
fn foreign_key_actions_mysql() {
    let stmt = Statement::create_table(Employee::definition());

    assert_eq!(
        sql(&Serializer::mysql(), &stmt),
        "CREATE TABLE `Employee` (\n    `Id` BIGINT PRIMARY KEY AUTO_INCREMENT,\n    `DepartmentId` INT NOT NULL,\n    `Email` VARCHAR(255) NOT NULL UNIQUE,\n    `first_name` VARCHAR(255) NULL,\n    CONSTRAINT `FK_Employee_departments_DepartmentId` FOREIGN KEY (`DepartmentId`) REFERENCES `hr`.`departments` (`Id`) ON DELETE RESTRICT ON UPDATE CASCADE\n);"
    );
}

#[test]
fn sql_server_drops_restrict() {
    let stmt = Statement::create_table(Employee::definition());

    assert_eq!(
        sql(&Serializer::sql_server(), &stmt),
        "CREATE TABLE \"Employee\" (\n    \"Id\" BIGINT PRIMARY KEY IDENTITY(1,1),\n    \"DepartmentId\" INT NOT NULL,\n    \"Email\" NVARCHAR(255) NOT NULL UNIQUE,\n    \"first_name\" NVARCHAR(255) NULL,\n    CONSTRAINT \"FK_Employee_departments_DepartmentId\" FOREIGN KEY (\"DepartmentId\") REFERENCES \"hr\".\"departments\" (\"Id\") ON UPDATE CASCADE\n);"
    );
}

#[test]
fn foreign_key_to_model_without_primary_key() {
    struct Tag {
        label: String,
    }

    impl Model for Tag {
        fn describe(model: &mut ModelBuilder<Self>) {
            model.field("Label", |t| &t.label);
        }
    }

    struct Note {
        id: i64,
        tag: String,
    }

    impl Model for Note {
        fn describe(model: &mut ModelBuilder<Self>) {
            model.field("Id", |n| &n.id).primary_key().auto_increment();
            model.field("Tag", |n| &n.tag).references::<Tag>();
        }
    }

    let stmt = Statement::create_table(Note::definition());
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn quote_character_in_table_name_is_escaped() {
    struct Odd {
        id: i32,
    }

    impl Model for Odd {
        fn describe(model: &mut ModelBuilder<Self>) {
            model.alias("we\"ird");
            model.field("Id", |o| &o.id).primary_key();
        }
    }

    let stmt = Statement::drop_table(Odd::definition());

    assert_eq!(sql(&Serializer::sqlite(), &stmt), "DROP TABLE \"we\"\"ird\";");
}

#[test]
fn drop_table() {
    let serializer = Serializer::sqlite();

    assert_eq!(
        sql(&serializer, &Statement::drop_table(Person::definition())),
        "DROP TABLE \"Person\";"
    );
    assert_eq!(
        sql(
            &serializer,
            &Statement::drop_table_if_exists(Department::definition())
        ),
        "DROP TABLE IF EXISTS \"hr\".\"departments\";"
    );
}

#[test]
fn create_indices() {
    let serializer = Serializer::sqlite();
    let stmts: Vec<_> = Statement::create_indices(&OrderLine::definition())
        .iter()
        .map(|stmt| sql(&serializer, stmt))
        .collect();

    assert_eq!(
        stmts,
        [
            "CREATE INDEX \"idx_orderline_sku\" ON \"OrderLine\" (\"Sku\");",
            "CREATE INDEX \"idx_orderline_quantity_sku\" ON \"OrderLine\" (\"Sku\", \"Quantity\" DESC);",
        ]
    );
}

#[test]
fn create_named_unique_index() {
    let serializer = Serializer::mysql();
    let stmts: Vec<_> = Statement::create_indices(&Employee::definition())
        .iter()
        .map(|stmt| sql(&serializer, stmt))
        .collect();

    assert_eq!(
        stmts,
        ["CREATE UNIQUE INDEX `ux_employee_dept_email` ON `Employee` (`DepartmentId`, `Email`);"]
    );
}

#[test]
fn output_is_deterministic() {
    let serializer = Serializer::postgresql();
    let stmt = Statement::create_table(Employee::definition());

    assert_eq!(serialize(&serializer, &stmt), serialize(&serializer, &stmt));
}
