#![allow(dead_code)]

use quill_core::{
    schema::{Model, ModelBuilder, ReferentialAction},
    stmt::Type,
};
use quill_sql::{query::Path, Compiled, Serializer, Statement};

pub struct Person {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl Person {
    pub const ID: Path<Person, i64> = Path::new("Id");
    pub const NAME: Path<Person, String> = Path::new("Name");
    pub const AGE: Path<Person, i32> = Path::new("Age");
}

impl Model for Person {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("Id", |p| &p.id).primary_key().auto_increment();
        model.field("Name", |p| &p.name);
        model.field("Age", |p| &p.age);
    }
}

pub struct OrderLine {
    pub order_id: i32,
    pub line_no: i32,
    pub sku: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total: f64,
}

impl OrderLine {
    pub const SKU: Path<OrderLine, String> = Path::new("Sku");
    pub const QUANTITY: Path<OrderLine, i32> = Path::new("Quantity");
}

impl Model for OrderLine {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("OrderId", |o| &o.order_id).primary_key();
        model.field("LineNo", |o| &o.line_no).primary_key();
        model
            .field("Sku", |o| &o.sku)
            .required()
            .length(40)
            .index();
        model.field("Quantity", |o| &o.quantity).default_value(1);
        model
            .field("UnitPrice", |o| &o.unit_price)
            .ty(Type::Decimal)
            .precision(10)
            .scale(2);
        model
            .field("Total", |o| &o.total)
            .computed("\"Quantity\" * \"UnitPrice\"");
        model.composite_index(["Sku", "Quantity DESC"], false);
    }
}

pub struct Department {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

impl Model for Department {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.alias("departments").schema("hr");
        model.field("Id", |d| &d.id).primary_key();
        model.field("Name", |d| &d.name).required();
        model
            .field("ParentId", |d| &d.parent_id)
            .references::<Department>()
            .on_delete(ReferentialAction::Cascade);
    }
}

pub struct Employee {
    pub id: i64,
    pub department_id: i32,
    pub email: String,
    pub first_name: String,
}

impl Model for Employee {
    fn describe(model: &mut ModelBuilder<Self>) {
        model.field("Id", |e| &e.id).primary_key().auto_increment();
        model
            .field("DepartmentId", |e| &e.department_id)
            .references::<Department>()
            .on_delete(ReferentialAction::Restrict)
            .on_update(ReferentialAction::Cascade);
        model.field("Email", |e| &e.email).required().unique();
        model.field("FirstName", |e| &e.first_name).alias("first_name");
        model.named_composite_index("ux_employee_dept_email", ["DepartmentId", "Email"], true);
    }
}

pub fn serialize(serializer: &Serializer, stmt: &Statement) -> Compiled {
    match serializer.serialize(stmt) {
        Ok(compiled) => compiled,
        Err(err) => panic!("failed to serialize {stmt:#?}: {err}"),
    }
}

pub fn sql(serializer: &Serializer, stmt: &Statement) -> String {
    serialize(serializer, stmt).sql
}
