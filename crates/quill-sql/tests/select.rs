mod common;
use common::*;

use pretty_assertions::assert_eq;
use quill_core::{
    schema::Model,
    stmt::{self, DbType, TypedValue, Value},
};
use quill_sql::{
    query::{Expr, Path, Projection, Query},
    stmt::Select,
    Serializer, Statement,
};

fn where_clause(serializer: &Serializer, filter: Expr<bool>) -> String {
    let sql = sql(serializer, &Query::<Person>::filter(filter).to_select());
    let prefix = "SELECT \"Id\", \"Name\", \"Age\" FROM \"Person\" WHERE ";
    match sql.strip_prefix(prefix) {
        Some(rest) => rest.trim_end_matches(';').to_string(),
        None => panic!("unexpected select: {sql}"),
    }
}

#[test]
fn filter_with_pattern() {
    let stmt = Query::<Person>::filter(Person::AGE.gt(10))
        .and(Person::NAME.starts_with("J"))
        .to_select();
    let compiled = serialize(&Serializer::sqlite(), &stmt);

    assert_eq!(
        compiled.sql,
        "SELECT \"Id\", \"Name\", \"Age\" FROM \"Person\" WHERE \"Age\" > @p_0 AND upper(\"Name\") LIKE @p_1 ESCAPE '^';"
    );
    assert!(compiled.intent.is_query());

    let params: Vec<_> = compiled.params.into_values().collect();
    assert_eq!(
        params,
        [
            TypedValue::new(Value::I32(10), Some(DbType::Int32)),
            TypedValue::new(Value::from("J%"), Some(DbType::String)),
        ]
    );
}

#[test]
fn postgresql_placeholders() {
    let stmt = Query::<Person>::filter(Person::AGE.gt(10))
        .and(Person::NAME.eq("Ann"))
        .to_select();
    let compiled = serialize(&Serializer::postgresql(), &stmt);

    assert_eq!(
        compiled.sql,
        "SELECT \"Id\", \"Name\", \"Age\" FROM \"Person\" WHERE \"Age\" > :p_0 AND \"Name\" = :p_1;"
    );
    assert_eq!(
        compiled.params.keys().collect::<Vec<_>>(),
        [":p_0", ":p_1"]
    );
}

#[test]
fn logical_grouping_follows_the_builder() {
    let serializer = Serializer::sqlite();

    let stmt = Query::<Person>::filter(Person::AGE.gt(10))
        .and(Person::AGE.lt(20))
        .or(Person::NAME.is_null())
        .to_select();
    assert_eq!(
        sql(&serializer, &stmt),
        "SELECT \"Id\", \"Name\", \"Age\" FROM \"Person\" WHERE (\"Age\" > @p_0 AND \"Age\" < @p_1) OR \"Name\" IS NULL;"
    );

    let filter = Person::AGE.gt(10).and(Person::AGE.lt(20).or(Person::AGE.eq(99)));
    assert_eq!(
        where_clause(&serializer, filter),
        "\"Age\" > @p_0 AND (\"Age\" < @p_1 OR \"Age\" = @p_2)"
    );
}

#[test]
fn negation() {
    assert_eq!(
        where_clause(&Serializer::sqlite(), Person::AGE.gt(1).not()),
        "NOT (\"Age\" > @p_0)"
    );
    assert_eq!(
        where_clause(&Serializer::sqlite(), !Person::NAME.is_not_null()),
        "NOT (\"Name\" IS NOT NULL)"
    );
}

#[test]
fn comparison_with_null_is_a_null_test() {
    let column = stmt::Expr::column(Person::model_ref(), "Name");

    let mut select = Select::new(Person::definition());
    select.filter = Some(stmt::Expr::eq(column.clone(), stmt::Expr::null()));
    let compiled = serialize(&Serializer::sqlite(), &select.into());

    assert_eq!(
        compiled.sql,
        "SELECT \"Id\", \"Name\", \"Age\" FROM \"Person\" WHERE \"Name\" IS NULL;"
    );
    assert!(compiled.params.is_empty());

    let mut select = Select::new(Person::definition());
    select.filter = Some(stmt::Expr::ne(stmt::Expr::null(), column));

    assert_eq!(
        sql(&Serializer::sqlite(), &select.into()),
        "SELECT \"Id\", \"Name\", \"Age\" FROM \"Person\" WHERE \"Name\" IS NOT NULL;"
    );
}

#[test]
fn pattern_kinds() {
    let serializer = Serializer::sqlite();

    let cases = [
        (Person::NAME.starts_with("an"), "AN%"),
        (Person::NAME.ends_with("an"), "%AN"),
        (Person::NAME.contains("an"), "%AN%"),
    ];

    for (filter, pattern) in cases {
        let stmt = Query::<Person>::filter(filter).to_select();
        let compiled = serialize(&serializer, &stmt);

        assert!(compiled
            .sql
            .ends_with("WHERE upper(\"Name\") LIKE @p_0 ESCAPE '^';"));
        assert_eq!(compiled.params["@p_0"].value, Value::from(pattern));
    }
}

#[test]
fn pattern_wildcards_are_escaped() {
    let stmt = Query::<Person>::filter(Person::NAME.contains("50%_off")).to_select();
    let compiled = serialize(&Serializer::postgresql(), &stmt);

    assert!(compiled
        .sql
        .ends_with("WHERE upper(\"Name\") LIKE :p_0 ESCAPE '^';"));
    assert_eq!(compiled.params[":p_0"].value, Value::from("%50^%^_OFF%"));

    let stmt = Query::<Person>::filter(Person::NAME.starts_with("[a]")).to_select();
    let compiled = serialize(&Serializer::sql_server(), &stmt);

    assert!(compiled.sql.ends_with(" ESCAPE '^';"));
    assert_eq!(compiled.params["@p_0"].value, Value::from("^[A]%"));

    // Brackets are literal outside SQL Server
    let compiled = serialize(&Serializer::sqlite(), &stmt);
    assert!(compiled.sql.ends_with("LIKE @p_0 ESCAPE '^';"));
    assert_eq!(compiled.params["@p_0"].value, Value::from("[A]%"));
}

#[test]
fn pattern_backslash_is_literal() {
    let stmt = Query::<Person>::filter(Person::NAME.starts_with("a\\")).to_select();

    let compiled = serialize(&Serializer::postgresql(), &stmt);
    assert!(compiled
        .sql
        .ends_with("WHERE upper(\"Name\") LIKE :p_0 ESCAPE '^';"));
    assert_eq!(compiled.params[":p_0"].value, Value::from("A\\%"));

    let compiled = serialize(&Serializer::mysql(), &stmt);
    assert!(compiled
        .sql
        .ends_with("WHERE upper(`Name`) LIKE @p_0 ESCAPE '^';"));
    assert_eq!(compiled.params["@p_0"].value, Value::from("A\\%"));
}

#[test]
fn in_list() {
    let serializer = Serializer::sqlite();

    assert_eq!(
        where_clause(&serializer, Person::AGE.in_list([1, 2, 3])),
        "\"Age\" IN (@p_0, @p_1, @p_2)"
    );
    assert_eq!(
        where_clause(&serializer, Person::NAME.not_in_list(["a".to_string()])),
        "\"Name\" NOT IN (@p_0)"
    );
}

#[test]
fn empty_in_list_is_constant() {
    let serializer = Serializer::sqlite();

    let compiled = serialize(
        &serializer,
        &Query::<Person>::filter(Person::AGE.in_list(Vec::<i32>::new())).to_select(),
    );
    assert!(compiled.sql.ends_with("WHERE 1 = 0;"));
    assert!(compiled.params.is_empty());

    assert_eq!(
        where_clause(&serializer, Person::AGE.not_in_list(Vec::<i32>::new())),
        "1 = 1"
    );
}

#[test]
fn string_functions() {
    assert_eq!(
        where_clause(&Serializer::sqlite(), Person::NAME.length().gt(3)),
        "length(\"Name\") > @p_0"
    );
    assert_eq!(
        where_clause(&Serializer::sql_server(), Person::NAME.length().gt(3)),
        "len(\"Name\") > @p_0"
    );
    assert_eq!(
        where_clause(&Serializer::postgresql(), Person::NAME.lower().eq("ann")),
        "lower(\"Name\") = :p_0"
    );
    assert_eq!(
        where_clause(&Serializer::mysql(), Person::NAME.upper().ne("ANN")),
        "upper(`Name`) <> @p_0"
    );
}

#[test]
fn comparison_values_take_the_column_type() {
    let unit_price: Path<OrderLine, f64> = Path::new("UnitPrice");
    let stmt = Query::<OrderLine>::filter(unit_price.ge(2.5)).to_select();
    let compiled = serialize(&Serializer::sqlite(), &stmt);

    assert_eq!(
        compiled.params["@p_0"],
        TypedValue::new(Value::F64(2.5), Some(DbType::Decimal))
    );
}

#[test]
fn projected_columns() {
    let stmt = Query::<Person>::all()
        .select(Person::NAME)
        .select(Person::AGE.cast::<i64>())
        .to_select();

    assert_eq!(
        sql(&Serializer::sqlite(), &stmt),
        "SELECT \"Name\", \"Age\" FROM \"Person\";"
    );
}

#[test]
fn constructor_projection_aliases_columns() {
    let stmt = Query::<Person>::all()
        .select_new(
            Projection::new()
                .field("X", Person::NAME)
                .field("Y", Person::AGE),
        )
        .to_select();

    assert_eq!(
        sql(&Serializer::sqlite(), &stmt),
        "SELECT \"Name\" AS \"X\", \"Age\" AS \"Y\" FROM \"Person\";"
    );

    // Every constructor argument is tagged, even when the names agree
    let stmt = Query::<Person>::all()
        .select_new(Projection::new().field("Name", Person::NAME))
        .to_select();

    assert_eq!(
        sql(&Serializer::mysql(), &stmt),
        "SELECT `Name` AS `Name` FROM `Person`;"
    );
}

#[test]
fn empty_constructor_projection() {
    let stmt = Query::<Person>::all().select_new(Projection::new()).to_select();
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn projection_rejects_expressions() {
    let stmt = Query::<Person>::all().select(Person::AGE.gt(1)).to_select();
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_unsupported_expression());
    assert_eq!(
        err.to_string(),
        "unsupported expression: only column references/projections are supported; found binary operator"
    );

    let stmt = Query::<Person>::all()
        .select_new(Projection::new().field("Shout", Person::NAME.upper()))
        .to_select();
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_unsupported_expression());
}

#[test]
fn constructor_projection_in_filter() {
    let mut select = Select::new(Person::definition());
    select.filter = Some(stmt::Expr::new_projection([("X", stmt::Expr::value(1))]));

    let err = Serializer::sqlite().serialize(&select.into()).unwrap_err();
    assert!(err.is_unsupported_expression());
}

#[test]
fn aggregates() {
    let serializer = Serializer::sqlite();

    let stmt = Query::<Person>::all()
        .select_max(Person::AGE)
        .select_min(Person::AGE)
        .select_avg(Person::AGE)
        .select_sum(Person::AGE)
        .to_select();
    assert_eq!(
        sql(&serializer, &stmt),
        "SELECT MAX(\"Age\"), MIN(\"Age\"), AVG(\"Age\"), SUM(\"Age\") FROM \"Person\";"
    );

    let stmt = Query::<Person>::all().select_count().to_select();
    assert_eq!(sql(&serializer, &stmt), "SELECT COUNT(*) FROM \"Person\";");

    let stmt = Query::<Person>::all()
        .select_count_distinct(Person::NAME)
        .to_select();
    assert_eq!(
        sql(&serializer, &stmt),
        "SELECT COUNT(DISTINCT \"Name\") FROM \"Person\";"
    );
}

#[test]
fn aggregates_cannot_mix_with_columns() {
    let stmt = Query::<Person>::all()
        .select(Person::NAME)
        .select_max(Person::AGE)
        .to_select();
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn aggregate_of_expression() {
    let stmt = Query::<Person>::all()
        .select(Person::NAME.length().max())
        .to_select();
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_unsupported_expression());
}

#[test]
fn aggregate_in_where() {
    let stmt = Query::<Person>::filter(Person::AGE.max().gt(10)).to_select();
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn group_by_having() {
    let stmt = Query::<Person>::filter(Person::NAME.is_not_null())
        .select_count()
        .group_by(Person::AGE)
        .having(Expr::count_star().gt(1))
        .order_by_desc(Expr::count_star())
        .to_select();

    assert_eq!(
        sql(&Serializer::sqlite(), &stmt),
        "SELECT COUNT(*) FROM \"Person\" WHERE \"Name\" IS NOT NULL GROUP BY \"Age\" HAVING COUNT(*) > @p_0 ORDER BY COUNT(*) DESC;"
    );
}

#[test]
fn distinct_and_order() {
    let stmt = Query::<Person>::all()
        .select(Person::NAME)
        .distinct()
        .order_by(Person::NAME)
        .order_by(Person::AGE.desc())
        .to_select();

    assert_eq!(
        sql(&Serializer::postgresql(), &stmt),
        "SELECT DISTINCT \"Name\" FROM \"Person\" ORDER BY \"Name\", \"Age\" DESC;"
    );
}

#[test]
fn prefix_with_table_name() {
    let stmt = Query::<Department>::filter(Path::<Department, i32>::new("Id").gt(1))
        .prefix_with_table_name()
        .to_select();

    assert_eq!(
        sql(&Serializer::postgresql(), &stmt),
        "SELECT \"hr\".\"departments\".\"Id\", \"hr\".\"departments\".\"Name\", \"hr\".\"departments\".\"ParentId\" FROM \"hr\".\"departments\" WHERE \"hr\".\"departments\".\"Id\" > :p_0;"
    );
}

fn paged(serializer: &Serializer, limit: Option<u64>, offset: Option<u64>, ordered: bool) -> String {
    let mut query = Query::<Person>::all().select(Person::NAME);
    if ordered {
        query = query.order_by(Person::NAME);
    }
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    if let Some(offset) = offset {
        query = query.offset(offset);
    }
    sql(serializer, &query.to_select())
}

#[test]
fn limit_offset_sqlite() {
    let serializer = Serializer::sqlite();

    assert_eq!(
        paged(&serializer, Some(10), None, false),
        "SELECT \"Name\" FROM \"Person\" LIMIT 10;"
    );
    assert_eq!(
        paged(&serializer, Some(10), Some(5), false),
        "SELECT \"Name\" FROM \"Person\" LIMIT 10 OFFSET 5;"
    );
    assert_eq!(
        paged(&serializer, None, Some(5), false),
        "SELECT \"Name\" FROM \"Person\" LIMIT -1 OFFSET 5;"
    );
}

#[test]
fn limit_offset_postgresql() {
    let serializer = Serializer::postgresql();

    assert_eq!(
        paged(&serializer, Some(10), Some(5), true),
        "SELECT \"Name\" FROM \"Person\" ORDER BY \"Name\" LIMIT 10 OFFSET 5;"
    );
    assert_eq!(
        paged(&serializer, None, Some(5), false),
        "SELECT \"Name\" FROM \"Person\" OFFSET 5;"
    );
}

#[test]
fn limit_offset_mysql() {
    let serializer = Serializer::mysql();

    assert_eq!(
        paged(&serializer, Some(10), None, false),
        "SELECT `Name` FROM `Person` LIMIT 10;"
    );
    assert_eq!(
        paged(&serializer, Some(10), Some(5), false),
        "SELECT `Name` FROM `Person` LIMIT 5, 10;"
    );
    assert_eq!(
        paged(&serializer, None, Some(5), false),
        "SELECT `Name` FROM `Person` LIMIT 5, 18446744073709551615;"
    );
}

#[test]
fn limit_offset_sql_server() {
    let serializer = Serializer::sql_server();

    assert_eq!(
        paged(&serializer, Some(10), None, false),
        "SELECT \"Name\" FROM \"Person\" ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY;"
    );
    assert_eq!(
        paged(&serializer, Some(10), Some(5), true),
        "SELECT \"Name\" FROM \"Person\" ORDER BY \"Name\" OFFSET 5 ROWS FETCH NEXT 10 ROWS ONLY;"
    );
    assert_eq!(
        paged(&serializer, None, Some(5), true),
        "SELECT \"Name\" FROM \"Person\" ORDER BY \"Name\" OFFSET 5 ROWS;"
    );
}

#[test]
fn count() {
    let stmt = Query::<Person>::filter(Person::AGE.ge(18)).to_count();
    let compiled = serialize(&Serializer::sqlite(), &stmt);

    assert_eq!(
        compiled.sql,
        "SELECT COUNT(*) FROM \"Person\" WHERE \"Age\" >= @p_0;"
    );
    assert!(compiled.intent.is_scalar());

    let stmt = Query::<Person>::all()
        .select(Person::NAME)
        .distinct()
        .to_count();
    assert_eq!(
        sql(&Serializer::mysql(), &stmt),
        "SELECT COUNT(DISTINCT `Name`) FROM `Person`;"
    );

    assert_eq!(
        sql(&Serializer::sqlite(), &Statement::count(Person::definition(), None)),
        "SELECT COUNT(*) FROM \"Person\";"
    );
}

#[test]
fn computed_fields_are_inlined() {
    let stmt = Query::<OrderLine>::all().to_select();

    assert_eq!(
        sql(&Serializer::sqlite(), &stmt),
        "SELECT \"OrderId\", \"LineNo\", \"Sku\", \"Quantity\", \"UnitPrice\", \"Quantity\" * \"UnitPrice\" AS \"Total\" FROM \"OrderLine\";"
    );

    let total: Path<OrderLine, f64> = Path::new("Total");
    let stmt = Query::<OrderLine>::filter(total.gt(100.0))
        .select(OrderLine::SKU)
        .select(total)
        .to_select();

    assert_eq!(
        sql(&Serializer::sqlite(), &stmt),
        "SELECT \"Sku\", \"Quantity\" * \"UnitPrice\" AS \"Total\" FROM \"OrderLine\" WHERE (\"Quantity\" * \"UnitPrice\") > @p_0;"
    );
}

#[test]
fn unknown_field() {
    let bogus: Path<Person, i32> = Path::new("Height");
    let stmt = Query::<Person>::filter(bogus.gt(1)).to_select();
    let err = Serializer::sqlite().serialize(&stmt).unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn compilation_is_deterministic() {
    let serializer = Serializer::postgresql();
    let stmt = Query::<Person>::filter(Person::AGE.gt(10))
        .and(Person::NAME.contains("x"))
        .order_by(Person::AGE)
        .limit(5)
        .to_select();

    assert_eq!(serialize(&serializer, &stmt), serialize(&serializer, &stmt));
}
