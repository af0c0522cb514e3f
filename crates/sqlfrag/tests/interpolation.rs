//! End-to-end tests for the `sql!` macro and the public composition API.

use chrono::{TimeZone, Utc};
use sqlfrag::prelude::*;
use sqlfrag::{RenderConfig, RenderedSql};

#[test]
fn invoice_filter_with_timestamp() {
    let now = Utc.with_ymd_and_hms(2024, 1, 31, 8, 30, 0).unwrap();
    let mut q = sql!("SELECT * FROM Invoices WHERE Invoices.Total > {20} AND Invoices.PaidDate < {now}");

    assert_eq!(
        q.text(),
        "SELECT * FROM Invoices WHERE Invoices.Total > @p0 AND Invoices.PaidDate < @p1"
    );
    assert_eq!(q.params()[0], ("@p0".to_string(), Value::Int(20)));
    assert_eq!(q.params()[1], ("@p1".to_string(), Value::Timestamp(now)));

    q += sql!(" AND Invoices.TalentID = {5}");

    assert_eq!(
        q.text(),
        "SELECT * FROM Invoices WHERE Invoices.Total > @p0 AND Invoices.PaidDate < @p1 AND Invoices.TalentID = @p2"
    );
    let names: Vec<String> = q.params().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["@p0", "@p1", "@p2"]);
    assert_eq!(q.params()[2].1, Value::Int(5));
}

#[test]
fn nested_macros_flatten() {
    let b = sql!("B {2}");
    let ab = sql!("A {1} {b}");
    let abc = sql!("{ab} C {3}");

    assert_eq!(abc.text(), "A @p0 B @p1 C @p2");
    let values: Vec<i64> = abc.values().filter_map(Value::as_i64).collect();
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn macro_matches_positional_build() {
    let status = "active";
    let ids = vec![1_i64, 2, 3];

    let from_macro = sql!("status = {status} AND id IN ({&ids})");
    let from_build = Query::build(
        "status = {0} AND id IN ({1})",
        vec![Arg::from(status), Arg::from(&ids)],
    )
    .unwrap();

    assert_eq!(from_macro.text(), from_build.text());
    assert_eq!(from_macro.params(), from_build.params());
    assert_eq!(ids.len(), 3);
}

#[test]
fn macro_escapes_braces() {
    let q = sql!("select '{{literal}}' as x where a = {1}");
    assert_eq!(q.text(), "select '{literal}' as x where a = @p0");
}

#[test]
fn blank_macro_is_empty() {
    assert!(sql!("   ").is_empty());
}

#[test]
fn fragments_and_collections_interpolate() {
    let mut fs = FragmentSet::new(" and ");
    fs.add(sql!("a = {1}"));
    fs.add(sql!("b = {2}"));
    fs.add(sql!("c = {3}"));

    let q = sql!("select * from customers where {fs}");
    assert_eq!(
        q.text(),
        "select * from customers where a = @p0 and b = @p1 and c = @p2"
    );

    let mut order = ItemCollection::order_by();
    order.add(sql!("name"));
    let filter = ItemCollection::filter();
    let q = sql!("select * from t{&filter}{&order}");
    assert_eq!(q.text(), "select * from t order by name");
}

#[test]
fn select_builder_end_to_end() {
    let mut select = Select::new("products");
    select.filter(sql!("id <> {1}"));
    select.filter(sql!("category IN ({vec![\"a\", \"b\"]})"));
    select.order_by(sql!("name"));

    let rendered = select.to_query().render(&RenderConfig::default());
    assert_eq!(
        rendered.sql,
        "SELECT  *  FROM [products]  where id <> @p0 AND category IN (@p1,@p2)  order by name"
    );
    assert_eq!(rendered.params.len(), 3);
    assert_eq!(rendered.params[2], ("@p2".to_string(), Value::Text("b".into())));
}

#[test]
fn rendered_sql_serializes_for_execution_layer() {
    let q = sql!("select * from t where id = {42} and name = {\"x\"}");
    let rendered = q.render(&RenderConfig::default());

    let json = serde_json::to_string(&rendered).unwrap();
    let back: RenderedSql = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rendered);
}

#[test]
fn untrusted_text_never_reaches_sql() {
    let evil = "x'; DROP TABLE users; --";
    let q = sql!("select * from users where name = {evil}");

    assert_eq!(q.text(), "select * from users where name = @p0");
    assert_eq!(q.params()[0].1, Value::Text(evil.to_string()));
}

#[test]
fn empty_list_renders_empty_parens() {
    let ids: Vec<i32> = Vec::new();
    let q = sql!("id IN ({ids})");
    assert_eq!(q.text(), "id IN ()");
    assert_eq!(q.parameter_count(), 0);
}

#[test]
fn new_requires_a_fragment() {
    let err = Query::new(Vec::<Query>::new()).unwrap_err();
    assert!(err.is_empty_query());

    let q = Query::new([sql!("select * from customers"), sql!(" where name = {\"a\"}")]).unwrap();
    assert_eq!(q.text(), "select * from customers where name = @p0");
}

#[test]
fn sizes_bind_as_integers() {
    let ids = vec![4_i64, 5, 6];
    let q = sql!("select * from t limit {ids.len()} offset {0_u64}");

    assert_eq!(q.text(), "select * from t limit @p0 offset @p1");
    assert_eq!(q.values().collect::<Vec<_>>(), vec![&Value::Int(3), &Value::Int(0)]);
}

#[test]
fn escaped_slot_token_blocks_checked_round_trip() {
    let q = sql!("select '{{0}}' as tag where id = {7}");
    assert_eq!(q.text(), "select '{0}' as tag where id = @p0");

    let err = q.try_to_template().unwrap_err();
    assert!(err.is_ambiguous_template());

    let plain = sql!("select '{{9}}' as tag where id = {7}");
    let (template, values) = plain.try_to_template().unwrap();
    let rebuilt = Query::build(&template, values).unwrap();
    assert_eq!(rebuilt.text(), plain.text());
}
