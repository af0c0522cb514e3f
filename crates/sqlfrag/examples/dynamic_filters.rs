//! Dynamic filter composition example
//!
//! Run with: cargo run --example dynamic_filters -p sqlfrag

use sqlfrag::{FragmentSet, Query, QueryResult, RenderConfig, Select, ToQuery, sql};

/// Search parameters - all optional
struct TaskFilter {
    status: Option<String>,
    min_priority: Option<i32>,
    assignees: Vec<String>,
    title_contains: Option<String>,
}

/// Build the WHERE clause from whichever filters are present.
fn where_clause(filter: &TaskFilter) -> Query {
    let mut conditions = FragmentSet::with_prefix(" WHERE ", " AND ");

    if let Some(status) = &filter.status {
        conditions.add(sql!("status = {status}"));
    }
    if let Some(min_priority) = filter.min_priority {
        conditions.add(sql!("priority >= {min_priority}"));
    }
    if !filter.assignees.is_empty() {
        conditions.add(sql!("assignee IN ({&filter.assignees})"));
    }
    if let Some(title) = &filter.title_contains {
        let pattern = format!("%{title}%");
        conditions.add(sql!("title LIKE {pattern}"));
    }

    if conditions.is_empty() {
        Query::empty()
    } else {
        conditions.into_query()
    }
}

fn main() -> QueryResult<()> {
    let filter = TaskFilter {
        status: Some("open".to_string()),
        min_priority: Some(3),
        assignees: vec!["alice".to_string(), "bob".to_string()],
        title_contains: Some("deploy".to_string()),
    };

    let q = sql!("SELECT id, title FROM tasks{where_clause(&filter)} ORDER BY priority DESC");

    println!("positional : {}", q.to_positional());
    println!("named      : {}", q.text());
    for (name, value) in q.params() {
        println!("  {name} = {value:?}");
    }

    let pg = q.render(&RenderConfig::dollar());
    println!("postgres   : {}", pg.sql);

    // Concatenate fragments explicitly; at least one is required.
    let paged = Query::new([q, sql!(" LIMIT {20} OFFSET {40}")])?;
    println!("paged      : {}", paged.text());

    let mut select = Select::new("tasks");
    select
        .field(sql!("id"))
        .field(sql!("title"))
        .filter(sql!("status = {\"open\"}"))
        .order_by(sql!("id"));
    println!("select     : {}", select.to_query().text());

    Ok(())
}
