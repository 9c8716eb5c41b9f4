//! Statement builder example for fluentsql
//!
//! Run with: cargo run --example builder -p fluentsql
//!
//! Renders statements only; no database connection is needed.

use fluentsql::builder::{DeleteBuilder, JoinKind, QueryBuilder};
use fluentsql::{QbError, WhereBuilder};

fn main() -> Result<(), QbError> {
    // ============================================
    // SELECT with joins, groups and ordering
    // ============================================
    println!("=== SELECT ===");

    let mut orders = QueryBuilder::new("orders o");
    orders
        .add_select(["o.id", "u.email"])
        .join("users u", "u.id", "=", "o.user_id")
        .join_with(JoinKind::Left, "refunds r", "r.order_id", "=", "o.id")
        .and_where("o.total", ">", 100)
        .and_group(|g| {
            g.and_eq("o.status", "'paid'").or_eq("o.status", "'shipped'");
        })
        .or_is_not_null("r.id")
        .order_by_desc("o.created_at")
        .paginate(2, 25);
    println!("{}", orders.to_sql()?);
    println!("{}", orders.to_count_sql()?);

    // ============================================
    // Sub-select as the FROM target
    // ============================================
    println!("\n=== FROM (sub-select) ===");

    let mut top = QueryBuilder::new("");
    top.from_sub(
        || {
            let mut sub = QueryBuilder::new("orders");
            sub.add_select(["user_id", "sum(total) as spent"])
                .group_by(["user_id"]);
            sub
        },
        "s",
    )
    .and_where("s.spent", ">=", 1000)
    .order_by_desc("s.spent");
    println!("{}", top.to_sql()?);

    // ============================================
    // Conditional filters
    // ============================================
    println!("\n=== when / *_opt ===");

    let search: Option<&str> = Some("'%rust%'");
    let tags: Option<Vec<i64>> = None;
    let mut posts = QueryBuilder::new("posts");
    posts
        .when(search.is_some(), |q| {
            q.and_where("title", "ilike", search.unwrap_or_default());
        })
        .and_in_opt("tag_id", tags)
        .and_eq_opt("published", Some(true));
    println!("{}", posts.to_sql()?);

    // ============================================
    // DELETE
    // ============================================
    println!("\n=== DELETE ===");

    let mut expired = DeleteBuilder::new("sessions");
    expired
        .and_where("expires_at", "<", "now()")
        .or_in("user_id", vec![7_i64, 9]);
    println!("{}", expired.to_sql()?);

    // ============================================
    // Unsupported argument
    // ============================================
    println!("\n=== Errors ===");

    let mut bad = QueryBuilder::new("users");
    bad.and_in("id", 5);
    match bad.to_sql() {
        Err(e) if e.is_unsupported_argument() => println!("rejected: {e}"),
        other => println!("unexpected: {other:?}"),
    }

    Ok(())
}
