use super::*;
use crate::condition::Connector;
use serde_json::json;

#[test]
fn test_simple_select() {
    let qb = QueryBuilder::new("users");
    assert_eq!(qb.to_sql().unwrap(), "select * from users");
}

#[test]
fn test_empty_tree_has_no_where() {
    let mut qb = QueryBuilder::new("users");
    qb.order_by("id").and_group(|_| {});
    let sql = qb.to_sql().unwrap();
    assert!(!sql.contains("where"));
    assert_eq!(sql, "select * from users order by id asc");
}

#[test]
fn test_where_comparison() {
    let mut qb = QueryBuilder::new("users");
    qb.and_where("age", ">", 18);
    assert_eq!(qb.to_sql().unwrap(), "select * from users where age > 18");
}

#[test]
fn test_and_eq_defaults_to_equals() {
    let mut qb = QueryBuilder::new("users");
    qb.and_eq("status", "'active'").and_eq("role_id", 1);
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from users where status = 'active' AND role_id = 1"
    );
}

#[test]
fn test_and_then_or() {
    let mut qb = QueryBuilder::new("users");
    qb.and_where("age", ">", 18).or_where("status", "=", "active");
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from users where age > 18 Or status = active"
    );
}

#[test]
fn test_where_in_and_not_in() {
    let mut qb = QueryBuilder::new("users");
    qb.and_in("id", [1, 2, 3]);
    assert_eq!(qb.to_sql().unwrap(), "select * from users where id in (1,2,3)");

    let mut qb = QueryBuilder::new("users");
    qb.and_not_in("id", vec![4_i64, 5]);
    assert_eq!(qb.to_sql().unwrap(), "select * from users where id not in (4,5)");
}

#[test]
fn test_or_in_and_or_not_in() {
    let mut qb = QueryBuilder::new("t");
    qb.or_in("a", vec!["'x'", "'y'"]).or_not_in("b", vec![1.5, 2.25]);
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from t where a in ('x','y') OR b not in (1.5,2.25)"
    );
}

#[test]
fn test_unsupported_in_argument_fails() {
    let mut qb = QueryBuilder::new("users");
    qb.and_in("meta", json!({"a": 1}));
    let err = qb.to_sql().unwrap_err();
    assert!(err.is_unsupported_argument());

    let mut qb = QueryBuilder::new("users");
    qb.and_in("id", 5);
    assert!(qb.to_sql().unwrap_err().is_unsupported_argument());
}

#[test]
fn test_null_checks() {
    let mut qb = QueryBuilder::new("users");
    qb.and_is_null("deleted_at")
        .and_is_not_null("email")
        .or_is_null("banned_at")
        .or_is_not_null("admin_at");
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from users where deleted_at is null AND email is not null Or banned_at is null OR admin_at is not null"
    );
}

#[test]
fn test_group() {
    let mut qb = QueryBuilder::new("t");
    qb.and_group(|b| {
        b.and_eq("a", 1).or_eq("b", 2);
    });
    assert_eq!(qb.to_sql().unwrap(), "select * from t where (a = 1 Or b = 2)");
}

#[test]
fn test_groups_render_before_leaves() {
    let mut qb = QueryBuilder::new("t");
    qb.and_eq("x", 1)
        .or_group(|b| {
            b.and_eq("c", 3).and_eq("d", 4);
        })
        .and_group(|b| {
            b.and_eq("a", 1).or_eq("b", 2);
        })
        .or_eq("y", 2);
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from t where (a = 1 Or b = 2) And x = 1 Or (c = 3 AND d = 4) Or y = 2"
    );
}

#[test]
fn test_nested_groups() {
    let mut qb = QueryBuilder::new("t");
    qb.and_group(|b| {
        b.and_eq("a", 1).or_group(|inner| {
            inner.and_eq("b", 2).and_eq("c", 3);
        });
    });
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from t where (a = 1 Or (b = 2 AND c = 3))"
    );
}

#[test]
fn test_group_with_connector() {
    let mut qb = QueryBuilder::new("t");
    qb.group_with(Connector::Or, |b| {
        b.and_eq("a", 1);
    });
    assert_eq!(qb.wheres().groups(Connector::Or).len(), 1);
    assert_eq!(qb.to_sql().unwrap(), "select * from t where (a = 1)");
}

#[test]
fn test_where_with_explicit_connector() {
    let mut qb = QueryBuilder::new("t");
    qb.where_with("a", "<>", 1, Connector::Or)
        .where_with("b", "like", "'%x%'", Connector::And);
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from t where b like '%x%' Or a <> 1"
    );
}

#[test]
fn test_select_appends_after_star() {
    let mut qb = QueryBuilder::new("users");
    qb.select("id").add_select(["name", "email"]).add_select(["id"]);
    assert_eq!(qb.columns(), &["*", "id", "name", "email", "id"]);
    assert_eq!(qb.to_sql().unwrap(), "select *,id,name,email,id from users");
}

#[test]
fn test_from_variants() {
    let mut qb = QueryBuilder::new("");
    qb.from("users");
    assert_eq!(qb.to_sql().unwrap(), "select * from users");

    qb.from_as("users", "u");
    assert_eq!(qb.to_sql().unwrap(), "select * from users as u");

    qb.from_many(&["a", "b"]);
    assert_eq!(qb.to_sql().unwrap(), "select * from a,b");

    qb.from_many(&[]);
    assert_eq!(qb.to_sql().unwrap(), "select * from a,b");
}

#[test]
fn test_from_sub() {
    let mut qb = QueryBuilder::new("");
    qb.from_sub(
        || {
            let mut sub = QueryBuilder::new("orders");
            sub.and_where("total", ">", 100);
            sub
        },
        "big",
    )
    .and_eq("big.status", 1);
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from (select * from orders where total > 100) as big where big.status = 1"
    );
}

#[test]
fn test_from_sub_error_propagates() {
    let mut qb = QueryBuilder::new("");
    qb.from_sub(
        || {
            let mut sub = QueryBuilder::new("orders");
            sub.and_in("id", true);
            sub
        },
        "s",
    );
    assert!(qb.to_sql().unwrap_err().is_unsupported_argument());
}

#[test]
fn test_joins() {
    let mut qb = QueryBuilder::new("users u");
    qb.select("p.title")
        .join("posts p", "p.user_id", "=", "u.id")
        .left_join("roles r", "r.id", "=", "u.role_id")
        .right_join("teams t", "t.id", "=", "u.team_id")
        .full_join("tags g", "g.post_id", "=", "p.id");
    assert_eq!(
        qb.to_sql().unwrap(),
        "select *,p.title from users u \
         inner join posts p on p.user_id = u.id \
         left join roles r on r.id = u.role_id \
         right join teams t on t.id = u.team_id \
         full outer join tags g on g.post_id = p.id"
    );
}

#[test]
fn test_group_and_order() {
    let mut qb = QueryBuilder::new("t");
    qb.group_by(["a", "b"]).order_by("a").order_by_desc("b");
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from t group by a,b order by a asc,b desc"
    );
}

#[test]
fn test_clause_order() {
    let mut qb = QueryBuilder::new("orders o");
    qb.add_select(["o.user_id", "count(*)"])
        .order_by_desc("count(*)")
        .group_by(["o.user_id"])
        .and_eq("o.status", 1)
        .join("users u", "u.id", "=", "o.user_id")
        .paginate(2, 10);
    assert_eq!(
        qb.to_sql().unwrap(),
        "select *,o.user_id,count(*) from orders o inner join users u on u.id = o.user_id \
         where o.status = 1 group by o.user_id order by count(*) desc limit 10 offset 10"
    );
}

#[test]
fn test_paginate_clamps() {
    let mut qb = QueryBuilder::new("t");
    qb.paginate(0, 0);
    assert_eq!(qb.to_sql().unwrap(), "select * from t limit 1 offset 0");
}

#[test]
fn test_when() {
    let only_active = true;
    let mut qb = QueryBuilder::new("users");
    qb.when(only_active, |b| {
        b.and_eq("active", true);
    })
    .when(false, |b| {
        b.and_eq("never", 1);
    });
    assert_eq!(qb.to_sql().unwrap(), "select * from users where active = true");

    let mut qb = QueryBuilder::new("users");
    qb.when_else(
        false,
        |b| {
            b.order_by("id");
        },
        |b| {
            b.order_by_desc("id");
        },
    );
    assert_eq!(qb.to_sql().unwrap(), "select * from users order by id desc");
}

#[test]
fn test_render_is_idempotent() {
    let mut qb = QueryBuilder::new("users");
    qb.and_where("age", ">", 18)
        .or_group(|b| {
            b.and_in("id", [1, 2]);
        })
        .order_by("id");
    let first = qb.to_sql().unwrap();
    let second = qb.to_sql().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_count_sql() {
    let mut qb = QueryBuilder::new("users");
    qb.and_eq("status", 1).order_by_desc("created_at").paginate(1, 20);
    assert_eq!(
        qb.to_count_sql().unwrap(),
        "select count(*) from users where status = 1"
    );
}

#[test]
fn test_count_sql_grouped() {
    let mut qb = QueryBuilder::new("orders");
    qb.add_select(["user_id"]).group_by(["user_id"]).order_by("user_id");
    assert_eq!(
        qb.to_count_sql().unwrap(),
        "select count(*) from (select 1 from orders group by user_id) as t"
    );
}

#[test]
fn test_delete() {
    let mut del = DeleteBuilder::new("users");
    del.and_eq("id", 7).or_in("email", vec!["'a@x'", "'b@x'"]);
    assert_eq!(
        del.to_sql().unwrap(),
        "delete from users where id = 7 Or email in ('a@x','b@x')"
    );
    assert!(del.validate().is_ok());
}

#[test]
fn test_delete_requires_where() {
    let mut del = DeleteBuilder::new("users");
    assert_eq!(del.to_sql().unwrap(), "delete from users");
    assert!(matches!(
        del.checked_sql(),
        Err(crate::error::QbError::Validation(_))
    ));
    del.allow_delete_all(true);
    assert_eq!(del.checked_sql().unwrap(), "delete from users");
}

#[test]
fn test_delete_group() {
    let mut del = DeleteBuilder::new("sessions");
    del.and_group(|b| {
        b.and_where("expires_at", "<", "now()").or_is_null("user_id");
    });
    assert_eq!(
        del.to_sql().unwrap(),
        "delete from sessions where (expires_at < now() Or user_id is null)"
    );
}

#[test]
fn test_opt_helpers() {
    let mut qb = QueryBuilder::new("users");
    qb.and_eq_opt("status", Some(1))
        .and_eq_opt("role", None::<i32>)
        .and_in_opt("id", Some(vec![1, 2]))
        .and_in_opt("team", None::<Vec<i32>>);
    assert_eq!(
        qb.to_sql().unwrap(),
        "select * from users where status = 1 AND id in (1,2)"
    );
}
