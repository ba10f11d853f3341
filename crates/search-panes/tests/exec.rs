use async_trait::async_trait;
use connectors::sql::base::{
    adapter::{DatabaseKind, SqlAdapter},
    error::{ConnectorError, DbError},
};
use model::{core::value::Value, records::row::RowData};
use planner::query::{
    ast::expr::BinaryOperator,
    dialect::{Dialect, Postgres},
};
use search_panes::{
    Editor, Field, LeftJoin, PaneError, PaneOption, SearchPaneOptions, SearchPanesRequest,
};
use std::sync::{Arc, Mutex};
use tracing_test::traced_test;

/// Answers count queries and label queries with canned rows and records
/// every statement it receives.
struct RecordingAdapter {
    labels: Vec<RowData>,
    counts: Vec<RowData>,
    fail: bool,
    log: Mutex<Vec<(String, Vec<Value>)>>,
}

impl RecordingAdapter {
    fn new(labels: Vec<RowData>, counts: Vec<RowData>) -> Self {
        Self {
            labels,
            counts,
            fail: false,
            log: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![], vec![])
        }
    }

    fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.log.lock().unwrap().clone()
    }

    fn count_statement(&self) -> Option<(String, Vec<Value>)> {
        self.statements()
            .into_iter()
            .find(|(sql, _)| is_count_query(sql))
    }

    fn label_statement(&self) -> (String, Vec<Value>) {
        self.statements()
            .into_iter()
            .find(|(sql, _)| !is_count_query(sql))
            .unwrap()
    }
}

fn is_count_query(sql: &str) -> bool {
    sql.contains(r#"AS "count""#)
}

#[async_trait]
impl SqlAdapter for RecordingAdapter {
    async fn connect(_url: &str) -> Result<Self, ConnectorError> {
        Err(ConnectorError::InvalidUrl("recording adapter".to_string()))
    }

    async fn query_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<RowData>, DbError> {
        self.log.lock().unwrap().push((sql.to_string(), params));
        if self.fail {
            return Err(DbError::Unknown("connection reset".to_string()));
        }
        if is_count_query(sql) {
            Ok(self.counts.clone())
        } else {
            Ok(self.labels.clone())
        }
    }

    fn dialect(&self) -> &dyn Dialect {
        &Postgres
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Other("recording".to_string())
    }
}

fn label_row(label: &str, value: Value, total: i64) -> RowData {
    RowData::from_pairs(
        "",
        [
            ("label", Value::from(label)),
            ("value", value),
            ("total", Value::Int(total)),
        ],
    )
}

fn count_row(value: Value, count: i64) -> RowData {
    RowData::from_pairs("", [("value", value), ("count", Value::Int(count))])
}

fn editor(db: &Arc<RecordingAdapter>) -> Editor {
    Editor::new("users", db.clone())
}

fn fields() -> Vec<Field> {
    vec![
        Field::new("office"),
        Field::new("position"),
        Field::new("age").with_db_field("users.age"),
    ]
}

fn labels(options: &[PaneOption]) -> Vec<&str> {
    options.iter().map(|o| o.label.as_str()).collect()
}

#[tokio::test]
#[traced_test]
async fn test_merges_counts_and_sorts_numerically() {
    let db = Arc::new(RecordingAdapter::new(
        vec![
            label_row("10", Value::Int(10), 4),
            label_row("2", Value::Int(2), 7),
            label_row("9", Value::Int(9), 1),
        ],
        vec![
            count_row(Value::from("2"), 3),
            count_row(Value::Int(10), 1),
        ],
    ));
    let fields = fields();
    let request = SearchPanesRequest::new().select("position", ["Dev"]);

    let options = SearchPaneOptions::new()
        .exec(&fields[0], &editor(&db), &request, &fields, None)
        .await
        .unwrap();

    assert_eq!(
        options,
        vec![
            PaneOption::counted("2".to_string(), Value::Int(2), 7, 3),
            PaneOption::counted("9".to_string(), Value::Int(9), 1, 0),
            PaneOption::counted("10".to_string(), Value::Int(10), 4, 1),
        ]
    );

    let (label_sql, _) = db.label_statement();
    assert_eq!(
        label_sql,
        r#"SELECT "office" AS "label", "office" AS "value", COUNT(*) AS "total" FROM "users" GROUP BY "office""#
    );
    let (count_sql, count_params) = db.count_statement().unwrap();
    assert_eq!(
        count_sql,
        r#"SELECT "office" AS "value", COUNT(*) AS "count" FROM "users" WHERE ("position" LIKE $1) GROUP BY "office""#
    );
    assert_eq!(count_params, vec![Value::from("%Dev%")]);
}

#[tokio::test]
#[traced_test]
async fn test_own_selection_does_not_restrict_own_counts() {
    let db = Arc::new(RecordingAdapter::new(vec![], vec![]));
    let fields = fields();
    let request = SearchPanesRequest::new()
        .select("office", ["London", "Paris"])
        .select("age", ["4"]);

    SearchPaneOptions::new()
        .exec(&fields[0], &editor(&db), &request, &fields, None)
        .await
        .unwrap();

    let (count_sql, count_params) = db.count_statement().unwrap();
    assert!(!count_sql.contains(r#""office" LIKE"#));
    assert!(count_sql.contains(r#"WHERE ("users"."age" LIKE $1)"#));
    assert_eq!(count_params, vec![Value::from("%4%")]);
}

#[tokio::test]
#[traced_test]
async fn test_ordered_list_keeps_backend_order_and_appends_manual() {
    let db = Arc::new(RecordingAdapter::new(
        vec![
            label_row("Tokyo", Value::from("TYO"), 2),
            label_row("Berlin", Value::from("BER"), 5),
        ],
        vec![count_row(Value::from("BER"), 5)],
    ));
    let fields = fields();

    let options = SearchPaneOptions::new()
        .label(["city"])
        .order("city desc")
        .limit(2)
        .add("Remote", None)
        .add("Anywhere", Some(Value::Int(0)))
        .exec(
            &fields[0],
            &editor(&db),
            &SearchPanesRequest::new(),
            &fields,
            None,
        )
        .await
        .unwrap();

    assert_eq!(labels(&options), vec!["Tokyo", "Berlin", "Remote", "Anywhere"]);
    assert_eq!(options[0].count, Some(0));
    assert_eq!(options[1].count, Some(5));
    assert_eq!(options[2], PaneOption::manual("Remote".to_string(), Value::from("Remote")));
    assert_eq!(options[3].value, Value::Int(0));

    let (label_sql, label_params) = db.label_statement();
    assert_eq!(
        label_sql,
        r#"SELECT "city" AS "label", "office" AS "value", COUNT(*) AS "total" FROM "users" GROUP BY "office" ORDER BY city desc LIMIT $1"#
    );
    assert_eq!(label_params, vec![Value::Int(2)]);

    let (count_sql, _) = db.count_statement().unwrap();
    assert!(!count_sql.contains("LIMIT"));
}

#[tokio::test]
#[traced_test]
async fn test_joins_are_scoped_per_query() {
    let db = Arc::new(RecordingAdapter::new(vec![], vec![]));
    let fields = fields();
    let cross = LeftJoin::new("teams", "teams.id", "=", "users.team");

    SearchPaneOptions::new()
        .table("staff")
        .value("site_id")
        .label(["sites.name"])
        .left_join("sites", "sites.id", "=", "staff.site_id")
        .left_join("regions", "regions.id", "=", "sites.region")
        .where_clause("staff.active", true, BinaryOperator::Eq)
        .exec(
            &fields[0],
            &editor(&db),
            &SearchPanesRequest::new(),
            &fields,
            Some(&cross),
        )
        .await
        .unwrap();

    let (label_sql, label_params) = db.label_statement();
    assert_eq!(
        label_sql,
        r#"SELECT "sites"."name" AS "label", "site_id" AS "value", COUNT(*) AS "total" FROM "staff" LEFT JOIN "sites" ON ("sites"."id" = "staff"."site_id") WHERE ("staff"."active" = $1) GROUP BY "site_id""#
    );
    assert_eq!(label_params, vec![Value::Boolean(true)]);

    let (count_sql, _) = db.count_statement().unwrap();
    assert_eq!(
        count_sql,
        r#"SELECT "site_id" AS "value", COUNT(*) AS "count" FROM "staff" LEFT JOIN "teams" ON ("teams"."id" = "users"."team") WHERE ("staff"."active" = $1) GROUP BY "site_id""#
    );
}

#[tokio::test]
#[traced_test]
async fn test_pinned_field_skips_count_query() {
    let db = Arc::new(RecordingAdapter::new(
        vec![label_row("London", Value::from("London"), 3)],
        vec![count_row(Value::from("London"), 3)],
    ));
    let pinned = Field::new("office").with_value(Value::from("London"));
    let fields = vec![pinned.clone()];

    let options = SearchPaneOptions::new()
        .exec(
            &pinned,
            &editor(&db),
            &SearchPanesRequest::new(),
            &fields,
            None,
        )
        .await
        .unwrap();

    assert!(db.count_statement().is_none());
    assert_eq!(db.statements().len(), 1);
    assert_eq!(options[0].count, Some(0));
    assert_eq!(options[0].total, Some(3));
}

#[tokio::test]
#[traced_test]
async fn test_backend_failure_fails_the_whole_list() {
    let db = Arc::new(RecordingAdapter::failing());
    let fields = fields();

    let err = SearchPaneOptions::new()
        .add("Remote", None)
        .exec(
            &fields[0],
            &editor(&db),
            &SearchPanesRequest::new(),
            &fields,
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, PaneError::DataAccess(DbError::Unknown(_))));
}

#[tokio::test]
#[traced_test]
async fn test_bad_join_operator_is_a_data_access_error() {
    let db = Arc::new(RecordingAdapter::new(vec![], vec![]));
    let fields = fields();

    let err = SearchPaneOptions::new()
        .left_join("sites", "sites.id", "=>", "users.site")
        .exec(
            &fields[0],
            &editor(&db),
            &SearchPanesRequest::new(),
            &fields,
            None,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PaneError::DataAccess(DbError::QueryBuildError(_))
    ));
}
