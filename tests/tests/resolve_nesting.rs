use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{path, setup, MockDriver};
use trellis::{row, Action, Input, Link, Model, Schema, Value};

fn topics_schema() -> Schema {
    Schema::builder()
        .model(Model::new("A").with_action(
            Action::new("topics").with_nextpage(Link::new("B", "topics").map_input("id", "a_id")),
        ))
        .model(Model::new("B").with_action(
            Action::new("topics").with_nextpage(Link::new("C", "topics").map_input("id", "b_id")),
        ))
        .model(Model::new("C").with_action(Action::new("topics")))
        .build()
        .unwrap()
}

fn topics_driver() -> MockDriver {
    MockDriver::new()
        .rows("A", "topics", vec![row! { "id" => 1 }, row! { "id" => 2 }])
        .on("B", "topics", |op| {
            let a = op.input.rows()[0]["a_id"].as_i64().unwrap();
            Ok(vec![row! { "id" => a * 10 + 1 }, row! { "id" => a * 10 + 2 }])
        })
        .on("C", "topics", |op| {
            let b = op.input.rows()[0]["b_id"].as_i64().unwrap();
            Ok(vec![row! { "label" => format!("c{b}") }])
        })
}

#[tokio::test]
async fn three_levels() {
    let (db, log) = setup(topics_schema(), topics_driver());

    let rows = db.resolve("A", "topics").exec().await.unwrap();
    let tree = Value::from(rows);

    assert_eq!(
        tree,
        Value::from(json!([
            {
                "id": 1,
                "B_topics": [
                    { "id": 11, "C_topics": [{ "label": "c11" }] },
                    { "id": 12, "C_topics": [{ "label": "c12" }] }
                ]
            },
            {
                "id": 2,
                "B_topics": [
                    { "id": 21, "C_topics": [{ "label": "c21" }] },
                    { "id": 22, "C_topics": [{ "label": "c22" }] }
                ]
            }
        ]))
    );

    assert_eq!(path(&tree, "0.B_topics.1.id"), &Value::from(12));
    assert_eq!(
        path(&tree, "1.B_topics.0.C_topics.0.label"),
        &Value::from("c21")
    );
    assert_eq!(path(&tree, "1.B_topics").as_list().unwrap().len(), 2);

    // Depth first, in row order.
    assert_eq!(
        log.targets(),
        [
            "A.topics", "B.topics", "C.topics", "C.topics", "B.topics", "C.topics", "C.topics",
        ]
    );
}

#[tokio::test]
async fn no_rows_means_no_nextpages() {
    let driver = MockDriver::new();
    let (db, log) = setup(topics_schema(), driver);

    let rows = db.resolve("A", "topics").exec().await.unwrap();

    assert!(rows.is_empty());
    assert_eq!(log.targets(), ["A.topics"]);
}

#[tokio::test]
async fn child_without_rows_attaches_empty_list() {
    let driver = MockDriver::new().rows("A", "topics", vec![row! { "id" => 1 }]);
    let (db, _log) = setup(topics_schema(), driver);

    let rows = db.resolve("A", "topics").exec().await.unwrap();

    assert_eq!(rows, vec![row! { "id" => 1, "B_topics" => Value::List(vec![]) }]);
}

#[tokio::test]
async fn nextpage_constraints_come_from_parent_row() {
    let schema = Schema::builder()
        .model(Model::new("orders").with_action(
            Action::new("list").with_nextpage(
                Link::new("lines", "list")
                    .map_input("id", "order_id")
                    .map_constraint("tenant", "tenant_id"),
            ),
        ))
        .model(Model::new("lines").with_action(Action::new("list")))
        .build()
        .unwrap();

    let driver = MockDriver::new().rows(
        "orders",
        "list",
        vec![row! { "id" => 1, "tenant" => "t1" }],
    );
    let (db, mut log) = setup(schema, driver);

    db.resolve("orders", "list").exec().await.unwrap();

    log.pop().unwrap();
    let lines = log.pop().unwrap();
    assert_eq!(lines.input, Input::Single(row! { "order_id" => 1 }));
    assert_eq!(lines.constraints, row! { "tenant_id" => "t1" });
}

#[tokio::test]
async fn links_attach_in_declaration_order() {
    let schema = Schema::builder()
        .model(
            Model::new("posts").with_action(
                Action::new("get")
                    .with_nextpage(Link::new("users", "get").map_input("author", "id"))
                    .with_nextpage(Link::new("comments", "list").map_input("id", "post_id")),
            ),
        )
        .model(Model::new("users").with_action(Action::new("get")))
        .model(Model::new("comments").with_action(Action::new("list")))
        .build()
        .unwrap();

    let driver = MockDriver::new()
        .rows(
            "posts",
            "get",
            vec![
                row! { "id" => 1, "author" => 9 },
                row! { "id" => 2, "author" => 9 },
            ],
        )
        .rows("users", "get", vec![row! { "name" => "ann" }])
        .echo("comments", "list");
    let (db, log) = setup(schema, driver);

    let rows = db.resolve("posts", "get").exec().await.unwrap();

    // Every row gets the first link before any row gets the second.
    assert_eq!(
        log.targets(),
        ["posts.get", "users.get", "users.get", "comments.list", "comments.list"]
    );

    assert_eq!(
        rows[1].keys().collect::<Vec<_>>(),
        ["id", "author", "users_get", "comments_list"]
    );
    assert_eq!(
        Value::from(rows),
        Value::from(json!([
            {
                "id": 1,
                "author": 9,
                "users_get": [{ "name": "ann" }],
                "comments_list": [{ "post_id": 1 }]
            },
            {
                "id": 2,
                "author": 9,
                "users_get": [{ "name": "ann" }],
                "comments_list": [{ "post_id": 2 }]
            }
        ]))
    );
}

#[tokio::test]
async fn batch_input_reaches_driver_as_one_call() {
    let (db, log) = setup(topics_schema(), MockDriver::new());

    db.resolve("A", "topics")
        .input(vec![row! { "id" => 1 }, row! { "id" => 2 }])
        .exec()
        .await
        .unwrap();

    assert_eq!(
        log.inputs("A", "topics"),
        [Input::Batch(vec![row! { "id" => 1 }, row! { "id" => 2 }])]
    );
}
