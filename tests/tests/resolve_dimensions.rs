use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{setup, MockDriver};
use trellis::{row, Action, Dimension, Link, Model, RowSet, Schema, Value};

fn schema(link: Link) -> Schema {
    Schema::builder()
        .model(Model::new("parent").with_action(Action::new("get").with_nextpage(link)))
        .model(Model::new("child").with_action(Action::new("list")))
        .build()
        .unwrap()
}

fn driver(children: RowSet) -> MockDriver {
    MockDriver::new()
        .rows("parent", "get", vec![row! { "name" => "p" }])
        .rows("child", "list", children)
}

async fn resolve(link: Link, children: RowSet) -> trellis::Result<Value> {
    let (db, _log) = setup(schema(link), driver(children));
    let rows = db.resolve("parent", "get").exec().await?;
    Ok(Value::from(rows))
}

#[tokio::test]
async fn default_attaches_rows() {
    let value = resolve(
        Link::new("child", "list"),
        vec![row! { "id" => 1 }, row! { "id" => 2 }],
    )
    .await
    .unwrap();

    assert_eq!(
        value,
        Value::from(json!([{ "name": "p", "child_list": [{ "id": 1 }, { "id": 2 }] }]))
    );
}

#[tokio::test]
async fn array_attaches_marker_column() {
    let value = resolve(
        Link::new("child", "list")
            .with_marker("id")
            .with_dimension(Dimension::Array),
        vec![
            row! { "id" => 1, "label" => "a" },
            row! { "id" => 2, "label" => "b" },
            row! { "id" => 3, "label" => "c" },
        ],
    )
    .await
    .unwrap();

    assert_eq!(value, Value::from(json!([{ "name": "p", "id": [1, 2, 3] }])));
}

#[tokio::test]
async fn array_without_marker_attaches_rows() {
    let value = resolve(
        Link::new("child", "list").with_dimension(Dimension::Array),
        vec![row! { "id" => 1 }],
    )
    .await
    .unwrap();

    assert_eq!(
        value,
        Value::from(json!([{ "name": "p", "child_list": [{ "id": 1 }] }]))
    );
}

#[tokio::test]
async fn one_attaches_first_row() {
    let value = resolve(
        Link::new("child", "list")
            .with_marker("owner")
            .with_dimension(Dimension::One),
        vec![row! { "id" => 7 }, row! { "id" => 8 }],
    )
    .await
    .unwrap();

    assert_eq!(
        value,
        Value::from(json!([{ "name": "p", "owner": { "id": 7 } }]))
    );
}

#[tokio::test]
async fn one_without_rows_is_empty_result() {
    let err = resolve(
        Link::new("child", "list")
            .with_marker("owner")
            .with_dimension(Dimension::One),
        vec![],
    )
    .await
    .unwrap_err();

    assert!(err.is_empty_result());
}

#[tokio::test]
async fn many_lifts_wrapped_records() {
    let value = resolve(
        Link::new("child", "list")
            .with_marker("tag")
            .with_dimension(Dimension::Many),
        vec![
            row! { "tag" => row! { "label" => "rust" }, "weight" => 2 },
            row! { "tag" => row! { "label" => "go" }, "weight" => 1 },
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        value,
        Value::from(json!([{
            "name": "p",
            "tag": [
                { "label": "rust", "weight": 2 },
                { "label": "go", "weight": 1 }
            ]
        }]))
    );
}

#[tokio::test]
async fn map_folds_key_value_rows() {
    let value = resolve(
        Link::new("child", "list")
            .with_marker("settings")
            .with_dimension(Dimension::Map),
        vec![
            row! { "key" => "theme", "value" => "light" },
            row! { "key" => "lang", "value" => vec![Value::from("en")] },
            row! { "key" => "theme", "value" => "dark" },
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        value,
        Value::from(json!([{
            "name": "p",
            "settings": { "theme": "dark", "lang": "en" }
        }]))
    );
}
