use pretty_assertions::assert_eq;
use serde_json::json;
use tests::{setup, MockDriver};
use trellis::{row, Action, Input, Link, Model, Row, Schema, Value};

fn schema() -> Schema {
    Schema::builder()
        .model(
            Model::new("A").with_action(
                Action::new("insupd")
                    .with_prepare(Link::new("B", "insert").with_marker("child"))
                    .with_nextpage(Link::new("B", "insert").map_input("id", "a_id")),
            ),
        )
        .model(Model::new("B").with_action(Action::new("insert")))
        .build()
        .unwrap()
}

fn driver() -> MockDriver {
    MockDriver::new()
        .on("A", "insupd", |op| {
            let mut row = op.input.rows()[0].clone();
            row.insert("id", 1);
            Ok(vec![row])
        })
        .echo("B", "insert")
}

#[tokio::test]
async fn marker_prepare_feeds_nextpage_per_child() {
    let (db, log) = setup(schema(), driver());

    let input = Row::try_from(json!({
        "x": "v1",
        "child": [{ "c": "j" }, { "c": "k" }]
    }))
    .unwrap();

    let rows = db.resolve("A", "insupd").input(input).exec().await.unwrap();

    // The prepare never executes; the action runs once without the children.
    assert_eq!(log.targets(), ["A.insupd", "B.insert", "B.insert"]);
    assert_eq!(
        log.inputs("A", "insupd"),
        [Input::Single(row! { "x" => "v1" })]
    );
    assert_eq!(
        log.inputs("B", "insert"),
        [
            Input::Single(row! { "a_id" => 1, "c" => "j" }),
            Input::Single(row! { "a_id" => 1, "c" => "k" }),
        ]
    );

    assert_eq!(
        Value::from(rows),
        Value::from(json!([{
            "x": "v1",
            "id": 1,
            "B_insert": [
                { "a_id": 1, "c": "j" },
                { "a_id": 1, "c": "k" }
            ]
        }]))
    );
}

#[tokio::test]
async fn single_child_record_runs_once() {
    let (db, log) = setup(schema(), driver());

    let input = Row::try_from(json!({ "x": "v1", "child": { "c": "j" } })).unwrap();
    let rows = db.resolve("A", "insupd").input(input).exec().await.unwrap();

    assert_eq!(log.calls("B", "insert"), 1);
    assert_eq!(
        Value::from(rows),
        Value::from(json!([{ "x": "v1", "id": 1, "B_insert": [{ "a_id": 1, "c": "j" }] }]))
    );
}

#[tokio::test]
async fn missing_marker_leaves_nextpage_alone() {
    let (db, log) = setup(schema(), driver());

    let rows = db
        .resolve("A", "insupd")
        .input(row! { "x" => "v1" })
        .exec()
        .await
        .unwrap();

    assert_eq!(
        log.inputs("B", "insert"),
        [Input::Single(row! { "a_id" => 1 })]
    );
    assert_eq!(
        Value::from(rows),
        Value::from(json!([{ "x": "v1", "id": 1, "B_insert": [{ "a_id": 1 }] }]))
    );
}

#[tokio::test]
async fn empty_child_list_runs_nothing() {
    let (db, log) = setup(schema(), driver());

    let input = Row::try_from(json!({ "x": "v1", "child": [] })).unwrap();
    let rows = db.resolve("A", "insupd").input(input).exec().await.unwrap();

    assert_eq!(log.targets(), ["A.insupd"]);
    assert_eq!(
        Value::from(rows),
        Value::from(json!([{ "x": "v1", "id": 1, "B_insert": [] }]))
    );
}

#[tokio::test]
async fn scalar_under_marker_is_shape_mismatch() {
    let (db, log) = setup(schema(), driver());

    let err = db
        .resolve("A", "insupd")
        .input(row! { "x" => "v1", "child" => "not a record" })
        .exec()
        .await
        .unwrap_err();

    assert!(err.is_shape_mismatch());
    assert_eq!(
        err.to_string(),
        "shape mismatch: override for `B.insert` must be a record or a list of records, found string"
    );
    assert_eq!(log.targets(), ["A.insupd"]);
}

// ---------------------------------------------------------------------------
// Batch input
// ---------------------------------------------------------------------------

fn batch_driver() -> MockDriver {
    MockDriver::new()
        .on("A", "insupd", |op| {
            Ok(op
                .input
                .rows()
                .iter()
                .enumerate()
                .map(|(i, row)| row.clone().merged(&row! { "id" => i as i64 + 1 }))
                .collect())
        })
        .echo("B", "insert")
}

#[tokio::test]
async fn batch_elements_keep_their_own_children() {
    let (db, log) = setup(schema(), batch_driver());

    let input = Input::try_from(json!([
        { "x": "p1", "child": [{ "c": "j" }] },
        { "x": "p2", "child": [{ "c": "k" }] },
        { "x": "p3" }
    ]))
    .unwrap();

    let rows = db.resolve("A", "insupd").input(input).exec().await.unwrap();

    assert_eq!(
        log.inputs("A", "insupd"),
        [Input::Batch(vec![
            row! { "x" => "p1" },
            row! { "x" => "p2" },
            row! { "x" => "p3" },
        ])]
    );
    assert_eq!(
        log.inputs("B", "insert"),
        [
            Input::Single(row! { "a_id" => 1, "c" => "j" }),
            Input::Single(row! { "a_id" => 2, "c" => "k" }),
            Input::Single(row! { "a_id" => 3 }),
        ]
    );

    assert_eq!(
        Value::from(rows),
        Value::from(json!([
            { "x": "p1", "id": 1, "B_insert": [{ "a_id": 1, "c": "j" }] },
            { "x": "p2", "id": 2, "B_insert": [{ "a_id": 2, "c": "k" }] },
            { "x": "p3", "id": 3, "B_insert": [{ "a_id": 3 }] }
        ]))
    );
}

#[tokio::test]
async fn batch_children_need_one_row_per_element() {
    // Collapses the batch into a single row.
    let (db, log) = setup(schema(), driver());

    let input = Input::try_from(json!([
        { "x": "p1", "child": [{ "c": "j" }] },
        { "x": "p2", "child": [{ "c": "k" }] }
    ]))
    .unwrap();

    let err = db
        .resolve("A", "insupd")
        .input(input)
        .exec()
        .await
        .unwrap_err();

    assert!(err.is_shape_mismatch());
    assert_eq!(
        err.to_string(),
        "shape mismatch: override for `B.insert` came from a batch of 2 records, but the action returned 1 rows"
    );
    assert_eq!(log.targets(), ["A.insupd"]);
}
