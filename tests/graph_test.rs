//! Vertex/edge mutation and batch reconciliation over a scripted transport

use hugegraph_client::transport::Method;
use hugegraph_client::{Edge, GraphElement, HugeClient, HugeError, Id, MockTransport, Vertex};
use serde_json::{json, Value};
use std::sync::Arc;

fn client() -> (HugeClient, Arc<MockTransport>) {
    let mock = Arc::new(MockTransport::new());
    let client = HugeClient::with_transport("hugegraph", mock.clone());
    (client, mock)
}

fn person(name: &str, age: i64) -> Vertex {
    Vertex::new("person").property("name", name).property("age", age)
}

fn knows_edge() -> Value {
    json!({
        "id": "S1:marko>1>>S1:vadas",
        "label": "knows",
        "type": "edge",
        "outV": "1:marko",
        "outVLabel": "person",
        "inV": "1:vadas",
        "inVLabel": "person",
        "properties": {"weight": 0.5}
    })
}

#[tokio::test]
async fn test_add_vertices_assigns_ids_in_order() {
    let (client, mock) = client();
    mock.respond(201, json!(["1:marko", "1:vadas", "1:josh"]));

    let vertices = client
        .graph()
        .add_vertices(vec![person("marko", 29), person("vadas", 27), person("josh", 32)])
        .await
        .unwrap();

    let ids: Vec<&Id> = vertices.iter().filter_map(Vertex::id).collect();
    assert_eq!(ids, [&Id::from("1:marko"), &Id::from("1:vadas"), &Id::from("1:josh")]);
    assert_eq!(vertices[2].property_value("age"), Some(&json!(32)));
    let session = client.graph().session();
    assert!(vertices.iter().all(|v| v.session() == Some(session)));

    let request = &mock.requests()[0];
    assert_eq!(request.path, "graphs/hugegraph/graph/vertices/batch");
    assert_eq!(request.header("Content-Encoding"), Some("gzip"));
}

#[tokio::test]
async fn test_add_vertices_count_mismatch() {
    let (client, mock) = client();
    mock.respond(201, json!(["1:marko", "1:vadas"]));

    let err = client
        .graph()
        .add_vertices(vec![person("marko", 29), person("vadas", 27), person("josh", 32)])
        .await
        .unwrap_err();

    match &err {
        HugeError::NotAllCreated {
            expected,
            actual,
            response,
            ..
        } => {
            assert_eq!(*expected, 3);
            assert_eq!(*actual, 2);
            assert!(response.contains("1:vadas"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("expect '3', the actual is '2'"));
}

#[tokio::test]
async fn test_add_vertices_rejects_non_list_body() {
    let (client, mock) = client();
    mock.respond(201, json!({"ids": ["1:marko", "1:vadas"]}));

    let err = client
        .graph()
        .add_vertices(vec![person("marko", 29), person("vadas", 27)])
        .await
        .unwrap_err();

    match &err {
        HugeError::InvalidResponse(message) => assert!(message.contains("sequence")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_add_edges_assigns_ids_in_order() {
    let (client, mock) = client();
    mock.respond(201, json!(["S1:marko>1>>S1:vadas", "S1:marko>1>>S1:josh"]));

    let edges = vec![
        Edge::new("knows")
            .source("1:marko")
            .target("1:vadas")
            .property("weight", 0.5),
        Edge::new("knows")
            .source("1:marko")
            .target("1:josh")
            .property("weight", 1.0),
    ];
    let created = client.graph().add_edges(edges, false).await.unwrap();

    let ids: Vec<&Id> = created.iter().filter_map(Edge::id).collect();
    assert_eq!(
        ids,
        [&Id::from("S1:marko>1>>S1:vadas"), &Id::from("S1:marko>1>>S1:josh")]
    );
    assert_eq!(created[1].target_id(), Some(&Id::from("1:josh")));
    assert_eq!(created[1].property_value("weight"), Some(&json!(1.0)));

    let request = &mock.requests()[0];
    assert_eq!(request.path, "graphs/hugegraph/graph/edges/batch");
    assert_eq!(request.param("checkVertex"), Some("false"));
    assert_eq!(request.header("Content-Encoding"), Some("gzip"));
    assert_eq!(request.body.as_ref().unwrap()[1]["inV"], "1:josh");
}

#[tokio::test]
async fn test_add_edges_count_mismatch_and_check_vertex() {
    let (client, mock) = client();
    mock.respond(201, json!([]));

    let edges = vec![Edge::new("knows").source("1:marko").target("1:vadas")];
    let err = client.graph().add_edges(edges, true).await.unwrap_err();
    assert!(matches!(
        err,
        HugeError::NotAllCreated {
            expected: 1,
            actual: 0,
            ..
        }
    ));
    assert_eq!(mock.requests()[0].param("checkVertex"), Some("true"));
}

#[tokio::test]
async fn test_empty_batch_sends_nothing() {
    let (client, mock) = client();
    assert!(client.graph().add_vertices(Vec::new()).await.unwrap().is_empty());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_custom_id_rejected_for_automatic_label() {
    let (client, mock) = client();
    mock.respond(
        200,
        json!({"name": "person", "id_strategy": "AUTOMATIC", "properties": ["name", "age"]}),
    );

    let err = client
        .graph()
        .add_vertex(person("marko", 29).with_id("marko"))
        .await
        .unwrap_err();

    assert!(matches!(err, HugeError::Client(_)));
    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "graphs/hugegraph/schema/vertexlabels/person");
}

#[tokio::test]
async fn test_custom_id_accepted_for_primary_key_label() {
    let (client, mock) = client();
    mock.respond(
        200,
        json!({"name": "person", "id_strategy": "PRIMARY_KEY", "primary_keys": ["name"], "properties": ["name", "age"]}),
    )
    .respond(
        201,
        json!({"id": "1:marko", "label": "person", "type": "vertex", "properties": {"name": "marko", "age": 29}}),
    );

    let marko = client
        .graph()
        .add_vertex(person("marko", 29).with_id("1:marko"))
        .await
        .unwrap();

    assert_eq!(marko.id(), Some(&Id::from("1:marko")));
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, Method::Post);
    assert_eq!(requests[1].path, "graphs/hugegraph/graph/vertices");
}

#[tokio::test]
async fn test_custom_id_for_missing_label_is_client_error() {
    let (client, mock) = client();
    mock.respond(
        404,
        json!({"exception": "class com.baidu.hugegraph.exception.NotFoundException",
               "message": "Vertex label with name 'robot' does not exist"}),
    );

    let err = client
        .graph()
        .add_vertex(Vertex::new("robot").with_id("r2d2"))
        .await
        .unwrap_err();

    match &err {
        HugeError::Client(message) => assert!(message.contains("'robot' does not exist")),
        other => panic!("unexpected error: {:?}", other),
    }
    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
}

#[tokio::test]
async fn test_custom_id_accepted_for_customize_label() {
    let (client, mock) = client();
    mock.respond(
        200,
        json!({"name": "book", "id_strategy": "CUSTOMIZE_STRING", "properties": ["title"]}),
    )
    .respond(
        201,
        json!({"id": "book-1", "label": "book", "type": "vertex", "properties": {"title": "Rust"}}),
    );

    let book = client
        .graph()
        .add_vertex(Vertex::new("book").with_id("book-1").property("title", "Rust"))
        .await
        .unwrap();

    assert_eq!(book.id(), Some(&Id::from("book-1")));
    let requests = mock.requests();
    assert_eq!(requests[1].method, Method::Post);
    assert_eq!(requests[1].body.as_ref().unwrap()["id"], "book-1");
}

#[tokio::test]
async fn test_edge_id_is_rejected() {
    let (client, mock) = client();
    let edge: Edge = serde_json::from_value(knows_edge()).unwrap();

    let err = client.graph().add_edge(edge).await.unwrap_err();
    assert!(matches!(err, HugeError::Client(_)));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_vertex_add_edge_through_session() {
    let (client, mock) = client();
    mock.respond(201, json!(["1:marko", "1:vadas"]))
        .respond(201, knows_edge());

    let vertices = client
        .graph()
        .add_vertices(vec![person("marko", 29), person("vadas", 27)])
        .await
        .unwrap();
    let (marko, vadas) = (&vertices[0], &vertices[1]);

    let edge = marko
        .add_edge(&client, "knows", vadas, [("weight", 0.5)])
        .await
        .unwrap();
    assert_eq!(edge.id(), Some(&Id::from("S1:marko>1>>S1:vadas")));

    let request = &mock.requests()[1];
    assert_eq!(request.path, "graphs/hugegraph/graph/edges");
    assert_eq!(
        request.body.as_ref().unwrap(),
        &json!({
            "label": "knows",
            "type": "edge",
            "outV": "1:marko",
            "outVLabel": "person",
            "inV": "1:vadas",
            "inVLabel": "person",
            "properties": {"weight": 0.5}
        })
    );
}

#[tokio::test]
async fn test_detached_vertex_cannot_add_edge() {
    let (client, mock) = client();
    let marko = person("marko", 29).with_id("1:marko");
    let vadas = person("vadas", 27).with_id("1:vadas");

    let err = marko
        .add_edge(&client, "knows", &vadas, Vec::<(String, Value)>::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HugeError::Client(_)));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_get_list_and_remove_vertices() {
    let (client, mock) = client();
    mock.respond(
        200,
        json!({"id": "1:marko", "label": "person", "type": "vertex", "properties": {"name": "marko"}}),
    )
    .respond(
        200,
        json!({"vertices": [
            {"id": "1:marko", "label": "person", "type": "vertex", "properties": {}},
            {"id": "2:lop", "label": "software", "type": "vertex", "properties": {}}
        ]}),
    )
    .respond(204, json!({}));

    let graph = client.graph();
    let marko = graph.get_vertex("1:marko").await.unwrap();
    assert_eq!(marko.session(), Some(graph.session()));

    let all = graph.list_vertices(-1).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].label(), "software");

    graph.remove_vertex("1:marko").await.unwrap();

    let requests = mock.requests();
    assert_eq!(requests[0].path, "graphs/hugegraph/graph/vertices/%221%3Amarko%22");
    assert_eq!(requests[1].param("limit"), Some("-1"));
    assert_eq!(requests[2].method, Method::Delete);
}

#[tokio::test]
async fn test_append_vertex_requires_id() {
    let (client, mock) = client();
    let err = client
        .graph()
        .append_vertex(&person("marko", 30))
        .await
        .unwrap_err();
    assert!(matches!(err, HugeError::InvalidOperation(_)));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_eliminate_edge_property() {
    let (client, mock) = client();
    let mut stored = knows_edge();
    stored["properties"] = json!({});
    mock.respond(200, stored);

    let edge: Edge = serde_json::from_value(knows_edge()).unwrap();
    let updated = client.graph().eliminate_edge(&edge).await.unwrap();
    assert!(updated.properties().is_empty());

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.param("action"), Some("eliminate"));
}

#[tokio::test]
async fn test_cardinality_aware_mutation() {
    let (client, mock) = client();
    mock.respond(
        200,
        json!({"propertykeys": [
            {"name": "date", "data_type": "TEXT", "cardinality": "SINGLE"},
            {"name": "time", "data_type": "TEXT", "cardinality": "SET"},
            {"name": "tags", "data_type": "TEXT", "cardinality": "LIST"}
        ]}),
    );
    let cardinalities = client.schema().property_key_cardinalities().await.unwrap();

    let mut edge = Edge::new("created")
        .source("1:peter")
        .target("2:lop")
        .property("date", "20170324")
        .property("time", json!(["20121010"]));

    edge.set_property_with(&cardinalities, "time", "20121010");
    assert_eq!(edge.property_value("time"), Some(&json!(["20121010"])));
    edge.set_property_with(&cardinalities, "time", "20140214");
    assert_eq!(edge.property_value("time"), Some(&json!(["20121010", "20140214"])));

    edge.set_property_with(&cardinalities, "tags", "a");
    edge.set_property_with(&cardinalities, "tags", "a");
    assert_eq!(edge.property_value("tags"), Some(&json!(["a", "a"])));

    edge.set_property_with(&cardinalities, "date", "20170808");
    assert_eq!(edge.property_value("date"), Some(&json!("20170808")));

    edge.set_property_with(&cardinalities, "undeclared", 1);
    edge.set_property_with(&cardinalities, "undeclared", 2);
    assert_eq!(edge.property_value("undeclared"), Some(&json!(2)));
}

#[test]
fn test_remove_property_on_edge() {
    let mut edge = Edge::new("created")
        .property("date", "20170324")
        .property("city", "Beijing");

    assert_eq!(edge.remove_property("date").unwrap(), json!("20170324"));
    assert_eq!(edge.properties().keys().collect::<Vec<_>>(), ["city"]);

    let err = edge.remove_property("date").unwrap_err();
    assert!(matches!(err, HugeError::InvalidOperation(_)));
    assert_eq!(edge.properties().len(), 1);
}
