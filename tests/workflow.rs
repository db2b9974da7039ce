mod common;
use common::*;
use kairo::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decode_sampler_workflow() {
    let workflow = Workflow::from_json(SAMPLER_WORKFLOW_JSON).unwrap();

    assert_eq!(workflow.nodes.len(), 5);
    assert_eq!(workflow.links.len(), 6);

    let sampler = workflow.node(&id("3")).unwrap();
    assert_eq!(sampler.node_type, "KSampler");
    assert_eq!(sampler.title.as_deref(), Some("Main Sampler"));
    assert_eq!(sampler.fallback_name().as_deref(), Some("KSampler"));
    assert_eq!(sampler.widget_values().len(), 5);
    assert!(sampler.has_input("scheduler"));

    let seed = &sampler.inputs[1];
    assert!(seed.is_widget());
    assert_eq!(seed.link, None);
    assert_eq!(seed.display_name(), Some("Seed"));
    assert_eq!(seed.type_name(), Some("INT"));
}

#[test]
fn test_positional_and_object_links_decode_alike() {
    let workflow = Workflow::from_json(
        r#"{
            "nodes": [],
            "links": [
                [1, 4, 0, 5, 1, "MODEL"],
                { "id": 2, "origin_id": 4, "origin_slot": 0, "target_id": 5, "target_slot": 1, "type": "MODEL" }
            ]
        }"#,
    )
    .unwrap();

    let expected = Link::new(1, 4, 0, 5, 1, Some("MODEL"));
    assert_eq!(workflow.links[0], expected);
    assert_eq!(workflow.links[1], Link { id: LinkId(2), ..expected });
}

#[test]
fn test_link_type_is_optional() {
    let workflow = Workflow::from_json(r#"{ "links": [[3, 1, 0, 2, 0], [4, 1, 0, 2, 1, 7]] }"#).unwrap();

    assert_eq!(workflow.links[0].link_type, None);
    assert_eq!(workflow.links[1].link_type, None);
}

#[test]
fn test_string_and_integer_ids_name_the_same_node() {
    let workflow = Workflow::from_json(
        r#"{
            "nodes": [ { "id": "7", "type": "A" }, { "id": 8, "type": "B" } ],
            "links": [ [1, 7, 0, "8", 0, "IMAGE"] ]
        }"#,
    )
    .unwrap();

    assert_eq!(workflow.nodes[0].id, NodeId::from(7));
    assert_eq!(workflow.nodes[1].id, id("8"));
    assert_eq!(workflow.links[0].origin_id, id("7"));
    assert_eq!(workflow.links[0].target_id, NodeId::from(8));
}

#[test]
fn test_missing_and_null_collections_decode_as_empty() {
    let workflow = Workflow::from_json(r#"{ "nodes": null }"#).unwrap();
    assert!(workflow.nodes.is_empty());
    assert!(workflow.links.is_empty());

    let workflow = Workflow::from_json(
        r#"{ "nodes": [ { "id": 1, "type": "A", "inputs": null, "properties": null } ] }"#,
    )
    .unwrap();
    assert!(workflow.nodes[0].inputs.is_empty());
    assert!(workflow.nodes[0].properties.is_empty());
    assert_eq!(workflow.nodes[0].mode, None);
}

#[test]
fn test_non_array_widget_values_supply_nothing() {
    let mut node = node(1, "Custom");
    node.widgets_values = Some(json!({ "seed": 5 }));
    assert!(node.widget_values().is_empty());

    node.widgets_values = None;
    assert!(node.widget_values().is_empty());
}

#[test]
fn test_fallback_name_ignores_empty_values() {
    let mut node = node(1, "KSampler");
    assert_eq!(node.fallback_name(), None);

    for empty in [json!(""), json!(0), json!(false), json!(null), json!([]), json!({})] {
        node.properties
            .insert("Node name for S&R".to_string(), empty);
        assert_eq!(node.fallback_name(), None);
    }
}

#[test]
fn test_fallback_name_renders_non_string_values() {
    let mut node = node(1, "KSampler");

    node.properties
        .insert("Node name for S&R".to_string(), json!(12));
    assert_eq!(node.fallback_name().as_deref(), Some("12"));

    node.properties
        .insert("Node name for S&R".to_string(), json!(true));
    assert_eq!(node.fallback_name().as_deref(), Some("true"));

    node.properties
        .insert("Node name for S&R".to_string(), json!(["a", 1]));
    assert_eq!(node.fallback_name().as_deref(), Some(r#"["a",1]"#));
}

#[test]
fn test_display_name_prefers_label() {
    let mut input = NodeInput::new("seed");
    assert_eq!(input.display_name(), None);

    input.localized_name = Some("Graine".to_string());
    assert_eq!(input.display_name(), Some("Graine"));

    input.label = Some("My Seed".to_string());
    assert_eq!(input.display_name(), Some("My Seed"));
}

#[test]
fn test_invalid_json_is_rejected() {
    let err = Workflow::from_json("{ not json").unwrap_err();
    assert!(matches!(err, WorkflowError::JsonParseError(_)));
}

#[test]
fn test_non_object_document_is_rejected() {
    let err = Workflow::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, WorkflowError::NotAnObject("an array")));
    assert_eq!(
        err.to_string(),
        "Workflow document must be a JSON object, found an array"
    );

    assert!(matches!(
        Workflow::from_json("null"),
        Err(WorkflowError::NotAnObject("null"))
    ));
}

#[test]
fn test_undecodable_links_are_skipped() {
    let workflow = Workflow::from_json(
        r#"{
            "nodes": [
                { "id": 1, "type": "LoadImage" },
                { "id": 2, "type": "Upscale", "inputs": [
                    { "name": "image", "type": "IMAGE", "link": 11 },
                    { "name": "mask", "type": "MASK", "link": 8 }
                ] }
            ],
            "links": [
                [7, 1, -1, 2, 0, "IMAGE"],
                [8, 1, 0.5, 2, 1, "MASK"],
                [9, 2, 0],
                { "id": 10, "origin_id": 1 },
                "garbage",
                [11, 1, 0, 2, 0, "IMAGE"]
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(workflow.links, vec![Link::new(11, 1, 0, 2, 0, Some("IMAGE"))]);

    let resolution = Resolver::new().resolve(&workflow);
    let upscale = resolution.graph.get(&id("2")).unwrap();

    assert_eq!(
        upscale.input("image"),
        Some(&InputValue::Link(NodeRef::new("1", 0)))
    );
    assert!(!upscale.inputs.contains_key("mask"));
    assert_eq!(
        resolution.diagnostics,
        vec![Diagnostic::for_input(
            &id("2"),
            "mask",
            ResolveError::LinkNotFound(LinkId(8)),
        )]
    );
}

#[test]
fn test_links_must_be_a_list() {
    let err = Workflow::from_json(r#"{ "links": { "1": [1, 2, 0, 3, 0] } }"#).unwrap_err();
    assert!(matches!(err, WorkflowError::JsonParseError(_)));
}

#[test]
fn test_into_workflow_sources() {
    let from_text = SAMPLER_WORKFLOW_JSON.into_workflow().unwrap();
    let value: serde_json::Value = serde_json::from_str(SAMPLER_WORKFLOW_JSON).unwrap();
    let from_value = value.into_workflow().unwrap();

    assert_eq!(from_text.nodes.len(), from_value.nodes.len());
    assert_eq!(from_text.links, from_value.links);

    let resolution = Resolver::new().resolve_document(SAMPLER_WORKFLOW_JSON).unwrap();
    assert_eq!(resolution.graph.len(), 3);

    assert!(Resolver::new().resolve_document(json!("nope")).is_err());
}
