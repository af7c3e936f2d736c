//! Integration tests for arranging component sets end to end

use pretty_assertions::assert_eq;

use variant_grid::layout::Variant;
use variant_grid::{
    run, ContainerOutcome, Document, Guide, GuideAxis, Host, HostError, LayoutConfig, Node,
    NodeId, NodeKind, Notice, SceneNode,
};

const FIXTURE: &str = include_str!("fixtures/button_states.json");

fn load_fixture() -> Document {
    Document::from_json(FIXTURE).expect("Fixture should parse")
}

fn arrange(doc: &mut Document, config: &LayoutConfig) -> variant_grid::RunReport {
    let selection = doc.selection.clone();
    run(&selection, doc, config).expect("Config should be valid")
}

fn child_origin(doc: &Document, id: &str) -> (Option<f64>, Option<f64>) {
    let node = doc.find(&NodeId::new(id)).expect("Node should exist");
    (node.x, node.y)
}

#[test]
fn test_three_variant_scenario() {
    let mut doc = load_fixture();
    let report = arrange(&mut doc, &LayoutConfig::default());

    assert_eq!(report.notice, Some(Notice::Success));
    assert_eq!(child_origin(&doc, "10:2"), (Some(80.0), Some(80.0)));
    assert_eq!(child_origin(&doc, "10:3"), (Some(125.0), Some(80.0)));
    assert_eq!(child_origin(&doc, "10:4"), (Some(80.0), Some(130.0)));

    let set = &doc.selection[0];
    assert_eq!((set.width, set.height), (Some(245.0), Some(240.0)));
    assert_eq!(set.corner_radius, Some(32.0));
    assert!(set.strokes.is_empty());

    // Container position itself is not part of the arrangement
    assert_eq!((set.x, set.y), (Some(320.0), Some(120.0)));
}

#[test]
fn test_scenario_guides() {
    let mut doc = load_fixture();
    arrange(&mut doc, &LayoutConfig::default());

    let listing = doc.selection[0]
        .guides
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(listing, @r"
    X 80
    X 120
    X 125
    X 165
    Y 80
    Y 110
    Y 130
    Y 160
    ");
}

#[test]
fn test_guides_replace_existing_list() {
    let mut doc = load_fixture();
    arrange(&mut doc, &LayoutConfig::default());
    let guides = &doc.selection[0].guides;
    assert!(!guides.contains(&Guide::new(GuideAxis::X, 12.0)));
    assert_eq!(guides.len(), 8);
}

#[test]
fn test_non_variant_children_untouched() {
    let mut doc = load_fixture();
    let before = doc.find(&NodeId::new("10:5")).cloned();
    arrange(&mut doc, &LayoutConfig::default());
    assert_eq!(doc.find(&NodeId::new("10:5")).cloned(), before);
}

#[test]
fn test_other_selected_nodes_untouched() {
    let mut doc = load_fixture();
    let frame = doc.selection[1].clone();
    let empty_set = doc.selection[2].clone();

    let report = arrange(&mut doc, &LayoutConfig::default());

    assert_eq!(doc.selection[1], frame);
    assert_eq!(doc.selection[2], empty_set);
    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(report.arranged().count(), 1);
}

#[test]
fn test_custom_config() {
    let mut doc = load_fixture();
    let config = LayoutConfig::new()
        .with_padding(16.0)
        .with_corner_radius(8.0)
        .with_alignment_threshold(2.0);
    arrange(&mut doc, &config);

    // With a 2px threshold the 5px offset no longer counts as the same row
    assert_eq!(child_origin(&doc, "10:2"), (Some(16.0), Some(16.0)));
    assert_eq!(child_origin(&doc, "10:3"), (Some(61.0), Some(21.0)));
    assert_eq!(child_origin(&doc, "10:4"), (Some(16.0), Some(66.0)));

    let set = &doc.selection[0];
    assert_eq!((set.width, set.height), (Some(117.0), Some(112.0)));
    assert_eq!(set.corner_radius, Some(8.0));
}

#[test]
fn test_running_twice_is_stable() {
    let mut once = load_fixture();
    arrange(&mut once, &LayoutConfig::default());

    let mut twice = once.clone();
    arrange(&mut twice, &LayoutConfig::default());

    assert_eq!(twice, once);
}

#[test]
fn test_document_round_trip_after_arrange() {
    let mut doc = load_fixture();
    arrange(&mut doc, &LayoutConfig::default());

    let json = doc.to_json_pretty().expect("Should serialize");
    let reparsed = Document::from_json(&json).expect("Should reparse");
    assert_eq!(reparsed, doc);
    assert!(json.contains(r#""type": "SLOT""#));
}

#[test]
fn test_syntax_error_report() {
    let source = "{\n  \"selection\": [\n    { \"id\": \"1\", \"type\": }\n  ]\n}";
    let err = Document::from_json(source).unwrap_err();
    assert!(err.to_string().contains("line 3"));
    let report = err.format(source, "broken.json");
    assert!(report.contains("broken.json"));
}

/// Host that records mutations and can refuse resizes
#[derive(Default)]
struct RecordingHost {
    locked: Vec<NodeId>,
    log: Vec<String>,
}

impl Host for RecordingHost {
    fn place_variants(&mut self, set: &NodeId, variants: &[Variant]) {
        for v in variants {
            self.log.push(format!("{} place {} {},{}", set, v.id, v.bounds.x, v.bounds.y));
        }
    }

    fn resize(&mut self, set: &NodeId, width: f64, height: f64) -> Result<(), HostError> {
        if self.locked.contains(set) {
            return Err(HostError::resize_rejected(set.clone(), "locked"));
        }
        self.log.push(format!("{} resize {}x{}", set, width, height));
        Ok(())
    }

    fn set_corner_radius(&mut self, set: &NodeId, radius: f64) {
        self.log.push(format!("{} radius {}", set, radius));
    }

    fn clear_strokes(&mut self, set: &NodeId) {
        self.log.push(format!("{} strokes", set));
    }

    fn set_guides(&mut self, set: &NodeId, guides: Vec<Guide>) {
        self.log.push(format!("{} guides {}", set, guides.len()));
    }
}

fn small_set(id: &str) -> Node {
    Node::new(id, NodeKind::ComponentSet).with_children(vec![
        Node::new(format!("{}/a", id), NodeKind::Component).with_bounds(0.0, 0.0, 10.0, 10.0),
    ])
}

#[test]
fn test_recording_host_sees_full_commit() {
    let selection = vec![small_set("s")];
    let mut host = RecordingHost::default();
    let report = run(&selection, &mut host, &LayoutConfig::default()).unwrap();

    assert_eq!(report.notice, Some(Notice::Success));
    assert_eq!(
        host.log,
        vec![
            "s place s/a 80,80",
            "s resize 170x170",
            "s radius 32",
            "s strokes",
            "s guides 4",
        ]
    );
}

#[test]
fn test_rejected_resize_is_isolated() {
    let selection = vec![small_set("first"), small_set("second")];
    let mut host = RecordingHost {
        locked: vec![NodeId::new("first")],
        ..Default::default()
    };
    let report = run(&selection, &mut host, &LayoutConfig::default()).unwrap();

    assert!(matches!(
        report.outcomes[0].1,
        ContainerOutcome::Failed(HostError::ResizeRejected { .. })
    ));
    assert!(matches!(report.outcomes[1].1, ContainerOutcome::Arranged(_)));

    // Positions of the refused set stay committed; nothing after the resize ran
    assert_eq!(
        host.log,
        vec![
            "first place first/a 80,80",
            "second place second/a 80,80",
            "second resize 170x170",
            "second radius 32",
            "second strokes",
            "second guides 4",
        ]
    );
}

#[test]
fn test_only_failures_means_no_notice() {
    let selection = vec![small_set("only")];
    let mut host = RecordingHost {
        locked: vec![NodeId::new("only")],
        ..Default::default()
    };
    let report = run(&selection, &mut host, &LayoutConfig::default()).unwrap();
    assert_eq!(report.notice, None);
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_selection_node_kind_from_document() {
    let doc = load_fixture();
    let kinds: Vec<NodeKind> = doc.selection.iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![NodeKind::ComponentSet, NodeKind::Frame, NodeKind::ComponentSet]
    );
}
