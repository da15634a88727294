use std::sync::Arc;

use resmap_core::config::Capabilities;
use resmap_core::traits::{ClickEventHandler, FilterEventHandler};
use resmap_core::types::{DatasetVariant, Document, FilterState, YearRange};
use resmap_data::DatasetStore;
use resmap_scene::inspect::NO_SELECTION_PLACEHOLDER;
use resmap_session::MapSession;

fn doc(title: &str, year: i32, researcher: &str, label: &str) -> Document {
    Document {
        x: 0.5,
        y: 0.5,
        title: title.to_string(),
        authors: researcher.to_string(),
        year,
        doc_type: "article".to_string(),
        doi: None,
        main_label: label.to_string(),
        main_keys: String::new(),
        researcher: researcher.to_string(),
        department: if researcher == "A. Smith" { "Geography" } else { "Earth Science" }
            .to_string(),
    }
}

fn corpus() -> Vec<Document> {
    vec![
        doc("smith fire", 2015, "A. Smith", "Ecology"),
        doc("jones rocks", 2012, "B. Jones", "Geology"),
        doc("smith early", 2009, "A. Smith", "Ecology"),
        doc("jones late", 2019, "B. Jones", "Geology"),
    ]
}

fn store() -> Arc<DatasetStore> {
    Arc::new(
        DatasetStore::from_variants(vec![
            DatasetVariant { name: "coarse (9 topics)".to_string(), documents: corpus() },
            DatasetVariant { name: "fine (36 topics)".to_string(), documents: corpus() },
        ])
        .expect("store"),
    )
}

fn session() -> MapSession {
    MapSession::new(store(), Capabilities::default())
}

#[test]
fn researcher_highlight_emphasizes_exactly_the_matching_documents() {
    // Scenario: researcher selected, year range straddling one of their
    // documents and excluding the one sitting on the low endpoint.
    let state = FilterState {
        researcher: Some("A. Smith".to_string()),
        department: None,
        year_range: YearRange::new(2009, 2019),
        variant: "coarse (9 topics)".to_string(),
    };

    let scene = session().on_filter_changed(&state).expect("scene");
    let overlay = scene.highlight.expect("highlight layer");
    assert_eq!(overlay.points.len(), 1);
    assert_eq!(overlay.points[0].title, "smith fire");

    // Base is dimmed and hover-suppressed behind the overlay
    assert!(!scene.base.is_empty());
    for mark in &scene.base {
        assert!(mark.opacity < 0.5);
        assert!(mark.hover.is_none());
    }
}

#[test]
fn out_of_corpus_year_range_renders_an_empty_scene() {
    let state = FilterState::unfiltered("coarse (9 topics)", YearRange::new(2020, 2025));
    let scene = session().on_filter_changed(&state).expect("scene");

    assert!(scene.is_empty());
    assert!(scene.highlight.is_none());
    assert!(scene.legend.entries.is_empty());
}

#[test]
fn click_path_is_independent_of_filter_state() {
    let session = session();

    let before = session.on_point_clicked(None);
    assert_eq!(before.to_text(), NO_SELECTION_PLACEHOLDER);

    let clicked = doc("smith fire", 2015, "A. Smith", "Ecology");
    let readout = session.on_point_clicked(Some(&clicked));
    let text = readout.to_text();
    assert!(text.contains("smith fire"));
    assert!(text.contains("2015"));
}

#[test]
fn variant_switch_changes_the_active_dataset() {
    let session = session();
    let coarse = FilterState::unfiltered("coarse (9 topics)", YearRange::new(2000, 2030));
    let fine = FilterState::unfiltered("fine (36 topics)", YearRange::new(2000, 2030));

    assert_eq!(session.render(&coarse).expect("coarse").base.len(), 4);
    assert_eq!(session.render(&fine).expect("fine").base.len(), 4);

    let missing = FilterState::unfiltered("medium", YearRange::new(2000, 2030));
    assert!(session.render(&missing).is_err());
}

#[test]
fn department_filter_is_ignored_when_capability_is_off() {
    let caps = Capabilities {
        supports_department_filter: false,
        supports_multi_embedding: true,
    };
    let session = MapSession::new(store(), caps);

    let state = FilterState {
        researcher: None,
        department: Some("Geography".to_string()),
        year_range: YearRange::new(2000, 2030),
        variant: "coarse (9 topics)".to_string(),
    };
    let scene = session.render(&state).expect("scene");

    // No highlight layer and no dimming: the selection was dropped
    assert!(scene.highlight.is_none());
    assert!(scene.base.iter().all(|m| m.hover.is_some()));
}

#[test]
fn single_embedding_deployment_pins_the_variant() {
    let caps = Capabilities {
        supports_department_filter: true,
        supports_multi_embedding: false,
    };
    let session = MapSession::new(store(), caps);

    // Requesting an unknown variant still renders, pinned to the first one
    let state = FilterState::unfiltered("medium", YearRange::new(2000, 2030));
    let scene = session.render(&state).expect("scene");
    assert_eq!(scene.base.len(), 4);
}

#[test]
fn sessions_share_the_store_but_not_state() {
    let store = store();
    let a = MapSession::new(Arc::clone(&store), Capabilities::default());
    let b = MapSession::new(store, Capabilities::default());

    let state_a = FilterState {
        researcher: Some("A. Smith".to_string()),
        department: None,
        year_range: YearRange::new(2000, 2030),
        variant: "coarse (9 topics)".to_string(),
    };
    let state_b = FilterState::unfiltered("fine (36 topics)", YearRange::new(2000, 2030));

    let scene_a = a.render(&state_a).expect("a");
    let scene_b = b.render(&state_b).expect("b");
    assert!(scene_a.highlight.is_some());
    assert!(scene_b.highlight.is_none());
}
