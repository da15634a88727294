use resmap_core::types::{DatasetVariant, Document, FilterState, YearRange};
use resmap_data::DatasetStore;

fn doc(title: &str, year: i32, researcher: &str, department: &str) -> Document {
    Document {
        x: 0.0,
        y: 0.0,
        title: title.to_string(),
        authors: researcher.to_string(),
        year,
        doc_type: "article".to_string(),
        doi: None,
        main_label: "Ecology".to_string(),
        main_keys: "fire burn".to_string(),
        researcher: researcher.to_string(),
        department: department.to_string(),
    }
}

fn store() -> DatasetStore {
    let documents = vec![
        doc("endpoint low", 2009, "A. Smith", "Geography"),
        doc("inside early", 2010, "A. Smith", "Geography"),
        doc("inside mid", 2015, "B. Jones", "Earth Science"),
        doc("inside late", 2018, "A. Smith", "Geography"),
        doc("endpoint high", 2019, "B. Jones", "Earth Science"),
    ];
    DatasetStore::from_variants(vec![DatasetVariant {
        name: "coarse".to_string(),
        documents,
    }])
    .expect("store")
}

fn state(range: (i32, i32)) -> FilterState {
    FilterState::unfiltered("coarse", YearRange::new(range.0, range.1))
}

#[test]
fn year_predicate_drops_documents_on_the_endpoints() {
    let store = store();
    let outcome = resmap_filter::apply(&store, &state((2009, 2019))).expect("apply");

    let titles: Vec<&str> = outcome.base.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["inside early", "inside mid", "inside late"]);
    assert!(outcome.highlighted.is_none());
}

#[test]
fn inverted_range_yields_empty_base_and_empty_highlight() {
    let store = store();
    let mut st = state((2019, 2009));
    st.researcher = Some("A. Smith".to_string());

    let outcome = resmap_filter::apply(&store, &st).expect("apply");
    assert!(outcome.base.is_empty());
    assert_eq!(outcome.highlighted.map(|h| h.len()), Some(0));
}

#[test]
fn researcher_takes_precedence_over_department() {
    let store = store();
    let mut st = state((2000, 2030));
    st.researcher = Some("A. Smith".to_string());
    // Department pointing at the *other* researcher's documents; it must
    // be ignored while a researcher is selected.
    st.department = Some("Earth Science".to_string());

    let outcome = resmap_filter::apply(&store, &st).expect("apply");
    let highlighted = outcome.highlighted.expect("highlight active");
    assert!(!highlighted.is_empty());
    assert!(highlighted.iter().all(|d| d.researcher == "A. Smith"));
}

#[test]
fn department_predicate_applies_when_no_researcher_is_set() {
    let store = store();
    let mut st = state((2000, 2030));
    st.department = Some("Earth Science".to_string());

    let outcome = resmap_filter::apply(&store, &st).expect("apply");
    let highlighted = outcome.highlighted.expect("highlight active");
    assert_eq!(highlighted.len(), 2);
    assert!(highlighted.iter().all(|d| d.department == "Earth Science"));
}

#[test]
fn highlighted_is_always_a_subset_of_base() {
    let store = store();
    for range in [(2000, 2030), (2009, 2019), (2014, 2016), (2016, 2014)] {
        for researcher in [None, Some("A. Smith".to_string()), Some("Nobody".to_string())] {
            let mut st = state(range);
            st.researcher = researcher;
            let outcome = resmap_filter::apply(&store, &st).expect("apply");
            if let Some(highlighted) = &outcome.highlighted {
                for h in highlighted {
                    assert!(
                        outcome.base.iter().any(|b| std::ptr::eq(*b, *h)),
                        "highlighted document not in base"
                    );
                }
            }
        }
    }
}

#[test]
fn identity_match_is_exact_and_case_sensitive() {
    let store = store();
    let mut st = state((2000, 2030));
    st.researcher = Some("a. smith".to_string());

    let outcome = resmap_filter::apply(&store, &st).expect("apply");
    assert_eq!(outcome.highlighted.expect("highlight active").len(), 0);
}

#[test]
fn wide_open_range_round_trips_every_document_exactly_once() {
    let store = store();
    let variant = store.variant("coarse").expect("variant");
    let outcome = resmap_filter::apply(&store, &state((i32::MIN, i32::MAX))).expect("apply");

    assert_eq!(outcome.base.len(), variant.documents.len());
    for doc in &variant.documents {
        let occurrences = outcome
            .base
            .iter()
            .filter(|b| std::ptr::eq(**b, doc))
            .count();
        assert_eq!(occurrences, 1, "document '{}' not exactly once", doc.title);
    }
}

#[test]
fn unknown_variant_surfaces_as_an_error() {
    let store = store();
    let st = FilterState::unfiltered("fine", YearRange::new(2000, 2030));
    assert!(resmap_filter::apply(&store, &st).is_err());
}
