//! End-to-end: load JSON inputs, rebuild, and hand the slice to a renderer.

use std::io::Write;

use offermap_engine::{
    loading, NavigationSession, PriorityClassifier, RegionTree,
};

const REGIONS: &str = r#"{
    "id": "metro", "name": "Metro Area", "children": [
        {"id": "east", "name": "East Side", "children": [
            {"id": "old-town", "name": "Old Town"}
        ]},
        {"id": "west", "name": "West Side"}
    ]
}"#;

const OFFERS: &str = r#"[
    {"id": "of-1", "name": "Garden flat", "desc": "ground floor",
     "properties": {"price": 290000, "bedrooms": 2, "bathrooms": 1.0,
                    "thumbnail": "of-1.png"},
     "targetRegionId": "old-town"},
    {"id": "of-2", "name": "Corner house", "desc": "",
     "properties": {"price": "330000", "bedrooms": 4, "bathrooms": 2.5,
                    "thumbnail": "of-2.png",
                    "link": "https://listings.example/of-2"},
     "targetRegionId": "west"},
    {"id": "of-3", "name": "No price listed", "desc": "",
     "properties": {"price": null, "bedrooms": 1, "bathrooms": 1.0,
                    "thumbnail": "of-3.png"},
     "targetRegionId": "west"}
]"#;

#[test]
fn test_load_rebuild_render_cycle() {
    let records = loading::parse_region_tree(REGIONS).expect("regions");
    let offers = loading::parse_offers(OFFERS).expect("offers");
    let tree = RegionTree::from_nested(&records).expect("tree");

    let mut session =
        NavigationSession::new(tree, offers, PriorityClassifier::with_default_policy());
    let report = session.rebuild(300_000.0).expect("rebuild");

    assert_eq!(report.classified, 2);
    assert_eq!(report.excluded_count(), 1);
    assert_eq!(report.excluded[0].offer_id, "of-3");

    // 290k within 5%, 330k at 10% over.
    assert_eq!(session.summary_of("metro").unwrap().as_array(), [1, 0, 1]);

    // west is a leaf on the initial frontier, so its offers surface; the
    // unpriced one renders without a band.
    let visible = session.visible();
    assert!(visible.contains("of-2"));
    assert!(visible.contains("of-3"));
    match visible.node("of-3").unwrap() {
        offermap_engine::GraphNode::Offer { band, .. } => assert!(band.is_none()),
        _ => unreachable!(),
    }

    // The slice is what the renderer consumes: it must serialize whole.
    let rendered = serde_json::to_string(visible).expect("serialize slice");
    assert!(rendered.contains("\"priority_groups\""));
    assert!(rendered.contains("of-2"));
}

#[test]
fn test_load_from_files() {
    let dir = tempfile::tempdir().expect("tempdir");

    let regions_path = dir.path().join("regions.json");
    let mut f = std::fs::File::create(&regions_path).unwrap();
    f.write_all(REGIONS.as_bytes()).unwrap();

    let offers_path = dir.path().join("offers.json");
    let mut f = std::fs::File::create(&offers_path).unwrap();
    f.write_all(OFFERS.as_bytes()).unwrap();

    let records = loading::load_region_tree_from_path(&regions_path).expect("regions");
    let offers = loading::load_offers_from_path(&offers_path).expect("offers");
    assert_eq!(records.len(), 1);
    assert_eq!(offers.len(), 3);
    assert_eq!(offers[1].value, Some(330_000.0));
}

#[test]
fn test_missing_file_is_io_error() {
    let err =
        loading::load_offers_from_path(std::path::Path::new("/nonexistent/offers.json"))
            .unwrap_err();
    assert!(matches!(
        err,
        offermap_core::errors::LoadError::IoError { .. }
    ));
}
