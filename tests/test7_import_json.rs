mod common;

use common::setup_test_store;
use rusty_discs::args::validation::validate_rounds_format;
use rusty_discs::controller::profile;
use serde_json::json;

#[test]
fn test7_well_formed_rounds_file_passes_validation() {
    let rounds = json!([
        { "player": "Alice", "course": "Meadow Ridge", "score": 57, "par": 54, "date": "2025-06-01" },
        { "player": "Alice", "course": "Meadow Ridge", "score": null, "par": 54, "date": "2025-06-02" }
    ]);
    assert!(validate_rounds_format(&rounds).is_ok());
}

#[test]
fn test7_malformed_rounds_files_are_rejected() {
    let not_an_array = json!({ "player": "Alice" });
    assert!(validate_rounds_format(&not_an_array).is_err());

    let missing_player = json!([
        { "course": "Meadow Ridge", "score": 57, "par": 54, "date": "2025-06-01" }
    ]);
    assert!(validate_rounds_format(&missing_player).is_err());

    let text_score = json!([
        { "player": "Alice", "course": "Meadow Ridge", "score": "fifty", "par": 54, "date": "2025-06-01" }
    ]);
    assert!(validate_rounds_format(&text_score).is_err());

    let bad_date = json!([
        { "player": "Alice", "course": "Meadow Ridge", "score": 57, "par": 54, "date": "June 1st" }
    ]);
    assert!(validate_rounds_format(&bad_date).is_err());

    let stray_key = json!([
        { "player": "Alice", "course": "Meadow Ridge", "score": 57, "par": 54,
          "date": "2025-06-01", "holes": 18 }
    ]);
    assert!(validate_rounds_format(&stray_key).is_err());
}

#[test]
fn test7_import_replays_rounds_through_the_record_path() {
    let mut store = setup_test_store();

    let rounds = json!([
        { "player": "Alice", "course": "Meadow Ridge", "score": 57, "par": 54, "date": "2025-06-01" },
        { "player": "Bob",   "course": "Meadow Ridge", "score": 61, "par": 54, "date": "2025-06-01" },
        { "player": "Alice", "course": "Pine Hollow",  "score": 53, "par": 54, "date": "2025-06-02" },
        { "player": "Alice", "course": "Meadow Ridge", "score": 54, "par": 54, "date": "2025-06-03" },
        { "player": "Alice", "course": "Meadow Ridge", "score": 56, "par": 54, "date": "2025-06-04" },
        { "player": "Alice", "course": "Meadow Ridge", "score": 55, "par": 54, "date": "2025-06-05" }
    ]);
    assert!(validate_rounds_format(&rounds).is_ok());

    let imported = profile::import_rounds(&mut store, &rounds).expect("import should succeed");
    assert_eq!(imported, 6);

    let alice = store
        .load_profile("Alice")
        .expect("load should succeed")
        .expect("Alice should exist");
    // diffs [3, -1, 0, 2, 1], newest (june 5th) first after replay
    assert_eq!(alice.stats.handicap, Some(1.0));
    assert_eq!(alice.window.rounds()[0].date.to_string(), "2025-06-05");

    let bob = store
        .load_profile("Bob")
        .expect("load should succeed")
        .expect("Bob should exist");
    assert_eq!(bob.stats.total_rounds, 1);
    assert_eq!(bob.stats.handicap, None);
}
