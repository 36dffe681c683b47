#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{finding, location, log, run};
use sarif_order_core::compare::{
    list, map, nullable, Comparer, JsonValue, ListComparer, LocationComparer, Natural, Ordinal,
    RefComparer, ResultComparer, RunComparer, SarifLogComparer, ToolComparer, UriText,
};
use sarif_order_core::model::{Message, Ref, SarifLog, SarifResult, Tool, ToolComponent, Uri};
use serde_json::json;
use std::cmp::Ordering;
use std::collections::HashMap;

fn tool(name: &str) -> Tool {
    Tool {
        driver: ToolComponent::named(name),
        ..Tool::default()
    }
}

// Scenario: two tools identical except driver name casing
// Then: ordinal byte order puts the uppercase "S" first
#[test]
fn test_tool_driver_name_ordinal() {
    let upper = tool("ESLint");
    let lower = tool("Eslint");

    assert_eq!(ToolComparer.compare(&upper, &lower), Ordering::Less);
    assert_eq!(ToolComparer.compare(&lower, &upper), Ordering::Greater);
    assert!(!ToolComparer.equals(&upper, &lower));
}

#[test]
fn test_null_sorts_first_everywhere() {
    assert_eq!(nullable(Ordinal).compare(&None, &Some(String::new())), Ordering::Less);
    assert_eq!(nullable(Natural).compare(&None::<i64>, &None), Ordering::Equal);
    assert_eq!(
        nullable(UriText).compare(&None, &Some(Uri::from("file:///a"))),
        Ordering::Less
    );

    let bare = SarifResult {
        message: Message::text("m"),
        ..SarifResult::default()
    };
    let with_rule = SarifResult {
        rule_id: Some(String::new()),
        ..bare.clone()
    };
    assert_eq!(ResultComparer.compare(&bare, &with_rule), Ordering::Less);
}

#[test]
fn test_list_ordering_rules() {
    let ints = ListComparer(Natural);
    assert_eq!(ints.compare(&vec![1, 2], &vec![1, 2, 3]), Ordering::Less);
    assert_eq!(ints.compare(&vec![1, 3], &vec![1, 2, 9]), Ordering::Greater);
    assert_eq!(
        list(Natural).compare(&Some(Vec::<i64>::new()), &None),
        Ordering::Greater
    );
}

#[test]
fn test_map_order_independent() {
    let mut a = HashMap::new();
    a.insert("a".to_string(), json!(1));
    a.insert("b".to_string(), json!(2));
    let mut b = HashMap::new();
    b.insert("b".to_string(), json!(2));
    b.insert("a".to_string(), json!(1));

    assert_eq!(map(JsonValue).compare(&Some(a), &Some(b)), Ordering::Equal);
}

#[test]
fn test_uri_compared_literally() {
    let plain = Uri::from("file:///a/b");
    let dotted = Uri::from("file:///a/./b");
    assert_ne!(UriText.compare(&plain, &dotted), Ordering::Equal);
}

#[test]
fn test_json_value_rank_order() {
    let ranked = [
        json!(null),
        json!(true),
        json!(3),
        json!("a"),
        json!([1]),
        json!({"k": 1}),
    ];
    for pair in ranked.windows(2) {
        assert_eq!(JsonValue.compare(&pair[0], &pair[1]), Ordering::Less);
    }
    assert_ne!(JsonValue.compare(&json!(1), &json!(1.0)), Ordering::Equal);
    assert_eq!(JsonValue.compare(&json!(2), &json!(10)), Ordering::Less);
}

// Scenario: the same instance reached twice short-circuits to Equal;
// a distinct but identical copy reaches the same verdict structurally
#[test]
fn test_shared_and_copied_subtrees() {
    let shared = run("ESLint", vec![finding("no-undef", "file:///a.js", 4)]);
    let copy = shared.clone();

    assert_eq!(RunComparer.compare(&shared, &shared), Ordering::Equal);
    assert_eq!(RunComparer.compare(&shared, &copy), Ordering::Equal);

    let runs = vec![shared.clone(), shared];
    let comparer = ListComparer(RunComparer);
    assert_eq!(comparer.compare(&runs, &runs), Ordering::Equal);
    assert_eq!(comparer.compare(&runs[..1], &runs[1..]), Ordering::Equal);
}

#[test]
fn test_results_sort_deterministically() {
    let mut results = vec![
        finding("no-undef", "file:///b.js", 1),
        finding("no-undef", "file:///a.js", 9),
        finding("eqeqeq", "file:///a.js", 2),
        finding("no-undef", "file:///a.js", 3),
    ];
    results.sort_by(|a, b| ResultComparer.compare(a, b));

    let keys: Vec<(String, i64)> = results
        .iter()
        .map(|r| {
            let loc = &r.locations.as_ref().unwrap()[0];
            let region = loc.physical_location.as_ref().unwrap().region.as_ref().unwrap();
            (r.rule_id.clone().unwrap(), region.start_line.unwrap())
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            ("eqeqeq".to_string(), 2),
            ("no-undef".to_string(), 3),
            ("no-undef".to_string(), 9),
            ("no-undef".to_string(), 1),
        ]
    );
}

#[test]
fn test_location_uri_before_region() {
    let a = location("file:///a.js", 100);
    let b = location("file:///b.js", 1);
    assert_eq!(LocationComparer.compare(&a, &b), Ordering::Less);
}

#[test]
fn test_log_level_comparison() {
    let a = log("ESLint", vec![finding("r", "file:///a.js", 1)]);
    let b = log("ESLint", vec![finding("r", "file:///a.js", 2)]);
    assert_eq!(SarifLogComparer.compare(&a, &b), Ordering::Less);
    assert_eq!(
        SarifLogComparer.compare(&SarifLog::default(), &a),
        Ordering::Less
    );
}

#[test]
fn test_ref_variants() {
    let maps = Ref::from(vec![HashMap::from([("url".to_string(), json!("https://a"))])]);
    let text = Ref::from("NIST SP 800-53".to_string());
    assert_eq!(RefComparer.compare(&maps, &text), Ordering::Less);
    assert!(RefComparer.equals(&text, &text.clone()));

    let decoded: Vec<Ref> =
        serde_json::from_str(r#"[[{"url":"https://a"}], "NIST SP 800-53"]"#).unwrap();
    assert!(RefComparer.equals(&decoded[0], &maps));
    assert!(RefComparer.equals(&decoded[1], &text));
}

#[test]
fn test_comparers_are_thread_safe() {
    let a = log("ESLint", vec![finding("r", "file:///a.js", 1)]);
    let b = a.clone();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (a, b) = (a.clone(), b.clone());
            std::thread::spawn(move || SarifLogComparer::INSTANCE.compare(&a, &b))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ordering::Equal);
    }
}
