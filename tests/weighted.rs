use pijn_random::*;
use std::collections::HashMap;

struct Choice {
    name: &'static str,
    probability: f64,
}

impl Weighted for Choice {
    fn weight(&self) -> f64 {
        self.probability
    }
}

#[test]
fn only_positive_weight_is_picked() {
    assert_eq!(pick_weighted(&["a", "b", "c"], &[0.0, 0.2, 0.0]), Some(&"b"));

    let options = [
        Choice { name: "a", probability: 0.0 },
        Choice { name: "b", probability: 0.2 },
        Choice { name: "c", probability: 0.0 },
    ];
    assert_eq!(pick_by_weight(&options).map(|o| o.name), Some("b"));
}

#[test]
fn invalid_input_yields_none() {
    let empty: [&str; 0] = [];
    assert_eq!(pick_weighted(&empty, &[]), None);
    assert_eq!(pick_weighted(&["a", "b"], &[0.5, 0.3, 0.2]), None);
    assert_eq!(pick_weighted(&["a", "b"], &[0.5, -0.3]), None);
    assert_eq!(pick_weighted(&["a", "b"], &[0.0, 0.0]), None);

    assert_eq!(pick_map_key(&HashMap::new()), None);
    assert_eq!(pick_map_key(&HashMap::from([("a".to_string(), -1.0)])), None);
    assert_eq!(pick_map_key_percent(&HashMap::new()).unwrap_or_default(), "");
}

#[test]
fn heavier_items_win_more_often() {
    let items = ["a", "b", "c"];
    let weights = [0.7, 0.2, 0.1];
    let mut counts = [0usize; 3];
    for _ in 0..1000 {
        match pick_weighted(&items, &weights) {
            Some(&"a") => counts[0] += 1,
            Some(&"b") => counts[1] += 1,
            Some(&"c") => counts[2] += 1,
            other => panic!("unexpected pick {:?}", other),
        }
    }
    assert!(counts[0] > counts[1] && counts[1] > counts[2], "{:?}", counts);
}

#[test]
fn single_key_map_always_returns_it() {
    let items = HashMap::from([("a".to_string(), 100.0)]);
    for _ in 0..100 {
        assert_eq!(pick_map_key(&items), Some("a"));
        assert_eq!(pick_map_key_percent(&items), Some("a"));
    }
}

#[test]
fn percent_map_follows_weights() {
    let drops = HashMap::from([
        ("a".to_string(), 50.0),
        ("b".to_string(), 30.0),
        ("c".to_string(), 12.0),
        ("d".to_string(), 7.5),
        ("e".to_string(), 0.1),
    ]);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..1000 {
        let key = pick_map_key_percent(&drops).unwrap();
        *counts.entry(key.to_string()).or_default() += 1;
    }

    let count = |key: &str| counts.get(key).copied().unwrap_or(0);
    assert!(count("a") > count("b"), "{:?}", counts);
    assert!(count("b") > count("c"), "{:?}", counts);
    assert!(count("c") > count("e"), "{:?}", counts);
}
