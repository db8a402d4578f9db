use std::collections::VecDeque;

use jsonenc::{Encoder, array, bool, int, list, nullable, string};
use serde_json::json;

#[test]
fn empty_collections_give_empty_arrays() {
    let l: Encoder<Vec<i64>> = list(int());
    let a = array(int());
    assert_eq!(l.encode(&Vec::new()), json!([]));
    assert_eq!(a.encode(&[]), json!([]));
}

#[test]
fn list_maps_in_order() {
    let l: Encoder<Vec<i64>> = list(int());
    assert_eq!(l.encode(&vec![3, 1, 2]), json!([3, 1, 2]));
}

#[test]
fn list_over_deque() {
    let l: Encoder<VecDeque<bool>> = list(bool());
    let mut d = VecDeque::new();
    d.push_back(true);
    d.push_front(false);
    assert_eq!(l.encode(&d), json!([false, true]));
}

#[test]
fn nested_sequences_of_optionals() {
    let e: Encoder<Vec<Vec<Option<i64>>>> = list(list::<_, Vec<Option<i64>>>(nullable(int())));
    let v = vec![vec![Some(1), None], vec![], vec![None]];
    assert_eq!(e.encode(&v), json!([[1, null], [], [null]]));
}

#[test]
fn array_of_owned_strings() {
    let e = array(string().borrowed::<String>());
    let v = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    assert_eq!(e.encode(&v), json!(["a", "b", "a"]));
}
