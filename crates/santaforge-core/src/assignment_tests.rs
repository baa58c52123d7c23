//! Tests for the assignment type

use super::assignment::*;
use super::participant::ParticipantId;

fn id(s: &str) -> ParticipantId {
    ParticipantId::from(s)
}

#[test]
fn test_insert_replaces_receiver() {
    let mut a = Assignment::new();
    assert_eq!(a.insert("a", "b"), None);
    assert_eq!(a.insert("a", "c"), Some(id("b")));
    assert_eq!(a.receiver_of(&id("a")), Some(&id("c")));
    assert_eq!(a.len(), 1);
}

#[test]
fn test_giver_of() {
    let mut a = Assignment::new();
    a.insert("a", "b");
    a.insert("b", "c");
    a.insert("c", "a");
    assert_eq!(a.giver_of(&id("a")), Some(&id("c")));
    assert_eq!(a.giver_of(&id("z")), None);
}

#[test]
fn test_iteration_is_ordered_by_giver() {
    let mut a = Assignment::new();
    a.insert("c", "a");
    a.insert("a", "b");
    a.insert("b", "c");
    let givers: Vec<&str> = a.givers().map(ParticipantId::as_str).collect();
    assert_eq!(givers, vec!["a", "b", "c"]);
}

#[test]
fn test_cycles_single_ring() {
    let mut a = Assignment::new();
    a.insert("a", "c");
    a.insert("c", "b");
    a.insert("b", "a");
    assert_eq!(a.cycles(), vec![vec![id("a"), id("c"), id("b")]]);
}

#[test]
fn test_cycles_broken_chain() {
    let mut a = Assignment::new();
    a.insert("a", "b");
    a.insert("b", "x");
    let cycles = a.cycles();
    assert_eq!(cycles, vec![vec![id("a"), id("b")]]);
}

#[test]
fn test_empty_assignment() {
    let a = Assignment::new();
    assert!(a.is_empty());
    assert!(a.cycles().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_assignment_serializes_as_map() {
    let a: Assignment = [("x", "y"), ("y", "x")]
        .into_iter()
        .map(|(g, r)| (id(g), id(r)))
        .collect();
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, r#"{"x":"y","y":"x"}"#);
    let back: Assignment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
    assert_eq!(serde_json::to_string(&id("p1")).unwrap(), r#""p1""#);
}
