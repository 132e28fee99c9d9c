use super::*;

#[test]
fn new_rejects_empty_list() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(WordList::new(empty), Err(CycleError::EmptyWords));
}

#[test]
fn new_preserves_insertion_order() {
    let words = WordList::new(["Call Operations", "Customer Service", "Voice AI"]).expect("non-empty");
    assert_eq!(words.len(), 3);
    assert!(!words.is_empty());
    assert_eq!(words.iter().collect::<Vec<_>>(), vec!["Call Operations", "Customer Service", "Voice AI"]);
    assert_eq!(words.get(1), Some("Customer Service"));
    assert_eq!(words.get(3), None);
}

#[test]
fn wrapped_index_cycles_through_list() {
    let words = WordList::new(["A", "B"]).expect("non-empty");
    assert_eq!(words.wrapped(0), "A");
    assert_eq!(words.wrapped(1), "B");
    assert_eq!(words.wrapped(2), "A");
    assert_eq!(words.wrapped(7), "B");
}

#[test]
fn equality_and_fingerprint_follow_content() {
    let a = WordList::new(["A", "Longword"]).expect("non-empty");
    let b = WordList::new(vec!["A".to_owned(), "Longword".to_owned()]).expect("non-empty");
    let c = WordList::new(["Longword", "A"]).expect("non-empty");
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_ne!(a, c);
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn deserialize_validates_non_empty() {
    let words: WordList = serde_json::from_str(r#"["x", "y"]"#).expect("valid list");
    assert_eq!(words.len(), 2);
    let err = serde_json::from_str::<WordList>("[]").expect_err("empty list rejected");
    assert!(err.to_string().contains("at least one word"));
}
