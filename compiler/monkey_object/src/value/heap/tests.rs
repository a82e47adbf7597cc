use super::*;

#[test]
fn test_heap_deref() {
    let h = Heap::new(42i64);
    assert_eq!(*h, 42);
}

#[test]
fn test_heap_clone_shares_allocation() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert_eq!(*h1, *h2);
    assert!(Heap::ptr_eq(&h1, &h2));
}

#[test]
fn test_heap_eq_by_content() {
    let h1 = Heap::new("hello".to_string());
    let h2 = Heap::new("hello".to_string());
    let h3 = Heap::new("world".to_string());
    assert_eq!(h1, h2);
    assert!(!Heap::ptr_eq(&h1, &h2));
    assert_ne!(h1, h3);
}

#[test]
fn test_unwrap_or_clone_leaves_other_handles_intact() {
    let h1 = Heap::new(vec![1, 2]);
    let h2 = h1.clone();
    let owned = Heap::unwrap_or_clone(h1);
    assert_eq!(owned, vec![1, 2]);
    assert_eq!(*h2, vec![1, 2]);
}
