use moro_core::sequence::{fibonacci, lucas, SequenceCache};

#[test]
fn fibonacci_first_ten_terms() {
    let window = fibonacci(10).expect("window");
    assert_eq!(window, vec![1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
}

#[test]
fn lucas_first_eight_terms() {
    let window = lucas(8).expect("window");
    assert_eq!(window, vec![2, 1, 3, 4, 7, 11, 18, 29]);
}

#[test]
fn single_term_windows() {
    assert_eq!(fibonacci(1).expect("fib"), vec![1]);
    assert_eq!(lucas(1).expect("lucas"), vec![2]);
}

#[test]
fn zero_length_is_rejected() {
    let err = fibonacci(0).expect_err("length 0 must fail");
    assert_eq!(err.info().code, "invalid-length");
    let err = lucas(0).expect_err("length 0 must fail");
    assert_eq!(err.info().code, "invalid-length");
}

#[test]
fn windows_are_reproducible() {
    let first = fibonacci(40).expect("window");
    let second = fibonacci(40).expect("window");
    assert_eq!(first, second);
}

#[test]
fn overlong_window_overflows_cleanly() {
    let err = fibonacci(200).expect_err("i64 overflow expected");
    assert_eq!(err.info().code, "invalid-length");
    assert!(err.info().context.contains_key("largest-exact"));
}

#[test]
fn cache_shares_windows_between_requests() {
    let cache = SequenceCache::new();
    assert!(cache.is_empty());

    let first = cache.fibonacci(12).expect("window");
    let second = cache.fibonacci(12).expect("window");
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);

    let longer = cache.fibonacci(20).expect("window");
    assert_eq!(longer[..12], first[..]);
    assert_eq!(cache.len(), 2);
}

#[test]
fn independent_caches_do_not_interfere() {
    let a = SequenceCache::new();
    let b = SequenceCache::new();
    a.fibonacci(5).expect("window");
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}
