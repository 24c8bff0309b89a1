use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    let empty = interner.intern("");
    assert_eq!(empty, Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("a");
    interner.intern("b");
    interner.intern("a");
    assert_eq!(interner.len(), 3);
    assert!(!interner.is_empty());
}

#[test]
fn test_intern_owned() {
    let interner = StringInterner::new();

    let name1 = interner.intern_owned(String::from("owned_string"));
    let name2 = interner.intern("owned_string");
    assert_eq!(name1, name2);

    assert_eq!(interner.lookup(name1), "owned_string");
}

#[test]
fn test_intern_owned_already_interned() {
    let interner = StringInterner::new();
    let name1 = interner.intern("test_string");
    let name2 = interner.intern_owned(String::from("test_string"));
    assert_eq!(name1, name2);
}

#[test]
fn test_interior_nul_round_trips() {
    let interner = StringInterner::new();
    let name = interner.intern("a\0b");
    assert_eq!(interner.lookup(name), "a\0b");
    assert_ne!(name, interner.intern("a"));
}

#[test]
fn test_try_intern_ok() {
    let interner = StringInterner::new();
    assert_eq!(interner.try_intern("x"), interner.try_intern_owned("x".into()));
}

#[test]
fn test_string_lookup_trait() {
    fn resolve<L: StringLookup>(lookup: &L, name: Name) -> String {
        lookup.lookup(name).to_owned()
    }
    let interner = StringInterner::new();
    let name = interner.intern("Object");
    assert_eq!(resolve(&interner, name), "Object");
}

#[test]
fn test_overflow_error_message() {
    let err = InternError::ShardOverflow {
        shard_idx: 3,
        count: 10,
    };
    assert_eq!(
        err.to_string(),
        format!(
            "interner shard 3 exceeded capacity: 10 strings, max is {}",
            Name::MAX_LOCAL
        )
    );
}
