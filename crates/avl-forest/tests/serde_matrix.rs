#![cfg(feature = "serde")]

use avl_forest::{AvlMap, AvlSet};

#[test]
fn serde_map_serializes_in_key_order_matrix() {
    let map: AvlMap<String, i32> = [("b", 2), ("c", 3), ("a", 1)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"a":1,"b":2,"c":3}"#);
}

#[test]
fn serde_map_round_trip_matrix() {
    let map: AvlMap<u32, Vec<u8>> = (0..64).map(|i| (i * 7 % 64, vec![i as u8])).collect();
    let json = serde_json::to_string(&map).unwrap();
    let back: AvlMap<u32, Vec<u8>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), map.len());
    assert!(back.iter().eq(map.iter()));
    back.assert_valid().unwrap();
}

#[test]
fn serde_map_duplicate_key_keeps_last_matrix() {
    let map: AvlMap<String, i32> = serde_json::from_str(r#"{"x":1,"y":2,"x":3}"#).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&"x".to_string()), Some(&3));
}

#[test]
fn serde_set_matrix() {
    let set: AvlSet<i32> = serde_json::from_str("[5, 1, 3, 1]").unwrap();
    assert_eq!(set.len(), 3);
    set.assert_valid().unwrap();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[1,3,5]");
}

#[test]
fn serde_rejects_wrong_shape_matrix() {
    assert!(serde_json::from_str::<AvlMap<String, i32>>("[1, 2]").is_err());
    assert!(serde_json::from_str::<AvlSet<i32>>(r#"{"a":1}"#).is_err());
}
