use manifest_patch::{
    apply_patch_list, apply_patch_object, flatten, traverse_object, PatchEntry,
};
use manifest_path::get;
use proptest::prelude::*;
use serde_json::Value;

/// Short names, small indices, and hash-sized numbers past any sensible
/// sequence length.
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof!["[a-z0-9]{1,4}", "[1-9][0-9]{9,19}"]
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(count_leaves).sum(),
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn traverser_visits_each_leaf_once(doc in arb_json()) {
        let mut visits = 0usize;
        traverse_object(&doc, |value, path| {
            visits += 1;
            assert!(!value.is_object() && !value.is_array());
            assert_eq!(get(&doc, path), Some(value));
        });
        prop_assert_eq!(visits, count_leaves(&doc));
    }

    #[test]
    fn reapplying_own_leaves_is_identity(doc in arb_json()) {
        let mut copy = doc.clone();
        apply_patch_object(&mut copy, &doc);
        prop_assert_eq!(copy, doc);
    }

    #[test]
    fn empty_patches_are_identity(doc in arb_json()) {
        let mut copy = doc.clone();
        apply_patch_list(&mut copy, &[]);
        apply_patch_object(&mut copy, &serde_json::json!({}));
        prop_assert_eq!(copy, doc);
    }

    #[test]
    fn object_and_list_forms_agree(target in arb_json(), patch in arb_json()) {
        let mut from_object = target.clone();
        apply_patch_object(&mut from_object, &patch);

        let entries: Vec<PatchEntry> = flatten(&patch)
            .into_iter()
            .map(|(path, value)| PatchEntry::new(path, value))
            .collect();
        let mut from_list = target;
        apply_patch_list(&mut from_list, &entries);

        prop_assert_eq!(from_object, from_list);
    }

    #[test]
    fn every_patched_leaf_is_readable(target in arb_json(), patch in arb_json()) {
        let mut tree = target;
        apply_patch_object(&mut tree, &patch);
        for (path, value) in flatten(&patch) {
            if path.is_empty() {
                continue;
            }
            prop_assert_eq!(get(&tree, &path), Some(&value));
        }
    }

    #[test]
    fn definition_tables_stay_maps(hash in 0u64..u64::from(u32::MAX), name in "[A-Za-z]{1,12}") {
        let mut tree = serde_json::json!({});
        let path = format!("DestinyInventoryItemDefinition.{hash}.displayProperties.name");
        apply_patch_list(&mut tree, &[PatchEntry::new(path, name.clone())]);
        let table = &tree["DestinyInventoryItemDefinition"];
        prop_assert!(table.is_object());
        prop_assert_eq!(
            &table[hash.to_string()]["displayProperties"]["name"],
            &Value::String(name)
        );
    }

    #[test]
    fn hash_indices_under_plain_keys_are_map_keys(
        key in "[a-z]{1,8}",
        hash in 1_000_000u64..u64::MAX,
        value in any::<i64>(),
    ) {
        let mut tree = serde_json::json!({});
        let path = format!("{key}.{hash}.value");
        apply_patch_list(&mut tree, &[PatchEntry::new(path, value)]);
        prop_assert!(tree[&key].is_object());
        prop_assert_eq!(&tree[&key][hash.to_string()]["value"], &Value::from(value));
    }
}
