use glimpse_infer::{InferError, LabelTable, MemoryAssetStore};

#[test]
fn test_from_text_skips_blank_lines() {
    let table = LabelTable::from_text("tench\n  goldfish \n\n\r\ngreat white shark\n").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(
        table.iter().collect::<Vec<_>>(),
        vec!["tench", "goldfish", "great white shark"]
    );
    assert_eq!(table.get(1), Some("goldfish"));
    assert_eq!(table.get(3), None);
}

#[test]
fn test_empty_tables_are_rejected() {
    assert!(matches!(LabelTable::from_text("\n \n"), Err(InferError::Labels(_))));
    assert!(matches!(LabelTable::new(Vec::new()), Err(InferError::Labels(_))));
    assert!(matches!(LabelTable::from_json("[]"), Err(InferError::Labels(_))));
}

#[test]
fn test_from_json_list() {
    let table = LabelTable::from_json(r#"["cat", "dog", "bird"]"#).unwrap();
    assert_eq!(table.iter().collect::<Vec<_>>(), vec!["cat", "dog", "bird"]);
}

#[test]
fn test_from_json_class_index_is_ordered_numerically() {
    let json = r#"{
        "10": ["n01530575", "brambling"],
        "2": ["n01484850", "great white shark"],
        "0": ["n01440764", "tench"],
        "1": ["n01443537", "goldfish"],
        "3": ["n01491361", "tiger shark"],
        "4": ["n01494475", "hammerhead"],
        "5": ["n01496331", "electric ray"],
        "6": ["n01498041", "stingray"],
        "7": ["n01514668", "cock"],
        "8": ["n01514859", "hen"],
        "9": ["n01518878", "ostrich"]
    }"#;
    let table = LabelTable::from_json(json).unwrap();
    assert_eq!(table.len(), 11);
    assert_eq!(table.get(0), Some("tench"));
    assert_eq!(table.get(2), Some("great white shark"));
    assert_eq!(table.get(10), Some("brambling"));
}

#[test]
fn test_from_json_class_index_with_gap() {
    let json = r#"{"0": ["a", "tench"], "2": ["b", "shark"]}"#;
    assert!(matches!(LabelTable::from_json(json), Err(InferError::Labels(_))));
}

#[test]
fn test_from_json_rejects_other_shapes() {
    assert!(LabelTable::from_json(r#"{"labels": 3}"#).is_err());
    assert!(LabelTable::from_json(r#"{"x": ["a", "b"]}"#).is_err());
    assert!(LabelTable::from_json("not json").is_err());
}

#[test]
fn test_load_picks_parser_by_extension() {
    let store = MemoryAssetStore::new()
        .with_asset("labels.txt", "cat\ndog\n")
        .with_asset("labels.json", r#"["cat", "dog"]"#)
        .with_asset("broken.json", "cat\ndog\n");

    let text = LabelTable::load(&store, "labels.txt").unwrap();
    let json = LabelTable::load(&store, "labels.json").unwrap();
    assert_eq!(text, json);

    assert!(matches!(
        LabelTable::load(&store, "broken.json"),
        Err(InferError::Labels(_))
    ));
    assert!(matches!(
        LabelTable::load(&store, "missing.txt"),
        Err(InferError::AssetNotFound(_))
    ));
}

#[test]
fn test_clones_share_storage() {
    let table = LabelTable::from_text("cat\ndog").unwrap();
    let copy = table.clone();
    assert_eq!(table, copy);
    assert_eq!(copy.get(0), Some("cat"));
}
