#![no_main]
use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use jsonenc::{
    Encoder, Options, dict_object, entry, float, int, list, maybe_entry, nullable, object, string,
    uint,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Leaf {
    name: String,
    weight: f64,
    count: u64,
    delta: Option<i64>,
}

#[derive(Arbitrary, Debug)]
struct Record {
    id: i64,
    label: Option<String>,
    leaves: Vec<Leaf>,
    attrs: BTreeMap<String, Option<i64>>,
}

fn record_encoder() -> Encoder<Record> {
    let leaf = object([
        entry("name", |l: &Leaf| l.name.as_str(), string()),
        entry("weight", |l: &Leaf| &l.weight, float()),
        entry("count", |l: &Leaf| &l.count, uint()),
        entry("delta", |l: &Leaf| &l.delta, nullable(int())),
    ]);
    object([
        entry("id", |r: &Record| &r.id, int()),
        maybe_entry("label", |r: &Record| r.label.as_deref(), string()),
        entry("leaves", |r: &Record| &r.leaves, list(leaf)),
        entry("attrs", |r: &Record| &r.attrs, dict_object(nullable(int()))),
    ])
}

fuzz_target!(|record: Record| {
    let enc = record_encoder();
    let value = enc.encode(&record);
    assert_eq!(value, enc.encode(&record), "encoding is not deterministic");

    let obj = value.as_object().expect("record encodes to an object");
    assert_eq!(obj.contains_key("label"), record.label.is_some());
    assert_eq!(obj["leaves"].as_array().map(Vec::len), Some(record.leaves.len()));
    assert_eq!(obj["attrs"].as_object().map(|m| m.len()), Some(record.attrs.len()));

    let text = enc
        .encode_to_string(&record, &Options::default())
        .expect("rendering a Value cannot fail");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("rendered JSON parses");
    assert_eq!(parsed, value, "render/parse mismatch for {text}");
});
