//! End-to-end tests over a small object model.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use proptest::prelude::*;
use vc_reflect::derive::Reflect;
use vc_reflect::{Reflect, ReflectBox};

use crate::{Result, SerialError, Serializer, SerializerConfig, Strategy, Value};

// -----------------------------------------------------------------------------
// Object model

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::Bar", default)]
struct Bar {
    foobar: String,
}

impl Bar {
    fn new(foobar: &str) -> Self {
        Self {
            foobar: foobar.into(),
        }
    }
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::Baz", default)]
struct Baz {
    foobar: String,
    arrays: Value,
}

impl Baz {
    fn new(foobar: &str) -> Self {
        Self {
            foobar: foobar.into(),
            arrays: arrays(),
        }
    }
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::BarCollection", list, default)]
struct BarCollection(Vec<ReflectBox>);

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::Foo", default)]
struct Foo {
    bars: BarCollection,
    baz: Baz,
    date: Option<NaiveDateTime>,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "test_assets::Subject", default, partial_eq)]
struct Subject {
    foo: String,
    bar: String,
    baz: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "test_assets::other_namespace::InOtherNamespace", default, partial_eq)]
struct InOtherNamespace {
    foo: String,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "test_assets::WithOtherNamespace", default, partial_eq)]
struct WithOtherNamespace {
    foo: InOtherNamespace,
    bar: InOtherNamespace,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "test_assets::HasDateTimeImmutable", default, partial_eq)]
struct HasDateTimeImmutable {
    date_time: DateTime<Utc>,
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::Empty", default)]
struct Empty;

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "test_assets::Loose", default, partial_eq)]
struct Loose {
    name: String,
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::Kinded", default)]
struct Kinded {
    kind: String,
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::Holder", default)]
struct Holder {
    bar: Bar,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "test_assets::Ledger", default, partial_eq)]
struct Ledger {
    title: String,
    counts: BTreeMap<String, u32>,
    tags: Vec<String>,
    limit: Option<i64>,
}

#[derive(Reflect, Default, Debug)]
#[reflect(type_path = "test_assets::Catalog", default)]
struct Catalog {
    entries: BTreeMap<String, Bar>,
}

// -----------------------------------------------------------------------------
// Helpers

fn build_serializer() -> Serializer {
    Serializer::builder()
        .register_type::<Foo>()
        .register_type::<Bar>()
        .register_type::<Subject>()
        .register_type::<WithOtherNamespace>()
        .register_type::<HasDateTimeImmutable>()
        .register_type::<Holder>()
        .register_type::<Ledger>()
        .register_type::<Catalog>()
        .register_type::<Empty>()
        .build()
}

fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    entries.into_iter().collect()
}

fn arrays() -> Value {
    map([
        ("key", Value::from("value")),
        ("array", map([("key", Value::from("value"))])),
    ])
}

fn noon(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap()
}

fn full_foo() -> Foo {
    Foo {
        bars: BarCollection(vec![
            ReflectBox::new(Bar::new("foobar")),
            ReflectBox::new(Baz::new("foobar")),
        ]),
        baz: Baz::new("foobar"),
        date: Some(noon(2015)),
    }
}

fn bar_value(foobar: &str) -> Value {
    map([
        ("foobar", Value::from(foobar)),
        ("__type", Value::from("test_assets::Bar")),
    ])
}

fn baz_value(foobar: &str) -> Value {
    map([
        ("foobar", Value::from(foobar)),
        ("arrays", arrays()),
        ("__type", Value::from("test_assets::Baz")),
    ])
}

fn full_foo_value() -> Value {
    map([
        (
            "bars",
            map([
                ("items", Value::List(vec![bar_value("foobar"), baz_value("foobar")])),
                ("__type", Value::from("test_assets::BarCollection")),
            ]),
        ),
        ("baz", baz_value("foobar")),
        ("date", Value::from("2015-01-01 12:00:00")),
        ("__type", Value::from("test_assets::Foo")),
    ])
}

fn assert_reflect_eq(actual: &dyn Reflect, expected: &dyn Reflect) {
    assert_eq!(
        actual.reflect_partial_eq(expected),
        Some(true),
        "\n  actual: {actual:?}\nexpected: {expected:?}",
    );
}

// -----------------------------------------------------------------------------
// Serialization

#[test]
fn serialize_composite_object() {
    let value = build_serializer().serialize(&full_foo()).unwrap();
    assert_eq!(value, full_foo_value());
}

#[test]
fn serialize_missing_date_as_null() {
    let foo = Foo {
        bars: BarCollection(vec![ReflectBox::new(Bar::new("foobar"))]),
        baz: Baz::new("foobar"),
        date: None,
    };

    let value = build_serializer().serialize(&foo).unwrap();
    let expected = map([
        (
            "bars",
            map([
                ("items", Value::List(vec![bar_value("foobar")])),
                ("__type", Value::from("test_assets::BarCollection")),
            ]),
        ),
        ("baz", baz_value("foobar")),
        ("date", Value::Null),
        ("__type", Value::from("test_assets::Foo")),
    ]);
    assert_eq!(value, expected);
}

#[test]
fn serialize_plain_struct() {
    let serializer = build_serializer();
    let subject = Subject {
        foo: "foo".into(),
        bar: "bar".into(),
        baz: "baz".into(),
    };

    let value = serializer.serialize(&subject).unwrap();
    let expected = map([
        ("foo", Value::from("foo")),
        ("bar", Value::from("bar")),
        ("baz", Value::from("baz")),
        ("__type", Value::from("test_assets::Subject")),
    ]);
    assert_eq!(value, expected);
    assert!(!serializer.locator().registry().contains("test_assets::Subject"));
}

#[test]
fn serialize_dependency_from_other_namespace() {
    let object = WithOtherNamespace {
        foo: InOtherNamespace { foo: "foo".into() },
        bar: InOtherNamespace { foo: "bar".into() },
    };

    let value = build_serializer().serialize(&object).unwrap();
    let nested = |foo: &str| {
        map([
            ("foo", Value::from(foo)),
            ("__type", Value::from("test_assets::other_namespace::InOtherNamespace")),
        ])
    };
    let expected = map([
        ("foo", nested("foo")),
        ("bar", nested("bar")),
        ("__type", Value::from("test_assets::WithOtherNamespace")),
    ]);
    assert_eq!(value, expected);
}

#[test]
fn serialize_utc_date_time() {
    let object = HasDateTimeImmutable {
        date_time: noon(2011).and_utc(),
    };

    let value = build_serializer().serialize(&object).unwrap();
    let expected = map([
        ("date_time", Value::from("2011-01-01 12:00:00")),
        ("__type", Value::from("test_assets::HasDateTimeImmutable")),
    ]);
    assert_eq!(value, expected);
}

#[test]
fn serialize_memberless_struct() {
    let serializer = build_serializer();
    let value = serializer.serialize(&Empty).unwrap();
    assert_eq!(value, map([("__type", Value::from("test_assets::Empty"))]));
    assert!(serializer.deserialize_as::<Empty>(&value).is_ok());
}

#[test]
fn serialize_unregistered_types() {
    let serializer = Serializer::new();
    let loose = Loose { name: "x".into() };

    let value = serializer.serialize(&loose).unwrap();
    let expected = map([
        ("name", Value::from("x")),
        ("__type", Value::from("test_assets::Loose")),
    ]);
    assert_eq!(value, expected);

    // Reading back needs the type registry.
    let err = serializer.deserialize("test_assets::Loose", &value).unwrap_err();
    assert!(matches!(err, SerialError::InvalidArgument(_)), "{err}");

    serializer.type_registry().write().register::<Loose>();
    assert_eq!(serializer.deserialize_as::<Loose>(&value).unwrap(), loose);
}

#[test]
fn serialize_unreachable_boxed_payload() {
    let bars = BarCollection(vec![
        ReflectBox::new(Bar::new("a")),
        ReflectBox::new(Loose { name: "b".into() }),
    ]);

    let value = build_serializer().serialize(&bars).unwrap();
    let loose = map([
        ("name", Value::from("b")),
        ("__type", Value::from("test_assets::Loose")),
    ]);
    let expected = map([
        ("items", Value::List(vec![bar_value("a"), loose])),
        ("__type", Value::from("test_assets::BarCollection")),
    ]);
    assert_eq!(value, expected);
}

#[test]
fn serialize_boxed_object() {
    let boxed = ReflectBox::new(Bar::new("x"));
    let value = build_serializer().serialize(&boxed).unwrap();
    assert_eq!(value, bar_value("x"));
}

#[test]
fn skip_null_members() {
    let serializer = Serializer::builder()
        .register_type::<Foo>()
        .config(SerializerConfig {
            skip_null_members: true,
            ..Default::default()
        })
        .build();

    let value = serializer.serialize(&Foo::default()).unwrap();
    assert!(value.get("date").is_none());
    assert!(value.get("baz").is_some());

    let back = serializer.deserialize_as::<Foo>(&value).unwrap();
    assert_reflect_eq(&back, &Foo::default());
}

// -----------------------------------------------------------------------------
// Deserialization

#[test]
fn deserialize_tagged_composite_object() {
    let foo = build_serializer()
        .deserialize("test_assets::Foo", &full_foo_value())
        .unwrap();

    assert!(foo.is::<Foo>());
    assert_reflect_eq(foo.as_ref(), &full_foo());
}

#[test]
fn deserialize_null_collection() {
    let serializer = build_serializer();

    for data in [Value::Null, Value::Map(BTreeMap::new())] {
        let bars = serializer
            .deserialize_as::<BarCollection>(&data)
            .unwrap();
        assert!(bars.0.is_empty(), "{data}");
    }
}

#[test]
fn deserialize_empty_date() {
    let data = map([("date", Value::Null)]);
    let foo = build_serializer().deserialize_as::<Foo>(&data).unwrap();
    assert_reflect_eq(&foo, &Foo::default());
}

#[test]
fn deserialize_untagged_nested_objects() {
    let data = map([
        ("foo", map([("foo", Value::from("foo"))])),
        ("bar", map([("foo", Value::from("bar"))])),
    ]);

    let object = build_serializer()
        .deserialize_as::<WithOtherNamespace>(&data)
        .unwrap();
    assert_eq!(
        object,
        WithOtherNamespace {
            foo: InOtherNamespace { foo: "foo".into() },
            bar: InOtherNamespace { foo: "bar".into() },
        }
    );
}

#[test]
fn missing_fields_keep_their_default() {
    let data = map([("bar", Value::from("only"))]);
    let subject = build_serializer().deserialize_as::<Subject>(&data).unwrap();
    assert_eq!(
        subject,
        Subject {
            bar: "only".into(),
            ..Default::default()
        }
    );
}

#[test]
fn unknown_keys_are_ignored() {
    let data = map([
        ("foo", Value::from("foo")),
        ("unexpected", Value::from(1_i32)),
    ]);
    let subject = build_serializer().deserialize_as::<Subject>(&data).unwrap();
    assert_eq!(subject.foo, "foo");
}

#[test]
fn tagged_member_must_fit_its_field() {
    let serializer = build_serializer();

    let tagged_bar = map([("bar", bar_value("x"))]);
    let holder = serializer.deserialize_as::<Holder>(&tagged_bar).unwrap();
    assert_eq!(holder.bar.foobar, "x");

    let tagged_baz = map([("bar", baz_value("x"))]);
    let err = serializer.deserialize_as::<Holder>(&tagged_baz).unwrap_err();
    assert_eq!(
        err,
        SerialError::Mismatch {
            expected: "test_assets::Bar".into(),
            found: "test_assets::Baz".into(),
        }
    );
}

#[test]
fn boxed_slots_require_a_tag() {
    let serializer = build_serializer();

    let untagged = map([("items", Value::List(vec![map([("foobar", Value::from("x"))])]))]);
    let err = serializer
        .deserialize_as::<BarCollection>(&untagged)
        .unwrap_err();
    assert!(matches!(err, SerialError::Reflection { .. }), "{err}");

    let unknown = map([(
        "items",
        Value::List(vec![map([("__type", Value::from("test_assets::Missing"))])]),
    )]);
    let err = serializer
        .deserialize_as::<BarCollection>(&unknown)
        .unwrap_err();
    assert!(matches!(err, SerialError::Reflection { .. }), "{err}");
}

#[test]
fn bare_list_is_accepted_as_items() {
    let data = Value::List(vec![bar_value("a"), bar_value("b")]);
    let bars = build_serializer()
        .deserialize_as::<BarCollection>(&data)
        .unwrap();

    let names: Vec<&str> = bars
        .0
        .iter()
        .filter_map(|slot| slot.get().downcast_ref::<Bar>())
        .map(|bar| bar.foobar.as_str())
        .collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn shape_errors() {
    let serializer = build_serializer();

    let err = serializer
        .deserialize_as::<Subject>(&Value::from("foo"))
        .unwrap_err();
    assert!(matches!(err, SerialError::Mismatch { .. }), "{err}");

    let bad_date = map([("date", Value::from("yesterday"))]);
    let err = serializer.deserialize_as::<Foo>(&bad_date).unwrap_err();
    assert!(matches!(err, SerialError::Format { .. }), "{err}");
}

#[test]
fn string_keyed_maps() {
    let serializer = build_serializer();

    let mut catalog = Catalog::default();
    catalog.entries.insert("first".into(), Bar::new("a"));
    catalog.entries.insert("second".into(), Bar::new("b"));

    let value = serializer.serialize(&catalog).unwrap();
    let expected = map([
        (
            "entries",
            map([("first", bar_value("a")), ("second", bar_value("b"))]),
        ),
        ("__type", Value::from("test_assets::Catalog")),
    ]);
    assert_eq!(value, expected);

    // Map values are read against the declared value type, tagged or not.
    let untagged = map([(
        "entries",
        map([("only", map([("foobar", Value::from("c"))]))]),
    )]);
    let back = serializer.deserialize_as::<Catalog>(&untagged).unwrap();
    assert_eq!(back.entries.len(), 1);
    assert_eq!(back.entries["only"].foobar, "c");
}

// -----------------------------------------------------------------------------
// Configuration and strategies

#[test]
fn configured_keys() {
    let serializer = Serializer::builder()
        .register_type::<Foo>()
        .register_type::<Bar>()
        .config(SerializerConfig {
            type_key: "@type".into(),
            items_key: "entries".into(),
            ..Default::default()
        })
        .build();

    let foo = Foo {
        bars: BarCollection(vec![ReflectBox::new(Bar::new("x"))]),
        ..Default::default()
    };
    let value = serializer.serialize(&foo).unwrap();

    assert_eq!(value.type_tag("@type"), Some("test_assets::Foo"));
    assert!(value.get("__type").is_none());
    let bars = value.get("bars").unwrap();
    assert_eq!(bars.get("entries").and_then(Value::as_list).map(<[_]>::len), Some(1));

    let back = serializer.deserialize_as::<Foo>(&value).unwrap();
    assert_reflect_eq(&back, &foo);
}

#[test]
fn fields_must_not_shadow_the_type_key() {
    let serializer = Serializer::builder()
        .register_type::<Kinded>()
        .config(SerializerConfig {
            type_key: "kind".into(),
            ..Default::default()
        })
        .build();
    let kinded = Kinded { kind: "a".into() };

    let err = serializer.serialize(&kinded).unwrap_err();
    assert!(matches!(err, SerialError::Reflection { .. }), "{err}");

    let data = map([("kind", Value::from("a"))]);
    let err = serializer.deserialize_as::<Kinded>(&data).unwrap_err();
    assert!(matches!(err, SerialError::Reflection { .. }), "{err}");

    // Any other key leaves the field alone.
    let value = build_serializer().serialize(&kinded).unwrap();
    assert_eq!(value.get("kind"), Some(&Value::from("a")));
}

/// Writes a [`Bar`] as its upper-cased content.
#[derive(Debug)]
struct ShoutingBar;

impl Strategy for ShoutingBar {
    fn to_value(&self, value: &dyn Reflect, _: &Serializer) -> Result<Value> {
        let bar = value
            .downcast_ref::<Bar>()
            .ok_or_else(|| SerialError::mismatch("test_assets::Bar", value.reflect_type_path()))?;
        Ok(Value::from(bar.foobar.to_uppercase()))
    }

    fn from_value(&self, data: &Value, _: &Serializer) -> Result<Box<dyn Reflect>> {
        let text = data
            .as_str()
            .ok_or_else(|| SerialError::mismatch("string", data.kind_name()))?;
        Ok(Box::new(Bar::new(&text.to_lowercase())))
    }
}

#[test]
fn custom_strategy_replaces_reflection() {
    let serializer = Serializer::builder()
        .register_type::<Holder>()
        .strategy::<Bar>(ShoutingBar)
        .build();

    let holder = Holder { bar: Bar::new("quiet") };
    let value = serializer.serialize(&holder).unwrap();
    assert_eq!(value.get("bar"), Some(&Value::from("QUIET")));

    let back = serializer.deserialize_as::<Holder>(&value).unwrap();
    assert_eq!(back.bar.foobar, "quiet");
}

#[test]
fn resolution_is_cached() {
    let serializer = build_serializer();
    let first = serializer.resolve("test_assets::Subject").unwrap();
    let second = serializer.resolve("test_assets::Subject").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn shared_across_threads() {
    let serializer = build_serializer();
    let expected = full_foo_value();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let value = serializer.serialize(&full_foo()).unwrap();
                assert_eq!(value, expected);
            });
        }
    });
}

// -----------------------------------------------------------------------------
// Formats

#[test]
fn json_round_trip() {
    let serializer = build_serializer();

    let json = serde_json::to_string(&serializer.serialize(&full_foo()).unwrap()).unwrap();
    assert!(json.contains(r#""__type":"test_assets::Foo""#), "{json}");
    assert!(json.contains(r#""date":"2015-01-01 12:00:00""#), "{json}");

    let value: Value = serde_json::from_str(&json).unwrap();
    let back = serializer.deserialize_as::<Foo>(&value).unwrap();
    assert_reflect_eq(&back, &full_foo());
}

#[test]
fn ron_round_trip() {
    let serializer = build_serializer();
    let subject = Subject {
        foo: "a".into(),
        bar: "b".into(),
        baz: "c".into(),
    };

    let text = ron::to_string(&serializer.serialize(&subject).unwrap()).unwrap();
    let value: Value = ron::from_str(&text).unwrap();
    assert_eq!(serializer.deserialize_as::<Subject>(&value).unwrap(), subject);
}

proptest! {
    #[test]
    fn ledger_round_trip(
        title in ".*",
        counts in prop::collection::btree_map("[a-z]{1,8}", any::<u32>(), 0..6),
        tags in prop::collection::vec("[a-z]{0,6}", 0..6),
        limit in any::<Option<i64>>(),
    ) {
        let serializer = build_serializer();
        let ledger = Ledger { title, counts, tags, limit };

        let value = serializer.serialize(&ledger).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&parsed, &value);

        let back = serializer.deserialize_as::<Ledger>(&parsed).unwrap();
        prop_assert_eq!(back, ledger);
    }

    #[test]
    fn subject_round_trip(foo in ".*", bar in ".*", baz in "\\PC*") {
        let serializer = build_serializer();
        let subject = Subject { foo, bar, baz };

        let value = serializer.serialize(&subject).unwrap();
        prop_assert_eq!(value.get("foo").and_then(Value::as_str), Some(subject.foo.as_str()));
        let back = serializer.deserialize_as::<Subject>(&value).unwrap();
        prop_assert_eq!(back, subject);
    }
}

#[test]
fn registered_type_paths() {
    let serializer = build_serializer();
    let types = serializer.type_registry().read();
    for path in ["test_assets::Foo", "test_assets::Baz", "test_assets::BarCollection"] {
        assert!(types.get_with_type_path(path).is_some(), "{path}");
    }
    assert!(!serializer.locator().registry().type_paths().any(|p| p == "test_assets::Foo"));
}
