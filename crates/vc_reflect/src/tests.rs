//! Tests of the derive macros, which cannot be tested inside the proc-macro crate.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use crate::derive::{Reflect, TypePath};
use crate::info::{ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{FromScalar, List, ReflectMut, ReflectRef, ScalarValue, Struct};
use crate::registry::{TypeRegistry, TypeTraitDefault};
use crate::{Reflect, ReflectBox};

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(type_path = "app::model::Foo", default, partial_eq, debug)]
struct Foo {
    name: String,
    count: u32,
}

#[derive(Reflect, Default)]
#[reflect(default)]
struct Marker;

#[derive(Reflect, Default)]
#[reflect(type_path = "app::model::Items", list, default)]
struct Items(Vec<ReflectBox>);

#[derive(Reflect, Default)]
#[reflect(default)]
struct Page<T> {
    items: Vec<T>,
    total: Option<u64>,
}

#[derive(Reflect, Default)]
#[reflect(default)]
struct Pair<A, B>
where
    A: Clone,
{
    first: A,
    second: Option<B>,
}

#[derive(Reflect, Default)]
#[reflect(default)]
struct WithSkip {
    kept: i32,
    #[reflect(skip)]
    cache: Vec<u8>,
}

#[derive(Reflect, Clone, Copy, Default, PartialEq, Debug)]
#[reflect(type_path = "app::model::Level", opaque, default, partial_eq)]
enum Level {
    #[default]
    Low,
    High,
}

#[derive(Reflect, Default)]
#[reflect(type_path = "app::model::Registered", default, auto_register)]
struct Registered {
    id: u64,
}

#[derive(TypePath)]
#[reflect(type_path = "app::Tagged")]
#[expect(dead_code, reason = "only the type path is used")]
struct Tagged<T>(T);

#[test]
fn struct_type_path() {
    assert_eq!(Foo::type_path(), "app::model::Foo");
    assert_eq!(Foo::type_name(), "Foo");
    assert_eq!(Foo::type_ident(), "Foo");
    assert_eq!(Foo::module_path(), Some("app::model"));

    // Without `type_path` the module path of the definition is used.
    assert_eq!(Marker::type_path(), "vc_reflect::tests::Marker");
    assert_eq!(Marker::module_path(), Some("vc_reflect::tests"));
}

#[test]
fn generic_type_path() {
    assert_eq!(<Page<u8>>::type_path(), "vc_reflect::tests::Page<u8>");
    assert_eq!(<Page<u8>>::type_name(), "Page<u8>");
    assert_eq!(<Page<String>>::type_path(), "vc_reflect::tests::Page<alloc::string::String>");
    assert_eq!(<Page<String>>::type_name(), "Page<String>");
    assert_eq!(<Page<u8>>::type_ident(), "Page");

    assert_eq!(<Tagged<Foo>>::type_path(), "app::Tagged<app::model::Foo>");
    assert_eq!(<Tagged<Foo>>::type_name(), "Tagged<Foo>");
}

#[test]
fn struct_type_info() {
    let info = Foo::type_info().as_struct().unwrap();
    assert_eq!(info.field_len(), 2);
    assert_eq!(info.field_at(0).unwrap().name(), "name");
    assert_eq!(info.field_at(1).unwrap().name(), "count");
    assert!(info.field("count").unwrap().type_is::<u32>());
    assert!(info.field("missing").is_none());

    let unit = Marker::type_info().as_struct().unwrap();
    assert_eq!(unit.field_len(), 0);

    let page = <Page<bool>>::type_info().as_struct().unwrap();
    assert_eq!(page.field("items").unwrap().type_info().kind(), ReflectKind::List);
    assert_eq!(page.field("total").unwrap().type_info().kind(), ReflectKind::Optional);
}

#[test]
fn struct_access() {
    let mut foo = Foo {
        name: "a".to_string(),
        count: 1,
    };

    assert_eq!(foo.reflect_kind(), ReflectKind::Struct);
    assert_eq!(foo.name_at(1), Some("count"));
    assert!(foo.field_at(2).is_none());
    assert_eq!(Struct::field_len(&foo), 2);

    let view = foo.as_reflect().reflect_ref().as_struct().unwrap();
    let names: Vec<&str> = view.fields().map(|(name, _)| name).collect();
    assert_eq!(names, ["name", "count"]);

    let ReflectMut::Struct(s) = foo.reflect_mut() else {
        panic!("expected a struct");
    };
    s.field_mut("count").unwrap().set(Box::new(5_u32)).unwrap();
    let rejected = s.field_mut("name").unwrap().set(Box::new(5_u32)).unwrap_err();
    assert!(rejected.is::<u32>());

    assert_eq!(foo.count, 5);
    assert_eq!(foo.name, "a");
}

#[test]
fn skipped_fields_are_invisible() {
    let value = WithSkip {
        kept: 3,
        cache: vec![1, 2],
    };

    assert_eq!(WithSkip::type_info().as_struct().unwrap().field_len(), 1);
    assert_eq!(Struct::field_len(&value), 1);
    assert!(value.field("cache").is_none());
    assert_eq!(value.field("kept").unwrap().downcast_ref::<i32>(), Some(&3));
    assert_eq!(value.cache.len(), 2);
}

#[test]
fn list_newtype() {
    let TypeInfo::List(info) = Items::type_info() else {
        panic!("expected a list");
    };
    assert!(info.ty().is::<Items>());
    assert!(info.item_ty().is::<ReflectBox>());

    let mut items = Items::default();
    items.push_reflect(Box::new(ReflectBox::new(1_i32))).unwrap();
    // Elements must already be wrapped in their slot type.
    assert!(items.push_reflect(Box::new(2_u8)).is_err());

    assert_eq!(items.reflect_kind(), ReflectKind::List);
    assert_eq!(List::len(&items), 1);
    let ReflectRef::Dynamic(first) = items.get(0).unwrap().reflect_ref() else {
        panic!("expected a dynamic slot");
    };
    assert_eq!(first.get().downcast_ref::<i32>(), Some(&1));

    items.clear();
    assert!(List::is_empty(&items));
}

#[test]
fn opaque_enum() {
    let level = Level::High;
    assert_eq!(Level::type_path(), "app::model::Level");
    assert_eq!(level.reflect_kind(), ReflectKind::Opaque);
    assert!(matches!(Level::type_info(), TypeInfo::Opaque(_)));

    assert_eq!(level.reflect_partial_eq(&Level::High), Some(true));
    assert_eq!(level.reflect_partial_eq(&Level::Low), Some(false));
    assert_eq!(level.reflect_partial_eq(&1_u8), Some(false));
}

#[test]
fn partial_eq_and_debug() {
    let a = Foo {
        name: "x".to_string(),
        count: 2,
    };
    let b = Foo {
        name: "x".to_string(),
        count: 2,
    };
    assert_eq!(a.reflect_partial_eq(&b), Some(true));
    assert_eq!(format!("{:?}", a.as_reflect()), format!("{a:?}"));

    // Field-wise comparison without `partial_eq`.
    let p = Page::<u8> {
        items: vec![1, 2],
        total: Some(2),
    };
    let q = Page::<u8> {
        items: vec![1, 2],
        total: None,
    };
    assert_eq!(p.reflect_partial_eq(&p), Some(true));
    assert_eq!(p.reflect_partial_eq(&q), Some(false));

    let debug = format!("{:?}", p.as_reflect());
    assert!(debug.starts_with("Page<u8> {"), "{debug}");
}

#[test]
fn registry_builds_defaults() {
    let mut registry = TypeRegistry::new();
    registry.register::<Page<Foo>>();

    // Dependencies are registered along with the type.
    assert!(registry.get_with_type_path("app::model::Foo").is_some());
    assert!(registry.get_with_type_path("alloc::vec::Vec<app::model::Foo>").is_some());

    let meta = registry
        .get_with_type_path("vc_reflect::tests::Page<app::model::Foo>")
        .unwrap();
    let value = meta.get_trait::<TypeTraitDefault>().unwrap().default();
    let page = value.take::<Page<Foo>>().unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, None);
}

#[test]
fn generic_defaults_follow_parameters() {
    let mut registry = TypeRegistry::new();
    registry.register::<Pair<u8, String>>();

    let meta = registry
        .get_with_type_path("vc_reflect::tests::Pair<u8, alloc::string::String>")
        .unwrap();
    let pair = meta
        .get_trait::<TypeTraitDefault>()
        .unwrap()
        .default()
        .take::<Pair<u8, String>>()
        .unwrap();
    assert_eq!(pair.first, 0);
    assert!(pair.second.is_none());
}

#[test]
fn auto_register_collects_marked_types() {
    let mut registry = TypeRegistry::empty();
    if registry.auto_register() {
        assert!(registry.get_with_type_path("app::model::Registered").is_some());
        assert!(registry.contains(core::any::TypeId::of::<String>()));
    }
    assert!(registry.get_with_type_path("app::model::Foo").is_none());
}

#[test]
fn integer_scalars_fit_or_fail() {
    for v in [i64::MIN, -1, 0, 200, 255, 256, i64::from(i32::MAX) + 1, i64::MAX] {
        let parsed = u8::from_scalar(ScalarValue::Int(v));
        assert_eq!(parsed.is_some(), (0..=255).contains(&v), "{v}");

        let info = i32::type_info().as_scalar().unwrap();
        let boxed = info.parse(ScalarValue::Int(v));
        assert_eq!(boxed.is_some(), i32::try_from(v).is_ok(), "{v}");
    }
}

#[test]
fn string_scalar_keeps_content() {
    for s in ["", "plain", "üñí €", "line\nbreak"] {
        let value: Box<dyn Reflect> = Box::new(s.to_string());
        let ReflectRef::Scalar(scalar) = value.reflect_ref() else {
            panic!("expected a scalar");
        };
        assert_eq!(String::from_scalar(scalar.as_scalar()).as_deref(), Some(s));
    }
}
