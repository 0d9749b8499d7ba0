mod common;

use common::{Sensor, sensor};
use dynprops::{
    AccessError, DYNAMIC_STORE_FIELD, Dynamic, Step, StepKind, Subscript, Value, addprop,
    subs_added, subsasgn, subsref,
};

// ============================================================================
// Round trips through the interceptor
// ============================================================================

#[test]
fn field1_scenario() {
    let obj = sensor();
    addprop(&obj, "field1").unwrap();
    obj.set("field1", 42).unwrap();
    assert_eq!(obj.get("field1").unwrap(), Value::Int(42));

    let rewritten = subs_added(&obj, "field1");
    assert_eq!(
        rewritten.steps(),
        &[
            Step::Member(DYNAMIC_STORE_FIELD.into()),
            Step::Member("field1".into())
        ]
    );
}

#[test]
fn static_fields_bypass_the_store() {
    let obj = sensor();
    addprop(&obj, "extra").unwrap();

    assert_eq!(subs_added(&obj, "label"), Subscript::member("label"));
    assert_eq!(obj.get("label").unwrap(), Value::from("gauge"));

    obj.set("reading", 4.0).unwrap();
    assert_eq!(obj.with(|s| s.reading), 4.0);

    // Ints widen into float fields.
    obj.set("reading", 3).unwrap();
    assert_eq!(obj.get("reading").unwrap(), Value::Float(3.0));
}

#[test]
fn typed_side_is_shared() {
    let obj = sensor();
    obj.with_mut(|s| s.label = "renamed".into());
    assert_eq!(obj.get("label").unwrap(), Value::from("renamed"));
    assert_eq!(obj.with(Sensor::clone), Sensor::new("renamed", 0.5));
}

#[test]
fn static_type_mismatch() {
    let obj = sensor();
    assert_eq!(
        obj.set("label", 1),
        Err(AccessError::TypeMismatch {
            field: "label".into(),
            expected: "String",
            found: "int"
        })
    );
    assert_eq!(obj.get("label").unwrap(), Value::from("gauge"));
}

#[test]
fn unknown_names_fail_unchanged() {
    let obj = sensor();
    let missing = AccessError::NoSuchField {
        name: "nope".into(),
    };
    assert_eq!(obj.get("nope"), Err(missing.clone()));

    // A populated store does not change the error.
    addprop(&obj, "other").unwrap();
    assert_eq!(obj.get("nope"), Err(missing));
}

#[test]
fn empty_request() {
    let obj = sensor();
    assert_eq!(subsref(&obj, Subscript::new()), Err(AccessError::EmptyRequest));
    assert_eq!(
        subsasgn(&obj, Subscript::new(), 1).unwrap_err(),
        AccessError::EmptyRequest
    );
}

#[test]
fn leading_index_on_object() {
    let obj = sensor();
    addprop(&obj, "xs").unwrap();
    assert_eq!(
        subsref(&obj, Step::CellIndex(vec![0])),
        Err(AccessError::NotIndexable {
            step: StepKind::CellIndex,
            found: "object"
        })
    );
}

// ============================================================================
// Nested paths
// ============================================================================

#[test]
fn nested_dynamic_paths() {
    let obj = sensor();
    addprop(&obj, "data").unwrap();

    subsasgn(&obj, Subscript::member("data").dot("samples").index(0), 1).unwrap();
    subsasgn(&obj, Subscript::member("data").dot("samples").index(1), 2).unwrap();
    subsasgn(&obj, Subscript::member("data").dot("tags").cell(0), "raw").unwrap();

    assert_eq!(
        subsref(&obj, Subscript::member("data").dot("samples").index(1)).unwrap(),
        Value::Int(2)
    );
    assert_eq!(
        subsref(&obj, Subscript::member("data").dot("tags")).unwrap(),
        Value::cell(["raw"])
    );
    assert_eq!(
        subsref(
            &obj,
            vec![
                Step::Member("data".into()),
                Step::Member("samples".into()),
                Step::Index(vec![1, 0]),
            ]
        )
        .unwrap(),
        Value::from(vec![Value::Int(2), Value::Int(1)])
    );
}

#[test]
fn nested_static_path_writes_back() {
    #[derive(Default)]
    struct Doc {
        meta: Value,
    }

    impl dynprops::Fields for Doc {
        const FIELD_NAMES: &'static [&'static str] = &["meta"];

        fn get_field(&self, name: &str) -> Option<Value> {
            (name == "meta").then(|| self.meta.clone())
        }

        fn set_field(&mut self, name: &str, value: Value) -> Result<(), AccessError> {
            if name != "meta" {
                return Err(AccessError::NoSuchField { name: name.into() });
            }
            self.meta = value;
            Ok(())
        }
    }

    let doc = Dynamic::new(Doc::default());
    subsasgn(&doc, Subscript::member("meta").dot("author"), "ada").unwrap();
    assert_eq!(
        doc.with(|d| d.meta.clone()),
        Value::record([("author", "ada")])
    );
}

#[test]
fn out_of_range_write_commits_nothing() {
    let obj = sensor();
    addprop(&obj, "xs").unwrap();
    obj.set("xs", vec![Value::Int(1)]).unwrap();

    let err = subsasgn(&obj, Subscript::member("xs").index(5), 9).unwrap_err();
    assert_eq!(err, AccessError::IndexOutOfBounds { index: 5, len: 1 });
    assert_eq!(obj.get("xs").unwrap(), Value::from(vec![Value::Int(1)]));

    let err = subsasgn(&obj, vec![Step::Member("xs".into()), Step::Index(vec![0, 1])], 0);
    assert_eq!(err.unwrap_err(), AccessError::IndexArity { count: 2 });
}

#[test]
fn indexing_a_scalar() {
    let obj = sensor();
    addprop(&obj, "n").unwrap();
    obj.set("n", 5).unwrap();
    assert_eq!(
        subsref(&obj, Subscript::member("n").dot("x")),
        Err(AccessError::NotIndexable {
            step: StepKind::Member,
            found: "int"
        })
    );
}

// ============================================================================
// Aliasing and the store itself
// ============================================================================

#[test]
fn aliases_share_one_store() {
    let a = sensor();
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(a.id(), b.id());

    addprop(&a, "shared").unwrap();
    assert!(b.is_dynamic("shared"));

    b.set("shared", "via b").unwrap();
    assert_eq!(a.get("shared").unwrap(), Value::from("via b"));

    let returned = subsasgn(&a, "shared", 1).unwrap();
    assert!(returned.ptr_eq(&a));
}

#[test]
fn separate_instances_do_not_share() {
    let a = Dynamic::new(Sensor::default());
    let b = Dynamic::new(Sensor::default());
    assert!(!a.ptr_eq(&b));
    addprop(&a, "only_a").unwrap();
    assert!(!b.is_prop("only_a"));
}

#[test]
fn store_is_readable_but_not_assignable() {
    let obj = sensor();
    addprop(&obj, "a").unwrap();
    addprop(&obj, "b").unwrap();
    obj.set("b", true).unwrap();

    assert_eq!(
        obj.get(DYNAMIC_STORE_FIELD).unwrap(),
        Value::record([("a", Value::Empty), ("b", Value::Bool(true))])
    );
    assert_eq!(
        subsasgn(&obj, DYNAMIC_STORE_FIELD, Value::Empty).unwrap_err(),
        AccessError::ReadOnly {
            name: DYNAMIC_STORE_FIELD.into()
        }
    );

    // Explicitly addressed store paths work without rewriting.
    subsasgn(&obj, Subscript::member(DYNAMIC_STORE_FIELD).dot("a"), 3).unwrap();
    assert_eq!(obj.get("a").unwrap(), Value::Int(3));
}
