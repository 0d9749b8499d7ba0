//! Default member/index access over [`Value`]s.
//!
//! Once the first step of a request has picked a field, the remaining
//! steps walk into its value:
//!
//! - `Member` into [`Value::Struct`]
//! - `Index` into [`Value::List`]
//! - `CellIndex` into [`Value::Cell`]
//!
//! Indices are zero-based. A read with several indices returns a
//! collection of the same kind holding the selected elements. A write must
//! address exactly one element; writing at `len` appends.

use dynprops_core::{AccessError, IndexMap, Step, Value};

/// Read the value addressed by `steps` inside `value`.
pub fn read(value: &Value, steps: &[Step]) -> Result<Value, AccessError> {
    let Some((step, rest)) = steps.split_first() else {
        return Ok(value.clone());
    };

    match (step, value) {
        (Step::Member(name), Value::Struct(fields)) => {
            let field = fields
                .get(name)
                .ok_or_else(|| AccessError::NoSuchField { name: name.clone() })?;
            read(field, rest)
        }
        (Step::Index(indices), Value::List(items)) => select(items, indices, rest, Value::List),
        (Step::CellIndex(indices), Value::Cell(items)) => select(items, indices, rest, Value::Cell),
        (step, other) => Err(not_indexable(step, other)),
    }
}

/// Replace the value addressed by `steps` inside `target` with `value`.
///
/// Missing intermediate structure is created: a member step on
/// [`Value::Empty`] makes a struct, an index step makes a list or cell.
/// On error `target` may be partially modified; callers that need
/// all-or-nothing semantics write into a copy.
pub fn write(target: &mut Value, steps: &[Step], value: Value) -> Result<(), AccessError> {
    let Some((step, rest)) = steps.split_first() else {
        *target = value;
        return Ok(());
    };

    if target.is_empty() {
        *target = match step {
            Step::Member(_) => Value::Struct(IndexMap::new()),
            Step::Index(_) => Value::List(Vec::new()),
            Step::CellIndex(_) => Value::Cell(Vec::new()),
        };
    }

    match (step, target) {
        (Step::Member(name), Value::Struct(fields)) => {
            let field = fields.entry(name.clone()).or_default();
            write(field, rest, value)
        }
        (Step::Index(indices), Value::List(items))
        | (Step::CellIndex(indices), Value::Cell(items)) => {
            write_element(items, indices, rest, value)
        }
        (step, other) => Err(not_indexable(step, other)),
    }
}

fn select(
    items: &[Value],
    indices: &[usize],
    rest: &[Step],
    wrap: fn(Vec<Value>) -> Value,
) -> Result<Value, AccessError> {
    if let [index] = indices {
        return read(element(items, *index)?, rest);
    }
    indices
        .iter()
        .map(|&index| element(items, index).and_then(|item| read(item, rest)))
        .collect::<Result<Vec<_>, _>>()
        .map(wrap)
}

fn element(items: &[Value], index: usize) -> Result<&Value, AccessError> {
    items.get(index).ok_or(AccessError::IndexOutOfBounds {
        index,
        len: items.len(),
    })
}

fn write_element(
    items: &mut Vec<Value>,
    indices: &[usize],
    rest: &[Step],
    value: Value,
) -> Result<(), AccessError> {
    let &[index] = indices else {
        return Err(AccessError::IndexArity {
            count: indices.len(),
        });
    };

    let len = items.len();
    if index == len {
        let mut fresh = Value::Empty;
        write(&mut fresh, rest, value)?;
        items.push(fresh);
        return Ok(());
    }

    let item = items
        .get_mut(index)
        .ok_or(AccessError::IndexOutOfBounds { index, len })?;
    write(item, rest, value)
}

fn not_indexable(step: &Step, found: &Value) -> AccessError {
    AccessError::NotIndexable {
        step: step.kind(),
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynprops_core::{StepKind, Subscript};

    fn steps(request: Subscript) -> Vec<Step> {
        request.into_steps()
    }

    fn sample() -> Value {
        Value::record([
            ("xs", Value::from_iter([Value::Int(10), Value::Int(20), Value::Int(30)])),
            ("c", Value::cell([Value::from("a"), Value::record([("k", true)])])),
        ])
    }

    #[test]
    fn empty_path_reads_whole_value() {
        assert_eq!(read(&Value::Int(3), &[]).unwrap(), Value::Int(3));
    }

    #[test]
    fn nested_reads() {
        let v = sample();
        assert_eq!(read(&v, &steps(Subscript::member("xs").index(1))).unwrap(), Value::Int(20));
        assert_eq!(
            read(&v, &steps(Subscript::member("c").cell(1).dot("k"))).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn multi_index_read_keeps_collection_kind() {
        let v = sample();
        let request = [Step::Member("xs".into()), Step::Index(vec![2, 0])];
        assert_eq!(
            read(&v, &request).unwrap(),
            Value::List(vec![Value::Int(30), Value::Int(10)])
        );
        let request = [Step::Member("c".into()), Step::CellIndex(vec![0, 0])];
        assert_eq!(read(&v, &request).unwrap(), Value::cell(["a", "a"]));
    }

    #[test]
    fn read_errors() {
        let v = sample();
        assert_eq!(
            read(&v, &steps(Subscript::member("xs").index(3))),
            Err(AccessError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            read(&v, &steps(Subscript::member("missing"))),
            Err(AccessError::NoSuchField {
                name: "missing".into()
            })
        );
        assert_eq!(
            read(&v, &steps(Subscript::member("xs").cell(0))),
            Err(AccessError::NotIndexable {
                step: StepKind::CellIndex,
                found: "list"
            })
        );
    }

    #[test]
    fn write_creates_structure() {
        let mut v = Value::Empty;
        write(&mut v, &steps(Subscript::member("a").index(0)), Value::Int(1)).unwrap();
        assert_eq!(v, Value::record([("a", Value::from_iter([Value::Int(1)]))]));
    }

    #[test]
    fn write_appends_at_len_only() {
        let mut v = Value::from_iter([Value::Int(1)]);
        write(&mut v, &[Step::Index(vec![1])], Value::Int(2)).unwrap();
        assert_eq!(v, Value::from_iter([Value::Int(1), Value::Int(2)]));
        assert_eq!(
            write(&mut v, &[Step::Index(vec![5])], Value::Int(9)),
            Err(AccessError::IndexOutOfBounds { index: 5, len: 2 })
        );
    }

    #[test]
    fn write_requires_single_index() {
        let mut v = Value::from_iter([Value::Int(1), Value::Int(2)]);
        assert_eq!(
            write(&mut v, &[Step::Index(vec![0, 1])], Value::Int(0)),
            Err(AccessError::IndexArity { count: 2 })
        );
    }

    #[test]
    fn write_into_scalar_fails() {
        let mut v = Value::Int(4);
        assert_eq!(
            write(&mut v, &steps(Subscript::member("x")), Value::Int(0)),
            Err(AccessError::NotIndexable {
                step: StepKind::Member,
                found: "int"
            })
        );
    }
}
