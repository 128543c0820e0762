use std::cmp::Ordering;

use crate::{
    catalog::{CatalogError, Schema},
    datum::{Datum, Tuple},
    eval::EvalError,
    planner::SortSpec,
};

static NULL: Datum = Datum::Null;

/// Orders tuples of one schema by a list of sort keys.
#[derive(Debug, Clone)]
pub struct TupleComparator {
    keys: Vec<(usize, SortSpec)>,
}

impl TupleComparator {
    pub fn new(schema: &Schema, sort_keys: &[SortSpec]) -> Result<Self, CatalogError> {
        let keys = sort_keys
            .iter()
            .map(|spec| {
                let name = spec.column.qualified_name();
                schema
                    .column_index(&name)
                    .map(|idx| (idx, spec.clone()))
                    .ok_or(CatalogError::UnknownColumn(name))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { keys })
    }

    pub fn sort_keys(&self) -> impl Iterator<Item = &SortSpec> {
        self.keys.iter().map(|(_, spec)| spec)
    }

    /// Compares key by key. Nulls go first or last per key regardless of
    /// direction; values missing from a short tuple count as nulls.
    pub fn compare(&self, a: &Tuple, b: &Tuple) -> Result<Ordering, EvalError> {
        for (idx, spec) in &self.keys {
            let left = a.get(*idx).unwrap_or(&NULL);
            let right = b.get(*idx).unwrap_or(&NULL);
            let ord = match (left.is_null(), right.is_null()) {
                (true, true) => Ordering::Equal,
                (true, false) if spec.null_first => Ordering::Less,
                (true, false) => Ordering::Greater,
                (false, true) if spec.null_first => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let ord = left.compare_to(right)?;
                    if spec.ascending { ord } else { ord.reverse() }
                }
            };
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Sorts `tuples` in place. Every key is checked for values that cannot
    /// be ordered against each other before anything moves, so an error
    /// leaves the slice untouched.
    pub fn sort(&self, tuples: &mut [Tuple]) -> Result<(), EvalError> {
        self.check_comparable(tuples)?;
        tuples.sort_by(|a, b| self.compare(a, b).unwrap_or(Ordering::Equal));
        Ok(())
    }

    /// Comparability is an equivalence over datum kinds, so matching every
    /// non-null value against the first one of its key covers all pairs.
    fn check_comparable(&self, tuples: &[Tuple]) -> Result<(), EvalError> {
        for (idx, _) in &self.keys {
            let mut values = tuples.iter().filter_map(|t| t.get(*idx)).filter(|d| !d.is_null());
            if let Some(first) = values.next() {
                first.compare_to(first)?;
                for value in values {
                    value.compare_to(first)?;
                }
            }
        }
        Ok(())
    }
}
