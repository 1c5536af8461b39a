//! Flat string-keyed mappings, as used for interpreter environments.

use std::collections::HashMap;

/// A flat mapping from names to values.
pub type Dict<V> = HashMap<String, V>;

/// Create a shallow copy of a flat mapping.
///
/// The copy owns its own table: inserting, removing or replacing a top-level
/// entry in one mapping never affects the other. Values are duplicated with
/// [`Clone`], so values that are themselves shared handles (such as `Rc<T>`)
/// keep pointing at the same data.
///
/// # Examples
///
/// ```
/// use dbn_utils::dict::{shallow_copy, Dict};
///
/// let mut env: Dict<i32> = Dict::new();
/// env.insert("x".to_string(), 10);
///
/// let mut copy = shallow_copy(&env);
/// copy.insert("x".to_string(), 20);
///
/// assert_eq!(env["x"], 10);
/// assert_eq!(copy["x"], 20);
/// ```
pub fn shallow_copy<V: Clone>(dict: &Dict<V>) -> Dict<V> {
    let mut copy = Dict::with_capacity(dict.len());
    copy.extend(dict.iter().map(|(key, value)| (key.clone(), value.clone())));
    copy
}
