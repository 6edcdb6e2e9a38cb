// SPDX-License-Identifier: Apache-2.0

use serde_json::Value;

/// Walk `desire` and `current` and return the path of the first difference
/// together with both sides of it.
///
/// * A property missing on one side only equals `null` on the other side.
/// * Arrays need the same length and are compared regardless of order.
/// * Numbers and strings are compared by their textual form, so `1`, `1.0`
///   and `"1"` are identical. Booleans only equal booleans.
pub(crate) fn get_json_value_difference<'a, 'b>(
    reference: String,
    desire: &'a Value,
    current: &'b Value,
) -> Option<(String, &'a Value, &'b Value)> {
    match (desire, current) {
        (Value::Null, Value::Null) => None,
        (Value::Array(des), Value::Array(cur)) => {
            if des.len() != cur.len() {
                return Some((reference, desire, current));
            }
            let mut matched = vec![false; cur.len()];
            for (index, des_element) in des.iter().enumerate() {
                let partner = cur.iter().enumerate().position(|(i, c)| {
                    !matched[i]
                        && get_json_value_difference(
                            String::new(),
                            des_element,
                            c,
                        )
                        .is_none()
                });
                match partner {
                    Some(i) => matched[i] = true,
                    None => {
                        return Some((
                            format!("{}[{}]", &reference, index),
                            des_element,
                            &Value::Null,
                        ))
                    }
                }
            }
            None
        }
        (Value::Object(des), Value::Object(cur)) => {
            for (key, des_value) in des.iter() {
                let reference = format!("{}.{}", reference, key);
                if let Some(cur_value) = cur.get(key) {
                    if let Some(difference) = get_json_value_difference(
                        reference.clone(),
                        des_value,
                        cur_value,
                    ) {
                        return Some(difference);
                    }
                } else if des_value != &Value::Null {
                    return Some((reference, des_value, &Value::Null));
                }
            }
            for (key, cur_value) in cur.iter() {
                if !des.contains_key(key) && cur_value != &Value::Null {
                    return Some((
                        format!("{}.{}", reference, key),
                        &Value::Null,
                        cur_value,
                    ));
                }
            }
            None
        }
        (Value::Bool(des), Value::Bool(cur)) => {
            if des != cur {
                Some((reference, desire, current))
            } else {
                None
            }
        }
        (Value::Number(_) | Value::String(_), _)
            if current.is_number() || current.is_string() =>
        {
            if standardize(desire) != standardize(current) {
                Some((reference, desire, current))
            } else {
                None
            }
        }
        (_, _) => Some((reference, desire, current)),
    }
}

/// Whether two resources are the same for the purpose of deciding between
/// update and no-op.
pub(crate) fn is_same_resource(desire: &Value, current: &Value) -> bool {
    match get_json_value_difference(String::new(), desire, current) {
        Some((reference, des, cur)) => {
            log::debug!(
                "Resource differs at {reference}, desired: {des}, \
                current: {cur}"
            );
            false
        }
        None => true,
    }
}

fn standardize(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => {
            if n.is_f64() {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => {
                        format!("{f:.0}")
                    }
                    _ => n.to_string(),
                }
            } else {
                n.to_string()
            }
        }
        _ => value.to_string(),
    }
}
