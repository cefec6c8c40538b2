//! Device parameter comparison.
//!
//! `properties` is a list of `[[deviceA, paramsA], [deviceB, paramsB]]`
//! pairs; parameters are compared slot by slot.

use crate::classify::{as_slice, non_empty, str_at, CircuitContext};
use crate::model::{DiffEntry, DiffSubtype, DiffType};
use serde_json::Value;

/// Marks a parameter slot that has no counterpart on that side
pub const NO_MATCHING_PARAMETER: &str = "(no matching parameter)";
/// Rendered value of an absent parameter
pub const MISSING_VALUE: &str = "(missing)";
const UNKNOWN_PARAMETER: &str = "unknown";

/// Emit one PropertyMismatch per parameter slot whose values differ.
pub fn classify_properties(properties: &Value, ctx: &CircuitContext<'_>) -> Vec<DiffEntry> {
    let mut diffs = Vec::new();

    for pair in as_slice(properties) {
        let [device_a, device_b, ..] = as_slice(pair) else {
            continue;
        };
        let (device_a, device_b) = (as_slice(device_a), as_slice(device_b));
        if device_a.len() < 2 || device_b.len() < 2 {
            continue;
        }

        let device = non_empty(str_at(device_a, 0)).unwrap_or(str_at(device_b, 0));
        let params_a = as_slice(&device_a[1]);
        let params_b = as_slice(&device_b[1]);

        for slot in 0..params_a.len().max(params_b.len()) {
            let param_a = params_a.get(slot).map(as_slice).unwrap_or_default();
            let param_b = params_b.get(slot).map(as_slice).unwrap_or_default();

            let value_a = param_value(param_a);
            let value_b = param_value(param_b);
            if value_a == value_b {
                continue;
            }

            let param = param_name(str_at(param_a, 0), str_at(param_b, 0));
            diffs.push(ctx.entry(
                DiffType::PropertyMismatch,
                DiffSubtype::MissingParameter,
                device,
                format!("{}: {} vs {}", param, value_a, value_b),
            ));
        }
    }

    diffs
}

/// Displayed parameter name for one slot.
///
/// When exactly one side is the no-match sentinel the other side names the
/// parameter; otherwise A is preferred over B.
fn param_name<'a>(name_a: &'a str, name_b: &'a str) -> &'a str {
    let absent_a = name_a.contains(NO_MATCHING_PARAMETER);
    let absent_b = name_b.contains(NO_MATCHING_PARAMETER);
    let resolved = match (absent_a, absent_b) {
        (true, false) => non_empty(name_b),
        (false, true) => non_empty(name_a),
        _ => non_empty(name_a).or(non_empty(name_b)),
    };
    resolved.unwrap_or(UNKNOWN_PARAMETER)
}

/// Textual value of a `[name, value]` parameter.
fn param_value(param: &[Value]) -> String {
    match param.get(1) {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> CircuitContext<'static> {
        CircuitContext::new(0, "bufferA.spice", "bufferB.spice")
    }

    #[test]
    fn test_equal_values_emit_nothing() {
        let props = json!([[["m1", [["w", "1u"], ["l", "0.15u"]]], ["m1", [["w", "1u"], ["l", "0.15u"]]]]]);
        assert!(classify_properties(&props, &ctx()).is_empty());
    }

    #[test]
    fn test_value_mismatch_details() {
        let props = json!([[["m1", [["w", "1u"]]], ["m1", [["w", "2u"]]]]]);
        let diffs = classify_properties(&props, &ctx());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].diff_type(), DiffType::PropertyMismatch);
        assert_eq!(diffs[0].subtype(), DiffSubtype::MissingParameter);
        assert_eq!(diffs[0].name(), "m1");
        assert_eq!(diffs[0].details(), "w: 1u vs 2u");
        assert_eq!(diffs[0].layout_cell(), "bufferA.spice");
    }

    #[test]
    fn test_sentinel_side_takes_other_name() {
        let props = json!([[
            ["m1", [["(no matching parameter)", "x"]]],
            ["m1", [["nf", "2"]]]
        ]]);
        let diffs = classify_properties(&props, &ctx());
        assert_eq!(diffs[0].details(), "nf: x vs 2");
    }

    #[test]
    fn test_shorter_side_renders_missing() {
        let props = json!([[["", [["w", "1u"], ["m", "2"]]], ["m7", [["w", "1u"]]]]]);
        let diffs = classify_properties(&props, &ctx());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].name(), "m7");
        assert_eq!(diffs[0].details(), "m: 2 vs (missing)");
    }

    #[test]
    fn test_numeric_values_use_json_text() {
        let props = json!([[["m1", [["nf", 2], ["w", true]]], ["m1", [["nf", "(no value)"], ["w", true]]]]]);
        let diffs = classify_properties(&props, &ctx());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].details(), "nf: 2 vs (no value)");
    }

    #[test]
    fn test_null_and_absent_values_render_missing() {
        let props = json!([[["m1", [["w", null], ["l"]]], ["m1", [["w", false], ["l", 1.5]]]]]);
        let diffs = classify_properties(&props, &ctx());
        let details: Vec<_> = diffs.iter().map(|d| d.details()).collect();
        assert_eq!(details, vec!["w: (missing) vs false", "l: (missing) vs 1.5"]);
    }

    #[test]
    fn test_short_pairs_are_skipped() {
        let props = json!([[["m1", []]], [["m1"], ["m1", []]], "junk"]);
        assert!(classify_properties(&props, &ctx()).is_empty());
    }

    #[test]
    fn test_param_name_fallbacks() {
        assert_eq!(param_name("", "l"), "l");
        assert_eq!(param_name("", ""), "unknown");
        assert_eq!(
            param_name("(no matching parameter)", "(no matching parameter)"),
            "(no matching parameter)"
        );
    }
}
