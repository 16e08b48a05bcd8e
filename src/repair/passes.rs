//! The individual rewrite passes of the repair pipeline.
//!
//! Each pass recognizes one historical identifier shape and rewrites every occurrence of it
//! into the current grammar, wherever in the identifier it appears (a legacy type can hide in
//! a type argument, a parameter or a delegate signature). Passes operate on raw strings and
//! never parse: they must work on identifiers the grammar would reject.
//!
//! Every pass leaves identifiers that are already in the current format untouched.

use std::sync::LazyLock;

use log::{trace, warn};
use regex::Regex;

use crate::{
    naming::types::PredefinedKind,
    repair::{fixes::MANUAL_TYPE_PARAMETER_FIXES, RepairConfig},
    utils::scanner::{find_next, matching_close, matching_open},
    Error, Result,
};

/// Signature shared by all passes
pub type PassFn = fn(&str, &RepairConfig) -> Result<String>;

/// A named step of the repair pipeline
pub struct RepairPass {
    /// Name used in logs and in [`Error::LegacyFormat`]
    pub name: &'static str,
    /// Selects whether the pass runs for a configuration
    pub enabled: fn(&RepairConfig) -> bool,
    /// The rewrite
    pub apply: PassFn,
}

/// The general pipeline, in execution order.
///
/// Hoisting of legacy type-parameter lists runs before missing-arity repair: the former
/// relies on segments without tick not having a list yet.
pub static PIPELINE: [RepairPass; 7] = [
    RepairPass {
        name: "predefined-types",
        enabled: |c| c.fix_predefined_types,
        apply: fix_predefined_types,
    },
    RepairPass {
        name: "nullable",
        enabled: |c| c.fix_nullable,
        apply: fix_nullable,
    },
    RepairPass {
        name: "type-parameter-lists",
        enabled: |c| c.fix_type_parameter_lists,
        apply: fix_type_parameter_lists,
    },
    RepairPass {
        name: "delegates",
        enabled: |c| c.fix_delegates,
        apply: fix_delegates,
    },
    RepairPass {
        name: "missing-arity",
        enabled: |c| c.fix_missing_arity,
        apply: fix_missing_arity,
    },
    RepairPass {
        name: "jagged-arrays",
        enabled: |c| c.fix_jagged_arrays,
        apply: fix_jagged_arrays,
    },
    RepairPass {
        name: "property-parens",
        enabled: |c| c.fix_property_parens,
        apply: fix_property_parens,
    },
];

static PREDEFINED_TYPES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:[se]:)?System\.(Boolean|Byte|Char|Decimal|Double|Int16|Int32|Int64|Object|SByte|Single|String|UInt16|UInt32|UInt64|Void)((?:\[,*\])?),\smscorlib,\s\d\.\d\.\d\.\d",
    )
    .expect("predefined type regex should compile")
});

static LEGACY_NULLABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^:])System\.Nullable`1\[").expect("nullable regex should compile")
});

// The trailing class is required: without it the tick count would match lazily.
static IS_LEGACY_TYPE_PARAMETER_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^+.]+`([0-9]+))[^0-9\[]").expect("legacy list regex should compile")
});

static ALL_LEGACY_TYPE_PARAMETER_LISTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^+.]+`([0-9]+))[^0-9]").expect("legacy list regex should compile")
});

static LEGACY_DELEGATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"d:[^\[]").expect("delegate regex should compile"));

static MISSING_ARITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+|^|\.)([a-zA-Z0-9_]+)((?:\[,*\])?)(\[\[.*)")
        .expect("arity regex should compile")
});

static JAGGED_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[,*\](?:\[,*\])+").expect("jagged array regex should compile")
});

static MISSING_PROPERTY_PARENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:get|set) .*[^)]$").expect("property regex should compile")
});

/// Leaves an identifier the pass cannot repair untouched, or fails in strict mode.
fn give_up(pass: &'static str, id: &str, reason: &str, config: &RepairConfig) -> Result<String> {
    if config.strict {
        return Err(Error::LegacyFormat {
            pass,
            identifier: id.to_string(),
        });
    }
    warn!("{}: {}, leaving '{}' unchanged", pass, reason, id);
    Ok(id.to_string())
}

fn rewritten(pass: &'static str, before: &str, after: String) -> String {
    if before != after {
        trace!("{}: '{}' -> '{}'", pass, before, after);
    }
    after
}

/// Rewrites predefined types that were captured as regular `mscorlib` types.
///
/// `System.Int32, mscorlib, 4.0.0.0` becomes `p:int`, `System.String[], mscorlib, 4.0.0.0`
/// becomes `p:string[]`. Any version is accepted.
///
/// # Errors
/// Never fails.
pub fn fix_predefined_types(id: &str, _config: &RepairConfig) -> Result<String> {
    let mut fixed = id.to_string();
    for caps in PREDEFINED_TYPES.captures_iter(id) {
        let Some(kind) = PredefinedKind::from_full_name(&format!("System.{}", &caps[1])) else {
            continue;
        };
        let replacement = format!("p:{}{}", kind.alias(), &caps[2]);
        fixed = fixed.replace(&caps[0], &replacement);
    }
    Ok(rewritten("predefined-types", id, fixed))
}

/// Tags ``System.Nullable`1`` as a struct type where the `s:` prefix is missing.
///
/// # Errors
/// Never fails.
pub fn fix_nullable(id: &str, _config: &RepairConfig) -> Result<String> {
    const NULLABLE: &str = "System.Nullable`1";

    if !LEGACY_NULLABLE.is_match(id) {
        return Ok(id.to_string());
    }

    let mut fixed = String::with_capacity(id.len() + 4);
    let mut last = 0;
    for (idx, _) in id.match_indices(NULLABLE) {
        fixed.push_str(&id[last..idx]);
        if !id[..idx].ends_with(':') {
            fixed.push_str("s:");
        }
        fixed.push_str(NULLABLE);
        last = idx + NULLABLE.len();
    }
    fixed.push_str(&id[last..]);

    Ok(rewritten("nullable", id, fixed))
}

fn is_no_legacy_type_parameter_list(id: &str) -> bool {
    id.starts_with("vsWindowTypeDocument ")
        || id.starts_with("CSharp ")
        || id.ends_with(".cs")
        || !IS_LEGACY_TYPE_PARAMETER_LIST.is_match(id)
}

/// Collects the `[...]` groups of the list spanning `open..=close`.
fn list_entries(id: &str, open: usize, close: usize) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut cur = open + 1;
    while cur < close {
        let Some(entry_open) = find_next(id, cur, b"[]") else {
            break;
        };
        if id.as_bytes()[entry_open] == b']' {
            break;
        }
        let Some(entry_close) = matching_close(id, entry_open) else {
            break;
        };
        entries.push(&id[entry_open + 1..entry_close]);
        cur = entry_close + 1;
    }
    entries
}

/// Distributes a single trailing type-argument list over the tick-marked segments.
///
/// Identifiers used to carry arity markers on every nesting segment but only one list of
/// arguments at the very end: ``n.T1`1+T2`1[[G1],[G2]], P``. The arguments are handed out in
/// order, each marked segment taking as many as its marker says, giving
/// ``n.T1`1[[G1]]+T2`1[[G2]], P``. A handful of historical identifiers that carried markers
/// without any list are rewritten from a fixed catalog first.
///
/// # Errors
/// Returns [`Error::LegacyFormat`] in strict mode if the identifier has markers but no list.
pub fn fix_type_parameter_lists(id: &str, config: &RepairConfig) -> Result<String> {
    const PASS: &str = "type-parameter-lists";

    if is_no_legacy_type_parameter_list(id) {
        return Ok(id.to_string());
    }

    let mut fixed = id.to_string();
    for (invalid, valid) in MANUAL_TYPE_PARAMETER_FIXES {
        fixed = fixed.replace(invalid, valid);
    }
    if is_no_legacy_type_parameter_list(&fixed) {
        return Ok(rewritten(PASS, id, fixed));
    }

    let Some(end) = fixed.rfind("]]") else {
        return give_up(PASS, &fixed, "tick marker without type parameters", config);
    };
    // outer bracket
    let end = end + 1;
    let Some(start) = matching_open(&fixed, end) else {
        return give_up(PASS, &fixed, "unbalanced type parameter list", config);
    };

    let parameters = list_entries(&fixed, start, end);
    let mut before = fixed[..start].to_string();
    let after = &fixed[end + 1..];

    let mut taken = 0usize;
    for caps in ALL_LEGACY_TYPE_PARAMETER_LISTS.captures_iter(&fixed) {
        let hit = &caps[1];
        let count: usize = caps[2].parse().unwrap_or(0);

        let mut list = String::from("[");
        let until = taken + count;
        while taken < until && taken < parameters.len() {
            if !list.ends_with('[') {
                list.push(',');
            }
            list.push('[');
            list.push_str(parameters[taken]);
            list.push(']');
            taken += 1;
        }
        list.push(']');

        before = before.replace(hit, &format!("{}{}", hit, list));
    }

    let result = before + after;
    Ok(rewritten(PASS, id, result))
}

/// Expands delegates that were stored as bare type names, `d:n.D, P`, into delegate
/// signatures with unknown return type and no parameters, `d:[?] [n.D, P].()`.
///
/// # Errors
/// Returns [`Error::LegacyFormat`] in strict mode if the rewrite does not converge within
/// [`RepairConfig::max_rewrites`] steps.
pub fn fix_delegates(id: &str, config: &RepairConfig) -> Result<String> {
    const PASS: &str = "delegates";

    let mut fixed = id.to_string();
    for _ in 0..config.max_rewrites {
        let Some(hit) = LEGACY_DELEGATE.find(&fixed) else {
            return Ok(rewritten(PASS, id, fixed));
        };
        let start = hit.start();
        let end = find_next(&fixed, start, b"]").unwrap_or(fixed.len());
        let old_type = &fixed[start + 2..end];
        let needle = format!("d:{}", old_type);
        let replacement = format!("d:[?] [{}].()", old_type);
        fixed = fixed.replace(&needle, &replacement);
    }

    if LEGACY_DELEGATE.is_match(&fixed) {
        return give_up(PASS, id, "rewrite limit reached", config);
    }
    Ok(rewritten(PASS, id, fixed))
}

/// Counts the groups of the type-argument list `rest` starts with.
fn count_list_entries(rest: &str) -> Option<usize> {
    let end = matching_close(rest, 0)?;
    let mut count = 0;
    let mut cur = 1;
    while cur < end {
        count += 1;
        let entry_open = find_next(rest, cur, b"[")?;
        let entry_close = matching_close(rest, entry_open)?;
        cur = find_next(rest, entry_close + 1, b",]")?;
    }
    Some(count)
}

/// Inserts the arity marker in front of type-argument lists that lack one.
///
/// ``C2[[T2],[T3]]`` becomes ``C2`2[[T2],[T3]]``; an array marker between name and list
/// stays behind the inserted arity: ``C2`1[,][[T2]]``.
///
/// # Errors
/// Returns [`Error::LegacyFormat`] in strict mode if a list is unbalanced or the rewrite does
/// not converge within [`RepairConfig::max_rewrites`] steps.
pub fn fix_missing_arity(id: &str, config: &RepairConfig) -> Result<String> {
    const PASS: &str = "missing-arity";

    let mut fixed = id.to_string();
    for _ in 0..config.max_rewrites {
        let Some(caps) = MISSING_ARITY.captures(&fixed) else {
            return Ok(rewritten(PASS, id, fixed));
        };
        let name = &caps[1];
        let array = &caps[2];
        let Some(count) = count_list_entries(&caps[3]) else {
            return give_up(PASS, &fixed, "unbalanced type parameter list", config);
        };

        let needle = format!("{}{}[[", name, array);
        let replacement = format!("{}`{}{}[[", name, count, array);
        fixed = fixed.replace(&needle, &replacement);
    }

    if MISSING_ARITY.is_match(&fixed) {
        return give_up(PASS, id, "rewrite limit reached", config);
    }
    Ok(rewritten(PASS, id, fixed))
}

/// Collapses jagged array markers into one marker of the summed rank, `A[][,]` becomes `A[,,]`.
///
/// # Errors
/// Never fails.
pub fn fix_jagged_arrays(id: &str, _config: &RepairConfig) -> Result<String> {
    let mut fixed = id.to_string();
    for hit in JAGGED_ARRAY.find_iter(id) {
        let jagged = hit.as_str();
        let rank = jagged.bytes().filter(|b| *b == b'[' || *b == b',').count();
        let marker = format!("[{}]", ",".repeat(rank - 1));
        fixed = fixed.replace(jagged, &marker);
    }
    Ok(rewritten("jagged-arrays", id, fixed))
}

/// Appends the empty parameter list to accessor-prefixed properties that lack one.
///
/// # Errors
/// Never fails.
pub fn fix_property_parens(id: &str, _config: &RepairConfig) -> Result<String> {
    if MISSING_PROPERTY_PARENS.is_match(id) {
        return Ok(rewritten("property-parens", id, format!("{}()", id)));
    }
    Ok(id.to_string())
}
