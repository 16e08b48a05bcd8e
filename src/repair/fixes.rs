//! Fixed catalogs of historical identifiers.
//!
//! Some identifiers were written in shapes no general rule can repair: nested types of
//! generic types with arity markers but no argument list at all, and a few method
//! identifiers that an earlier, broken repair produced. They are rewritten verbatim.

use std::sync::LazyLock;

use regex::Regex;

/// Nested types of generic types that were stored without any type-argument list.
pub(crate) const MANUAL_TYPE_PARAMETER_FIXES: [(&str, &str); 12] = [
    (
        "s:System.Data.Entity.Core.Metadata.Edm.ReadOnlyMetadataCollection`1+Enumerator, EntityFramework, 6.0.0.0",
        "s:System.Data.Entity.Core.Metadata.Edm.ReadOnlyMetadataCollection`1[[T]]+Enumerator, EntityFramework, 6.0.0.0",
    ),
    (
        "System.Collections.Generic.Dictionary`2+KeyCollection, mscorlib, 4.0.0.0",
        "System.Collections.Generic.Dictionary`2[[TKey],[TValue]]+KeyCollection, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.Generic.Dictionary`2+ValueCollection, mscorlib, 4.0.0.0",
        "System.Collections.Generic.Dictionary`2[[TKey],[TValue]]+ValueCollection, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.ObjectModel.ReadOnlyDictionary`2+KeyCollection, mscorlib, 4.0.0.0",
        "System.Collections.ObjectModel.ReadOnlyDictionary`2[[TKey],[TValue]]+KeyCollection, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.ObjectModel.ReadOnlyDictionary`2+ValueCollection, mscorlib, 4.0.0.0",
        "System.Collections.ObjectModel.ReadOnlyDictionary`2[[TKey],[TValue]]+ValueCollection, mscorlib, 4.0.0.0",
    ),
    (
        "s:System.Collections.Generic.Dictionary`2+Enumerator, mscorlib, 4.0.0.0",
        "s:System.Collections.Generic.Dictionary`2[[TKey],[TValue]]+Enumerator, mscorlib, 4.0.0.0",
    ),
    (
        "s:System.Collections.Immutable.ImmutableArray`1+Enumerator, System.Collections.Immutable, 1.1.37.0",
        "s:System.Collections.Immutable.ImmutableArray`1[[T]]+Enumerator, System.Collections.Immutable, 1.1.37.0",
    ),
    (
        "d:[TValue] [System.Runtime.CompilerServices.ConditionalWeakTable`2+CreateValueCallback, mscorlib, 4.0.0.0].([TKey] key)",
        "d:[TValue] [System.Runtime.CompilerServices.ConditionalWeakTable`2[[TKey],[TValue]]+CreateValueCallback, mscorlib, 4.0.0.0].([TKey] key)",
    ),
    (
        "s:System.Collections.Generic.List`1+Enumerator, mscorlib, 4.0.0.0",
        "s:System.Collections.Generic.List`1[[T]]+Enumerator, mscorlib, 4.0.0.0",
    ),
    (
        "System.Collections.Generic.List`1+SynchronizedList, mscorlib, 4.0.0.0",
        "System.Collections.Generic.List`1[[T]]+SynchronizedList, mscorlib, 4.0.0.0",
    ),
    (
        "s:System.Collections.Generic.LinkedList`1+Enumerator, System, 4.0.0.0",
        "s:System.Collections.Generic.LinkedList`1[[T]]+Enumerator, System, 4.0.0.0",
    ),
    (
        "System.Collections.Generic.SortedDictionary`2+KeyCollection, System, 4.0.0.0",
        "System.Collections.Generic.SortedDictionary`2[[TKey],[TValue]]+KeyCollection, System, 4.0.0.0",
    ),
];

/// Serialization prefix of method names
pub const PREFIX_METHOD: &str = "0M";
/// Serialization prefix of property names
pub const PREFIX_PROPERTY: &str = "0P";
/// Long serialization prefix of property names
pub const PREFIX_PROPERTY_LONG: &str = "CSharp.PropertyName";

const BROKEN_FUNC_CTOR: &str = "[d:[TResult] [System.Func`10[[T9]][[TResult],[System.Func`10[[T9]][[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8],[T9],[TResult]], System.Core, 4.0.0.0],[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8]][[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8],[T9],[TResult]], System.Core, 4.0.0.0].([T1] arg1, [T2] arg2, [T3] arg3, [T4] arg4, [T5] arg5, [T6] arg6, [T7] arg7, [T8] arg8, [T9] arg9)] ..ctor()";

const FUNC_DELEGATE: &str = "d:[TResult] [System.Func`10[[T1],[T2],[T3],[T4],[T5],[T6],[T7],[T8],[T9],[TResult]], System.Core, 4.0.0.0].([T1] arg1, [T2] arg2, [T3] arg3, [T4] arg4, [T5] arg5, [T6] arg6, [T7] arg7, [T8] arg8, [T9] arg9))";

const BROKEN_ENUMERATOR: &str =
    "[s:System.Collections.Generic.List`1[][[[T -> T]]]+Enumerator, mscorlib, 4.0.0.0] .GetEnumerator()";

const FIXED_ENUMERATOR: &str = "[s:System.Collections.Generic.List`1[[T -> T]]+Enumerator, mscorlib, 4.0.0.0] [System.Collections.Generic.List`1[[T -> T]], mscorlib, 4.0.0.0].GetEnumerator()";

const BROKEN_VOID_CTOR: &str = "[p:void] ..ctor()";

const UNKNOWN_PROPERTY: &str = "[?] [?].???";

static WITHOUT_ACCESSORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(static)?\s*\[").expect("accessor regex should compile")
});

/// Applies the fixes selected by a serialization prefix.
///
/// `0M` replaces the known broken method identifiers; `0P` and `CSharp.PropertyName` give
/// properties that were serialized without accessors both a setter and a getter. Any other
/// prefix leaves the identifier unchanged.
#[must_use]
pub fn fix_prefixed(id: &str, prefix: &str) -> String {
    let id = fix_broken_methods(id, prefix);
    fix_properties_without_accessors(&id, prefix)
}

fn fix_broken_methods(id: &str, prefix: &str) -> String {
    if prefix != PREFIX_METHOD {
        return id.to_string();
    }
    match id {
        BROKEN_FUNC_CTOR => format!("[{0}] [{0}]..ctor()", FUNC_DELEGATE),
        BROKEN_ENUMERATOR => FIXED_ENUMERATOR.to_string(),
        BROKEN_VOID_CTOR => "[?] [?].???()".to_string(),
        _ => id.to_string(),
    }
}

fn fix_properties_without_accessors(id: &str, prefix: &str) -> String {
    if prefix != PREFIX_PROPERTY && prefix != PREFIX_PROPERTY_LONG {
        return id.to_string();
    }
    if id == UNKNOWN_PROPERTY {
        return id.to_string();
    }
    let Some(caps) = WITHOUT_ACCESSORS.captures(id) else {
        return id.to_string();
    };
    let modifier = if caps.get(1).is_some() { "static " } else { "" };
    match id.find('[') {
        Some(open) => format!("set get {}{}", modifier, &id[open..]),
        None => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_methods() {
        assert_eq!(fix_prefixed(BROKEN_VOID_CTOR, "0M"), "[?] [?].???()");
        assert_eq!(fix_prefixed(BROKEN_ENUMERATOR, "0M"), FIXED_ENUMERATOR);
        assert_eq!(
            fix_prefixed(BROKEN_FUNC_CTOR, "0M"),
            format!("[{0}] [{0}]..ctor()", FUNC_DELEGATE)
        );
    }

    #[test]
    fn test_broken_methods_need_prefix() {
        assert_eq!(fix_prefixed(BROKEN_VOID_CTOR, "0F"), BROKEN_VOID_CTOR);
        assert_eq!(fix_prefixed(BROKEN_VOID_CTOR, ""), BROKEN_VOID_CTOR);
        // under 0P any id opening with a type gets accessors
        assert_eq!(
            fix_prefixed(BROKEN_VOID_CTOR, "0P"),
            format!("set get {}", BROKEN_VOID_CTOR)
        );
    }

    #[test]
    fn test_properties_without_accessors() {
        for prefix in ["0P", "CSharp.PropertyName"] {
            assert_eq!(fix_prefixed("[?] [?].P", prefix), "set get [?] [?].P");
            assert_eq!(fix_prefixed(" [?] [?].P", prefix), "set get [?] [?].P");
            assert_eq!(
                fix_prefixed("  static  [?] [?].P", prefix),
                "set get static [?] [?].P"
            );
            assert_eq!(fix_prefixed("[?] [?].???", prefix), "[?] [?].???");
            assert_eq!(fix_prefixed("get [?] [?].P()", prefix), "get [?] [?].P()");
        }
    }

    #[test]
    fn test_manual_catalog_is_consistent() {
        for (invalid, valid) in MANUAL_TYPE_PARAMETER_FIXES {
            assert_ne!(invalid, valid);
            assert!(valid.contains("[["));
            assert!(!invalid.contains("[[T"));
        }
    }
}
