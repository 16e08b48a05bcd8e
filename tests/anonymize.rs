//! Integration tests for anonymization against reference digests.
//!
//! The expected identifiers contain literal digests, so these tests pin the complete chain:
//! repair, parsing, the anonymization rules, the hash encoding and re-serialization.

use dotnames::prelude::*;

/// Asserts that anonymizing `original` of `kind` yields exactly `expected`.
fn assert_anonymized(kind: NameKind, original: &str, expected: &str) {
    let actual = AnyName::parse(kind, original).anonymize();
    assert_eq!(actual.identifier(), expected, "anonymizing {}", original);
    assert_eq!(actual.kind(), kind);
    assert!(!actual.is_unknown(), "{} became unknown", original);
}

#[test]
fn test_hashing_reference_vectors() {
    assert_eq!(to_hash("a"), "QUThlfRt54o2I9pzZNBPEQ==");
    assert_eq!(to_hash("MyProject"), "zRLpydQJBMrk8DCiP3BwEQ==");
    assert_eq!(to_hash(""), "");
    assert_eq!(dotnames::anonymize::hash(None), None);
}

#[test]
fn test_local_types_are_hashed() {
    let cases = [
        (
            "SomeType, MyProject",
            "5TEfRdZBhGQY3JybERVp-w==, zRLpydQJBMrk8DCiP3BwEQ==",
        ),
        (
            "My.Namespace.MyType, MyProject",
            "L5-7Qmufwl5lDD-ks5-QzQ==.T3GwyBT-NeFSuHH-NHnMzQ==, zRLpydQJBMrk8DCiP3BwEQ==",
        ),
        (
            "i:My.Interface, EnclosingProject",
            "i:S7JFQ1Qpzr6dQZksNAcR7A==.6e_eXMoTYXtpcGd2wrWE-A==, qfFVtSOtve-XEFJXWTbfXw==",
        ),
        (
            "e:My.Enum, EnclosingProject",
            "e:S7JFQ1Qpzr6dQZksNAcR7A==.klRY89gvVPCkpyaQ3MurVQ==, qfFVtSOtve-XEFJXWTbfXw==",
        ),
        (
            "s:My.Struct, EnclosingProject",
            "s:S7JFQ1Qpzr6dQZksNAcR7A==.Csl4y2WI7aP5CjXqBQ8QRQ==, qfFVtSOtve-XEFJXWTbfXw==",
        ),
        (
            "SomeType[], EnclosingProject",
            "5TEfRdZBhGQY3JybERVp-w==[], qfFVtSOtve-XEFJXWTbfXw==",
        ),
        (
            "MyTypeFromEnclosingProject`1[[T -> System.Int32, mscorlib, 4.0.0.0]], EnclosingProject",
            "yqUUbRFTqfCBIMxMRH-qDA==`1[[T -> p:int]], qfFVtSOtve-XEFJXWTbfXw==",
        ),
    ];
    for (original, expected) in cases {
        assert_anonymized(NameKind::Type, original, expected);
    }
}

#[test]
fn test_nesting_survives_anonymization() {
    let anonymous = parse_type("Outer+Intermediate+Inner, MyProject").anonymize();
    assert_eq!(
        anonymous.identifier(),
        "vWJW7HmayjJvbX16XC9VnQ==+471REvNW-WCCyW7mDRT4EA==+YDcvejSpfAK3U9T4L-U5Ng==, zRLpydQJBMrk8DCiP3BwEQ=="
    );

    let reparsed = parse_type(anonymous.identifier());
    assert!(reparsed.as_regular().is_some());
    assert!(reparsed.is_nested_type());
    assert_eq!(reparsed.name(), "YDcvejSpfAK3U9T4L-U5Ng==");
    assert_eq!(
        reparsed.declaring_type().unwrap().identifier(),
        "vWJW7HmayjJvbX16XC9VnQ==+471REvNW-WCCyW7mDRT4EA==, zRLpydQJBMrk8DCiP3BwEQ=="
    );
}

#[test]
fn test_external_types_keep_their_text() {
    for id in [
        "SomeType, MyProject, 1.2.3.4",
        "System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0",
        "n.C`1[[T -> p:int]],A, 1.2.3.4",
    ] {
        let t = parse_type(id);
        assert_eq!(t.anonymize().identifier(), id);
    }

    assert_anonymized(
        NameKind::Assembly,
        "SomeAssembly, 1.5.6.3",
        "SomeAssembly, 1.5.6.3",
    );
}

#[test]
fn test_type_arguments_of_external_types_are_anonymized() {
    assert_anonymized(
        NameKind::Type,
        "Some.Type`1[[T -> OtherType, A]], B, 1.2.3.4",
        "Some.Type`1[[T -> xJGI74kh-RBFid7-a1wFlg==, ghTRAD9op9mwNWwMvX7uGg==]], B, 1.2.3.4",
    );
    assert_anonymized(
        NameKind::Type,
        "Some.Type`3[[T -> MyType, A],[U -> System.Double, mscorlib, 4.0.0.0],[V -> MyOtherType, A]], B, 1.2.3.4",
        "Some.Type`3[[T -> Q-vTVCo_g8yayGGoDdH7BA==, ghTRAD9op9mwNWwMvX7uGg==],[U -> p:double],[V -> w20iwoM8jFvdUxBRQsKvhg==, ghTRAD9op9mwNWwMvX7uGg==]], B, 1.2.3.4",
    );
}

#[test]
fn test_type_parameter_bounds() {
    assert_anonymized(
        NameKind::Type,
        "TT -> AType, MyProject",
        "TT -> S8jqvjvDTBSSXY7BIBFNOQ==, zRLpydQJBMrk8DCiP3BwEQ==",
    );
    assert_anonymized(
        NameKind::Type,
        "TT -> TU -> TV -> AType, MyProject",
        "TT -> TU -> TV -> S8jqvjvDTBSSXY7BIBFNOQ==, zRLpydQJBMrk8DCiP3BwEQ==",
    );
}

#[test]
fn test_fields() {
    assert_anonymized(
        NameKind::Field,
        "[?] [?].field",
        "[?] [?].uH-HUtyKzOVVTdxGpUvTRg==",
    );
    assert_anonymized(
        NameKind::Field,
        "static [p:int] [AClass, AnAssembly, 1.2.3.4]._field",
        "static [p:int] [AClass, AnAssembly, 1.2.3.4]._field",
    );
    assert_anonymized(
        NameKind::Field,
        "[System.Int32, mscorlib, 4.0.0.0] [Class, Project]._field",
        "[p:int] [C30g7wWDiaLWDoT99aNK_Q==, Mxp53D4r1Kx8kPEM01ySAA==].gcnTNGyqNJv6QToYz_Vmbg==",
    );
    assert_anonymized(
        NameKind::Field,
        "[ValueType, EnclosingProject] [SomeType, SomeAssembly, 1.2.3.4]._field",
        "[K6-3xDZUlJ-Wew_p0xcfQg==, qfFVtSOtve-XEFJXWTbfXw==] [SomeType, SomeAssembly, 1.2.3.4]._field",
    );
}

#[test]
fn test_properties() {
    assert_anonymized(
        NameKind::Property,
        "set get static [p:int] [AClass, AnAssembly, 1.2.3.4].Property()",
        "set get static [p:int] [AClass, AnAssembly, 1.2.3.4].Property()",
    );
    assert_anonymized(
        NameKind::Property,
        "get [p:int] [Declarator, MyProject].Property",
        "get [p:int] [UFthX8igK4OWY-bjuPcWaA==, zRLpydQJBMrk8DCiP3BwEQ==].3_9-BEZu3bkEMnTfk5eHKw==()",
    );
    assert_anonymized(
        NameKind::Property,
        "set [PropType, AProject] [AType, AnAssembly, 6.5.4.3].Property()",
        "set [Mh2DRn_FRby9df2VWWFg4Q==, CD0OwIZmS7FL5zL5GiXZbg==] [AType, AnAssembly, 6.5.4.3].Property()",
    );
}

#[test]
fn test_events() {
    assert_anonymized(
        NameKind::Event,
        "static [ChangeEventHandler, Assembly, 6.3.5.2] [C, Foo, 9.1.2.3].Event",
        "static [ChangeEventHandler, Assembly, 6.3.5.2] [C, Foo, 9.1.2.3].Event",
    );
    assert_anonymized(
        NameKind::Event,
        "[ChangeEventHandler, Assembly, 6.3.5.2] [A, Foo].Event",
        "[ChangeEventHandler, Assembly, 6.3.5.2] [ghTRAD9op9mwNWwMvX7uGg==, sl_wrZDQnTlQkOiin_TGPA==].Ryz5fpCQs0Nwm_x0Vy4cQg==",
    );
    assert_anonymized(
        NameKind::Event,
        "[Handler, Project] [AType, AnAssembly, 6.5.4.3].Event",
        "[ooP_qY1chg4oTJoBIeq1_A==, Mxp53D4r1Kx8kPEM01ySAA==] [AType, AnAssembly, 6.5.4.3].Event",
    );
}

#[test]
fn test_parameters() {
    assert_anonymized(
        NameKind::Parameter,
        "out [ParamType, A, 1.2.3.4] parameter",
        "out [ParamType, A, 1.2.3.4] jaWpYMumKzk5dZafVWTD1A==",
    );
    for modifier in ["ref", "params", "opt"] {
        assert_anonymized(
            NameKind::Parameter,
            &format!("{} [p:int] name", modifier),
            &format!("{} [p:int] mT62IUL9_OAA7vtSkeTMzg==", modifier),
        );
    }
    assert_anonymized(
        NameKind::Parameter,
        "[Type, Project] name",
        "[aSO4V69Y4hQtcEQCnqsGww==, Mxp53D4r1Kx8kPEM01ySAA==] mT62IUL9_OAA7vtSkeTMzg==",
    );
}

#[test]
fn test_local_variables() {
    assert_anonymized(
        NameKind::LocalVariable,
        "[System.Int32, mscorlib, 4.0.0.0] variable",
        "[p:int] ex1ycJF4ixZdevwEdEfKcQ==",
    );
    assert_anonymized(
        NameKind::LocalVariable,
        "[ValueType, EnclosingProject] variable",
        "[K6-3xDZUlJ-Wew_p0xcfQg==, qfFVtSOtve-XEFJXWTbfXw==] ex1ycJF4ixZdevwEdEfKcQ==",
    );
}

#[test]
fn test_methods() {
    assert_anonymized(
        NameKind::Method,
        "[?] [?].method([?] arg)",
        "[?] [?].S2MqM0cJGKIdPyRb46oevg==([?] cjjZM6DVkmp283JnWfyH_A==)",
    );
    assert_anonymized(
        NameKind::Method,
        "[ReturnType, A, 1.2.3.4] [DeclaringType, EnclosingProject].M()",
        "[ReturnType, A, 1.2.3.4] [HTr1vZnVhe-8SY78vI2ffQ==, qfFVtSOtve-XEFJXWTbfXw==].lNSAgClcjc9lDeUkXybdNQ==()",
    );
    assert_anonymized(
        NameKind::Method,
        "[ReturnType, EP] [DT, A, 1.2.3.4].M()",
        "[a6Ix9ar6tahkEo1TOfBLwg==, vW8RYxLbF7t21szDOJMe_w==] [DT, A, 1.2.3.4].M()",
    );
    assert_anonymized(
        NameKind::Method,
        "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M`2[[T -> Foo, EP],[E -> Bar, A, 1.2.3.4]]()",
        "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M`2[[T -> sl_wrZDQnTlQkOiin_TGPA==, vW8RYxLbF7t21szDOJMe_w==],[E -> Bar, A, 1.2.3.4]]()",
    );
}

#[test]
fn test_parameter_names_of_external_methods_are_hashed() {
    assert_anonymized(
        NameKind::Method,
        "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M(out [PT, EP] param, [System.Int32, mscorlib, 1.2.3.4] i)",
        "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M(out [pEEvI7rARBUkjhWn3Z2_iA==, vW8RYxLbF7t21szDOJMe_w==] VXJVO3bbssiJPh7IxnsH9Q==, [p:int] I02GyMpYQW3zeQjZfIDckw==)",
    );
}

#[test]
fn test_end_to_end_method_scenario() {
    let original = parse_method(
        "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M(out [PT, Local] param, [RT2, A, 1.2.3.4] i)",
    );
    let anonymous = original.anonymize();
    assert_eq!(
        anonymous.identifier(),
        format!(
            "[RT, A, 1.2.3.4] [DT, A, 1.2.3.4].M(out [{}, {}] {}, [RT2, A, 1.2.3.4] {})",
            to_hash("PT"),
            to_hash("Local"),
            to_hash("param"),
            to_hash("i")
        )
    );

    let reparsed = parse_method(anonymous.identifier());
    assert_eq!(reparsed, anonymous);
    assert_eq!(reparsed.parameters().len(), original.parameters().len());
    assert_eq!(reparsed.type_parameters().len(), original.type_parameters().len());
    assert!(reparsed.parameters()[0].is_output());
    assert!(reparsed.is_hashed());
}

#[test]
fn test_ide_names() {
    assert_anonymized(
        NameKind::Document,
        "CSharp C:\\File.cs",
        "CSharp ixlmuLAuUg0yq59EtLWB7w==",
    );
    assert_anonymized(
        NameKind::Window,
        "vsSomeWindowType C:\\Contains\\File.Name",
        "vsSomeWindowType aVxPI-qHR-QO3bMv-Ker6w==",
    );
    assert_anonymized(
        NameKind::Window,
        "vsToolWindow Unit Test Sessions",
        "vsToolWindow Unit Test Sessions",
    );
    assert_anonymized(NameKind::Solution, "C:\\Solution.sln", "H_MB2iBprhCn9SyXdxnVNQ==");
    assert_anonymized(
        NameKind::Project,
        "Folder C:\\A\\B\\C",
        "Folder IklTG_YtPBAhWOIrB65I1Q==",
    );
    assert_anonymized(
        NameKind::ProjectItem,
        "CSharp C:\\A\\B\\Class.cs",
        "CSharp nmTd_-pgymTyNZrw5bGrpg==",
    );
    assert_anonymized(NameKind::Alias, "global", "rW1oPYChRX9JiYuIQBWjBQ==");
    assert_anonymized(
        NameKind::General,
        "some name that might or might not contain private information",
        "C5my9gXfmcktCtPzYR9MEQ==",
    );
}

#[test]
fn test_namespaces_and_assemblies() {
    assert_anonymized(
        NameKind::Namespace,
        "Some.Arbitrary.Namespace",
        "PU4V3sU7dhVQzcD16BGtuw==",
    );
    assert_anonymized(NameKind::Assembly, "MyProject", "zRLpydQJBMrk8DCiP3BwEQ==");
}

#[test]
fn test_unknown_names_stay_unknown() {
    for kind in [
        NameKind::Type,
        NameKind::Method,
        NameKind::Field,
        NameKind::Property,
        NameKind::Parameter,
        NameKind::LocalVariable,
    ] {
        let unknown = AnyName::parse(kind, "");
        assert!(unknown.is_unknown());
        assert_eq!(unknown.anonymize(), unknown);
    }
}

#[test]
fn test_anonymizing_twice_changes_the_digest() {
    let once = parse_type("SomeType, MyProject").anonymize();
    assert!(once.is_hashed());
    let twice = once.anonymize();
    assert_ne!(twice, once);
    assert!(twice.is_hashed());
}
