//! Integration tests for the flattening engine.
//!
//! These tests run whole packages through `flatdoc` over an in-memory
//! loader, covering resolution across module boundaries and every error
//! kind a run can produce.

use flatdoc::core::chain::ContextChain;
use flatdoc::core::manifest::{MemberKind, MemberManifest, ModuleManifest};
use flatdoc::core::reference::ReferencePath;
use flatdoc::engine::{flatdoc, flatdoc_with_options, resolve, FlattenError, FlattenOptions};
use flatdoc::loader::{ImportError, MemoryLoader, Namespace};

// =============================================================================
// Fixtures
// =============================================================================

/// A package `pkg` with a module `foo` documenting a class and a function,
/// and a sibling module `mod` reached from deep inside `foo`.
fn sample_package() -> MemoryLoader {
    MemoryLoader::new()
        .with_toml("pkg", r#"doc = "pkg\n\n!INCLUDE foo""#)
        .with_toml(
            "pkg.foo",
            r###"
doc = """
# Foo

This module does foo.

!INCLUDE Bar, func
"""

[members.Bar]
kind = "class"
doc = """
## Bar

!INCLUDE baz
"""

[members.Bar.members.baz]
kind = "method"
doc = """
### baz()

!INCLUDE ...mod
"""

[members.func]
kind = "function"
doc = "## func()"
"###,
        )
        .with_toml("pkg.mod", r#"doc = "mod""#)
}

/// Modules that each fail in one specific way.
fn failing_package() -> MemoryLoader {
    MemoryLoader::new()
        .with_toml("errors", r#"doc = "errors""#)
        .with_toml("errors.mod3", "")
        .with_toml(
            "errors.mod4",
            r###"
doc = "!INCLUDE f"

[members.f]
kind = "function"
"###,
        )
        .with_toml(
            "errors.mod5",
            r###"
doc = "!INCLUDE f."

[members.f]
kind = "function"
doc = "f"
"###,
        )
        .with_toml("errors.mod6", r#"doc = "!INCLUDE .f""#)
        .with_toml(
            "errors.mod7",
            r###"
doc = "!INCLUDE C.missing"

[members.C]
kind = "class"
doc = "C"
"###,
        )
        .with_toml("errors.mod8", r#"doc = "!INCLUDE nothere""#)
}

// =============================================================================
// Flattening
// =============================================================================

#[test]
fn flattens_package_across_modules() {
    let ns = Namespace::new(sample_package());

    let doc = flatdoc("pkg", &ns).unwrap();

    assert_eq!(
        doc,
        "pkg\n\n# Foo\n\nThis module does foo.\n\n## Bar\n\n### baz()\n\nmod\n\n## func()\n\n"
    );
}

#[test]
fn counts_every_splice() {
    let ns = Namespace::new(sample_package());

    let flattened = flatdoc_with_options("pkg", &ns, FlattenOptions::default()).unwrap();

    // foo, Bar, baz, mod, func
    assert_eq!(flattened.includes, 5);
}

#[test]
fn include_is_padded_with_blank_line() {
    let loader = MemoryLoader::new().with_module(
        "m",
        ModuleManifest::new("T\n\n!INCLUDE X")
            .with_member("X", MemberManifest::new(MemberKind::Function, "- X -")),
    );
    let ns = Namespace::new(loader);

    assert_eq!(flatdoc("m", &ns).unwrap(), "T\n\n- X -\n\n");
}

#[test]
fn members_are_never_imported_as_modules() {
    let loader = sample_package();
    let ns = Namespace::new(loader.clone());

    flatdoc("pkg", &ns).unwrap();

    assert_eq!(loader.requests(), vec!["pkg", "pkg.foo", "pkg.mod"]);
    assert_eq!(ns.loaded(), vec!["pkg", "pkg.foo", "pkg.mod"]);
}

#[test]
fn indented_fragments_are_normalized() {
    let loader = MemoryLoader::new().with_module(
        "m",
        ModuleManifest::new("Title\n    body\n      nested\n    !INCLUDE f\n")
            .with_member("f", MemberManifest::new(MemberKind::Function, "\n\tf()\n")),
    );
    let ns = Namespace::new(loader);

    assert_eq!(flatdoc("m", &ns).unwrap(), "Title\nbody\n  nested\nf()\n\n");
}

#[test]
fn whitespace_only_last_line_flattens_to_blank_line() {
    let loader = MemoryLoader::new().with_module("m", ModuleManifest::new("T\n    x\n      \n"));
    let ns = Namespace::new(loader);

    assert_eq!(flatdoc("m", &ns).unwrap(), "T\nx\n\n");
}

#[test]
fn same_entity_may_be_included_twice() {
    let loader = MemoryLoader::new().with_module(
        "m",
        ModuleManifest::new("!INCLUDE f\n!INCLUDE f")
            .with_member("f", MemberManifest::new(MemberKind::Function, "f")),
    );
    let ns = Namespace::new(loader);

    assert_eq!(flatdoc("m", &ns).unwrap(), "f\n\nf\n\n");
}

#[test]
fn comma_separated_references_resolve_independently() {
    // `.f` climbs to the module; `g` must still start from the class.
    let loader = MemoryLoader::new().with_module(
        "m",
        ModuleManifest::new("!INCLUDE C")
            .with_member(
                "C",
                MemberManifest::new(MemberKind::Class, "C\n!INCLUDE .f, g").with_member(
                    "g",
                    MemberManifest::new(MemberKind::Method, "C.g"),
                ),
            )
            .with_member("f", MemberManifest::new(MemberKind::Function, "f")),
    );
    let ns = Namespace::new(loader);

    assert_eq!(flatdoc("m", &ns).unwrap(), "C\nf\n\nC.g\n\n");
}

#[test]
fn sibling_module_is_reached_from_method() {
    let ns = Namespace::new(sample_package());
    let pkg = ns.import("pkg").unwrap();
    let mut chain = ContextChain::new(pkg);
    for step in ["foo", "Bar", "baz"] {
        let path = ReferencePath::parse(step).unwrap();
        chain = resolve(&path, &chain, &ns).unwrap();
    }
    assert_eq!(
        chain.qualified_names(),
        vec!["pkg.foo.Bar.baz", "pkg.foo.Bar", "pkg.foo", "pkg"]
    );

    let resolved = resolve(&ReferencePath::parse("...mod").unwrap(), &chain, &ns).unwrap();

    assert_eq!(resolved.qualified_names(), vec!["pkg.mod", "pkg"]);
}

#[test]
fn sibling_reference_without_parent_is_out_of_range() {
    // Flattening `pkg.foo` directly leaves no `pkg` above it.
    let ns = Namespace::new(sample_package());

    let err = flatdoc("pkg.foo", &ns).unwrap_err();

    match err {
        FlattenError::OutOfRange { entity, reference } => {
            assert_eq!(entity, "pkg.foo.Bar.baz");
            assert_eq!(reference, "...mod");
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn module_without_fragment_is_missing_docstring() {
    let ns = Namespace::new(failing_package());

    let err = flatdoc("errors.mod3", &ns).unwrap_err();

    assert!(matches!(err, FlattenError::MissingDocstring { ref name } if name == "errors.mod3"));
    assert_eq!(err.to_string(), "no docstring available for errors.mod3");
}

#[test]
fn included_member_without_fragment_is_missing_docstring() {
    let ns = Namespace::new(failing_package());

    let err = flatdoc("errors.mod4", &ns).unwrap_err();

    assert!(matches!(err, FlattenError::MissingDocstring { ref name } if name == "errors.mod4.f"));
}

#[test]
fn trailing_dot_is_dangling() {
    let ns = Namespace::new(failing_package());

    let err = flatdoc("errors.mod5", &ns).unwrap_err();

    assert!(matches!(
        err,
        FlattenError::DanglingReference { ref entity, .. } if entity == "errors.mod5"
    ));
}

#[test]
fn climbing_above_top_level_is_out_of_range() {
    let ns = Namespace::new(failing_package());

    let err = flatdoc("errors.mod6", &ns).unwrap_err();

    assert!(matches!(err, FlattenError::OutOfRange { .. }));
    assert!(err.to_string().contains("reaching above start module"));
}

#[test]
fn unknown_member_of_class() {
    let ns = Namespace::new(failing_package());

    let err = flatdoc("errors.mod7", &ns).unwrap_err();

    match err {
        FlattenError::UnknownMember {
            name,
            entity,
            reference,
        } => {
            assert_eq!(name, "errors.mod7.C.missing");
            assert_eq!(entity, "errors.mod7");
            assert_eq!(reference, "C.missing");
        }
        other => panic!("expected UnknownMember, got {other:?}"),
    }
}

#[test]
fn unknown_submodule_is_unresolved_import() {
    let ns = Namespace::new(failing_package());

    let err = flatdoc("errors.mod8", &ns).unwrap_err();

    match err {
        FlattenError::UnresolvedImport(ImportError::NotFound { name, .. }) => {
            assert_eq!(name, "errors.mod8.nothere");
        }
        other => panic!("expected UnresolvedImport, got {other:?}"),
    }
}

#[test]
fn unknown_top_level_module_is_unresolved_import() {
    let ns = Namespace::new(failing_package());

    let err = flatdoc("missing", &ns).unwrap_err();

    assert!(matches!(err, FlattenError::UnresolvedImport(_)));
}

#[test]
fn mutual_module_includes_are_cyclic() {
    let loader = MemoryLoader::new()
        .with_toml("p", r#"doc = "!INCLUDE a""#)
        .with_toml("p.a", r#"doc = "!INCLUDE .b""#)
        .with_toml("p.b", r#"doc = "!INCLUDE .a""#);
    let ns = Namespace::new(loader);

    let err = flatdoc("p", &ns).unwrap_err();

    match err {
        FlattenError::CyclicReference { cycle } => {
            assert_eq!(cycle, vec!["p.a", "p.b", "p.a"]);
        }
        other => panic!("expected CyclicReference, got {other:?}"),
    }
}

#[test]
fn nesting_past_limit_is_rejected() {
    let loader = MemoryLoader::new()
        .with_toml("p", r#"doc = "!INCLUDE a""#)
        .with_toml("p.a", r#"doc = "!INCLUDE b""#)
        .with_toml("p.a.b", r#"doc = "!INCLUDE c""#)
        .with_toml("p.a.b.c", r#"doc = "c""#);
    let ns = Namespace::new(loader);

    let err = flatdoc_with_options("p", &ns, FlattenOptions { max_depth: 2 }).unwrap_err();

    assert!(matches!(err, FlattenError::DepthExceeded { limit: 2, .. }));

    let ns = Namespace::new(
        MemoryLoader::new()
            .with_toml("p", r#"doc = "!INCLUDE a""#)
            .with_toml("p.a", r#"doc = "a""#),
    );
    assert_eq!(
        flatdoc_with_options("p", &ns, FlattenOptions { max_depth: 2 })
            .unwrap()
            .document,
        "a\n\n"
    );
}
