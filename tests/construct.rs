mod common;

use reflect_rs::core::value::{TypeTag, Val};
use reflect_rs::reflect::error::{MemberKind, ReflectError};

#[test]
fn test_construct_with_matching_signature() {
    let descriptor = common::person_descriptor();
    let person = common::construct_person(&descriptor, "Udit", 30);

    assert_eq!(person.type_name(), "demo.Person");
    assert_eq!(person.get("name"), Some(&Val::str("Udit")));
    assert_eq!(person.get("age"), Some(&Val::Int(30)));
}

#[test]
fn test_default_constructor_leaves_field_defaults() {
    let descriptor = common::person_descriptor();
    let person = descriptor
        .constructor(&[])
        .unwrap()
        .construct(&[])
        .unwrap();

    assert_eq!(person.get("name"), Some(&Val::Null));
    assert_eq!(person.get("age"), Some(&Val::Int(0)));
    assert_eq!(person.get("email"), Some(&Val::str("")));
}

#[test]
fn test_no_matching_constructor_signature() {
    let descriptor = common::person_descriptor();
    let err = descriptor
        .constructor(&[TypeTag::Int, TypeTag::Str])
        .unwrap_err();
    assert!(matches!(
        err,
        ReflectError::MemberNotFound {
            kind: MemberKind::Constructor,
            ..
        }
    ));
}

#[test]
fn test_construct_with_wrong_arity() {
    let descriptor = common::person_descriptor();
    let ctor = descriptor
        .constructor(&[TypeTag::Str, TypeTag::Int])
        .unwrap();
    let err = ctor.construct(&[Val::str("Udit")]).unwrap_err();
    assert!(matches!(err, ReflectError::ArgumentMismatch { .. }));
}

#[test]
fn test_construct_with_wrong_types() {
    let descriptor = common::person_descriptor();
    let ctor = descriptor
        .constructor(&[TypeTag::Str, TypeTag::Int])
        .unwrap();
    let err = ctor
        .construct(&[Val::Int(30), Val::str("Udit")])
        .unwrap_err();
    match err {
        ReflectError::ArgumentMismatch { expected, got, .. } => {
            assert_eq!(expected, "(string, int)");
            assert_eq!(got, "(int, string)");
        }
        other => panic!("Expected ArgumentMismatch, got {:?}", other),
    }
}

#[test]
fn test_null_argument_never_matches_a_declared_type() {
    let descriptor = common::person_descriptor();
    let ctor = descriptor
        .constructor(&[TypeTag::Str, TypeTag::Int])
        .unwrap();
    let err = ctor.construct(&[Val::Null, Val::Int(30)]).unwrap_err();
    assert!(matches!(err, ReflectError::ArgumentMismatch { .. }));
}

#[test]
fn test_failing_initializer_surfaces_construction_error() {
    let descriptor = common::account_descriptor();
    let ctor = descriptor.constructor(&[TypeTag::Int]).unwrap();
    let err = ctor.construct(&[Val::Int(-5)]).unwrap_err();
    match err {
        ReflectError::Construction { type_name, message } => {
            assert_eq!(type_name, "demo.Account");
            assert!(message.contains("non-negative"));
        }
        other => panic!("Expected Construction error, got {:?}", other),
    }
}
