//! Common fixtures for the integration tests.
//!
//! Builds a local registry with two demo types:
//! - `demo.Person`: private `name`/`age` fields, a public `email` field, a
//!   zero-argument and a `(string, int)` constructor, a private `greet`
//!   method and a public `birthday` method.
//! - `demo.Account`: a constructor and a method whose handlers can fail, for
//!   exercising the construction and invocation error paths.

#![allow(dead_code)]

use reflect_rs::core::instance::Instance;
use reflect_rs::core::value::{TypeTag, Val};
use reflect_rs::runtime::builder::TypeBuilder;
use reflect_rs::runtime::descriptor::TypeDescriptor;
use reflect_rs::runtime::registry::TypeRegistry;
use std::sync::Arc;

fn person_default_init(_instance: &mut Instance, _args: &[Val]) -> Result<(), String> {
    Ok(())
}

fn person_init(instance: &mut Instance, args: &[Val]) -> Result<(), String> {
    instance.set("name", args[0].clone());
    instance.set("age", args[1].clone());
    Ok(())
}

fn person_greet(instance: &mut Instance, _args: &[Val]) -> Result<Val, String> {
    let name = instance
        .get("name")
        .and_then(Val::as_str)
        .unwrap_or("stranger")
        .to_string();
    Ok(Val::str(format!("Hello, my name is {}", name)))
}

fn person_birthday(instance: &mut Instance, _args: &[Val]) -> Result<Val, String> {
    let age = instance.get("age").and_then(Val::as_int).unwrap_or(0) + 1;
    instance.set("age", Val::Int(age));
    Ok(Val::Int(age))
}

fn account_init(instance: &mut Instance, args: &[Val]) -> Result<(), String> {
    let balance = args[0].as_int().unwrap_or(0);
    if balance < 0 {
        return Err(format!("initial balance must be non-negative, got {}", balance));
    }
    instance.set("balance", Val::Int(balance));
    Ok(())
}

fn account_withdraw(instance: &mut Instance, args: &[Val]) -> Result<Val, String> {
    let balance = instance.get("balance").and_then(Val::as_int).unwrap_or(0);
    let amount = args[0].as_int().unwrap_or(0);
    if amount > balance {
        return Err(format!("cannot withdraw {} from balance {}", amount, balance));
    }
    let remaining = balance - amount;
    instance.set("balance", Val::Int(remaining));
    Ok(Val::Int(remaining))
}

/// Registry with the demo types registered but nothing resolved yet.
pub fn demo_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry.register(
        TypeBuilder::new("demo.Person")
            .private_field("name", TypeTag::Str, Val::Null)
            .private_field("age", TypeTag::Int, Val::Int(0))
            .field("email", TypeTag::Str, Val::str(""))
            .constructor(&[], person_default_init)
            .constructor(&[TypeTag::Str, TypeTag::Int], person_init)
            .private_method("greet", &[], Some(TypeTag::Str), person_greet)
            .method("birthday", &[], Some(TypeTag::Int), person_birthday)
            .build(),
    );
    registry.register(
        TypeBuilder::new("demo.Account")
            .private_field("balance", TypeTag::Int, Val::Int(0))
            .constructor(&[TypeTag::Int], account_init)
            .method("withdraw", &[TypeTag::Int], Some(TypeTag::Int), account_withdraw)
            .build(),
    );
    registry
}

/// Resolve `demo.Person` from a fresh demo registry.
pub fn person_descriptor() -> Arc<TypeDescriptor> {
    demo_registry()
        .resolve("demo.Person")
        .expect("demo.Person should resolve")
}

/// Resolve `demo.Account` from a fresh demo registry.
pub fn account_descriptor() -> Arc<TypeDescriptor> {
    demo_registry()
        .resolve("demo.Account")
        .expect("demo.Account should resolve")
}

/// Construct a `demo.Person` via its `(string, int)` constructor.
pub fn construct_person(descriptor: &TypeDescriptor, name: &str, age: i64) -> Instance {
    descriptor
        .constructor(&[TypeTag::Str, TypeTag::Int])
        .expect("two-arg constructor should exist")
        .construct(&[Val::str(name), Val::Int(age)])
        .expect("construction should succeed")
}
