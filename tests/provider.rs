mod common;

use reflect_rs::core::instance::Instance;
use reflect_rs::core::value::{TypeTag, Val};
use reflect_rs::reflect::visibility::Access;
use reflect_rs::runtime::builder::{TypeBuilder, TypeProvider};
use reflect_rs::runtime::registry::{self, TypeRegistry};

struct ShapesProvider;

fn square_init(instance: &mut Instance, args: &[Val]) -> Result<(), String> {
    instance.set("side", args[0].clone());
    Ok(())
}

fn square_area(instance: &mut Instance, _args: &[Val]) -> Result<Val, String> {
    let side = instance.get("side").and_then(Val::as_int).unwrap_or(0);
    Ok(Val::Int(side * side))
}

impl TypeProvider for ShapesProvider {
    fn name(&self) -> &'static str {
        "shapes"
    }

    fn register(&self, registry: &mut TypeRegistry) {
        registry.register(
            TypeBuilder::new("shapes.Square")
                .private_field("side", TypeTag::Int, Val::Int(0))
                .constructor(&[TypeTag::Int], square_init)
                .method("area", &[], Some(TypeTag::Int), square_area)
                .build(),
        );
    }
}

#[test]
fn test_provider_registers_into_local_registry() {
    let mut registry = TypeRegistry::new();
    registry.register_provider(&ShapesProvider);

    let square = registry.resolve("shapes.Square").unwrap();
    let mut instance = square
        .constructor(&[TypeTag::Int])
        .unwrap()
        .construct(&[Val::Int(4)])
        .unwrap();
    let area = square
        .method("area", &[])
        .unwrap()
        .invoke(&mut instance, &[], Access::Checked)
        .unwrap();
    assert_eq!(area, Val::Int(16));
}

#[test]
fn test_provider_registers_into_global_registry() {
    registry::register_global_provider(&ShapesProvider);

    let square = registry::resolve_global("shapes.Square").unwrap();
    assert_eq!(square.name(), "shapes.Square");

    // Cached after first resolution: the read-mostly path returns the same
    // descriptor.
    let again = registry::resolve_global("shapes.Square").unwrap();
    assert!(std::sync::Arc::ptr_eq(&square, &again));
}

#[test]
fn test_global_resolution_of_unregistered_name_fails() {
    assert!(registry::resolve_global("shapes.Hexagon").is_err());
}
