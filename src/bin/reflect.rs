use clap::Parser;
use reflect_rs::core::instance::Instance;
use reflect_rs::core::value::{TypeTag, Val};
use reflect_rs::reflect::export::TypeExport;
use reflect_rs::reflect::visibility::Access;
use reflect_rs::runtime::builder::{TypeBuilder, TypeProvider};
use reflect_rs::runtime::registry::{self, TypeRegistry};

#[derive(Parser)]
#[command(name = "reflect")]
#[command(about = "Type registry and dynamic invocation demo", long_about = None)]
struct Cli {
    /// Name to construct the demo instance with
    #[arg(long, default_value = "Udit")]
    name: String,

    /// Age to construct the demo instance with
    #[arg(long, default_value_t = 30)]
    age: i64,

    /// Print the resolved type metadata as JSON and exit
    #[arg(long)]
    dump: bool,
}

/// Registers the demo `Person` type: two private fields, a two-argument
/// constructor, and a private `greet` method.
struct PersonProvider;

impl TypeProvider for PersonProvider {
    fn name(&self) -> &'static str {
        "person-demo"
    }

    fn register(&self, registry: &mut TypeRegistry) {
        registry.register(
            TypeBuilder::new("demo.Person")
                .private_field("name", TypeTag::Str, Val::Null)
                .private_field("age", TypeTag::Int, Val::Int(0))
                .constructor(&[], person_default_init)
                .constructor(&[TypeTag::Str, TypeTag::Int], person_init)
                .private_method("greet", &[], Some(TypeTag::Str), person_greet)
                .build(),
        );
    }
}

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
    let greeting = format!("Hello, my name is {}", name);
    println!("{}", greeting);
    Ok(Val::str(greeting))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    registry::register_global_provider(&PersonProvider);

    // The demonstration sequence: resolve by name, inspect a field, select a
    // constructor, construct, then invoke a private method via the bypass.
    let class = registry::resolve_global("demo.Person")?;

    if cli.dump {
        println!("{}", serde_json::to_string_pretty(&TypeExport::of(&class))?);
        return Ok(());
    }

    let name_field = class.field("name")?;
    let ctor = class.constructor(&[TypeTag::Str, TypeTag::Int])?;
    let mut person = ctor.construct(&[Val::str(cli.name), Val::Int(cli.age)])?;

    let greet = class.method("greet", &[])?;
    greet.invoke(&mut person, &[], Access::Bypass)?;

    println!(
        "field '{}' ({}) = {:?}",
        name_field.descriptor().name(),
        name_field.descriptor().visibility().as_str(),
        name_field.get(&person)?
    );

    Ok(())
}
