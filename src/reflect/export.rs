//! Serializable snapshots of resolved type metadata.
//!
//! Handlers are function pointers and cannot travel, so the export is a pure
//! metadata mirror: names, declared types, visibility and signatures.

use crate::runtime::descriptor::TypeDescriptor;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FieldExport {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub visibility: String,
}

#[derive(Debug, Serialize)]
pub struct ConstructorExport {
    pub params: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MethodExport {
    pub name: String,
    pub params: Vec<String>,
    #[serde(rename = "return")]
    pub ret: Option<String>,
    pub visibility: String,
}

#[derive(Debug, Serialize)]
pub struct TypeExport {
    pub name: String,
    pub fields: Vec<FieldExport>,
    pub constructors: Vec<ConstructorExport>,
    pub methods: Vec<MethodExport>,
}

impl TypeExport {
    /// Snapshot a resolved descriptor.
    pub fn of(descriptor: &TypeDescriptor) -> TypeExport {
        TypeExport {
            name: descriptor.name().to_string(),
            fields: descriptor
                .fields()
                .map(|f| FieldExport {
                    name: f.name().to_string(),
                    ty: f.ty().name().to_string(),
                    visibility: f.visibility().as_str().to_string(),
                })
                .collect(),
            constructors: descriptor
                .constructors()
                .iter()
                .map(|c| ConstructorExport {
                    params: c.params().iter().map(|t| t.name().to_string()).collect(),
                })
                .collect(),
            methods: descriptor
                .methods()
                .iter()
                .map(|m| MethodExport {
                    name: m.name().to_string(),
                    params: m.params().iter().map(|t| t.name().to_string()).collect(),
                    ret: m.return_type().map(|t| t.name().to_string()),
                    visibility: m.visibility().as_str().to_string(),
                })
                .collect(),
        }
    }
}
