use crate::hash::ScriptHash;
use crate::types::AbiType;

/* Method or event parameter; `position` is the call-argument index */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: AbiType,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: AbiType,
    /* Safe methods only read contract state */
    pub safe: bool,
    /* Entry offset in the contract script, informational */
    pub offset: Option<u32>,
}

impl Method {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /* Manifest-style signature, e.g. `transfer(Hash160 to, Integer amount) -> Boolean` */
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect();
        format!("{}({}) -> {}", self.name, params.join(", "), self.return_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

/* Normalized contract interface, immutable once loaded */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiModel {
    pub contract_name: String,
    pub script_hash: Option<ScriptHash>,
    pub supported_standards: Vec<String>,
    pub methods: Vec<Method>,
    pub events: Vec<Event>,
}

impl AbiModel {
    pub fn new(contract_name: impl Into<String>) -> Self {
        Self {
            contract_name: contract_name.into(),
            script_hash: None,
            supported_standards: Vec::new(),
            methods: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn safe_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(|m| m.safe)
    }
}
