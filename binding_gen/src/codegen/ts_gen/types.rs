use manifest_loader::{TypePath, TypegenError};
use manifest_types::{AbiType, MAX_TYPE_DEPTH};
use std::fmt;

/* How the invoker should decode a returned stack item */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStrategy {
  /* No return value; decoding is skipped */
  Void,
  /* Decode a single item tagged with its manifest type name */
  Scalar(&'static str),
  Array(Box<DecodeStrategy>),
  Map(Box<DecodeStrategy>, Box<DecodeStrategy>),
}

impl DecodeStrategy {
  /* Render as a `ResultDecoder` literal */
  pub fn to_ts(&self) -> String {
    match self {
      DecodeStrategy::Void => "null".to_string(),
      DecodeStrategy::Scalar(tag) => format!("\"{}\"", tag),
      DecodeStrategy::Array(element) => format!("{{ array: {} }}", element.to_ts()),
      DecodeStrategy::Map(key, value) => format!("{{ map: [{}, {}] }}", key.to_ts(), value.to_ts()),
    }
  }
}

/* Target type expression and decode strategy for one AbiType */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
  pub type_expr: String,
  pub decode: DecodeStrategy,
}

/* Mapping failure, attributed to a manifest location by the caller */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMapError {
  Unsupported { type_name: String, reason: String },
  TooDeep { type_name: String },
}

impl TypeMapError {
  pub fn at(self, path: TypePath) -> TypegenError {
    match self {
      TypeMapError::Unsupported { type_name, reason } => TypegenError::UnsupportedType { path, type_name, reason },
      TypeMapError::TooDeep { type_name } => TypegenError::MalformedType {
        path,
        raw: type_name,
        reason: format!("nesting exceeds {} levels", MAX_TYPE_DEPTH),
      },
    }
  }
}

impl fmt::Display for TypeMapError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TypeMapError::Unsupported { type_name, reason } => write!(f, "unsupported type '{}': {}", type_name, reason),
      TypeMapError::TooDeep { type_name } => write!(f, "type '{}' nests deeper than {} levels", type_name, MAX_TYPE_DEPTH),
    }
  }
}

/* Map an AbiType to its TypeScript form. Void is only valid at the top level. */
pub fn map_type(ty: &AbiType) -> Result<MappedType, TypeMapError> {
  /* Types built in code never went through the parser's depth check */
  if ty.depth() > MAX_TYPE_DEPTH {
    return Err(TypeMapError::TooDeep { type_name: ty.to_string() });
  }
  map_at(ty, 1, ty)
}

fn map_at(ty: &AbiType, depth: usize, root: &AbiType) -> Result<MappedType, TypeMapError> {

  let scalar = |type_expr: &str| MappedType {
    type_expr: type_expr.to_string(),
    decode: DecodeStrategy::Scalar(ty.tag()),
  };

  let mapped = match ty {
    AbiType::Integer => scalar("bigint"),
    AbiType::Boolean => scalar("boolean"),
    AbiType::ByteArray | AbiType::Signature => scalar("Uint8Array"),
    AbiType::Hash160 => scalar("Hash160"),
    AbiType::Hash256 => scalar("Hash256"),
    AbiType::PublicKey => scalar("PublicKey"),
    AbiType::String => scalar("string"),
    AbiType::InteropInterface | AbiType::Any => scalar("unknown"),
    AbiType::Void if depth == 1 => MappedType {
      type_expr: "void".to_string(),
      decode: DecodeStrategy::Void,
    },
    AbiType::Void => {
      return Err(TypeMapError::Unsupported {
        type_name: root.to_string(),
        reason: "Void cannot appear inside a container".to_string(),
      });
    }
    AbiType::Array(element) => {
      let element = map_at(element, depth + 1, root)?;
      MappedType {
        type_expr: format!("{}[]", element.type_expr),
        decode: DecodeStrategy::Array(Box::new(element.decode)),
      }
    }
    AbiType::Map(key, value) => {
      if !key.is_primitive() && **key != AbiType::Any {
        return Err(TypeMapError::Unsupported {
          type_name: root.to_string(),
          reason: format!("map key must be a primitive type, found {}", key),
        });
      }
      let key = map_at(key, depth + 1, root)?;
      let value = map_at(value, depth + 1, root)?;
      MappedType {
        type_expr: format!("Map<{}, {}>", key.type_expr, value.type_expr),
        decode: DecodeStrategy::Map(Box::new(key.decode), Box::new(value.decode)),
      }
    }
  };

  Ok(mapped)
}

/* Encoder function reference or lambda for container elements */
pub fn encoder_fn(ty: &AbiType, depth: usize) -> String {
  match ty {
    AbiType::Integer => "Encode.integer".to_string(),
    AbiType::Boolean => "Encode.boolean".to_string(),
    AbiType::ByteArray => "Encode.byteArray".to_string(),
    AbiType::Signature => "Encode.signature".to_string(),
    AbiType::Hash160 => "Encode.hash160".to_string(),
    AbiType::Hash256 => "Encode.hash256".to_string(),
    AbiType::PublicKey => "Encode.publicKey".to_string(),
    AbiType::String => "Encode.string".to_string(),
    AbiType::InteropInterface => "Encode.interop".to_string(),
    AbiType::Any | AbiType::Void => "Encode.any".to_string(),
    AbiType::Array(_) | AbiType::Map(_, _) => {
      let var = format!("v{}", depth);
      format!("({}) => {}", var, encode_at(ty, &var, depth + 1))
    }
  }
}

/* Expression that encodes `value` of type `ty` into a `ContractArg` */
pub fn encode_expr(ty: &AbiType, value: &str) -> String {
  encode_at(ty, value, 1)
}

fn encode_at(ty: &AbiType, value: &str, depth: usize) -> String {
  match ty {
    AbiType::Array(element) => format!("Encode.array({}, {})", value, encoder_fn(element, depth)),
    AbiType::Map(key, val) => format!(
      "Encode.map({}, {}, {})",
      value,
      encoder_fn(key, depth),
      encoder_fn(val, depth)
    ),
    scalar => format!("{}({})", encoder_fn(scalar, depth), value),
  }
}

/* Prelude hash aliases referenced by a type */
pub fn collect_aliases(ty: &AbiType, out: &mut std::collections::BTreeSet<&'static str>) {
  match ty {
    AbiType::Hash160 | AbiType::Hash256 | AbiType::PublicKey => {
      out.insert(ty.tag());
    }
    AbiType::Array(element) => collect_aliases(element, out),
    AbiType::Map(key, value) => {
      collect_aliases(key, out);
      collect_aliases(value, out);
    }
    _ => {}
  }
}
