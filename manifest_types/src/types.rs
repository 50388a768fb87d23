use std::fmt;
use thiserror::Error;

/* Maximum nesting of Array/Map type descriptors */
pub const MAX_TYPE_DEPTH: usize = 32;

/* Parameter and return types understood by the contract virtual machine */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiType {
    Integer,
    Boolean,
    ByteArray,
    String,
    Hash160,
    Hash256,
    PublicKey,
    Signature,
    Array(Box<AbiType>),
    Map(Box<AbiType>, Box<AbiType>),
    InteropInterface,
    Void,
    Any,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeParseError {
    /* The type name is not part of the virtual machine's type set */
    #[error("unknown type name '{name}'")]
    Unknown { name: String },

    /* The descriptor is structurally broken (brackets, arity, nesting depth) */
    #[error("{reason}")]
    Malformed { reason: String },
}

impl AbiType {
    /* Parse a manifest type descriptor such as `Hash160` or `Map<String,Array<Integer>>` */
    pub fn parse(raw: &str) -> Result<Self, TypeParseError> {
        let mut cursor = TypeCursor { src: raw, pos: 0 };
        let ty = cursor.parse_type(1)?;
        cursor.skip_ws();
        if cursor.pos != raw.len() {
            return Err(TypeParseError::Malformed {
                reason: format!("unexpected trailing input at offset {}", cursor.pos),
            });
        }
        Ok(ty)
    }

    /* Canonical manifest name of the outer type, without type arguments */
    pub fn tag(&self) -> &'static str {
        match self {
            AbiType::Integer => "Integer",
            AbiType::Boolean => "Boolean",
            AbiType::ByteArray => "ByteArray",
            AbiType::String => "String",
            AbiType::Hash160 => "Hash160",
            AbiType::Hash256 => "Hash256",
            AbiType::PublicKey => "PublicKey",
            AbiType::Signature => "Signature",
            AbiType::Array(_) => "Array",
            AbiType::Map(_, _) => "Map",
            AbiType::InteropInterface => "InteropInterface",
            AbiType::Void => "Void",
            AbiType::Any => "Any",
        }
    }

    /* Nesting depth: 1 for scalars, +1 per Array/Map level */
    pub fn depth(&self) -> usize {
        match self {
            AbiType::Array(element) => 1 + element.depth(),
            AbiType::Map(key, value) => 1 + key.depth().max(value.depth()),
            _ => 1,
        }
    }

    /* Types allowed as map keys */
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            AbiType::Integer
                | AbiType::Boolean
                | AbiType::ByteArray
                | AbiType::String
                | AbiType::Hash160
                | AbiType::Hash256
                | AbiType::PublicKey
                | AbiType::Signature
        )
    }

    fn from_name(name: &str) -> Option<Self> {
        let ty = match name.to_ascii_lowercase().as_str() {
            "integer" => AbiType::Integer,
            "boolean" | "bool" => AbiType::Boolean,
            "bytearray" => AbiType::ByteArray,
            "string" => AbiType::String,
            "hash160" => AbiType::Hash160,
            "hash256" => AbiType::Hash256,
            "publickey" => AbiType::PublicKey,
            "signature" => AbiType::Signature,
            "array" => AbiType::Array(Box::new(AbiType::Any)),
            "map" => AbiType::Map(Box::new(AbiType::Any), Box::new(AbiType::Any)),
            "interopinterface" => AbiType::InteropInterface,
            "void" => AbiType::Void,
            "any" => AbiType::Any,
            _ => return None,
        };
        Some(ty)
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Array(element) => write!(f, "Array<{}>", element),
            AbiType::Map(key, value) => write!(f, "Map<{},{}>", key, value),
            other => f.write_str(other.tag()),
        }
    }
}

/* Recursive-descent reader over a type descriptor */
struct TypeCursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TypeCursor<'a> {
    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn expect(&mut self, wanted: char) -> Result<(), TypeParseError> {
        self.skip_ws();
        match self.peek() {
            Some(c) if c == wanted => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(TypeParseError::Malformed {
                reason: format!("expected '{}' at offset {}, found '{}'", wanted, self.pos, c),
            }),
            None => Err(TypeParseError::Malformed {
                reason: format!("expected '{}' at offset {}, found end of input", wanted, self.pos),
            }),
        }
    }

    fn parse_ident(&mut self) -> Result<&'a str, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.pos += 1;
        }
        if start == self.pos {
            return Err(TypeParseError::Malformed {
                reason: format!("expected a type name at offset {}", start),
            });
        }
        Ok(&self.src[start..self.pos])
    }

    fn parse_type(&mut self, depth: usize) -> Result<AbiType, TypeParseError> {
        if depth > MAX_TYPE_DEPTH {
            return Err(TypeParseError::Malformed {
                reason: format!("type nesting exceeds {} levels", MAX_TYPE_DEPTH),
            });
        }

        let name = self.parse_ident()?;
        let base = AbiType::from_name(name).ok_or_else(|| TypeParseError::Unknown {
            name: name.to_string(),
        })?;

        self.skip_ws();
        if self.peek() != Some('<') {
            return Ok(base);
        }
        self.pos += 1;

        let ty = match base {
            AbiType::Array(_) => {
                let element = self.parse_type(depth + 1)?;
                AbiType::Array(Box::new(element))
            }
            AbiType::Map(_, _) => {
                let key = self.parse_type(depth + 1)?;
                self.expect(',')?;
                let value = self.parse_type(depth + 1)?;
                AbiType::Map(Box::new(key), Box::new(value))
            }
            other => {
                return Err(TypeParseError::Malformed {
                    reason: format!("'{}' does not take type arguments", other.tag()),
                });
            }
        };
        self.expect('>')?;
        Ok(ty)
    }
}
