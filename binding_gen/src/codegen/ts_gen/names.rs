use super::prelude::PRELUDE_EXPORTS;
use indexmap::IndexMap;
use manifest_loader::{TypegenError, TypegenResult};
use manifest_types::{AbiType, Method};
use std::collections::HashSet;

/* What an identifier names; selects casing, reserved set and fallback */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
  Contract,
  Method,
  Parameter { position: usize },
}

/* Reserved words of TypeScript/JavaScript that cannot name a binding */
const TS_RESERVED: &[&str] = &[
  "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
  "else", "enum", "eval", "export", "extends", "false", "finally", "for", "function", "if", "implements", "import",
  "in", "instanceof", "interface", "let", "new", "null", "package", "private", "protected", "public", "return",
  "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined", "var", "void", "while", "with",
  "yield",
];

/* Globals the emitted modules reference; a class of the same name would shadow them */
const TS_GLOBALS: &[&str] = &["Array", "BigInt", "Map", "Object", "Promise", "Uint8Array"];

/* Members every generated class declares */
pub const CLASS_MEMBERS: &[&str] = &["constructor", "invoker", "scriptHash", "invokeMethod"];

pub fn is_reserved(name: &str, kind: IdentifierKind) -> bool {
  if TS_RESERVED.contains(&name) {
    return true;
  }
  match kind {
    IdentifierKind::Contract => PRELUDE_EXPORTS.contains(&name) || TS_GLOBALS.contains(&name),
    IdentifierKind::Method => CLASS_MEMBERS.contains(&name),
    IdentifierKind::Parameter { .. } => false,
  }
}

/* Syntactic identifier check: ^[A-Za-z_$][A-Za-z0-9_$]*$ */
pub fn is_valid_identifier(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/* Resolve a raw manifest name (or user override) into a legal identifier */
pub fn resolve_identifier(raw: &str, kind: IdentifierKind, override_name: Option<&str>) -> TypegenResult<String> {
  if let Some(name) = override_name {
    if !is_valid_identifier(name) || is_reserved(name, kind) {
      return Err(TypegenError::InvalidIdentifier { raw: name.to_string() });
    }
    return Ok(name.to_string());
  }

  let words = split_words(raw);
  let mut ident = match kind {
    IdentifierKind::Contract => to_pascal_case(&words),
    IdentifierKind::Method | IdentifierKind::Parameter { .. } => to_camel_case(&words),
  };

  if ident.is_empty() {
    ident = match kind {
      IdentifierKind::Contract => "Contract".to_string(),
      IdentifierKind::Method => "method".to_string(),
      IdentifierKind::Parameter { position } => format!("arg{}", position),
    };
  }
  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }
  if is_reserved(&ident, kind) {
    ident.push('_');
  }

  Ok(ident)
}

/* Split on non-alphanumerics and case boundaries; `HTTPServer` -> [HTTP, Server] */
pub fn split_words(raw: &str) -> Vec<String> {
  let chars: Vec<char> = raw.chars().collect();
  let mut words = Vec::new();
  let mut current = String::new();

  for (i, &c) in chars.iter().enumerate() {
    if !c.is_ascii_alphanumeric() {
      if !current.is_empty() {
        words.push(std::mem::take(&mut current));
      }
      continue;
    }

    if c.is_ascii_uppercase() && !current.is_empty() {
      let prev = chars[i - 1];
      let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
      if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_is_lower) {
        words.push(std::mem::take(&mut current));
      }
    }
    current.push(c);
  }

  if !current.is_empty() {
    words.push(current);
  }
  words
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    None => String::new(),
  }
}

pub fn to_pascal_case(words: &[String]) -> String {
  words.iter().map(|w| capitalize(w)).collect()
}

pub fn to_camel_case(words: &[String]) -> String {
  let mut out = String::new();
  for (i, word) in words.iter().enumerate() {
    if i == 0 {
      out.push_str(&word.to_ascii_lowercase());
    } else {
      out.push_str(&capitalize(word));
    }
  }
  out
}

/* PascalCase tag used in overload suffixes, e.g. Array<Hash160> -> ArrayHash160 */
fn overload_tag(ty: &AbiType) -> String {
  match ty {
    AbiType::Array(element) => format!("Array{}", overload_tag(element)),
    AbiType::Map(key, value) => format!("Map{}{}", overload_tag(key), overload_tag(value)),
    other => other.tag().to_string(),
  }
}

fn overload_suffix(method: &Method) -> String {
  if method.arity() == 0 {
    return "WithNoArgs".to_string();
  }
  let tags: String = method.parameters.iter().map(|p| overload_tag(&p.ty)).collect();
  format!("With{}", tags)
}

/* Resolve member names for all methods, in declared order */
pub fn resolve_method_names(methods: &[Method]) -> TypegenResult<Vec<String>> {
  let mut names = methods
    .iter()
    .map(|m| resolve_identifier(&m.name, IdentifierKind::Method, None))
    .collect::<TypegenResult<Vec<_>>>()?;

  /* Overloads: every member of a colliding group gets a type-derived suffix */
  let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
  for (index, name) in names.iter().enumerate() {
    groups.entry(name.clone()).or_default().push(index);
  }
  for (base, indices) in &groups {
    if indices.len() > 1 {
      for &index in indices {
        names[index] = format!("{}{}", base, overload_suffix(&methods[index]));
      }
    }
  }

  /* Exact duplicates (same name, same types): later copies are numbered from 2 */
  let mut seen: IndexMap<(String, Vec<AbiType>), usize> = IndexMap::new();
  for (name, method) in names.iter_mut().zip(methods) {
    let signature: Vec<AbiType> = method.parameters.iter().map(|p| p.ty.clone()).collect();
    let count = seen.entry((name.clone(), signature)).or_insert(0);
    *count += 1;
    if *count > 1 {
      name.push_str(&format!("_{}", count));
    }
  }

  /* Anything still clashing (a suffixed name hitting an unrelated method) */
  let mut taken: HashSet<String> = HashSet::new();
  for name in names.iter_mut() {
    while taken.contains(name.as_str()) {
      name.push('_');
    }
    taken.insert(name.clone());
  }

  Ok(names)
}

/* Resolve parameter names within one method; duplicates become `name_2`, `name_3` */
pub fn resolve_parameter_names<'a>(raw_names: impl IntoIterator<Item = &'a str>) -> TypegenResult<Vec<String>> {
  let mut taken: HashSet<String> = HashSet::new();
  let mut out = Vec::new();

  for (position, raw) in raw_names.into_iter().enumerate() {
    let base = resolve_identifier(raw, IdentifierKind::Parameter { position }, None)?;
    let mut name = base.clone();
    let mut n = 2;
    while taken.contains(&name) {
      name = format!("{}_{}", base, n);
      n += 1;
    }
    taken.insert(name.clone());
    out.push(name);
  }

  Ok(out)
}
