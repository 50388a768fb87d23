/* Render a TypeScript string literal */
pub fn ts_string_literal(value: &str) -> String {
  serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/* Make arbitrary manifest text safe inside a block comment */
pub fn sanitize_comment(text: &str) -> String {
  text.replace("*/", "*\\/").replace(['\r', '\n'], " ")
}

/* Emit a JSDoc block at the given indentation */
pub fn emit_doc(lines: &[String], indent: &str) -> String {
  let mut output = String::new();
  output.push_str(&format!("{}/**\n", indent));
  for line in lines {
    output.push_str(&format!("{} * {}\n", indent, sanitize_comment(line)));
  }
  output.push_str(&format!("{} */\n", indent));
  output
}
