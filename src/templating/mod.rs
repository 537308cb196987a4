//! Keyword templating for deployment assets.
//!
//! Asset files reference environment-specific values with `@@keyword@@`
//! placeholders. The keyword mappings are supplied by the caller (usually from the
//! deploy configuration) and stay fixed for the whole pass.
//!
//! # Modules
//!
//! - `tokens` - Placeholder scanning and substitution
//! - `parser` - Resolve-then-parse for a single JSON asset file
//!
//! # Substitution rules
//!
//! | Mapped value | Inserted text            |
//! |--------------|--------------------------|
//! | `"goodbye"`  | `"goodbye"` (JSON string literal) |
//! | `2`          | `2`                      |
//! | `[1, 2]`     | `[1,2]`                  |
//! | undefined    | `@@keyword@@` (unchanged) |
//!
//! # Examples
//!
//! ```
//! use deploykit::templating::{parse_json_file, resolve_tokens};
//! use serde_json::json;
//!
//! let mappings = json!({ "domain": "example.com", "port": 443 });
//! let mappings = mappings.as_object().unwrap();
//!
//! let text = resolve_tokens(r#"{"host":@@domain@@,"port":@@port@@}"#, mappings);
//! assert_eq!(text, r#"{"host":"example.com","port":443}"#);
//!
//! let value = parse_json_file("tenant.json", &text, mappings).unwrap();
//! assert_eq!(value["port"], 443);
//! ```

pub mod parser;
pub mod tokens;

pub use parser::{parse_json_file, parse_json_file_as};
pub use tokens::{find_tokens, resolve_tokens, suggest_keywords, unresolved_tokens};
