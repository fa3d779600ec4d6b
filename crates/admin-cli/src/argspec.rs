/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Parser for the trailing `--key [type=T] [list=true] value...` attribute
//! syntax.
//!
//! Mutating commands accept provider extension attributes the static flag
//! parser does not know about, supplied after a `--` separator. The grammar:
//!
//! - `--key` starts a new attribute; `--key=value` supplies its value inline;
//! - `type=int|bool|dict` immediately after the key selects the conversion,
//!   `list=true` (after the key or after `type=`) forces a sequence value;
//! - every following token up to the next `--key` is a value token;
//! - zero value tokens make the attribute a boolean flag, one makes it a
//!   converted scalar, two or more always make it a sequence.
//!
//! Type names resolve through an explicit switch over the closed set
//! `{int, bool, dict}`; anything else is rejected. Parsing is pure and
//! returns no partial result on error.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use neutron_client::NeutronCliError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgSpecError {
    #[error("Duplicated option '--{0}'")]
    DuplicateArgument(String),
    #[error("{0}")]
    MalformedPair(String),
    #[error("Invalid integer value '{0}'")]
    InvalidInteger(String),
    #[error("Invalid boolean value '{0}', expected 'true' or 'false'")]
    InvalidBoolean(String),
    #[error("Unsupported conversion type '{0}', expected one of int, bool or dict")]
    InvalidType(String),
}

impl From<ArgSpecError> for NeutronCliError {
    fn from(err: ArgSpecError) -> Self {
        NeutronCliError::ArgumentSpec(err.to_string())
    }
}

#[derive(Debug)]
struct PendingArg {
    key: String,
    type_name: Option<String>,
    list: bool,
    inline_value: Option<String>,
    values: Vec<String>,
}

/// Parse a flat token tail into an attribute mapping. Keys are emitted
/// exactly as written (dashes and underscores are not normalized).
pub fn parse(tokens: &[String]) -> Result<Map<String, Value>, ArgSpecError> {
    let mut result = Map::new();
    let mut current: Option<PendingArg> = None;

    // A single leading "--" is the tolerated pseudo-separator.
    let tokens = match tokens.first().map(String::as_str) {
        Some("--") => &tokens[1..],
        _ => tokens,
    };

    for token in tokens {
        if let Some(rest) = token.strip_prefix("--") {
            if let Some(arg) = current.take() {
                finish(arg, &mut result)?;
            }
            let (key, inline_value) = match rest.split_once('=') {
                Some((key, value)) => (key.to_string(), Some(value.to_string())),
                None => (rest.to_string(), None),
            };
            if result.contains_key(&key) {
                return Err(ArgSpecError::DuplicateArgument(key));
            }
            current = Some(PendingArg {
                key,
                type_name: None,
                list: false,
                inline_value,
                values: Vec::new(),
            });
            continue;
        }

        let Some(arg) = current.as_mut() else {
            return Err(ArgSpecError::MalformedPair(format!(
                "unexpected value '{token}' with no preceding '--option'"
            )));
        };

        // The pseudo-tokens are positional: `type=` only directly after the
        // key, `list=true` directly after the key or after `type=`. Once a
        // real value token has been seen they are plain values.
        if arg.values.is_empty() && arg.inline_value.is_none() {
            if arg.type_name.is_none() && !arg.list {
                if let Some(name) = token.strip_prefix("type=") {
                    arg.type_name = Some(name.to_string());
                    continue;
                }
            }
            if !arg.list && token == "list=true" {
                arg.list = true;
                continue;
            }
        }

        if arg.inline_value.is_some() {
            return Err(ArgSpecError::MalformedPair(format!(
                "option '--{}' mixes an inline '=' value with trailing value '{token}'",
                arg.key
            )));
        }
        arg.values.push(token.clone());
    }

    if let Some(arg) = current.take() {
        finish(arg, &mut result)?;
    }
    Ok(result)
}

fn finish(arg: PendingArg, result: &mut Map<String, Value>) -> Result<(), ArgSpecError> {
    let PendingArg {
        key,
        type_name,
        list,
        inline_value,
        values,
    } = arg;
    let type_name = type_name.as_deref();

    let value = if let Some(inline) = inline_value {
        convert(&inline, type_name)?
    } else if values.is_empty() {
        Value::Bool(true)
    } else if values.len() == 1 && !list {
        convert(&values[0], type_name)?
    } else {
        Value::Array(
            values
                .iter()
                .map(|value| convert(value, type_name))
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    result.insert(key, value);
    Ok(())
}

fn convert(token: &str, type_name: Option<&str>) -> Result<Value, ArgSpecError> {
    match type_name {
        None => Ok(Value::String(token.to_string())),
        Some("int") => token
            .parse::<i64>()
            .map(|number| Value::Number(Number::from(number)))
            .map_err(|_| ArgSpecError::InvalidInteger(token.to_string())),
        Some("bool") => match token.to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(ArgSpecError::InvalidBoolean(token.to_string())),
        },
        Some("dict") => parse_pairs(token).map(Value::Object),
        Some(other) => Err(ArgSpecError::InvalidType(other.to_string())),
    }
}

/// Parse one `key=value[,key=value...]` token into a string map. Also used
/// by the recognized dict-shaped flags (`--fixed-ip`, `--allocation-pool`,
/// `--host-route`, `--subport`).
pub fn parse_pairs(token: &str) -> Result<Map<String, Value>, ArgSpecError> {
    let mut pairs = Map::new();
    for part in token.split(',') {
        let Some((key, value)) = part.split_once('=') else {
            return Err(ArgSpecError::MalformedPair(format!(
                "invalid key=value pair '{part}', expected format: key=value"
            )));
        };
        pairs.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    #[test]
    fn zero_values_make_a_boolean_flag() {
        let parsed = parse(&toks(&["--flag"])).expect("flag should parse");
        assert_eq!(Value::Object(parsed), json!({"flag": true}));
    }

    #[test]
    fn single_value_stays_a_string_scalar() {
        let parsed = parse(&toks(&["--name", "net1"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"name": "net1"}));
    }

    #[test]
    fn typed_multi_value_converts_each_token() {
        let parsed = parse(&toks(&["--nums", "type=int", "1", "2"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"nums": [1, 2]}));
    }

    #[test]
    fn bool_conversion_is_case_insensitive() {
        let parsed = parse(&toks(&["--x", "type=bool", "false"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"x": false}));

        let parsed = parse(&toks(&["--x", "type=bool", "True"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"x": true}));
    }

    #[test]
    fn two_bare_tokens_always_become_a_sequence() {
        let parsed = parse(&toks(&["--a", "x", "y"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"a": ["x", "y"]}));
    }

    #[test]
    fn list_marker_forces_a_sequence_for_one_value() {
        let parsed = parse(&toks(&["--routes", "list=true", "r1"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"routes": ["r1"]}));
    }

    #[test]
    fn inline_form_supplies_the_value() {
        let parsed = parse(&toks(&["--a=1"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"a": "1"}));
    }

    #[test]
    fn inline_form_with_trailing_tokens_is_malformed() {
        let err = parse(&toks(&["--a=1", "x", "y"])).expect_err("should fail");
        assert!(matches!(err, ArgSpecError::MalformedPair(_)), "got {err:?}");
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = parse(&toks(&["--a", "1", "--a", "2"])).expect_err("should fail");
        assert_eq!(err, ArgSpecError::DuplicateArgument("a".to_string()));
    }

    #[test]
    fn parsing_is_idempotent_over_the_same_tokens() {
        let tokens = toks(&["--a", "1", "--b", "type=int", "2", "3", "--c"]);
        let first = parse(&tokens).expect("should parse");
        let second = parse(&tokens).expect("should parse");
        assert_eq!(first, second);
    }

    #[test]
    fn dict_type_builds_a_string_map() {
        let parsed =
            parse(&toks(&["--gw", "type=dict", "ip=10.0.0.1,prefix=24"])).expect("should parse");
        assert_eq!(
            Value::Object(parsed),
            json!({"gw": {"ip": "10.0.0.1", "prefix": "24"}})
        );
    }

    #[test]
    fn dict_list_mode_accumulates_maps() {
        let parsed = parse(&toks(&[
            "--pools",
            "type=dict",
            "list=true",
            "start=10.0.0.2,end=10.0.0.20",
            "start=10.0.1.2,end=10.0.1.20",
        ]))
        .expect("should parse");
        assert_eq!(
            Value::Object(parsed),
            json!({"pools": [
                {"start": "10.0.0.2", "end": "10.0.0.20"},
                {"start": "10.0.1.2", "end": "10.0.1.20"},
            ]})
        );
    }

    #[test]
    fn unknown_type_names_are_rejected_at_conversion() {
        let err = parse(&toks(&["--x", "type=float", "1.5"])).expect_err("should fail");
        assert_eq!(err, ArgSpecError::InvalidType("float".to_string()));
    }

    #[test]
    fn unknown_type_without_values_still_makes_a_flag() {
        // No value token means no conversion ever runs.
        let parsed = parse(&toks(&["--x", "type=float"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"x": true}));
    }

    #[test]
    fn invalid_int_and_bool_values_are_rejected() {
        let err = parse(&toks(&["--x", "type=int", "abc"])).expect_err("should fail");
        assert_eq!(err, ArgSpecError::InvalidInteger("abc".to_string()));

        let err = parse(&toks(&["--x", "type=bool", "yes"])).expect_err("should fail");
        assert_eq!(err, ArgSpecError::InvalidBoolean("yes".to_string()));
    }

    #[test]
    fn leading_separator_is_dropped() {
        let parsed = parse(&toks(&["--", "--a", "1"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"a": "1"}));
    }

    #[test]
    fn value_without_an_option_is_malformed() {
        let err = parse(&toks(&["stray"])).expect_err("should fail");
        assert!(matches!(err, ArgSpecError::MalformedPair(_)), "got {err:?}");
    }

    #[test]
    fn key_spelling_is_preserved_verbatim() {
        let parsed = parse(&toks(&["--router:external", "true"])).expect("should parse");
        assert!(parsed.contains_key("router:external"));

        let parsed = parse(&toks(&["--foo-bar_baz", "v"])).expect("should parse");
        assert!(parsed.contains_key("foo-bar_baz"));
    }

    #[test]
    fn pseudo_tokens_after_a_value_are_plain_values() {
        let parsed = parse(&toks(&["--a", "v", "type=int"])).expect("should parse");
        assert_eq!(Value::Object(parsed), json!({"a": ["v", "type=int"]}));
    }

    #[test]
    fn pairs_tokenizer_rejects_tokens_without_equals() {
        let err = parse_pairs("start=10.0.0.2,oops").expect_err("should fail");
        assert!(matches!(err, ArgSpecError::MalformedPair(_)), "got {err:?}");
    }
}
