// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Binding evaluated argument values to a command signature.

use acme_core::Value;
use indexmap::IndexMap;

use crate::error::ArgumentError;
use crate::registry::{Param, Signature};

/// Arguments bound to a signature and coerced to the declared types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    named: IndexMap<String, Value>,
    rest: Vec<Value>,
}

impl Args {
    /// Bind positional `values` to `signature`.
    ///
    /// Parameters are filled in order; omitted optional parameters take their
    /// defaults, and surplus values go to the variadic parameter if there is
    /// one. A unit value never satisfies a required parameter, falls back to
    /// the default of an optional one and is dropped from the variadic tail.
    pub fn bind(signature: &Signature, values: Vec<Value>) -> Result<Self, ArgumentError> {
        let got = values.len();
        let mut values = values.into_iter();
        let mut named = IndexMap::with_capacity(signature.params.len());

        for param in &signature.params {
            let bound = match (values.next(), &param.default) {
                (Some(Value::Unit) | None, Some(default)) => default.clone(),
                (None, None) => {
                    return Err(ArgumentError::Missing {
                        param: param.name.clone(),
                        expected: param.ty.name(),
                    })
                }
                (Some(value), _) => coerce(param, value)?,
            };
            named.insert(param.name.clone(), bound);
        }

        let rest = match &signature.rest {
            Some(param) => values
                .filter(|v| !v.is_unit())
                .map(|v| coerce(param, v))
                .collect::<Result<Vec<_>, _>>()?,
            None => {
                if values.next().is_some() {
                    return Err(ArgumentError::TooMany {
                        max: signature.params.len(),
                        got,
                    });
                }
                Vec::new()
            }
        };

        Ok(Self { named, rest })
    }

    /// Bound value of a named parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    fn value(&self, name: &str) -> Result<&Value, ArgumentError> {
        self.named.get(name).ok_or_else(|| ArgumentError::Missing {
            param: name.to_string(),
            expected: "value",
        })
    }

    pub fn str(&self, name: &str) -> Result<&str, ArgumentError> {
        match self.value(name)? {
            Value::Str(s) => Ok(s),
            other => Err(mismatch(name, "string", other)),
        }
    }

    pub fn int(&self, name: &str) -> Result<i64, ArgumentError> {
        match self.value(name)? {
            Value::Int(i) => Ok(*i),
            other => Err(mismatch(name, "integer", other)),
        }
    }

    pub fn bool(&self, name: &str) -> Result<bool, ArgumentError> {
        match self.value(name)? {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch(name, "boolean", other)),
        }
    }

    /// Integer argument that must be strictly positive.
    pub fn positive(&self, name: &str) -> Result<usize, ArgumentError> {
        let n = self.int(name)?;
        usize::try_from(n)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ArgumentError::range(name, format!("must be positive, got {n}")))
    }

    /// Values collected by the variadic parameter.
    pub fn rest(&self) -> &[Value] {
        &self.rest
    }

    /// Variadic values rendered as text.
    pub fn rest_text(&self) -> Vec<String> {
        self.rest.iter().map(|v| v.to_string()).collect()
    }
}

fn coerce(param: &Param, value: Value) -> Result<Value, ArgumentError> {
    param
        .ty
        .coerce(value)
        .map_err(|original| mismatch(&param.name, param.ty.name(), &original))
}

fn mismatch(param: &str, expected: &'static str, found: &Value) -> ArgumentError {
    ArgumentError::Type {
        param: param.to_string(),
        expected,
        found: describe(found),
    }
}

const PREVIEW_CHARS: usize = 32;

fn describe(value: &Value) -> String {
    match value {
        Value::Unit => "nothing".to_string(),
        Value::Str(s) => {
            let preview: String = s.chars().take(PREVIEW_CHARS).collect();
            if preview.len() < s.len() {
                format!("string {:?}", format!("{preview}..."))
            } else {
                format!("string {s:?}")
            }
        }
        other => format!("{} {other}", other.type_name()),
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
