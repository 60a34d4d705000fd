use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    In,
    Out,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::In => f.write_str("IN"),
            Scope::Out => f.write_str("OUT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub scope: Scope,
    pub value: Value,
}

/// Property bag keyed by `(name, scope)`.
///
/// Serialized as a list of [`Property`] entries so formats whose map keys
/// must be strings can carry it. When a decoded list repeats a key, the
/// last entry wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Property>", into = "Vec<Property>")]
pub struct Context {
    properties: HashMap<(String, Scope), Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_property(&self, name: &str, scope: Scope) -> Option<&Value> {
        self.properties.get(&(name.to_string(), scope))
    }

    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        scope: Scope,
        value: Value,
    ) -> &mut Self {
        self.properties.insert((name.into(), scope), value);
        self
    }

    pub fn remove_property(&mut self, name: &str, scope: Scope) -> Option<Property> {
        self.properties
            .remove_entry(&(name.to_string(), scope))
            .map(|((name, scope), value)| Property { name, scope, value })
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.properties.iter().map(|((name, scope), value)| Property {
            name: name.clone(),
            scope: *scope,
            value: value.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl From<Vec<Property>> for Context {
    fn from(entries: Vec<Property>) -> Self {
        let properties = entries
            .into_iter()
            .map(|p| ((p.name, p.scope), p.value))
            .collect();
        Self { properties }
    }
}

impl From<Context> for Vec<Property> {
    fn from(context: Context) -> Self {
        context
            .properties
            .into_iter()
            .map(|((name, scope), value)| Property { name, scope, value })
            .collect()
    }
}
