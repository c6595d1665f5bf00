use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use dinnercaster_core::{Error, ServiceInfo};

/// Definition of a tool as advertised by `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// The closed set of invocable tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Echo,
    GetInfo,
}

impl Tool {
    /// Every tool, in advertised order.
    pub const ALL: [Self; 2] = [Self::Echo, Self::GetInfo];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::GetInfo => "get_info",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    fn definition(self) -> ToolDefinition {
        match self {
            Self::Echo => ToolDefinition {
                name: self.name().to_string(),
                description: "Echo back the provided text.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "text": {
                            "type": "string",
                            "description": "Text to echo back"
                        }
                    },
                    "required": ["text"]
                }),
            },
            Self::GetInfo => ToolDefinition {
                name: self.name().to_string(),
                description: "Get information about the Dinnercaster3 service.".to_string(),
                input_schema: serde_json::json!({
                    "type": "object",
                    "properties": {},
                    "required": []
                }),
            },
        }
    }

    /// Run the tool against its arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] when an argument has the wrong type.
    pub fn invoke(self, args: &Map<String, Value>) -> Result<ToolOutput, Error> {
        match self {
            Self::Echo => {
                let text = match args.get("text") {
                    None => "",
                    Some(Value::String(text)) => text.as_str(),
                    Some(other) => {
                        return Err(Error::Internal(format!(
                            "'text' must be a string, got {}",
                            value_kind(other)
                        )))
                    }
                };
                Ok(ToolOutput::Text(format!("Echo: {text}")))
            }
            Self::GetInfo => Ok(ToolOutput::Record(serde_json::to_value(
                ServiceInfo::current(),
            )?)),
        }
    }
}

/// Raw result of a tool, before it is wrapped as text content.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Text(String),
    Record(Value),
}

impl ToolOutput {
    /// Stringify the output for a `text` content block.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if a record fails to serialize.
    pub fn into_text(self) -> Result<String, Error> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Record(value) => Ok(serde_json::to_string_pretty(&value)?),
        }
    }
}

static DEFINITIONS: LazyLock<Vec<ToolDefinition>> =
    LazyLock::new(|| Tool::ALL.into_iter().map(Tool::definition).collect());

/// Read-only registry of every tool this service exposes.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Return the tool definitions for the `tools/list` method.
    #[must_use]
    pub fn definitions() -> &'static [ToolDefinition] {
        &DEFINITIONS
    }

    /// Invoke a tool by name.
    ///
    /// # Errors
    ///
    /// [`Error::MethodNotFound`] for an unknown name, otherwise whatever the
    /// tool itself reports.
    pub fn invoke(name: &str, args: &Map<String, Value>) -> Result<ToolOutput, Error> {
        Tool::from_name(name)
            .ok_or(Error::MethodNotFound)?
            .invoke(args)
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn all_tools_defined_in_order() {
        let tools = ToolRegistry::definitions();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["echo", "get_info"]);
    }

    #[test]
    fn tools_serialize() {
        let json = serde_json::to_string(ToolRegistry::definitions()).unwrap();
        assert!(json.contains("get_info"));
        assert!(json.contains("inputSchema"));
    }

    #[test]
    fn echo_requires_text() {
        let tools = ToolRegistry::definitions();
        let echo = tools.iter().find(|t| t.name == "echo").unwrap();
        let required = echo.input_schema["required"].as_array().unwrap();
        assert_eq!(required, &[Value::from("text")]);
    }

    #[test]
    fn echo_prefixes_text() {
        let out = ToolRegistry::invoke("echo", &args(serde_json::json!({"text": "hi"}))).unwrap();
        assert_eq!(out, ToolOutput::Text("Echo: hi".to_string()));
    }

    #[test]
    fn echo_defaults_to_empty() {
        let out = ToolRegistry::invoke("echo", &Map::new()).unwrap();
        assert_eq!(out.into_text().unwrap(), "Echo: ");
    }

    #[test]
    fn echo_rejects_non_string_text() {
        let err = ToolRegistry::invoke("echo", &args(serde_json::json!({"text": 5}))).unwrap_err();
        assert_eq!(err, Error::Internal("'text' must be a string, got number".to_string()));
    }

    #[test]
    fn get_info_ignores_arguments() {
        let out = ToolRegistry::invoke("get_info", &args(serde_json::json!({"x": 1}))).unwrap();
        let ToolOutput::Record(record) = out else {
            panic!("expected a record");
        };
        assert_eq!(record["service"], "Dinnercaster3");
        assert!(record.get("description").is_some());
        assert!(record.get("version").is_some());
    }

    #[test]
    fn unknown_tool_is_method_not_found() {
        let err = ToolRegistry::invoke("unknown_tool", &Map::new()).unwrap_err();
        assert_eq!(err, Error::MethodNotFound);
    }

    #[test]
    fn name_roundtrip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(Tool::from_name("Echo"), None);
    }
}
