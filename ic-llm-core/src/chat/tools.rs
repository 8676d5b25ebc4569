use candid::CandidType;
use serde::{Deserialize, Serialize};

/// A tool the model may call.
///
/// Only function tools exist for now; on the wire this is the variant `function`.
#[derive(CandidType, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Tool {
    #[serde(rename = "function")]
    Function(Function),
}

impl Tool {
    pub fn builder(name: impl Into<String>) -> ToolBuilder {
        ToolBuilder::new(name)
    }

    pub fn function(&self) -> &Function {
        match self {
            Tool::Function(function) => function,
        }
    }

    pub fn name(&self) -> &str {
        &self.function().name
    }
}

#[derive(CandidType, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

/// The arguments of a function, described as a JSON-schema style object.
#[derive(CandidType, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Parameters {
    /// Always `object`
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Parameters {
    /// Names of the declared properties, in declaration order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .flatten()
            .map(|property| property.name.as_str())
    }

    /// Required names that are not declared as a property
    pub fn undeclared_required(&self) -> impl Iterator<Item = &str> {
        self.required
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|name| !self.property_names().any(|declared| declared == *name))
    }
}

#[derive(CandidType, Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Property {
    #[serde(rename = "type")]
    pub type_: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Vec<String>>,
}

/// The types a parameter can have.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum ParameterType {
    String,
    Boolean,
    Number,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Builder for a single parameter of a function tool.
#[derive(Clone, Debug)]
pub struct ParameterBuilder {
    name: String,
    type_: ParameterType,
    description: Option<String>,
    required: bool,
    enum_values: Option<Vec<String>>,
}

impl ParameterBuilder {
    pub fn new(name: impl Into<String>, type_: ParameterType) -> Self {
        Self {
            name: name.into(),
            type_,
            description: None,
            required: false,
            enum_values: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the parameter as required.
    pub fn is_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restricts the parameter to a fixed set of values.
    pub fn with_enum_values<S: Into<String>, I: IntoIterator<Item = S>>(
        mut self,
        values: I,
    ) -> Self {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn to_property(&self) -> Property {
        Property {
            type_: self.type_.as_str().to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            enum_: self.enum_values.clone(),
        }
    }
}

/// Builder for a function tool.
///
/// `build` derives the `required` list from the parameters marked with
/// [`ParameterBuilder::is_required`], in the order they were added. Without
/// parameters the tool carries no `parameters` at all, and without required
/// parameters there is no `required` list.
#[derive(Clone, Debug)]
pub struct ToolBuilder {
    function: Function,
    parameters: Vec<ParameterBuilder>,
}

impl ToolBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            function: Function {
                name: name.into(),
                description: None,
                parameters: None,
            },
            parameters: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.function.description = Some(description.into());
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterBuilder) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn build(self) -> Tool {
        let mut function = self.function;

        if !self.parameters.is_empty() {
            let properties = self
                .parameters
                .iter()
                .map(ParameterBuilder::to_property)
                .collect::<Vec<_>>();

            let required = self
                .parameters
                .iter()
                .filter(|p| p.required)
                .map(|p| p.name.clone())
                .collect::<Vec<_>>();

            function.parameters = Some(Parameters {
                type_: "object".to_string(),
                properties: Some(properties),
                required: if required.is_empty() {
                    None
                } else {
                    Some(required)
                },
            });
        }

        Tool::Function(function)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    fn property(name: &str, type_: &str, description: &str) -> Property {
        Property {
            type_: type_.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            enum_: None,
        }
    }

    #[test]
    fn test_simple_tool_has_no_parameters() {
        let tool = ToolBuilder::new("test_tool").build();

        assert_eq!(
            tool,
            Tool::Function(Function {
                name: "test_tool".to_string(),
                description: None,
                parameters: None,
            })
        );
        assert_eq!(
            serde_json::to_value(&tool).unwrap(),
            json!({ "function": { "name": "test_tool" } })
        );
    }

    #[test]
    fn test_tool_with_required_parameter() {
        let tool = ToolBuilder::new("get_weather")
            .with_description("Get current weather for a location")
            .with_parameter(
                ParameterBuilder::new("location", ParameterType::String)
                    .with_description("The location to get weather for")
                    .is_required(),
            )
            .build();

        let parameters = tool.function().parameters.clone().unwrap();

        assert_eq!(parameters.type_, "object");
        assert_eq!(parameters.required, Some(vec!["location".to_string()]));
        assert_eq!(
            parameters.properties,
            Some(vec![property(
                "location",
                "string",
                "The location to get weather for"
            )])
        );
    }

    #[test]
    fn test_required_keeps_declaration_order() {
        let tool = ToolBuilder::new("calculate")
            .with_parameter(
                ParameterBuilder::new("operation", ParameterType::String)
                    .with_enum_values(["add", "subtract", "multiply", "divide"])
                    .is_required(),
            )
            .with_parameter(ParameterBuilder::new("precision", ParameterType::Number))
            .with_parameter(ParameterBuilder::new("a", ParameterType::Number).is_required())
            .with_parameter(ParameterBuilder::new("b", ParameterType::Number).is_required())
            .build();

        let parameters = tool.function().parameters.clone().unwrap();

        assert_eq!(
            parameters.required,
            Some(vec!["operation".into(), "a".into(), "b".into()])
        );
        assert_eq!(
            parameters.property_names().collect::<Vec<_>>(),
            vec!["operation", "precision", "a", "b"]
        );
        assert_eq!(parameters.undeclared_required().count(), 0);
    }

    #[test]
    fn test_optional_parameters_omit_required() {
        let tool = ToolBuilder::new("weather_tool")
            .with_parameter(
                ParameterBuilder::new("units", ParameterType::String)
                    .with_description("Temperature units"),
            )
            .with_parameter(
                ParameterBuilder::new("forecast", ParameterType::Boolean)
                    .with_description("Include forecast"),
            )
            .build();

        let parameters = tool.function().parameters.clone().unwrap();
        assert_eq!(parameters.required, None);

        let json = serde_json::to_value(&tool).unwrap();
        assert!(json["function"]["parameters"].get("required").is_none());
        assert_eq!(json["function"]["parameters"]["type"], "object");
    }

    #[test]
    fn test_enum_values_serialize_as_enum() {
        let tool = ToolBuilder::new("unit_converter")
            .with_parameter(
                ParameterBuilder::new("unit", ParameterType::String)
                    .with_enum_values(["meters", "feet"])
                    .is_required(),
            )
            .build();

        let json = serde_json::to_value(&tool).unwrap();

        assert_eq!(
            json["function"]["parameters"]["properties"][0],
            json!({ "type": "string", "name": "unit", "enum": ["meters", "feet"] })
        );
    }

    #[test]
    fn test_undeclared_required() {
        let parameters = Parameters {
            type_: "object".to_string(),
            properties: Some(vec![property("a", "string", "A")]),
            required: Some(vec!["a".to_string(), "b".to_string()]),
        };

        assert_eq!(parameters.undeclared_required().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test_case(ParameterType::String, "string"; "string")]
    #[test_case(ParameterType::Boolean, "boolean"; "boolean")]
    #[test_case(ParameterType::Number, "number"; "number")]
    fn test_parameter_type_names(type_: ParameterType, expected: &str) {
        assert_eq!(type_.as_str(), expected);
        assert_eq!(type_.to_string(), expected);
        assert_eq!(expected.parse::<ParameterType>().unwrap(), type_);
    }
}
