//! Prompt construction from parameter schema facts.

use std::fmt::Write as _;

/// How many values to request per parameter.
pub const VALUES_PER_PARAMETER: usize = 20;

/// System prompt framing the value-generation session.
pub const SYSTEM_PROMPT: &str = "You are an AI assistant for REST API testing. The user will \
ask for parameter values to assign to HTTP parameters for requests to an API. Please generate \
valid, plausible, and diverse values, that are in the context of the API and endpoint being \
invoked. Take into account constraints from the user such type, format, minimum and maximum. \
Your response should be only contains the generated values, one per line, and no other text.";

/// Schema facts about one HTTP parameter of one operation.
///
/// Fields mirror what the API specification carries; absent facts are
/// empty strings (or the literal `"missing"` for the format, which
/// some spec exports emit). The clause logic skips facts too short to
/// be meaningful.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterQuery {
    /// Name of the API under test.
    pub api: String,
    /// Operation identifier, e.g. `GET /items`.
    pub operation: String,
    /// Free-text endpoint documentation.
    pub operation_description: String,
    /// Parameter name.
    pub parameter_name: String,
    /// Declared type, e.g. `string` or `integer`.
    pub parameter_type: String,
    /// Declared format, e.g. `date-time`; `"missing"` when absent.
    pub parameter_format: String,
    /// Minimum constraint: length for strings, value otherwise.
    pub parameter_min: String,
    /// Maximum constraint: length for strings, value otherwise.
    pub parameter_max: String,
    /// Free-text parameter documentation.
    pub parameter_description: String,
}

impl ParameterQuery {
    /// Build the user prompt requesting values for this parameter.
    pub fn prompt(&self) -> String {
        let operation_description = self.operation_description.trim();
        let parameter_description = self.parameter_description.trim();

        let mut prompt = format!(
            "Please provide at least {VALUES_PER_PARAMETER} plausible and diverse values for \
             the parameter called '{}' of the endpoint '{}' of the API '{}'. ",
            self.parameter_name, self.operation, self.api,
        );

        if operation_description.len() > 3 {
            write!(
                prompt,
                "Documentation describes this endpoint: {operation_description}"
            )
            .unwrap();
            if !operation_description.ends_with('.') {
                prompt.push('.');
            }
            prompt.push('\n');
        }

        write!(
            prompt,
            "The parameter to generate values for is called '{}', and is of type {}",
            self.parameter_name, self.parameter_type,
        )
        .unwrap();
        if self.parameter_format.len() > 2 && self.parameter_format != "missing" {
            write!(prompt, " with {} format", self.parameter_format).unwrap();
        }
        prompt.push_str(". ");

        if self.parameter_type == "string" {
            // Length constraints; a zero minimum adds nothing.
            if is_positive_integer(&self.parameter_min) {
                write!(
                    prompt,
                    "The minimum length of values must be {}. ",
                    self.parameter_min
                )
                .unwrap();
            }
            if !self.parameter_max.is_empty() {
                write!(
                    prompt,
                    "The maximum length of values must be {}. ",
                    self.parameter_max
                )
                .unwrap();
            }
        } else {
            if !self.parameter_min.is_empty() {
                write!(prompt, "Values must be greater than {}. ", self.parameter_min).unwrap();
            }
            if !self.parameter_max.is_empty() {
                write!(prompt, "Values must be lower than {}. ", self.parameter_max).unwrap();
            }
        }

        if parameter_description.len() > 2 {
            write!(
                prompt,
                "Consider this description for the parameter when generating values: \
                 {parameter_description}"
            )
            .unwrap();
            if !parameter_description.ends_with('.') {
                prompt.push('.');
            }
            prompt.push(' ');
        }

        prompt
    }
}

fn is_positive_integer(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit())
        && text.chars().any(|c| c != '0')
}
