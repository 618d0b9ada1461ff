// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `format_paragraph`: apply alignment, font and emphasis to one paragraph.

use async_trait::async_trait;
use folio_core::{FolioError, ToolOutcome};
use folio_script::{Literal, PropertyList, PropertyValue, ScriptHost, Statement};
use serde::Deserialize;

use crate::tool::{parse_params, Tool};

pub const TOOL_NAME: &str = "format_paragraph";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct FormatParagraphParams {
    /// Read as a number so that `1.0` is accepted like `1`.
    paragraph: f64,
    #[serde(default)]
    alignment: Option<Alignment>,
    #[serde(default)]
    font_size: Option<f64>,
    #[serde(default)]
    font_name: Option<String>,
    #[serde(default)]
    bold: Option<bool>,
    #[serde(default)]
    italic: Option<bool>,
}

impl FormatParagraphParams {
    /// Record of the present formatting fields, in a fixed key order.
    fn properties(&self) -> PropertyList {
        let mut props = PropertyList::new();
        if let Some(alignment) = self.alignment {
            props.push(
                "alignment",
                PropertyValue::Text(Literal::new(alignment.as_str())),
            );
        }
        if let Some(size) = self.font_size {
            props.push("font size", PropertyValue::Number(size));
        }
        if let Some(name) = &self.font_name {
            props.push("font", PropertyValue::Text(Literal::new(name)));
        }
        if let Some(bold) = self.bold {
            props.push("bold", PropertyValue::Bool(bold));
        }
        if let Some(italic) = self.italic {
            props.push("italic", PropertyValue::Bool(italic));
        }
        props
    }

    /// Checks the numeric fields and returns the paragraph index.
    fn validate(&self) -> Result<u32, FolioError> {
        let paragraph = self.paragraph;
        if !(paragraph.fract() == 0.0 && paragraph >= 1.0 && paragraph <= f64::from(u32::MAX)) {
            return Err(FolioError::validation(format!(
                "paragraph must be a whole number starting at 1, got {paragraph}"
            )));
        }
        if let Some(size) = self.font_size {
            if !(size.is_finite() && size > 0.0) {
                return Err(FolioError::validation(format!(
                    "fontSize must be a positive number, got {size}"
                )));
            }
        }
        Ok(paragraph as u32)
    }
}

/// Sets properties of paragraph N in document 1. Never creates a document.
pub struct FormatParagraphTool {
    host: ScriptHost,
}

impl FormatParagraphTool {
    pub fn new(host: ScriptHost) -> Self {
        Self { host }
    }
}

#[async_trait]
impl Tool for FormatParagraphTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Format a paragraph of the active Pages document"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "paragraph": {
                    "type": "integer",
                    "minimum": 1,
                    "description": "Paragraph number, starting at 1"
                },
                "alignment": {
                    "type": "string",
                    "enum": ["left", "center", "right", "justify"],
                    "description": "Text alignment"
                },
                "fontSize": {
                    "type": "number",
                    "exclusiveMinimum": 0,
                    "description": "Font size in points"
                },
                "fontName": {
                    "type": "string",
                    "description": "Font name, e.g. \"Helvetica\""
                },
                "bold": {
                    "type": "boolean",
                    "description": "Make the text bold"
                },
                "italic": {
                    "type": "boolean",
                    "description": "Make the text italic"
                }
            },
            "required": ["paragraph"],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> ToolOutcome {
        let params: FormatParagraphParams = match parse_params(input) {
            Ok(params) => params,
            Err(err) => return err.into(),
        };
        let paragraph = match params.validate() {
            Ok(paragraph) => paragraph,
            Err(err) => return err.into(),
        };

        let properties = params.properties();
        if properties.is_empty() {
            return FolioError::validation(
                "no formatting given; set at least one of \
                 alignment, fontSize, fontName, bold, italic",
            )
            .into();
        }

        let script = self.host.application().then(Statement::tell_document(
            1,
            vec![Statement::SetParagraphProperties {
                index: paragraph,
                properties,
            }],
        ));
        let message = format!("Paragraph {paragraph} formatted");
        self.host.run_with_message(&script, &message).await
    }
}
