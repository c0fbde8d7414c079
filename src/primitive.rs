use derive_more::Constructor;
use serde::Serialize;

use crate::style::{Color, Decoration, FontStyle, FontWeight};

/// One drawable unit of the generated grid, independent of any rendering
/// technology. The serialized form mirrors the element records a host
/// canvas consumes: a `type` tag plus camelCase members.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Primitive {
    #[serde(rename = "SHAPE")]
    Shape(ShapePrimitive),
    #[serde(rename = "TEXT")]
    Text(TextPrimitive),
}

#[derive(Clone, Constructor, Debug, PartialEq, Serialize)]
pub struct ShapePrimitive {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub left: f64,
    pub fill: Color,
}

impl ShapePrimitive {
    /// The rectangular outline path of this shape in its own viewbox,
    /// as hosts expect it.
    pub fn outline_path(&self) -> String {
        format!("M 0 0 h {} V {} H 0 L 0 0", self.width, self.height)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPrimitive {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub left: f64,
    pub text: String,
    pub color: Color,
    pub decoration: Decoration,
    pub font_style: FontStyle,
    pub font_weight: FontWeight,
    pub font_size: f64,
}
