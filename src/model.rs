use serde::Deserialize as _;
use serde_json::{Number, Value};

use crate::foundation::core::ScreenQuad;
use crate::foundation::error::{IndexError, IndexResult};

/// A template record that passed every validation rule.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Template {
    pub slug: String,
    pub name: String,
    /// Path relative to the index directory.
    pub base_file: String,
    pub screen_quad: ScreenQuad,
    pub mask: Mask,
    pub categories: Vec<String>,
    pub author: Option<String>,
    pub backlink: Option<String>,
    pub brightness: Option<f64>,
    pub contrast: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mask {
    AspectRatio(f64),
    /// Path relative to the index directory.
    File(String),
}

// Boundary shape of a record; only deserialized after the rule chain accepted it.
// Numbers stay `Number` here since they keep their source text, which serde only hands to an
// `f64` when it round-trips exactly (`2e3` does not).
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateDef {
    slug: String,
    name: String,
    base_file: String,
    screen_points: [[Number; 2]; 4],
    mask_aspect_ratio: Option<Number>,
    mask_file: Option<String>,
    #[serde(default)]
    categories: Vec<String>,
    author: Option<String>,
    backlink: Option<String>,
    brightness: Option<Number>,
    contrast: Option<Number>,
}

fn to_f64(n: &Number, field: &str) -> IndexResult<f64> {
    n.as_f64()
        .ok_or_else(|| IndexError::serde(format!("{field} value {n} is out of f64 range")))
}

fn opt_f64(n: Option<Number>, field: &str) -> IndexResult<Option<f64>> {
    n.map(|n| to_f64(&n, field)).transpose()
}

impl Template {
    /// Convert a validated template record into its typed form.
    pub fn from_value(value: &Value) -> IndexResult<Self> {
        let def = TemplateDef::deserialize(value).map_err(|e| IndexError::serde(e.to_string()))?;
        def.into_template()
    }
}

impl TemplateDef {
    fn into_template(self) -> IndexResult<Template> {
        let mask = match (self.mask_aspect_ratio, self.mask_file) {
            (Some(ratio), None) => Mask::AspectRatio(to_f64(&ratio, "mask_aspect_ratio")?),
            (None, Some(file)) => Mask::File(file),
            _ => {
                return Err(IndexError::serde(format!(
                    "template '{}' must have exactly one mask",
                    self.slug
                )));
            }
        };

        let mut corners = [[0.0; 2]; 4];
        for (corner, [x, y]) in corners.iter_mut().zip(&self.screen_points) {
            *corner = [to_f64(x, "screen_points")?, to_f64(y, "screen_points")?];
        }

        Ok(Template {
            slug: self.slug,
            name: self.name,
            base_file: self.base_file,
            screen_quad: ScreenQuad::from(corners),
            mask,
            categories: self.categories,
            author: self.author,
            backlink: self.backlink,
            brightness: opt_f64(self.brightness, "brightness")?,
            contrast: opt_f64(self.contrast, "contrast")?,
        })
    }
}
