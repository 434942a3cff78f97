use serde_json::{Map, Value};

use crate::assets::image_ref::check_image_ref;
use crate::config::ValidatorConfig;
use crate::foundation::error::{TemplateError, TemplateIssue};

/// Fields every template must carry, in the order their presence is checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["slug", "name", "base_file", "screen_points"];

pub const OPTIONAL_FIELDS: [&str; 7] = [
    "mask_aspect_ratio",
    "mask_file",
    "brightness",
    "contrast",
    "categories",
    "author",
    "backlink",
];

pub fn is_known_field(name: &str) -> bool {
    REQUIRED_FIELDS.contains(&name) || OPTIONAL_FIELDS.contains(&name)
}

/// Run the template rule chain, stopping at the first violated rule.
///
/// `position` is the record's index in the `templates` array and is only used for reporting.
pub fn validate_template(
    value: &Value,
    position: usize,
    cfg: &ValidatorConfig,
) -> Result<(), TemplateError> {
    check_template(value, cfg).map_err(|issue| {
        let slug = value.get("slug").map(render_slug);
        TemplateError::new(slug, position, issue)
    })
}

fn render_slug(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn check_template(value: &Value, cfg: &ValidatorConfig) -> Result<(), TemplateIssue> {
    let Value::Object(fields) = value else {
        return Err(TemplateIssue::NotAnObject);
    };

    for name in REQUIRED_FIELDS {
        if !fields.contains_key(name) {
            return Err(TemplateIssue::MissingField(name));
        }
    }
    require_str(fields, "slug")?;
    require_str(fields, "name")?;

    let base_file = require_str(fields, "base_file")?;
    check_image_ref(&cfg.base_dir, base_file)?;

    check_screen_points(require(fields, "screen_points")?)?;
    check_mask(fields, cfg)?;

    if let Some(categories) = fields.get("categories") {
        let Value::Array(items) = categories else {
            return Err(TemplateIssue::CategoriesNotList);
        };
        if !items.iter().all(Value::is_string) {
            return Err(TemplateIssue::CategoryNotString);
        }
    }

    optional_str(fields, "author")?;
    optional_str(fields, "backlink")?;
    optional_float(fields, "brightness", cfg)?;
    optional_float(fields, "contrast", cfg)?;

    if let Some(extra) = fields.keys().find(|k| !is_known_field(k)) {
        return Err(TemplateIssue::UnexpectedField(extra.clone()));
    }

    Ok(())
}

fn check_screen_points(points: &Value) -> Result<(), TemplateIssue> {
    let points = match points {
        Value::Array(points) if points.len() == 4 => points,
        _ => return Err(TemplateIssue::ScreenPointCount),
    };

    for point in points {
        let coords = match point {
            Value::Array(coords) if coords.len() == 2 => coords,
            _ => return Err(TemplateIssue::ScreenPointNot2d),
        };
        if !coords.iter().all(Value::is_number) {
            return Err(TemplateIssue::ScreenPointNotNumeric);
        }
    }

    Ok(())
}

fn check_mask(fields: &Map<String, Value>, cfg: &ValidatorConfig) -> Result<(), TemplateIssue> {
    match (fields.get("mask_aspect_ratio"), fields.get("mask_file")) {
        (Some(_), Some(_)) => Err(TemplateIssue::MaskBoth),
        (None, None) => Err(TemplateIssue::MaskMissing),
        (Some(ratio), None) => {
            if is_float(ratio, cfg) {
                Ok(())
            } else {
                Err(TemplateIssue::NotFloat("mask aspect ratio"))
            }
        }
        (None, Some(file)) => {
            let file = file
                .as_str()
                .ok_or(TemplateIssue::NotString("mask_file"))?;
            check_image_ref(&cfg.base_dir, file)?;
            Ok(())
        }
    }
}

// An integer literal such as `1`, `-0` or one past u64 range is not a float unless the config
// relaxes the rule. Numbers keep their source text (`arbitrary_precision`), so the literal decides.
fn is_float(v: &Value, cfg: &ValidatorConfig) -> bool {
    match v {
        Value::Number(n) if cfg.strict_floats => is_float_literal(&n.to_string()),
        Value::Number(_) => true,
        _ => false,
    }
}

fn is_float_literal(text: &str) -> bool {
    text.contains(['.', 'e', 'E'])
}

fn require<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a Value, TemplateIssue> {
    fields.get(name).ok_or(TemplateIssue::MissingField(name))
}

fn require_str<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, TemplateIssue> {
    require(fields, name)?
        .as_str()
        .ok_or(TemplateIssue::NotString(name))
}

fn optional_str(fields: &Map<String, Value>, name: &'static str) -> Result<(), TemplateIssue> {
    match fields.get(name) {
        Some(v) if !v.is_string() => Err(TemplateIssue::NotString(name)),
        _ => Ok(()),
    }
}

fn optional_float(
    fields: &Map<String, Value>,
    name: &'static str,
    cfg: &ValidatorConfig,
) -> Result<(), TemplateIssue> {
    match fields.get(name) {
        Some(v) if !is_float(v, cfg) => Err(TemplateIssue::NotFloat(name)),
        _ => Ok(()),
    }
}
