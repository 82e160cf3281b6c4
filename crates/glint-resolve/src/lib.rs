//! Merges catalog defaults with per-device overrides, and writes back only
//! the overrides that differ from their defaults.
#![forbid(unsafe_code)]

use glint_ini::IniDoc;
use glint_lights::{Catalog, LightDef};

pub mod controls;


/// Section of the device's persisted text that holds our overrides. Foreign
/// sections and unrecognized keys are never touched.
pub const SECTION: &str = "ProjectedLights";

/// Largest cone angle that renders reliably when shadows are cast.
pub const SHADOWED_CONE_LIMIT: f32 = 136.0;
/// Cone ceiling without shadows.
pub const CONE_LIMIT: f32 = 180.0;

// A new value this close to the default is treated as the default, so UI
// rounding never persists noise.
const DEFAULT_SNAP: f32 = 0.001;
// A stored value this close to the new one is left alone. Tighter than
// DEFAULT_SNAP so a 3-decimal serialization round-trip is always a no-op.
const WRITE_SUPPRESS: f32 = 0.0009;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoolField {
    Enabled,
    CastShadows,
}

impl BoolField {
    pub const fn key(self) -> &'static str {
        match self {
            BoolField::Enabled => "Enabled",
            BoolField::CastShadows => "CastShadows",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FloatField {
    TextureRotation,
    ConeAngle,
    Bloom,
    Intensity,
    Forward,
    Left,
    Up,
    Rotation,
    Mix,
    ShadowRange,
}

impl FloatField {
    pub const fn key(self) -> &'static str {
        match self {
            FloatField::TextureRotation => "TextureRotation",
            FloatField::ConeAngle => "ConeAngle",
            FloatField::Bloom => "Bloom",
            FloatField::Intensity => "Intensity",
            FloatField::Forward => "Forward",
            FloatField::Left => "Left",
            FloatField::Up => "Up",
            FloatField::Rotation => "Rotation",
            FloatField::Mix => "Mix",
            FloatField::ShadowRange => "ShadowRange",
        }
    }

    // Override values outside the field's valid range fall back to the
    // default for that field alone.
    fn accepts(self, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            FloatField::Mix => (0.0..=1.0).contains(&value),
            FloatField::Bloom | FloatField::ShadowRange => value > 0.0,
            _ => true,
        }
    }
}

/// Every recognized override key, for generic get/set surfaces (CLI, UI).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Bool(BoolField),
    Float(FloatField),
    Texture,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::Bool(BoolField::Enabled),
        Field::Bool(BoolField::CastShadows),
        Field::Texture,
        Field::Float(FloatField::ConeAngle),
        Field::Float(FloatField::Bloom),
        Field::Float(FloatField::Intensity),
        Field::Float(FloatField::Forward),
        Field::Float(FloatField::Left),
        Field::Float(FloatField::Up),
        Field::Float(FloatField::Rotation),
        Field::Float(FloatField::TextureRotation),
        Field::Float(FloatField::Mix),
        Field::Float(FloatField::ShadowRange),
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Field::Bool(f) => f.key(),
            Field::Float(f) => f.key(),
            Field::Texture => "Texture",
        }
    }

    pub fn parse(name: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(name))
    }
}

/// Effective parameters for one device: catalog defaults for its kind merged
/// with whatever overrides its persisted text carries. Total over all inputs;
/// malformed text, unknown kinds, and bad values all degrade to defaults.
pub fn resolve(catalog: &Catalog, kind: &str, text: &str) -> LightDef {
    let base = catalog.lookup(kind);
    let doc = IniDoc::parse(text);

    // Two-phase: the shadow flag decides the texture default and the cone
    // ceiling, so it resolves before any dependent field.
    let enabled = doc
        .get_bool(SECTION, BoolField::Enabled.key())
        .unwrap_or(!base.disabled);
    let cast_shadows = doc
        .get_bool(SECTION, BoolField::CastShadows.key())
        .unwrap_or(base.cast_shadows);
    let texture = match doc.get(SECTION, Field::Texture.key()) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ if cast_shadows => base.spot_texture.clone(),
        _ => base.texture.clone(),
    };
    let cone_limit = if cast_shadows {
        SHADOWED_CONE_LIMIT
    } else {
        CONE_LIMIT
    };

    let float = |field: FloatField| -> f32 {
        match doc.get_f32(SECTION, field.key()) {
            Some(v) if field.accepts(v) => v,
            _ => float_default(base, field),
        }
    };

    LightDef {
        disabled: !enabled,
        spot_texture: texture.clone(),
        texture,
        texture_rotation: float(FloatField::TextureRotation),
        cone_angle: float(FloatField::ConeAngle).min(cone_limit),
        bloom: float(FloatField::Bloom),
        intensity: float(FloatField::Intensity),
        forward: float(FloatField::Forward),
        left: float(FloatField::Left),
        up: float(FloatField::Up),
        rotation: float(FloatField::Rotation),
        mix: float(FloatField::Mix),
        cast_shadows,
        shadow_range: float(FloatField::ShadowRange),
    }
}

fn float_default(base: &LightDef, field: FloatField) -> f32 {
    match field {
        FloatField::TextureRotation => base.texture_rotation,
        FloatField::ConeAngle => base.cone_angle,
        FloatField::Bloom => base.bloom,
        FloatField::Intensity => base.intensity,
        FloatField::Forward => base.forward,
        FloatField::Left => base.left,
        FloatField::Up => base.up,
        FloatField::Rotation => base.rotation,
        FloatField::Mix => base.mix,
        FloatField::ShadowRange => base.shadow_range,
    }
}

pub fn default_bool(catalog: &Catalog, kind: &str, field: BoolField) -> bool {
    let base = catalog.lookup(kind);
    match field {
        BoolField::Enabled => !base.disabled,
        BoolField::CastShadows => base.cast_shadows,
    }
}

pub fn default_float(catalog: &Catalog, kind: &str, field: FloatField) -> f32 {
    float_default(catalog.lookup(kind), field)
}

/// Stored override for `field`, or its default. Cone clamping happens in
/// [`resolve`] only; this is the raw slider value.
pub fn get_float(catalog: &Catalog, kind: &str, text: &str, field: FloatField) -> f32 {
    match IniDoc::parse(text).get_f32(SECTION, field.key()) {
        Some(v) if field.accepts(v) => v,
        _ => default_float(catalog, kind, field),
    }
}

pub fn get_bool(catalog: &Catalog, kind: &str, text: &str, field: BoolField) -> bool {
    IniDoc::parse(text)
        .get_bool(SECTION, field.key())
        .unwrap_or_else(|| default_bool(catalog, kind, field))
}

/// Stored texture override, or "" meaning "use the kind's default texture".
pub fn get_texture(text: &str) -> String {
    IniDoc::parse(text)
        .get(SECTION, Field::Texture.key())
        .unwrap_or("")
        .to_string()
}

/// Persists a float override. Values within `DEFAULT_SNAP` of the default
/// delete the key instead (and the section once it empties); otherwise the
/// key is rewritten only when it differs from what is already stored by at
/// least `WRITE_SUPPRESS`. Returns the updated text, or `None` when nothing
/// changed.
pub fn set_float(
    catalog: &Catalog,
    kind: &str,
    text: &str,
    field: FloatField,
    value: f32,
) -> Option<String> {
    let default = default_float(catalog, kind, field);
    let mut doc = IniDoc::parse(text);
    if (value - default).abs() < DEFAULT_SNAP {
        return remove_override(&mut doc, field.key());
    }
    if let Some(stored) = doc.get_f32(SECTION, field.key()) {
        if (stored - value).abs() < WRITE_SUPPRESS {
            return None;
        }
    }
    doc.set(SECTION, field.key(), &format_float(value));
    Some(doc.to_string())
}

pub fn set_bool(
    catalog: &Catalog,
    kind: &str,
    text: &str,
    field: BoolField,
    value: bool,
) -> Option<String> {
    let default = default_bool(catalog, kind, field);
    let mut doc = IniDoc::parse(text);
    if value == default {
        return remove_override(&mut doc, field.key());
    }
    if doc.get_bool(SECTION, field.key()) == Some(value) {
        return None;
    }
    doc.set(SECTION, field.key(), if value { "true" } else { "false" });
    Some(doc.to_string())
}

/// Persists a texture override. The empty string means "use the kind's
/// default" and deletes the key.
pub fn set_texture(text: &str, value: &str) -> Option<String> {
    let mut doc = IniDoc::parse(text);
    if value.is_empty() {
        return remove_override(&mut doc, Field::Texture.key());
    }
    if doc.get(SECTION, Field::Texture.key()) == Some(value) {
        return None;
    }
    doc.set(SECTION, Field::Texture.key(), value);
    Some(doc.to_string())
}

fn remove_override(doc: &mut IniDoc, key: &str) -> Option<String> {
    if doc.remove(SECTION, key) {
        doc.remove_section_if_empty(SECTION);
        Some(doc.to_string())
    } else {
        None
    }
}

// 3 decimals, '.' separator; Rust float formatting is locale-invariant, so
// the persisted text diffs stay stable across machines.
fn format_float(value: f32) -> String {
    format!("{value:.3}")
}
