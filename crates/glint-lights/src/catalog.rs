//! Immutable kind -> defaults lookup with an optional TOML overlay.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::defs::{LightDef, builtin_defs};

/// Read-only mapping from device kind to its default parameter record, plus
/// the generic fallback. Built once at startup and never mutated, so shared
/// references are safe everywhere.
#[derive(Clone, Debug)]
pub struct Catalog {
    generic: LightDef,
    by_kind: HashMap<String, LightDef>,
}

impl Catalog {
    /// The built-in definition table.
    pub fn builtin() -> Self {
        let mut by_kind = HashMap::new();
        for (kind, def) in builtin_defs() {
            by_kind.insert(kind.to_string(), def);
        }
        Catalog {
            generic: LightDef::generic(),
            by_kind,
        }
    }

    /// Defaults for `kind`, falling back to the generic record for anything
    /// unrecognized. Total over all inputs.
    pub fn lookup(&self, kind: &str) -> &LightDef {
        self.by_kind.get(kind).unwrap_or(&self.generic)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.by_kind.contains_key(kind)
    }

    pub fn generic(&self) -> &LightDef {
        &self.generic
    }

    /// Known kinds, sorted for stable listings.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.by_kind.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Built-in table overlaid with a TOML config: a `[generic]` patch and
    /// `[kinds.<name>]` tables of per-field overrides. Patched kinds merge
    /// field-wise onto their built-in record, or onto the patched generic
    /// record when the kind is new.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: CatalogConfig = toml::from_str(toml_str)?;
        let mut catalog = Catalog::builtin();
        if let Some(patch) = &cfg.generic {
            catalog.generic = patch.apply(&catalog.generic);
        }
        for (kind, patch) in cfg.kinds {
            let base = catalog
                .by_kind
                .get(&kind)
                .cloned()
                .unwrap_or_else(|| catalog.generic.clone());
            catalog.by_kind.insert(kind, patch.apply(&base));
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct CatalogConfig {
    pub generic: Option<LightDefPatch>,
    #[serde(default)]
    pub kinds: HashMap<String, LightDefPatch>,
}

/// Partial record: only the fields present in the file override the base.
#[derive(Deserialize, Default, Clone, Debug)]
pub struct LightDefPatch {
    pub disabled: Option<bool>,
    pub texture: Option<String>,
    pub spot_texture: Option<String>,
    pub texture_rotation: Option<f32>,
    pub cone_angle: Option<f32>,
    pub bloom: Option<f32>,
    pub intensity: Option<f32>,
    pub forward: Option<f32>,
    pub left: Option<f32>,
    pub up: Option<f32>,
    pub rotation: Option<f32>,
    pub mix: Option<f32>,
    pub cast_shadows: Option<bool>,
    pub shadow_range: Option<f32>,
}

impl LightDefPatch {
    pub fn apply(&self, base: &LightDef) -> LightDef {
        LightDef {
            disabled: self.disabled.unwrap_or(base.disabled),
            texture: self.texture.clone().unwrap_or_else(|| base.texture.clone()),
            spot_texture: self
                .spot_texture
                .clone()
                .unwrap_or_else(|| base.spot_texture.clone()),
            texture_rotation: self.texture_rotation.unwrap_or(base.texture_rotation),
            cone_angle: self.cone_angle.unwrap_or(base.cone_angle),
            bloom: self.bloom.unwrap_or(base.bloom),
            intensity: self.intensity.unwrap_or(base.intensity),
            forward: self.forward.unwrap_or(base.forward),
            left: self.left.unwrap_or(base.left),
            up: self.up.unwrap_or(base.up),
            rotation: self.rotation.unwrap_or(base.rotation),
            mix: self.mix.unwrap_or(base.mix),
            cast_shadows: self.cast_shadows.unwrap_or(base.cast_shadows),
            shadow_range: self.shadow_range.unwrap_or(base.shadow_range),
        }
    }
}
