//! Declarative control surface for the resolvable fields. A UI layer walks
//! [`CONTROLS`] and binds each entry to the field accessors; nothing here
//! renders anything.

use glint_lights::Catalog;

use crate::{BoolField, FloatField, get_bool, get_float, get_texture, set_float, set_texture};

#[derive(Clone, Copy, Debug)]
pub struct SliderLimits {
    pub min: f32,
    pub max: f32,
    /// Logarithmic steps for multiplicative quantities (bloom), linear for
    /// additive ones (angles, offsets).
    pub logarithmic: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum Binding {
    Toggle(BoolField),
    Slider {
        field: FloatField,
        limits: SliderLimits,
        /// Display units per stored unit. Mix is stored 0..1 and shown 0..100.
        scale: f32,
        decimals: usize,
        unit: &'static str,
    },
    TextureCombo,
}

#[derive(Clone, Copy, Debug)]
pub struct Control {
    pub id: &'static str,
    pub label: &'static str,
    pub binding: Binding,
}

pub const CONTROLS: &[Control] = &[
    Control {
        id: "ProjectedLightsEnabled",
        label: "Projected light",
        binding: Binding::Toggle(BoolField::Enabled),
    },
    Control {
        id: "Mix",
        label: "Point light mix",
        binding: Binding::Slider {
            field: FloatField::Mix,
            limits: SliderLimits { min: 0.0, max: 100.0, logarithmic: false },
            scale: 100.0,
            decimals: 0,
            unit: "%",
        },
    },
    Control {
        id: "Bloom",
        label: "Bloom",
        binding: Binding::Slider {
            field: FloatField::Bloom,
            limits: SliderLimits { min: 0.1, max: 200.0, logarithmic: true },
            scale: 1.0,
            decimals: 1,
            unit: "",
        },
    },
    Control {
        id: "Intensity",
        label: "Intensity",
        binding: Binding::Slider {
            field: FloatField::Intensity,
            limits: SliderLimits { min: 0.0, max: 10.0, logarithmic: false },
            scale: 1.0,
            decimals: 1,
            unit: "",
        },
    },
    Control {
        id: "CastShadows",
        label: "Cast shadows",
        binding: Binding::Toggle(BoolField::CastShadows),
    },
    Control {
        id: "ShadowRange",
        label: "Shadow range",
        binding: Binding::Slider {
            field: FloatField::ShadowRange,
            limits: SliderLimits { min: 5.0, max: 200.0, logarithmic: false },
            scale: 1.0,
            decimals: 1,
            unit: " m",
        },
    },
    Control {
        id: "ConeAngle",
        label: "Cone angle",
        binding: Binding::Slider {
            field: FloatField::ConeAngle,
            limits: SliderLimits { min: 0.0, max: 180.0, logarithmic: false },
            scale: 1.0,
            decimals: 1,
            unit: " \u{b0}",
        },
    },
    Control {
        id: "Texture",
        label: "Texture",
        binding: Binding::TextureCombo,
    },
    Control {
        id: "TextureRotation",
        label: "Texture rotation",
        binding: Binding::Slider {
            field: FloatField::TextureRotation,
            limits: SliderLimits { min: -180.0, max: 180.0, logarithmic: false },
            scale: 1.0,
            decimals: 1,
            unit: " \u{b0}",
        },
    },
    Control {
        id: "Rotation",
        label: "Rotation",
        binding: Binding::Slider {
            field: FloatField::Rotation,
            limits: SliderLimits { min: -180.0, max: 180.0, logarithmic: false },
            scale: 1.0,
            decimals: 1,
            unit: " \u{b0}",
        },
    },
    Control {
        id: "Forward",
        label: "Forward offset",
        binding: Binding::Slider {
            field: FloatField::Forward,
            limits: SliderLimits { min: -5.0, max: 5.0, logarithmic: false },
            scale: 1.0,
            decimals: 2,
            unit: " m",
        },
    },
    Control {
        id: "Left",
        label: "Left offset",
        binding: Binding::Slider {
            field: FloatField::Left,
            limits: SliderLimits { min: -5.0, max: 5.0, logarithmic: false },
            scale: 1.0,
            decimals: 2,
            unit: " m",
        },
    },
    Control {
        id: "Up",
        label: "Up offset",
        binding: Binding::Slider {
            field: FloatField::Up,
            limits: SliderLimits { min: -5.0, max: 5.0, logarithmic: false },
            scale: 1.0,
            decimals: 2,
            unit: " m",
        },
    },
];

impl Control {
    pub fn find(id: &str) -> Option<&'static Control> {
        CONTROLS.iter().find(|c| c.id == id)
    }

    /// Whether the control is operable for this device. Everything except the
    /// master toggle is gated on the resolved enabled flag; shadow range
    /// additionally needs the resolved shadow flag.
    pub fn is_enabled(&self, catalog: &Catalog, kind: &str, text: &str) -> bool {
        if matches!(self.binding, Binding::Toggle(BoolField::Enabled)) {
            return true;
        }
        if !get_bool(catalog, kind, text, BoolField::Enabled) {
            return false;
        }
        match self.binding {
            Binding::Slider { field: FloatField::ShadowRange, .. } => {
                get_bool(catalog, kind, text, BoolField::CastShadows)
            }
            _ => true,
        }
    }
}

/// Slider value in display units (mix comes back as a percentage).
pub fn slider_get(catalog: &Catalog, kind: &str, text: &str, control: &Control) -> Option<f32> {
    match control.binding {
        Binding::Slider { field, scale, .. } => {
            Some(get_float(catalog, kind, text, field) * scale)
        }
        _ => None,
    }
}

/// Slider default in display units, for "reset to default" affordances.
pub fn slider_default(catalog: &Catalog, kind: &str, control: &Control) -> Option<f32> {
    match control.binding {
        Binding::Slider { field, scale, .. } => {
            Some(crate::default_float(catalog, kind, field) * scale)
        }
        _ => None,
    }
}

/// Writes a slider edit back in display units. Returns the updated text when
/// the persisted value changed.
pub fn slider_set(
    catalog: &Catalog,
    kind: &str,
    text: &str,
    control: &Control,
    display_value: f32,
) -> Option<String> {
    match control.binding {
        Binding::Slider { field, scale, .. } => {
            set_float(catalog, kind, text, field, display_value / scale)
        }
        _ => None,
    }
}

/// Fixed-decimal display string with the control's unit suffix. Only sliders
/// carry numeric formatting; other controls render empty.
pub fn format_value(control: &Control, display_value: f32) -> String {
    match control.binding {
        Binding::Slider { decimals, unit, .. } => {
            format!("{display_value:.decimals$}{unit}")
        }
        Binding::Toggle(_) | Binding::TextureCombo => String::new(),
    }
}

/// Preset textures offered by the combo. The leading "Default" entry clears
/// the override; the trailing "(Customized)" entry represents a hand-edited
/// value and is never written.
pub const TEXTURE_PRESETS: &[(&str, &str)] = &[
    ("Default", ""),
    ("Narrow Spot", "textures/sunglare/sun_flare_anamorphic.dds"),
    ("Medium Spot", "textures/particles/anamorphic_flare.dds"),
    ("Wide Spot", "textures/particles/firefly.dds"),
    ("Soft Circle", "textures/sunglare/sun_circle.dds"),
    ("Hard Circle", "textures/gui/indicators/enemy_indicator_02.dds"),
    ("Soft Glare", "textures/particles/glare_interior.dds"),
    ("Hard Glare", "textures/particles/particle_glare.dds"),
    ("Rays", "textures/particles/light_ray.dds"),
    ("Grated", "textures/lights/reflector_large.dds"),
    ("Two Spots Merged", "textures/lights/dual_reflector.dds"),
    ("Two Spots Refracted", "textures/lights/dual_reflector_2.dds"),
    ("Two Spots", "textures/lights/dual_reflector_3.dds"),
    ("Directional", "textures/particles/engine_thrust_middle.dds"),
    ("(Customized)", ""),
];

/// Index of the combo entry matching the stored override: 0 when no override,
/// the last ("(Customized)") entry when the override matches no preset.
pub fn texture_preset_index(text: &str) -> usize {
    let stored = get_texture(text);
    if stored.is_empty() {
        return 0;
    }
    TEXTURE_PRESETS[1..TEXTURE_PRESETS.len() - 1]
        .iter()
        .position(|(_, id)| *id == stored)
        .map(|i| i + 1)
        .unwrap_or(TEXTURE_PRESETS.len() - 1)
}

/// Applies a combo selection. Selecting "(Customized)" is a no-op.
pub fn select_texture_preset(text: &str, index: usize) -> Option<String> {
    if index + 1 >= TEXTURE_PRESETS.len() {
        return None;
    }
    set_texture(text, TEXTURE_PRESETS[index].1)
}
