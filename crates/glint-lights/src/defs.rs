//! Built-in lighting parameter records, one per device kind.

/// Default lighting parameters for one device kind. Records are immutable
/// once the catalog is built; the resolver copies them before merging in
/// per-device overrides.
#[derive(Clone, Debug, PartialEq)]
pub struct LightDef {
    /// Kinds marked disabled are skipped by the projected-light path unless a
    /// device opts back in.
    pub disabled: bool,
    /// Projected texture id. Only the red channel is sampled.
    pub texture: String,
    /// Texture used when casting shadows. Usually has a bigger light spot.
    pub spot_texture: String,
    /// How much the texture itself is rotated, in degrees.
    pub texture_rotation: f32,
    /// Angle of the projected light cone, in degrees. 136 is the largest that
    /// renders reliably when shadows are cast.
    pub cone_angle: f32,
    /// Bloom multiplier.
    pub bloom: f32,
    /// Extra intensity coefficient.
    pub intensity: f32,
    /// How far the light origin is moved forward, in meters, so the fixture
    /// model doesn't shadow its own light.
    pub forward: f32,
    /// How far the light origin is moved left, in meters.
    pub left: f32,
    /// How far the light origin is moved up, in meters.
    pub up: f32,
    /// How far the light is rotated, in degrees. Points corner fixtures away
    /// from their model-space forward.
    pub rotation: f32,
    /// How much of the point light to keep, 0 to 1. 0 drops the point light
    /// entirely, 1 drops the projector.
    pub mix: f32,
    /// Whether devices of this kind cast shadows by default.
    pub cast_shadows: bool,
    /// Max distance shadows render at, in meters.
    pub shadow_range: f32,
}

impl LightDef {
    /// The fallback record used for kinds the catalog doesn't know. Every
    /// named record is derived from this one via struct update, overriding
    /// only the fields that differ.
    pub fn generic() -> LightDef {
        LightDef {
            disabled: false,
            texture: "textures/particles/glare_interior.dds".into(),
            spot_texture: "textures/sunglare/sun_circle.dds".into(),
            texture_rotation: 90.0,
            cone_angle: 178.0,
            bloom: 5.0,
            intensity: 3.0,
            forward: 0.0,
            left: 0.0,
            up: 0.0,
            rotation: 0.0,
            mix: 0.0,
            cast_shadows: false,
            shadow_range: 50.0,
        }
    }
}

pub(crate) fn builtin_defs() -> Vec<(&'static str, LightDef)> {
    vec![
        // Large-grid fixtures
        (
            "LargeBlockInsetLight",
            LightDef {
                texture: "textures/lights/reflector_2.dds".into(),
                cone_angle: 163.0,
                forward: 0.813,
                bloom: 15.0,
                intensity: 7.0,
                mix: 0.06,
                ..LightDef::generic()
            },
        ),
        (
            "SmallLight",
            LightDef {
                texture: "textures/particles/firefly.dds".into(),
                cone_angle: 157.0,
                forward: -1.122,
                bloom: 10.0,
                intensity: 5.0,
                mix: 0.1,
                ..LightDef::generic()
            },
        ),
        (
            "LargeBlockLight_1corner",
            LightDef {
                texture: "textures/particles/particle_glare.dds".into(),
                cone_angle: 173.0,
                rotation: -45.0,
                texture_rotation: 28.0,
                forward: -1.54,
                bloom: 10.0,
                intensity: 5.0,
                mix: 0.03,
                ..LightDef::generic()
            },
        ),
        (
            "LargeBlockLight_2corner",
            LightDef {
                texture: "textures/lights/dual_reflector_2.dds".into(),
                cone_angle: 170.0,
                forward: -1.249,
                texture_rotation: 0.0,
                bloom: 10.0,
                intensity: 7.0,
                mix: 0.15,
                ..LightDef::generic()
            },
        ),
        (
            "LargeLightPanel",
            LightDef {
                cone_angle: 178.0,
                forward: -1.155,
                bloom: 3.0,
                intensity: 9.0,
                ..LightDef::generic()
            },
        ),
        (
            "PassageSciFiLight",
            LightDef {
                texture: "textures/lights/reflector_2.dds".into(),
                spot_texture: "textures/lights/reflector_2.dds".into(),
                cone_angle: 141.0,
                forward: -1.032,
                bloom: 5.0,
                intensity: 6.0,
                ..LightDef::generic()
            },
        ),
        (
            "AirDuctLight",
            LightDef {
                texture: "textures/particles/particle_glare.dds".into(),
                spot_texture: "textures/particles/particle_glare.dds".into(),
                cone_angle: 154.0,
                forward: -0.249,
                rotation: 90.0,
                texture_rotation: 0.0,
                bloom: 100.0,
                intensity: 10.0,
                mix: 1.0,
                ..LightDef::generic()
            },
        ),
        (
            "LargeBlockInsetAquarium",
            LightDef {
                texture: "textures/sunglare/sun_circle.dds".into(),
                cone_angle: 150.0,
                forward: -0.96,
                left: -0.75,
                rotation: 50.0,
                bloom: 0.5,
                intensity: 2.5,
                mix: 0.4,
                cast_shadows: true,
                ..LightDef::generic()
            },
        ),
        (
            "LargeBlockInsetKitchen",
            LightDef {
                cone_angle: 179.0,
                forward: -0.265,
                left: -0.95,
                rotation: -3.0,
                bloom: 3.0,
                intensity: 3.0,
                mix: 0.25,
                ..LightDef::generic()
            },
        ),
        // Small-grid fixtures
        (
            "SmallBlockInsetLight",
            LightDef {
                texture: "textures/lights/reflector_2.dds".into(),
                cone_angle: 163.0,
                forward: 0.13,
                rotation: -2.0,
                bloom: 15.0,
                intensity: 3.0,
                mix: 0.1,
                ..LightDef::generic()
            },
        ),
        (
            "SmallBlockSmallLight",
            LightDef {
                texture: "textures/lights/reflector_2.dds".into(),
                cone_angle: 163.0,
                forward: -1.123,
                bloom: 10.0,
                intensity: 3.0,
                mix: 0.1,
                ..LightDef::generic()
            },
        ),
        (
            "SmallBlockLight_1corner",
            LightDef {
                texture: "textures/lights/reflector_2.dds".into(),
                cone_angle: 163.0,
                rotation: 45.0,
                forward: -0.27,
                bloom: 21.3,
                intensity: 4.0,
                ..LightDef::generic()
            },
        ),
        (
            "SmallBlockLight_2corner",
            LightDef {
                cone_angle: 178.0,
                forward: -0.249,
                bloom: 13.0,
                intensity: 1.5,
                mix: 0.1,
                ..LightDef::generic()
            },
        ),
        (
            "OffsetLight",
            LightDef {
                texture: "textures/particles/light_ray.dds".into(),
                spot_texture: "textures/particles/light_ray.dds".into(),
                cone_angle: 114.0,
                forward: -0.249,
                bloom: 200.0,
                intensity: 10.0,
                mix: 0.05,
                ..LightDef::generic()
            },
        ),
        (
            "SmallLightPanel",
            LightDef {
                cone_angle: 175.8,
                forward: -0.249,
                texture_rotation: 130.0,
                bloom: 4.6,
                intensity: 9.0,
                ..LightDef::generic()
            },
        ),
    ]
}
