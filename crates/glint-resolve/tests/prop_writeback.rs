use glint_ini::IniDoc;
use glint_lights::Catalog;
use glint_resolve::{FloatField, SECTION, resolve, set_float};
use proptest::prelude::*;

const FIELDS: [FloatField; 5] = [
    FloatField::Bloom,
    FloatField::Forward,
    FloatField::Rotation,
    FloatField::Mix,
    FloatField::ShadowRange,
];

fn field() -> impl Strategy<Value = FloatField> {
    (0..FIELDS.len()).prop_map(|i| FIELDS[i])
}

// In-range values for every field in FIELDS, quantized to the 3-decimal
// persistence grid so round-trips are exact.
fn stored_value(f: FloatField) -> BoxedStrategy<f32> {
    let range = match f {
        FloatField::Bloom => 0.1f32..200.0,
        FloatField::Mix => 0.0f32..1.0,
        FloatField::ShadowRange => 5.0f32..200.0,
        _ => -5.0f32..5.0,
    };
    range.prop_map(|v| (v * 1000.0).round() / 1000.0).boxed()
}

fn field_and_value() -> impl Strategy<Value = (FloatField, f32)> {
    field().prop_flat_map(|f| stored_value(f).prop_map(move |v| (f, v)))
}

fn kind() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("SmallLight"),
        Just("AirDuctLight"),
        Just("LargeBlockInsetAquarium"),
        Just("SomethingUnknown"),
    ]
}

proptest! {
    // set followed by resolve yields the written value, unless the value was
    // the default, in which case the key stays absent and the default rules.
    #[test]
    fn set_then_resolve_round_trips((f, v) in field_and_value(), k in kind()) {
        let catalog = Catalog::builtin();
        let default = glint_resolve::default_float(&catalog, k, f);
        match set_float(&catalog, k, "", f, v) {
            Some(text) => {
                let got = glint_resolve::get_float(&catalog, k, &text, f);
                prop_assert!((got - v).abs() < 1e-3, "got {}, wrote {}", got, v);
            }
            None => {
                // Only a default-valued write is a no-op on an empty blob.
                prop_assert!((v - default).abs() < 1e-3);
                prop_assert_eq!(glint_resolve::get_float(&catalog, k, "", f), default);
            }
        }
    }

    // Applying the same write twice equals applying it once.
    #[test]
    fn writeback_is_idempotent(f in field(), k in kind(), raw in -300.0f32..300.0) {
        let catalog = Catalog::builtin();
        let v = (raw * 1000.0).round() / 1000.0;
        if let Some(text) = set_float(&catalog, k, "", f, v) {
            prop_assert_eq!(set_float(&catalog, k, &text, f, v), None);
        }
    }

    // A write never disturbs foreign sections or unrecognized keys.
    #[test]
    fn writeback_preserves_foreign_text(f in field(), k in kind(), raw in -300.0f32..300.0) {
        let catalog = Catalog::builtin();
        let blob = "pilot note\n[Nav]\nBeacon=4\n";
        if let Some(text) = set_float(&catalog, k, blob, f, raw) {
            prop_assert!(text.starts_with(blob));
        }
    }

    // resolve never panics and always lands inside its invariants.
    #[test]
    fn resolve_is_total(k in kind(), text in "\\PC{0,60}") {
        let catalog = Catalog::builtin();
        let def = resolve(&catalog, k, &text);
        prop_assert!((0.0..=1.0).contains(&def.mix));
        prop_assert!(def.cone_angle <= 180.0);
        if def.cast_shadows {
            prop_assert!(def.cone_angle <= 136.0);
        }
        prop_assert!(def.bloom > 0.0);
    }

    // The override section stays minimal: a value set back to its default
    // leaves no trace of the section behind.
    #[test]
    fn default_write_erases_the_section(f in field(), k in kind()) {
        let catalog = Catalog::builtin();
        let default = glint_resolve::default_float(&catalog, k, f);
        let text = set_float(&catalog, k, "", f, default + 1.5)
            .expect("off-default write should change the blob");
        let cleared = set_float(&catalog, k, &text, f, default)
            .expect("returning to default should change the blob");
        let doc = IniDoc::parse(&cleared);
        prop_assert!(!doc.has_key(SECTION, f.key()));
        prop_assert!(!doc.has_section(SECTION));
    }
}
