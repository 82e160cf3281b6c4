use glint_lights::Catalog;
use proptest::prelude::*;

proptest! {
    // lookup is total: any string resolves, and unknown kinds all alias the
    // one generic record.
    #[test]
    fn lookup_is_total(kind in "\\PC{0,24}") {
        let catalog = Catalog::builtin();
        let def = catalog.lookup(&kind);
        if !catalog.contains(&kind) {
            prop_assert_eq!(def, catalog.generic());
        }
    }

    // Overlay patches touch only the fields they name, for built-in and new
    // kinds alike.
    #[test]
    fn patch_preserves_unnamed_fields(bloom in 0.1f32..200.0, cone in 1.0f32..180.0) {
        let toml = format!(
            "[kinds.SmallLight]\nbloom = {}\n\n[kinds.Novel]\ncone_angle = {}\n",
            bloom, cone
        );
        let catalog = Catalog::from_toml_str(&toml).unwrap();
        let small = catalog.lookup("SmallLight");
        prop_assert_eq!(small.bloom, bloom);
        prop_assert_eq!(small.forward, -1.122);
        let novel = catalog.lookup("Novel");
        prop_assert_eq!(novel.cone_angle, cone);
        prop_assert_eq!(&novel.texture, &catalog.generic().texture);
    }
}
