use glint_ini::IniDoc;
use proptest::prelude::*;

fn key() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,7}"
}

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ./\\\\-]{0,12}"
}

proptest! {
    // Serializing and re-parsing reaches a fixed point after one pass.
    #[test]
    fn reserialize_is_fixed_point(lines in prop::collection::vec((key(), value()), 0..8)) {
        let mut doc = IniDoc::parse("");
        for (k, v) in &lines {
            doc.set("S", k, v);
        }
        let once = doc.to_string();
        let twice = IniDoc::parse(&once).to_string();
        prop_assert_eq!(once, twice);
    }

    // Every value written with set() reads back exactly.
    #[test]
    fn set_then_get(k in key(), v in value()) {
        let mut doc = IniDoc::parse("[Other]\nX=1\n");
        doc.set("S", &k, v.trim());
        let reparsed = IniDoc::parse(&doc.to_string());
        prop_assert_eq!(reparsed.get("S", &k), Some(v.trim()));
        prop_assert_eq!(reparsed.get("Other", "X"), Some("1"));
    }

    // remove() after set() restores the original document.
    #[test]
    fn set_remove_restores(k in key(), v in value()) {
        let original = "[Other]\nX=1\n";
        let mut doc = IniDoc::parse(original);
        doc.set("S", &k, v.trim());
        prop_assert!(doc.remove("S", &k));
        doc.remove_section_if_empty("S");
        prop_assert_eq!(doc.to_string(), original);
    }
}
