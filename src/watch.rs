//! Recompute-on-change loop for one device config file.

use std::error::Error;
use std::path::Path;
use std::sync::mpsc;

use glint_lights::{Catalog, LightDef};
use notify::{RecursiveMode, Watcher};

use crate::read_device;
use crate::store::DeviceStore;

/// Watches `path` and re-resolves the device whenever the stored text
/// actually changes. Editors that replace the file (rename-over) are caught
/// by watching the parent directory.
pub fn watch_device(catalog: &Catalog, kind: &str, path: &Path) -> Result<(), Box<dyn Error>> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = tx.send(res);
    })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    let name = path.display().to_string();
    let mut store = DeviceStore::new();
    store.insert(&name, kind, &read_device(path)?);
    let mut last = glint_resolve::resolve(catalog, kind, store.text(&name).unwrap_or(""));
    store.mark_built(&name);
    log::info!("watching {} (kind {:?})", name, kind);
    for (field, value) in describe(&last) {
        log::debug!("  {} = {}", field, value);
    }

    let file_name = path.file_name();
    for res in rx {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::warn!("watch error: {}", e);
                continue;
            }
        };
        if !event.paths.iter().any(|p| p.file_name() == file_name) {
            continue;
        }
        let text = read_device(path)?;
        if !store.set_text(&name, &text) {
            // Same bytes (or an unrelated notification): nothing to re-derive.
            continue;
        }
        if store.needs_rebuild(&name) {
            let device_kind = store.kind(&name).unwrap_or(kind).to_string();
            let next = glint_resolve::resolve(catalog, &device_kind, &text);
            report_changes(&last, &next);
            last = next;
            store.mark_built(&name);
        }
    }
    Ok(())
}

fn report_changes(old: &LightDef, new: &LightDef) {
    if old == new {
        log::info!("config changed, effective parameters unchanged");
        return;
    }
    for ((field, before), (_, after)) in describe(old).into_iter().zip(describe(new)) {
        if before != after {
            log::info!("{}: {} -> {}", field, before, after);
        }
    }
}

fn describe(def: &LightDef) -> Vec<(&'static str, String)> {
    vec![
        ("enabled", (!def.disabled).to_string()),
        ("cast_shadows", def.cast_shadows.to_string()),
        ("texture", def.texture.clone()),
        ("cone_angle", format!("{:.1}", def.cone_angle)),
        ("bloom", format!("{:.1}", def.bloom)),
        ("intensity", format!("{:.1}", def.intensity)),
        ("forward", format!("{:.2}", def.forward)),
        ("left", format!("{:.2}", def.left)),
        ("up", format!("{:.2}", def.up)),
        ("rotation", format!("{:.1}", def.rotation)),
        ("texture_rotation", format!("{:.1}", def.texture_rotation)),
        ("mix", format!("{:.2}", def.mix)),
        ("shadow_range", format!("{:.1}", def.shadow_range)),
    ]
}
