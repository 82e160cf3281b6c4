//! Named lighting devices with change tracking.

use hashbrown::HashMap;

pub struct Device {
    pub kind: String,
    text: String,
    // Latest accepted text change and the last re-derived revision.
    rev: u64,
    built: u64,
}

/// Holds each device's `(kind, persisted text)` pair and a revision counter
/// so the watch loop only re-derives when something actually changed.
#[derive(Default)]
pub struct DeviceStore {
    devices: HashMap<String, Device>,
    counter: u64,
}

impl DeviceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, kind: &str, text: &str) {
        self.counter += 1;
        self.devices.insert(
            name.to_string(),
            Device {
                kind: kind.to_string(),
                text: text.to_string(),
                rev: self.counter,
                built: 0,
            },
        );
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.devices.get(name).map(|d| d.text.as_str())
    }

    pub fn kind(&self, name: &str) -> Option<&str> {
        self.devices.get(name).map(|d| d.kind.as_str())
    }

    /// Replaces a device's persisted text. Identical text is a no-op and
    /// leaves the revision untouched, so redundant writes never trigger a
    /// re-derivation downstream.
    pub fn set_text(&mut self, name: &str, text: &str) -> bool {
        let Some(device) = self.devices.get_mut(name) else {
            return false;
        };
        if device.text == text {
            return false;
        }
        device.text = text.to_string();
        self.counter += 1;
        device.rev = self.counter;
        true
    }

    pub fn needs_rebuild(&self, name: &str) -> bool {
        self.devices.get(name).is_some_and(|d| d.built < d.rev)
    }

    pub fn mark_built(&mut self, name: &str) {
        if let Some(device) = self.devices.get_mut(name) {
            device.built = device.rev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_devices_need_a_first_derivation() {
        let mut store = DeviceStore::new();
        store.insert("light_a", "SmallLight", "");
        assert!(store.needs_rebuild("light_a"));
        store.mark_built("light_a");
        assert!(!store.needs_rebuild("light_a"));
    }

    #[test]
    fn identical_text_does_not_bump_rev() {
        let mut store = DeviceStore::new();
        store.insert("light_a", "SmallLight", "[ProjectedLights]\nBloom=25.000\n");
        store.mark_built("light_a");
        assert!(!store.set_text("light_a", "[ProjectedLights]\nBloom=25.000\n"));
        assert!(!store.needs_rebuild("light_a"));
    }

    #[test]
    fn changed_text_marks_for_rebuild() {
        let mut store = DeviceStore::new();
        store.insert("light_a", "SmallLight", "");
        store.mark_built("light_a");
        assert!(store.set_text("light_a", "[ProjectedLights]\nMix=0.500\n"));
        assert!(store.needs_rebuild("light_a"));
        store.mark_built("light_a");
        assert!(!store.needs_rebuild("light_a"));
    }

    #[test]
    fn unknown_device_is_inert() {
        let mut store = DeviceStore::new();
        assert!(!store.set_text("ghost", "x"));
        assert!(!store.needs_rebuild("ghost"));
        store.mark_built("ghost");
        assert_eq!(store.text("ghost"), None);
    }
}
