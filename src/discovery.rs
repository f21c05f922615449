use crate::volume::VolumeSource;
use itertools::Itertools;
use std::collections::HashMap;
use std::sync::Arc;

/// Explicit registration of volumes against host container ids. Stands in for
/// scanning the host's attached objects: whoever owns a volume registers it
/// under the container it belongs to.
#[derive(Default)]
pub struct VolumeRegistry {
    volumes_by_container: HashMap<String, Arc<dyn VolumeSource>>,
}
impl VolumeRegistry {
    pub fn register(&mut self, container: impl Into<String>, volume: Arc<dyn VolumeSource>) {
        self.volumes_by_container.insert(container.into(), volume);
    }
    pub fn unregister(&mut self, container: &str) -> Option<Arc<dyn VolumeSource>> {
        self.volumes_by_container.remove(container)
    }
    pub fn find(&self, container: &str) -> Option<Arc<dyn VolumeSource>> {
        self.volumes_by_container.get(container).cloned()
    }
    /// Registered container ids in stable order.
    pub fn container_ids(&self) -> Vec<&str> {
        self.volumes_by_container.keys().map(|k| k.as_str()).sorted().collect()
    }
}

/// Resolves the volume to inspect for a container: a manually selected volume
/// always wins, otherwise whatever is registered for the container is used.
/// Resolution is stable as long as the registration does not change, so the
/// result can be compared by identity across ticks.
#[derive(Default)]
pub struct SourceResolver {
    registry: VolumeRegistry,
    manual_selection: Option<Arc<dyn VolumeSource>>,
}
impl SourceResolver {
    pub fn new(registry: VolumeRegistry) -> Self {
        Self {
            registry,
            manual_selection: None,
        }
    }

    pub fn registry(&self) -> &VolumeRegistry {
        &self.registry
    }
    pub fn registry_mut(&mut self) -> &mut VolumeRegistry {
        &mut self.registry
    }

    pub fn select_manually(&mut self, volume: Option<Arc<dyn VolumeSource>>) {
        self.manual_selection = volume;
    }

    pub fn resolve(&self, container: &str) -> Option<Arc<dyn VolumeSource>> {
        self.manual_selection
            .clone()
            .or_else(|| self.registry.find(container))
    }
}
