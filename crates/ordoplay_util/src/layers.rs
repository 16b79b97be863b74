// SPDX-License-Identifier: MIT OR Apache-2.0
//! Layer-name registry.
//!
//! Layers are the 32 bit positions of a [`LayerMask`]. The registry maps
//! human-readable names to those positions and can be loaded from or saved
//! to RON as a [`LayerSettings`] block.

use crate::error::{Result, UtilError};
use crate::mask::LayerMask;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of layers addressable by a mask
pub const MAX_LAYERS: u32 = 32;

/// Resolves layer names to bit indices
pub trait LayerLookup {
    /// Bit index of the layer called `name`, or [`UtilError::UnknownLayer`]
    fn layer_index(&self, name: &str) -> Result<u32>;
}

/// Serializable layer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSettings {
    /// Name of each layer slot; an empty string leaves the slot unassigned
    pub layer_names: Vec<String>,
}

impl Default for LayerSettings {
    fn default() -> Self {
        let layer_names = (0..MAX_LAYERS)
            .map(|i| match i {
                0 => "Default".to_string(),
                1 => "Player".to_string(),
                2 => "Enemy".to_string(),
                3 => "Environment".to_string(),
                4 => "Projectile".to_string(),
                5 => "Trigger".to_string(),
                _ => String::new(),
            })
            .collect();

        Self { layer_names }
    }
}

/// Name to layer index table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRegistry {
    names: IndexMap<String, u32>,
}

impl LayerRegistry {
    /// Create a registry with no named layers
    pub fn new() -> Self {
        Self {
            names: IndexMap::new(),
        }
    }

    /// Build a registry from settings
    pub fn from_settings(settings: &LayerSettings) -> Result<Self> {
        let mut registry = Self::new();
        for (index, name) in settings.layer_names.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            registry.set_name(index, name.clone())?;
        }
        Ok(registry)
    }

    /// Parse a registry from RON-encoded [`LayerSettings`]
    pub fn from_ron(source: &str) -> Result<Self> {
        let settings: LayerSettings =
            ron::from_str(source).map_err(|e| UtilError::Config(e.to_string()))?;
        let registry = Self::from_settings(&settings)?;
        tracing::debug!("Loaded {} named layers", registry.len());
        Ok(registry)
    }

    /// Encode the registry as pretty-printed RON
    pub fn to_ron(&self) -> Result<String> {
        let config = ron::ser::PrettyConfig::default().struct_names(true);
        ron::ser::to_string_pretty(&self.settings(), config)
            .map_err(|e| UtilError::Config(e.to_string()))
    }

    /// Current configuration, one entry per slot
    pub fn settings(&self) -> LayerSettings {
        let layer_names = (0..MAX_LAYERS)
            .map(|index| self.name_of(index).unwrap_or_default().to_string())
            .collect();
        LayerSettings { layer_names }
    }

    /// Assign `name` to slot `index`; an empty name clears the slot
    pub fn set_name(&mut self, index: u32, name: impl Into<String>) -> Result<()> {
        if index >= MAX_LAYERS {
            return Err(UtilError::LayerIndexOutOfRange(index));
        }

        let name = name.into();
        if let Some(&existing) = self.names.get(&name) {
            if existing != index {
                tracing::warn!("Layer name {:?} already used by layer {}", name, existing);
                return Err(UtilError::Config(format!(
                    "Layer name {name:?} already assigned to layer {existing}"
                )));
            }
            return Ok(());
        }

        self.names.retain(|_, slot| *slot != index);
        if !name.is_empty() {
            tracing::debug!("Layer {} named {:?}", index, name);
            self.names.insert(name, index);
        }
        Ok(())
    }

    /// Index of the layer called `name`
    pub fn index_of(&self, name: &str) -> Result<u32> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| UtilError::UnknownLayer(name.to_string()))
    }

    /// Name of layer `index`, if assigned
    pub fn name_of(&self, index: u32) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, &slot)| slot == index)
            .map(|(name, _)| name.as_str())
    }

    /// Mask holding every named layer; fails on the first unknown name
    pub fn mask_of<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> Result<LayerMask> {
        names.into_iter().try_fold(LayerMask::NOTHING, |mask, name| {
            Ok(mask.with_layer(self.index_of(name)?))
        })
    }

    /// Named layers in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.names.iter().map(|(name, &index)| (name.as_str(), index))
    }

    /// Number of named layers
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no layer has a name
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for LayerRegistry {
    fn default() -> Self {
        // Built-in names are unique and in range.
        Self::from_settings(&LayerSettings::default()).unwrap_or_else(|_| Self::new())
    }
}

impl LayerLookup for LayerRegistry {
    fn layer_index(&self, name: &str) -> Result<u32> {
        self.index_of(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = LayerRegistry::default();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.index_of("Default"), Ok(0));
        assert_eq!(registry.index_of("Trigger"), Ok(5));
        assert_eq!(registry.name_of(2), Some("Enemy"));
        assert_eq!(registry.name_of(20), None);
    }

    #[test]
    fn test_unknown_layer() {
        let registry = LayerRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(
            registry.layer_index("Water"),
            Err(UtilError::UnknownLayer("Water".to_string()))
        );
    }

    #[test]
    fn test_set_name() {
        let mut registry = LayerRegistry::new();
        registry.set_name(8, "Water").unwrap();
        assert_eq!(registry.index_of("Water"), Ok(8));

        // Renaming a slot drops the old name
        registry.set_name(8, "Lava").unwrap();
        assert!(registry.index_of("Water").is_err());
        assert_eq!(registry.name_of(8), Some("Lava"));

        // Clearing
        registry.set_name(8, "").unwrap();
        assert!(registry.is_empty());

        assert_eq!(
            registry.set_name(32, "Overflow"),
            Err(UtilError::LayerIndexOutOfRange(32))
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = LayerRegistry::new();
        registry.set_name(1, "UI").unwrap();
        assert!(matches!(registry.set_name(2, "UI"), Err(UtilError::Config(_))));
        assert_eq!(registry.index_of("UI"), Ok(1));
        assert!(registry.set_name(1, "UI").is_ok());
    }

    #[test]
    fn test_mask_of() {
        let registry = LayerRegistry::default();
        let mask = registry.mask_of(["Player", "Enemy"]).unwrap();
        assert_eq!(mask.bits(), 0b110);
        assert!(registry.mask_of(["Player", "Ghost"]).is_err());
        assert_eq!(registry.mask_of([]), Ok(LayerMask::NOTHING));
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut registry = LayerRegistry::default();
        registry.set_name(12, "Water").unwrap();

        let ron_str = registry.to_ron().unwrap();
        let loaded = LayerRegistry::from_ron(&ron_str).unwrap();
        assert_eq!(loaded.index_of("Water"), Ok(12));
        assert_eq!(loaded.settings(), registry.settings());
    }

    #[test]
    fn test_from_ron_errors() {
        assert!(matches!(
            LayerRegistry::from_ron("not ron at all ("),
            Err(UtilError::Config(_))
        ));

        let too_many = LayerSettings {
            layer_names: (0..40).map(|i| format!("L{i}")).collect(),
        };
        assert_eq!(
            LayerRegistry::from_settings(&too_many),
            Err(UtilError::LayerIndexOutOfRange(32))
        );
    }

    #[test]
    fn test_from_ron_literal() {
        let registry =
            LayerRegistry::from_ron(r#"LayerSettings(layer_names: ["Ground", "", "Sky"])"#).unwrap();
        assert_eq!(registry.index_of("Sky"), Ok(2));
        assert_eq!(registry.name_of(1), None);
    }
}
