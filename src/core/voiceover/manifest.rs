//! JSON manifest mapping scene ids to voiceover file names.
//!
//! Front ends look voiceovers up by scene id, e.g.
//! `{"living_room": "living_room_voiceover.mp3", ...}`. Keys keep the
//! catalog's declared order.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::Path;
use tracing::info;

use super::generator::{VoiceoverArtifact, VoiceoverError};

/// Ordered scene id to file name mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceoverManifest {
    entries: Vec<(String, String)>,
}

impl VoiceoverManifest {
    pub fn from_artifacts(artifacts: &[VoiceoverArtifact]) -> Self {
        Self {
            entries: artifacts
                .iter()
                .map(|a| (a.scene_id.clone(), a.file_name.clone()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the manifest to `path`, replacing any previous one.
    pub async fn write(&self, path: &Path) -> Result<(), VoiceoverError> {
        let json = self.to_json().map_err(|e| VoiceoverError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tokio::fs::write(path, json + "\n")
            .await
            .map_err(|e| VoiceoverError::Manifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), entries = self.entries.len(), "Manifest written");
        Ok(())
    }
}

impl Serialize for VoiceoverManifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (scene_id, file_name) in &self.entries {
            map.serialize_entry(scene_id, file_name)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn artifact(id: &str) -> VoiceoverArtifact {
        VoiceoverArtifact {
            scene_id: id.to_string(),
            file_name: format!("{id}_voiceover.mp3"),
            path: PathBuf::from(format!("{id}_voiceover.mp3")),
            bytes_written: 3,
        }
    }

    #[test]
    fn test_manifest_keeps_declared_order() {
        let manifest = VoiceoverManifest::from_artifacts(&[artifact("zeta"), artifact("alpha")]);
        let json = manifest.to_json().unwrap();

        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["alpha"], "alpha_voiceover.mp3");
    }

    #[tokio::test]
    async fn test_manifest_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("voiceovers.json");

        VoiceoverManifest::from_artifacts(&[artifact("kitchen")])
            .write(&path)
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kitchen": "kitchen_voiceover.mp3"})
        );
    }

    #[tokio::test]
    async fn test_manifest_write_to_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("voiceovers.json");

        let result = VoiceoverManifest::default().write(&path).await;
        assert!(matches!(result, Err(VoiceoverError::Manifest { .. })));
    }
}
