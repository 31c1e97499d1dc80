use serde::Deserialize;

/// Top level of Mojang's `version_manifest_v2.json`.
#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub latest: Latest,
    pub versions: Vec<VersionSummary>,
}

#[derive(Debug, Deserialize)]
pub struct Latest {
    pub release: String,
    pub snapshot: String,
}

#[derive(Debug, Deserialize)]
pub struct VersionSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub release_type: String,
    pub url: String,
    pub time: String,
    #[serde(rename = "releaseTime")]
    pub release_time: String,
    pub sha1: String,
    #[serde(rename = "complianceLevel")]
    pub compliance_level: i32,
}

impl VersionManifest {
    pub fn find(&self, id: &str) -> Option<&VersionSummary> {
        self.versions.iter().find(|version| version.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "latest": { "release": "1.19.2", "snapshot": "22w45a" },
        "versions": [
            {
                "id": "22w45a",
                "type": "snapshot",
                "url": "https://piston-meta.mojang.com/v1/packages/aa/22w45a.json",
                "time": "2022-11-09T13:00:00+00:00",
                "releaseTime": "2022-11-09T12:54:17+00:00",
                "sha1": "aa0c1c4c3d4f6b8e2c2a2b3c4d5e6f7a8b9c0d1e",
                "complianceLevel": 1
            },
            {
                "id": "1.19.2",
                "type": "release",
                "url": "https://piston-meta.mojang.com/v1/packages/bb/1.19.2.json",
                "time": "2022-08-05T12:00:00+00:00",
                "releaseTime": "2022-08-05T11:57:05+00:00",
                "sha1": "bb0c1c4c3d4f6b8e2c2a2b3c4d5e6f7a8b9c0d1e",
                "complianceLevel": 1
            }
        ]
    }"#;

    #[test]
    fn deserializes_manifest() {
        let manifest: VersionManifest = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(manifest.latest.release, "1.19.2");
        assert_eq!(manifest.versions.len(), 2);
        assert_eq!(manifest.versions[0].release_type, "snapshot");
    }

    #[test]
    fn finds_version_by_id() {
        let manifest: VersionManifest = serde_json::from_str(SAMPLE).unwrap();
        let version = manifest.find("1.19.2").unwrap();
        assert!(version.url.ends_with("1.19.2.json"));
        assert!(manifest.find("1.0").is_none());
    }
}
