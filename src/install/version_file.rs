use std::collections::HashMap;

use serde::Deserialize;

/// Per-version metadata file referenced from the version manifest. Only the
/// fields the installer consumes are modeled.
#[derive(Debug, Deserialize)]
pub struct VersionFile {
    pub id: String,
    #[serde(rename = "assetIndex")]
    pub asset_index: AssetIndexRef,
    pub downloads: Downloads,
    pub libraries: Vec<Library>,
    #[serde(rename = "mainClass")]
    pub main_class: String,
}

#[derive(Debug, Deserialize)]
pub struct AssetIndexRef {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Downloads {
    pub client: DownloadRef,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRef {
    pub sha1: String,
    pub size: u64,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Library {
    pub name: String,
    #[serde(default)]
    pub downloads: LibraryDownloads,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LibraryDownloads {
    pub artifact: Option<Artifact>,
}

#[derive(Debug, Deserialize)]
pub struct Artifact {
    pub path: String,
    pub sha1: String,
    pub size: u64,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Rule {
    pub action: String,
    #[serde(default)]
    pub os: Option<OsRule>,
}

#[derive(Debug, Deserialize)]
pub struct OsRule {
    pub name: String,
}

/// Contents of the asset index JSON: a map of logical asset names to
/// content-addressed objects.
#[derive(Debug, Deserialize)]
pub struct AssetIndex {
    pub objects: HashMap<String, AssetObject>,
}

#[derive(Debug, Deserialize)]
pub struct AssetObject {
    pub hash: String,
    pub size: u64,
}

impl AssetObject {
    /// First two characters of the hash, the sharding prefix Mojang uses for
    /// both the download URL and the on-disk layout. `None` for malformed
    /// hashes.
    pub fn hash_prefix(&self) -> Option<&str> {
        self.hash.get(0..2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "1.19.2",
        "assetIndex": {
            "id": "1.19",
            "sha1": "ab0c1c4c3d4f6b8e2c2a2b3c4d5e6f7a8b9c0d1e",
            "size": 387240,
            "totalSize": 558888585,
            "url": "https://piston-meta.mojang.com/v1/packages/cc/1.19.json"
        },
        "downloads": {
            "client": {
                "sha1": "cc0c1c4c3d4f6b8e2c2a2b3c4d5e6f7a8b9c0d1e",
                "size": 22534988,
                "url": "https://piston-data.mojang.com/v1/objects/cc/client.jar"
            }
        },
        "libraries": [
            {
                "name": "com.mojang:blocklist:1.0.10",
                "downloads": {
                    "artifact": {
                        "path": "com/mojang/blocklist/1.0.10/blocklist-1.0.10.jar",
                        "sha1": "dd0c1c4c3d4f6b8e2c2a2b3c4d5e6f7a8b9c0d1e",
                        "size": 964,
                        "url": "https://libraries.minecraft.net/com/mojang/blocklist/1.0.10/blocklist-1.0.10.jar"
                    }
                }
            },
            {
                "name": "org.lwjgl:lwjgl:3.3.1:natives-linux",
                "downloads": {
                    "artifact": {
                        "path": "org/lwjgl/lwjgl/3.3.1/lwjgl-3.3.1-natives-linux.jar",
                        "sha1": "ee0c1c4c3d4f6b8e2c2a2b3c4d5e6f7a8b9c0d1e",
                        "size": 110704,
                        "url": "https://libraries.minecraft.net/org/lwjgl/lwjgl/3.3.1/lwjgl-3.3.1-natives-linux.jar"
                    }
                },
                "rules": [ { "action": "allow", "os": { "name": "linux" } } ]
            }
        ],
        "mainClass": "net.minecraft.client.main.Main"
    }"#;

    #[test]
    fn deserializes_version_file() {
        let version: VersionFile = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(version.id, "1.19.2");
        assert_eq!(version.asset_index.id, "1.19");
        assert_eq!(version.main_class, "net.minecraft.client.main.Main");
        assert!(version.downloads.client.url.ends_with("client.jar"));
        assert_eq!(version.libraries.len(), 2);
        assert!(version.libraries[0].rules.is_empty());
        assert_eq!(
            version.libraries[1].rules[0].os.as_ref().unwrap().name,
            "linux"
        );
    }

    #[test]
    fn deserializes_asset_index() {
        let index: AssetIndex = serde_json::from_str(
            r#"{"objects":{"minecraft/sounds/ambient/cave/cave1.ogg":{"hash":"bd1e31955e18acbdbac9f4c46cb7cbeea58f63b3","size":12735}}}"#,
        )
        .unwrap();
        let object = &index.objects["minecraft/sounds/ambient/cave/cave1.ogg"];
        assert_eq!(object.hash_prefix(), Some("bd"));
        assert_eq!(object.size, 12735);
    }

    #[test]
    fn malformed_hash_has_no_prefix() {
        let object = AssetObject {
            hash: "x".to_string(),
            size: 1,
        };
        assert_eq!(object.hash_prefix(), None);
    }
}
