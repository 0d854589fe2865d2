//! show command - Print the well-known fields of a manifest

use std::path::Path;

use anyhow::{bail, Context as _, Result};

use crate::manifest::schema::keys;
use crate::manifest::{BundleInfo, Manifest};

/// Keys the projection requires; checked up front so a sparse manifest
/// produces a command error instead of tripping the library precondition.
const REQUIRED_KEYS: &[&str] = &[
    keys::DISPLAY_NAME,
    keys::BUNDLE_NAME,
    keys::SHORT_VERSION,
    keys::VERSION,
    keys::IDENTIFIER,
];

/// Print the derived bundle summary for a manifest file.
pub fn show(path: &Path, json: bool) -> Result<()> {
    let manifest = Manifest::load(path).context("Failed to load manifest")?;

    for key in REQUIRED_KEYS {
        if manifest.string(key).is_none() {
            bail!(
                "manifest '{}' is missing required key '{}' (or it is not a string)",
                path.display(),
                key
            );
        }
    }

    let info = BundleInfo::from_manifest(&manifest);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} ({})", info.name, info.identifier);
    println!("  version: {} (build {})", info.version, info.build);
    if !info.executable.is_empty() {
        println!("  executable: {}", info.executable);
    }
    if !info.url_schemes.is_empty() {
        println!("  url schemes: {}", info.url_schemes.join(", "));
    }
    if !info.background_modes.is_empty() {
        let modes: Vec<String> = info
            .background_modes
            .iter()
            .map(|m| format!("{:?}", m))
            .collect();
        println!("  background modes: {}", modes.join(", "));
    }
    if info.file_sharing_enabled {
        println!("  file sharing: enabled");
    }
    if info.requires_full_screen {
        println!("  requires full screen: yes");
    }
    if info.allows_arbitrary_loads {
        println!("  transport security: allows arbitrary loads");
    }

    let declared: Vec<(&str, &Option<String>)> = vec![
        ("camera", &info.privacy.camera),
        ("microphone", &info.privacy.microphone),
        ("contacts", &info.privacy.contacts),
        ("calendars", &info.privacy.calendars),
        ("reminders", &info.privacy.reminders),
        ("photo library", &info.privacy.photo_library),
        ("location", &info.privacy.location),
        ("location (always)", &info.privacy.location_always),
        ("location (when in use)", &info.privacy.location_when_in_use),
        ("bluetooth", &info.privacy.bluetooth_peripheral),
        ("motion", &info.privacy.motion),
        ("speech recognition", &info.privacy.speech_recognition),
    ];
    for (label, description) in declared {
        if let Some(text) = description {
            println!("  privacy/{}: {}", label, text);
        }
    }

    Ok(())
}
