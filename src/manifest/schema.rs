//! manifest::schema
//!
//! Well-known manifest keys and the derived bundle projection.
//!
//! # Derived Projection
//!
//! [`BundleInfo`] gathers the well-known fields of an application manifest
//! into one plain value: names, version and build strings, URL schemes,
//! capability declarations, and privacy usage descriptions. It is a pure
//! function of the manifest, computed once via
//! [`BundleInfo::from_manifest`] and then passed to whatever consumes it.
//! There is no lazy global state and no invalidation; the manifest is
//! immutable for the life of the process.
//!
//! # Example
//!
//! ```
//! use appmanifest::manifest::{Manifest, schema::BundleInfo};
//! use serde_json::json;
//!
//! let manifest = Manifest::from_value(json!({
//!     "CFBundleDisplayName": "IDFA Spike",
//!     "CFBundleName": "Spike",
//!     "CFBundleShortVersionString": "1.0",
//!     "CFBundleVersion": "42",
//!     "CFBundleIdentifier": "com.example.spike",
//! })).unwrap();
//!
//! let info = BundleInfo::from_manifest(&manifest);
//! assert_eq!(info.name, "IDFA Spike");
//! assert_eq!(info.build, "42");
//! assert!(info.url_schemes.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Manifest;

/// Well-known manifest key names.
pub mod keys {
    /// User-visible application name.
    pub const DISPLAY_NAME: &str = "CFBundleDisplayName";
    /// Short bundle name.
    pub const BUNDLE_NAME: &str = "CFBundleName";
    /// Release version string, e.g. `1.0.3`.
    pub const SHORT_VERSION: &str = "CFBundleShortVersionString";
    /// Build number string.
    pub const VERSION: &str = "CFBundleVersion";
    /// Name of the bundle's executable.
    pub const EXECUTABLE: &str = "CFBundleExecutable";
    /// Reverse-DNS bundle identifier.
    pub const IDENTIFIER: &str = "CFBundleIdentifier";
    /// Array of URL-type declarations.
    pub const URL_TYPES: &str = "CFBundleURLTypes";
    /// Scheme list inside a URL-type declaration.
    pub const URL_SCHEMES: &str = "CFBundleURLSchemes";

    /// Whether documents are shared with the host's file browser.
    pub const FILE_SHARING_ENABLED: &str = "UIFileSharingEnabled";
    /// Whether the status bar starts hidden.
    pub const STATUS_BAR_HIDDEN: &str = "UIStatusBarHidden";
    /// Initial status bar style.
    pub const STATUS_BAR_STYLE: &str = "UIStatusBarStyle";
    /// Whether view controllers control status bar appearance.
    pub const VIEW_CONTROLLER_BASED_STATUS_BAR: &str = "UIViewControllerBasedStatusBarAppearance";
    /// Whether the app opts out of multitasking.
    pub const REQUIRES_FULL_SCREEN: &str = "UIRequiresFullScreen";
    /// Declared background execution modes.
    pub const BACKGROUND_MODES: &str = "UIBackgroundModes";
    /// Supported interface orientations (phone).
    pub const SUPPORTED_ORIENTATIONS: &str = "UISupportedInterfaceOrientations";
    /// Supported interface orientations (tablet).
    pub const SUPPORTED_ORIENTATIONS_IPAD: &str = "UISupportedInterfaceOrientations~ipad";

    /// Transport-security configuration dictionary.
    pub const APP_TRANSPORT_SECURITY: &str = "NSAppTransportSecurity";
    /// Opt-out flag inside the transport-security dictionary.
    pub const ALLOWS_ARBITRARY_LOADS: &str = "NSAllowsArbitraryLoads";

    /// Privacy usage-description keys.
    pub const BLUETOOTH_PERIPHERAL_USAGE: &str = "NSBluetoothPeripheralUsageDescription";
    pub const CALENDARS_USAGE: &str = "NSCalendarsUsageDescription";
    pub const CAMERA_USAGE: &str = "NSCameraUsageDescription";
    pub const CONTACTS_USAGE: &str = "NSContactsUsageDescription";
    pub const HEALTH_SHARE_USAGE: &str = "NSHealthShareUsageDescription";
    pub const HEALTH_UPDATE_USAGE: &str = "NSHealthUpdateUsageDescription";
    pub const HOME_KIT_USAGE: &str = "NSHomeKitUsageDescription";
    pub const LOCATION_ALWAYS_USAGE: &str = "NSLocationAlwaysUsageDescription";
    pub const LOCATION_USAGE: &str = "NSLocationUsageDescription";
    pub const LOCATION_WHEN_IN_USE_USAGE: &str = "NSLocationWhenInUseUsageDescription";
    pub const APPLE_MUSIC_USAGE: &str = "NSAppleMusicUsageDescription";
    pub const MICROPHONE_USAGE: &str = "NSMicrophoneUsageDescription";
    pub const MOTION_USAGE: &str = "NSMotionUsageDescription";
    pub const PHOTO_LIBRARY_USAGE: &str = "NSPhotoLibraryUsageDescription";
    pub const REMINDERS_USAGE: &str = "NSRemindersUsageDescription";
    pub const SIRI_USAGE: &str = "NSSiriUsageDescription";
    pub const SPEECH_RECOGNITION_USAGE: &str = "NSSpeechRecognitionUsageDescription";
    pub const VIDEO_SUBSCRIBER_USAGE: &str = "NSVideoSubscriberAccountUsageDescription";
}

/// A declared background execution mode.
///
/// Unknown mode strings in the manifest are skipped rather than rejected;
/// the declaration list is advisory, not validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundMode {
    #[serde(rename = "audio")]
    Audio,
    #[serde(rename = "location")]
    Location,
    #[serde(rename = "voip")]
    Voip,
    #[serde(rename = "fetch")]
    Fetch,
    #[serde(rename = "remote-notification")]
    RemoteNotification,
    #[serde(rename = "newsstand-content")]
    NewsstandContent,
    #[serde(rename = "external-accessory")]
    ExternalAccessory,
    #[serde(rename = "bluetooth-central")]
    BluetoothCentral,
    #[serde(rename = "bluetooth-peripheral")]
    BluetoothPeripheral,
}

impl BackgroundMode {
    /// Parse a manifest mode string. Unknown strings yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "audio" => Some(Self::Audio),
            "location" => Some(Self::Location),
            "voip" => Some(Self::Voip),
            "fetch" => Some(Self::Fetch),
            "remote-notification" => Some(Self::RemoteNotification),
            "newsstand-content" => Some(Self::NewsstandContent),
            "external-accessory" => Some(Self::ExternalAccessory),
            "bluetooth-central" => Some(Self::BluetoothCentral),
            "bluetooth-peripheral" => Some(Self::BluetoothPeripheral),
            _ => None,
        }
    }
}

/// A supported interface orientation.
///
/// Unrecognized orientation strings map to [`Orientation::Unknown`] so the
/// declaration list keeps its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
    Unknown,
}

impl Orientation {
    /// Parse a manifest orientation string.
    pub fn from_key(key: &str) -> Self {
        match key {
            "UIInterfaceOrientationPortrait" => Self::Portrait,
            "UIInterfaceOrientationPortraitUpsideDown" => Self::PortraitUpsideDown,
            "UIInterfaceOrientationLandscapeLeft" => Self::LandscapeLeft,
            "UIInterfaceOrientationLandscapeRight" => Self::LandscapeRight,
            _ => Self::Unknown,
        }
    }
}

/// Initial status bar style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBarStyle {
    Default,
    LightContent,
}

impl StatusBarStyle {
    /// Parse a manifest style string. Unknown strings yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "UIStatusBarStyleDefault" => Some(Self::Default),
            "UIStatusBarStyleLightContent" => Some(Self::LightContent),
            _ => None,
        }
    }
}

/// Privacy usage-description strings declared by the bundle.
///
/// All fields are optional: an absent description simply means the bundle
/// does not declare that capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivacyUsage {
    pub bluetooth_peripheral: Option<String>,
    pub calendars: Option<String>,
    pub camera: Option<String>,
    pub contacts: Option<String>,
    pub health_share: Option<String>,
    pub health_update: Option<String>,
    pub home_kit: Option<String>,
    pub location_always: Option<String>,
    pub location: Option<String>,
    pub location_when_in_use: Option<String>,
    pub apple_music: Option<String>,
    pub microphone: Option<String>,
    pub motion: Option<String>,
    pub photo_library: Option<String>,
    pub reminders: Option<String>,
    pub siri: Option<String>,
    pub speech_recognition: Option<String>,
    pub video_subscriber_account: Option<String>,
}

impl PrivacyUsage {
    fn from_manifest(manifest: &Manifest) -> Self {
        let get = |key: &str| manifest.string(key).map(str::to_string);
        Self {
            bluetooth_peripheral: get(keys::BLUETOOTH_PERIPHERAL_USAGE),
            calendars: get(keys::CALENDARS_USAGE),
            camera: get(keys::CAMERA_USAGE),
            contacts: get(keys::CONTACTS_USAGE),
            health_share: get(keys::HEALTH_SHARE_USAGE),
            health_update: get(keys::HEALTH_UPDATE_USAGE),
            home_kit: get(keys::HOME_KIT_USAGE),
            location_always: get(keys::LOCATION_ALWAYS_USAGE),
            location: get(keys::LOCATION_USAGE),
            location_when_in_use: get(keys::LOCATION_WHEN_IN_USE_USAGE),
            apple_music: get(keys::APPLE_MUSIC_USAGE),
            microphone: get(keys::MICROPHONE_USAGE),
            motion: get(keys::MOTION_USAGE),
            photo_library: get(keys::PHOTO_LIBRARY_USAGE),
            reminders: get(keys::REMINDERS_USAGE),
            siri: get(keys::SIRI_USAGE),
            speech_recognition: get(keys::SPEECH_RECOGNITION_USAGE),
            video_subscriber_account: get(keys::VIDEO_SUBSCRIBER_USAGE),
        }
    }
}

/// The derived projection of a bundle's well-known fields.
///
/// Computed once from a [`Manifest`] and then owned by the caller. Plain
/// data: every field is a pure function of the underlying bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleInfo {
    /// User-visible name, falling back to the bundle name when the display
    /// name is empty.
    pub name: String,
    /// `CFBundleDisplayName` (required key).
    pub display_name: String,
    /// `CFBundleName` (required key).
    pub bundle_name: String,
    /// `CFBundleShortVersionString` (required key).
    pub version: String,
    /// `CFBundleVersion` (required key).
    pub build: String,
    /// `CFBundleIdentifier` (required key).
    pub identifier: String,
    /// `CFBundleExecutable`; empty when not declared.
    pub executable: String,
    /// Schemes from the first URL-type declaration; empty when absent or
    /// ill-shaped.
    pub url_schemes: Vec<String>,
    /// First declared URL scheme, if any.
    pub main_scheme: Option<String>,
    pub file_sharing_enabled: bool,
    pub status_bar_hidden: bool,
    pub status_bar_style: Option<StatusBarStyle>,
    pub view_controller_based_status_bar: bool,
    pub requires_full_screen: bool,
    pub background_modes: Vec<BackgroundMode>,
    pub supported_orientations: Vec<Orientation>,
    pub supported_orientations_ipad: Vec<Orientation>,
    /// `NSAllowsArbitraryLoads` from the transport-security dictionary.
    pub allows_arbitrary_loads: bool,
    pub privacy: PrivacyUsage,
}

impl BundleInfo {
    /// Compute the projection from a manifest.
    ///
    /// # Panics
    ///
    /// Panics if any of the required keys (`CFBundleDisplayName`,
    /// `CFBundleName`, `CFBundleShortVersionString`, `CFBundleVersion`,
    /// `CFBundleIdentifier`) is missing or not a string. Required keys are
    /// guaranteed by deployment convention; see
    /// [`Manifest::required_string`].
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let display_name = manifest.required_string(keys::DISPLAY_NAME).to_string();
        let bundle_name = manifest.required_string(keys::BUNDLE_NAME).to_string();
        let name = if display_name.is_empty() {
            bundle_name.clone()
        } else {
            display_name.clone()
        };

        let url_schemes = url_schemes(manifest);
        let main_scheme = url_schemes.first().cloned();

        Self {
            name,
            display_name,
            bundle_name,
            version: manifest.required_string(keys::SHORT_VERSION).to_string(),
            build: manifest.required_string(keys::VERSION).to_string(),
            identifier: manifest.required_string(keys::IDENTIFIER).to_string(),
            executable: manifest.string_or_default(keys::EXECUTABLE).to_string(),
            url_schemes,
            main_scheme,
            file_sharing_enabled: manifest.bool(keys::FILE_SHARING_ENABLED),
            status_bar_hidden: manifest.bool(keys::STATUS_BAR_HIDDEN),
            status_bar_style: manifest
                .string(keys::STATUS_BAR_STYLE)
                .and_then(StatusBarStyle::from_key),
            view_controller_based_status_bar: manifest
                .bool(keys::VIEW_CONTROLLER_BASED_STATUS_BAR),
            requires_full_screen: manifest.bool(keys::REQUIRES_FULL_SCREEN),
            background_modes: manifest
                .string_array(keys::BACKGROUND_MODES)
                .iter()
                .filter_map(|mode| BackgroundMode::from_key(mode))
                .collect(),
            supported_orientations: orientations(manifest, keys::SUPPORTED_ORIENTATIONS),
            supported_orientations_ipad: orientations(manifest, keys::SUPPORTED_ORIENTATIONS_IPAD),
            allows_arbitrary_loads: allows_arbitrary_loads(manifest),
            privacy: PrivacyUsage::from_manifest(manifest),
        }
    }
}

/// Extract the scheme list from the first URL-type declaration.
///
/// The declaration is an array of dictionaries, each carrying its own
/// scheme array. Any missing or ill-shaped level yields the empty list.
fn url_schemes(manifest: &Manifest) -> Vec<String> {
    let schemes = manifest
        .value(keys::URL_TYPES)
        .and_then(Value::as_array)
        .and_then(|types| types.first())
        .and_then(Value::as_object)
        .and_then(|url_type| url_type.get(keys::URL_SCHEMES))
        .and_then(Value::as_array);

    match schemes {
        Some(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

fn orientations(manifest: &Manifest, key: &str) -> Vec<Orientation> {
    manifest
        .string_array(key)
        .iter()
        .map(|s| Orientation::from_key(s))
        .collect()
}

fn allows_arbitrary_loads(manifest: &Manifest) -> bool {
    manifest
        .dictionary(keys::APP_TRANSPORT_SECURITY)
        .and_then(|ats| ats.get(keys::ALLOWS_ARBITRARY_LOADS))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
