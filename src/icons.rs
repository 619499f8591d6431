//! Icon lookup for service cards.
//!
//! Config files name icons with the `Fa*` / `Md*` keys of the original
//! icon packs. Instead of a reflection-style namespace lookup, the known
//! keys live in an explicit registry built at startup; unknown keys
//! resolve to `None` and the caller renders without a glyph.

use std::collections::HashMap;

/// Known icon keys mapped to display glyphs.
const ICONS: &[(&str, &str)] = &[
    ("FaServer", "🖥"),
    ("FaDatabase", "🗄"),
    ("FaGlobe", "🌐"),
    ("FaCloud", "☁"),
    ("FaChartBar", "📊"),
    ("FaChartLine", "📈"),
    ("FaFile", "📄"),
    ("FaFolder", "📁"),
    ("FaLock", "🔒"),
    ("FaKey", "🔑"),
    ("FaEnvelope", "✉"),
    ("FaCamera", "📷"),
    ("FaVideo", "🎬"),
    ("FaMusic", "🎵"),
    ("FaDownload", "⬇"),
    ("FaNetworkWired", "🔌"),
    ("FaShieldAlt", "🛡"),
    ("FaBook", "📚"),
    ("FaHome", "🏠"),
    ("MdHome", "🏠"),
    ("MdSettings", "⚙"),
    ("MdStorage", "🗄"),
    ("MdRouter", "📡"),
    ("MdDns", "🌐"),
    ("MdSecurity", "🛡"),
    ("MdMovie", "🎬"),
    ("MdPhoto", "📷"),
    ("MdCloudQueue", "☁"),
];

/// Registry of known icon keys.
///
/// # Example
///
/// ```rust
/// use statuswatch::IconRegistry;
///
/// let icons = IconRegistry::new();
/// assert!(icons.get("FaServer").is_some());
/// assert!(icons.get("FaDoesNotExist").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct IconRegistry {
    glyphs: HashMap<&'static str, &'static str>,
}

impl IconRegistry {
    /// Build the registry of known keys.
    pub fn new() -> Self {
        Self {
            glyphs: ICONS.iter().copied().collect(),
        }
    }

    /// Look up a glyph by its configured key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.glyphs.get(key).copied()
    }
}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::new()
    }
}
