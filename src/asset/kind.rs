//! Asset kinds handled by the bundler.

use std::fmt;

/// Which bundling stage is running.
///
/// The two stages are structurally identical; everything that differs
/// (extension, minified marker, default paths) hangs off this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Stylesheets (`.css`)
    Css,
    /// Scripts (`.js`)
    Js,
}

impl AssetKind {
    /// Source file extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Substring marking an already-minified file.
    pub const fn min_marker(self) -> &'static str {
        match self {
            Self::Css => ".min.css",
            Self::Js => ".min.js",
        }
    }

    /// Human-readable name used in log messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::Js => "JavaScript",
        }
    }

    /// Logger module prefix.
    pub const fn module(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    pub const fn default_source_dir(self) -> &'static str {
        match self {
            Self::Css => "src/css",
            Self::Js => "src/js",
        }
    }

    pub const fn default_dest_dir(self) -> &'static str {
        match self {
            Self::Css => "dist/css",
            Self::Js => "dist/js",
        }
    }

    pub const fn default_temp_file(self) -> &'static str {
        match self {
            Self::Css => "styles.temp.css",
            Self::Js => "main.temp.js",
        }
    }

    pub const fn default_output_file(self) -> &'static str {
        match self {
            Self::Css => "styles.min.css",
            Self::Js => "main.min.js",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
