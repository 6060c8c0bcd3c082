//! CSS and JavaScript bundling.
//!
//! Both stages run the same steps, parameterized by [`AssetKind`]:
//!
//! ```text
//! src/css/*.css ─scan─▶ concat ─▶ dist/css/styles.temp.css
//!                                   │ minify (lightningcss)
//!                                   ▼
//!                                 dist/css/styles.min.css   (temp removed)
//! ```
//!
//! | Module    | Role                                   |
//! |-----------|----------------------------------------|
//! | `options` | overrides + per-kind default table     |
//! | `scan`    | source discovery (pure)                |
//! | `concat`  | ordered byte concatenation             |
//! | `minify`  | oxc / lightningcss wrappers            |
//! | `bundle`  | stage orchestration                    |

mod bundle;
mod concat;
mod error;
mod kind;
mod minify;
mod options;
mod scan;

pub use bundle::{BundleReport, bundle, concat_css, concat_js, run_bundle};
pub use concat::concat_files;
pub use error::BundleError;
pub use kind::AssetKind;
pub use minify::{Minified, minify, minify_css, minify_js};
pub use options::{BundleConfig, BundleOptions};
pub use scan::{discover, is_candidate, resolve_files};
