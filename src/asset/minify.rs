//! Asset minification for JS and CSS.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{AssetKind, BundleError};

/// Minified output plus size accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct Minified {
    pub code: String,
    pub original_size: usize,
}

impl Minified {
    /// Fraction of bytes removed, `1 - minified / original`.
    ///
    /// Zero for empty input. Negative if minification grew the text.
    #[allow(clippy::cast_precision_loss)]
    pub fn efficiency(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        1.0 - self.code.len() as f64 / self.original_size as f64
    }

    /// Efficiency as a rounded whole percentage.
    #[allow(clippy::cast_possible_truncation)]
    pub fn percent(&self) -> i64 {
        (self.efficiency() * 100.0).round() as i64
    }
}

/// Minify JavaScript source code.
///
/// Input is parsed as a classic script, since concatenated files share one
/// global scope. Compression and mangling are both enabled. Any parse error
/// rejects the whole input.
pub fn minify_js(source: &str) -> Result<Minified, BundleError> {
    let allocator = Allocator::default();
    let source_type = SourceType::default().with_script(true);
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(BundleError::MinifyJs(message));
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Ok(Minified {
        code,
        original_size: source.len(),
    })
}

/// Minify CSS source code.
///
/// Invalid rules are dropped rather than failing the stage; only errors the
/// parser cannot recover from are reported.
pub fn minify_css(source: &str) -> Result<Minified, BundleError> {
    let parser_options = ParserOptions {
        error_recovery: true,
        ..ParserOptions::default()
    };
    let mut stylesheet = StyleSheet::parse(source, parser_options)
        .map_err(|err| BundleError::MinifyCss(err.to_string()))?;
    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|err| BundleError::MinifyCss(err.to_string()))?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .map_err(|err| BundleError::MinifyCss(err.to_string()))?;
    Ok(Minified {
        code: result.code,
        original_size: source.len(),
    })
}

/// Minify content for the given asset kind.
pub fn minify(kind: AssetKind, source: &str) -> Result<Minified, BundleError> {
    match kind {
        AssetKind::Css => minify_css(source),
        AssetKind::Js => minify_js(source),
    }
}
