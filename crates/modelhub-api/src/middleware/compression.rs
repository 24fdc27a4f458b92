//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a gzip compression layer. Model lists carry full diagram XML and
/// SVG previews, which compress well.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new().gzip(true)
}
