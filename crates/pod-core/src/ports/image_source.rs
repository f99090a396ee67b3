//! Image source port.

use crate::domain::ImageInfo;

/// Port for enumerating and decoding the images of a batch.
pub trait ImageSource: Send + Sync {
    /// Returns an iterator over decoded images, in a stable order.
    ///
    /// # Errors
    ///
    /// An item is an error when its image cannot be read or decoded; later
    /// items are unaffected.
    fn images(&self) -> Box<dyn Iterator<Item = anyhow::Result<ImageInfo>> + Send + '_>;

    /// Returns the number of items `images()` will yield, if known.
    fn count_hint(&self) -> Option<usize>;
}
