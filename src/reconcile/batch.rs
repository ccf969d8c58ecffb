use std::num::NonZeroUsize;

/// Maximum number of tracks the Spotify playlist endpoint accepts per request.
pub const MAX_TRACKS_PER_REQUEST: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => panic!("batch size must be non-zero"),
};

/// Splits `items` into consecutive chunks of at most `size` elements.
///
/// Chunks partition the input in order; only the last one may be shorter.
pub fn chunk<T: Clone>(items: &[T], size: NonZeroUsize) -> Vec<Vec<T>> {
    items.chunks(size.get()).map(<[T]>::to_vec).collect()
}
