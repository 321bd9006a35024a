use crate::image::color::ColorMatch;

/// Closed interval of foreground pixels on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct RowSpan {
    pub(super) first: usize,
    pub(super) last: usize,
}

/// Find the outermost non-background pixels of a row of RGBA bytes.
///
/// Returns `None` when every pixel matches the background.
pub(super) fn foreground_span(row: &[u8], background: &ColorMatch) -> Option<RowSpan> {
    let first = row.chunks_exact(4).position(|px| !background.matches(px))?;
    let last = row
        .chunks_exact(4)
        .rposition(|px| !background.matches(px))
        .unwrap_or(first);
    Some(RowSpan { first, last })
}
