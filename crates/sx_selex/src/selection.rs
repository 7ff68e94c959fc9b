//! Rank-based truncation selection.

/// Anything that carries a selection score.
pub trait Ranked {
    fn score(&self) -> f64;
}

/// Number of entries kept from a pool of `len`: `max(1, floor(len * fraction))`,
/// never more than `len`. Zero for an empty pool.
pub fn selection_size(len: usize, fraction: f64) -> usize {
    if len == 0 {
        return 0;
    }
    let n = (len as f64 * fraction).floor() as usize;
    n.clamp(1, len)
}

/// Sort `scored` by descending score and keep the top `fraction`.
///
/// The sort is stable, so tied entries keep their relative order. Any
/// non-empty pool yields at least one entry.
pub fn select_binders<T: Ranked>(mut scored: Vec<T>, fraction: f64) -> Vec<T> {
    if scored.is_empty() {
        return scored;
    }
    let keep = selection_size(scored.len(), fraction);
    scored.sort_by(|a, b| b.score().total_cmp(&a.score()));
    scored.truncate(keep);
    scored
}
