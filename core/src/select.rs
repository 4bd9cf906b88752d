/// Number of sentences a summary of the given depth asks for.
pub fn depth_to_k(depth: i64) -> usize {
    match depth {
        d if d <= 1 => 1,
        2 => 3,
        3 => 5,
        _ => 10,
    }
}

/// Pick the `k` best scores and return their positions in ascending order.
///
/// Each round scans left to right and only a strictly greater score replaces
/// the current best, so the earliest sentence wins a tie.
pub fn select_top_k(scores: &[f64], k: usize) -> Vec<usize> {
    let k = k.min(scores.len());
    let mut selected = vec![false; scores.len()];
    for _ in 0..k {
        let mut best: Option<(usize, f64)> = None;
        for (i, &score) in scores.iter().enumerate() {
            if selected[i] { continue; }
            if best.map_or(true, |(_, b)| score > b) { best = Some((i, score)); }
        }
        if let Some((i, _)) = best { selected[i] = true; }
    }
    selected.iter().enumerate().filter_map(|(i, &s)| s.then_some(i)).collect()
}
