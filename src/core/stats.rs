/// Share of `matches` in `total`, in percent. An empty pass yields `0.0`.
pub fn destination_percentage(matches: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (matches as f64 / total as f64) * 100.0
}
