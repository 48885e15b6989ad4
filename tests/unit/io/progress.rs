//! Tests for phase progress bars and quiet suppression

#[cfg(test)]
mod tests {
    use huetile::io::progress::phase_bar;

    #[test]
    fn test_quiet_bar_is_hidden() {
        let bar = phase_bar("Matching", 100, true);
        assert!(bar.is_hidden());
    }

    #[test]
    fn test_bar_carries_phase_length() {
        let bar = phase_bar("Resizing", 42, false);
        assert_eq!(bar.length(), Some(42));
    }

    #[test]
    fn test_bar_ticks_without_output_when_quiet() {
        let bar = phase_bar("Rendering", 3, true);
        bar.inc(1);
        bar.inc(2);
        bar.finish_and_clear();
        assert_eq!(bar.position(), 3);
    }
}
