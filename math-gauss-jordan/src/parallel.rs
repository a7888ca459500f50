//! Parallel utilities with feature-gated implementations
//!
//! Independent systems share no state, so they can be dispatched through
//! rayon when the `parallel` feature is enabled. Without it every helper falls
//! back to a plain sequential loop with the same results.

/// Check if parallel processing is available
#[cfg(feature = "parallel")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "parallel"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Parallel map over a slice
#[cfg(feature = "parallel")]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter().map(f).collect()
}

/// Sequential map (fallback when parallel is not available)
#[cfg(not(feature = "parallel"))]
pub fn parallel_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    data.iter().map(f).collect()
}

/// Parallel map over a mutable slice, each element visited exactly once
#[cfg(feature = "parallel")]
pub fn parallel_map_mut<T, U, F>(data: &mut [T], f: F) -> Vec<U>
where
    T: Send,
    U: Send,
    F: Fn(&mut T) -> U + Sync + Send,
{
    use rayon::prelude::*;
    data.par_iter_mut().map(f).collect()
}

/// Sequential mutable map (fallback)
#[cfg(not(feature = "parallel"))]
pub fn parallel_map_mut<T, U, F>(data: &mut [T], f: F) -> Vec<U>
where
    F: Fn(&mut T) -> U,
{
    data.iter_mut().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_preserves_order() {
        let data: Vec<usize> = (0..100).collect();
        let squares = parallel_map(&data, |x| x * x);
        assert_eq!(squares.len(), 100);
        for (i, v) in squares.iter().enumerate() {
            assert_eq!(*v, i * i);
        }
    }

    #[test]
    fn test_parallel_map_mut_visits_every_element() {
        let mut data = vec![1.0_f64; 64];
        let previous = parallel_map_mut(&mut data, |x| {
            let old = *x;
            *x *= 2.0;
            old
        });
        assert!(previous.iter().all(|&v| v == 1.0));
        assert!(data.iter().all(|&v| v == 2.0));
    }

    #[test]
    fn test_feature_flag() {
        assert_eq!(is_parallel_available(), cfg!(feature = "parallel"));
    }
}
