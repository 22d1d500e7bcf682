//! Random starting arrays

use crate::config::Config;
use rand::Rng;

/// `len` values drawn uniformly from `min..=max`
pub fn generate_starting_list<R: Rng + ?Sized>(len: usize, min: i32, max: i32, rng: &mut R) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(min..=max)).collect()
}

/// A starting list sized and bounded by `config`
pub fn generate_from_config<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Vec<i32> {
    generate_starting_list(config.array_len, config.min_value, config.max_value, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CONFIG;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = generate_starting_list(250, -5, 5, &mut rng);
        assert_eq!(values.len(), 250);
        assert!(values.iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn test_config_sized() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = generate_from_config(&DEFAULT_CONFIG, &mut rng);
        assert_eq!(values.len(), DEFAULT_CONFIG.array_len);
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_starting_list(4, 9, 9, &mut rng), vec![9; 4]);
    }
}
