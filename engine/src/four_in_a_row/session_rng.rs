use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_picks() {
        let items: Vec<usize> = (0..36).collect();
        let mut first = SessionRng::new(17);
        let mut second = SessionRng::new(17);

        let a: Vec<Option<usize>> = (0..20).map(|_| first.pick(&items)).collect();
        let b: Vec<Option<usize>> = (0..20).map(|_| second.pick(&items)).collect();
        assert_eq!(a, b);
        assert_eq!(first.seed(), 17);
    }

    #[test]
    fn test_pick_from_empty_slice() {
        let mut rng = SessionRng::new(1);
        let empty: [usize; 0] = [];
        assert_eq!(rng.pick(&empty), None);
        assert_eq!(rng.pick(&[5usize]), Some(5));
    }
}
