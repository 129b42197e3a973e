use super::*;

/// Picks uniformly from a fixed, non-empty set of options.
pub(crate) struct RandomChoice<T> {
  options: Vec<T>,
  rng: fastrand::Rng,
}

impl<T> RandomChoice<T> {
  pub(crate) fn new(options: Vec<T>) -> Result<Self> {
    Self::with_rng(options, fastrand::Rng::new())
  }

  pub(crate) fn pick(&mut self) -> &T {
    &self.options[self.rng.usize(..self.options.len())]
  }

  #[cfg(test)]
  pub(crate) fn seeded(options: Vec<T>, seed: u64) -> Result<Self> {
    Self::with_rng(options, fastrand::Rng::with_seed(seed))
  }

  fn with_rng(options: Vec<T>, rng: fastrand::Rng) -> Result<Self> {
    anyhow::ensure!(!options.is_empty(), "no options to choose from");
    Ok(Self { options, rng })
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::collections::HashMap};

  const POSTS: [&str; 4] = ["#post1-lnk", "#post2-lnk", "#post3-lnk", "#post4-lnk"];

  #[test]
  fn empty_option_set_is_rejected() {
    assert!(RandomChoice::<&str>::new(Vec::new()).is_err());
  }

  #[test]
  fn single_option_is_always_picked() {
    let mut choice = RandomChoice::new(vec!["Hello!"]).unwrap();

    for _ in 0..100 {
      assert_eq!(*choice.pick(), "Hello!");
    }
  }

  #[test]
  fn picks_converge_to_uniform_distribution() {
    const TRIALS: u32 = 10_000;

    let mut choice = RandomChoice::seeded(POSTS.to_vec(), 0x5eed).unwrap();

    let mut counts = HashMap::new();

    for _ in 0..TRIALS {
      *counts.entry(*choice.pick()).or_insert(0u32) += 1;
    }

    assert_eq!(counts.len(), POSTS.len(), "every option should appear");

    for post in POSTS {
      let share = f64::from(counts[post]) / f64::from(TRIALS);

      assert!(
        (share - 0.25).abs() <= 0.03,
        "{post} was picked {:.1}% of the time",
        share * 100.0
      );
    }
  }

  #[test]
  fn unseeded_picks_stay_within_the_option_set() {
    let mut choice = RandomChoice::new(POSTS.to_vec()).unwrap();

    for _ in 0..1_000 {
      assert!(POSTS.contains(choice.pick()));
    }
  }
}
