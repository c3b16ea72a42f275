//! Console session configuration.

/// Configuration options for a console session.
///
/// The table rules are fixed; these only affect how decks are shuffled and
/// how cards are printed.
///
/// ```
/// use twentyone::SessionOptions;
///
/// let options = SessionOptions::default().with_seed(Some(7)).with_color(true);
/// assert_eq!(options.seed, Some(7));
/// assert!(options.color);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionOptions {
    /// Fixed shuffle seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Whether to colour suits with ANSI escapes.
    pub color: bool,
}

impl SessionOptions {
    /// Sets the shuffle seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether suits are coloured.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Builds the shuffle generator for this session.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn rng(&self) -> rand_chacha::ChaCha8Rng {
        use rand::SeedableRng;

        self.seed.map_or_else(
            rand_chacha::ChaCha8Rng::from_os_rng,
            rand_chacha::ChaCha8Rng::seed_from_u64,
        )
    }
}
