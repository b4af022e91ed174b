//! Policies deciding which participant acts next

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::Marker;

/// A source of the next participant to move
pub trait TurnOrder {
    fn next_actor(&mut self) -> Marker;
}

/// The turn policy chosen at the start of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TurnMode {
    Random,
    Normal,
}

impl TurnMode {
    /// Builds the sequencer for this mode, seeding the random policy if a seed is given
    pub fn sequencer(self, seed: Option<u64>) -> Box<dyn TurnOrder> {
        match self {
            TurnMode::Normal => Box::new(FixedRotation::new()),
            TurnMode::Random => match seed {
                Some(seed) => Box::new(ConstrainedRandom::new(StdRng::seed_from_u64(seed))),
                None => Box::new(ConstrainedRandom::new(StdRng::from_entropy())),
            },
        }
    }
}

/// Player one, player two, computer, then around again
#[derive(Clone, Debug, Default)]
pub struct FixedRotation {
    index: usize,
}

impl FixedRotation {
    pub fn new() -> Self {
        Self { index: 0 }
    }
}

impl TurnOrder for FixedRotation {
    fn next_actor(&mut self) -> Marker {
        let actor = Marker::PARTICIPANTS[self.index];
        self.index = (self.index + 1) % Marker::PARTICIPANTS.len();
        actor
    }
}

/// Uniformly random turns, but never the same participant three times running
#[derive(Clone, Debug)]
pub struct ConstrainedRandom<R: Rng> {
    rng: R,
    // the two most recent actors, oldest first
    history: [Option<Marker>; 2],
}

impl<R: Rng> ConstrainedRandom<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            history: [None, None],
        }
    }
}

impl<R: Rng> TurnOrder for ConstrainedRandom<R> {
    fn next_actor(&mut self) -> Marker {
        let candidates: Vec<Marker> = match self.history {
            [Some(older), Some(newer)] if older == newer => Marker::PARTICIPANTS
                .iter()
                .copied()
                .filter(|&marker| marker != newer)
                .collect(),
            _ => Marker::PARTICIPANTS.to_vec(),
        };
        let actor = candidates[self.rng.gen_range(0..candidates.len())];

        self.history = [self.history[1], Some(actor)];
        actor
    }
}
