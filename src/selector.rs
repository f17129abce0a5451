//! Root move selection for the computer opponent.
//!
//! Candidates are shuffled before they are searched, and a later candidate
//! only replaces the current choice when it scores strictly higher. Among
//! equally good moves the winner is therefore whichever the shuffle put
//! first, which keeps the computer from playing the same game every time.
//! The random source is passed in so tests can fix the seed.

use fastrand::Rng;
use log::{debug, info};

use crate::constants::SEARCH_BOUND;
use crate::difficulty::Difficulty;
use crate::rules::{Rules, RulesError};
use crate::search::{search_with_stats, SearchStats};

/// The move the selector settled on and what it cost to find.
#[derive(Clone, Debug)]
pub struct Decision<M> {
    /// Chosen move
    pub mv: M,
    /// Search score of the chosen move
    pub score: i32,
    /// Candidates searched at the root
    pub candidates: usize,
    /// Counters summed over all root searches
    pub stats: SearchStats,
}

/// Pick a move for the side to move, or `None` when there is no legal move.
///
/// `None` is not an error: the caller asks [`Rules::status`] whether it is
/// mate, stalemate or a draw. An `Err` means the rules engine failed while
/// searching.
pub fn best_move<R: Rules>(
    pos: &mut R,
    difficulty: Difficulty,
    rng: &mut Rng,
) -> Result<Option<R::Move>, RulesError> {
    Ok(decide(pos, difficulty, rng)?.map(|decision| decision.mv))
}

/// Same as [`best_move`], also reporting the score and search counters.
pub fn decide<R: Rules>(
    pos: &mut R,
    difficulty: Difficulty,
    rng: &mut Rng,
) -> Result<Option<Decision<R::Move>>, RulesError> {
    let depth = difficulty.depth();
    let mut moves = pos.legal_moves(None);
    if moves.is_empty() {
        return Ok(None);
    }
    rng.shuffle(&mut moves);

    let candidates = moves.len();
    let mut stats = SearchStats::default();
    let mut best: Option<(R::Move, i32)> = None;

    for mv in moves {
        pos.apply_move(&mv)?;
        let value = search_with_stats(
            pos,
            depth.saturating_sub(1),
            -SEARCH_BOUND,
            SEARCH_BOUND,
            false,
            &mut stats,
        );
        let undone = pos.undo_move();
        let value = value?;
        undone?;
        debug!("candidate {mv:?} scored {value}");

        // Strictly greater: ties keep the earlier candidate.
        if best.as_ref().is_none_or(|(_, score)| value > *score) {
            best = Some((mv, value));
        }
    }

    Ok(best.map(|(mv, score)| Decision {
        mv,
        score,
        candidates,
        stats,
    }))
}

/// A computer player: a difficulty level and its own random source.
#[derive(Clone, Debug)]
pub struct Opponent {
    difficulty: Difficulty,
    rng: Rng,
}

impl Default for Opponent {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Opponent {
    /// An opponent seeded from system entropy.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: Rng::new(),
        }
    }

    /// An opponent whose choices are reproducible for a given seed.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: Rng::with_seed(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Choose a move for the side to move in `pos`.
    pub fn choose<R: Rules>(
        &mut self,
        pos: &mut R,
    ) -> Result<Option<Decision<R::Move>>, RulesError> {
        let decision = decide(pos, self.difficulty, &mut self.rng)?;
        match &decision {
            Some(d) => info!(
                "{} opponent chose {:?} (score {}, {} candidates, {} nodes, {} cutoffs)",
                self.difficulty, d.mv, d.score, d.candidates, d.stats.nodes, d.stats.cutoffs
            ),
            None => info!("{} opponent has no legal move", self.difficulty),
        }
        Ok(decision)
    }
}
