use crate::core::shuffle::RandomSource;
use crate::domain::model::{DrawTicket, TickFrame};
use crate::utils::error::{Result, ToolboxError};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Drawing,
    Settled,
}

impl fmt::Display for DrawState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawState::Idle => write!(f, "idle"),
            DrawState::Drawing => write!(f, "drawing"),
            DrawState::Settled => write!(f, "settled"),
        }
    }
}

// 拉霸減速節奏：30 格 50ms、15 格每格 +20ms、10 格每格 +50ms
const FAST_FRAMES: usize = 30;
const MID_FRAMES: usize = 15;
const SLOW_FRAMES: usize = 10;
const BASE_DELAY_MS: u64 = 50;

/// Lucky-draw session over a snapshot of roster names.
/// `Idle -> Drawing -> Settled -> Idle`; exclusion comes from the state, not a
/// lock, and the winner is fixed the moment a draw starts.
#[derive(Debug, Clone)]
pub struct DrawSession {
    roster_names: Vec<String>,
    available: Vec<String>,
    winners: Vec<String>,
    repeatable: bool,
    state: DrawState,
    pending: Option<String>,
}

impl DrawSession {
    pub fn new(roster_names: Vec<String>) -> Self {
        Self {
            available: roster_names.clone(),
            roster_names,
            winners: Vec::new(),
            repeatable: false,
            state: DrawState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn repeatable(&self) -> bool {
        self.repeatable
    }

    /// Most recent first.
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    fn candidate_pool(&self) -> &[String] {
        if self.repeatable {
            &self.roster_names
        } else {
            &self.available
        }
    }

    /// Only allowed while idle, so a running draw keeps the pool it started with.
    pub fn set_repeatable(&mut self, repeatable: bool) -> Result<()> {
        if self.state != DrawState::Idle {
            return Err(ToolboxError::NotIdle {
                state: self.state.to_string(),
            });
        }
        self.repeatable = repeatable;
        Ok(())
    }

    /// `Idle -> Drawing`. Picks the winner from the candidate pool right now;
    /// an empty pool reports exhaustion and leaves the session idle.
    pub fn start(&mut self, rng: &mut impl RandomSource) -> Result<DrawTicket> {
        if self.state == DrawState::Drawing {
            return Err(ToolboxError::DrawInProgress);
        }

        let pool = self.candidate_pool();
        if pool.is_empty() {
            return Err(ToolboxError::PoolExhausted);
        }

        let winner = pool[rng.pick(pool.len())].clone();
        let frames = deceleration_frames(pool, &winner, rng);

        tracing::debug!("Draw started, {} candidates in pool", pool.len());
        self.state = DrawState::Drawing;
        self.pending = Some(winner.clone());

        Ok(DrawTicket { winner, frames })
    }

    /// `Drawing -> Settled`: commit the pending winner. `Settled -> Idle` is
    /// automatic.
    pub fn settle(&mut self) -> Result<String> {
        if self.state != DrawState::Drawing {
            return Err(ToolboxError::NoPendingDraw);
        }
        let winner = self.pending.take().ok_or(ToolboxError::NoPendingDraw)?;
        self.state = DrawState::Settled;

        self.winners.insert(0, winner.clone());
        if !self.repeatable {
            // Remove every occurrence: a roster may hold duplicate names, and
            // a settled name must never be drawable again.
            self.available.retain(|n| n != &winner);
        }

        tracing::info!("Winner settled: {}", winner);
        self.state = DrawState::Idle;
        Ok(winner)
    }

    /// Rejected while a draw is in flight.
    pub fn reset(&mut self, roster_names: &[String]) -> Result<()> {
        if self.state == DrawState::Drawing {
            return Err(ToolboxError::DrawInProgress);
        }
        self.roster_names = roster_names.to_vec();
        self.available = roster_names.to_vec();
        self.winners.clear();
        self.pending = None;
        self.state = DrawState::Idle;
        Ok(())
    }
}

// 減速動畫的顯示序列，最後一格固定是中獎者
fn deceleration_frames(
    pool: &[String],
    winner: &str,
    rng: &mut impl RandomSource,
) -> Vec<TickFrame> {
    let total = FAST_FRAMES + MID_FRAMES + SLOW_FRAMES;
    let mut frames = Vec::with_capacity(total);
    let mut delay_ms = BASE_DELAY_MS;

    for count in 0..total - 1 {
        if count >= FAST_FRAMES + MID_FRAMES {
            delay_ms += 50;
        } else if count >= FAST_FRAMES {
            delay_ms += 20;
        }
        frames.push(TickFrame {
            name: pool[rng.pick(pool.len())].clone(),
            delay: Duration::from_millis(delay_ms),
        });
    }
    frames.push(TickFrame {
        name: winner.to_string(),
        delay: Duration::from_millis(delay_ms),
    });
    frames
}
