use crate::{Ball, Body, Config, EndRule, Events, GameRng, Score, Side};
use hecs::World;
use tracing::info;

/// Result of checking the ball against the horizontal bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsOutcome {
    /// Ball is inside the playfield
    InPlay,
    /// A point was scored and the ball was put back at the centre
    Respawned,
    /// The run is over
    MatchOver,
}

/// Check if the ball left the playfield. Runs before the ball is
/// integrated, so it sees the previous frame's position.
pub fn check_bounds(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> BoundsOutcome {
    for (_entity, (_ball, body)) in world.query_mut::<(&Ball, &mut Body)>() {
        if !config.is_out_of_bounds_x(body.pos.x) {
            continue;
        }

        let exited = if body.pos.x > config.max_x {
            Side::Right
        } else {
            Side::Left
        };
        events.ball_exited = Some(exited);

        match config.end_rule {
            EndRule::EndRun => {
                info!(x = body.pos.x, side = ?exited, "ball left the playfield, ending run");
                return BoundsOutcome::MatchOver;
            }
            EndRule::ScoredRounds { win_score } => {
                let scorer = exited.opposite();
                score.increment(scorer);
                events.scored = Some(scorer);
                info!(
                    side = ?scorer,
                    left = score.get(Side::Left),
                    right = score.get(Side::Right),
                    "point scored"
                );

                if score.has_winner(win_score).is_some() {
                    info!(winner = ?scorer, "match won");
                    return BoundsOutcome::MatchOver;
                }

                body.pos = config.ball_start();
                body.vel = Ball::respawn_velocity(rng);
                return BoundsOutcome::Respawned;
            }
        }
    }

    BoundsOutcome::InPlay
}
