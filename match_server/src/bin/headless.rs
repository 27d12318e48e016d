//! Runs one pong match without a transport, with two scripted paddles.
//!
//! Useful for eyeballing the log output of a full match:
//! `RUST_LOG=debug pong-headless --seed 7`

use clap::Parser;
use match_server::{MatchData, MatchHandler, MatchState, PongMatch, Presence};
use proto::{Encoding, OpCode, PaddleUpdate, C2S, S2C};
use serde_json::json;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Seed for serve directions
    #[clap(short, long, default_value = "12345")]
    seed: u64,
    /// Points needed to win
    #[clap(short, long, default_value = "5")]
    win_score: u32,
    /// Stop after this many ticks even if nobody has won
    #[clap(short, long, default_value = "20000")]
    max_ticks: u64,
    /// Log filter used when RUST_LOG is unset
    #[clap(short, long, default_value = "info")]
    log_level: String,
}

/// Paddle that chases the ball with a capped step per tick
struct Bot {
    user_id: &'static str,
    slot: u8,
    speed: f32,
    y: f32,
}

impl Bot {
    fn new(user_id: &'static str, slot: u8, speed: f32) -> Self {
        Self {
            user_id,
            slot,
            speed,
            y: 250.0,
        }
    }

    fn follow(&mut self, snapshot: &proto::GameStateSnapshot) -> Option<MatchData> {
        let target = snapshot.ball.y - 50.0;
        let delta = (target - self.y).clamp(-self.speed, self.speed);
        if delta.abs() < f32::EPSILON {
            return None;
        }
        self.y += delta;

        let bytes = C2S::PaddleUpdate(PaddleUpdate { y: f64::from(self.y) })
            .to_bytes(Encoding::Json)
            .ok()?;
        Some(MatchData::new(self.user_id, OpCode::PaddleUpdate.code(), bytes))
    }

    fn sync(&mut self, snapshot: &proto::GameStateSnapshot) {
        if let Some(paddle) = snapshot.paddles.get(&self.slot) {
            self.y = paddle.y;
        }
    }
}

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn ready(user_id: &str) -> MatchData {
    MatchData::new(user_id, OpCode::PlayerReady.code(), "{}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let handler = PongMatch;
    let params = json!({
        "seed": args.seed,
        "win_score": args.win_score,
        "encoding": "json",
    });
    let init = handler.init(&params)?;
    info!(interval = ?init.tick_interval(), label = %init.label, "headless match");

    let mut bots = [Bot::new("left-bot", 1, 9.0), Bot::new("right-bot", 2, 6.5)];
    let mut state: MatchState = init.state;

    for bot in &bots {
        let presence = Presence::new(bot.user_id);
        let attempt = handler.join_attempt(state, &presence);
        state = attempt.state;
        if let Some(reason) = attempt.result.err() {
            return Err(format!("{} could not join: {reason}", bot.user_id).into());
        }
        state = handler
            .join(state, &[presence])
            .state
            .ok_or("match ended during join")?;
    }

    let mut inbox: Vec<MatchData> = bots.iter().map(|bot| ready(bot.user_id)).collect();
    let mut last_phase = state.phase;

    let mut state = loop {
        if state.tick >= args.max_ticks {
            warn!(tick = state.tick, "tick limit reached");
            break Some(state);
        }

        let transition = handler.tick(state, &inbox);
        inbox.clear();

        for broadcast in &transition.broadcasts {
            match S2C::from_bytes(broadcast.op_code.code(), &broadcast.payload, Encoding::Json)? {
                S2C::GameState(snapshot) => {
                    for bot in bots.iter_mut() {
                        bot.sync(&snapshot);
                        inbox.extend(bot.follow(&snapshot));
                    }
                }
                S2C::ScoreUpdate(update) => {
                    info!(slot = update.slot, score = update.score, "score")
                }
                S2C::GameOver(over) => info!(winner = over.winner, "winner decided"),
                S2C::GameStart => info!("serve"),
            }
        }

        match transition.state {
            Some(next) => {
                if next.phase != last_phase {
                    info!(tick = next.tick, from = ?last_phase, to = ?next.phase, "phase change");
                    last_phase = next.phase;
                }
                state = next;
            }
            None => break None,
        }
    };

    if let Some(current) = state.take() {
        let final_state = current.snapshot();
        let ended = handler.terminate(current, 0);
        if let Some(terminated) = ended.state {
            let closed = handler.tick(terminated, &[]).is_ended();
            if !closed {
                warn!("match still alive after terminate");
            }
        }
        info!(
            tick = final_state.tick,
            left = final_state.scores.get(&1).copied().unwrap_or_default(),
            right = final_state.scores.get(&2).copied().unwrap_or_default(),
            "match stopped"
        );
    } else {
        info!("match ended");
    }

    Ok(())
}
