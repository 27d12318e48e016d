use crate::{Ball, Config, Events, GameMap, GameRng, Score};

/// Check if ball reached a goal line (scoring)
pub fn check_scoring(
    ball: &mut Ball,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    let Some(conceded) = map.goal_crossed(ball.pos.x) else {
        return;
    };

    let scorer = conceded.opponent();
    score.increment(scorer);
    events.scored = Some(scorer);

    // Served toward the scorer: x reverses relative to the ball that crossed
    let dir_x = if ball.vel.x < 0.0 { 1.0 } else { -1.0 };
    ball.serve(dir_x, config, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slot;
    use glam::Vec2;

    fn setup() -> (Config, GameMap, Score, Events, GameRng) {
        let config = Config::new();
        let map = GameMap::new(&config);
        (config, map, Score::new(), Events::new(), GameRng::new(12345))
    }

    #[test]
    fn test_slot_two_scores_when_ball_exits_left() {
        let (config, map, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(-0.1, 200.0), Vec2::new(-420.0, 60.0));

        check_scoring(&mut ball, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.get(Slot::Two), 1, "Slot two should score");
        assert_eq!(score.get(Slot::One), 0);
        assert_eq!(events.scored, Some(Slot::Two));
        assert_eq!(ball.pos, config.ball_spawn(), "Ball should reset to center");
        assert_eq!(ball.vel.x, config.ball_speed, "X velocity reversed at serve speed");
    }

    #[test]
    fn test_slot_one_scores_when_ball_exits_right() {
        let (config, map, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(map.width + 0.1, 200.0), Vec2::new(350.0, 0.0));

        check_scoring(&mut ball, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.get(Slot::One), 1);
        assert_eq!(events.scored, Some(Slot::One));
        assert_eq!(ball.vel.x, -config.ball_speed);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (config, map, mut score, mut events, mut rng) = setup();
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::new(350.0, 175.0));

        check_scoring(&mut ball, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert_eq!(events.scored, None);
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (config, map, mut score, mut events, mut rng) = setup();

        for _ in 0..2 {
            let mut ball = Ball::new(Vec2::new(map.width + 0.1, 300.0), Vec2::new(350.0, 0.0));
            check_scoring(&mut ball, &map, &mut score, &mut events, &mut rng, &config);
            events.clear();
        }

        assert_eq!(score.get(Slot::One), 2, "Scores should accumulate");
        assert_eq!(score.get(Slot::Two), 0);
    }
}
