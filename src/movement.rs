/// Enemy movement policies.
///
/// A policy is chosen once from the enemy's spawn-time level and never
/// re-read from the live level, so a level-up cannot change how an
/// already-spawned enemy moves.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MovementPolicy {
    /// Straight fall.
    None,
    /// Sine-wave drift: `phase += rate`, then `dx = sin(phase) * amplitude`.
    ZigZag { rate: f64, amplitude: f64 },
    /// Step `speed` units toward the player's horizontal position.
    Homing { speed: f64 },
    /// Same as `ZigZag`, tuned faster and wider for late levels.
    FastZigZag { rate: f64, amplitude: f64 },
}

impl MovementPolicy {
    pub fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => MovementPolicy::None,
            2 => MovementPolicy::ZigZag { rate: 0.1, amplitude: 5.0 },
            3 => MovementPolicy::Homing { speed: 2.0 },
            _ => MovementPolicy::FastZigZag { rate: 0.2, amplitude: 6.0 },
        }
    }

    /// Horizontal displacement for one enemy step.  Periodic policies
    /// advance `phase` before sampling it.  `target_x` is the player's
    /// horizontal position, if a player exists.
    pub fn displacement(&self, phase: &mut f64, enemy_x: f64, target_x: Option<f64>) -> f64 {
        match *self {
            MovementPolicy::None => 0.0,
            MovementPolicy::ZigZag { rate, amplitude }
            | MovementPolicy::FastZigZag { rate, amplitude } => {
                *phase += rate;
                phase.sin() * amplitude
            }
            MovementPolicy::Homing { speed } => match target_x {
                Some(tx) => sign(tx - enemy_x) * speed,
                None => 0.0,
            },
        }
    }
}

/// Per-step fall speed for an enemy spawned at `level`.
pub fn fall_speed(base: f64, level: u32) -> f64 {
    base + level as f64
}

// f64::signum maps 0.0 to 1.0; an enemy already aligned must stay put.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
