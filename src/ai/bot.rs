// Bot trait for scripted opponents

use crate::game::state::{Ball, Paddle};

/// Trait for scripted paddle controllers
///
/// A bot owns whatever state it needs (random source, timers) and repositions its paddle once
/// per frame from what it can see of the ball.
pub trait Bot {
    /// Move `paddle` for this frame
    fn drive(&mut self, paddle: &mut Paddle, ball: &Ball);

    /// Bot name for debugging/display
    fn name(&self) -> &str;
}
