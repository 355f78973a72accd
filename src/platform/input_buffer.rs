//=========================================================================
// Input Buffer
//
// Per-frame aggregation of converted input on the main thread.
//
// Responsibilities:
// - Keep discrete events (key/button transitions) in arrival order
// - Coalesce cursor motion to the last reported position
// - Sum wheel deltas over the frame
// - Hand the frame over as (discrete, continuous) via `drain()`
// - Take back a frame the channel refused via `requeue()`
//
// Notes:
// Transitions are never deduplicated: a press-release-press inside one
// frame must reach the tracker as three events.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<(f32, f32)>,
    wheel: Option<(f32, f32)>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
            wheel: None,
        }
    }

    //--- push() -----------------------------------------------------------
    //
    // Routes an event to its lane. `Unidentified` events are dropped here,
    // they carry nothing the tracker could use.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMoved { x, y } => self.cursor = Some((x, y)),
            InputEvent::MouseWheel { dx, dy } => {
                let (sx, sy) = self.wheel.unwrap_or((0.0, 0.0));
                self.wheel = Some((sx + dx, sy + dy));
            }
            InputEvent::Unidentified => {}
            discrete => self.discrete.push(discrete),
        }
    }

    //--- drain() ----------------------------------------------------------
    //
    // Returns `None` for an empty frame so nothing is sent for it.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let mut continuous = Vec::with_capacity(2);
        if let Some((x, y)) = self.cursor.take() {
            continuous.push(InputEvent::MouseMoved { x, y });
        }
        if let Some((dx, dy)) = self.wheel.take() {
            continuous.push(InputEvent::MouseWheel { dx, dy });
        }

        Some((discrete, continuous))
    }

    //--- requeue() --------------------------------------------------------
    //
    // Puts an undelivered frame back in front of whatever was buffered
    // since. Discrete events keep their order; a newer cursor position
    // wins and wheel deltas add up.
    //
    pub(crate) fn requeue(&mut self, mut discrete: Vec<InputEvent>, continuous: Vec<InputEvent>) {
        discrete.append(&mut self.discrete);
        self.discrete = discrete;

        for event in continuous {
            match event {
                InputEvent::MouseMoved { x, y } => {
                    self.cursor.get_or_insert((x, y));
                }
                wheel @ InputEvent::MouseWheel { .. } => self.push(wheel),
                _ => {}
            }
        }
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none() && self.wheel.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
