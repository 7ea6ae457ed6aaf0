//! Vehicle animation along a route polyline.
//!
//! A timer walks the route one path point per tick, repositioning and
//! rotating the truck marker. At the end of the path the truck idles for a
//! few ticks, then loops from the depot again.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use rutaboard_core::geo::AnimationPath;
use wasm_bindgen::JsValue;

use crate::leaflet::Marker;
use crate::map::icons;

const TICK_MS: u64 = 300;
const LOOP_PAUSE_TICKS: u32 = 10;

struct AnimationState {
    path: AnimationPath,
    pause_ticks: u32,
}

/// A running vehicle animation. Dropping it leaves the interval alive, so
/// the owner must call [`cancel`](RouteAnimation::cancel) when the route
/// layer comes off the map.
pub struct RouteAnimation {
    handle: IntervalHandle,
}

impl RouteAnimation {
    /// Starts ticking `marker` along `path`. Returns `None` for paths too
    /// short to animate.
    pub fn start(marker: Marker, path: &[rutaboard_core::Coord]) -> Result<Option<Self>, JsValue> {
        let Some(path) = AnimationPath::new(path) else {
            return Ok(None);
        };

        let state = Rc::new(RefCell::new(AnimationState {
            path,
            pause_ticks: 0,
        }));

        let handle = set_interval_with_handle(
            move || {
                let mut state = state.borrow_mut();
                if state.pause_ticks > 0 {
                    state.pause_ticks -= 1;
                    return;
                }
                match state.path.advance() {
                    Some(step) => {
                        marker.set_lat_lng(&step.position.into());
                        match icons::vehicle(step.bearing) {
                            Ok(icon) => {
                                marker.set_icon(&icon);
                            }
                            Err(err) => log::warn!("vehicle icon rebuild failed: {:?}", err),
                        }
                    }
                    None => {
                        state.pause_ticks = LOOP_PAUSE_TICKS;
                        state.path.restart();
                    }
                }
            },
            Duration::from_millis(TICK_MS),
        )?;

        Ok(Some(Self { handle }))
    }

    /// Stops the timer. The marker stays wherever the last tick left it.
    pub fn cancel(self) {
        self.handle.clear();
    }
}
