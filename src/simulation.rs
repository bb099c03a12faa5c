//! Simulated navigation along a planned route.
//!
//! Walks the route polyline a few points per tick and tracks which
//! turn-by-turn step the simulated vehicle is on. Purely cosmetic.

use async_channel::Receiver;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::entities::{Coordinates, RouteResult, RouteStep};

pub const DEFAULT_POINTS_PER_TICK: usize = 2;
pub const DEFAULT_TICK: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationFix {
    pub position: Coordinates,
    pub pointer: usize,
    pub step_index: usize,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct NavigationSimulation {
    geometry: Vec<Coordinates>,
    steps: Vec<RouteStep>,
    points_per_tick: usize,
    pointer: usize,
    step_index: usize,
}

impl NavigationSimulation {
    pub fn new(route: &RouteResult, points_per_tick: usize) -> Self {
        Self {
            geometry: route.geometry.clone(),
            steps: route.steps.clone(),
            points_per_tick: points_per_tick.max(1),
            pointer: 0,
            step_index: 0,
        }
    }

    pub fn current(&self) -> Option<NavigationFix> {
        let position = *self.geometry.get(self.pointer)?;

        Some(NavigationFix {
            position,
            pointer: self.pointer,
            step_index: self.step_index,
            finished: self.pointer + 1 >= self.geometry.len(),
        })
    }

    /// Moves forward and returns the new fix, or `None` once the end was already reached.
    pub fn advance(&mut self) -> Option<NavigationFix> {
        let last = self.geometry.len().checked_sub(1)?;
        if self.pointer >= last {
            return None;
        }

        self.pointer = (self.pointer + self.points_per_tick).min(last);
        self.step_index = self.nearest_step(self.geometry[self.pointer]);

        self.current()
    }

    /// Nearest step at or after the current one, so the step never moves backwards.
    fn nearest_step(&self, position: Coordinates) -> usize {
        self.steps
            .iter()
            .enumerate()
            .skip(self.step_index)
            .min_by(|(_, a), (_, b)| {
                position
                    .haversine_distance(&a.location)
                    .total_cmp(&position.haversine_distance(&b.location))
            })
            .map(|(index, _)| index)
            .unwrap_or(self.step_index)
    }

    /// Emits the starting fix and then one fix per tick until the route end.
    pub fn run(mut self, tick: Duration) -> Receiver<NavigationFix> {
        let (tx, rx) = async_channel::unbounded();

        tokio::spawn(async move {
            let start = match self.current() {
                Some(fix) => fix,
                None => return,
            };
            if tx.send(start).await.is_err() {
                return;
            }

            let mut interval = tokio::time::interval(tick);
            interval.tick().await;

            loop {
                interval.tick().await;
                match self.advance() {
                    Some(fix) => {
                        if tx.send(fix).await.is_err() {
                            return;
                        }
                    }
                    None => return,
                }
            }
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RawRoute;

    fn step(instruction: &str, latitude: f64) -> RouteStep {
        RouteStep {
            instruction: instruction.into(),
            distance_meters: 0.0,
            duration_seconds: 0.0,
            location: Coordinates::new(latitude, 106.8),
        }
    }

    fn route() -> RouteResult {
        let geometry = (0..7)
            .map(|i| Coordinates::new(-6.0 - 0.01 * i as f64, 106.8))
            .collect();

        RouteResult::new(
            1,
            RawRoute {
                summary: None,
                distance_meters: 7_000.0,
                duration_seconds: 600.0,
                geometry,
                steps: vec![step("Mulai", -6.0), step("Belok kiri", -6.03), step("Tiba", -6.06)],
            },
        )
    }

    #[test]
    fn advances_points_per_tick_and_tracks_steps() {
        let mut sim = NavigationSimulation::new(&route(), 2);

        let start = sim.current().unwrap();
        assert_eq!(start.pointer, 0);
        assert_eq!(start.step_index, 0);

        let fix = sim.advance().unwrap();
        assert_eq!(fix.pointer, 2);
        assert_eq!(fix.step_index, 1);

        let fix = sim.advance().unwrap();
        assert_eq!(fix.pointer, 4);
        assert_eq!(fix.step_index, 1);

        let fix = sim.advance().unwrap();
        assert_eq!(fix.pointer, 6);
        assert_eq!(fix.step_index, 2);
        assert!(fix.finished);

        assert!(sim.advance().is_none());
    }

    #[test]
    fn empty_route_has_no_fix() {
        let mut route = route();
        route.geometry.clear();
        let mut sim = NavigationSimulation::new(&route, 0);

        assert!(sim.current().is_none());
        assert!(sim.advance().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn run_emits_fixes_until_the_end() {
        let fixes = NavigationSimulation::new(&route(), 4).run(DEFAULT_TICK);

        let mut pointers = vec![];
        while let Ok(fix) = fixes.recv().await {
            pointers.push(fix.pointer);
        }

        assert_eq!(pointers, vec![0, 4, 6]);
    }
}
