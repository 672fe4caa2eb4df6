use glam::DVec2;
use std::f64::consts::TAU;

/// Lazily samples `divisions + 1` equally spaced points on a circle, starting
/// at angle 0. The sweep includes both ends, so the last point lands on the
/// first one again.
#[derive(Clone, Debug)]
pub struct CirclePoints {
    center: DVec2,
    radius: f64,
    angle_step: f64,
    next: u64,
    end: u64,
}

impl CirclePoints {
    pub fn new(center: DVec2, radius: f64, divisions: u32) -> Self {
        Self {
            center,
            radius,
            angle_step: TAU / divisions as f64,
            next: 0,
            end: divisions as u64 + 1,
        }
    }
}

impl Iterator for CirclePoints {
    type Item = DVec2;

    fn next(&mut self) -> Option<DVec2> {
        if self.next >= self.end {
            return None;
        }
        let angle = self.angle_step * self.next as f64;
        self.next += 1;
        Some(DVec2::new(angle.cos(), angle.sin()) * self.radius + self.center)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CirclePoints {}
