//! Scripted pen gestures: straight strokes and button clicks.

use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crate::pen::{ButtonHandler, MouseButton, PressureHandler, VirtualTablet};

/// A position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("Invalid point '{}'. Expected X,Y", s))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| format!("Invalid X coordinate '{}'", x.trim()))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| format!("Invalid Y coordinate '{}'", y.trim()))?;
        Ok(Point::new(x, y))
    }
}

/// `steps + 1` evenly spaced points from `from` to `to`, both included.
pub fn interpolate(from: Point, to: Point, steps: u32) -> Vec<Point> {
    if steps == 0 {
        return vec![from];
    }

    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32;
            Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
        })
        .collect()
}

/// Triangular pressure profile: 0 at both ends of the stroke, `peak` in the middle.
pub fn pressure_ramp(peak: f32, index: usize, count: usize) -> f32 {
    if count < 2 {
        return peak;
    }
    let t = index as f32 / (count - 1) as f32;
    peak * (1.0 - (2.0 * t - 1.0).abs())
}

/// Draw a straight line with the pen, pressing harder towards the middle.
///
/// The pen is always lifted (pressure 0) when this returns.
pub fn draw_stroke<P>(pen: &mut P, from: Point, to: Point, steps: u32, peak: f32, interval: Duration)
where
    P: VirtualTablet + PressureHandler,
{
    let points = interpolate(from, to, steps);
    log::info!(
        "Drawing stroke {} -> {} ({} samples, peak pressure {})",
        from,
        to,
        points.len(),
        peak
    );

    pen.set_position(from.x, from.y);
    pen.set_pressure(0.0);

    let count = points.len();
    for (i, point) in points.into_iter().enumerate() {
        pen.set_position(point.x, point.y);
        pen.set_pressure(pressure_ramp(peak, i, count));
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    pen.set_pressure(0.0);
}

/// Move to `at` and press then release `button`.
pub fn click<P>(pen: &mut P, at: Point, button: MouseButton)
where
    P: VirtualTablet + ButtonHandler,
{
    log::info!("Clicking {:?} at {}", button, at);
    pen.set_position(at.x, at.y);
    pen.button_down(button);
    pen.button_up(button);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Position(f32, f32),
        Pressure(f32),
        Down(MouseButton),
        Up(MouseButton),
    }

    #[derive(Default)]
    struct Script(Vec<Call>);

    impl VirtualTablet for Script {
        fn set_position(&mut self, x: f32, y: f32) {
            self.0.push(Call::Position(x, y));
        }
    }

    impl PressureHandler for Script {
        fn set_pressure(&mut self, pressure: f32) {
            self.0.push(Call::Pressure(pressure));
        }
    }

    impl ButtonHandler for Script {
        fn button_down(&mut self, button: MouseButton) {
            self.0.push(Call::Down(button));
        }

        fn button_up(&mut self, button: MouseButton) {
            self.0.push(Call::Up(button));
        }
    }

    #[test]
    fn test_interpolate() {
        let points = interpolate(Point::new(0.0, 0.0), Point::new(100.0, 50.0), 4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[2], Point::new(50.0, 25.0));
        assert_eq!(points[4], Point::new(100.0, 50.0));

        assert_eq!(interpolate(Point::new(3.0, 4.0), Point::new(9.0, 9.0), 0), vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_pressure_ramp() {
        assert_eq!(pressure_ramp(0.8, 0, 5), 0.0);
        assert_eq!(pressure_ramp(0.8, 2, 5), 0.8);
        assert_eq!(pressure_ramp(0.8, 4, 5), 0.0);
        assert!((pressure_ramp(0.8, 1, 5) - 0.4).abs() < 1e-6);
        assert_eq!(pressure_ramp(0.5, 0, 1), 0.5);
    }

    #[test]
    fn stroke_ends_lifted() {
        let mut script = Script::default();
        draw_stroke(
            &mut script,
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            2,
            1.0,
            Duration::ZERO,
        );

        assert_eq!(
            script.0,
            vec![
                Call::Position(0.0, 0.0),
                Call::Pressure(0.0),
                Call::Position(0.0, 0.0),
                Call::Pressure(0.0),
                Call::Position(5.0, 0.0),
                Call::Pressure(1.0),
                Call::Position(10.0, 0.0),
                Call::Pressure(0.0),
                Call::Pressure(0.0),
            ]
        );
    }

    #[test]
    fn click_positions_then_presses() {
        let mut script = Script::default();
        click(&mut script, Point::new(7.0, 8.0), MouseButton::Right);
        assert_eq!(
            script.0,
            vec![
                Call::Position(7.0, 8.0),
                Call::Down(MouseButton::Right),
                Call::Up(MouseButton::Right),
            ]
        );
    }

    #[test]
    fn test_point_from_str() {
        assert_eq!("10,20".parse::<Point>().unwrap(), Point::new(10.0, 20.0));
        assert_eq!(" 1.5 , 2 ".parse::<Point>().unwrap(), Point::new(1.5, 2.0));
        assert!("10".parse::<Point>().is_err());
        assert!("a,2".parse::<Point>().is_err());
    }
}
