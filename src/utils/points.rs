/*
 * ruler
 *
 * Copyright 2022 - Manos Pitsidianakis
 *
 * This file is part of ruler.
 *
 * ruler is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * ruler is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with ruler. If not, see <http://www.gnu.org/licenses/>.
 */

use std::ops::{Add, Mul, Sub};

#[derive(Clone, Debug, Default, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> (f64, f64) {
        (p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point { x, y }
    }
}

impl Add<Self> for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        (self.x + rhs.x, self.y + rhs.y).into()
    }
}

impl Sub<Self> for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        (self.x - rhs.x, self.y - rhs.y).into()
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, p: Point) -> Self::Output {
        (p.x * self, p.y * self).into()
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, f: f64) -> Self::Output {
        (self.x * f, self.y * f).into()
    }
}

impl Mul<Point> for cairo::Matrix {
    type Output = Point;

    fn mul(self, point: Point) -> Self::Output {
        let (x, y) = self.transform_point(point.x, point.y);
        (x, y).into()
    }
}

/// Axis-aligned rectangle, `width` and `height` may be negative the way
/// canvas rectangles can be.
#[derive(Clone, Debug, Default, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle containing every point.
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::default();
        };
        let (mut min, mut max) = (first, first);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }

    /// Same area with non-negative `width` and `height`.
    pub fn normalized(&self) -> Self {
        Self::bounding(self.corners())
    }

    pub fn contains(&self, p: Point) -> bool {
        let r = self.normalized();
        (r.x..=r.x + r.width).contains(&p.x) && (r.y..=r.y + r.height).contains(&p.y)
    }

    pub fn transform(&self, m: cairo::Matrix) -> Self {
        Self::bounding(self.corners().map(|c| m * c))
    }
}

#[test]
fn test_rect_bounding() {
    let r = Rect::new(10.0, 5.0, -4.0, 2.0);
    assert_eq!(r.normalized(), Rect::new(6.0, 5.0, 4.0, 2.0));
    assert!(r.contains(Point::new(8.0, 6.0)));
    assert!(!r.contains(Point::new(11.0, 6.0)));

    let mut m = cairo::Matrix::identity();
    m.translate(0.0, 100.0);
    m.rotate(-std::f64::consts::FRAC_PI_2);
    let rotated = Rect::new(0.0, 0.0, 30.0, 10.0).transform(m);
    assert!((rotated.width - 10.0).abs() < 1e-9);
    assert!((rotated.height - 30.0).abs() < 1e-9);
    assert!((rotated.y - 70.0).abs() < 1e-9);
}
