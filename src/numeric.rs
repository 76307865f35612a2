use crate::error::Error;

use num_traits::{AsPrimitive, Zero};
use std::fmt::{Display, Formatter};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::str::FromStr;

/// Vector of three components of type `T`, ordered x, y, z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3<T> (pub [T; 3]);

pub type Double3 = Vec3<f64>;

impl<T> Vec3<T> {
    pub fn new(a: T, b: T, c: T) -> Self {
        Vec3([a, b, c])
    }

    /// Overwrite component `i`. Fails without touching the vector when
    /// `i` is not one of 0, 1, 2.
    pub fn set(&mut self, i: usize, value: T) -> Result<(), Error> {
        match self.0.get_mut(i) {
            Some(c) => { *c = value; Ok(()) },
            None => Err(Error::IndexOutOfRange(i))
        }
    }
}

impl<T: Copy> Vec3<T> {
    pub fn x(&self) -> T { self.0[0] }
    pub fn y(&self) -> T { self.0[1] }
    pub fn z(&self) -> T { self.0[2] }

    pub fn get(&self, i: usize) -> Result<T, Error> {
        self.0.get(i).copied().ok_or(Error::IndexOutOfRange(i))
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    pub fn dot(&self, other: &Self) -> T {
        dot(*self, *other)
    }

    pub fn magnitude(&self) -> f64
        where T: AsPrimitive<f64>
    {
        magnitude(*self)
    }
}

pub fn add<T: Copy + Add<Output = T>>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    let Vec3(a) = a;
    let Vec3(b) = b;
    Vec3([a[0] + b[0], a[1] + b[1], a[2] + b[2]])
}

pub fn subtract<T: Copy + Sub<Output = T>>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    let Vec3(a) = a;
    let Vec3(b) = b;
    Vec3([a[0] - b[0], a[1] - b[1], a[2] - b[2]])
}

/// Sum of component-wise products, in `T`'s own arithmetic.
pub fn dot<T: Copy + Add<Output = T> + Mul<Output = T>>(a: Vec3<T>, b: Vec3<T>) -> T {
    let Vec3(a) = a;
    let Vec3(b) = b;
    a[0]*b[0] + a[1]*b[1] + a[2]*b[2]
}

/// Euclidean length. Always computed in `f64`, whatever `T` is.
pub fn magnitude<T>(a: Vec3<T>) -> f64
    where T: Copy + Add<Output = T> + Mul<Output = T> + AsPrimitive<f64>
{
    let sqr: f64 = dot(a, a).as_();
    sqr.sqrt()
}

/// Human readable "x y z" rendering, same as `Display`.
pub fn format<T: Display>(a: Vec3<T>) -> String {
    a.to_string()
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        let Vec3(d) = self;
        &d[i]
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let Vec3(d) = self;
        &mut d[i]
    }
}

impl<T: Copy + Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;
    fn add(self, other: Self) -> Self {
        add(self, other)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;
    fn sub(self, other: Self) -> Self {
        subtract(self, other)
    }
}

impl<T: Zero + Copy> Zero for Vec3<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(T::is_zero)
    }
}

impl<T: Zero> Default for Vec3<T> {
    fn default() -> Self {
        Vec3([T::zero(), T::zero(), T::zero()])
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from(d: [T; 3]) -> Self {
        Vec3(d)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        v.0
    }
}

impl<T: Display> Display for Vec3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Vec3(d) = self;
        write!(f, "{} {} {}", d[0], d[1], d[2])
    }
}

impl<T> FromStr for Vec3<T>
    where T: FromStr,
          T::Err: Display
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(Error::Parse(
                format!("expected 3 components, found {} in {:?}", parts.len(), s)));
        }
        let component = |p: &str| p.parse::<T>()
            .map_err(|e| Error::Parse(format!("component {:?}: {}", p, e)));
        Ok(Vec3([component(parts[0])?, component(parts[1])?, component(parts[2])?]))
    }
}
