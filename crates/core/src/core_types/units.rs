//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the physical quantities that
//! flow through the profile engine, preventing accidental mixing of
//! incompatible units (e.g., Celsius with Kelvin, or centimeters with
//! minutes).
//!
//! # Design Philosophy
//! - All quantities use f64: profile arrays are small and the Arrhenius
//!   exponential is sensitive to rounding near the front
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Cross-type operations encode the physics (velocity * time = distance,
//!   length / length = dimensionless ratio)
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Private inner fields with validated constructors where a physical
//!   bound exists (absolute zero, non-negative viscosity)
//!
//! # Usage
//! ```
//! use isc_sim_core::core_types::units::{Celsius, Kelvin, Centimeters};
//!
//! let temp = Celsius::new(60.0);
//! let kelvin: Kelvin = temp.into();
//! assert!((*kelvin - 333.15).abs() < 0.01);
//!
//! // Use standard min/max from Ord trait
//! let x1 = Centimeters::new(100.0);
//! let x2 = Centimeters::new(200.0);
//! assert_eq!(x1.min(x2), Centimeters::new(100.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
/// This is available since Rust 1.62 and handles NaN correctly
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE TYPES
// ============================================================================

/// Temperature in degrees Celsius
///
/// Bounded below by absolute zero; the validated constructor enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Celsius {
    /// Absolute zero in Celsius
    pub const ABSOLUTE_ZERO: Celsius = Celsius(-273.15);

    /// Celsius to Kelvin conversion offset (0°C = 273.15 K)
    const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    /// Create a new Celsius temperature. Asserts value >= absolute zero (-273.15°C).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= -Self::CELSIUS_KELVIN_OFFSET,
            "Celsius::new: value is below absolute zero (-273.15°C)"
        );
        Celsius(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to Kelvin
    #[inline]
    #[must_use]
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(self.0 + Self::CELSIUS_KELVIN_OFFSET)
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Kelvin {
        c.to_kelvin()
    }
}

impl From<f64> for Celsius {
    fn from(v: f64) -> Self {
        Celsius::new(v)
    }
}

impl From<Celsius> for f64 {
    fn from(c: Celsius) -> f64 {
        c.0
    }
}

// Celsius + CelsiusDelta = Celsius (adding a change to absolute temperature)
impl Add<CelsiusDelta> for Celsius {
    type Output = Celsius;
    fn add(self, rhs: CelsiusDelta) -> Celsius {
        let result = self.0 + rhs.0;
        assert!(
            result >= *Celsius::ABSOLUTE_ZERO,
            "Temperature below absolute zero: {result:.2}°C"
        );
        Celsius(result)
    }
}

// Celsius - Celsius = CelsiusDelta (difference between two absolute temperatures)
impl Sub for Celsius {
    type Output = CelsiusDelta;
    fn sub(self, rhs: Celsius) -> CelsiusDelta {
        // Result is a delta - can be any value
        CelsiusDelta(self.0 - rhs.0)
    }
}

impl PartialEq<f64> for Celsius {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for Celsius {
    fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Temperature difference/delta in Celsius
/// Can be any value (positive or negative)
/// Used for the peak-over-initial rise scaled by the ramp and tail factors
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CelsiusDelta(f64);

impl Eq for CelsiusDelta {}

impl PartialOrd for CelsiusDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CelsiusDelta {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl CelsiusDelta {
    /// Create a temperature delta (can be any value, positive or negative)
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        CelsiusDelta(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Deref for CelsiusDelta {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Mul<f64> for CelsiusDelta {
    type Output = CelsiusDelta;
    fn mul(self, rhs: f64) -> CelsiusDelta {
        CelsiusDelta(self.0 * rhs)
    }
}

impl fmt::Display for CelsiusDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

/// Temperature in Kelvin (absolute scale)
/// Used by the Arrhenius viscosity correlation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(f64);

impl Eq for Kelvin {}

impl PartialOrd for Kelvin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kelvin {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kelvin {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kelvin {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Kelvin = Kelvin(0.0);

    /// Create a new Kelvin temperature. Asserts value >= absolute zero (0 K).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "Kelvin::new: value is below absolute zero (0 K)"
        );
        Kelvin(value)
    }

    /// Convert to Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius::new(self.0 - Celsius::CELSIUS_KELVIN_OFFSET)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Celsius {
        k.to_celsius()
    }
}

impl From<Kelvin> for f64 {
    fn from(k: Kelvin) -> f64 {
        k.0
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} K", self.0)
    }
}

// ============================================================================
// DISTANCE AND TIME TYPES
// ============================================================================

/// Axial position or length along the core in centimeters
///
/// Signed: grid samples are always non-negative, but the tracked front
/// coordinate may sit behind the inlet (negative elapsed time) or past the
/// outlet, and zone arithmetic subtracts offsets freely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Centimeters(f64);

impl Eq for Centimeters {}

impl PartialOrd for Centimeters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Centimeters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Centimeters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Centimeters {
    /// Create a new position in centimeters
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Centimeters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Centimeters {
    fn from(v: f64) -> Self {
        Centimeters(v)
    }
}

impl From<Centimeters> for f64 {
    fn from(x: Centimeters) -> f64 {
        x.0
    }
}

impl Add for Centimeters {
    type Output = Centimeters;
    fn add(self, rhs: Centimeters) -> Centimeters {
        Centimeters(self.0 + rhs.0)
    }
}

impl Sub for Centimeters {
    type Output = Centimeters;
    fn sub(self, rhs: Centimeters) -> Centimeters {
        Centimeters(self.0 - rhs.0)
    }
}

impl Mul<f64> for Centimeters {
    type Output = Centimeters;
    fn mul(self, rhs: f64) -> Centimeters {
        Centimeters(self.0 * rhs)
    }
}

// Cross-type operation: length / length = dimensionless ratio
impl Div<Centimeters> for Centimeters {
    type Output = f64;
    fn div(self, rhs: Centimeters) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Centimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} cm", self.0)
    }
}

/// Elapsed time in minutes
///
/// Signed: the engine accepts negative query times and reports the
/// extrapolated front position without clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Minutes(f64);

impl Eq for Minutes {}

impl PartialOrd for Minutes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minutes {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Minutes {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Minutes {
    /// Create a new duration in minutes
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Minutes(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Minutes {
    fn from(v: f64) -> Self {
        Minutes(v)
    }
}

impl From<Minutes> for f64 {
    fn from(t: Minutes) -> f64 {
        t.0
    }
}

// Cross-type operation: time * velocity = distance
impl Mul<CentimetersPerMinute> for Minutes {
    type Output = Centimeters;
    fn mul(self, rhs: CentimetersPerMinute) -> Centimeters {
        Centimeters(self.0 * rhs.0)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} min", self.0)
    }
}

/// Front propagation velocity in centimeters per minute
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct CentimetersPerMinute(f64);

impl Eq for CentimetersPerMinute {}

impl PartialOrd for CentimetersPerMinute {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CentimetersPerMinute {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for CentimetersPerMinute {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl CentimetersPerMinute {
    /// Create a new velocity in centimeters per minute
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        CentimetersPerMinute(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for CentimetersPerMinute {
    fn from(v: f64) -> Self {
        CentimetersPerMinute(v)
    }
}

impl From<CentimetersPerMinute> for f64 {
    fn from(v: CentimetersPerMinute) -> f64 {
        v.0
    }
}

// Cross-type operation: velocity * time = distance
impl Mul<Minutes> for CentimetersPerMinute {
    type Output = Centimeters;
    fn mul(self, rhs: Minutes) -> Centimeters {
        Centimeters(self.0 * rhs.0)
    }
}

impl fmt::Display for CentimetersPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} cm/min", self.0)
    }
}

// ============================================================================
// VISCOSITY TYPES
// ============================================================================

/// Dynamic viscosity in centipoise (mPa·s)
///
/// The Arrhenius correlation only produces positive values; the validated
/// constructor rejects negatives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Centipoise(f64);

impl Eq for Centipoise {}

impl PartialOrd for Centipoise {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Centipoise {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Centipoise {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Centipoise {
    /// Create a new viscosity. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Centipoise::new: negative viscosity is invalid");
        Centipoise(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Centipoise> for f64 {
    fn from(mu: Centipoise) -> f64 {
        mu.0
    }
}

impl fmt::Display for Centipoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} cP", self.0)
    }
}
