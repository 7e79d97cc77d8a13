//! # Trilateral - triangle classification from three side lengths.
//!
//! ## Overview
//!
//! This library classifies a triangle by its three side lengths into three
//! categories, after validating that the sides can form a triangle at all:
//!
//! - **Equilateral**: all three sides equal
//! - **Isosceles**: exactly two sides equal
//! - **Scalene**: no two sides equal
//!
//! Validation is strict and total. Sides must be strictly positive and
//! finite, pairwise sums must not overflow the numeric range, and each
//! pairwise sum must strictly exceed the remaining side (a degenerate,
//! collinear triangle is rejected). Any failing check aborts classification
//! with a typed error; there is no partial result.
//!
//! The classifier is generic over the [`SideLength`] trait, so
//! floating-point sides (`f32`, `f64`) and fixed-point decimal sides
//! (`rust_decimal::Decimal`, behind the `decimal` feature) share one
//! implementation. Representations without infinities or NaN skip the
//! finiteness check through the trait's default method.
//!
//! ## Quick Start
//!
//! ```rust
//! use trilateral::{classify, ClassifyError, ErrorKind, TriangleKind};
//!
//! assert_eq!(classify(3.0, 3.0, 3.0), Ok(TriangleKind::Equilateral));
//! assert_eq!(classify(3.0, 3.0, 2.0), Ok(TriangleKind::Isosceles));
//! assert_eq!(classify(3.0, 4.0, 5.0), Ok(TriangleKind::Scalene));
//!
//! // 1 + 1 == 2: collinear points, not a triangle.
//! let error = classify(1.0, 1.0, 2.0).unwrap_err();
//! assert_eq!(error, ClassifyError::NotATriangle);
//! assert_eq!(error.kind(), ErrorKind::InvalidArgument);
//! ```
//!
//! ## Feature Flags
//!
//! - `std`: Enable standard library support (enabled by default). Disable
//!   for `no_std` environments.
//! - `serde`: Enable serialization/deserialization for [`TriangleKind`] and
//!   [`Triangle`]
//! - `decimal`: Implement [`SideLength`] for `rust_decimal::Decimal`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Core types and operations for triangle classification.
pub mod triangle;

pub use triangle::{
    ClassifyError, ErrorKind, InvalidKindValue, ParseTriangleKindError, Side, SideLength,
    Triangle, TriangleKind, classify,
};
