/*!
Bitwise operations and named constants for unsigned bytes.

This crate provides the eight classic bitwise operations (AND, OR, XOR, NOT,
plus logical shifts and circular rotations in both directions) as pure
functions over `u8`, together with a named constant for each of the 256
possible byte values.

Every operation is total: any `u8` is a valid operand, shift and rotation
counts are reduced modulo 8 before use, and no input can cause a panic.
All functions are `const`, so they can be used to build lookup tables at
compile time.

## Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![no_std]
#![forbid(unsafe_code)]

pub mod consts;
mod ops;

pub use ops::{and, lrotate, lshift, not, or, rrotate, rshift, xor};
