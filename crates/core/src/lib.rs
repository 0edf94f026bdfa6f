// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod backend;
mod error;
mod issuer;
mod registry;
mod schedule;

#[cfg(test)]
mod tests;

pub use backend::Backend;
pub use error::{CoreError, ErrorKind};
pub use issuer::{EntityKind, IdentifierIssuer};
pub use registry::Registry;
pub use schedule::Schedule;
