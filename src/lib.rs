// src/lib.rs

//! Alpha shapes for planar point clouds.
//!
//! ```no_run
//! use alpha_shaper::prelude::*;
//!
//! let points = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0), (0.5, 0.5)];
//! let mut shaper = AlphaShaper::new(points)?;
//! let optimum = shaper.optimize()?;
//! println!("alpha = {}, area = {}", optimum.alpha, optimum.shape.area());
//! # Ok::<(), AlphaError>(())
//! ```

pub mod debug;
pub mod math;

pub use math::prelude;
pub use math::{AlphaError, AlphaResult};
