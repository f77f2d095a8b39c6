//! Bundler configuration generator for isomorphic applications.
//!
//! One generation function produces a coherent configuration tree for each
//! combination of [`BuildTarget`] (server or client) and [`BuildFlavor`]
//! (development or production). The crate only describes bundling jobs; the
//! bundler consumes the trees.
//!
//! # Example
//!
//! ```
//! use unipack_config::{BuildFlavor, BuildTarget, ProjectRoot, generate};
//!
//! let root = ProjectRoot::new("/srv/app").unwrap();
//! let tree = generate(BuildTarget::Server, BuildFlavor::Development, &root);
//!
//! assert_eq!(tree.entry, vec!["webpack-hot-middleware/client", "./server"]);
//! assert_eq!(tree.main_entry(), "./server");
//! ```

pub mod axis;
pub mod error;
pub mod registry;
pub mod settings;
pub mod tree;

// Re-export main types
pub use axis::{AxisSource, BuildFlavor, BuildTarget, Resolution, resolve};
pub use error::*;
pub use registry::{Registry, TargetPair};
pub use settings::{ProjectRoot, Settings};
pub use tree::*;
