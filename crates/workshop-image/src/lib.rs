//! Workshop container image automation
//!
//! This crate provides the two fixed docker invocation sequences used to
//! publish the pyCSEP Quakeworx workshop image: building the image with a
//! date-derived build tag, and pushing the tagged image to the sceccode
//! registry namespace.

pub mod builder;
pub mod docker;
pub mod error;
pub mod pusher;
pub mod tag;

pub use builder::{IMAGE_NAME, ImageBuilder, REGISTRY_IMAGE, build_args, tag_args};
pub use docker::DockerCli;
pub use error::{BuildError, BuildResult};
pub use pusher::{ImagePusher, push_args};
