//! Moment and sequence helpers shared by the solvers.

mod moments;

pub use moments::{center_vector, mean, unzip_pairs, CenteredMoments, RawSums};
