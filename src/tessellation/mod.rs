mod triangulate;

pub use triangulate::{triangle_count, triangulate, Triangle, QUAD_SPLIT};
