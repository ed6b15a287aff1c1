//! Static yoga pose library and the `/api/yoga` routes.

pub mod library;
pub mod router;

pub use library::{all_poses, category_counts, pose, search, PoseFilter, YogaPose, ALL_DOSHAS};
pub use router::yoga_router;
