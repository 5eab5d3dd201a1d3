pub use clusters::{ClusterDescription, ClusterSummary};
pub use images::{ImageInfo, MachineImage};
pub use instances::{CloudInstance, NodeInstance};
pub use jobs::JobSummary;
pub use stackevents::StackEvent;

pub mod clusters;
pub mod images;
pub mod instances;
pub mod jobs;
pub mod stackevents;
