mod never;
mod on_threshold;
mod policy;
mod reclaimer;
mod utilization;

pub use never::MemoryReclaimNever;
pub use on_threshold::MemoryReclaimOnThreshold;
pub use policy::MemoryPolicy;
pub use reclaimer::MemoryReclaimer;
pub use utilization::Utilization;
