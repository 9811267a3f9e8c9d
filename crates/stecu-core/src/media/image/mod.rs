pub mod capacity;
pub mod channel;
pub mod dwt_codec;
pub mod embed;
pub mod extract;
pub mod plan;
pub mod transform;

pub use capacity::CapacityPolicy;
pub use channel::{Channel, Matrix};
pub use dwt_codec::DwtCodec;
pub use extract::{Boundary, Extraction, RecoveryThresholds};
pub use plan::EmbeddingPlan;
pub use transform::{CoefficientSubbands, Subband};
