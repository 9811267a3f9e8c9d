use crate::framing::Markers;
use crate::media::image::{CapacityPolicy, Channel, RecoveryThresholds};

/// Default quantization step for the detail coefficients
pub const DEFAULT_QUANTIZATION_STEP: f64 = 4.0;

/// Codec configuration for wavelet encoding/decoding
///
/// Hiding and unveiling must use the same channel, markers and quantization step.
#[derive(Debug, Clone, PartialEq)]
pub struct CodecOptions {
    /// The color channel carrying the message, green by default
    pub channel: Channel,

    /// Start and end marker delimiting the payload
    pub markers: Markers,

    /// Coefficients are quantized to multiples of this step, a `1` bit adds half a step.
    /// Larger steps survive more noise but distort the image more.
    pub quantization_step: f64,

    /// Minimum image size and usable share of the coefficients
    pub capacity: CapacityPolicy,

    /// Marker tolerances and fallback limits used when unveiling
    pub recovery: RecoveryThresholds,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            channel: Channel::default(),
            markers: Markers::default(),
            quantization_step: DEFAULT_QUANTIZATION_STEP,
            capacity: CapacityPolicy::default(),
            recovery: RecoveryThresholds::default(),
        }
    }
}

impl CodecOptions {
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_quantization_step(mut self, step: f64) -> Self {
        self.quantization_step = step;
        self
    }

    pub fn with_capacity_policy(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_recovery_thresholds(mut self, recovery: RecoveryThresholds) -> Self {
        self.recovery = recovery;
        self
    }
}
