use thiserror::Error;

#[derive(Error, Debug)]
pub enum StecuError {
    /// Represents an unsupported carrier media. For example a JPEG handed in for unveiling
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// The carrier image has fewer pixels than the codec needs to work reliably
    #[error(
        "Size Error: The provided image with the dimensions {width}x{height} has {pixels} pixels, at least {minimum} pixels are required"
    )]
    ImageTooSmall {
        width: u32,
        height: u32,
        pixels: usize,
        minimum: usize,
    },

    /// The framed message does not fit into the usable coefficients of the image
    #[error(
        "Capacity Error: The framed message needs {required} bits but the image accepts only {available} bits.
                At most {max_chars} characters can be hidden in this image"
    )]
    CapacityExceeded {
        required: usize,
        available: usize,
        max_chars: usize,
    },

    /// No start marker could be found, the image most likely carries no message
    #[error("No start marker found, the image does not seem to contain a secret message")]
    MarkerNotFound,

    /// Represents a message that cannot be mapped to or from 8-bit character codes
    #[error("Format error: {0}")]
    FormatError(String),

    /// A sample matrix was merged into an image of a different size
    #[error("Dimension error: the matrix is {matrix_width}x{matrix_height} but the image is {image_width}x{image_height}")]
    DimensionMismatch {
        matrix_width: usize,
        matrix_height: usize,
        image_width: u32,
        image_height: u32,
    },

    /// Start and end marker share the same bit pattern
    #[error("Start and end marker must use distinct bit patterns, both are {0:#010x}")]
    InvalidMarkers(u32),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
