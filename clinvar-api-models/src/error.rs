use thiserror::Error;

/// Error raised when a wire record cannot be turned into its model counterpart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(
        "Submission has no variant description, expected exactly one of compoundHeterozygoteSet, \
         diplotypeSet, distinctChromosomesSet, haplotypeSet, haplotypeSingleVariantSet, \
         phaseUnknownSet or variantSet"
    )]
    NoVariantShape,

    #[error("Submission has more than one variant description: {}", .shapes.join(", "))]
    MultipleVariantShapes { shapes: Vec<&'static str> },

    #[error("Invalid submission at index {index}: {source}")]
    Submission {
        index: usize,
        #[source]
        source: Box<ConversionError>,
    },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
