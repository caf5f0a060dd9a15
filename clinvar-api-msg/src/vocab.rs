//! Closed vocabularies of the ClinVar submission API.
//!
//! Each enumeration maps one-to-one onto the strings the API sends and accepts. Matching is
//! case-sensitive and there is no catch-all member: decoding a value outside the set is an
//! error, both through serde and through [`FromStr`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// Declare a closed vocabulary: the enum, its serde mapping, `as_str`, `ALL`, `Display` and a
/// strict `FromStr`. Extra spellings after `|` are accepted on decode only.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal $(| $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string used by the ClinVar API for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = VocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(VocabularyError::UnknownValue {
                        vocabulary: $label,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Genome assembly of chromosome coordinates.
    Assembly ("assembly") {
        Grch38 => "GRCh38",
        Hg38 => "hg38",
        Grch37 => "GRCh37",
        Hg19 => "hg19",
        Ncbi36 => "NCBI36",
        Hg18 => "hg18",
    }
}

vocabulary! {
    /// Chromosome names as used in submitted coordinates (no `chr` prefix).
    Chromosome ("chromosome") {
        Chr1 => "1",
        Chr2 => "2",
        Chr3 => "3",
        Chr4 => "4",
        Chr5 => "5",
        Chr6 => "6",
        Chr7 => "7",
        Chr8 => "8",
        Chr9 => "9",
        Chr10 => "10",
        Chr11 => "11",
        Chr12 => "12",
        Chr13 => "13",
        Chr14 => "14",
        Chr15 => "15",
        Chr16 => "16",
        Chr17 => "17",
        Chr18 => "18",
        Chr19 => "19",
        Chr20 => "20",
        Chr21 => "21",
        Chr22 => "22",
        ChrX => "X",
        ChrY => "Y",
        ChrMT => "MT",
    }
}

vocabulary! {
    /// Structural variant type of a submitted variant.
    VariantType ("variant type") {
        Insertion => "Insertion",
        Deletion => "Deletion",
        Duplication => "Duplication",
        TandemDuplication => "Tandem duplication",
        CopyNumberLoss => "copy number loss",
        CopyNumberGain => "copy number gain",
        Inversion => "Inversion",
        Translocation => "Translocation",
        Complex => "Complex",
    }
}

vocabulary! {
    /// Database a citation refers to.
    CitationDb ("citation database") {
        PubMed => "PubMed",
        BookShelf => "BookShelf",
        Doi => "DOI",
        Pmc => "pmc",
    }
}

vocabulary! {
    /// Database a condition or drug response identifier refers to.
    ConditionDb ("condition database") {
        Omim => "OMIM",
        MedGen => "MedGen",
        Orphanet => "Orphanet",
        MeSH => "MeSH",
        Hp => "HP",
        Mondo => "MONDO",
    }
}

vocabulary! {
    /// Allowed values of `clinicalSignificanceDescription`.
    ClinicalSignificanceDescription ("clinical significance description") {
        Pathogenic => "Pathogenic",
        LikelyPathogenic => "Likely pathogenic",
        UncertainSignificance => "Uncertain significance",
        LikelyBenign => "Likely benign",
        Benign => "Benign",
        PathogenicLowPenetrance => "Pathogenic, low penetrance",
        UncertainRiskAllele => "Uncertain risk allele",
        LikelyPathogenicLowPenetrance => "Likely pathogenic, low penetrance",
        EstablishedRiskAllele => "Established risk allele",
        LikelyRiskAllele => "Likely risk allele",
        Affects => "affects",
        Association => "association",
        DrugResponse => "drug response",
        ConfersSensitivity => "confers sensitivity",
        Protective => "protective",
        Other => "other",
        NotProvided => "not provided",
    }
}

vocabulary! {
    /// Mode of inheritance attached to a clinical significance.
    ModeOfInheritance ("mode of inheritance") {
        AutosomalDominantInheritance => "Autosomal dominant inheritance",
        AutosomalRecessiveInheritance => "Autosomal recessive inheritance",
        MitochondrialInheritance => "Mitochondrial inheritance",
        SomaticMutation => "Somatic mutation",
        GeneticAnticipation => "Genetic anticipation",
        Sporadic => "Sporadic",
        SexLimitedAutosomalDominant => "Sex-limited autosomal dominant",
        XLinkedRecessiveInheritance => "X-linked recessive inheritance",
        XLinkedDominantInheritance => "X-linked dominant inheritance",
        YLinkedInheritance => "Y-linked inheritance",
        Other => "Other",
        XLinkedInheritance => "X-linked inheritance",
        Codominant => "Codominant",
        SemidominantInheritance => "Semidominant inheritance",
        AutosomalUnknown => "Autosomal unknown",
        AutosomalDominantInheritanceWithMaternalImprinting =>
            "Autosomal dominant inheritance with maternal imprinting",
        AutosomalDominantInheritanceWithPaternalImprinting =>
            "Autosomal dominant inheritance with paternal imprinting",
        MultifactorialInheritance => "Multifactorial inheritance",
        UnknownMechanism => "Unknown mechanism",
        OligogenicInheritance => "Oligogenic inheritance",
    }
}

vocabulary! {
    /// State of a submission action, of its responses, and of the objects they report on.
    ProcessingStatus ("processing status") {
        Submitted => "submitted",
        Processing => "processing",
        Processed => "processed",
        Error => "error",
    }
}

vocabulary! {
    /// Processing state of a whole submission batch in a summary response.
    BatchProcessingStatus ("batch processing status") {
        InProcessing => "In processing",
        Success => "Success",
        Error => "Error",
        PartialSuccess => "Partial success",
    }
}

vocabulary! {
    /// Release state of a whole submission batch in a summary response.
    BatchReleaseStatus ("batch release status") {
        Released => "Released",
        PartialReleased => "Partial released",
        /// Some summaries capitalise the second word. Both spellings decode to this value, which
        /// always encodes as `"Not released"`.
        NotReleased => "Not released" | "Not Released",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(serde_json::to_string(&Assembly::Grch38).unwrap(), "\"GRCh38\"")]
    #[case(serde_json::to_string(&Assembly::Hg19).unwrap(), "\"hg19\"")]
    #[case(serde_json::to_string(&Chromosome::ChrMT).unwrap(), "\"MT\"")]
    #[case(serde_json::to_string(&Chromosome::Chr7).unwrap(), "\"7\"")]
    #[case(serde_json::to_string(&VariantType::TandemDuplication).unwrap(), "\"Tandem duplication\"")]
    #[case(serde_json::to_string(&VariantType::CopyNumberGain).unwrap(), "\"copy number gain\"")]
    #[case(serde_json::to_string(&CitationDb::Pmc).unwrap(), "\"pmc\"")]
    #[case(serde_json::to_string(&ConditionDb::MeSH).unwrap(), "\"MeSH\"")]
    fn test_serialize_exact_api_strings(#[case] json: String, #[case] expected: &str) {
        assert_eq!(json, expected);
    }

    #[rstest]
    fn test_vocabulary_sizes() {
        assert_eq!(Assembly::ALL.len(), 6);
        assert_eq!(Chromosome::ALL.len(), 25);
        assert_eq!(VariantType::ALL.len(), 9);
        assert_eq!(CitationDb::ALL.len(), 4);
        assert_eq!(ConditionDb::ALL.len(), 6);
        assert_eq!(ClinicalSignificanceDescription::ALL.len(), 17);
        assert_eq!(ModeOfInheritance::ALL.len(), 20);
        assert_eq!(ProcessingStatus::ALL.len(), 4);
    }

    #[rstest]
    fn test_from_str_matches_as_str() {
        for value in ClinicalSignificanceDescription::ALL {
            assert_eq!(
                value.as_str().parse::<ClinicalSignificanceDescription>(),
                Ok(*value)
            );
        }
        for value in ModeOfInheritance::ALL {
            assert_eq!(value.as_str().parse::<ModeOfInheritance>(), Ok(*value));
        }
    }

    #[rstest]
    fn test_serde_matches_as_str() {
        for value in ModeOfInheritance::ALL {
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.as_str()));
            let back: ModeOfInheritance = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *value);
        }
    }

    #[rstest]
    #[case("grch38")]
    #[case("GRCH38")]
    #[case("chr1")]
    #[case("")]
    fn test_from_str_is_case_sensitive(#[case] raw: &str) {
        let result = raw.parse::<Assembly>();
        assert_eq!(
            result,
            Err(VocabularyError::UnknownValue {
                vocabulary: "assembly",
                value: raw.to_string(),
            })
        );
    }

    #[rstest]
    fn test_deserialize_rejects_unknown_value() {
        let result = serde_json::from_str::<ProcessingStatus>("\"bogus\"");
        assert!(result.is_err());
        let result = serde_json::from_str::<ClinicalSignificanceDescription>("\"pathogenic\"");
        assert!(result.is_err());
    }

    #[rstest]
    #[case("\"Not released\"")]
    #[case("\"Not Released\"")]
    fn test_batch_release_status_spellings(#[case] json: &str) {
        let status: BatchReleaseStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status, BatchReleaseStatus::NotReleased);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"Not released\"");
        assert_eq!(
            "Not Released".parse::<BatchReleaseStatus>(),
            Ok(BatchReleaseStatus::NotReleased)
        );
    }

    #[rstest]
    fn test_display() {
        assert_eq!(ProcessingStatus::Processed.to_string(), "processed");
        assert_eq!(BatchProcessingStatus::PartialSuccess.to_string(), "Partial success");
        assert_eq!(
            ClinicalSignificanceDescription::LikelyPathogenicLowPenetrance.to_string(),
            "Likely pathogenic, low penetrance"
        );
    }
}
