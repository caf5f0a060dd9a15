//! The submission container sent to the ClinVar API.
//!
//! Each `clinvarSubmission` entry must describe its variant(s) through exactly one of the
//! `variantSet`, `haplotypeSet`, `haplotypeSingleVariantSet`, `diplotypeSet`,
//! `compoundHeterozygoteSet`, `distinctChromosomesSet` or `phaseUnknownSet` fields. The wire
//! format expresses this as mutually exclusive optional fields; the check happens when the
//! container is turned into the internal model.

use serde::{Deserialize, Serialize};

use crate::vocab::{
    Assembly, Chromosome, CitationDb, ClinicalSignificanceDescription, ConditionDb,
    ModeOfInheritance, VariantType,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionClinvarDeletionAccessionSet {
    pub accession: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Request to delete previously submitted records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionClinvarDeletion {
    pub accession_set: Vec<SubmissionClinvarDeletionAccessionSet>,
}

/// Location of a variant on a chromosome.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionChromosomeCoordinates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<Assembly>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<Chromosome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_stop: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_stop: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_allele: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_length: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionVariantGene {
    /// NCBI Gene ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// A single variant, described by HGVS or by coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionVariant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chromosome_coordinates: Option<SubmissionChromosomeCoordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<Vec<SubmissionVariantGene>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hgvs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_copy_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_type: Option<VariantType>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionVariantSet {
    pub variant: Vec<SubmissionVariant>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPhaseUnknownSet {
    pub hgvs: String,
    pub variants: Vec<SubmissionVariant>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionClinicalFeature {
    pub clinical_features_affected_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Description of the individuals the variant was observed in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionObservedIn {
    pub affected_status: String,
    pub allele_origin: String,
    pub collection_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_features: Option<Vec<SubmissionClinicalFeature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_features_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_individuals: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub struct_var_method_type: Option<String>,
}

/// Haplotype; used with at least two variants for `haplotypeSet` and with exactly one for
/// `haplotypeSingleVariantSet`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionHaplotypeSet {
    pub hgvs: String,
    pub variants: Vec<SubmissionVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_allele_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDistinctChromosomesSet {
    pub hgvs: String,
    /// Has at least two elements.
    pub variants: Vec<SubmissionVariant>,
}

/// Entry of `diplotypeSet.haplotypeSets`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionHaplotypeSets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haplotype_set: Option<SubmissionHaplotypeSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haplotype_single_variant_set: Option<SubmissionHaplotypeSet>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDiplotypeSet {
    pub haplotype_sets: Vec<SubmissionHaplotypeSets>,
    pub hgvs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_allele_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCitation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<CitationDb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAssertionCriteria {
    pub citation: SubmissionCitation,
    pub method: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<ConditionDb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDrugResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db: Option<ConditionDb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<SubmissionCondition>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionConditionSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<SubmissionCondition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug_response: Option<Vec<SubmissionDrugResponse>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCompoundHeterozygoteSetVariantSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_set: Option<SubmissionVariantSet>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCompoundHeterozygoteSet {
    /// Older clients send this as `hvs`.
    #[serde(alias = "hvs")]
    pub hgvs: String,
    /// Must have two entries.
    pub variant_sets: Vec<SubmissionCompoundHeterozygoteSetVariantSet>,
}

/// The interpretation of the submitted variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionClinicalSignificance {
    pub clinical_significance_description: ClinicalSignificanceDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<Vec<SubmissionCitation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_assertion_score: Option<f64>,
    /// ISO date, e.g. `2022-12-31`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_last_evaluated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_of_drug_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation_of_other_clinical_significance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_of_inheritance: Option<ModeOfInheritance>,
}

/// One record of the submission container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionClinvarSubmission {
    pub clinical_significance: SubmissionClinicalSignificance,
    pub condition_set: SubmissionConditionSet,
    pub observed_in: Vec<SubmissionObservedIn>,
    pub record_status: String,
    pub release_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_criteria: Option<SubmissionAssertionCriteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinvar_accession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_heterozygote_set: Option<SubmissionCompoundHeterozygoteSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diplotype_set: Option<SubmissionDiplotypeSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct_chromosomes_set: Option<SubmissionDistinctChromosomesSet>,
    /// Has at least two elements in `variants`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haplotype_set: Option<SubmissionHaplotypeSet>,
    /// Has exactly one element in `variants`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haplotype_single_variant_set: Option<SubmissionHaplotypeSet>,
    #[serde(rename = "localID", default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_unknown_set: Option<SubmissionPhaseUnknownSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_set: Option<SubmissionVariantSet>,
}

/// Representation of the container for a submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionContainer {
    #[serde(rename = "behalfOrgID", default, skip_serializing_if = "Option::is_none")]
    pub behalf_org_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinvar_deletion: Option<SubmissionClinvarDeletion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinvar_submission: Option<Vec<SubmissionClinvarSubmission>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_name: Option<String>,
}
